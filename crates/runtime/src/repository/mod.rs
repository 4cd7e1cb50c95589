//! Repository layer for player-owned data.
//!
//! Repositories hold what changes during play: wallets, heroes, items,
//! sessions, teams, missions, and the append-only result logs.
//!
//! Static game content (banners, heroes, stages) is handled by Oracles, not
//! Repositories.

mod error;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use memory::InMemoryPlayerRepository;
pub use traits::PlayerRepository;
pub use types::BattleRecord;
