//! Runtime orchestration for the game engines.
//!
//! This crate wires catalog oracles, player repositories and per-user locks
//! around the pure engines in `game-core`. Consumers build a [`Runtime`] and
//! call its async operations: summon, battle, missions and idle rewards.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the error types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`oracle`] and [`repository`] provide data adapters reused by other crates
pub mod api;
pub mod events;
pub mod oracle;
pub mod repository;
pub mod runtime;

mod clock;
mod ids;
mod locks;
mod services;

pub use api::{Result, RuntimeError};
pub use clock::SystemClock;
pub use events::{BattleEvent, Event, EventBus, GachaEvent, ProgressionEvent, Topic};
pub use ids::AtomicIdSource;
pub use locks::UserLocks;
pub use oracle::{
    BannerOracleImpl, ConfigOracleImpl, HeroOracleImpl, ItemOracleImpl, MissionOracleImpl,
    OracleManager, StageOracleImpl,
};
pub use repository::{
    BattleRecord, InMemoryPlayerRepository, PlayerRepository, RepositoryError,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use services::TeamSelection;
