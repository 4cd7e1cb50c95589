//! Game operations exposed by [`Runtime`](crate::Runtime).
//!
//! Each mutating operation follows the same shape: take the user's lock,
//! load state, run the pure engine, commit the delta, then log and publish.

mod battle;
mod idle;
mod missions;
mod players;
mod summon;

pub use battle::TeamSelection;
