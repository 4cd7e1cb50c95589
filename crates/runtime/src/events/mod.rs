//! Topic-based event bus for runtime events.
//!
//! Services publish after a commit succeeds (or after a rejection), so a
//! subscriber never sees an event for state that was not persisted.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{BattleEvent, GachaEvent, ProgressionEvent};
