//! Battle resolution: a team against a stage, settled into a result record
//! and a [`PlayerDelta`](crate::state::PlayerDelta).

mod drops;
mod engine;
mod result;
mod rewards;

#[cfg(test)]
mod tests;

pub use drops::{DropTable, IndependentDrops, ItemDrop, NoDrops};
pub use engine::{BattleContext, BattleError, BattleOutcome, BattleRequest, resolve_stage};
pub use result::BattleResult;
pub use rewards::Rewards;
