//! Hero leveling, mission lifecycle, idle accrual, and reward payouts.
//!
//! Both engines apply these rules when granting rewards.
mod idle;
mod leveling;
mod missions;
mod rewards;

pub use idle::{IdleRewards, idle_rewards};
pub use leveling::{DerivedStats, LevelChange, derived_stats, level_for_experience};
pub use missions::{
    MissionError, MissionProgressView, ProgressEvent, advance_missions, progress_for,
};
pub use rewards::{
    IdleClaim, MissionClaim, claim_idle, claim_mission, distribute_experience, split_experience,
};
