use chrono::{DateTime, Utc};

use crate::config::IdleConfig;

/// Rewards accrued while the player was away.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdleRewards {
    /// Whole minutes counted, after the cap.
    pub minutes: u64,
    pub gold: u64,
    pub experience: u64,
}

impl IdleRewards {
    pub fn is_empty(&self) -> bool {
        self.gold == 0 && self.experience == 0
    }
}

/// Minutes between `last_claim` and `now`, capped at `max_idle_hours`, times
/// the per-minute rates. A first claim (no `last_claim`) earns nothing and
/// only starts the clock.
pub fn idle_rewards(
    last_claim: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    config: &IdleConfig,
) -> IdleRewards {
    let Some(last_claim) = last_claim else {
        return IdleRewards::default();
    };
    let elapsed = (now - last_claim).num_minutes();
    if elapsed <= 0 {
        return IdleRewards::default();
    }
    let cap = config.max_idle_hours as u64 * 60;
    let minutes = (elapsed as u64).min(cap);
    IdleRewards {
        minutes,
        gold: minutes * config.gold_per_minute as u64,
        experience: minutes * config.exp_per_minute as u64,
    }
}
