use chrono::{DateTime, Utc};

use crate::state::{BannerId, UserId};

/// Pity bookkeeping for one (user, banner) pair.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummonSession {
    pub user_id: UserId,
    pub banner_id: BannerId,
    /// Pulls ever resolved on this banner.
    pub pull_count: u32,
    /// `pull_count` at the most recent top-rarity result, 0 if never.
    pub last_top_rarity_at: u32,
    /// Next top-rarity result is forced to be featured.
    pub has_guarantee: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub last_free_summon: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SummonSession {
    pub fn new(user_id: UserId, banner_id: BannerId, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            banner_id,
            pull_count: 0,
            last_top_rarity_at: 0,
            has_guarantee: false,
            last_free_summon: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Pulls since the last top-rarity result. Derived, never stored.
    pub fn current_pity(&self) -> u32 {
        self.pull_count.saturating_sub(self.last_top_rarity_at)
    }

    /// True when no free summon was claimed on the current UTC day.
    pub fn can_claim_free_summon(&self, now: DateTime<Utc>) -> bool {
        match self.last_free_summon {
            None => true,
            Some(last) => last.date_naive() < now.date_naive(),
        }
    }

    pub fn record_free_summon(&mut self, now: DateTime<Utc>) {
        self.last_free_summon = Some(now);
        self.updated_at = now;
    }
}
