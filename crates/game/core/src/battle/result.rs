use chrono::{DateTime, Utc};

use crate::combat::{BattleTurn, Outcome};
use crate::progression::LevelChange;
use crate::state::{BattleId, HeroId, StageId, TeamId, UserId};

use super::rewards::Rewards;

/// Immutable record of one resolved battle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleResult {
    pub id: BattleId,
    pub user_id: UserId,
    /// Saved team the fight was started from, if any.
    pub team_id: Option<TeamId>,
    /// Fielded heroes in position order.
    pub heroes: Vec<HeroId>,
    pub stage_id: StageId,
    pub outcome: Outcome,
    #[cfg_attr(feature = "serde", serde(default))]
    pub timed_out: bool,
    pub log: Vec<BattleTurn>,
    pub rewards: Rewards,
    /// Progression of every hero that received experience.
    pub level_changes: Vec<LevelChange>,
    pub created_at: DateTime<Utc>,
}

impl BattleResult {
    pub fn is_victory(&self) -> bool {
        self.outcome == Outcome::Victory
    }

    pub fn turn_count(&self) -> usize {
        self.log.len()
    }
}
