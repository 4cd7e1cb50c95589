//! Stored record shapes that differ from the core result types.

use chrono::{DateTime, Utc};
use game_core::battle::{BattleResult, Rewards};
use game_core::combat::{BattleTurn, Outcome};
use game_core::progression::LevelChange;
use game_core::state::{BattleId, HeroId, StageId, TeamId, UserId};
use serde::{Deserialize, Serialize};

use super::Result;

/// Persisted battle. Rewards are kept as an opaque JSON blob; everything
/// else stays structured so history queries can filter without decoding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleRecord {
    pub id: BattleId,
    pub user_id: UserId,
    pub team_id: Option<TeamId>,
    pub heroes: Vec<HeroId>,
    pub stage_id: StageId,
    pub outcome: Outcome,
    pub timed_out: bool,
    pub log: Vec<BattleTurn>,
    pub rewards_json: String,
    pub level_changes: Vec<LevelChange>,
    pub created_at: DateTime<Utc>,
}

impl BattleRecord {
    pub fn encode(result: &BattleResult) -> Result<Self> {
        Ok(Self {
            id: result.id.clone(),
            user_id: result.user_id.clone(),
            team_id: result.team_id.clone(),
            heroes: result.heroes.clone(),
            stage_id: result.stage_id.clone(),
            outcome: result.outcome,
            timed_out: result.timed_out,
            log: result.log.clone(),
            rewards_json: serde_json::to_string(&result.rewards)?,
            level_changes: result.level_changes.clone(),
            created_at: result.created_at,
        })
    }

    pub fn rewards(&self) -> Result<Rewards> {
        Ok(serde_json::from_str(&self.rewards_json)?)
    }

    pub fn decode(&self) -> Result<BattleResult> {
        Ok(BattleResult {
            id: self.id.clone(),
            user_id: self.user_id.clone(),
            team_id: self.team_id.clone(),
            heroes: self.heroes.clone(),
            stage_id: self.stage_id.clone(),
            outcome: self.outcome,
            timed_out: self.timed_out,
            log: self.log.clone(),
            rewards: self.rewards()?,
            level_changes: self.level_changes.clone(),
            created_at: self.created_at,
        })
    }
}
