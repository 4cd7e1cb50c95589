//! Event payloads for each topic.

use game_core::combat::Outcome;
use game_core::gacha::{PullKind, SummonResult};
use game_core::state::{
    BannerId, BattleId, HeroId, MissionId, MissionTemplateId, StageId, UserId,
};
use serde::{Deserialize, Serialize};

/// Summon activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GachaEvent {
    /// A summon committed.
    Summoned {
        user_id: UserId,
        banner_id: BannerId,
        pull_kind: PullKind,
        results: Vec<SummonResult>,
    },

    /// A summon was rejected before any state changed.
    Rejected {
        user_id: UserId,
        banner_id: BannerId,
        code: String,
    },
}

/// Stage battle activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BattleEvent {
    Resolved {
        user_id: UserId,
        battle_id: BattleId,
        stage_id: StageId,
        outcome: Outcome,
        turns: usize,
    },

    Rejected {
        user_id: UserId,
        stage_id: StageId,
        code: String,
    },
}

/// Missions, idle rewards and hero growth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ProgressionEvent {
    MissionAssigned {
        user_id: UserId,
        mission_id: MissionId,
        template_id: MissionTemplateId,
    },

    MissionCompleted {
        user_id: UserId,
        mission_id: MissionId,
        template_id: MissionTemplateId,
    },

    MissionClaimed {
        user_id: UserId,
        mission_id: MissionId,
    },

    IdleClaimed {
        user_id: UserId,
        minutes: u64,
        gold: u64,
        experience: u64,
    },

    HeroLeveled {
        user_id: UserId,
        hero_id: HeroId,
        old_level: u32,
        new_level: u32,
    },
}
