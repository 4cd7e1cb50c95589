use crate::state::{ItemTemplateId, MissionTemplateId};

/// Read-only access to mission templates.
pub trait MissionOracle: Send + Sync {
    fn mission_template(&self, id: &MissionTemplateId) -> Option<MissionTemplate>;

    /// Every mission template id in the catalog, sorted.
    fn mission_template_ids(&self) -> Vec<MissionTemplateId>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MissionKind {
    /// Expires at the next UTC midnight.
    Daily,
    /// Expires at UTC midnight seven days after assignment.
    Weekly,
    Story,
    Achievement,
}

/// What a mission counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Requirement {
    CompleteBattles,
    WinBattles,
    KillEnemies,
    LevelUpHero,
    OwnHeroes,
    MaxLevelHero,
    CollectItems,
    EquipItems,
    UpgradeItems,
    SpendGold,
    SpendGems,
    SummonHeroes,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MissionRewards {
    pub gold: u64,
    pub gems: u64,
    pub experience: u32,
    pub items: Vec<ItemTemplateId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MissionTemplate {
    pub id: MissionTemplateId,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub kind: MissionKind,
    pub requirement: Requirement,
    pub target_value: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rewards: MissionRewards,
}
