use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::state::{EnemyTypeId, ItemTemplateId, StageId};

use super::heroes::Skill;

/// Read-only access to stages and the enemies they field.
pub trait StageOracle: Send + Sync {
    fn stage(&self, id: &StageId) -> Option<StageDefinition>;

    fn enemy(&self, id: &EnemyTypeId) -> Option<EnemyTemplate>;

    /// Every stage id in the catalog, sorted.
    fn stage_ids(&self) -> Vec<StageId>;
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub id: EnemyTypeId,
    pub name: String,
    pub hp: u32,
    pub atk: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Vec<Skill>,
}

impl EnemyTemplate {
    pub fn combat_skills(&self) -> Vec<Skill> {
        if self.skills.is_empty() {
            vec![Skill::basic_attack()]
        } else {
            self.skills.clone()
        }
    }
}

/// One possible item drop on victory.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropEntry {
    pub item: ItemTemplateId,
    /// Probability in `[0, 1]` that this entry drops.
    pub chance: f64,
    #[cfg_attr(feature = "serde", serde(default = "DropEntry::default_quantity"))]
    pub quantity: u32,
}

impl DropEntry {
    fn default_quantity() -> u32 {
        1
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageDefinition {
    pub id: StageId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Enemy types in position order (slot 1 first).
    pub enemies: ArrayVec<EnemyTypeId, { GameConfig::MAX_STAGE_ENEMIES }>,
    pub gold_reward: u64,
    pub exp_reward: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub drops: Vec<DropEntry>,
}
