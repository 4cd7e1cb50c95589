//! Victory loot, rolled separately from the gacha.
use crate::env::{RngOracle, StageDefinition};
use crate::state::ItemTemplateId;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDrop {
    pub template: ItemTemplateId,
    pub quantity: u32,
}

/// Decides which items a won stage hands out.
pub trait DropTable: Send + Sync {
    fn roll(&self, stage: &StageDefinition, rng: &mut dyn RngOracle) -> Vec<ItemDrop>;

    /// Returns the table name for debugging and logging.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str {
        "No description available"
    }
}

/// Rolls every entry of the stage's drop list on its own, in list order.
#[derive(Clone, Copy, Debug, Default)]
pub struct IndependentDrops;

impl DropTable for IndependentDrops {
    fn roll(&self, stage: &StageDefinition, rng: &mut dyn RngOracle) -> Vec<ItemDrop> {
        stage
            .drops
            .iter()
            .filter(|entry| entry.quantity > 0 && rng.chance(entry.chance))
            .map(|entry| ItemDrop {
                template: entry.item.clone(),
                quantity: entry.quantity,
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "independent"
    }

    fn description(&self) -> &'static str {
        "Each stage drop entry succeeds with its own probability"
    }
}

/// Never drops anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDrops;

impl DropTable for NoDrops {
    fn roll(&self, _stage: &StageDefinition, _rng: &mut dyn RngOracle) -> Vec<ItemDrop> {
        Vec::new()
    }

    fn name(&self) -> &'static str {
        "none"
    }
}
