//! Stage oracle implementation for runtime.

use std::collections::BTreeMap;

use game_core::env::{EnemyTemplate, StageDefinition, StageOracle};
use game_core::state::{EnemyTypeId, StageId};

pub struct StageOracleImpl {
    stages: BTreeMap<StageId, StageDefinition>,
    enemies: BTreeMap<EnemyTypeId, EnemyTemplate>,
}

impl StageOracleImpl {
    pub fn new(
        stages: impl IntoIterator<Item = StageDefinition>,
        enemies: impl IntoIterator<Item = EnemyTemplate>,
    ) -> Self {
        Self {
            stages: stages
                .into_iter()
                .map(|stage| (stage.id.clone(), stage))
                .collect(),
            enemies: enemies
                .into_iter()
                .map(|enemy| (enemy.id.clone(), enemy))
                .collect(),
        }
    }
}

impl StageOracle for StageOracleImpl {
    fn stage(&self, id: &StageId) -> Option<StageDefinition> {
        self.stages.get(id).cloned()
    }

    fn enemy(&self, id: &EnemyTypeId) -> Option<EnemyTemplate> {
        self.enemies.get(id).cloned()
    }

    fn stage_ids(&self) -> Vec<StageId> {
        self.stages.keys().cloned().collect()
    }
}
