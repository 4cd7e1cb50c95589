//! Stage and enemy catalog loader.

use std::path::Path;

use game_core::env::{EnemyTemplate, StageDefinition};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_ron};

/// Stages and the enemy templates they field, kept in one file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StageCatalog {
    pub enemies: Vec<EnemyTemplate>,
    pub stages: Vec<StageDefinition>,
}

pub struct StageLoader;

impl StageLoader {
    /// Load stages and enemies. Every stage must field at least one enemy.
    pub fn load(path: &Path) -> LoadResult<StageCatalog> {
        let catalog: StageCatalog = read_ron(path, "stage catalog")?;
        if let Some(stage) = catalog.stages.iter().find(|stage| stage.enemies.is_empty()) {
            anyhow::bail!("Stage '{}' has no enemies", stage.id);
        }
        Ok(catalog)
    }
}
