//! Mission template catalog loader.

use std::path::Path;

use game_core::env::MissionTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_ron};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionCatalog {
    pub missions: Vec<MissionTemplate>,
}

pub struct MissionLoader;

impl MissionLoader {
    /// Load mission templates. A zero target would complete on assignment,
    /// so it is rejected.
    pub fn load(path: &Path) -> LoadResult<Vec<MissionTemplate>> {
        let catalog: MissionCatalog = read_ron(path, "mission catalog")?;
        if let Some(mission) = catalog
            .missions
            .iter()
            .find(|mission| mission.target_value == 0)
        {
            anyhow::bail!("Mission '{}' has a zero target value", mission.id);
        }
        Ok(catalog.missions)
    }
}
