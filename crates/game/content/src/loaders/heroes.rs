//! Hero type catalog loader.

use std::path::Path;

use game_core::env::HeroType;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_ron};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroCatalog {
    pub heroes: Vec<HeroType>,
}

pub struct HeroLoader;

impl HeroLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<HeroType>> {
        let catalog: HeroCatalog = read_ron(path, "hero catalog")?;
        Ok(catalog.heroes)
    }
}
