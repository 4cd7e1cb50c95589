//! Item template catalog loader.

use std::path::Path;

use game_core::env::ItemTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_ron};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemTemplate>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing ItemCatalog
    pub fn load(path: &Path) -> LoadResult<Vec<ItemTemplate>> {
        let catalog: ItemCatalog = read_ron(path, "item catalog")?;
        Ok(catalog.items)
    }
}
