//! Banner catalog loader.

use std::path::Path;

use game_core::env::Banner;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_ron};

/// Banner catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerCatalog {
    pub banners: Vec<Banner>,
}

/// Loader for banners from RON files.
pub struct BannerLoader;

impl BannerLoader {
    /// Load banners and reject any whose rate table is malformed.
    pub fn load(path: &Path) -> LoadResult<Vec<Banner>> {
        let catalog: BannerCatalog = read_ron(path, "banner catalog")?;
        for banner in &catalog.banners {
            banner
                .validate()
                .map_err(|e| anyhow::anyhow!("Banner '{}' is invalid: {}", banner.id, e))?;
        }
        Ok(catalog.banners)
    }
}
