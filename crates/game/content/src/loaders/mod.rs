//! Content loaders for reading catalog data from files.
//!
//! Each loader reads one file; [`ContentFactory`] loads a whole data
//! directory and cross-checks it as a [`ContentBundle`].

pub mod banners;
pub mod bundle;
pub mod config;
pub mod factory;
pub mod heroes;
pub mod items;
pub mod missions;
pub mod stages;

pub use banners::BannerLoader;
pub use bundle::ContentBundle;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use heroes::HeroLoader;
pub use items::ItemLoader;
pub use missions::MissionLoader;
pub use stages::{StageCatalog, StageLoader};

use std::path::Path;

use serde::de::DeserializeOwned;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Reads and parses one RON file; `what` names the content in errors.
pub(crate) fn read_ron<T: DeserializeOwned>(path: &Path, what: &str) -> LoadResult<T> {
    let content = read_file(path)?;
    ron::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {} RON {}: {}", what, path.display(), e))
}
