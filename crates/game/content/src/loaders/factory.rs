//! Content factory for building a catalog from data files.

use std::path::{Path, PathBuf};

use game_core::GameConfig;
use game_core::env::{Banner, HeroType, ItemTemplate, MissionTemplate};

use crate::loaders::{
    BannerLoader, ConfigLoader, ContentBundle, HeroLoader, ItemLoader, LoadResult, MissionLoader,
    StageCatalog, StageLoader,
};

/// Content factory that loads all catalog content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── banners.ron
/// ├── heroes.ron
/// ├── items.ron
/// ├── stages.ron
/// └── missions.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load banners from `banners.ron`.
    pub fn load_banners(&self) -> LoadResult<Vec<Banner>> {
        BannerLoader::load(&self.data_dir.join("banners.ron"))
    }

    /// Load hero types from `heroes.ron`.
    pub fn load_heroes(&self) -> LoadResult<Vec<HeroType>> {
        HeroLoader::load(&self.data_dir.join("heroes.ron"))
    }

    /// Load item templates from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemTemplate>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load stages and enemies from `stages.ron`.
    pub fn load_stages(&self) -> LoadResult<StageCatalog> {
        StageLoader::load(&self.data_dir.join("stages.ron"))
    }

    /// Load mission templates from `missions.ron`.
    pub fn load_missions(&self) -> LoadResult<Vec<MissionTemplate>> {
        MissionLoader::load(&self.data_dir.join("missions.ron"))
    }

    /// Load every file and cross-check the references between them.
    pub fn load_bundle(&self) -> LoadResult<ContentBundle> {
        let StageCatalog { enemies, stages } = self.load_stages()?;
        let bundle = ContentBundle {
            config: self.load_config()?,
            banners: self.load_banners()?,
            heroes: self.load_heroes()?,
            items: self.load_items()?,
            enemies,
            stages,
            missions: self.load_missions()?,
        };
        bundle.validate()?;
        Ok(bundle)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
