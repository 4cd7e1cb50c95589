//! Runtime wrappers around static catalog oracles.
//!
//! These implementations expose `game-core` oracle traits and bundle them into
//! an [`OracleManager`] so services can build [`CatalogEnv`] views on demand.
//! The data is immutable at runtime; player state lives in repositories.
mod banners;
mod config;
mod heroes;
mod items;
mod missions;
mod stages;

use std::sync::Arc;

use game_content::ContentBundle;
use game_core::GameConfig;
use game_core::env::CatalogEnv;

pub use banners::BannerOracleImpl;
pub use config::ConfigOracleImpl;
pub use heroes::HeroOracleImpl;
pub use items::ItemOracleImpl;
pub use missions::MissionOracleImpl;
pub use stages::StageOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) banners: Arc<BannerOracleImpl>,
    pub(crate) heroes: Arc<HeroOracleImpl>,
    pub(crate) items: Arc<ItemOracleImpl>,
    pub(crate) stages: Arc<StageOracleImpl>,
    pub(crate) missions: Arc<MissionOracleImpl>,
    pub(crate) config: Arc<ConfigOracleImpl>,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(
        banners: Arc<BannerOracleImpl>,
        heroes: Arc<HeroOracleImpl>,
        items: Arc<ItemOracleImpl>,
        stages: Arc<StageOracleImpl>,
        missions: Arc<MissionOracleImpl>,
        config: Arc<ConfigOracleImpl>,
    ) -> Self {
        Self {
            banners,
            heroes,
            items,
            stages,
            missions,
            config,
        }
    }

    /// Builds every oracle from a loaded content bundle.
    pub fn from_bundle(bundle: ContentBundle) -> Self {
        let ContentBundle {
            config,
            banners,
            heroes,
            items,
            enemies,
            stages,
            missions,
        } = bundle;
        Self::new(
            Arc::new(BannerOracleImpl::new(banners)),
            Arc::new(HeroOracleImpl::new(heroes)),
            Arc::new(ItemOracleImpl::new(items)),
            Arc::new(StageOracleImpl::new(stages, enemies)),
            Arc::new(MissionOracleImpl::new(missions)),
            Arc::new(ConfigOracleImpl::new(config)),
        )
    }

    /// Borrowed view handed to the core engines.
    pub fn as_catalog_env(&self) -> CatalogEnv<'_> {
        CatalogEnv::with_all(
            self.banners.as_ref(),
            self.heroes.as_ref(),
            self.items.as_ref(),
            self.stages.as_ref(),
            self.missions.as_ref(),
            self.config.as_ref(),
        )
    }

    pub fn game_config(&self) -> &GameConfig {
        self.config.game_config()
    }

    /// Replaces the tunables served through [`ConfigOracle`].
    ///
    /// [`ConfigOracle`]: game_core::env::ConfigOracle
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = Arc::new(ConfigOracleImpl::new(config));
        self
    }
}
