//! Traits describing read-only catalog data and injected capabilities.
//!
//! Oracles expose banner, hero, item, stage and mission templates plus tunable
//! configuration. The [`CatalogEnv`] aggregate bundles them so the engines can
//! reach everything they need without coupling to a concrete data store.
//! Clock, RNG and id generation are passed separately because they are
//! stateful per request.
mod banners;
mod clock;
mod config;
mod error;
mod heroes;
mod ids;
mod items;
mod missions;
mod rng;
mod stages;

pub use banners::{
    Banner, BannerDefect, BannerKind, BannerOracle, GuaranteePolicy, RarityRate, SummonCost,
};
pub use clock::{Clock, FixedClock};
pub use config::ConfigOracle;
pub use error::OracleError;
pub use heroes::{HeroOracle, HeroType, Skill};
pub use ids::{IdSource, SequentialIds};
pub use items::{EquipmentSlot, ItemKind, ItemOracle, ItemTemplate};
pub use missions::{MissionKind, MissionOracle, MissionRewards, MissionTemplate, Requirement};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use stages::{DropEntry, EnemyTemplate, StageDefinition, StageOracle};

use crate::state::{
    BannerId, EnemyTypeId, HeroTypeId, ItemTemplateId, MissionTemplateId, StageId,
};

/// Aggregates the read-only catalog oracles the engines consult.
#[derive(Clone, Copy)]
pub struct CatalogEnv<'a> {
    banners: Option<&'a dyn BannerOracle>,
    heroes: Option<&'a dyn HeroOracle>,
    items: Option<&'a dyn ItemOracle>,
    stages: Option<&'a dyn StageOracle>,
    missions: Option<&'a dyn MissionOracle>,
    config: Option<&'a dyn ConfigOracle>,
}

impl<'a> CatalogEnv<'a> {
    pub fn new(
        banners: Option<&'a dyn BannerOracle>,
        heroes: Option<&'a dyn HeroOracle>,
        items: Option<&'a dyn ItemOracle>,
        stages: Option<&'a dyn StageOracle>,
        missions: Option<&'a dyn MissionOracle>,
        config: Option<&'a dyn ConfigOracle>,
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

    pub fn with_all(
        banners: &'a dyn BannerOracle,
        heroes: &'a dyn HeroOracle,
        items: &'a dyn ItemOracle,
        stages: &'a dyn StageOracle,
        missions: &'a dyn MissionOracle,
        config: &'a dyn ConfigOracle,
    ) -> Self {
        Self::new(
            Some(banners),
            Some(heroes),
            Some(items),
            Some(stages),
            Some(missions),
            Some(config),
        )
    }

    pub fn empty() -> Self {
        Self {
            banners: None,
            heroes: None,
            items: None,
            stages: None,
            missions: None,
            config: None,
        }
    }

    /// Returns the BannerOracle, or an error if not available.
    pub fn banners(&self) -> Result<&'a dyn BannerOracle, OracleError> {
        self.banners.ok_or(OracleError::BannersNotAvailable)
    }

    pub fn heroes(&self) -> Result<&'a dyn HeroOracle, OracleError> {
        self.heroes.ok_or(OracleError::HeroesNotAvailable)
    }

    pub fn items(&self) -> Result<&'a dyn ItemOracle, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    pub fn stages(&self) -> Result<&'a dyn StageOracle, OracleError> {
        self.stages.ok_or(OracleError::StagesNotAvailable)
    }

    pub fn missions(&self) -> Result<&'a dyn MissionOracle, OracleError> {
        self.missions.ok_or(OracleError::MissionsNotAvailable)
    }

    pub fn config(&self) -> Result<&'a dyn ConfigOracle, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }

    // ===== lookups that turn a missing template into a typed error =====

    pub fn banner(&self, id: &BannerId) -> Result<Banner, OracleError> {
        self.banners()?
            .banner(id)
            .ok_or_else(|| OracleError::BannerNotFound(id.clone()))
    }

    pub fn hero_type(&self, id: &HeroTypeId) -> Result<HeroType, OracleError> {
        self.heroes()?
            .hero_type(id)
            .ok_or_else(|| OracleError::HeroTypeNotFound(id.clone()))
    }

    pub fn item_template(&self, id: &ItemTemplateId) -> Result<ItemTemplate, OracleError> {
        self.items()?
            .template(id)
            .ok_or_else(|| OracleError::ItemTemplateNotFound(id.clone()))
    }

    pub fn stage(&self, id: &StageId) -> Result<StageDefinition, OracleError> {
        self.stages()?
            .stage(id)
            .ok_or_else(|| OracleError::StageNotFound(id.clone()))
    }

    pub fn enemy(&self, id: &EnemyTypeId) -> Result<EnemyTemplate, OracleError> {
        self.stages()?
            .enemy(id)
            .ok_or_else(|| OracleError::EnemyTypeNotFound(id.clone()))
    }

    pub fn mission_template(&self, id: &MissionTemplateId) -> Result<MissionTemplate, OracleError> {
        self.missions()?
            .mission_template(id)
            .ok_or_else(|| OracleError::MissionTemplateNotFound(id.clone()))
    }
}

impl std::fmt::Debug for CatalogEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogEnv")
            .field("banners", &self.banners.is_some())
            .field("heroes", &self.heroes.is_some())
            .field("items", &self.items.is_some())
            .field("stages", &self.stages.is_some())
            .field("missions", &self.missions.is_some())
            .field("config", &self.config.is_some())
            .finish()
    }
}
