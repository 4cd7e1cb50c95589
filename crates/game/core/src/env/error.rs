//! Oracle access errors.
//!
//! Errors related to oracle availability and catalog lookups.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{BannerId, EnemyTypeId, HeroTypeId, ItemTemplateId, MissionTemplateId, StageId};

/// Errors that occur when accessing catalog data.
///
/// A missing oracle means the caller wired the environment wrong, which is
/// fatal. A missing template means some record references an id the catalog
/// does not know.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("BannerOracle not available")]
    BannersNotAvailable,

    #[error("HeroOracle not available")]
    HeroesNotAvailable,

    #[error("ItemOracle not available")]
    ItemsNotAvailable,

    #[error("StageOracle not available")]
    StagesNotAvailable,

    #[error("MissionOracle not available")]
    MissionsNotAvailable,

    #[error("ConfigOracle not available")]
    ConfigNotAvailable,

    #[error("banner '{0}' not found")]
    BannerNotFound(BannerId),

    #[error("hero type '{0}' not found")]
    HeroTypeNotFound(HeroTypeId),

    #[error("item template '{0}' not found")]
    ItemTemplateNotFound(ItemTemplateId),

    #[error("stage '{0}' not found")]
    StageNotFound(StageId),

    #[error("enemy type '{0}' not found")]
    EnemyTypeNotFound(EnemyTypeId),

    #[error("mission template '{0}' not found")]
    MissionTemplateNotFound(MissionTemplateId),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            BannersNotAvailable | HeroesNotAvailable | ItemsNotAvailable | StagesNotAvailable
            | MissionsNotAvailable | ConfigNotAvailable => ErrorSeverity::Fatal,

            BannerNotFound(_)
            | HeroTypeNotFound(_)
            | ItemTemplateNotFound(_)
            | StageNotFound(_)
            | EnemyTypeNotFound(_)
            | MissionTemplateNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            BannersNotAvailable => "ORACLE_BANNERS_NOT_AVAILABLE",
            HeroesNotAvailable => "ORACLE_HEROES_NOT_AVAILABLE",
            ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            StagesNotAvailable => "ORACLE_STAGES_NOT_AVAILABLE",
            MissionsNotAvailable => "ORACLE_MISSIONS_NOT_AVAILABLE",
            ConfigNotAvailable => "ORACLE_CONFIG_NOT_AVAILABLE",
            BannerNotFound(_) => "ORACLE_BANNER_NOT_FOUND",
            HeroTypeNotFound(_) => "ORACLE_HERO_TYPE_NOT_FOUND",
            ItemTemplateNotFound(_) => "ORACLE_ITEM_TEMPLATE_NOT_FOUND",
            StageNotFound(_) => "ORACLE_STAGE_NOT_FOUND",
            EnemyTypeNotFound(_) => "ORACLE_ENEMY_TYPE_NOT_FOUND",
            MissionTemplateNotFound(_) => "ORACLE_MISSION_TEMPLATE_NOT_FOUND",
        }
    }
}
