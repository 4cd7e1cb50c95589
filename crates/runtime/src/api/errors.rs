//! Unified error types surfaced by the runtime API.
//!
//! Wraps rule rejections from `game-core` and repository failures so callers
//! can bubble them up with consistent context.
use game_core::battle::BattleError;
use game_core::env::OracleError;
use game_core::error::{ErrorSeverity, GameError};
use game_core::gacha::SummonError;
use game_core::progression::MissionError;
use game_core::state::{MissionId, MissionTemplateId, TeamError, TeamId, UserId};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("player '{0}' is not registered")]
    UnknownPlayer(UserId),

    #[error("player '{0}' is already registered")]
    PlayerExists(UserId),

    #[error("team '{team}' not found for player '{user}'")]
    TeamNotFound { user: UserId, team: TeamId },

    #[error("mission '{0}' not found")]
    MissionNotFound(MissionId),

    #[error("mission template '{0}' is already active for this player")]
    MissionAlreadyAssigned(MissionTemplateId),

    #[error("runtime built without catalog oracles")]
    OraclesNotSet,

    #[error(transparent)]
    Summon(#[from] SummonError),

    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error(transparent)]
    Mission(#[from] MissionError),

    #[error(transparent)]
    Team(#[from] TeamError),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RuntimeError {
    /// Severity of the underlying rejection; repository failures are fatal.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownPlayer(_)
            | Self::PlayerExists(_)
            | Self::TeamNotFound { .. }
            | Self::MissionNotFound(_)
            | Self::MissionAlreadyAssigned(_) => ErrorSeverity::Validation,
            Self::OraclesNotSet => ErrorSeverity::Fatal,
            Self::Summon(err) => err.severity(),
            Self::Battle(err) => err.severity(),
            Self::Mission(err) => err.severity(),
            Self::Team(err) => err.severity(),
            Self::Oracle(err) => err.severity(),
            Self::Repository(_) => ErrorSeverity::Fatal,
        }
    }

    /// Stable machine-readable code for transport layers.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownPlayer(_) => "PLAYER_UNKNOWN",
            Self::PlayerExists(_) => "PLAYER_EXISTS",
            Self::TeamNotFound { .. } => "TEAM_NOT_FOUND",
            Self::MissionNotFound(_) => "MISSION_NOT_FOUND",
            Self::MissionAlreadyAssigned(_) => "MISSION_ALREADY_ASSIGNED",
            Self::OraclesNotSet => "RUNTIME_ORACLES_NOT_SET",
            Self::Summon(err) => err.error_code(),
            Self::Battle(err) => err.error_code(),
            Self::Mission(err) => err.error_code(),
            Self::Team(err) => err.error_code(),
            Self::Oracle(err) => err.error_code(),
            Self::Repository(_) => "REPOSITORY_FAILURE",
        }
    }
}
