//! Deterministic gameplay rules for the Oden backend.
//!
//! `game-core` resolves gacha summons and stage battles and applies the
//! progression rules both feed into. Every engine is a pure function of
//! player state, catalog oracles, an injected [`env::Clock`] and an explicit
//! [`env::RngOracle`]; each returns an outcome plus a [`state::PlayerDelta`]
//! for the caller to persist. Nothing here performs I/O.
pub mod battle;
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod gacha;
pub mod progression;
pub mod state;

#[cfg(test)]
mod testing;

pub use battle::{
    BattleContext, BattleError, BattleOutcome, BattleRequest, BattleResult, resolve_stage,
};
pub use config::{GameConfig, IdleConfig, RewardSplit};
pub use env::{CatalogEnv, Clock, IdSource, OracleError, PcgRng, RngOracle};
pub use error::{ErrorSeverity, GameError};
pub use gacha::{
    PullKind, SummonContext, SummonError, SummonMultiResult, SummonOutcome, SummonRequest,
    SummonResult, summon,
};
pub use state::{PlayerDelta, PlayerSnapshot};
