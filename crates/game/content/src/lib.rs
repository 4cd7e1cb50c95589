//! Data-driven catalog content and loaders.
//!
//! Banners, hero types, item templates, stages (with their enemies) and
//! mission templates live in RON files; tunable rules live in `config.toml`.
//! The loaders turn a data directory into a [`ContentBundle`] that runtime
//! oracles serve from memory.
//!
//! Content is read-only at runtime and never appears in player state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    BannerLoader, ConfigLoader, ContentBundle, ContentFactory, HeroLoader, ItemLoader, LoadResult,
    MissionLoader, StageCatalog, StageLoader,
};
