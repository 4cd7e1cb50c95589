//! Binary configuration read from the process environment.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use game_core::state::UserId;

/// Settings for one `oden` invocation.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Directory holding `config.toml` and the RON catalogs.
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    /// Fixed base seed for reproducible runs.
    pub seed: Option<u64>,
    pub user: UserId,
}

impl AppConfig {
    pub const DEFAULT_USER: &'static str = "player-1";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ODEN_DATA_DIR` - Content directory (default: `./data`)
    /// - `ODEN_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `ODEN_SEED` - Base RNG seed (default: random per run)
    /// - `ODEN_USER` - Player id used by the commands (default: `player-1`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            data_dir: lookup("ODEN_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data")),
            log_dir: lookup("ODEN_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(default_log_dir),
            seed: parse(&lookup, "ODEN_SEED"),
            user: UserId::new(lookup("ODEN_USER").unwrap_or_else(|| Self::DEFAULT_USER.into())),
        }
    }
}

fn parse<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|value| value.trim().parse().ok())
}

/// Platform cache directory, e.g. `~/.cache/oden/logs` on Linux.
fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "oden")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/oden"))
        .join("logs")
}
