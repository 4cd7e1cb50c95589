//! Config oracle implementation for runtime.

use game_core::config::{GameConfig, IdleConfig, RewardSplit};
use game_core::env::ConfigOracle;

/// Runtime implementation of ConfigOracle that wraps GameConfig
pub struct ConfigOracleImpl {
    config: GameConfig,
}

impl ConfigOracleImpl {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn game_config(&self) -> &GameConfig {
        &self.config
    }
}

impl ConfigOracle for ConfigOracleImpl {
    fn max_battle_turns(&self) -> u32 {
        self.config.max_battle_turns
    }

    fn reward_split(&self) -> RewardSplit {
        self.config.reward_split
    }

    fn idle(&self) -> IdleConfig {
        self.config.idle
    }
}
