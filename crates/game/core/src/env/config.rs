//! Configuration oracle for exposing game configuration to the engines.
use crate::config::{GameConfig, IdleConfig, RewardSplit};

/// Provides access to tunable configuration values.
pub trait ConfigOracle: Send + Sync {
    /// Full turns a battle may last before it is scored as a defeat.
    fn max_battle_turns(&self) -> u32;

    fn reward_split(&self) -> RewardSplit;

    fn idle(&self) -> IdleConfig;
}

impl ConfigOracle for GameConfig {
    fn max_battle_turns(&self) -> u32 {
        self.max_battle_turns
    }

    fn reward_split(&self) -> RewardSplit {
        self.reward_split
    }

    fn idle(&self) -> IdleConfig {
        self.idle
    }
}
