/// How stage experience is divided among the team after a victory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RewardSplit {
    /// Only heroes still standing at the end of the fight share the experience.
    #[default]
    Survivors,
    /// Every assigned hero shares the experience, fallen or not.
    All,
}

/// Offline ("idle") reward rates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IdleConfig {
    /// Time away beyond this many hours earns nothing extra.
    pub max_idle_hours: u32,
    pub gold_per_minute: u32,
    pub exp_per_minute: u32,
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self {
            max_idle_hours: GameConfig::DEFAULT_MAX_IDLE_HOURS,
            gold_per_minute: GameConfig::DEFAULT_IDLE_GOLD_PER_MINUTE,
            exp_per_minute: GameConfig::DEFAULT_IDLE_EXP_PER_MINUTE,
        }
    }
}

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Full turns a battle may last before it is scored as a defeat.
    pub max_battle_turns: u32,
    /// Which heroes share stage experience.
    pub reward_split: RewardSplit,
    /// Offline reward rates.
    pub idle: IdleConfig,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Team positions 1..=5.
    pub const MAX_TEAM_SLOTS: usize = 5;
    /// A stage fields between one and five enemies.
    pub const MAX_STAGE_ENEMIES: usize = 5;
    /// Experience required per level: `level = 1 + experience / 100`.
    pub const EXPERIENCE_PER_LEVEL: u32 = 100;
    /// Stat growth per level above 1, in percent of base stats.
    pub const LEVEL_STAT_GROWTH_PERCENT: u32 = 10;
    /// Pulls resolved by a ten-pull.
    pub const TEN_PULL_COUNT: u32 = 10;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_BATTLE_TURNS: u32 = 100;
    pub const DEFAULT_MAX_IDLE_HOURS: u32 = 12;
    pub const DEFAULT_IDLE_GOLD_PER_MINUTE: u32 = 5;
    pub const DEFAULT_IDLE_EXP_PER_MINUTE: u32 = 2;

    pub fn new() -> Self {
        Self {
            max_battle_turns: Self::DEFAULT_MAX_BATTLE_TURNS,
            reward_split: RewardSplit::default(),
            idle: IdleConfig::default(),
        }
    }

    pub fn with_reward_split(mut self, reward_split: RewardSplit) -> Self {
        self.reward_split = reward_split;
        self
    }

    pub fn with_max_battle_turns(mut self, max_battle_turns: u32) -> Self {
        self.max_battle_turns = max_battle_turns;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
