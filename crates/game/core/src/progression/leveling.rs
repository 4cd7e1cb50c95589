use crate::config::GameConfig;
use crate::env::HeroType;
use crate::state::{Hero, HeroId};

/// `1 + experience / 100`.
pub fn level_for_experience(experience: u32) -> u32 {
    1 + experience / GameConfig::EXPERIENCE_PER_LEVEL
}

/// Level-scaled combat stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedStats {
    pub hp: u32,
    pub atk: u32,
}

/// Base stats scaled by `1 + 0.1 * (level - 1)`, floored.
///
/// Computed in integer percent so the floor is exact.
pub fn derived_stats(hero_type: &HeroType, level: u32) -> DerivedStats {
    let percent = 100 + GameConfig::LEVEL_STAT_GROWTH_PERCENT as u64 * level.saturating_sub(1) as u64;
    let scale = |base: u32| -> u32 {
        let scaled = base as u64 * percent / 100;
        u32::try_from(scaled).unwrap_or(u32::MAX)
    };
    DerivedStats {
        hp: scale(hero_type.base_hp),
        atk: scale(hero_type.base_atk),
    }
}

/// Outcome of granting experience to one hero.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelChange {
    pub hero_id: HeroId,
    pub experience_gained: u32,
    pub old_level: u32,
    pub new_level: u32,
}

impl LevelChange {
    pub fn leveled_up(&self) -> bool {
        self.new_level > self.old_level
    }
}

impl Hero {
    /// Adds experience and recomputes the level.
    pub fn add_experience(&mut self, amount: u32) -> LevelChange {
        let old_level = self.level;
        self.experience = self.experience.saturating_add(amount);
        self.level = level_for_experience(self.experience);
        LevelChange {
            hero_id: self.id.clone(),
            experience_gained: amount,
            old_level,
            new_level: self.level,
        }
    }
}
