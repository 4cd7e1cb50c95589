use chrono::{DateTime, Utc};

use crate::env::{HeroType, Skill};
use crate::progression::{DerivedStats, derived_stats, level_for_experience};
use crate::state::{HeroId, HeroTypeId, Rarity, UserId};

/// A hero owned by a player.
///
/// `level` is always `1 + experience / 100`; both fields only change through
/// `Hero::add_experience`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hero {
    pub id: HeroId,
    pub user_id: UserId,
    pub hero_type: HeroTypeId,
    pub(crate) level: u32,
    pub(crate) experience: u32,
    pub created_at: DateTime<Utc>,
}

impl Hero {
    /// A freshly summoned level 1 hero.
    pub fn new(id: HeroId, user_id: UserId, hero_type: HeroTypeId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id,
            hero_type,
            level: 1,
            experience: 0,
            created_at: now,
        }
    }

    /// Rebuilds a stored hero, deriving its level from experience.
    pub fn restore(
        id: HeroId,
        user_id: UserId,
        hero_type: HeroTypeId,
        experience: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            hero_type,
            level: level_for_experience(experience),
            experience,
            created_at,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn stats(&self, hero_type: &HeroType) -> DerivedStats {
        derived_stats(hero_type, self.level)
    }

    pub fn details(&self, hero_type: &HeroType) -> HeroWithDetails {
        let stats = self.stats(hero_type);
        HeroWithDetails {
            id: self.id.clone(),
            hero_type_id: self.hero_type.clone(),
            name: hero_type.name.clone(),
            rarity: hero_type.rarity,
            level: self.level,
            experience: self.experience,
            hp: stats.hp,
            atk: stats.atk,
            skills: hero_type.skills.clone(),
        }
    }
}

/// Hero joined with its template and level-derived stats.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroWithDetails {
    pub id: HeroId,
    pub hero_type_id: HeroTypeId,
    pub name: String,
    pub rarity: Rarity,
    pub level: u32,
    pub experience: u32,
    pub hp: u32,
    pub atk: u32,
    pub skills: Vec<Skill>,
}

/// Minimal hero template view used in banner rate listings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroBasicInfo {
    pub id: HeroTypeId,
    pub name: String,
    pub rarity: Rarity,
}

impl From<&HeroType> for HeroBasicInfo {
    fn from(hero_type: &HeroType) -> Self {
        Self {
            id: hero_type.id.clone(),
            name: hero_type.name.clone(),
            rarity: hero_type.rarity,
        }
    }
}
