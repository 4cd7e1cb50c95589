use chrono::{DateTime, Utc};

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{HeroId, TeamId, UserId};

type SlotArray = [Option<HeroId>; GameConfig::MAX_TEAM_SLOTS];

/// Five fixed positions, numbered 1 through 5.
///
/// Positions are bounds checked on assignment and a hero can occupy at most
/// one of them. Deserialization goes through the same checks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SlotArray"))]
pub struct TeamSlots(SlotArray);

impl TryFrom<SlotArray> for TeamSlots {
    type Error = TeamError;

    fn try_from(slots: SlotArray) -> Result<Self, Self::Error> {
        Self::from_assignments(
            slots
                .into_iter()
                .enumerate()
                .filter_map(|(index, slot)| slot.map(|hero| (index + 1, hero))),
        )
    }
}

impl TeamSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds slots from `(position, hero)` pairs.
    pub fn from_assignments(
        assignments: impl IntoIterator<Item = (usize, HeroId)>,
    ) -> Result<Self, TeamError> {
        let mut slots = Self::new();
        for (position, hero) in assignments {
            slots.assign(position, hero)?;
        }
        Ok(slots)
    }

    /// Places `hero` at `position`, returning whoever was there before.
    pub fn assign(&mut self, position: usize, hero: HeroId) -> Result<Option<HeroId>, TeamError> {
        let index = Self::index(position)?;
        if let Some(existing) = self.position_of(&hero)
            && existing != position
        {
            return Err(TeamError::DuplicateHero {
                hero,
                position: existing,
            });
        }
        Ok(self.0[index].replace(hero))
    }

    pub fn clear(&mut self, position: usize) -> Result<Option<HeroId>, TeamError> {
        let index = Self::index(position)?;
        Ok(self.0[index].take())
    }

    pub fn get(&self, position: usize) -> Option<&HeroId> {
        Self::index(position)
            .ok()
            .and_then(|index| self.0[index].as_ref())
    }

    pub fn position_of(&self, hero: &HeroId) -> Option<usize> {
        self.iter()
            .find(|(_, occupant)| *occupant == hero)
            .map(|(position, _)| position)
    }

    /// Occupied positions in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &HeroId)> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|hero| (index + 1, hero)))
    }

    pub fn hero_ids(&self) -> Vec<HeroId> {
        self.iter().map(|(_, hero)| hero.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    fn index(position: usize) -> Result<usize, TeamError> {
        if (1..=GameConfig::MAX_TEAM_SLOTS).contains(&position) {
            Ok(position - 1)
        } else {
            Err(TeamError::PositionOutOfRange { position })
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    pub id: TeamId,
    pub user_id: UserId,
    pub name: String,
    pub slots: TeamSlots,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TeamError {
    #[error("team position {position} is outside 1..=5")]
    PositionOutOfRange { position: usize },

    #[error("hero {hero} already occupies position {position}")]
    DuplicateHero { hero: HeroId, position: usize },
}

impl GameError for TeamError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::PositionOutOfRange { .. } => "TEAM_POSITION_OUT_OF_RANGE",
            Self::DuplicateHero { .. } => "TEAM_DUPLICATE_HERO",
        }
    }
}
