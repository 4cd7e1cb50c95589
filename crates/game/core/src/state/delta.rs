use crate::battle::BattleResult;
use crate::gacha::SummonResult;
use crate::state::{Hero, Item, Mission, PlayerResources, SummonSession, UserId};

/// Every state change produced by one engine invocation.
///
/// The caller persists a delta as a unit: wallet, session, grants and result
/// records land together or not at all. Records are full replacements keyed by
/// id (upserts); result logs are appended.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerDelta {
    pub user_id: UserId,
    pub resources: Option<PlayerResources>,
    pub session: Option<SummonSession>,
    pub heroes: Vec<Hero>,
    pub items: Vec<Item>,
    pub missions: Vec<Mission>,
    pub summon_results: Vec<SummonResult>,
    pub battle_result: Option<BattleResult>,
}

impl PlayerDelta {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_none()
            && self.session.is_none()
            && self.heroes.is_empty()
            && self.items.is_empty()
            && self.missions.is_empty()
            && self.summon_results.is_empty()
            && self.battle_result.is_none()
    }

    /// Records `hero` as changed, replacing an earlier entry for the same id.
    pub fn upsert_hero(&mut self, hero: Hero) {
        match self.heroes.iter_mut().find(|existing| existing.id == hero.id) {
            Some(existing) => *existing = hero,
            None => self.heroes.push(hero),
        }
    }

    pub fn upsert_item(&mut self, item: Item) {
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    pub fn upsert_mission(&mut self, mission: Mission) {
        match self
            .missions
            .iter_mut()
            .find(|existing| existing.id == mission.id)
        {
            Some(existing) => *existing = mission,
            None => self.missions.push(mission),
        }
    }
}
