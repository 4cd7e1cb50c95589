//! Hero oracle implementation for runtime.

use std::collections::BTreeMap;

use game_core::env::{HeroOracle, HeroType};
use game_core::state::{HeroTypeId, Rarity};

/// Runtime implementation of HeroOracle with a per-rarity index, so gacha
/// pool lookups do not scan the whole catalog.
pub struct HeroOracleImpl {
    heroes: BTreeMap<HeroTypeId, HeroType>,
    by_rarity: BTreeMap<Rarity, Vec<HeroTypeId>>,
}

impl HeroOracleImpl {
    pub fn new(heroes: impl IntoIterator<Item = HeroType>) -> Self {
        let heroes: BTreeMap<HeroTypeId, HeroType> = heroes
            .into_iter()
            .map(|hero| (hero.id.clone(), hero))
            .collect();
        let mut by_rarity: BTreeMap<Rarity, Vec<HeroTypeId>> = BTreeMap::new();
        for hero in heroes.values() {
            by_rarity.entry(hero.rarity).or_default().push(hero.id.clone());
        }
        Self { heroes, by_rarity }
    }
}

impl HeroOracle for HeroOracleImpl {
    fn hero_type(&self, id: &HeroTypeId) -> Option<HeroType> {
        self.heroes.get(id).cloned()
    }

    fn hero_type_ids(&self) -> Vec<HeroTypeId> {
        self.heroes.keys().cloned().collect()
    }

    fn hero_types_of_rarity(&self, rarity: Rarity) -> Vec<HeroTypeId> {
        self.by_rarity.get(&rarity).cloned().unwrap_or_default()
    }
}
