//! Item oracle implementation for runtime.

use std::collections::BTreeMap;

use game_core::env::{ItemOracle, ItemTemplate};
use game_core::state::{ItemTemplateId, Rarity};

/// Runtime implementation of ItemOracle
pub struct ItemOracleImpl {
    items: BTreeMap<ItemTemplateId, ItemTemplate>,
    by_rarity: BTreeMap<Rarity, Vec<ItemTemplateId>>,
}

impl ItemOracleImpl {
    pub fn new(items: impl IntoIterator<Item = ItemTemplate>) -> Self {
        let items: BTreeMap<ItemTemplateId, ItemTemplate> = items
            .into_iter()
            .map(|item| (item.id.clone(), item))
            .collect();
        let mut by_rarity: BTreeMap<Rarity, Vec<ItemTemplateId>> = BTreeMap::new();
        for item in items.values() {
            by_rarity.entry(item.rarity).or_default().push(item.id.clone());
        }
        Self { items, by_rarity }
    }
}

impl ItemOracle for ItemOracleImpl {
    fn template(&self, id: &ItemTemplateId) -> Option<ItemTemplate> {
        self.items.get(id).cloned()
    }

    fn template_ids(&self) -> Vec<ItemTemplateId> {
        self.items.keys().cloned().collect()
    }

    fn templates_of_rarity(&self, rarity: Rarity) -> Vec<ItemTemplateId> {
        self.by_rarity.get(&rarity).cloned().unwrap_or_default()
    }
}
