use std::collections::BTreeMap;

use crate::state::{HeroId, ItemTemplateId};

/// What a won battle pays out. A defeat pays nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rewards {
    pub gold: u64,
    /// Experience granted to each rewarded hero.
    pub experience: BTreeMap<HeroId, u32>,
    /// One entry per dropped copy.
    pub items: Vec<ItemTemplateId>,
}

impl Rewards {
    pub fn is_empty(&self) -> bool {
        self.gold == 0 && self.experience.is_empty() && self.items.is_empty()
    }

    pub fn total_experience(&self) -> u64 {
        self.experience.values().map(|exp| u64::from(*exp)).sum()
    }
}
