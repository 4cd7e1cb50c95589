use crate::state::{Hero, HeroId, HeroTypeId, Item, ItemTemplateId, PlayerResources, UserId};

/// Owned state an engine reads for one request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSnapshot {
    pub user_id: UserId,
    pub resources: PlayerResources,
    pub heroes: Vec<Hero>,
    pub items: Vec<Item>,
}

impl PlayerSnapshot {
    pub fn new(user_id: UserId) -> Self {
        Self {
            resources: PlayerResources::new(user_id.clone()),
            user_id,
            heroes: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn hero(&self, id: &HeroId) -> Option<&Hero> {
        self.heroes.iter().find(|hero| &hero.id == id)
    }

    pub fn owns_hero_type(&self, hero_type: &HeroTypeId) -> bool {
        self.heroes.iter().any(|hero| &hero.hero_type == hero_type)
    }

    /// First unequipped stack of `template`, the one new copies merge into.
    pub fn stack_of(&self, template: &ItemTemplateId) -> Option<&Item> {
        self.items
            .iter()
            .find(|item| &item.template_id == template && item.equipped_to.is_none())
    }
}
