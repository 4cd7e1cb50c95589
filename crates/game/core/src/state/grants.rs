use chrono::{DateTime, Utc};

use crate::env::IdSource;
use crate::state::{Hero, HeroId, HeroTypeId, Item, ItemId, ItemTemplateId, PlayerSnapshot};

/// Heroes and items granted so far within one request.
///
/// Later grants see earlier ones, so a batch never creates the same hero type
/// twice and stackable items keep merging into one record.
pub(crate) struct Grants<'a> {
    player: &'a PlayerSnapshot,
    pub(crate) heroes: Vec<Hero>,
    pub(crate) items: Vec<Item>,
    /// Hero types granted while already owned.
    pub(crate) duplicates: Vec<HeroTypeId>,
}

impl<'a> Grants<'a> {
    pub(crate) fn new(player: &'a PlayerSnapshot) -> Self {
        Self {
            player,
            heroes: Vec::new(),
            items: Vec::new(),
            duplicates: Vec::new(),
        }
    }

    pub(crate) fn grant_hero(
        &mut self,
        hero_type: &HeroTypeId,
        now: DateTime<Utc>,
        ids: &dyn IdSource,
    ) {
        let owned = self.player.owns_hero_type(hero_type)
            || self.heroes.iter().any(|hero| &hero.hero_type == hero_type);
        if owned {
            self.duplicates.push(hero_type.clone());
            return;
        }
        self.heroes.push(Hero::new(
            HeroId::new(ids.next_id("hero")),
            self.player.user_id.clone(),
            hero_type.clone(),
            now,
        ));
    }

    /// Stackable items merge into an unequipped stack from this batch or the
    /// player's inventory; anything else becomes one record per copy.
    pub(crate) fn grant_item(
        &mut self,
        template: &ItemTemplateId,
        quantity: u32,
        stackable: bool,
        now: DateTime<Utc>,
        ids: &dyn IdSource,
    ) {
        if quantity == 0 {
            return;
        }
        if !stackable {
            for _ in 0..quantity {
                self.push_new(template, 1, now, ids);
            }
            return;
        }

        if let Some(stack) = self
            .items
            .iter_mut()
            .find(|item| &item.template_id == template && item.equipped_to.is_none())
        {
            stack.quantity = stack.quantity.saturating_add(quantity);
            return;
        }
        if let Some(stack) = self.player.stack_of(template) {
            let mut stack = stack.clone();
            stack.quantity = stack.quantity.saturating_add(quantity);
            self.items.push(stack);
            return;
        }
        self.push_new(template, quantity, now, ids);
    }

    fn push_new(
        &mut self,
        template: &ItemTemplateId,
        quantity: u32,
        now: DateTime<Utc>,
        ids: &dyn IdSource,
    ) {
        self.items.push(Item::new(
            ItemId::new(ids.next_id("item")),
            self.player.user_id.clone(),
            template.clone(),
            quantity,
            now,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::SequentialIds;
    use crate::state::UserId;
    use crate::testing::now;

    #[test]
    fn equipment_copies_are_separate_records() {
        let player = PlayerSnapshot::new(UserId::from("u1"));
        let ids = SequentialIds::new();
        let mut grants = Grants::new(&player);

        grants.grant_item(&ItemTemplateId::from("sword"), 2, false, now(), &ids);
        assert_eq!(grants.items.len(), 2);
        assert!(grants.items.iter().all(|item| item.quantity == 1));
    }

    #[test]
    fn stackable_grants_merge_within_a_batch() {
        let player = PlayerSnapshot::new(UserId::from("u1"));
        let ids = SequentialIds::new();
        let mut grants = Grants::new(&player);

        grants.grant_item(&ItemTemplateId::from("potion"), 2, true, now(), &ids);
        grants.grant_item(&ItemTemplateId::from("potion"), 3, true, now(), &ids);
        assert_eq!(grants.items.len(), 1);
        assert_eq!(grants.items[0].quantity, 5);
    }

    #[test]
    fn second_copy_of_a_hero_type_is_a_duplicate() {
        let player = PlayerSnapshot::new(UserId::from("u1"));
        let ids = SequentialIds::new();
        let mut grants = Grants::new(&player);
        let knight = HeroTypeId::from("knight");

        grants.grant_hero(&knight, now(), &ids);
        grants.grant_hero(&knight, now(), &ids);
        assert_eq!(grants.heroes.len(), 1);
        assert_eq!(grants.duplicates, vec![knight]);
    }
}
