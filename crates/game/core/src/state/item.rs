use chrono::{DateTime, Utc};

use crate::env::ItemTemplate;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{HeroId, ItemId, ItemTemplateId, UserId};

/// An owned stack of items (quantity 1 for equipment).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub user_id: UserId,
    pub template_id: ItemTemplateId,
    pub quantity: u32,
    pub acquired_at: DateTime<Utc>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipped_to: Option<HeroId>,
}

impl Item {
    pub fn new(
        id: ItemId,
        user_id: UserId,
        template_id: ItemTemplateId,
        quantity: u32,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            template_id,
            quantity,
            acquired_at: now,
            equipped_to: None,
        }
    }

    /// Equips this item to `hero`. Only equipment can be equipped.
    pub fn equip(&mut self, template: &ItemTemplate, hero: HeroId) -> Result<(), ItemError> {
        if template.id != self.template_id {
            return Err(ItemError::TemplateMismatch {
                expected: self.template_id.clone(),
                actual: template.id.clone(),
            });
        }
        if !template.is_equipment() {
            return Err(ItemError::NotEquipment(self.template_id.clone()));
        }
        self.equipped_to = Some(hero);
        Ok(())
    }

    pub fn unequip(&mut self) -> Option<HeroId> {
        self.equipped_to.take()
    }

    pub fn with_template(self, template: ItemTemplate) -> ItemWithTemplate {
        ItemWithTemplate {
            item: self,
            template,
        }
    }
}

/// Item joined with its template for responses.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemWithTemplate {
    pub item: Item,
    pub template: ItemTemplate,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ItemError {
    #[error("item template '{0}' is not equipment")]
    NotEquipment(ItemTemplateId),

    #[error("item is a '{expected}', not a '{actual}'")]
    TemplateMismatch {
        expected: ItemTemplateId,
        actual: ItemTemplateId,
    },
}

impl GameError for ItemError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotEquipment(_) => "ITEM_NOT_EQUIPMENT",
            Self::TemplateMismatch { .. } => "ITEM_TEMPLATE_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{EquipmentSlot, ItemKind};
    use crate::state::Rarity;
    use chrono::TimeZone;

    fn template(id: &str, kind: ItemKind) -> ItemTemplate {
        ItemTemplate {
            id: ItemTemplateId::from(id),
            name: id.into(),
            description: String::new(),
            rarity: Rarity::Rare,
            kind,
        }
    }

    fn item(template: &str) -> Item {
        Item::new(
            ItemId::from("item-1"),
            UserId::from("u1"),
            ItemTemplateId::from(template),
            1,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn equipment_can_be_equipped_and_removed() {
        let sword = template(
            "sword",
            ItemKind::Equipment {
                slot: EquipmentSlot::Weapon,
                atk_bonus: 5,
                hp_bonus: 0,
            },
        );
        let mut owned = item("sword");
        owned.equip(&sword, HeroId::from("h1")).unwrap();
        assert_eq!(owned.equipped_to, Some(HeroId::from("h1")));
        assert_eq!(owned.unequip(), Some(HeroId::from("h1")));
        assert_eq!(owned.equipped_to, None);
    }

    #[test]
    fn materials_cannot_be_equipped() {
        let ore = template("ore", ItemKind::Material { used_for: vec![] });
        let mut owned = item("ore");
        let err = owned.equip(&ore, HeroId::from("h1")).unwrap_err();
        assert_eq!(err, ItemError::NotEquipment(ItemTemplateId::from("ore")));
        assert_eq!(owned.equipped_to, None);
        assert_eq!(err.error_code(), "ITEM_NOT_EQUIPMENT");
    }
}
