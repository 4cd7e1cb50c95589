use crate::state::{ItemTemplateId, Rarity};

/// Read-only access to item templates.
pub trait ItemOracle: Send + Sync {
    fn template(&self, id: &ItemTemplateId) -> Option<ItemTemplate>;

    /// Every item template id in the catalog, sorted.
    fn template_ids(&self) -> Vec<ItemTemplateId>;

    /// Ids of every item template at `rarity`, sorted.
    fn templates_of_rarity(&self, rarity: Rarity) -> Vec<ItemTemplateId> {
        self.template_ids()
            .into_iter()
            .filter(|id| {
                self.template(id)
                    .is_some_and(|template| template.rarity == rarity)
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Accessory,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ItemKind {
    Equipment {
        slot: EquipmentSlot,
        atk_bonus: u32,
        hp_bonus: u32,
    },
    Consumable {
        effect: String,
        value: u32,
    },
    /// Crafting input; `used_for` lists the recipes that consume it.
    Material {
        #[cfg_attr(feature = "serde", serde(default))]
        used_for: Vec<String>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTemplate {
    pub id: ItemTemplateId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub rarity: Rarity,
    pub kind: ItemKind,
}

impl ItemTemplate {
    pub fn is_equipment(&self) -> bool {
        matches!(self.kind, ItemKind::Equipment { .. })
    }

    /// Equipment is tracked per piece; everything else stacks.
    pub fn is_stackable(&self) -> bool {
        !self.is_equipment()
    }
}
