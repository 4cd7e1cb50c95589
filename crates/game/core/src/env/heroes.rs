use crate::state::{HeroTypeId, Rarity, SkillId};

/// Read-only access to hero templates.
pub trait HeroOracle: Send + Sync {
    fn hero_type(&self, id: &HeroTypeId) -> Option<HeroType>;

    /// Every hero type id in the catalog, sorted.
    fn hero_type_ids(&self) -> Vec<HeroTypeId>;

    /// Ids of every hero type at `rarity`, sorted.
    fn hero_types_of_rarity(&self, rarity: Rarity) -> Vec<HeroTypeId> {
        self.hero_type_ids()
            .into_iter()
            .filter(|id| {
                self.hero_type(id)
                    .is_some_and(|hero_type| hero_type.rarity == rarity)
            })
            .collect()
    }
}

/// A combat ability shared by heroes and enemies.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub damage_multiplier: f64,
    /// Full turns the skill stays unavailable after use.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cooldown: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub targets_all: bool,
}

impl Skill {
    pub const BASIC_ATTACK: &'static str = "basic_attack";

    /// Single-target 1.0x strike with no cooldown.
    pub fn basic_attack() -> Self {
        Self {
            id: SkillId::from(Self::BASIC_ATTACK),
            name: "Attack".into(),
            description: String::new(),
            damage_multiplier: 1.0,
            cooldown: 0,
            targets_all: false,
        }
    }
}

/// Template every owned hero of this type is derived from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroType {
    pub id: HeroTypeId,
    pub name: String,
    pub rarity: Rarity,
    pub base_hp: u32,
    pub base_atk: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Vec<Skill>,
}

impl HeroType {
    /// Skills used in combat. A type without skills fights with a basic attack.
    pub fn combat_skills(&self) -> Vec<Skill> {
        if self.skills.is_empty() {
            vec![Skill::basic_attack()]
        } else {
            self.skills.clone()
        }
    }
}
