//! In-memory catalog shared by unit tests.
use std::collections::BTreeMap;

use arrayvec::ArrayVec;
use chrono::{DateTime, TimeZone, Utc};

use crate::config::GameConfig;
use crate::env::{
    Banner, BannerKind, BannerOracle, CatalogEnv, EnemyTemplate, EquipmentSlot, GuaranteePolicy,
    HeroOracle, HeroType, ItemKind, ItemOracle, ItemTemplate, MissionOracle, MissionTemplate,
    RarityRate, Skill, StageDefinition, StageOracle, SummonCost,
};
use crate::state::{
    BannerId, CurrencyKind, EnemyTypeId, HeroTypeId, ItemTemplateId, MissionTemplateId, Rarity,
    SkillId, StageId,
};

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn hero_type(id: &str, rarity: Rarity, base_hp: u32, base_atk: u32) -> HeroType {
    HeroType {
        id: HeroTypeId::from(id),
        name: id.to_uppercase(),
        rarity,
        base_hp,
        base_atk,
        description: String::new(),
        skills: Vec::new(),
    }
}

pub fn skill(id: &str, multiplier: f64, cooldown: u32, targets_all: bool) -> Skill {
    Skill {
        id: SkillId::from(id),
        name: id.into(),
        description: String::new(),
        damage_multiplier: multiplier,
        cooldown,
        targets_all,
    }
}

pub fn event_banner() -> Banner {
    Banner {
        id: BannerId::from("event"),
        name: "Dragon Festival".into(),
        kind: BannerKind::Event,
        rates: vec![
            RarityRate::new(Rarity::Legendary, 0.01, 0.01),
            RarityRate::new(Rarity::Epic, 0.08, 0.0),
            RarityRate::new(Rarity::Rare, 0.25, 0.0),
            RarityRate::new(Rarity::Uncommon, 0.3, 0.0),
            RarityRate::new(Rarity::Common, 0.0, 0.0),
        ],
        guarantee_threshold: Some(90),
        guarantee_policy: GuaranteePolicy::ClearOnConsume,
        cost: SummonCost {
            single: 100,
            ten: 900,
            currency: CurrencyKind::Gems,
        },
        start_time: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        end_time: None,
        featured_heroes: vec![HeroTypeId::from("dragon")],
        featured_items: Vec::new(),
        hero_pool: None,
        item_pool: None,
        item_share: 0.0,
        has_daily_free_summon: true,
    }
}

#[derive(Clone, Debug)]
pub struct TestCatalog {
    pub banners: BTreeMap<BannerId, Banner>,
    pub heroes: BTreeMap<HeroTypeId, HeroType>,
    pub items: BTreeMap<ItemTemplateId, ItemTemplate>,
    pub stages: BTreeMap<StageId, StageDefinition>,
    pub enemies: BTreeMap<EnemyTypeId, EnemyTemplate>,
    pub missions: BTreeMap<MissionTemplateId, MissionTemplate>,
    pub config: GameConfig,
}

impl TestCatalog {
    pub fn new() -> Self {
        let mut catalog = Self {
            banners: BTreeMap::new(),
            heroes: BTreeMap::new(),
            items: BTreeMap::new(),
            stages: BTreeMap::new(),
            enemies: BTreeMap::new(),
            missions: BTreeMap::new(),
            config: GameConfig::default(),
        };

        catalog.add_banner(event_banner());
        for hero in [
            hero_type("peasant", Rarity::Common, 50, 8),
            hero_type("squire", Rarity::Uncommon, 70, 12),
            hero_type("knight", Rarity::Rare, 100, 50),
            hero_type("archer", Rarity::Rare, 80, 60),
            hero_type("mage", Rarity::Epic, 70, 35),
            hero_type("paladin", Rarity::Legendary, 150, 40),
            hero_type("dragon", Rarity::Legendary, 200, 55),
        ] {
            catalog.add_hero(hero);
        }
        for item in [
            ItemTemplate {
                id: ItemTemplateId::from("potion"),
                name: "Potion".into(),
                description: String::new(),
                rarity: Rarity::Uncommon,
                kind: ItemKind::Consumable {
                    effect: "heal".into(),
                    value: 50,
                },
            },
            ItemTemplate {
                id: ItemTemplateId::from("sword"),
                name: "Sword".into(),
                description: String::new(),
                rarity: Rarity::Rare,
                kind: ItemKind::Equipment {
                    slot: EquipmentSlot::Weapon,
                    atk_bonus: 5,
                    hp_bonus: 0,
                },
            },
        ] {
            catalog.items.insert(item.id.clone(), item);
        }

        catalog.add_enemy(EnemyTemplate {
            id: EnemyTypeId::from("goblin"),
            name: "Goblin".into(),
            hp: 80,
            atk: 10,
            skills: Vec::new(),
        });
        let mut enemies = ArrayVec::new();
        enemies.push(EnemyTypeId::from("goblin"));
        catalog.add_stage(StageDefinition {
            id: StageId::from("forest-1"),
            name: "Forest Edge".into(),
            description: String::new(),
            enemies,
            gold_reward: 100,
            exp_reward: 150,
            drops: Vec::new(),
        });

        catalog
    }

    pub fn add_banner(&mut self, banner: Banner) {
        self.banners.insert(banner.id.clone(), banner);
    }

    pub fn add_hero(&mut self, hero: HeroType) {
        self.heroes.insert(hero.id.clone(), hero);
    }

    pub fn add_enemy(&mut self, enemy: EnemyTemplate) {
        self.enemies.insert(enemy.id.clone(), enemy);
    }

    pub fn add_stage(&mut self, stage: StageDefinition) {
        self.stages.insert(stage.id.clone(), stage);
    }

    pub fn add_mission(&mut self, mission: MissionTemplate) {
        self.missions.insert(mission.id.clone(), mission);
    }

    pub fn env(&self) -> CatalogEnv<'_> {
        CatalogEnv::with_all(self, self, self, self, self, &self.config)
    }
}

impl BannerOracle for TestCatalog {
    fn banner(&self, id: &BannerId) -> Option<Banner> {
        self.banners.get(id).cloned()
    }

    fn banner_ids(&self) -> Vec<BannerId> {
        self.banners.keys().cloned().collect()
    }
}

impl HeroOracle for TestCatalog {
    fn hero_type(&self, id: &HeroTypeId) -> Option<HeroType> {
        self.heroes.get(id).cloned()
    }

    fn hero_type_ids(&self) -> Vec<HeroTypeId> {
        self.heroes.keys().cloned().collect()
    }
}

impl ItemOracle for TestCatalog {
    fn template(&self, id: &ItemTemplateId) -> Option<ItemTemplate> {
        self.items.get(id).cloned()
    }

    fn template_ids(&self) -> Vec<ItemTemplateId> {
        self.items.keys().cloned().collect()
    }
}

impl StageOracle for TestCatalog {
    fn stage(&self, id: &StageId) -> Option<StageDefinition> {
        self.stages.get(id).cloned()
    }

    fn enemy(&self, id: &EnemyTypeId) -> Option<EnemyTemplate> {
        self.enemies.get(id).cloned()
    }

    fn stage_ids(&self) -> Vec<StageId> {
        self.stages.keys().cloned().collect()
    }
}

impl MissionOracle for TestCatalog {
    fn mission_template(&self, id: &MissionTemplateId) -> Option<MissionTemplate> {
        self.missions.get(id).cloned()
    }

    fn mission_template_ids(&self) -> Vec<MissionTemplateId> {
        self.missions.keys().cloned().collect()
    }
}
