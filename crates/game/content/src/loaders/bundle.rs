//! A whole catalog, checked for dangling references.

use std::collections::BTreeSet;
use std::fmt::Display;

use game_core::GameConfig;
use game_core::env::{Banner, EnemyTemplate, HeroType, ItemTemplate, MissionTemplate, StageDefinition};

use crate::loaders::LoadResult;

/// Everything a runtime needs to serve catalog oracles.
#[derive(Debug, Clone, Default)]
pub struct ContentBundle {
    pub config: GameConfig,
    pub banners: Vec<Banner>,
    pub heroes: Vec<HeroType>,
    pub items: Vec<ItemTemplate>,
    pub enemies: Vec<EnemyTemplate>,
    pub stages: Vec<StageDefinition>,
    pub missions: Vec<MissionTemplate>,
}

impl ContentBundle {
    /// Rejects duplicate ids and any reference to a template the bundle
    /// does not contain.
    pub fn validate(&self) -> LoadResult<()> {
        let heroes = unique_ids("hero type", self.heroes.iter().map(|hero| hero.id.as_str()))?;
        let items = unique_ids("item template", self.items.iter().map(|item| item.id.as_str()))?;
        let enemies = unique_ids(
            "enemy type",
            self.enemies.iter().map(|enemy| enemy.id.as_str()),
        )?;
        unique_ids("banner", self.banners.iter().map(|banner| banner.id.as_str()))?;
        unique_ids("stage", self.stages.iter().map(|stage| stage.id.as_str()))?;
        unique_ids(
            "mission template",
            self.missions.iter().map(|mission| mission.id.as_str()),
        )?;

        for banner in &self.banners {
            let owner = format!("banner '{}'", banner.id);
            let hero_refs = banner
                .featured_heroes
                .iter()
                .chain(banner.hero_pool.iter().flatten());
            for hero in hero_refs {
                ensure_known(&heroes, hero.as_str(), "hero type", &owner)?;
            }
            let item_refs = banner
                .featured_items
                .iter()
                .chain(banner.item_pool.iter().flatten());
            for item in item_refs {
                ensure_known(&items, item.as_str(), "item template", &owner)?;
            }
        }

        for stage in &self.stages {
            let owner = format!("stage '{}'", stage.id);
            for enemy in &stage.enemies {
                ensure_known(&enemies, enemy.as_str(), "enemy type", &owner)?;
            }
            for entry in &stage.drops {
                ensure_known(&items, entry.item.as_str(), "item template", &owner)?;
                if !(0.0..=1.0).contains(&entry.chance) {
                    anyhow::bail!(
                        "{} drops '{}' with chance {} outside [0, 1]",
                        owner,
                        entry.item,
                        entry.chance
                    );
                }
            }
        }

        for mission in &self.missions {
            let owner = format!("mission '{}'", mission.id);
            for item in &mission.rewards.items {
                ensure_known(&items, item.as_str(), "item template", &owner)?;
            }
        }

        Ok(())
    }
}

fn unique_ids<'a>(
    kind: &str,
    ids: impl Iterator<Item = &'a str>,
) -> LoadResult<BTreeSet<&'a str>> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            anyhow::bail!("Duplicate {} id '{}'", kind, id);
        }
    }
    Ok(seen)
}

fn ensure_known(
    known: &BTreeSet<&str>,
    id: &str,
    kind: &str,
    owner: &impl Display,
) -> LoadResult<()> {
    if known.contains(id) {
        Ok(())
    } else {
        anyhow::bail!("{} references unknown {} '{}'", owner, kind, id)
    }
}
