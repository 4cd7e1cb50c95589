//! Picks the concrete hero or item template for a resolved pull.
use crate::env::{Banner, CatalogEnv, RngOracle};
use crate::state::{HeroTypeId, ItemTemplateId, Rarity};

use super::resolver::{PullResolution, ResolveError};
use super::result::SummonReward;

/// Template chosen for a pull, and whether it came from the featured bucket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedReward {
    pub reward: SummonReward,
    pub is_featured: bool,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Kind {
    Hero,
    Item,
}

/// Uniform pick within the bucket selected by `resolution`.
///
/// A featured resolution draws from the banner's featured entries at the
/// resolved rarity. The result kind is restricted to kinds that actually have
/// such entries, so an armed guarantee is never spent on an empty bucket.
/// Otherwise (or when no featured entry exists at that rarity) the standard
/// bucket is used: the banner's restricted pool, or the whole catalog, at the
/// resolved rarity, excluding featured entries unless nothing else remains.
/// When the preferred result kind has no candidates the other kind is tried.
pub fn select_reward(
    banner: &Banner,
    resolution: &PullResolution,
    catalog: &CatalogEnv<'_>,
    rng: &mut dyn RngOracle,
) -> Result<SelectedReward, ResolveError> {
    let heroes = catalog.heroes()?;
    let items = catalog.items()?;
    let hero_rarity = |id: &HeroTypeId| heroes.hero_type(id).map(|hero_type| hero_type.rarity);
    let item_rarity = |id: &ItemTemplateId| items.template(id).map(|template| template.rarity);

    if resolution.is_featured {
        let featured_heroes =
            featured_bucket(&banner.featured_heroes, resolution.rarity, hero_rarity);
        let featured_items =
            featured_bucket(&banner.featured_items, resolution.rarity, item_rarity);
        let kind = match (featured_heroes.is_empty(), featured_items.is_empty()) {
            (false, false) => Some(roll_kind(banner, rng)),
            (false, true) => Some(Kind::Hero),
            (true, false) => Some(Kind::Item),
            (true, true) => None,
        };
        let reward = match kind {
            Some(Kind::Hero) => pick(&featured_heroes, rng).map(SummonReward::Hero),
            Some(Kind::Item) => pick(&featured_items, rng).map(SummonReward::Item),
            None => None,
        };
        if let Some(reward) = reward {
            return Ok(SelectedReward {
                reward,
                is_featured: true,
            });
        }
    }

    let preferred = roll_kind(banner, rng);
    let fallback = match preferred {
        Kind::Hero => Kind::Item,
        Kind::Item => Kind::Hero,
    };
    let wants_fallback = match fallback {
        Kind::Hero => banner.item_share < 1.0,
        Kind::Item => banner.item_share > 0.0,
    };

    for kind in [preferred, fallback] {
        if kind == fallback && !wants_fallback {
            break;
        }
        let selected = match kind {
            Kind::Hero => {
                let pool = match &banner.hero_pool {
                    Some(pool) => pool.clone(),
                    None => heroes.hero_types_of_rarity(resolution.rarity),
                };
                let standard =
                    standard_bucket(pool, &banner.featured_heroes, resolution.rarity, hero_rarity);
                pick(&standard, rng).map(|id| SelectedReward {
                    is_featured: banner.is_featured_hero(&id),
                    reward: SummonReward::Hero(id),
                })
            }
            Kind::Item => {
                let pool = match &banner.item_pool {
                    Some(pool) => pool.clone(),
                    None => items.templates_of_rarity(resolution.rarity),
                };
                let standard =
                    standard_bucket(pool, &banner.featured_items, resolution.rarity, item_rarity);
                pick(&standard, rng).map(|id| SelectedReward {
                    is_featured: banner.is_featured_item(&id),
                    reward: SummonReward::Item(id),
                })
            }
        };
        if let Some(selected) = selected {
            return Ok(selected);
        }
    }

    Err(ResolveError::EmptyPool {
        banner: banner.id.clone(),
        rarity: resolution.rarity,
    })
}

fn roll_kind(banner: &Banner, rng: &mut dyn RngOracle) -> Kind {
    if rng.chance(banner.item_share) {
        Kind::Item
    } else {
        Kind::Hero
    }
}

/// Featured ids whose catalog rarity is `rarity`.
fn featured_bucket<T, F>(featured: &[T], rarity: Rarity, rarity_of: F) -> Vec<T>
where
    T: Clone + Ord,
    F: Fn(&T) -> Option<Rarity>,
{
    let mut bucket: Vec<T> = featured
        .iter()
        .filter(|id| rarity_of(*id) == Some(rarity))
        .cloned()
        .collect();
    bucket.sort();
    bucket.dedup();
    bucket
}

/// Pool entries at `rarity`, featured ids removed unless that empties it.
fn standard_bucket<T, F>(pool: Vec<T>, featured: &[T], rarity: Rarity, rarity_of: F) -> Vec<T>
where
    T: Clone + Ord,
    F: Fn(&T) -> Option<Rarity>,
{
    let mut at_rarity: Vec<T> = pool
        .into_iter()
        .filter(|id| rarity_of(id) == Some(rarity))
        .collect();
    at_rarity.sort();
    at_rarity.dedup();

    let without_featured: Vec<T> = at_rarity
        .iter()
        .filter(|id| !featured.contains(*id))
        .cloned()
        .collect();
    if without_featured.is_empty() {
        at_rarity
    } else {
        without_featured
    }
}

fn pick<T: Clone>(candidates: &[T], rng: &mut dyn RngOracle) -> Option<T> {
    rng.index(candidates.len())
        .map(|index| candidates[index].clone())
}
