//! Summon banner templates.
use chrono::{DateTime, Utc};

use crate::state::{BannerId, CurrencyKind, HeroTypeId, ItemTemplateId, Rarity};

/// Tolerance applied when checking that a rate table sums to at most 1.
const RATE_EPSILON: f64 = 1e-9;

/// Read-only access to banner templates.
pub trait BannerOracle: Send + Sync {
    fn banner(&self, id: &BannerId) -> Option<Banner>;

    /// Every banner id known to the catalog, sorted.
    fn banner_ids(&self) -> Vec<BannerId>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BannerKind {
    #[default]
    Standard,
    Event,
    Special,
}

/// Probability mass of one rarity tier.
///
/// `base_rate` covers the standard pool at this rarity, `featured_rate` the
/// banner's featured entries. The tier's total width is their sum.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RarityRate {
    pub rarity: Rarity,
    pub base_rate: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub featured_rate: f64,
}

impl RarityRate {
    pub fn new(rarity: Rarity, base_rate: f64, featured_rate: f64) -> Self {
        Self {
            rarity,
            base_rate,
            featured_rate,
        }
    }

    pub fn width(&self) -> f64 {
        self.base_rate + self.featured_rate
    }

    /// Share of this tier that lands on a featured entry.
    pub fn featured_share(&self) -> f64 {
        let width = self.width();
        if width > 0.0 {
            self.featured_rate / width
        } else {
            0.0
        }
    }
}

/// Price of a single pull and of a ten-pull.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummonCost {
    pub single: u64,
    pub ten: u64,
    pub currency: CurrencyKind,
}

/// What happens to `has_guarantee` when a top-rarity pull misses the
/// featured pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GuaranteePolicy {
    /// The flag is only ever cleared by the featured hit that consumes it.
    #[default]
    ClearOnConsume,
    /// A non-featured top-rarity hit arms the guarantee for the next one.
    ArmOnStandardTop,
}

/// Structural problem in a banner's rate table.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum BannerDefect {
    #[error("rate table is empty")]
    EmptyRateTable,

    #[error("{rarity} rate is negative or not a number")]
    NegativeRate { rarity: Rarity },

    #[error("{rarity} appears more than once in the rate table")]
    DuplicateTier { rarity: Rarity },

    #[error("rates sum to {total}, which exceeds 1")]
    RateTableOverflow { total: f64 },

    #[error("item share {share} is outside [0, 1]")]
    InvalidItemShare { share: f64 },
}

/// A summon banner: rate table, pity rules, cost, and reward pools.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Banner {
    pub id: BannerId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: BannerKind,
    pub rates: Vec<RarityRate>,
    /// Pulls after which a top-rarity result is forced. `None` disables pity.
    #[cfg_attr(feature = "serde", serde(default))]
    pub guarantee_threshold: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub guarantee_policy: GuaranteePolicy,
    pub cost: SummonCost,
    pub start_time: DateTime<Utc>,
    /// Exclusive end of the active window; open-ended when `None`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub end_time: Option<DateTime<Utc>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub featured_heroes: Vec<HeroTypeId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub featured_items: Vec<ItemTemplateId>,
    /// Restricts the standard hero pool; the whole catalog when `None`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hero_pool: Option<Vec<HeroTypeId>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub item_pool: Option<Vec<ItemTemplateId>>,
    /// Probability that a pull yields an item instead of a hero.
    #[cfg_attr(feature = "serde", serde(default))]
    pub item_share: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub has_daily_free_summon: bool,
}

impl Banner {
    /// `start_time <= now < end_time`.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        if now < self.start_time {
            return false;
        }
        match self.end_time {
            Some(end) => now < end,
            None => true,
        }
    }

    pub fn top_rarity(&self) -> Option<Rarity> {
        self.rates.iter().map(|rate| rate.rarity).max()
    }

    pub fn lowest_rarity(&self) -> Option<Rarity> {
        self.rates.iter().map(|rate| rate.rarity).min()
    }

    pub fn rate_for(&self, rarity: Rarity) -> Option<&RarityRate> {
        self.rates.iter().find(|rate| rate.rarity == rarity)
    }

    pub fn total_rate(&self) -> f64 {
        self.rates.iter().map(RarityRate::width).sum()
    }

    /// Tiers sorted highest rarity first, the order draws are resolved in.
    pub fn tiers_descending(&self) -> Vec<RarityRate> {
        let mut tiers = self.rates.clone();
        tiers.sort_by(|a, b| b.rarity.cmp(&a.rarity));
        tiers
    }

    pub fn is_featured_hero(&self, hero_type: &HeroTypeId) -> bool {
        self.featured_heroes.contains(hero_type)
    }

    pub fn is_featured_item(&self, template: &ItemTemplateId) -> bool {
        self.featured_items.contains(template)
    }

    /// Checks the rate table before any pull is resolved against it.
    pub fn validate(&self) -> Result<(), BannerDefect> {
        if self.rates.is_empty() {
            return Err(BannerDefect::EmptyRateTable);
        }

        let mut seen = Vec::with_capacity(self.rates.len());
        for rate in &self.rates {
            // `!(x >= 0.0)` also rejects NaN.
            if !(rate.base_rate >= 0.0) || !(rate.featured_rate >= 0.0) {
                return Err(BannerDefect::NegativeRate {
                    rarity: rate.rarity,
                });
            }
            if seen.contains(&rate.rarity) {
                return Err(BannerDefect::DuplicateTier {
                    rarity: rate.rarity,
                });
            }
            seen.push(rate.rarity);
        }

        let total = self.total_rate();
        if !total.is_finite() || total > 1.0 + RATE_EPSILON {
            return Err(BannerDefect::RateTableOverflow { total });
        }

        if !(0.0..=1.0).contains(&self.item_share) {
            return Err(BannerDefect::InvalidItemShare {
                share: self.item_share,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn banner() -> Banner {
        Banner {
            id: BannerId::from("standard"),
            name: "Standard".into(),
            kind: BannerKind::Standard,
            rates: vec![
                RarityRate::new(Rarity::Legendary, 0.01, 0.005),
                RarityRate::new(Rarity::Epic, 0.085, 0.0),
                RarityRate::new(Rarity::Rare, 0.3, 0.0),
            ],
            guarantee_threshold: Some(90),
            guarantee_policy: GuaranteePolicy::default(),
            cost: SummonCost {
                single: 100,
                ten: 900,
                currency: CurrencyKind::Gems,
            },
            start_time: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            end_time: Some(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()),
            featured_heroes: Vec::new(),
            featured_items: Vec::new(),
            hero_pool: None,
            item_pool: None,
            item_share: 0.0,
            has_daily_free_summon: false,
        }
    }

    #[test]
    fn active_window_is_half_open() {
        let banner = banner();
        assert!(banner.is_active(banner.start_time));
        assert!(!banner.is_active(banner.start_time - chrono::Duration::seconds(1)));
        assert!(!banner.is_active(banner.end_time.unwrap()));
    }

    #[test]
    fn top_and_lowest_rarity_come_from_table() {
        let banner = banner();
        assert_eq!(banner.top_rarity(), Some(Rarity::Legendary));
        assert_eq!(banner.lowest_rarity(), Some(Rarity::Rare));
        assert_eq!(banner.tiers_descending()[0].rarity, Rarity::Legendary);
    }

    #[test]
    fn rejects_overflowing_table() {
        let mut banner = banner();
        banner.rates.push(RarityRate::new(Rarity::Common, 0.7, 0.0));
        assert!(matches!(
            banner.validate(),
            Err(BannerDefect::RateTableOverflow { .. })
        ));
    }

    #[test]
    fn rejects_negative_and_duplicate_tiers() {
        let mut negative = banner();
        negative.rates[1].base_rate = -0.1;
        assert_eq!(
            negative.validate(),
            Err(BannerDefect::NegativeRate {
                rarity: Rarity::Epic
            })
        );

        let mut duplicate = banner();
        duplicate.rates.push(RarityRate::new(Rarity::Rare, 0.01, 0.0));
        assert_eq!(
            duplicate.validate(),
            Err(BannerDefect::DuplicateTier {
                rarity: Rarity::Rare
            })
        );
    }

    #[test]
    fn featured_share_splits_tier() {
        let rate = RarityRate::new(Rarity::Legendary, 0.01, 0.01);
        assert!((rate.featured_share() - 0.5).abs() < 1e-12);
        assert_eq!(RarityRate::new(Rarity::Rare, 0.0, 0.0).featured_share(), 0.0);
    }
}
