//! Rarity and pity resolution for a single pull.
//!
//! A pull first checks the pity counter. Once `current_pity + 1` reaches the
//! banner's threshold the top rarity is forced; otherwise a uniform draw is
//! matched against the cumulative rate table, highest tier first, and any
//! unclaimed mass falls through to the lowest tier.
use chrono::{DateTime, Utc};

use crate::env::{Banner, BannerDefect, GuaranteePolicy, OracleError, RngOracle};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{BannerId, Rarity, SummonSession};

/// Outcome of resolving one pull's rarity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PullResolution {
    pub rarity: Rarity,
    /// The draw asks for a featured entity. Whether one is awarded depends on
    /// what the pool holds at `rarity`; see [`settle_guarantee`].
    pub is_featured: bool,
    /// The top rarity was forced by the pity threshold.
    pub is_pity_break: bool,
    /// 1-based index of this pull on the session.
    pub pull_number: u32,
    /// Session state after this pull.
    pub session: SummonSession,
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ResolveError {
    #[error("banner '{banner}' is misconfigured: {reason}")]
    InvalidBanner {
        banner: BannerId,
        reason: BannerDefect,
    },

    #[error("banner '{0}' is not active")]
    BannerInactive(BannerId),

    #[error("banner '{banner}' has nothing to award at {rarity}")]
    EmptyPool { banner: BannerId, rarity: Rarity },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for ResolveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidBanner { .. } | Self::EmptyPool { .. } => ErrorSeverity::Fatal,
            Self::BannerInactive(_) => ErrorSeverity::Validation,
            Self::Oracle(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidBanner { .. } => "RESOLVE_INVALID_BANNER",
            Self::BannerInactive(_) => "RESOLVE_BANNER_INACTIVE",
            Self::EmptyPool { .. } => "RESOLVE_EMPTY_POOL",
            Self::Oracle(err) => err.error_code(),
        }
    }
}

/// Resolves the rarity of the next pull on `session`.
///
/// The session is not mutated; the advanced state is returned in the
/// resolution so a ten-pull can thread it through ten calls.
pub fn resolve_pull(
    banner: &Banner,
    session: &SummonSession,
    now: DateTime<Utc>,
    rng: &mut dyn RngOracle,
) -> Result<PullResolution, ResolveError> {
    banner.validate().map_err(|reason| ResolveError::InvalidBanner {
        banner: banner.id.clone(),
        reason,
    })?;
    if !banner.is_active(now) {
        return Err(ResolveError::BannerInactive(banner.id.clone()));
    }
    let top = banner
        .top_rarity()
        .ok_or_else(|| ResolveError::InvalidBanner {
            banner: banner.id.clone(),
            reason: BannerDefect::EmptyRateTable,
        })?;

    let pity = session.current_pity();
    let forced = banner
        .guarantee_threshold
        .is_some_and(|threshold| pity.saturating_add(1) >= threshold);

    let rarity = if forced {
        top
    } else {
        draw_rarity(banner, rng).unwrap_or(top)
    };

    let mut next = session.clone();
    let is_featured = if !has_featured(banner) {
        false
    } else if rarity == top && session.has_guarantee {
        true
    } else {
        let share = banner
            .rate_for(rarity)
            .map(|rate| rate.featured_share())
            .unwrap_or(0.0);
        rng.chance(share)
    };

    next.pull_count = next.pull_count.saturating_add(1);
    if rarity == top {
        next.last_top_rarity_at = next.pull_count;
    }
    next.updated_at = now;

    Ok(PullResolution {
        rarity,
        is_featured,
        is_pity_break: forced,
        pull_number: next.pull_count,
        session: next,
    })
}

/// Applies the guarantee rules once the pull's entity is known.
///
/// Only top-rarity hits touch the flag. A featured hit consumes the
/// guarantee; a standard hit arms it under
/// [`GuaranteePolicy::ArmOnStandardTop`] and leaves it untouched otherwise.
pub fn settle_guarantee(
    banner: &Banner,
    session: &mut SummonSession,
    rarity: Rarity,
    landed_featured: bool,
) {
    if banner.top_rarity() != Some(rarity) || !has_featured(banner) {
        return;
    }
    if landed_featured {
        session.has_guarantee = false;
    } else if banner.guarantee_policy == GuaranteePolicy::ArmOnStandardTop {
        session.has_guarantee = true;
    }
}

fn has_featured(banner: &Banner) -> bool {
    !banner.featured_heroes.is_empty() || !banner.featured_items.is_empty()
}

/// Draws `u` in `[0, 1)` against the cumulative table, highest tier first.
/// Mass not covered by the table belongs to the lowest tier.
fn draw_rarity(banner: &Banner, rng: &mut dyn RngOracle) -> Option<Rarity> {
    let roll = rng.next_f64();
    let mut cumulative = 0.0;
    for tier in banner.tiers_descending() {
        cumulative += tier.width();
        if roll < cumulative {
            return Some(tier.rarity);
        }
    }
    banner.lowest_rarity()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{BannerKind, PcgRng, RarityRate, SummonCost};
    use crate::state::{CurrencyKind, HeroTypeId, UserId};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn banner(threshold: Option<u32>) -> Banner {
        Banner {
            id: BannerId::from("event"),
            name: "Event".into(),
            kind: BannerKind::Event,
            rates: vec![
                RarityRate::new(Rarity::Legendary, 0.01, 0.01),
                RarityRate::new(Rarity::Epic, 0.08, 0.0),
                RarityRate::new(Rarity::Rare, 0.25, 0.0),
                RarityRate::new(Rarity::Common, 0.0, 0.0),
            ],
            guarantee_threshold: threshold,
            guarantee_policy: GuaranteePolicy::ClearOnConsume,
            cost: SummonCost {
                single: 100,
                ten: 1000,
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

    fn session() -> SummonSession {
        SummonSession::new(UserId::from("u1"), BannerId::from("event"), now())
    }

    #[test]
    fn pity_threshold_forces_top_rarity() {
        let banner = banner(Some(10));
        let mut session = session();
        session.pull_count = 9;

        let mut rng = PcgRng::new(1);
        let resolution = resolve_pull(&banner, &session, now(), &mut rng).unwrap();
        assert_eq!(resolution.rarity, Rarity::Legendary);
        assert!(resolution.is_pity_break);
        assert_eq!(resolution.pull_number, 10);
        assert_eq!(resolution.session.last_top_rarity_at, 10);
        assert_eq!(resolution.session.current_pity(), 0);
    }

    #[test]
    fn pity_never_exceeds_threshold() {
        let banner = banner(Some(20));
        let mut session = session();
        let mut rng = PcgRng::new(7);
        for _ in 0..2_000 {
            let resolution = resolve_pull(&banner, &session, now(), &mut rng).unwrap();
            session = resolution.session;
            assert!(session.current_pity() < 20);
        }
    }

    #[test]
    fn guarantee_makes_top_hit_featured_and_is_consumed() {
        let banner = banner(Some(1));
        let mut session = session();
        session.has_guarantee = true;

        // Threshold 1 forces every pull to the top rarity.
        let mut rng = PcgRng::new(5);
        let first = resolve_pull(&banner, &session, now(), &mut rng).unwrap();
        assert!(first.is_featured);
        // Resolution alone leaves the flag for the caller to settle.
        assert!(first.session.has_guarantee);

        let mut settled = first.session.clone();
        settle_guarantee(&banner, &mut settled, first.rarity, true);
        assert!(!settled.has_guarantee);
    }

    #[test]
    fn standard_top_hit_keeps_an_armed_guarantee() {
        let banner = banner(Some(1));
        let mut armed = session();
        armed.has_guarantee = true;

        settle_guarantee(&banner, &mut armed, Rarity::Legendary, false);
        assert!(armed.has_guarantee);

        // Lower tiers never touch the flag.
        settle_guarantee(&banner, &mut armed, Rarity::Epic, true);
        assert!(armed.has_guarantee);
    }

    #[test]
    fn organic_standard_top_hit_leaves_guarantee_clear_by_default() {
        let mut banner = banner(Some(1));
        // Featured share of zero: every top hit is standard.
        banner.rates[0] = RarityRate::new(Rarity::Legendary, 0.02, 0.0);
        let mut rng = PcgRng::new(9);
        let resolution = resolve_pull(&banner, &session(), now(), &mut rng).unwrap();
        assert!(!resolution.is_featured);
        let mut settled = resolution.session.clone();
        settle_guarantee(&banner, &mut settled, resolution.rarity, false);
        assert!(!settled.has_guarantee);

        banner.guarantee_policy = GuaranteePolicy::ArmOnStandardTop;
        let resolution = resolve_pull(&banner, &session(), now(), &mut rng).unwrap();
        let mut settled = resolution.session.clone();
        settle_guarantee(&banner, &mut settled, resolution.rarity, false);
        assert!(settled.has_guarantee);
    }

    #[test]
    fn rejects_inactive_and_malformed_banners() {
        let mut inactive = banner(None);
        inactive.end_time = Some(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());
        let mut rng = PcgRng::new(1);
        assert_eq!(
            resolve_pull(&inactive, &session(), now(), &mut rng),
            Err(ResolveError::BannerInactive(BannerId::from("event")))
        );

        let mut overflowing = banner(None);
        overflowing.rates[2].base_rate = 0.99;
        let err = resolve_pull(&overflowing, &session(), now(), &mut rng).unwrap_err();
        assert!(matches!(
            err,
            ResolveError::InvalidBanner {
                reason: BannerDefect::RateTableOverflow { .. },
                ..
            }
        ));
        assert!(err.severity().is_fatal());
    }

    #[test]
    fn observed_frequencies_match_rate_table() {
        const SAMPLES: usize = 200_000;
        let banner = banner(None);
        let session = session();
        let mut rng = PcgRng::new(2024);
        let mut counts = [0usize; 5];
        for _ in 0..SAMPLES {
            let resolution = resolve_pull(&banner, &session, now(), &mut rng).unwrap();
            counts[resolution.rarity as usize] += 1;
        }

        let frequency = |rarity: Rarity| counts[rarity as usize] as f64 / SAMPLES as f64;
        let expected = [
            (Rarity::Legendary, 0.02),
            (Rarity::Epic, 0.08),
            (Rarity::Rare, 0.25),
            // The common tier owns the unassigned remainder.
            (Rarity::Common, 0.65),
            (Rarity::Uncommon, 0.0),
        ];
        for (rarity, rate) in expected {
            let observed = frequency(rarity);
            assert!(
                (observed - rate).abs() < 0.01,
                "{rarity}: observed {observed}, expected {rate}"
            );
        }
    }

    #[test]
    fn same_seed_same_resolution() {
        let banner = banner(Some(90));
        let mut a = PcgRng::new(77);
        let mut b = PcgRng::new(77);
        let left = resolve_pull(&banner, &session(), now(), &mut a).unwrap();
        let right = resolve_pull(&banner, &session(), now(), &mut b).unwrap();
        assert_eq!(left, right);
    }
}
