use crate::env::{Banner, HeroOracle};
use crate::state::{BannerId, HeroBasicInfo, SummonSession};

/// Published odds of a banner plus the caller's pity standing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummonRateInfo {
    pub banner_id: BannerId,
    /// Total top-rarity rate, standard and featured combined.
    pub legendary_rate: f64,
    pub featured_rate: f64,
    pub guarantee_threshold: Option<u32>,
    pub current_pity: u32,
    /// Pulls left until the top rarity is forced, counting the forced pull.
    pub pulls_until_guarantee: Option<u32>,
    pub has_guarantee_active: bool,
    pub featured_heroes: Vec<HeroBasicInfo>,
}

pub fn rate_info(
    banner: &Banner,
    session: Option<&SummonSession>,
    heroes: &dyn HeroOracle,
) -> SummonRateInfo {
    let top = banner.top_rarity().and_then(|rarity| banner.rate_for(rarity));
    let current_pity = session.map(SummonSession::current_pity).unwrap_or(0);

    SummonRateInfo {
        banner_id: banner.id.clone(),
        legendary_rate: top.map(|rate| rate.width()).unwrap_or(0.0),
        featured_rate: top.map(|rate| rate.featured_rate).unwrap_or(0.0),
        guarantee_threshold: banner.guarantee_threshold,
        current_pity,
        pulls_until_guarantee: banner
            .guarantee_threshold
            .map(|threshold| threshold.saturating_sub(current_pity).max(1)),
        has_guarantee_active: session.is_some_and(|session| session.has_guarantee),
        featured_heroes: banner
            .featured_heroes
            .iter()
            .filter_map(|id| heroes.hero_type(id))
            .map(|hero_type| HeroBasicInfo::from(&hero_type))
            .collect(),
    }
}
