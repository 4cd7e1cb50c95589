//! Summon orchestration: banner checks, cost, pull resolution, and grants.
use std::str::FromStr;

use crate::config::GameConfig;
use crate::env::{CatalogEnv, Clock, IdSource, OracleError, Requirement, RngOracle};
use crate::error::{ErrorSeverity, GameError};
use crate::progression::ProgressEvent;
use crate::state::{
    BannerId, CurrencyKind, Grants, HeroTypeId, PlayerDelta, PlayerSnapshot, SummonResultId,
    SummonSession, UserId,
};

use super::pool::select_reward;
use super::resolver::{ResolveError, resolve_pull, settle_guarantee};
use super::result::{SummonMultiResult, SummonResult, SummonReward};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PullKind {
    Single,
    Ten,
    /// Once per UTC day on banners that offer it, free of charge.
    DailyFree,
}

impl PullKind {
    pub fn pulls(self) -> u32 {
        match self {
            Self::Single | Self::DailyFree => 1,
            Self::Ten => GameConfig::TEN_PULL_COUNT,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Ten => "ten",
            Self::DailyFree => "daily_free",
        }
    }
}

impl FromStr for PullKind {
    type Err = SummonError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "single" => Ok(Self::Single),
            "ten" | "multi" => Ok(Self::Ten),
            "daily_free" | "free" => Ok(Self::DailyFree),
            other => Err(SummonError::InvalidPullKind(other.to_owned())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummonRequest {
    pub user_id: UserId,
    pub banner_id: BannerId,
    pub pull_kind: PullKind,
}

/// Everything one summon reads. The engine performs no I/O.
pub struct SummonContext<'a> {
    pub catalog: CatalogEnv<'a>,
    pub player: &'a PlayerSnapshot,
    /// Stored session for this (user, banner); a fresh one is started if `None`.
    pub session: Option<&'a SummonSession>,
    pub clock: &'a dyn Clock,
    pub rng: &'a mut dyn RngOracle,
    pub ids: &'a dyn IdSource,
}

/// Currency removed from the wallet by a summon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpentCurrency {
    pub currency: CurrencyKind,
    pub amount: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SummonOutcome {
    pub result: SummonMultiResult,
    pub delta: PlayerDelta,
    /// `None` for a daily free summon.
    pub spent: Option<SpentCurrency>,
    /// Hero types pulled that the player already owned.
    pub duplicates: Vec<HeroTypeId>,
}

impl SummonOutcome {
    /// Mission progress this summon counts toward.
    pub fn progress_events(&self) -> Vec<ProgressEvent> {
        let mut events = Vec::new();
        let heroes = self
            .result
            .results
            .iter()
            .filter(|result| matches!(result.reward, SummonReward::Hero(_)))
            .count() as u32;
        if heroes > 0 {
            events.push(ProgressEvent::new(Requirement::SummonHeroes, heroes));
        }
        if !self.result.new_heroes.is_empty() {
            events.push(ProgressEvent::new(
                Requirement::OwnHeroes,
                self.result.new_heroes.len() as u32,
            ));
        }
        let items = self.result.results.len() as u32 - heroes;
        if items > 0 {
            events.push(ProgressEvent::new(Requirement::CollectItems, items));
        }
        if let Some(spent) = self.spent {
            let requirement = match spent.currency {
                CurrencyKind::Gold => Some(Requirement::SpendGold),
                CurrencyKind::Gems => Some(Requirement::SpendGems),
                CurrencyKind::SummonTicket | CurrencyKind::SpecialTicket => None,
            };
            if let Some(requirement) = requirement {
                let amount = u32::try_from(spent.amount).unwrap_or(u32::MAX);
                events.push(ProgressEvent::new(requirement, amount));
            }
        }
        events
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SummonError {
    #[error("banner '{0}' not found")]
    BannerNotFound(BannerId),

    #[error("banner '{0}' is not active")]
    BannerInactive(BannerId),

    #[error("insufficient {currency}: need {required}, have {available}")]
    InsufficientCurrency {
        currency: CurrencyKind,
        required: u64,
        available: u64,
    },

    #[error("daily free summon already claimed today")]
    AlreadyClaimedToday,

    #[error("invalid pull kind '{0}'")]
    InvalidPullKind(String),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Oracle(OracleError),
}

impl From<OracleError> for SummonError {
    fn from(err: OracleError) -> Self {
        match err {
            OracleError::BannerNotFound(id) => Self::BannerNotFound(id),
            other => Self::Oracle(other),
        }
    }
}

impl GameError for SummonError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::BannerNotFound(_) | Self::BannerInactive(_) | Self::InvalidPullKind(_) => {
                ErrorSeverity::Validation
            }
            Self::InsufficientCurrency { .. } | Self::AlreadyClaimedToday => {
                ErrorSeverity::Resource
            }
            Self::Resolve(err) => err.severity(),
            Self::Oracle(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::BannerNotFound(_) => "SUMMON_BANNER_NOT_FOUND",
            Self::BannerInactive(_) => "SUMMON_BANNER_INACTIVE",
            Self::InsufficientCurrency { .. } => "SUMMON_INSUFFICIENT_CURRENCY",
            Self::AlreadyClaimedToday => "SUMMON_ALREADY_CLAIMED_TODAY",
            Self::InvalidPullKind(_) => "SUMMON_INVALID_PULL_KIND",
            Self::Resolve(err) => err.error_code(),
            Self::Oracle(err) => err.error_code(),
        }
    }
}

/// Resolves a summon request into results and a single [`PlayerDelta`].
///
/// Every check runs before anything changes, so a rejected request leaves
/// no partial effect. A ten-pull resolves ten pulls on one evolving session.
pub fn summon(
    request: &SummonRequest,
    ctx: SummonContext<'_>,
) -> Result<SummonOutcome, SummonError> {
    let SummonContext {
        catalog,
        player,
        session,
        clock,
        rng,
        ids,
    } = ctx;
    let now = clock.now();

    let banner = catalog.banner(&request.banner_id)?;
    banner
        .validate()
        .map_err(|reason| ResolveError::InvalidBanner {
            banner: banner.id.clone(),
            reason,
        })?;
    if !banner.is_active(now) {
        return Err(SummonError::BannerInactive(banner.id.clone()));
    }

    let mut session = session
        .cloned()
        .unwrap_or_else(|| SummonSession::new(request.user_id.clone(), banner.id.clone(), now));
    let mut resources = player.resources.clone();
    let mut delta = PlayerDelta::new(request.user_id.clone());

    let spent = match request.pull_kind {
        PullKind::DailyFree => {
            if !banner.has_daily_free_summon {
                return Err(SummonError::InvalidPullKind(
                    PullKind::DailyFree.as_str().to_owned(),
                ));
            }
            if !session.can_claim_free_summon(now) {
                return Err(SummonError::AlreadyClaimedToday);
            }
            session.record_free_summon(now);
            None
        }
        PullKind::Single | PullKind::Ten => {
            let amount = match request.pull_kind {
                PullKind::Ten => banner.cost.ten,
                _ => banner.cost.single,
            };
            resources
                .debit(banner.cost.currency, amount)
                .map_err(|err| SummonError::InsufficientCurrency {
                    currency: err.currency,
                    required: err.required,
                    available: err.available,
                })?;
            delta.resources = Some(resources);
            Some(SpentCurrency {
                currency: banner.cost.currency,
                amount,
            })
        }
    };

    let mut grants = Grants::new(player);
    let mut results = Vec::with_capacity(request.pull_kind.pulls() as usize);
    for _ in 0..request.pull_kind.pulls() {
        let resolution = resolve_pull(&banner, &session, now, rng)?;
        let selected = select_reward(&banner, &resolution, &catalog, rng)?;
        session = resolution.session;
        settle_guarantee(&banner, &mut session, resolution.rarity, selected.is_featured);

        match &selected.reward {
            SummonReward::Hero(hero_type) => grants.grant_hero(hero_type, now, ids),
            SummonReward::Item(template) => {
                let stackable = catalog.item_template(template)?.is_stackable();
                grants.grant_item(template, 1, stackable, now, ids);
            }
        }

        results.push(SummonResult {
            id: SummonResultId::new(ids.next_id("summon")),
            user_id: request.user_id.clone(),
            banner_id: banner.id.clone(),
            timestamp: now,
            reward: selected.reward,
            rarity: resolution.rarity,
            is_featured: selected.is_featured,
            is_pity_break: resolution.is_pity_break,
            pull_number: resolution.pull_number,
        });
    }

    let mut new_heroes = Vec::with_capacity(grants.heroes.len());
    for hero in &grants.heroes {
        let hero_type = catalog.hero_type(&hero.hero_type)?;
        new_heroes.push(hero.details(&hero_type));
    }
    let mut new_items = Vec::with_capacity(grants.items.len());
    for item in &grants.items {
        let template = catalog.item_template(&item.template_id)?;
        new_items.push(item.clone().with_template(template));
    }

    session.updated_at = now;
    delta.session = Some(session);
    delta.heroes = grants.heroes;
    delta.items = grants.items;
    delta.summon_results = results.clone();

    Ok(SummonOutcome {
        result: SummonMultiResult {
            banner_id: banner.id.clone(),
            banner_name: banner.name.clone(),
            results,
            new_heroes,
            new_items,
        },
        delta,
        spent,
        duplicates: grants.duplicates,
    })
}
