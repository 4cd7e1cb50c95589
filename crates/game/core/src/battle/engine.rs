//! Stage battles: team validation, the fight itself, and victory rewards.
use crate::combat::{Combatant, Outcome, Side, SkillPolicy, simulate};
use crate::config::RewardSplit;
use crate::env::{CatalogEnv, Clock, IdSource, OracleError, Requirement, RngOracle};
use crate::error::{ErrorSeverity, GameError};
use crate::progression::{LevelChange, ProgressEvent, split_experience};
use crate::state::{
    BattleId, CurrencyKind, Grants, Hero, HeroId, PlayerDelta, PlayerSnapshot, StageId, TeamId,
    TeamSlots, UserId,
};

use super::drops::DropTable;
use super::result::BattleResult;
use super::rewards::Rewards;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleRequest {
    pub user_id: UserId,
    pub team_id: Option<TeamId>,
    pub slots: TeamSlots,
    pub stage_id: StageId,
}

/// Everything one battle reads. The engine performs no I/O.
pub struct BattleContext<'a> {
    pub catalog: CatalogEnv<'a>,
    pub player: &'a PlayerSnapshot,
    pub clock: &'a dyn Clock,
    pub rng: &'a mut dyn RngOracle,
    pub ids: &'a dyn IdSource,
    pub policy: &'a dyn SkillPolicy,
    pub drops: &'a dyn DropTable,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BattleOutcome {
    pub result: BattleResult,
    pub delta: PlayerDelta,
    pub enemies_defeated: u32,
}

impl BattleOutcome {
    /// Mission progress this battle counts toward.
    pub fn progress_events(&self) -> Vec<ProgressEvent> {
        let mut events = vec![ProgressEvent::new(Requirement::CompleteBattles, 1)];
        if self.result.is_victory() {
            events.push(ProgressEvent::new(Requirement::WinBattles, 1));
        }
        if self.enemies_defeated > 0 {
            events.push(ProgressEvent::new(
                Requirement::KillEnemies,
                self.enemies_defeated,
            ));
        }
        let levels_gained = self
            .result
            .level_changes
            .iter()
            .map(|change| change.new_level - change.old_level)
            .sum::<u32>();
        if levels_gained > 0 {
            events.push(ProgressEvent::new(Requirement::LevelUpHero, levels_gained));
        }
        let items = self.result.rewards.items.len() as u32;
        if items > 0 {
            events.push(ProgressEvent::new(Requirement::CollectItems, items));
        }
        events
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error("team has no heroes assigned")]
    EmptyTeam,

    #[error("hero '{0}' is not owned by the player")]
    HeroNotOwned(HeroId),

    #[error("stage '{0}' not found")]
    StageNotFound(StageId),

    #[error(transparent)]
    Oracle(OracleError),
}

impl From<OracleError> for BattleError {
    fn from(err: OracleError) -> Self {
        match err {
            OracleError::StageNotFound(id) => Self::StageNotFound(id),
            other => Self::Oracle(other),
        }
    }
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyTeam | Self::HeroNotOwned(_) | Self::StageNotFound(_) => {
                ErrorSeverity::Validation
            }
            Self::Oracle(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyTeam => "BATTLE_EMPTY_TEAM",
            Self::HeroNotOwned(_) => "BATTLE_HERO_NOT_OWNED",
            Self::StageNotFound(_) => "BATTLE_STAGE_NOT_FOUND",
            Self::Oracle(err) => err.error_code(),
        }
    }
}

/// Fights `request.stage_id` with the requested team and settles the result.
///
/// Units start at full HP, freshly built from their templates. A victory
/// credits the stage gold, splits the stage experience, and rolls drops. The
/// returned delta carries every change; nothing is persisted here.
pub fn resolve_stage(
    request: &BattleRequest,
    ctx: BattleContext<'_>,
) -> Result<BattleOutcome, BattleError> {
    let BattleContext {
        catalog,
        player,
        clock,
        rng,
        ids,
        policy,
        drops,
    } = ctx;
    let now = clock.now();

    if request.slots.is_empty() {
        return Err(BattleError::EmptyTeam);
    }

    let mut members: Vec<Hero> = Vec::with_capacity(request.slots.len());
    let mut team = Vec::with_capacity(request.slots.len());
    for (position, hero_id) in request.slots.iter() {
        let hero = player
            .hero(hero_id)
            .filter(|hero| hero.user_id == request.user_id)
            .ok_or_else(|| BattleError::HeroNotOwned(hero_id.clone()))?;
        let hero_type = catalog.hero_type(&hero.hero_type)?;
        let stats = hero.stats(&hero_type);
        team.push(Combatant::new(
            hero.id.as_str(),
            hero_type.name.clone(),
            Side::Team,
            position,
            stats.hp,
            stats.atk,
            hero_type.combat_skills(),
        ));
        members.push(hero.clone());
    }

    let stage = catalog.stage(&request.stage_id)?;
    let mut enemies = Vec::with_capacity(stage.enemies.len());
    for (index, enemy_type) in stage.enemies.iter().enumerate() {
        let template = catalog.enemy(enemy_type)?;
        let position = index + 1;
        enemies.push(Combatant::new(
            format!("{}-{}", template.id, position),
            template.name.clone(),
            Side::Enemy,
            position,
            template.hp,
            template.atk,
            template.combat_skills(),
        ));
    }

    let config = catalog.config()?;
    let report = simulate(&team, &enemies, policy, rng, config.max_battle_turns());

    let mut delta = PlayerDelta::new(request.user_id.clone());
    let mut rewards = Rewards::default();
    let mut level_changes: Vec<LevelChange> = Vec::new();

    if report.outcome == Outcome::Victory {
        let mut resources = player.resources.clone();
        resources.credit(CurrencyKind::Gold, stage.gold_reward);
        rewards.gold = stage.gold_reward;
        delta.resources = Some(resources);

        let survivors: Vec<HeroId> = members
            .iter()
            .zip(&report.team)
            .filter(|(_, unit)| unit.is_alive())
            .map(|(hero, _)| hero.id.clone())
            .collect();
        let recipients = match config.reward_split() {
            RewardSplit::Survivors if !survivors.is_empty() => survivors,
            RewardSplit::Survivors | RewardSplit::All => {
                members.iter().map(|hero| hero.id.clone()).collect()
            }
        };
        for (hero_id, amount) in split_experience(stage.exp_reward, &recipients) {
            let Some(hero) = members.iter_mut().find(|hero| hero.id == hero_id) else {
                continue;
            };
            level_changes.push(hero.add_experience(amount));
            rewards.experience.insert(hero_id, amount);
            delta.upsert_hero(hero.clone());
        }

        let mut grants = Grants::new(player);
        for drop in drops.roll(&stage, rng) {
            let template = catalog.item_template(&drop.template)?;
            grants.grant_item(
                &template.id,
                drop.quantity,
                template.is_stackable(),
                now,
                ids,
            );
            rewards
                .items
                .extend(std::iter::repeat_n(template.id, drop.quantity as usize));
        }
        delta.items = grants.items;
    }

    let enemies_defeated = report.enemies_defeated() as u32;
    let result = BattleResult {
        id: BattleId::new(ids.next_id("battle")),
        user_id: request.user_id.clone(),
        team_id: request.team_id.clone(),
        heroes: request.slots.hero_ids(),
        stage_id: stage.id.clone(),
        outcome: report.outcome,
        timed_out: report.timed_out,
        log: report.turns,
        rewards,
        level_changes,
        created_at: now,
    };
    delta.battle_result = Some(result.clone());

    Ok(BattleOutcome {
        result,
        delta,
        enemies_defeated,
    })
}
