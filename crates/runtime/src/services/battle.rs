//! Team management and stage battles.

use game_core::battle::{BattleContext, BattleError, BattleRequest, BattleResult, resolve_stage};
use game_core::error::GameError;
use game_core::state::{StageId, Team, TeamId, TeamSlots, UserId};
use tracing::{debug, info, warn};

use crate::api::{Result, RuntimeError};
use crate::events::BattleEvent;
use crate::runtime::{BATTLE_STREAM, Runtime};

/// Which heroes fight a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TeamSelection {
    /// A team saved with [`Runtime::set_team`].
    Saved(TeamId),
    /// An ad-hoc lineup.
    Slots(TeamSlots),
}

impl Runtime {
    /// Saves a named lineup. Every hero must belong to the player.
    pub async fn set_team(
        &self,
        user_id: &UserId,
        team_id: TeamId,
        name: impl Into<String>,
        slots: TeamSlots,
    ) -> Result<Team> {
        let _guard = self.locks.acquire(user_id).await;
        let player = self.load_player(user_id)?;
        for (_, hero_id) in slots.iter() {
            if player.hero(hero_id).is_none() {
                return Err(BattleError::HeroNotOwned(hero_id.clone()).into());
            }
        }

        let team = Team {
            id: team_id,
            user_id: user_id.clone(),
            name: name.into(),
            slots,
            updated_at: self.clock.now(),
        };
        self.repository.save_team(&team)?;
        debug!(user = %user_id, team = %team.id, heroes = team.slots.len(), "team saved");
        Ok(team)
    }

    /// Fights `stage_id` and commits the result, rewards and mission
    /// progress together.
    pub async fn start_battle(
        &self,
        user_id: &UserId,
        selection: TeamSelection,
        stage_id: &StageId,
    ) -> Result<BattleResult> {
        let _guard = self.locks.acquire(user_id).await;
        let player = self.load_player(user_id)?;

        let (team_id, slots) = match selection {
            TeamSelection::Saved(team_id) => {
                let team = self
                    .repository
                    .load_team(user_id, &team_id)?
                    .ok_or_else(|| RuntimeError::TeamNotFound {
                        user: user_id.clone(),
                        team: team_id.clone(),
                    })?;
                (Some(team_id), team.slots)
            }
            TeamSelection::Slots(slots) => (None, slots),
        };

        let request = BattleRequest {
            user_id: user_id.clone(),
            team_id,
            slots,
            stage_id: stage_id.clone(),
        };
        let mut rng = self.request_rng(BATTLE_STREAM);
        let ctx = BattleContext {
            catalog: self.oracles.as_catalog_env(),
            player: &player,
            clock: self.clock.as_ref(),
            rng: &mut rng,
            ids: self.ids.as_ref(),
            policy: self.policy.as_ref(),
            drops: self.drops.as_ref(),
        };
        let outcome = match resolve_stage(&request, ctx) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(
                    user = %user_id,
                    stage = %stage_id,
                    code = err.error_code(),
                    "battle rejected: {err}"
                );
                self.events.publish(BattleEvent::Rejected {
                    user_id: user_id.clone(),
                    stage_id: stage_id.clone(),
                    code: err.error_code().to_owned(),
                });
                return Err(err.into());
            }
        };

        let progress = outcome.progress_events();
        let mut delta = outcome.delta;
        let completed = self.advance_missions(user_id, &progress, &mut delta)?;
        self.repository.commit(&delta)?;

        let result = outcome.result;
        for turn in &result.log {
            for action in &turn.actions {
                debug!(
                    turn = turn.turn,
                    actor = %action.actor,
                    target = %action.target,
                    skill = %action.skill_used,
                    damage = action.damage_dealt,
                    remaining = action.target_hp_remaining,
                    "battle action"
                );
            }
        }
        info!(
            user = %user_id,
            stage = %stage_id,
            battle = %result.id,
            outcome = %result.outcome,
            turns = result.turn_count(),
            gold = result.rewards.gold,
            "battle resolved"
        );

        self.events.publish(BattleEvent::Resolved {
            user_id: user_id.clone(),
            battle_id: result.id.clone(),
            stage_id: stage_id.clone(),
            outcome: result.outcome,
            turns: result.turn_count(),
        });
        self.publish_level_ups(user_id, &result.level_changes);
        self.publish_completed(completed);

        Ok(result)
    }

    /// Battle results, newest first.
    pub fn battle_history(&self, user_id: &UserId, limit: usize) -> Result<Vec<BattleResult>> {
        Ok(self.repository.battle_history(user_id, limit)?)
    }
}
