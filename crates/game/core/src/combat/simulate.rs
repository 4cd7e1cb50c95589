//! Turn-based fight between a team and a stage's enemies.
//!
//! Each full turn alternates the sides by slot rank: the team's first unit,
//! the enemies' first unit, the team's second unit, and so on, each side
//! ordered by position. Dead units are skipped. The fight ends the moment one
//! side has nobody left standing, so the side whose action finished the fight
//! wins even if it would have been wiped out later in the same turn.
use crate::env::RngOracle;

use super::damage::{apply_damage, calculate_damage};
use super::log::{BattleAction, BattleTurn};
use super::policy::{Decision, SkillPolicy};
use super::unit::{Combatant, Side};

/// Skill id logged when a unit has nothing off cooldown.
pub const WAIT_SKILL: &str = "wait";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Outcome {
    Victory,
    Defeat,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CombatReport {
    pub outcome: Outcome,
    pub turns: Vec<BattleTurn>,
    /// Final state of both sides.
    pub team: Vec<Combatant>,
    pub enemies: Vec<Combatant>,
    /// The turn cap was reached with both sides standing.
    pub timed_out: bool,
}

impl CombatReport {
    pub fn survivors(&self) -> impl Iterator<Item = &Combatant> {
        self.team.iter().filter(|unit| unit.is_alive())
    }

    pub fn enemies_defeated(&self) -> usize {
        self.enemies.iter().filter(|unit| !unit.is_alive()).count()
    }
}

/// Runs the fight to completion, or until `max_turns` full turns have passed,
/// which counts as a defeat.
pub fn simulate(
    team: &[Combatant],
    enemies: &[Combatant],
    policy: &dyn SkillPolicy,
    rng: &mut dyn RngOracle,
    max_turns: u32,
) -> CombatReport {
    let mut team = team.to_vec();
    let mut enemies = enemies.to_vec();
    let finished = |outcome, turns, team, enemies, timed_out| CombatReport {
        outcome,
        turns,
        team,
        enemies,
        timed_out,
    };

    if !any_alive(&enemies) {
        return finished(Outcome::Victory, Vec::new(), team, enemies, false);
    }
    if !any_alive(&team) {
        return finished(Outcome::Defeat, Vec::new(), team, enemies, false);
    }

    let order = acting_order(&team, &enemies);
    let mut turns = Vec::new();

    for turn in 1..=max_turns {
        let mut actions = Vec::new();
        let mut used: Vec<(Side, usize, usize)> = Vec::new();

        for &(side, index) in &order {
            let (own, opponents) = match side {
                Side::Team => (&mut team, &mut enemies),
                Side::Enemy => (&mut enemies, &mut team),
            };
            if !own[index].is_alive() {
                continue;
            }

            match policy.decide(&own[index], opponents, rng) {
                Decision::Use { skill, target }
                    if own[index].skills.get(skill).is_some()
                        && opponents.get(target).is_some_and(Combatant::is_alive) =>
                {
                    let actor = &mut own[index];
                    let used_skill = actor.skills[skill].clone();
                    let damage = calculate_damage(actor.atk, used_skill.damage_multiplier);
                    let targets: Vec<usize> = if used_skill.targets_all {
                        (0..opponents.len())
                            .filter(|&i| opponents[i].is_alive())
                            .collect()
                    } else {
                        vec![target]
                    };
                    for target in targets {
                        let remaining = apply_damage(&mut opponents[target], damage);
                        actions.push(BattleAction {
                            actor: actor.id.clone(),
                            target: opponents[target].id.clone(),
                            skill_used: used_skill.id.to_string(),
                            damage_dealt: damage,
                            target_hp_remaining: remaining,
                        });
                    }
                    actor.cooldowns[skill] = used_skill.cooldown;
                    used.push((side, index, skill));
                }
                _ => actions.push(wait(&own[index])),
            }

            if !any_alive(opponents) {
                turns.push(BattleTurn { turn, actions });
                let outcome = match side {
                    Side::Team => Outcome::Victory,
                    Side::Enemy => Outcome::Defeat,
                };
                return finished(outcome, turns, team, enemies, false);
            }
        }

        tick_cooldowns(&mut team, Side::Team, &used);
        tick_cooldowns(&mut enemies, Side::Enemy, &used);
        turns.push(BattleTurn { turn, actions });
    }

    finished(Outcome::Defeat, turns, team, enemies, true)
}

fn any_alive(units: &[Combatant]) -> bool {
    units.iter().any(Combatant::is_alive)
}

fn wait(actor: &Combatant) -> BattleAction {
    BattleAction {
        actor: actor.id.clone(),
        target: actor.id.clone(),
        skill_used: WAIT_SKILL.to_owned(),
        damage_dealt: 0,
        target_hp_remaining: actor.current_hp,
    }
}

/// `(side, index)` pairs in acting order.
fn acting_order(team: &[Combatant], enemies: &[Combatant]) -> Vec<(Side, usize)> {
    let ranked = |units: &[Combatant]| {
        let mut indices: Vec<usize> = (0..units.len()).collect();
        indices.sort_by_key(|&i| units[i].position);
        indices
    };
    let team_order = ranked(team);
    let enemy_order = ranked(enemies);

    let mut order = Vec::with_capacity(team.len() + enemies.len());
    for rank in 0..team_order.len().max(enemy_order.len()) {
        if let Some(&index) = team_order.get(rank) {
            order.push((Side::Team, index));
        }
        if let Some(&index) = enemy_order.get(rank) {
            order.push((Side::Enemy, index));
        }
    }
    order
}

/// One full turn passes: every remaining cooldown drops by one, except those
/// set this turn.
fn tick_cooldowns(units: &mut [Combatant], side: Side, used: &[(Side, usize, usize)]) {
    for (index, unit) in units.iter_mut().enumerate() {
        for (skill, remaining) in unit.cooldowns.iter_mut().enumerate() {
            if used.contains(&(side, index, skill)) {
                continue;
            }
            *remaining = remaining.saturating_sub(1);
        }
    }
}
