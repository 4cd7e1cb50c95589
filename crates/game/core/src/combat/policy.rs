//! Skill and target selection.
use crate::env::RngOracle;

use super::unit::Combatant;

/// What a unit does on its action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Use `skill` (index into the actor's skills) on `target` (index into the
    /// opponents slice). Area skills hit every living opponent instead.
    Use { skill: usize, target: usize },
    /// Nothing ready; the action is logged with zero damage.
    Wait,
}

/// Chooses a skill and a target for the acting unit.
///
/// Implementations must be deterministic given the same inputs and RNG
/// stream.
pub trait SkillPolicy: Send + Sync {
    fn decide(
        &self,
        actor: &Combatant,
        opponents: &[Combatant],
        rng: &mut dyn RngOracle,
    ) -> Decision;

    /// Returns the policy name for debugging and logging.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str {
        "No description available"
    }
}

/// First skill off cooldown, aimed at the living opponent with the lowest
/// current HP (ties go to the lowest position). Never draws from the RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstReadyLowestHp;

impl SkillPolicy for FirstReadyLowestHp {
    fn decide(
        &self,
        actor: &Combatant,
        opponents: &[Combatant],
        _rng: &mut dyn RngOracle,
    ) -> Decision {
        let Some(skill) = actor.first_ready_skill() else {
            return Decision::Wait;
        };
        let target = opponents
            .iter()
            .enumerate()
            .filter(|(_, unit)| unit.is_alive())
            .min_by_key(|(_, unit)| (unit.current_hp, unit.position))
            .map(|(index, _)| index);
        match target {
            Some(target) => Decision::Use { skill, target },
            None => Decision::Wait,
        }
    }

    fn name(&self) -> &'static str {
        "first-ready-lowest-hp"
    }

    fn description(&self) -> &'static str {
        "Uses the first ready skill on the weakest living opponent"
    }
}
