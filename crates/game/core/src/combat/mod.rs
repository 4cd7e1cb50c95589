//! Combat resolution system.
//!
//! Pure, deterministic team-vs-enemies simulation producing a turn-by-turn
//! log.
//!
//! - `simulate`: runs a whole fight
//! - `SkillPolicy`: picks each unit's skill and target
//! - `calculate_damage` / `apply_damage`: damage math, HP floored at zero

mod damage;
mod log;
mod policy;
mod simulate;
mod unit;

pub use damage::{apply_damage, calculate_damage};
pub use log::{BattleAction, BattleTurn};
pub use policy::{Decision, FirstReadyLowestHp, SkillPolicy};
pub use simulate::{CombatReport, Outcome, WAIT_SKILL, simulate};
pub use unit::{Combatant, Side};
