//! Player-owned state shapes.
//!
//! The core reads these records and emits [`PlayerDelta`]s describing how they
//! change. Storage is the caller's concern.
mod common;
mod delta;
mod grants;
mod hero;
mod ids;
mod item;
mod mission;
mod player;
mod resources;
mod session;
mod team;

pub use common::{CurrencyKind, Rarity};
pub use delta::PlayerDelta;
pub(crate) use grants::Grants;
pub use hero::{Hero, HeroBasicInfo, HeroWithDetails};
pub use ids::{
    BannerId, BattleId, EnemyTypeId, HeroId, HeroTypeId, ItemId, ItemTemplateId, MissionId,
    MissionTemplateId, SkillId, StageId, SummonResultId, TeamId, UserId,
};
pub use item::{Item, ItemError, ItemWithTemplate};
pub use mission::{Mission, MissionStatus};
pub use player::PlayerSnapshot;
pub use resources::{InsufficientFunds, PlayerResources};
pub use session::SummonSession;
pub use team::{Team, TeamError, TeamSlots};
