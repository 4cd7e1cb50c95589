use game_core::battle::BattleResult;
use game_core::gacha::SummonResult;
use game_core::state::{
    BannerId, Mission, PlayerDelta, PlayerResources, PlayerSnapshot, SummonSession, Team, TeamId,
    UserId,
};

use super::Result;

/// Storage for everything a player owns.
///
/// Reads hand back owned copies. Writes go through [`PlayerRepository::commit`],
/// which must apply a whole [`PlayerDelta`] or none of it.
pub trait PlayerRepository: Send + Sync {
    /// Registers a player with `resources` as the starting wallet.
    fn create_player(&self, resources: PlayerResources) -> Result<()>;

    /// Wallet, heroes and items. `None` for unknown players.
    fn load_player(&self, user: &UserId) -> Result<Option<PlayerSnapshot>>;

    fn load_session(&self, user: &UserId, banner: &BannerId) -> Result<Option<SummonSession>>;

    fn load_missions(&self, user: &UserId) -> Result<Vec<Mission>>;

    fn load_team(&self, user: &UserId, team: &TeamId) -> Result<Option<Team>>;

    fn save_team(&self, team: &Team) -> Result<()>;

    /// Applies every change in `delta` atomically.
    fn commit(&self, delta: &PlayerDelta) -> Result<()>;

    /// Pull records, newest first, optionally for a single banner.
    fn summon_history(
        &self,
        user: &UserId,
        banner: Option<&BannerId>,
        limit: usize,
    ) -> Result<Vec<SummonResult>>;

    /// Battle results, newest first.
    fn battle_history(&self, user: &UserId, limit: usize) -> Result<Vec<BattleResult>>;
}
