use game_core::progression::{IdleClaim, claim_idle};
use game_core::state::UserId;
use tracing::info;

use crate::api::Result;
use crate::events::ProgressionEvent;
use crate::runtime::Runtime;

impl Runtime {
    /// Collects offline gold and experience and restarts the idle clock.
    pub async fn claim_idle_rewards(&self, user_id: &UserId) -> Result<IdleClaim> {
        let _guard = self.locks.acquire(user_id).await;
        let player = self.load_player(user_id)?;
        let config = self.oracles.as_catalog_env().config()?.idle();

        let claim = claim_idle(&player, self.clock.now(), &config);
        self.repository.commit(&claim.delta)?;

        info!(
            user = %user_id,
            minutes = claim.rewards.minutes,
            gold = claim.rewards.gold,
            experience = claim.rewards.experience,
            "idle rewards claimed"
        );
        self.events.publish(ProgressionEvent::IdleClaimed {
            user_id: user_id.clone(),
            minutes: claim.rewards.minutes,
            gold: claim.rewards.gold,
            experience: claim.rewards.experience,
        });
        self.publish_level_ups(user_id, &claim.level_changes);
        Ok(claim)
    }
}
