//! Summon service: per-user serialization around the gacha engine.

use game_core::error::GameError;
use game_core::gacha::{
    PullKind, SummonContext, SummonMultiResult, SummonRateInfo, SummonRequest, SummonResult,
    rate_info, summon,
};
use game_core::state::{BannerId, UserId};
use tracing::{debug, info, warn};

use crate::api::Result;
use crate::events::GachaEvent;
use crate::runtime::{Runtime, SUMMON_STREAM};

impl Runtime {
    /// Performs a single, ten or daily free summon.
    ///
    /// The debit, the updated pity session, the granted heroes and items, the
    /// pull records and any mission progress commit together. A rejected
    /// request changes nothing.
    pub async fn summon(
        &self,
        user_id: &UserId,
        banner_id: &BannerId,
        pull_kind: PullKind,
    ) -> Result<SummonMultiResult> {
        let _guard = self.locks.acquire(user_id).await;
        let player = self.load_player(user_id)?;
        let session = self.repository.load_session(user_id, banner_id)?;
        let mut rng = self.request_rng(SUMMON_STREAM);

        let request = SummonRequest {
            user_id: user_id.clone(),
            banner_id: banner_id.clone(),
            pull_kind,
        };
        let ctx = SummonContext {
            catalog: self.oracles.as_catalog_env(),
            player: &player,
            session: session.as_ref(),
            clock: self.clock.as_ref(),
            rng: &mut rng,
            ids: self.ids.as_ref(),
        };
        let outcome = match summon(&request, ctx) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(
                    user = %user_id,
                    banner = %banner_id,
                    code = err.error_code(),
                    "summon rejected: {err}"
                );
                self.events.publish(GachaEvent::Rejected {
                    user_id: user_id.clone(),
                    banner_id: banner_id.clone(),
                    code: err.error_code().to_owned(),
                });
                return Err(err.into());
            }
        };

        let progress = outcome.progress_events();
        let mut delta = outcome.delta;
        let completed = self.advance_missions(user_id, &progress, &mut delta)?;
        self.repository.commit(&delta)?;

        for result in &outcome.result.results {
            debug!(
                user = %user_id,
                pull = result.pull_number,
                rarity = %result.rarity,
                reward = result.reward.id(),
                featured = result.is_featured,
                pity_break = result.is_pity_break,
                "pull resolved"
            );
        }
        info!(
            user = %user_id,
            banner = %banner_id,
            kind = pull_kind.as_str(),
            pulls = outcome.result.results.len(),
            new_heroes = outcome.result.new_heroes.len(),
            duplicates = outcome.duplicates.len(),
            "summon completed"
        );

        self.events.publish(GachaEvent::Summoned {
            user_id: user_id.clone(),
            banner_id: banner_id.clone(),
            pull_kind,
            results: outcome.result.results.clone(),
        });
        self.publish_completed(completed);

        Ok(outcome.result)
    }

    /// Published odds plus the caller's pity standing on `banner_id`.
    pub fn rate_info(&self, user_id: &UserId, banner_id: &BannerId) -> Result<SummonRateInfo> {
        let catalog = self.oracles.as_catalog_env();
        let banner = catalog.banner(banner_id)?;
        let session = self.repository.load_session(user_id, banner_id)?;
        Ok(rate_info(&banner, session.as_ref(), catalog.heroes()?))
    }

    /// Pull records, newest first.
    pub fn summon_history(
        &self,
        user_id: &UserId,
        banner_id: Option<&BannerId>,
        limit: usize,
    ) -> Result<Vec<SummonResult>> {
        Ok(self.repository.summon_history(user_id, banner_id, limit)?)
    }
}
