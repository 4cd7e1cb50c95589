//! Mission assignment, progress and claiming.

use game_core::progression::{
    LevelChange, MissionClaim, MissionProgressView, ProgressEvent, advance_missions,
    claim_mission,
};
use game_core::state::{
    Mission, MissionId, MissionStatus, MissionTemplateId, PlayerDelta, UserId,
};
use game_core::IdSource;
use tracing::{debug, info};

use crate::api::{Result, RuntimeError};
use crate::events::ProgressionEvent;
use crate::runtime::Runtime;

impl Runtime {
    /// Assigns a fresh mission from `template_id`.
    ///
    /// A player holds at most one live copy of a template: one that is in
    /// progress or completed but unclaimed, and not yet expired.
    pub async fn assign_mission(
        &self,
        user_id: &UserId,
        template_id: &MissionTemplateId,
    ) -> Result<Mission> {
        let _guard = self.locks.acquire(user_id).await;
        self.load_player(user_id)?;
        let template = self.oracles.as_catalog_env().mission_template(template_id)?;
        let now = self.clock.now();

        let missions = self.repository.load_missions(user_id)?;
        let live = missions.iter().any(|mission| {
            &mission.template_id == template_id
                && mission.status() != MissionStatus::Claimed
                && !mission.is_expired(now)
        });
        if live {
            return Err(RuntimeError::MissionAlreadyAssigned(template_id.clone()));
        }

        let mission = Mission::assign(
            MissionId::new(self.ids.next_id("mission")),
            user_id.clone(),
            &template,
            now,
        );
        let mut delta = PlayerDelta::new(user_id.clone());
        delta.upsert_mission(mission.clone());
        self.repository.commit(&delta)?;

        info!(user = %user_id, mission = %mission.id, template = %template_id, "mission assigned");
        self.events.publish(ProgressionEvent::MissionAssigned {
            user_id: user_id.clone(),
            mission_id: mission.id.clone(),
            template_id: template_id.clone(),
        });
        Ok(mission)
    }

    /// Adds `amount` to one mission's counter directly.
    pub async fn record_mission_progress(
        &self,
        user_id: &UserId,
        mission_id: &MissionId,
        amount: u32,
    ) -> Result<Mission> {
        let _guard = self.locks.acquire(user_id).await;
        let mut mission = self.find_mission(user_id, mission_id)?;
        let template = self
            .oracles
            .as_catalog_env()
            .mission_template(&mission.template_id)?;

        let completed = mission.record_progress(amount, &template, self.clock.now())?;
        let mut delta = PlayerDelta::new(user_id.clone());
        delta.upsert_mission(mission.clone());
        self.repository.commit(&delta)?;

        debug!(
            user = %user_id,
            mission = %mission_id,
            value = mission.current_value(),
            target = template.target_value,
            "mission progress recorded"
        );
        if completed {
            self.publish_completed(vec![mission.clone()]);
        }
        Ok(mission)
    }

    /// Claims a completed mission: wallet, roster experience and reward items
    /// commit with the status change.
    pub async fn claim_mission(
        &self,
        user_id: &UserId,
        mission_id: &MissionId,
    ) -> Result<MissionClaim> {
        let _guard = self.locks.acquire(user_id).await;
        let player = self.load_player(user_id)?;
        let mission = self.find_mission(user_id, mission_id)?;

        let claim = claim_mission(
            &mission,
            &player,
            self.oracles.as_catalog_env(),
            self.clock.now(),
            self.ids.as_ref(),
        )?;
        self.repository.commit(&claim.delta)?;

        info!(
            user = %user_id,
            mission = %mission_id,
            gold = claim.rewards.gold,
            gems = claim.rewards.gems,
            experience = claim.rewards.experience,
            "mission claimed"
        );
        self.events.publish(ProgressionEvent::MissionClaimed {
            user_id: user_id.clone(),
            mission_id: mission_id.clone(),
        });
        self.publish_level_ups(user_id, &claim.level_changes);
        Ok(claim)
    }

    /// Every assigned mission joined with its template, in assignment order.
    pub fn missions(&self, user_id: &UserId) -> Result<Vec<MissionProgressView>> {
        self.load_player(user_id)?;
        let catalog = self.oracles.as_catalog_env();
        self.repository
            .load_missions(user_id)?
            .iter()
            .map(|mission| {
                let template = catalog.mission_template(&mission.template_id)?;
                Ok(mission.progress_view(&template))
            })
            .collect()
    }

    fn find_mission(&self, user_id: &UserId, mission_id: &MissionId) -> Result<Mission> {
        self.load_player(user_id)?;
        self.repository
            .load_missions(user_id)?
            .into_iter()
            .find(|mission| &mission.id == mission_id)
            .ok_or_else(|| RuntimeError::MissionNotFound(mission_id.clone()))
    }

    /// Feeds engine progress into the player's live missions and folds the
    /// changes into `delta`. Returns the missions this completed.
    pub(crate) fn advance_missions(
        &self,
        user_id: &UserId,
        events: &[ProgressEvent],
        delta: &mut PlayerDelta,
    ) -> Result<Vec<Mission>> {
        if events.is_empty() {
            return Ok(Vec::new());
        }
        let mut missions = self.repository.load_missions(user_id)?;
        let catalog = self.oracles.as_catalog_env();
        let changed = advance_missions(
            &mut missions,
            catalog.missions()?,
            events,
            self.clock.now(),
        );

        let mut completed = Vec::new();
        for mission in changed {
            if mission.status() == MissionStatus::Completed {
                completed.push(mission.clone());
            }
            delta.upsert_mission(mission);
        }
        Ok(completed)
    }

    pub(crate) fn publish_completed(&self, missions: Vec<Mission>) {
        for mission in missions {
            info!(user = %mission.user_id, mission = %mission.id, "mission completed");
            self.events.publish(ProgressionEvent::MissionCompleted {
                user_id: mission.user_id,
                mission_id: mission.id,
                template_id: mission.template_id,
            });
        }
    }

    pub(crate) fn publish_level_ups(&self, user_id: &UserId, changes: &[LevelChange]) {
        for change in changes.iter().filter(|change| change.leveled_up()) {
            self.events.publish(ProgressionEvent::HeroLeveled {
                user_id: user_id.clone(),
                hero_id: change.hero_id.clone(),
                old_level: change.old_level,
                new_level: change.new_level,
            });
        }
    }
}
