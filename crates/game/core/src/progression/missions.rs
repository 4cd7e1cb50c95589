//! Mission lifecycle: assignment, progress, completion, and claiming.
//!
//! Transitions only move forward. Any illegal attempt returns a
//! [`MissionError`] and leaves the mission untouched.
use chrono::{DateTime, Duration, NaiveTime, Utc};

use crate::env::{
    MissionKind, MissionOracle, MissionRewards, MissionTemplate, OracleError, Requirement,
};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Mission, MissionId, MissionStatus, MissionTemplateId, UserId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MissionError {
    #[error("mission is {status}, progress only applies while in progress")]
    NotInProgress { status: MissionStatus },

    #[error("mission is {status}, only completed missions can be claimed")]
    NotCompleted { status: MissionStatus },

    #[error("mission expired at {expires_at}")]
    Expired { expires_at: DateTime<Utc> },

    #[error("mission uses template '{expected}', got '{actual}'")]
    TemplateMismatch {
        expected: MissionTemplateId,
        actual: MissionTemplateId,
    },

    #[error("mission '{0}' not found")]
    NotFound(MissionId),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for MissionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::TemplateMismatch { .. } => ErrorSeverity::Fatal,
            Self::Oracle(err) => err.severity(),
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotInProgress { .. } => "MISSION_NOT_IN_PROGRESS",
            Self::NotCompleted { .. } => "MISSION_NOT_COMPLETED",
            Self::Expired { .. } => "MISSION_EXPIRED",
            Self::TemplateMismatch { .. } => "MISSION_TEMPLATE_MISMATCH",
            Self::NotFound(_) => "MISSION_NOT_FOUND",
            Self::Oracle(err) => err.error_code(),
        }
    }
}

/// Something that happened to a player which missions may count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressEvent {
    pub requirement: Requirement,
    pub amount: u32,
}

impl ProgressEvent {
    pub fn new(requirement: Requirement, amount: u32) -> Self {
        Self {
            requirement,
            amount,
        }
    }
}

/// Mission joined with its template for client listings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MissionProgressView {
    pub mission_id: MissionId,
    pub title: String,
    pub description: String,
    pub kind: MissionKind,
    pub status: MissionStatus,
    pub current_value: u32,
    pub target_value: u32,
    pub rewards: MissionRewards,
    pub expires_at: Option<DateTime<Utc>>,
}

fn start_of_day(at: DateTime<Utc>) -> DateTime<Utc> {
    at.date_naive().and_time(NaiveTime::MIN).and_utc()
}

impl Mission {
    /// A fresh in-progress mission. Daily missions expire at the next UTC
    /// midnight, weekly ones at the UTC midnight seven days out.
    pub fn assign(
        id: MissionId,
        user_id: UserId,
        template: &MissionTemplate,
        now: DateTime<Utc>,
    ) -> Self {
        let expires_at = match template.kind {
            MissionKind::Daily => Some(start_of_day(now + Duration::days(1))),
            MissionKind::Weekly => Some(start_of_day(now + Duration::days(7))),
            MissionKind::Story | MissionKind::Achievement => None,
        };
        Self {
            id,
            user_id,
            template_id: template.id.clone(),
            status: MissionStatus::InProgress,
            current_value: 0,
            assigned_at: now,
            completed_at: None,
            claimed_at: None,
            expires_at,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| now > expires_at)
    }

    /// Adds `delta` to the counter. Returns `true` when this call completed
    /// the mission. Reaching the target clamps the counter and stamps
    /// `completed_at`.
    pub fn record_progress(
        &mut self,
        delta: u32,
        template: &MissionTemplate,
        now: DateTime<Utc>,
    ) -> Result<bool, MissionError> {
        if template.id != self.template_id {
            return Err(MissionError::TemplateMismatch {
                expected: self.template_id.clone(),
                actual: template.id.clone(),
            });
        }
        if self.status != MissionStatus::InProgress {
            return Err(MissionError::NotInProgress {
                status: self.status,
            });
        }
        if let Some(expires_at) = self.expires_at
            && now > expires_at
        {
            return Err(MissionError::Expired { expires_at });
        }

        self.current_value = self.current_value.saturating_add(delta);
        if self.current_value >= template.target_value {
            self.current_value = template.target_value;
            self.status = MissionStatus::Completed;
            self.completed_at = Some(now);
            return Ok(true);
        }
        Ok(false)
    }

    /// `completed -> claimed`. The caller grants the template rewards.
    pub fn claim(&mut self, now: DateTime<Utc>) -> Result<(), MissionError> {
        if self.status != MissionStatus::Completed {
            return Err(MissionError::NotCompleted {
                status: self.status,
            });
        }
        self.status = MissionStatus::Claimed;
        self.claimed_at = Some(now);
        Ok(())
    }

    pub fn progress_view(&self, template: &MissionTemplate) -> MissionProgressView {
        MissionProgressView {
            mission_id: self.id.clone(),
            title: template.title.clone(),
            description: template.description.clone(),
            kind: template.kind,
            status: self.status,
            current_value: self.current_value,
            target_value: template.target_value,
            rewards: template.rewards.clone(),
            expires_at: self.expires_at,
        }
    }
}

/// Total amount of `events` that counts toward `requirement`.
pub fn progress_for(requirement: Requirement, events: &[ProgressEvent]) -> u32 {
    events
        .iter()
        .filter(|event| event.requirement == requirement)
        .fold(0u32, |total, event| total.saturating_add(event.amount))
}

/// Feeds `events` into every live mission they count toward.
///
/// Missions that are not in progress, already expired, or whose template is
/// unknown are skipped. Returns the missions that changed.
pub fn advance_missions(
    missions: &mut [Mission],
    catalog: &dyn MissionOracle,
    events: &[ProgressEvent],
    now: DateTime<Utc>,
) -> Vec<Mission> {
    let mut changed = Vec::new();
    for mission in missions.iter_mut() {
        if mission.status != MissionStatus::InProgress || mission.is_expired(now) {
            continue;
        }
        let Some(template) = catalog.mission_template(&mission.template_id) else {
            continue;
        };
        let amount = progress_for(template.requirement, events);
        if amount == 0 {
            continue;
        }
        if mission.record_progress(amount, &template, now).is_ok() {
            changed.push(mission.clone());
        }
    }
    changed
}
