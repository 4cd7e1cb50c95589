use chrono::{DateTime, Utc};

use crate::state::{MissionId, MissionTemplateId, UserId};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MissionStatus {
    InProgress,
    Completed,
    Claimed,
}

/// A mission assigned to a player.
///
/// Status only moves forward (`in_progress -> completed -> claimed`), through
/// the transitions in [`crate::progression`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mission {
    pub id: MissionId,
    pub user_id: UserId,
    pub template_id: MissionTemplateId,
    pub(crate) status: MissionStatus,
    pub(crate) current_value: u32,
    pub assigned_at: DateTime<Utc>,
    pub(crate) completed_at: Option<DateTime<Utc>>,
    pub(crate) claimed_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Mission {
    pub fn status(&self) -> MissionStatus {
        self.status
    }

    pub fn current_value(&self) -> u32 {
        self.current_value
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn claimed_at(&self) -> Option<DateTime<Utc>> {
        self.claimed_at
    }
}
