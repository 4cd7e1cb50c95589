//! Mission template oracle implementation for runtime.

use std::collections::BTreeMap;

use game_core::env::{MissionOracle, MissionTemplate};
use game_core::state::MissionTemplateId;

pub struct MissionOracleImpl {
    missions: BTreeMap<MissionTemplateId, MissionTemplate>,
}

impl MissionOracleImpl {
    pub fn new(missions: impl IntoIterator<Item = MissionTemplate>) -> Self {
        Self {
            missions: missions
                .into_iter()
                .map(|mission| (mission.id.clone(), mission))
                .collect(),
        }
    }
}

impl MissionOracle for MissionOracleImpl {
    fn mission_template(&self, id: &MissionTemplateId) -> Option<MissionTemplate> {
        self.missions.get(id).cloned()
    }

    fn mission_template_ids(&self) -> Vec<MissionTemplateId> {
        self.missions.keys().cloned().collect()
    }
}
