//! In-memory PlayerRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use game_core::battle::BattleResult;
use game_core::gacha::SummonResult;
use game_core::state::{
    BannerId, Hero, Item, Mission, PlayerDelta, PlayerResources, PlayerSnapshot, SummonSession,
    Team, TeamId, UserId,
};

use super::{BattleRecord, PlayerRepository, RepositoryError, Result};

#[derive(Debug)]
struct PlayerRecord {
    resources: PlayerResources,
    heroes: Vec<Hero>,
    items: Vec<Item>,
    sessions: HashMap<BannerId, SummonSession>,
    teams: HashMap<TeamId, Team>,
    missions: Vec<Mission>,
    summons: Vec<SummonResult>,
    battles: Vec<BattleRecord>,
}

impl PlayerRecord {
    fn new(resources: PlayerResources) -> Self {
        Self {
            resources,
            heroes: Vec::new(),
            items: Vec::new(),
            sessions: HashMap::new(),
            teams: HashMap::new(),
            missions: Vec::new(),
            summons: Vec::new(),
            battles: Vec::new(),
        }
    }
}

/// Replaces the record with the same key, or appends in arrival order.
fn upsert<T: Clone, K: PartialEq>(records: &mut Vec<T>, record: &T, key: impl Fn(&T) -> &K) {
    match records.iter_mut().find(|existing| key(existing) == key(record)) {
        Some(existing) => *existing = record.clone(),
        None => records.push(record.clone()),
    }
}

/// In-memory implementation of PlayerRepository.
///
/// A single lock guards every player so a commit is observed whole or not at
/// all.
pub struct InMemoryPlayerRepository {
    players: RwLock<HashMap<UserId, PlayerRecord>>,
}

impl InMemoryPlayerRepository {
    pub fn new() -> Self {
        Self {
            players: RwLock::new(HashMap::new()),
        }
    }

    fn read<T>(&self, user: &UserId, f: impl FnOnce(&PlayerRecord) -> T) -> Result<Option<T>> {
        let players = self
            .players
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(players.get(user).map(f))
    }
}

impl Default for InMemoryPlayerRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerRepository for InMemoryPlayerRepository {
    fn create_player(&self, resources: PlayerResources) -> Result<()> {
        let mut players = self
            .players
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        if players.contains_key(&resources.user_id) {
            return Err(RepositoryError::AlreadyExists(resources.user_id));
        }
        players.insert(resources.user_id.clone(), PlayerRecord::new(resources));
        Ok(())
    }

    fn load_player(&self, user: &UserId) -> Result<Option<PlayerSnapshot>> {
        self.read(user, |record| PlayerSnapshot {
            user_id: user.clone(),
            resources: record.resources.clone(),
            heroes: record.heroes.clone(),
            items: record.items.clone(),
        })
    }

    fn load_session(&self, user: &UserId, banner: &BannerId) -> Result<Option<SummonSession>> {
        Ok(self
            .read(user, |record| record.sessions.get(banner).cloned())?
            .flatten())
    }

    fn load_missions(&self, user: &UserId) -> Result<Vec<Mission>> {
        Ok(self
            .read(user, |record| record.missions.clone())?
            .unwrap_or_default())
    }

    fn load_team(&self, user: &UserId, team: &TeamId) -> Result<Option<Team>> {
        Ok(self
            .read(user, |record| record.teams.get(team).cloned())?
            .flatten())
    }

    fn save_team(&self, team: &Team) -> Result<()> {
        let mut players = self
            .players
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let record = players
            .get_mut(&team.user_id)
            .ok_or_else(|| RepositoryError::NotFound(team.user_id.clone()))?;
        record.teams.insert(team.id.clone(), team.clone());
        Ok(())
    }

    fn commit(&self, delta: &PlayerDelta) -> Result<()> {
        // Fallible work happens before the first write.
        let battle = delta
            .battle_result
            .as_ref()
            .map(BattleRecord::encode)
            .transpose()?;

        let mut players = self
            .players
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let record = players
            .get_mut(&delta.user_id)
            .ok_or_else(|| RepositoryError::NotFound(delta.user_id.clone()))?;

        if let Some(resources) = &delta.resources {
            record.resources = resources.clone();
        }
        if let Some(session) = &delta.session {
            record
                .sessions
                .insert(session.banner_id.clone(), session.clone());
        }
        for hero in &delta.heroes {
            upsert(&mut record.heroes, hero, |hero| &hero.id);
        }
        for item in &delta.items {
            upsert(&mut record.items, item, |item| &item.id);
        }
        for mission in &delta.missions {
            upsert(&mut record.missions, mission, |mission| &mission.id);
        }
        record.summons.extend(delta.summon_results.iter().cloned());
        record.battles.extend(battle);
        Ok(())
    }

    fn summon_history(
        &self,
        user: &UserId,
        banner: Option<&BannerId>,
        limit: usize,
    ) -> Result<Vec<SummonResult>> {
        Ok(self
            .read(user, |record| {
                record
                    .summons
                    .iter()
                    .rev()
                    .filter(|result| banner.is_none_or(|banner| &result.banner_id == banner))
                    .take(limit)
                    .cloned()
                    .collect()
            })?
            .unwrap_or_default())
    }

    fn battle_history(&self, user: &UserId, limit: usize) -> Result<Vec<BattleResult>> {
        let records: Vec<BattleRecord> = self
            .read(user, |record| {
                record.battles.iter().rev().take(limit).cloned().collect()
            })?
            .unwrap_or_default();
        records.iter().map(BattleRecord::decode).collect()
    }
}
