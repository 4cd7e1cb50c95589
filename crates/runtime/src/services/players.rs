//! Player registration and read-only views.

use game_core::state::{
    Hero, HeroId, HeroTypeId, HeroWithDetails, PlayerDelta, PlayerResources, PlayerSnapshot,
    UserId,
};
use game_core::IdSource;
use tracing::info;

use crate::api::{Result, RuntimeError};
use crate::repository::RepositoryError;
use crate::runtime::Runtime;

impl Runtime {
    /// Registers a player with `resources` as the opening wallet and one level
    /// 1 hero per entry of `starters`.
    pub async fn register_player(
        &self,
        resources: PlayerResources,
        starters: &[HeroTypeId],
    ) -> Result<PlayerSnapshot> {
        let user_id = resources.user_id.clone();
        let _guard = self.locks.acquire(&user_id).await;
        let catalog = self.oracles.as_catalog_env();
        let now = self.clock.now();

        let mut delta = PlayerDelta::new(user_id.clone());
        for hero_type in starters {
            let template = catalog.hero_type(hero_type)?;
            delta.upsert_hero(Hero::new(
                HeroId::new(self.ids.next_id("hero")),
                user_id.clone(),
                template.id,
                now,
            ));
        }

        match self.repository.create_player(resources) {
            Err(RepositoryError::AlreadyExists(id)) => return Err(RuntimeError::PlayerExists(id)),
            other => other?,
        }
        self.repository.commit(&delta)?;

        info!(user = %user_id, heroes = starters.len(), "player registered");
        self.load_player(&user_id)
    }

    pub fn player(&self, user_id: &UserId) -> Result<PlayerSnapshot> {
        self.load_player(user_id)
    }

    /// Owned heroes with template data and level-derived stats.
    pub fn heroes(&self, user_id: &UserId) -> Result<Vec<HeroWithDetails>> {
        let player = self.load_player(user_id)?;
        let catalog = self.oracles.as_catalog_env();
        player
            .heroes
            .iter()
            .map(|hero| Ok(hero.details(&catalog.hero_type(&hero.hero_type)?)))
            .collect()
    }
}
