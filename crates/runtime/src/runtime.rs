//! High-level runtime orchestrator.
//!
//! The runtime owns the catalog oracles, the player repository, the event bus
//! and per-user locks, and exposes the game operations as async methods (see
//! the `services` modules). Every operation loads state, runs a pure engine
//! from `game-core`, and commits the returned delta in one step.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use game_content::ContentBundle;
use game_core::GameConfig;
use game_core::battle::{DropTable, IndependentDrops};
use game_core::combat::{FirstReadyLowestHp, SkillPolicy};
use game_core::env::{Clock, PcgRng, compute_seed};
use game_core::state::{PlayerSnapshot, UserId};
use tokio::sync::broadcast;

use crate::api::{Result, RuntimeError};
use crate::clock::SystemClock;
use crate::events::{Event, EventBus, Topic};
use crate::ids::AtomicIdSource;
use crate::locks::UserLocks;
use crate::oracle::OracleManager;
use crate::repository::{InMemoryPlayerRepository, PlayerRepository};

/// Independent random streams within one request.
pub(crate) const SUMMON_STREAM: u32 = 0;
pub(crate) const BATTLE_STREAM: u32 = 1;

/// Runtime configuration shared across services.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Tunables served to every engine. Installed into the config oracle when
    /// the runtime is built, so it wins over whatever the oracles carried.
    pub game_config: GameConfig,
    pub event_buffer_size: usize,
    /// Base seed for per-request RNG streams. Unset draws one from process
    /// entropy at build time.
    pub rng_seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            event_buffer_size: 100,
            rng_seed: None,
        }
    }
}

/// Main runtime that serves player requests.
///
/// Cheap to clone; clones share every component.
#[derive(Clone)]
pub struct Runtime {
    pub(crate) config: Arc<RuntimeConfig>,
    pub(crate) oracles: OracleManager,
    pub(crate) repository: Arc<dyn PlayerRepository>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) ids: Arc<AtomicIdSource>,
    pub(crate) locks: UserLocks,
    pub(crate) events: EventBus,
    pub(crate) policy: Arc<dyn SkillPolicy>,
    pub(crate) drops: Arc<dyn DropTable>,
    base_seed: u64,
    nonce: Arc<AtomicU64>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    /// Subscribe to one event topic.
    pub fn subscribe_events(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.events.subscribe(topic)
    }

    /// Fresh generator for one request. Each call advances the nonce, so two
    /// requests never share a stream.
    pub(crate) fn request_rng(&self, stream: u32) -> PcgRng {
        let nonce = self.nonce.fetch_add(1, Ordering::Relaxed);
        PcgRng::new(compute_seed(self.base_seed, nonce, stream))
    }

    pub(crate) fn load_player(&self, user: &UserId) -> Result<PlayerSnapshot> {
        self.repository
            .load_player(user)?
            .ok_or_else(|| RuntimeError::UnknownPlayer(user.clone()))
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    oracles: Option<OracleManager>,
    repository: Option<Arc<dyn PlayerRepository>>,
    clock: Option<Arc<dyn Clock>>,
    policy: Option<Arc<dyn SkillPolicy>>,
    drops: Option<Arc<dyn DropTable>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            oracles: None,
            repository: None,
            clock: None,
            policy: None,
            drops: None,
        }
    }

    /// Override runtime configuration, game config included. The last of
    /// `config`, `game_config`, `oracles` and `content` decides the tunables.
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn game_config(mut self, game_config: GameConfig) -> Self {
        self.config.game_config = game_config;
        self
    }

    /// Set required oracle manager. Its game config replaces the configured one.
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.config.game_config = oracles.game_config().clone();
        self.oracles = Some(oracles);
        self
    }

    /// Builds the oracles from loaded content. The bundle's game config
    /// replaces the configured one so both views agree.
    pub fn content(mut self, bundle: ContentBundle) -> Self {
        self.config.game_config = bundle.config.clone();
        self.oracles = Some(OracleManager::from_bundle(bundle));
        self
    }

    /// Player storage. Defaults to an empty in-memory repository.
    pub fn repository(mut self, repository: Arc<dyn PlayerRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Time source. Defaults to [`SystemClock`].
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.config.rng_seed = Some(seed);
        self
    }

    /// Combat decision policy. Defaults to [`FirstReadyLowestHp`].
    pub fn policy(mut self, policy: Arc<dyn SkillPolicy>) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Victory loot table. Defaults to [`IndependentDrops`].
    pub fn drops(mut self, drops: Arc<dyn DropTable>) -> Self {
        self.drops = Some(drops);
        self
    }

    pub fn build(self) -> Result<Runtime> {
        let oracles = self
            .oracles
            .ok_or(RuntimeError::OraclesNotSet)?
            .with_config(self.config.game_config.clone());
        let base_seed = self.config.rng_seed.unwrap_or_else(rand::random);
        let events = EventBus::with_capacity(self.config.event_buffer_size);
        let policy = self.policy.unwrap_or_else(|| Arc::new(FirstReadyLowestHp));
        let drops = self.drops.unwrap_or_else(|| Arc::new(IndependentDrops));

        tracing::debug!(
            policy = policy.name(),
            drops = drops.name(),
            seeded = self.config.rng_seed.is_some(),
            "runtime built"
        );

        Ok(Runtime {
            config: Arc::new(self.config),
            oracles,
            repository: self
                .repository
                .unwrap_or_else(|| Arc::new(InMemoryPlayerRepository::new())),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            ids: Arc::new(AtomicIdSource::new()),
            locks: UserLocks::new(),
            events,
            policy,
            drops,
            base_seed,
            nonce: Arc::new(AtomicU64::new(0)),
        })
    }
}
