#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};
use game_content::ContentFactory;
use game_core::env::Clock;
use game_core::state::{HeroTypeId, PlayerResources, UserId};
use runtime::{Runtime, RuntimeConfig};

/// Clock that only moves when told to.
pub struct ManualClock(Mutex<DateTime<Utc>>);

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self(Mutex::new(now)))
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.0.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

pub fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn runtime_with_clock(clock: Arc<ManualClock>) -> Runtime {
    let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data");
    let bundle = ContentFactory::new(data).load_bundle().unwrap();
    Runtime::builder()
        .config(RuntimeConfig {
            rng_seed: Some(7),
            ..RuntimeConfig::default()
        })
        .content(bundle)
        .clock(clock)
        .build()
        .unwrap()
}

pub fn runtime() -> Runtime {
    runtime_with_clock(ManualClock::new(start()))
}

pub fn wallet(user: &UserId, gold: u64, gems: u64) -> PlayerResources {
    let mut resources = PlayerResources::new(user.clone());
    resources.gold = gold;
    resources.gems = gems;
    resources
}

pub fn heroes(types: &[&str]) -> Vec<HeroTypeId> {
    types.iter().map(|id| HeroTypeId::from(*id)).collect()
}
