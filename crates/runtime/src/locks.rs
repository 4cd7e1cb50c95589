//! Per-user request serialization.

use std::collections::HashMap;
use std::sync::Arc;

use game_core::state::UserId;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// One async mutex per user.
///
/// Every mutating operation holds its user's guard from the first read to the
/// commit, so two requests for the same player never interleave. Different
/// players proceed in parallel.
#[derive(Clone, Default)]
pub struct UserLocks {
    locks: Arc<Mutex<HashMap<UserId, Arc<Mutex<()>>>>>,
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, user: &UserId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            Arc::clone(locks.entry(user.clone()).or_default())
        };
        lock.lock_owned().await
    }
}
