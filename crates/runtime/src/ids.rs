use std::sync::atomic::{AtomicU64, Ordering};

use game_core::env::IdSource;

/// Process-wide `prefix-N` ids, safe to share across requests.
#[derive(Debug, Default)]
pub struct AtomicIdSource {
    next: AtomicU64,
}

impl AtomicIdSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for AtomicIdSource {
    fn next_id(&self, prefix: &str) -> String {
        let value = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{prefix}-{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_never_repeat_across_prefixes() {
        let ids = AtomicIdSource::new();
        assert_eq!(ids.next_id("hero"), "hero-1");
        assert_eq!(ids.next_id("item"), "item-2");
        assert_eq!(ids.next_id("hero"), "hero-3");
    }
}
