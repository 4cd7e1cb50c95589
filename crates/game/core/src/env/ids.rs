use std::cell::Cell;

/// Generator for fresh record identifiers (heroes, items, pull records,
/// battle results).
pub trait IdSource {
    /// Returns a new unique id starting with `prefix`.
    fn next_id(&self, prefix: &str) -> String;
}

/// Deterministic `prefix-N` ids, for tests and replay.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: Cell<u64>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(start: u64) -> Self {
        Self {
            next: Cell::new(start),
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self, prefix: &str) -> String {
        let value = self.next.get() + 1;
        self.next.set(value);
        format!("{prefix}-{value}")
    }
}
