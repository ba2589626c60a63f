use crate::store::{SeenStore, StoreError};
use std::cell::RefCell;
use std::collections::HashSet;

/// In-memory seen-store for tests. Counts saves so no-op persistence is
/// observable.
pub struct InMemoryStore {
    seen: RefCell<HashSet<String>>,
    saves: RefCell<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            seen: RefCell::new(HashSet::new()),
            saves: RefCell::new(0),
        }
    }

    pub fn with_seen(ids: &[&str]) -> Self {
        let store = Self::new();
        store.seen.replace(ids.iter().map(|s| s.to_string()).collect());
        store
    }

    pub fn seen(&self) -> HashSet<String> {
        self.seen.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl SeenStore for InMemoryStore {
    fn load(&self) -> Result<HashSet<String>, StoreError> {
        Ok(self.seen.borrow().clone())
    }

    fn save(&self, seen: &HashSet<String>) -> Result<(), StoreError> {
        self.seen.replace(seen.clone());
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}
