use super::KeyValueStore;
use crate::error::{DreamzError, Result};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    fn check_writable(&self) -> Result<()> {
        if self.simulate_write_error {
            return Err(DreamzError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.check_writable()?;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.check_writable()?;
        self.values.remove(key);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::journal;
    use crate::model::Entry;
    use crate::store::ENTRIES_KEY;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_entries(mut self, count: usize) -> Self {
            for i in 0..count {
                let entry = Entry::new(
                    format!("Dream {}", i + 1),
                    format!("Body of dream {}", i + 1),
                );
                journal::append(&mut self.store, entry).unwrap();
            }
            self
        }

        pub fn with_entry(mut self, entry: Entry) -> Self {
            journal::append(&mut self.store, entry).unwrap();
            self
        }

        pub fn with_raw_entries(mut self, raw: &str) -> Self {
            self.store.set(ENTRIES_KEY, raw).unwrap();
            self
        }
    }
}
