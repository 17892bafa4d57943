use super::DataStore;
use crate::error::{CourseError, Result};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
    writes: usize,
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

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Raw stored value, for asserting on the persisted bytes.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl DataStore for InMemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error {
            return Err(CourseError::Store("Simulated write error".to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{FileRef, Item, ItemContent, ItemId};
    use crate::store::DEFAULT_KEY;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        items: Vec<Item>,
        next_id: i64,
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
                items: Vec::new(),
                next_id: 1_700_000_000_000,
            }
        }

        fn push(mut self, name: &str, content: ItemContent) -> Self {
            self.items.push(Item {
                id: ItemId(self.next_id),
                name: name.to_string(),
                content,
            });
            self.next_id += 1;
            self.flush()
        }

        fn flush(mut self) -> Self {
            let json = serde_json::to_string(&self.items).unwrap();
            self.store.write(DEFAULT_KEY, &json).unwrap();
            self
        }

        pub fn with_modules(mut self, count: usize) -> Self {
            for i in 0..count {
                self = self.push(&format!("Week {}", i + 1), ItemContent::Module);
            }
            self
        }

        pub fn with_module(self, name: &str) -> Self {
            self.push(name, ItemContent::Module)
        }

        pub fn with_link(self, name: &str, url: &str) -> Self {
            self.push(
                name,
                ItemContent::Link {
                    url: url.to_string(),
                },
            )
        }

        pub fn with_file(self, name: &str, file_name: &str) -> Self {
            let file = FileRef {
                name: file_name.to_string(),
                blob: format!("blob-{}", file_name),
                size: 0,
            };
            self.push(name, ItemContent::File { file })
        }

        pub fn with_raw(mut self, value: &str) -> Self {
            self.store.write(DEFAULT_KEY, value).unwrap();
            self
        }
    }
}
