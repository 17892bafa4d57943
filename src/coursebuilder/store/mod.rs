//! # Storage Layer
//!
//! This module defines the persistence substrate for CourseBuilder. The
//! [`DataStore`] trait is a plain key-value text store: the item collection is
//! serialized as a whole and written under a single key on every change, then
//! read back once when a course is opened.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One file per key: `{key}.json` inside the store directory
//!   - Writes go through a temporary file and a rename
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! .coursebuilder/
//! ├── modules.json        # The course's items (JSON array)
//! ├── files/              # Uploaded file blobs (see host.rs)
//! └── config.json         # Configuration
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;

#[cfg(any(test, feature = "test_utils"))]
pub use memory::fixtures;

/// Key under which the item collection is stored unless configured otherwise.
pub const DEFAULT_KEY: &str = "modules";

/// Abstract key-value text storage.
pub trait DataStore {
    /// Read the value stored under `key`, `None` if nothing was ever written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}
