//! # Storage Layer
//!
//! This module defines the key-value abstraction every other part of dreamz
//! persists through. The [`KeyValueStore`] trait is deliberately tiny: the
//! journal, the edit draft and the vocabulary each own one or two fixed keys
//! and read or write whole string values under them.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - All keys live in a single `store.json` object
//!   - Each write replaces the file via a temp file and rename
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── store.json     # { "<key>": "<string value>", ... }
//! └── config.json    # DreamzConfig
//! ```
//!
//! There are no transactions across keys. Every call is atomic on its own and
//! the last writer wins.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Key holding the JSON array of journal entries.
pub const ENTRIES_KEY: &str = "dreamFormDataArray";

/// Key holding the entry staged for editing (JSON object).
pub const DRAFT_ENTRY_KEY: &str = "dreamEdit";

/// Key holding the list position of the staged entry (decimal string).
pub const DRAFT_INDEX_KEY: &str = "dreamEditIndex";

/// Key holding user-added tags and characters.
pub const VOCABULARY_KEY: &str = "dreamVocabulary";

/// Abstract interface for key-value persistence.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Insert or replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}
