//! # Draft Channel
//!
//! A single slot used to hand an entry that is about to be edited, together
//! with its list position, from whoever picked it (the list) to whoever edits
//! it (the form). The slot lives in the store under two fixed keys so the
//! hand-off survives between separate invocations.
//!
//! Reading the slot never clears it; the form clears it once a submission
//! has been written.

use crate::error::{DreamzError, Result};
use crate::model::Entry;
use crate::store::{KeyValueStore, DRAFT_ENTRY_KEY, DRAFT_INDEX_KEY};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Draft {
    pub entry: Entry,
    pub index: Option<usize>,
}

/// Stages `entry` for editing at `index`, replacing any previous draft.
pub fn stash<S: KeyValueStore>(store: &mut S, entry: &Entry, index: Option<usize>) -> Result<()> {
    let raw = serde_json::to_string(entry).map_err(DreamzError::Serialization)?;
    store.set(DRAFT_ENTRY_KEY, &raw)?;
    match index {
        Some(i) => store.set(DRAFT_INDEX_KEY, &i.to_string()),
        None => store.remove(DRAFT_INDEX_KEY),
    }
}

/// Reads the staged draft, if any. Does not clear it.
pub fn take<S: KeyValueStore>(store: &S) -> Result<Option<Draft>> {
    let Some(raw) = store.get(DRAFT_ENTRY_KEY)? else {
        return Ok(None);
    };

    let value: Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("ignoring unreadable edit draft: {}", e);
            return Ok(None);
        }
    };

    let index = store
        .get(DRAFT_INDEX_KEY)?
        .and_then(|s| match s.trim().parse::<usize>() {
            Ok(i) => Some(i),
            Err(_) => {
                log::warn!("ignoring unreadable edit draft index {:?}", s);
                None
            }
        });

    Ok(Some(Draft {
        entry: Entry::from_value_lenient(&value),
        index,
    }))
}

/// Empties the slot.
pub fn clear<S: KeyValueStore>(store: &mut S) -> Result<()> {
    store.remove(DRAFT_ENTRY_KEY)?;
    store.remove(DRAFT_INDEX_KEY)
}
