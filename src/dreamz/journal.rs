//! # Entry Repository
//!
//! The journal is one ordered list of [`Entry`] values stored as a JSON array
//! under [`ENTRIES_KEY`]. Position is the only address an entry has.
//!
//! Every mutation reads the whole list, changes it in memory and writes the
//! whole list back. Nothing is locked: a writer working from a stale read
//! silently overwrites whatever happened in between.

use crate::error::{DreamzError, Result};
use crate::model::Entry;
use crate::store::{KeyValueStore, ENTRIES_KEY};
use serde_json::Value;
use std::collections::BTreeSet;

/// Where an entry ended up after a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Replaced(usize),
    Appended(usize),
}

impl Placement {
    pub fn index(&self) -> usize {
        match self {
            Placement::Replaced(i) | Placement::Appended(i) => *i,
        }
    }
}

/// Reads every entry.
///
/// An absent key or a value that is not a JSON array reads as an empty
/// journal. Only a failing store is reported as an error.
pub fn list_all<S: KeyValueStore>(store: &S) -> Result<Vec<Entry>> {
    let Some(raw) = store.get(ENTRIES_KEY)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(items)) => Ok(items.iter().map(Entry::from_value_lenient).collect()),
        Ok(other) => {
            log::warn!(
                "stored journal is not a list (found {}), treating as empty",
                json_kind(&other)
            );
            Ok(Vec::new())
        }
        Err(e) => {
            log::warn!("stored journal is not valid JSON ({}), treating as empty", e);
            Ok(Vec::new())
        }
    }
}

/// Adds `entry` at the end and returns its index.
pub fn append<S: KeyValueStore>(store: &mut S, entry: Entry) -> Result<usize> {
    let mut entries = list_all(store)?;
    entries.push(entry);
    write_all(store, &entries)?;
    Ok(entries.len() - 1)
}

/// Overwrites position `index`. An index past the end appends instead.
pub fn replace_at<S: KeyValueStore>(
    store: &mut S,
    index: usize,
    entry: Entry,
) -> Result<Placement> {
    let mut entries = list_all(store)?;
    let placement = if index < entries.len() {
        entries[index] = entry;
        Placement::Replaced(index)
    } else {
        log::warn!(
            "edit index {} is outside a journal of {} entries, appending instead",
            index,
            entries.len()
        );
        entries.push(entry);
        Placement::Appended(entries.len() - 1)
    };
    write_all(store, &entries)?;
    Ok(placement)
}

/// Removes position `index`, if it exists, and returns what was removed.
pub fn delete_at<S: KeyValueStore>(store: &mut S, index: usize) -> Result<Option<Entry>> {
    let removed = delete_many(store, &BTreeSet::from([index]))?;
    Ok(removed.into_iter().next())
}

/// Removes every listed position. Survivors keep their relative order;
/// positions past the end are ignored. Returns the removed entries in
/// their original order.
pub fn delete_many<S: KeyValueStore>(
    store: &mut S,
    indices: &BTreeSet<usize>,
) -> Result<Vec<Entry>> {
    let entries = list_all(store)?;
    let (removed, kept): (Vec<_>, Vec<_>) = entries
        .into_iter()
        .enumerate()
        .partition(|(i, _)| indices.contains(i));

    let kept: Vec<Entry> = kept.into_iter().map(|(_, e)| e).collect();
    write_all(store, &kept)?;
    Ok(removed.into_iter().map(|(_, e)| e).collect())
}

/// Empties the journal.
pub fn reset<S: KeyValueStore>(store: &mut S) -> Result<()> {
    write_all(store, &[])
}

fn write_all<S: KeyValueStore>(store: &mut S, entries: &[Entry]) -> Result<()> {
    let raw = serde_json::to_string(entries).map_err(DreamzError::Serialization)?;
    store.set(ENTRIES_KEY, &raw)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
