//! Tags and characters an entry can be labeled with.
//!
//! A fixed set of built-in items is always available and cannot be removed.
//! Items the user adds are persisted under [`VOCABULARY_KEY`] and listed
//! after the built-ins.

use crate::error::{DreamzError, Result};
use crate::store::{KeyValueStore, VOCABULARY_KEY};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TAGS: &[&str] = &[
    "lucid",
    "nightmare",
    "recurring",
    "flying",
    "falling",
    "chase",
    "water",
    "premonition",
];

pub const DEFAULT_CHARACTERS: &[&str] = &[
    "myself",
    "family",
    "friend",
    "partner",
    "stranger",
    "colleague",
    "animal",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabularyKind {
    Tag,
    Character,
}

impl VocabularyKind {
    fn defaults(&self) -> &'static [&'static str] {
        match self {
            VocabularyKind::Tag => DEFAULT_TAGS,
            VocabularyKind::Character => DEFAULT_CHARACTERS,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VocabularyKind::Tag => "tag",
            VocabularyKind::Character => "character",
        }
    }
}

/// User-added items, as persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct CustomItems {
    tags: Vec<String>,
    characters: Vec<String>,
}

impl CustomItems {
    fn items_mut(&mut self, kind: VocabularyKind) -> &mut Vec<String> {
        match kind {
            VocabularyKind::Tag => &mut self.tags,
            VocabularyKind::Character => &mut self.characters,
        }
    }
}

/// Everything selectable: built-ins first, then user additions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vocabulary {
    pub tags: Vec<String>,
    pub characters: Vec<String>,
}

impl Vocabulary {
    pub fn items(&self, kind: VocabularyKind) -> &[String] {
        match kind {
            VocabularyKind::Tag => &self.tags,
            VocabularyKind::Character => &self.characters,
        }
    }

    pub fn contains(&self, kind: VocabularyKind, item: &str) -> bool {
        self.items(kind).iter().any(|i| i == item)
    }
}

/// Whether an add changed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

pub fn is_default(kind: VocabularyKind, item: &str) -> bool {
    kind.defaults().contains(&item)
}

pub fn load<S: KeyValueStore>(store: &S) -> Result<Vocabulary> {
    let custom = load_custom(store)?;
    let merge = |defaults: &[&str], custom: Vec<String>| -> Vec<String> {
        let mut all: Vec<String> = defaults.iter().map(|s| s.to_string()).collect();
        for item in custom {
            if !all.contains(&item) {
                all.push(item);
            }
        }
        all
    };

    Ok(Vocabulary {
        tags: merge(DEFAULT_TAGS, custom.tags),
        characters: merge(DEFAULT_CHARACTERS, custom.characters),
    })
}

pub fn add<S: KeyValueStore>(
    store: &mut S,
    kind: VocabularyKind,
    item: &str,
) -> Result<AddOutcome> {
    let item = item.trim();
    if item.is_empty() {
        return Err(DreamzError::Vocabulary(format!(
            "A {} cannot be empty",
            kind.label()
        )));
    }

    if load(store)?.contains(kind, item) {
        return Ok(AddOutcome::AlreadyPresent);
    }

    let mut custom = load_custom(store)?;
    custom.items_mut(kind).push(item.to_string());
    save_custom(store, &custom)?;
    Ok(AddOutcome::Added)
}

pub fn remove<S: KeyValueStore>(store: &mut S, kind: VocabularyKind, item: &str) -> Result<()> {
    let item = item.trim();
    if is_default(kind, item) {
        return Err(DreamzError::Vocabulary(format!(
            "'{}' is a built-in {} and cannot be removed",
            item,
            kind.label()
        )));
    }

    let mut custom = load_custom(store)?;
    let items = custom.items_mut(kind);
    let before = items.len();
    items.retain(|i| i != item);
    if items.len() == before {
        return Err(DreamzError::Vocabulary(format!(
            "Unknown {}: {}",
            kind.label(),
            item
        )));
    }
    save_custom(store, &custom)
}

fn load_custom<S: KeyValueStore>(store: &S) -> Result<CustomItems> {
    let Some(raw) = store.get(VOCABULARY_KEY)? else {
        return Ok(CustomItems::default());
    };
    match serde_json::from_str(&raw) {
        Ok(custom) => Ok(custom),
        Err(e) => {
            log::warn!("ignoring unreadable vocabulary: {}", e);
            Ok(CustomItems::default())
        }
    }
}

fn save_custom<S: KeyValueStore>(store: &mut S, custom: &CustomItems) -> Result<()> {
    let raw = serde_json::to_string(custom).map_err(DreamzError::Serialization)?;
    store.set(VOCABULARY_KEY, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn fresh_store_lists_defaults() {
        let store = InMemoryStore::new();
        let vocab = load(&store).unwrap();
        assert_eq!(vocab.tags.len(), DEFAULT_TAGS.len());
        assert!(vocab.contains(VocabularyKind::Character, "stranger"));
    }

    #[test]
    fn added_items_follow_defaults() {
        let mut store = InMemoryStore::new();
        assert_eq!(
            add(&mut store, VocabularyKind::Tag, "  teeth ").unwrap(),
            AddOutcome::Added
        );

        let vocab = load(&store).unwrap();
        assert_eq!(vocab.tags.last().map(String::as_str), Some("teeth"));
        assert!(!vocab.contains(VocabularyKind::Character, "teeth"));
    }

    #[test]
    fn adding_twice_or_a_default_changes_nothing() {
        let mut store = InMemoryStore::new();
        add(&mut store, VocabularyKind::Character, "Ghost").unwrap();
        assert_eq!(
            add(&mut store, VocabularyKind::Character, "Ghost").unwrap(),
            AddOutcome::AlreadyPresent
        );
        assert_eq!(
            add(&mut store, VocabularyKind::Tag, "lucid").unwrap(),
            AddOutcome::AlreadyPresent
        );
        assert_eq!(
            load(&store).unwrap().characters.len(),
            DEFAULT_CHARACTERS.len() + 1
        );
    }

    #[test]
    fn empty_item_is_rejected() {
        let mut store = InMemoryStore::new();
        assert!(add(&mut store, VocabularyKind::Tag, "   ").is_err());
    }

    #[test]
    fn defaults_cannot_be_removed() {
        let mut store = InMemoryStore::new();
        let err = remove(&mut store, VocabularyKind::Tag, "nightmare").unwrap_err();
        assert!(err.to_string().contains("built-in"));
    }

    #[test]
    fn custom_items_can_be_removed() {
        let mut store = InMemoryStore::new();
        add(&mut store, VocabularyKind::Tag, "teeth").unwrap();
        remove(&mut store, VocabularyKind::Tag, "teeth").unwrap();
        assert!(!load(&store).unwrap().contains(VocabularyKind::Tag, "teeth"));
        assert!(remove(&mut store, VocabularyKind::Tag, "teeth").is_err());
    }

    #[test]
    fn unreadable_vocabulary_falls_back_to_defaults() {
        let mut store = InMemoryStore::new();
        store.set(VOCABULARY_KEY, "[1, 2").unwrap();
        assert_eq!(load(&store).unwrap().tags.len(), DEFAULT_TAGS.len());
    }
}
