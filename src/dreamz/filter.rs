//! # Filter/Search
//!
//! Pure functions over an in-memory list of entries. Nothing here touches the
//! store.
//!
//! Filtering keeps each entry's original position: delete and edit address
//! entries by where they sit in the stored list, not by where they appear in
//! a filtered view.

use crate::model::{Entry, Tone};
use serde::Serialize;

/// An entry together with its position in the full journal (0-based).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedEntry {
    pub index: usize,
    pub entry: Entry,
}

/// Criteria for narrowing a listing. Every criterion that is set must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub query: Option<String>,
    pub tone: Option<Tone>,
    pub tag: Option<String>,
}

impl EntryFilter {
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    pub fn accepts(&self, entry: &Entry) -> bool {
        let query_ok = self
            .query
            .as_deref()
            .map_or(true, |q| matches(q, entry));
        let tone_ok = self.tone.map_or(true, |t| entry.tone == t);
        let tag_ok = self.tag.as_deref().map_or(true, |tag| {
            let tag = tag.trim().to_lowercase();
            entry.tags.iter().any(|t| t.to_lowercase() == tag)
        });
        query_ok && tone_ok && tag_ok
    }
}

/// Case-insensitive substring match on title, body text, meaning, tags and
/// characters. A blank query matches everything.
pub fn matches(query: &str, entry: &Entry) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let contains = |s: &str| s.to_lowercase().contains(&needle);

    contains(&entry.title)
        || contains(&entry.body_text)
        || contains(&entry.meaning)
        || entry.tags.iter().any(|t| contains(t))
        || entry.characters.iter().any(|c| contains(c))
}

/// Pairs every entry with its position, in list order.
pub fn index_entries(entries: Vec<Entry>) -> Vec<IndexedEntry> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| IndexedEntry { index, entry })
        .collect()
}

/// Keeps the entries `filter` accepts, with their original positions.
pub fn filter_entries(entries: Vec<Entry>, filter: &EntryFilter) -> Vec<IndexedEntry> {
    index_entries(entries)
        .into_iter()
        .filter(|ie| filter.accepts(&ie.entry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flying_and_falling() -> Vec<Entry> {
        let mut flying = Entry::new("Flying", "");
        flying.tags = vec!["lucid".into()];
        let falling = Entry::new("Falling", "");
        vec![flying, falling]
    }

    #[test]
    fn query_keeps_original_index() {
        let result = filter_entries(flying_and_falling(), &EntryFilter::query("lucid"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].index, 0);
        assert_eq!(result[0].entry.title, "Flying");
    }

    #[test]
    fn later_matches_keep_their_position() {
        let result = filter_entries(flying_and_falling(), &EntryFilter::query("fall"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].index, 1);
    }

    #[test]
    fn blank_query_matches_everything() {
        for query in ["", "   "] {
            let result = filter_entries(flying_and_falling(), &EntryFilter::query(query));
            assert_eq!(result.len(), 2);
        }
    }

    #[test]
    fn matches_every_searchable_field_ignoring_case() {
        let mut entry = Entry::new("Title", "Body about the OCEAN");
        entry.meaning = "Fear of Change".into();
        entry.characters = vec!["Grandmother".into()];

        assert!(matches("ocean", &entry));
        assert!(matches("CHANGE", &entry));
        assert!(matches("grandmo", &entry));
        assert!(matches("title", &entry));
        assert!(!matches("desert", &entry));
    }

    #[test]
    fn location_and_emotions_are_not_searched() {
        let mut entry = Entry::new("Title", "");
        entry.location = "Paris".into();
        entry.emotion_before = "calm".into();
        assert!(!matches("paris", &entry));
        assert!(!matches("calm", &entry));
    }

    #[test]
    fn tone_and_tag_criteria_combine() {
        let mut entries = flying_and_falling();
        entries[0].tone = Tone::Positive;
        entries[1].tone = Tone::Negative;
        entries[1].tags = vec!["Lucid".into()];

        let filter = EntryFilter {
            tag: Some("lucid".into()),
            tone: Some(Tone::Negative),
            ..EntryFilter::default()
        };
        let result = filter_entries(entries, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].index, 1);
    }

    #[test]
    fn tag_criterion_ignores_non_ascii_case() {
        let mut entries = flying_and_falling();
        entries[1].tags = vec!["Été".into()];

        let filter = EntryFilter {
            tag: Some(" été ".into()),
            ..EntryFilter::default()
        };
        let result = filter_entries(entries, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].index, 1);
    }
}
