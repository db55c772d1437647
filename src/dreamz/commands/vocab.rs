use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::KeyValueStore;
use crate::vocabulary::{self, AddOutcome, VocabularyKind};

pub fn list<S: KeyValueStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_vocabulary(vocabulary::load(store)?))
}

pub fn add<S: KeyValueStore>(store: &mut S, kind: VocabularyKind, item: &str) -> Result<CmdResult> {
    let outcome = vocabulary::add(store, kind, item)?;
    let mut result = CmdResult::default();
    let item = item.trim();
    match outcome {
        AddOutcome::Added => {
            result.add_message(CmdMessage::success(format!("Added {}: {}", kind.label(), item)))
        }
        AddOutcome::AlreadyPresent => result.add_message(CmdMessage::info(format!(
            "{} already exists: {}",
            capitalized(kind.label()),
            item
        ))),
    }
    Ok(result.with_vocabulary(vocabulary::load(store)?))
}

pub fn remove<S: KeyValueStore>(
    store: &mut S,
    kind: VocabularyKind,
    item: &str,
) -> Result<CmdResult> {
    vocabulary::remove(store, kind, item)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed {}: {}",
        kind.label(),
        item.trim()
    )));
    Ok(result.with_vocabulary(vocabulary::load(store)?))
}

fn capitalized(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn add_reports_and_returns_vocabulary() {
        let mut store = InMemoryStore::new();
        let result = add(&mut store, VocabularyKind::Character, "Ghost").unwrap();
        assert_eq!(result.messages[0].content, "Added character: Ghost");
        assert!(result
            .vocabulary
            .unwrap()
            .contains(VocabularyKind::Character, "Ghost"));

        let again = add(&mut store, VocabularyKind::Character, "Ghost").unwrap();
        assert_eq!(again.messages[0].content, "Character already exists: Ghost");
    }

    #[test]
    fn remove_of_default_fails() {
        let mut store = InMemoryStore::new();
        assert!(remove(&mut store, VocabularyKind::Character, "family").is_err());
    }
}
