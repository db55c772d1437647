use crate::commands::{describe, position, CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::IndexedEntry;
use crate::journal;
use crate::store::KeyValueStore;
use std::collections::BTreeSet;

pub fn run<S: KeyValueStore>(store: &mut S, indexes: &[usize]) -> Result<CmdResult> {
    let targets: BTreeSet<usize> = indexes.iter().copied().collect();
    let removed = journal::delete_many(store, &targets)?;
    let mut result = CmdResult::default();

    // delete_many returns removed entries in journal order, as does the set
    for (index, entry) in targets.into_iter().zip(removed) {
        result.add_message(CmdMessage::success(format!(
            "Dream deleted ({}): {}",
            position(index),
            describe(&entry)
        )));
        result.affected_entries.push(IndexedEntry { index, entry });
    }

    if result.affected_entries.is_empty() {
        result.add_message(CmdMessage::info("No dreams deleted"));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn deletes_several_at_once() {
        let mut fixture = StoreFixture::new().with_entries(4);
        let result = run(&mut fixture.store, &[3, 1, 1]).unwrap();

        assert_eq!(result.affected_entries.len(), 2);
        assert_eq!(result.affected_entries[0].index, 1);
        assert_eq!(result.affected_entries[1].entry.title, "Dream 4");

        let titles: Vec<_> = journal::list_all(&fixture.store)
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["Dream 1", "Dream 3"]);
    }

    #[test]
    fn reports_when_nothing_matched() {
        let mut fixture = StoreFixture::new().with_entries(1);
        let result = run(&mut fixture.store, &[7]).unwrap();
        assert!(result.affected_entries.is_empty());
        assert_eq!(result.messages[0].content, "No dreams deleted");
    }
}
