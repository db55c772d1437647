use crate::commands::{position, CmdResult};
use crate::error::{DreamzError, Result};
use crate::filter::IndexedEntry;
use crate::journal;
use crate::store::KeyValueStore;

pub fn run<S: KeyValueStore>(store: &S, indexes: &[usize]) -> Result<CmdResult> {
    let entries = journal::list_all(store)?;
    let listed = indexes
        .iter()
        .map(|&index| {
            entries
                .get(index)
                .map(|entry| IndexedEntry {
                    index,
                    entry: entry.clone(),
                })
                .ok_or_else(|| DreamzError::Api(format!("Entry {} not found", position(index))))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CmdResult::default().with_listed_entries(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn returns_requested_entries_in_request_order() {
        let fixture = StoreFixture::new().with_entries(3);
        let result = run(&fixture.store, &[2, 0]).unwrap();
        let titles: Vec<_> = result
            .listed_entries
            .iter()
            .map(|ie| ie.entry.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Dream 3", "Dream 1"]);
    }

    #[test]
    fn missing_entry_is_an_error() {
        let fixture = StoreFixture::new().with_entries(1);
        let err = run(&fixture.store, &[3]).unwrap_err();
        assert!(err.to_string().contains("Entry 4 not found"));
    }
}
