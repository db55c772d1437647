use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::{filter_entries, EntryFilter};
use crate::journal;
use crate::store::KeyValueStore;

pub fn run<S: KeyValueStore>(store: &S, filter: &EntryFilter) -> Result<CmdResult> {
    let entries = journal::list_all(store)?;
    Ok(CmdResult::default().with_listed_entries(filter_entries(entries, filter)))
}
