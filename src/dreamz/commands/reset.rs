use crate::commands::{CmdMessage, CmdResult};
use crate::draft;
use crate::error::Result;
use crate::journal;
use crate::store::KeyValueStore;

/// Empties the journal. A staged draft would point into the old list, so it
/// goes too.
pub fn run<S: KeyValueStore>(store: &mut S) -> Result<CmdResult> {
    let count = journal::list_all(store)?.len();
    journal::reset(store)?;
    draft::clear(store)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Journal reset ({} dreams removed)",
        count
    )));
    Ok(result)
}
