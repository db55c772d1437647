use crate::commands::{describe, position, CmdMessage, CmdResult, FormInput};
use crate::error::Result;
use crate::filter::IndexedEntry;
use crate::form::{FormController, FormMode};
use crate::journal::Placement;
use crate::store::KeyValueStore;
use crate::vocabulary;

/// Opens the form (picking up any staged draft), applies `input` and submits.
pub fn run<S: KeyValueStore>(
    store: &mut S,
    date_format: &str,
    input: &FormInput,
) -> Result<CmdResult> {
    let mut form = FormController::new(date_format);
    form.mount(store)?;
    let mode = form.mode();

    input.check_vocabulary(form.state(), &vocabulary::load(store)?)?;
    form.update(|state| input.apply(state, date_format));

    let outcome = form.submit(store)?;
    let mut result = CmdResult::default();
    let title = describe(&outcome.entry).to_string();

    match (mode, outcome.placement) {
        (FormMode::Editing { .. }, Placement::Replaced(i)) => {
            result.add_message(CmdMessage::success(format!(
                "Dream updated ({}): {}",
                position(i),
                title
            )));
        }
        (FormMode::Editing { index }, Placement::Appended(i)) => {
            result.add_message(CmdMessage::warning(format!(
                "Entry {} no longer exists, saved as a new entry",
                position(index)
            )));
            result.add_message(CmdMessage::success(format!(
                "Dream saved ({}): {}",
                position(i),
                title
            )));
        }
        (FormMode::Creating, placement) => {
            result.add_message(CmdMessage::success(format!(
                "Dream saved ({}): {}",
                position(placement.index()),
                title
            )));
        }
    }

    result.affected_entries.push(IndexedEntry {
        index: outcome.placement.index(),
        entry: outcome.entry,
    });
    Ok(result)
}
