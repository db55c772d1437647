use crate::commands::{describe, position, CmdMessage, CmdResult};
use crate::draft;
use crate::error::Result;
use crate::store::KeyValueStore;

pub fn show<S: KeyValueStore>(store: &S) -> Result<CmdResult> {
    let staged = draft::take(store)?;
    let mut result = CmdResult::default();

    match &staged {
        Some(d) => {
            let target = match d.index {
                Some(i) => format!("editing entry {}", position(i)),
                None => "will be saved as a new entry".to_string(),
            };
            result.add_message(CmdMessage::info(format!(
                "Draft staged ({}): {}",
                target,
                describe(&d.entry)
            )));
        }
        None => result.add_message(CmdMessage::info("No draft staged")),
    }

    Ok(result.with_draft(staged))
}

pub fn discard<S: KeyValueStore>(store: &mut S) -> Result<CmdResult> {
    let had_draft = draft::take(store)?.is_some();
    draft::clear(store)?;

    let mut result = CmdResult::default();
    if had_draft {
        result.add_message(CmdMessage::success("Draft discarded"));
    } else {
        result.add_message(CmdMessage::info("No draft staged"));
    }
    Ok(result)
}
