use crate::commands::{describe, position, write, CmdMessage, CmdResult, FormInput};
use crate::draft;
use crate::error::{DreamzError, Result};
use crate::journal;
use crate::store::KeyValueStore;

/// Stages entry `index` in the draft channel without submitting anything.
pub fn stage<S: KeyValueStore>(store: &mut S, index: usize) -> Result<CmdResult> {
    let entries = journal::list_all(store)?;
    let entry = entries
        .get(index)
        .ok_or_else(|| DreamzError::Api(format!("Entry {} not found", position(index))))?;

    draft::stash(store, entry, Some(index))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Entry {} staged for editing: {}",
        position(index),
        describe(entry)
    )));
    Ok(result)
}

/// Stages entry `index` and immediately submits it with `input` applied.
///
/// If the submit fails the staged draft is cleared again, so a later plain
/// `write` cannot overwrite entry `index`.
pub fn run<S: KeyValueStore>(
    store: &mut S,
    date_format: &str,
    index: usize,
    input: &FormInput,
) -> Result<CmdResult> {
    stage(store, index)?;
    write::run(store, date_format, input).or_else(|err| {
        if let Err(clear_err) = draft::clear(store) {
            log::error!("failed to clear draft after edit error: {}", clear_err);
        }
        Err(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_DATE_FORMAT;
    use crate::model::Tone;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn stage_writes_the_draft() {
        let mut fixture = StoreFixture::new().with_entries(3);
        stage(&mut fixture.store, 2).unwrap();

        let staged = draft::take(&fixture.store).unwrap().unwrap();
        assert_eq!(staged.index, Some(2));
        assert_eq!(staged.entry.title, "Dream 3");
    }

    #[test]
    fn stage_rejects_missing_entries() {
        let mut fixture = StoreFixture::new().with_entries(1);
        assert!(stage(&mut fixture.store, 1).is_err());
        assert!(draft::take(&fixture.store).unwrap().is_none());
    }

    #[test]
    fn failed_edit_clears_its_draft() {
        let mut fixture = StoreFixture::new().with_entries(2);
        let input = FormInput {
            tags: vec!["bogus".into()],
            ..FormInput::default()
        };
        assert!(run(&mut fixture.store, DEFAULT_DATE_FORMAT, 0, &input).is_err());
        assert!(draft::take(&fixture.store).unwrap().is_none());

        let input = FormInput {
            title: Some("Brand new".into()),
            ..FormInput::default()
        };
        write::run(&mut fixture.store, DEFAULT_DATE_FORMAT, &input).unwrap();
        let entries = journal::list_all(&fixture.store).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].title, "Dream 1");
        assert_eq!(entries[2].title, "Brand new");
    }

    #[test]
    fn edit_changes_only_the_given_fields() {
        let mut fixture = StoreFixture::new().with_entries(3);
        let input = FormInput {
            tone: Some(Tone::Negative),
            ..FormInput::default()
        };
        run(&mut fixture.store, DEFAULT_DATE_FORMAT, 0, &input).unwrap();

        let entries = journal::list_all(&fixture.store).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].title, "Dream 1");
        assert_eq!(entries[0].body_text, "Body of dream 1");
        assert_eq!(entries[0].tone, Tone::Negative);
        assert_eq!(entries[1].tone, Tone::Neutral);
    }
}
