//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every dreamz operation, whatever the UI.
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (1-based positions as typed by a user become
//!   0-based journal indexes and are checked against the current journal)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It holds no business logic and performs no terminal I/O.
//!
//! `DreamzApi<S: KeyValueStore>` is generic over the storage backend:
//! - Production: `DreamzApi<FileStore>`
//! - Testing: `DreamzApi<InMemoryStore>`

use crate::commands;
use crate::config::DreamzConfig;
use crate::error::{DreamzError, Result};
use crate::filter::EntryFilter;
use crate::journal;
use crate::positions::parse_positions;
use crate::store::KeyValueStore;
use crate::vocabulary::VocabularyKind;

/// The main API facade for dreamz operations.
pub struct DreamzApi<S: KeyValueStore> {
    store: S,
    paths: commands::DreamzPaths,
    config: DreamzConfig,
}

impl<S: KeyValueStore> DreamzApi<S> {
    pub fn new(store: S, paths: commands::DreamzPaths, config: DreamzConfig) -> Self {
        Self {
            store,
            paths,
            config,
        }
    }

    /// Submits the form: a new entry, or the staged draft if there is one.
    pub fn write_entry(&mut self, input: &FormInput) -> Result<CmdResult> {
        commands::write::run(&mut self.store, &self.config.date_format, input)
    }

    /// Edits the entry at `position` in one step.
    pub fn edit_entry(&mut self, position: &str, input: &FormInput) -> Result<CmdResult> {
        let index = self.resolve_one(position)?;
        commands::edit::run(&mut self.store, &self.config.date_format, index, input)
    }

    /// Stages the entry at `position` for a later `write_entry`.
    pub fn stage_edit(&mut self, position: &str) -> Result<CmdResult> {
        let index = self.resolve_one(position)?;
        commands::edit::stage(&mut self.store, index)
    }

    pub fn list_entries(&self, filter: &EntryFilter) -> Result<CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn view_entries<I: AsRef<str>>(&self, positions: &[I]) -> Result<CmdResult> {
        let indexes = self.resolve(positions)?;
        commands::view::run(&self.store, &indexes)
    }

    pub fn delete_entries<I: AsRef<str>>(&mut self, positions: &[I]) -> Result<CmdResult> {
        let indexes = self.resolve(positions)?;
        commands::delete::run(&mut self.store, &indexes)
    }

    pub fn reset(&mut self) -> Result<CmdResult> {
        commands::reset::run(&mut self.store)
    }

    pub fn show_draft(&self) -> Result<CmdResult> {
        commands::draft::show(&self.store)
    }

    pub fn discard_draft(&mut self) -> Result<CmdResult> {
        commands::draft::discard(&mut self.store)
    }

    pub fn vocabulary(&self) -> Result<CmdResult> {
        commands::vocab::list(&self.store)
    }

    pub fn add_vocabulary(&mut self, kind: VocabularyKind, item: &str) -> Result<CmdResult> {
        commands::vocab::add(&mut self.store, kind, item)
    }

    pub fn remove_vocabulary(&mut self, kind: VocabularyKind, item: &str) -> Result<CmdResult> {
        commands::vocab::remove(&mut self.store, kind, item)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.paths, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    pub fn paths(&self) -> &commands::DreamzPaths {
        &self.paths
    }

    fn resolve<I: AsRef<str>>(&self, positions: &[I]) -> Result<Vec<usize>> {
        let len = journal::list_all(&self.store)?.len();
        parse_positions(positions, len)
    }

    fn resolve_one(&self, position: &str) -> Result<usize> {
        match self.resolve(&[position])?.as_slice() {
            [index] => Ok(*index),
            _ => Err(DreamzError::Api(format!(
                "Expected a single position, got {}",
                position
            ))),
        }
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, DreamzPaths, FormInput, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DreamzConfig;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn api(store: InMemoryStore) -> DreamzApi<InMemoryStore> {
        let paths = DreamzPaths {
            data_dir: PathBuf::from("/nonexistent/dreamz"),
        };
        DreamzApi::new(store, paths, DreamzConfig::default())
    }

    #[test]
    fn positions_are_one_based() {
        let api = api(StoreFixture::new().with_entries(3).store);
        let result = api.view_entries(&["1", "3"]).unwrap();
        assert_eq!(result.listed_entries[0].index, 0);
        assert_eq!(result.listed_entries[1].index, 2);
    }

    #[test]
    fn out_of_range_positions_are_rejected_before_deleting() {
        let mut api = api(StoreFixture::new().with_entries(2).store);
        assert!(api.delete_entries(&["1", "3"]).is_err());
        assert_eq!(
            api.list_entries(&EntryFilter::default())
                .unwrap()
                .listed_entries
                .len(),
            2
        );
    }

    #[test]
    fn huge_range_is_an_error() {
        let mut api = api(StoreFixture::new().with_entries(2).store);
        let err = api.delete_entries(&["1-18446744073709551615"]).unwrap_err();
        assert!(err.to_string().contains("not found"));
        assert_eq!(
            api.list_entries(&EntryFilter::default())
                .unwrap()
                .listed_entries
                .len(),
            2
        );
    }

    #[test]
    fn failed_edit_leaves_no_draft_behind() {
        let mut api = api(StoreFixture::new().with_entries(2).store);
        let input = FormInput {
            tags: vec!["not-in-vocab".into()],
            ..FormInput::default()
        };
        assert!(api.edit_entry("1", &input).is_err());
        assert!(api.show_draft().unwrap().draft.is_none());

        let input = FormInput {
            title: Some("Brand new".into()),
            ..FormInput::default()
        };
        api.write_entry(&input).unwrap();
        let titles: Vec<String> = api
            .list_entries(&EntryFilter::default())
            .unwrap()
            .listed_entries
            .into_iter()
            .map(|ie| ie.entry.title)
            .collect();
        assert_eq!(titles, vec!["Dream 1", "Dream 2", "Brand new"]);
    }

    #[test]
    fn delete_accepts_ranges() {
        let mut api = api(StoreFixture::new().with_entries(5).store);
        let result = api.delete_entries(&["2-4"]).unwrap();
        assert_eq!(result.affected_entries.len(), 3);
    }

    #[test]
    fn edit_dispatches_through_the_draft() {
        let mut api = api(StoreFixture::new().with_entries(2).store);
        let input = FormInput {
            title: Some("Renamed".into()),
            ..FormInput::default()
        };
        let result = api.edit_entry("2", &input).unwrap();
        assert_eq!(result.affected_entries[0].index, 1);
        assert!(api.show_draft().unwrap().draft.is_none());
    }

    #[test]
    fn edit_rejects_ranges() {
        let mut api = api(StoreFixture::new().with_entries(3).store);
        assert!(api.edit_entry("1-2", &FormInput::default()).is_err());
    }

    #[test]
    fn stage_then_write_updates_in_place() {
        let mut api = api(StoreFixture::new().with_entries(2).store);
        api.stage_edit("1").unwrap();
        assert!(api.show_draft().unwrap().draft.is_some());

        let input = FormInput {
            body_text: Some("Rewritten".into()),
            ..FormInput::default()
        };
        api.write_entry(&input).unwrap();

        let listed = api
            .list_entries(&EntryFilter::default())
            .unwrap()
            .listed_entries;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].entry.body_text, "Rewritten");
    }
}
