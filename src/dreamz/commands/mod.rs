use crate::config::DreamzConfig;
use crate::draft::Draft;
use crate::error::{DreamzError, Result};
use crate::filter::IndexedEntry;
use crate::form::FormState;
use crate::model::{Entry, Tone};
use crate::vocabulary::{Vocabulary, VocabularyKind};
use chrono::NaiveDate;
use std::path::PathBuf;

pub mod config;
pub mod delete;
pub mod draft;
pub mod edit;
pub mod list;
pub mod reset;
pub mod vocab;
pub mod view;
pub mod write;

#[derive(Debug, Clone)]
pub struct DreamzPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_entries: Vec<IndexedEntry>,
    pub listed_entries: Vec<IndexedEntry>,
    pub draft: Option<Draft>,
    pub vocabulary: Option<Vocabulary>,
    pub config: Option<DreamzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_entries(mut self, entries: Vec<IndexedEntry>) -> Self {
        self.listed_entries = entries;
        self
    }

    pub fn with_draft(mut self, draft: Option<Draft>) -> Self {
        self.draft = draft;
        self
    }

    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = Some(vocabulary);
        self
    }

    pub fn with_config(mut self, config: DreamzConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Field changes to apply to the form before it is submitted.
///
/// `None` leaves a field as the form has it (blank for a new entry, the
/// stored value when editing). Tags and characters are toggled.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub title: Option<String>,
    pub body_text: Option<String>,
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
    pub tags: Vec<String>,
    pub characters: Vec<String>,
    pub emotion_before: Option<String>,
    pub emotion_after: Option<String>,
    pub emotion_before_intensity: Option<i64>,
    pub emotion_after_intensity: Option<i64>,
    pub clarity: Option<i64>,
    pub sleep_quality: Option<i64>,
    pub meaning: Option<String>,
    pub tone: Option<Tone>,
}

impl FormInput {
    /// Applies every given change on top of `state`.
    pub fn apply(&self, state: FormState, date_format: &str) -> FormState {
        let mut state = state;
        if let Some(title) = &self.title {
            state = state.with_title(title.as_str());
        }
        if let Some(body) = &self.body_text {
            state = state.with_body_text(body.as_str());
        }
        if let Some(date) = self.date {
            state = state.with_date(crate::form::display_date(date, date_format));
        }
        if let Some(location) = &self.location {
            state = state.with_location(location.as_str());
        }
        for tag in &self.tags {
            state = state.toggle_tag(tag);
        }
        for character in &self.characters {
            state = state.toggle_character(character);
        }
        if let Some(emotion) = &self.emotion_before {
            state = state.with_emotion_before(emotion.as_str());
        }
        if let Some(emotion) = &self.emotion_after {
            state = state.with_emotion_after(emotion.as_str());
        }
        if let Some(value) = self.emotion_before_intensity {
            state = state.with_emotion_before_intensity(value);
        }
        if let Some(value) = self.emotion_after_intensity {
            state = state.with_emotion_after_intensity(value);
        }
        if let Some(value) = self.clarity {
            state = state.with_clarity(value);
        }
        if let Some(value) = self.sleep_quality {
            state = state.with_sleep_quality(value);
        }
        if let Some(meaning) = &self.meaning {
            state = state.with_meaning(meaning.as_str());
        }
        if let Some(tone) = self.tone {
            state = state.with_tone(tone);
        }
        state
    }

    /// Rejects toggles that would add an item missing from the vocabulary.
    /// Removing an item the form already holds is always allowed.
    pub fn check_vocabulary(&self, state: &FormState, vocabulary: &Vocabulary) -> Result<()> {
        let unknown = |kind: VocabularyKind, requested: &[String], current: &[String]| {
            requested
                .iter()
                .find(|item| !current.contains(*item) && !vocabulary.contains(kind, item))
                .cloned()
        };

        if let Some(tag) = unknown(VocabularyKind::Tag, &self.tags, &state.tags) {
            return Err(DreamzError::Vocabulary(format!(
                "Unknown tag: {} (add it with `dreamz vocab add tag {}`)",
                tag, tag
            )));
        }
        if let Some(character) =
            unknown(VocabularyKind::Character, &self.characters, &state.characters)
        {
            return Err(DreamzError::Vocabulary(format!(
                "Unknown character: {} (add it with `dreamz vocab add character {}`)",
                character, character
            )));
        }
        Ok(())
    }
}

/// 1-based position as shown to the user.
pub fn position(index: usize) -> usize {
    index + 1
}

pub(crate) fn describe(entry: &Entry) -> &str {
    if entry.title.is_empty() {
        "(untitled)"
    } else {
        &entry.title
    }
}
