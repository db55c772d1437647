//! # Entry Form Controller
//!
//! The form is a small state machine over two modes:
//!
//! ```text
//!            mount (draft with index)
//! Creating ───────────────────────────▶ Editing { index }
//!    ▲                                        │
//!    └──────────── submit ────────────────────┘
//! ```
//!
//! [`FormState`] is an immutable value: every field change produces a new
//! state that replaces the old one wholesale. On submit the controller turns
//! the state into an [`Entry`], overwrites the edited position (or appends),
//! clears the draft and starts over from a blank form.

use crate::config::{format_date, DEFAULT_DATE_FORMAT};
use crate::draft;
use crate::error::Result;
use crate::journal::{self, Placement};
use crate::model::{clamp_rating, Entry, Tone};
use crate::store::KeyValueStore;
use chrono::{Local, NaiveDate};

/// The values currently entered in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub body_text: String,
    pub date: String,
    pub location: String,
    pub tags: Vec<String>,
    pub characters: Vec<String>,
    pub emotion_before: String,
    pub emotion_after: String,
    pub emotion_before_intensity: u8,
    pub emotion_after_intensity: u8,
    pub clarity: u8,
    pub sleep_quality: u8,
    pub meaning: String,
    /// `None` until a tone is picked; submits as neutral.
    pub tone: Option<Tone>,
}

impl FormState {
    /// An empty form dated `date`.
    pub fn blank(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..Self::default()
        }
    }

    /// A form pre-filled from a stored entry. The stored date text is kept.
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            title: entry.title.clone(),
            body_text: entry.body_text.clone(),
            date: entry.date.clone(),
            location: entry.location.clone(),
            tags: entry.tags.clone(),
            characters: entry.characters.clone(),
            emotion_before: entry.emotion_before.clone(),
            emotion_after: entry.emotion_after.clone(),
            emotion_before_intensity: entry.emotion_before_intensity,
            emotion_after_intensity: entry.emotion_after_intensity,
            clarity: entry.clarity,
            sleep_quality: entry.sleep_quality,
            meaning: entry.meaning.clone(),
            tone: Some(entry.tone),
        }
    }

    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self
        }
    }

    pub fn with_body_text(self, body_text: impl Into<String>) -> Self {
        Self {
            body_text: body_text.into(),
            ..self
        }
    }

    pub fn with_date(self, date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..self
        }
    }

    pub fn with_location(self, location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..self
        }
    }

    /// Adds `tag` when absent, removes it when present.
    pub fn toggle_tag(self, tag: &str) -> Self {
        Self {
            tags: toggled(self.tags, tag),
            ..self
        }
    }

    /// Adds `character` when absent, removes it when present.
    pub fn toggle_character(self, character: &str) -> Self {
        Self {
            characters: toggled(self.characters, character),
            ..self
        }
    }

    pub fn with_emotion_before(self, emotion: impl Into<String>) -> Self {
        Self {
            emotion_before: emotion.into(),
            ..self
        }
    }

    pub fn with_emotion_after(self, emotion: impl Into<String>) -> Self {
        Self {
            emotion_after: emotion.into(),
            ..self
        }
    }

    pub fn with_emotion_before_intensity(self, value: i64) -> Self {
        Self {
            emotion_before_intensity: clamp_rating(value),
            ..self
        }
    }

    pub fn with_emotion_after_intensity(self, value: i64) -> Self {
        Self {
            emotion_after_intensity: clamp_rating(value),
            ..self
        }
    }

    pub fn with_clarity(self, value: i64) -> Self {
        Self {
            clarity: clamp_rating(value),
            ..self
        }
    }

    pub fn with_sleep_quality(self, value: i64) -> Self {
        Self {
            sleep_quality: clamp_rating(value),
            ..self
        }
    }

    pub fn with_meaning(self, meaning: impl Into<String>) -> Self {
        Self {
            meaning: meaning.into(),
            ..self
        }
    }

    pub fn with_tone(self, tone: Tone) -> Self {
        Self {
            tone: Some(tone),
            ..self
        }
    }

    /// The entry this form would save. Free-text fields are trimmed.
    pub fn to_entry(&self) -> Entry {
        Entry {
            title: self.title.trim().to_string(),
            body_text: self.body_text.trim().to_string(),
            date: self.date.clone(),
            location: self.location.trim().to_string(),
            tags: self.tags.clone(),
            characters: self.characters.clone(),
            emotion_before: self.emotion_before.trim().to_string(),
            emotion_after: self.emotion_after.trim().to_string(),
            emotion_before_intensity: self.emotion_before_intensity,
            emotion_after_intensity: self.emotion_after_intensity,
            clarity: self.clarity,
            sleep_quality: self.sleep_quality,
            meaning: self.meaning.trim().to_string(),
            tone: self.tone.unwrap_or_default(),
        }
    }
}

fn toggled(mut items: Vec<String>, item: &str) -> Vec<String> {
    if let Some(pos) = items.iter().position(|i| i == item) {
        items.remove(pos);
    } else {
        items.push(item.to_string());
    }
    items
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Creating,
    Editing { index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub placement: Placement,
    pub entry: Entry,
}

pub struct FormController {
    state: FormState,
    mode: FormMode,
    date_format: String,
}

impl FormController {
    /// A blank form in `Creating` mode, dated today.
    pub fn new(date_format: impl Into<String>) -> Self {
        let date_format = date_format.into();
        let state = FormState::blank(today(&date_format));
        Self {
            state,
            mode: FormMode::Creating,
            date_format,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Replaces the state with `f(state)`.
    pub fn update(&mut self, f: impl FnOnce(FormState) -> FormState) {
        let current = std::mem::take(&mut self.state);
        self.state = f(current);
    }

    /// Picks up a staged draft, if there is one.
    ///
    /// A draft with an index switches to `Editing`; a draft without one only
    /// pre-fills the fields.
    pub fn mount<S: KeyValueStore>(&mut self, store: &S) -> Result<()> {
        let Some(staged) = draft::take(store)? else {
            return Ok(());
        };
        self.state = FormState::from_entry(&staged.entry);
        self.mode = match staged.index {
            Some(index) => FormMode::Editing { index },
            None => FormMode::Creating,
        };
        log::debug!("form mounted with draft, mode={:?}", self.mode);
        Ok(())
    }

    /// Saves the form, clears the draft and resets to a blank `Creating` form.
    ///
    /// On a storage failure the error is returned and the form keeps its
    /// values and mode.
    pub fn submit<S: KeyValueStore>(&mut self, store: &mut S) -> Result<SubmitOutcome> {
        let entry = self.state.to_entry();
        let placement = match self.mode {
            FormMode::Editing { index } => journal::replace_at(store, index, entry.clone())?,
            FormMode::Creating => Placement::Appended(journal::append(store, entry.clone())?),
        };

        draft::clear(store)?;
        self.state = FormState::blank(today(&self.date_format));
        self.mode = FormMode::Creating;

        Ok(SubmitOutcome { placement, entry })
    }
}

/// Formats `date` with `date_format`, falling back to the default format.
pub fn display_date(date: NaiveDate, date_format: &str) -> String {
    format_date(date, date_format).unwrap_or_else(|e| {
        log::warn!("{}, using {}", e, DEFAULT_DATE_FORMAT);
        date.format(DEFAULT_DATE_FORMAT).to_string()
    })
}

fn today(date_format: &str) -> String {
    display_date(Local::now().date_naive(), date_format)
}
