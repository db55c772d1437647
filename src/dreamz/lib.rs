//! # Dreamz Architecture
//!
//! Dreamz is a **UI-agnostic dream journal library**. The command-line client
//! shipped with it is one consumer; a mobile or web front end would sit in
//! the same place and talk to the same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (1-based positions → journal indexes)  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Composes the journal, draft, form and vocabulary         │
//! │  - Returns CmdResult values, never prints                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (journal.rs, draft.rs, form.rs, filter.rs, ...)       │
//! │  - Entry repository, edit draft hand-off, form state        │
//! │    machine, search                                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KeyValueStore trait                                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Editing Without Identifiers
//!
//! Entries have no ids. An entry is addressed by its position in the
//! journal, and editing works by staging the entry and its position in the
//! draft channel, then submitting the form, which overwrites that position.
//! If the journal changed in between and the position no longer exists, the
//! edit is saved as a new entry instead.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`journal`]: The ordered entry list (append, replace, delete, reset)
//! - [`draft`]: Single-slot edit hand-off
//! - [`form`]: Form state and the create/edit state machine
//! - [`filter`]: Search and filtering that keeps journal positions
//! - [`vocabulary`]: Selectable tags and characters
//! - [`store`]: Key-value storage abstraction and implementations
//! - [`model`]: Core data types (`Entry`, `Tone`)
//! - [`positions`]: Parsing user-facing positions and ranges
//! - [`config`]: Configuration management
//! - [`logging`]: Logger setup for the binary
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod draft;
pub mod error;
pub mod filter;
pub mod form;
pub mod journal;
pub mod logging;
pub mod model;
pub mod positions;
pub mod store;
pub mod vocabulary;
