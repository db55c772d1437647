//! # Dreamz CLI
//!
//! The binary is thin on purpose: argument parsing, dispatch and rendering
//! live in `cli/`, and this file only runs it and turns an error into a
//! non-zero exit.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/dreamz/cli/)                                │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal and JSON rendering (render.rs)                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (dreamz::api)                                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `dreamz::api` inward is UI agnostic. Printing, colors and
//! exit codes are handled here and nowhere else.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
