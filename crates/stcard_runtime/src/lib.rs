//! REPL, CLI, batch loading and serialization for stcard.
//!
//! This crate provides:
//! - [`Repl`] - Interactive card-pasting loop
//! - [`Session`] - Roster of parsed cards
//! - [`batch`] - Multi-card text files
//! - [`serialize`] - JSON encoding of [`CardRecord`](stcard_foundation::CardRecord)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod batch;
pub mod editor;
pub mod format;
pub mod highlight;
pub mod logging;
pub mod repl;
pub mod serialize;
pub mod session;

pub use batch::{CardBlock, load_cards, parse_cards, split_cards};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use format::{render_card, summary_line};
pub use highlight::CardHighlighter;
pub use logging::init_tracing;
pub use repl::{Outcome, Repl};
pub use serialize::{from_json, to_json, to_json_array, to_json_pretty};
pub use session::Session;
