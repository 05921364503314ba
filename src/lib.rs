//! stcard - Parser for chat-pasted `.st` character cards
//!
//! This crate re-exports all layers of the stcard system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: stcard_runtime    - REPL, CLI, batch files, JSON
//! Layer 1: stcard_parser     - Tokenizer, field locator, record assembly
//! Layer 0: stcard_foundation - Core types (CardRecord, StatBlock, Error)
//! ```

pub use stcard_foundation as foundation;
pub use stcard_parser as parser;
pub use stcard_runtime as runtime;

pub use stcard_foundation::{CardRecord, CardType, Error, ErrorKind, Result};
pub use stcard_parser::parse;
