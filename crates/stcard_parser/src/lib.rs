//! Parser for chat-pasted `.st` character cards.
//!
//! This crate turns free-form card text such as
//! `.st 职介 弓 代号 天 合计等级 5 …` into a [`CardRecord`].
//!
//! # Architecture
//!
//! ```text
//! ".st 职介 弓 代号 天 合计筋力 10 职介技能1 单体狂化"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → [".st", "职介", "弓", "代号", "天", ...]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ FIELD LOCATOR   │  → scalar: 代号 → "天"
//! │                 │    span:   职介技能1 → "单体狂化"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ STAT GROUPS     │  → total / base / correction stat blocks
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ASSEMBLER       │  → CardRecord (servant or master)
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert raw text to a token stream
//! - [`vocabulary`] - Fixed keyword tables and boundary prefixes
//! - [`locator`] - Scalar and span field lookup
//! - [`stats`] - Stat block assembly and integer coercion
//! - [`assemble`] - Servant and master record assembly
//! - [`parser`] - Entry point

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod assemble;
pub mod locator;
pub mod parser;
pub mod stats;
pub mod tokenizer;
pub mod vocabulary;

// Re-export main types for convenience
pub use locator::{FieldLocator, LookupMode};
pub use parser::{parse, parse_tagged};
pub use stcard_foundation::{CardRecord, CardType, Error, ErrorKind, Result};
pub use tokenizer::{CardTokenizer, TokenStream, is_separator};
pub use vocabulary::{EntryFamily, StatGroup};
