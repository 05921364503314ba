//! Core types for stcard.
//!
//! This crate provides:
//! - [`StatBlock`] and [`Attribute`] - The seven-attribute numeric record
//! - [`CardRecord`] - A parsed character card and its [`NamedEntry`] lists
//! - [`CardType`] - The closed set of card variants
//! - [`Error`] - Typed errors with optional source context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod card;
pub mod error;
pub mod stats;

pub use card::{BaseStats, CardRecord, CardType, NamedEntry};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use stats::{Attribute, StatBlock};
