//! Integration tests for the stcard_parser crate.
//!
//! Tests for the card parsing pipeline:
//! - Tokenization and field lookup
//! - Servant and master record assembly
//! - Structural errors
//! - Property tests over arbitrary input

mod locator_tests;
mod master_tests;
mod property_tests;
