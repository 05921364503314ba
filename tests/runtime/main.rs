//! Integration tests for Layer 2: Runtime
//!
//! Tests for batch card files, the session roster, rendering, JSON output and
//! REPL evaluation.

mod json_tests;
mod repl_tests;
