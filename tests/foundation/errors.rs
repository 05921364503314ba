//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use stcard::foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_empty_input() {
    let err = Error::empty_input();
    assert_eq!(err.kind, ErrorKind::EmptyInput);
    assert_eq!(err.to_string(), "card text is empty");
}

#[test]
fn error_invalid_prefix() {
    let err = Error::invalid_prefix("hello .st 代号 天");
    assert!(matches!(err.kind, ErrorKind::InvalidPrefix { ref found } if found == "hello"));
    let msg = format!("{err}");
    assert!(msg.contains(".st"));
}

#[test]
fn error_unknown_card_type() {
    let err = Error::unknown_card_type("BOSS");
    assert!(matches!(err.kind, ErrorKind::UnknownCardType(_)));
    assert!(err.to_string().contains("BOSS"));
}

#[test]
fn error_io_and_serialization() {
    assert!(Error::io("disk full").to_string().contains("disk full"));
    assert!(Error::serialization("eof").to_string().contains("eof"));
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn only_structural_errors_are_format_errors() {
    assert!(Error::empty_input().is_format_error());
    assert!(Error::invalid_prefix("x").is_format_error());
    assert!(!Error::new(ErrorKind::UnknownCommand(":x".into())).is_format_error());
    assert!(!Error::new(ErrorKind::CardNotFound { index: 1, count: 0 }).is_format_error());
}

// =============================================================================
// Context
// =============================================================================

#[test]
fn context_is_optional() {
    assert!(Error::empty_input().context.is_none());
}

#[test]
fn context_carries_source_and_line() {
    let err = Error::invalid_prefix("x")
        .with_context(ErrorContext::new().with_source("cards.txt").with_line(12));
    let ctx = err.context.unwrap();
    assert_eq!(ctx.to_string(), "at cards.txt:12");
}

#[test]
fn error_implements_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&Error::empty_input());
}
