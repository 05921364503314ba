//! Error types for stcard.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// The main error type for stcard operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an empty input error.
    #[must_use]
    pub fn empty_input() -> Self {
        Self::new(ErrorKind::EmptyInput)
    }

    /// Creates an invalid prefix error from the offending (trimmed) text.
    ///
    /// Only the first token is kept so the message stays short.
    #[must_use]
    pub fn invalid_prefix(text: &str) -> Self {
        let found = text.split_whitespace().next().unwrap_or_default();
        Self::new(ErrorKind::InvalidPrefix {
            found: found.to_string(),
        })
    }

    /// Creates an unknown card type error.
    #[must_use]
    pub fn unknown_card_type(tag: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownCardType(tag.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Returns true if this is one of the two structural card format errors.
    #[must_use]
    pub const fn is_format_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::EmptyInput | ErrorKind::InvalidPrefix { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Card text was empty or whitespace-only.
    #[error("card text is empty")]
    EmptyInput,

    /// Trimmed card text does not start with the `.st` marker.
    #[error("card text must start with `.st` (found `{found}`)")]
    InvalidPrefix {
        /// The first token of the rejected text.
        found: String,
    },

    /// A card type tag outside the closed servant/master set.
    #[error("unknown card type: {0}")]
    UnknownCardType(String),

    /// REPL command that does not exist.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// REPL command argument that could not be used.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Roster index out of range.
    #[error("no card at index {index} ({count} loaded)")]
    CardNotFound {
        /// The requested index.
        index: usize,
        /// How many cards are loaded.
        count: usize,
    },

    /// File system or terminal failure.
    #[error("i/o error: {0}")]
    Io(String),

    /// JSON encoding or decoding failure.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or other input name.
    pub source: Option<String>,
    /// Line number in source (1-indexed).
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, self.line) {
            (Some(source), Some(line)) => write!(f, "at {source}:{line}"),
            (Some(source), None) => write!(f, "at {source}"),
            (None, Some(line)) => write!(f, "at line {line}"),
            (None, None) => Ok(()),
        }
    }
}

/// Result type alias using stcard's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
