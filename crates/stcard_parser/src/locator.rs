//! Keyword-driven field lookup over a token stream.
//!
//! Two retrieval modes share one scanning core:
//!
//! - **Scalar**: the single token after the keyword (stat values, codes).
//! - **Span**: every token after the keyword up to the next field, for names
//!   that may contain spaces.
//!
//! Only the first occurrence of a keyword is ever consulted.

use tracing::trace;

use crate::tokenizer::TokenStream;
use crate::vocabulary::is_boundary;

/// How much of the text after a keyword belongs to its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupMode {
    /// Exactly one token.
    Scalar,
    /// Tokens up to the next boundary prefix.
    Span,
}

/// Looks up field values in a token stream.
#[derive(Clone, Copy, Debug)]
pub struct FieldLocator<'a> {
    tokens: &'a TokenStream,
}

impl<'a> FieldLocator<'a> {
    /// Creates a locator over `tokens`.
    #[must_use]
    pub const fn new(tokens: &'a TokenStream) -> Self {
        Self { tokens }
    }

    /// The underlying tokens.
    #[must_use]
    pub const fn tokens(&self) -> &'a TokenStream {
        self.tokens
    }

    /// Looks up `keyword` in the given mode.
    #[must_use]
    pub fn lookup(&self, keyword: &str, mode: LookupMode) -> Option<String> {
        match mode {
            LookupMode::Scalar => self.scalar(keyword).map(str::to_string),
            LookupMode::Span => self.span(keyword),
        }
    }

    /// Returns the token right after the first `keyword`, verbatim.
    ///
    /// `None` if the keyword is absent or is the last token.
    #[must_use]
    pub fn scalar(&self, keyword: &str) -> Option<&'a str> {
        let start = self.value_start(keyword)?;
        self.tokens.get(start)
    }

    /// Collects the multi-token value after the first `keyword`.
    ///
    /// Scanning stops before a token that starts a new field, or right after
    /// a token whose successor starts one. Returns `None` when the keyword is
    /// missing, is the last token, or is immediately followed by another field.
    #[must_use]
    pub fn span(&self, keyword: &str) -> Option<String> {
        let start = self.value_start(keyword)?;
        let mut parts: Vec<&str> = Vec::new();

        for i in start..self.tokens.len() {
            let current = &self.tokens[i];
            if is_boundary(current) {
                break;
            }
            parts.push(current);
            if self.tokens.get(i + 1).is_some_and(is_boundary) {
                break;
            }
        }

        if parts.is_empty() {
            trace!(keyword, "keyword has no value before the next field");
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// Index of the first value token for `keyword`.
    fn value_start(&self, keyword: &str) -> Option<usize> {
        let Some(index) = self.tokens.position(keyword) else {
            trace!(keyword, "keyword not found");
            return None;
        };
        if index + 1 >= self.tokens.len() {
            trace!(keyword, "keyword is the last token");
            return None;
        }
        Some(index + 1)
    }
}
