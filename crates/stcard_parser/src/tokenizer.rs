//! Input tokenization.
//!
//! Converts raw card text into a stream of whitespace-separated tokens.

use std::ops::Index;

/// Returns true for characters that separate tokens.
///
/// Unicode whitespace plus U+FEFF, which editors prepend to UTF-8 files as a
/// byte-order mark.
#[must_use]
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// An immutable, ordered sequence of non-empty tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<String>,
}

impl TokenStream {
    /// Returns the number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if there are no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the token at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Index of the first token exactly equal to `keyword`.
    #[must_use]
    pub fn position(&self, keyword: &str) -> Option<usize> {
        self.tokens.iter().position(|t| t == keyword)
    }

    /// Returns true if some token is exactly `keyword`.
    #[must_use]
    pub fn contains(&self, keyword: &str) -> bool {
        self.position(keyword).is_some()
    }

    /// Iterates over the tokens.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// The tokens as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    /// Re-joins the tokens with single spaces.
    #[must_use]
    pub fn joined(&self) -> String {
        self.tokens.join(" ")
    }
}

impl Index<usize> for TokenStream {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.tokens[index]
    }
}

impl<S: Into<String>> FromIterator<S> for TokenStream {
    /// Collects tokens, dropping empty ones.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter
                .into_iter()
                .map(Into::into)
                .filter(|t: &String| !t.is_empty())
                .collect(),
        }
    }
}

/// Tokenizes card text.
pub struct CardTokenizer;

impl CardTokenizer {
    /// Tokenizes a raw input string.
    ///
    /// Any run of whitespace (spaces, tabs, newlines, full-width spaces) or
    /// byte-order marks separates tokens; leading and trailing whitespace is dropped. Tokens
    /// are kept verbatim, including punctuation.
    #[must_use]
    pub fn tokenize(input: &str) -> TokenStream {
        input.split(is_separator).collect()
    }
}
