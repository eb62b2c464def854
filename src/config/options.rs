//! Options for building matrices from delimited text.
//!
//! This module provides the `Delimiter` type, a compiled regular expression
//! that says how a text blob is cut into number tokens, and the
//! `ParseOptions` struct that carries it into
//! [`from_text_with`](crate::DenseMatrix::from_text_with).

use crate::error::{MatError, Result};
use regex::Regex;
use std::str::FromStr;

/// Token separator, given as a regular expression such as `\s+` or `,\s*`.
#[derive(Clone, Debug)]
pub struct Delimiter {
    regex: Regex,
}

impl Delimiter {
    /// Compile `pattern`; a malformed pattern is an `InvalidPattern` error.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| MatError::InvalidPattern(format!("{pattern:?}: {e}")))?;
        Ok(Delimiter { regex })
    }

    /// The source pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Split `text` into tokens.
    ///
    /// Empty interior tokens are kept and trailing empty tokens are dropped,
    /// so text made only of separators yields no tokens. A separator matching
    /// at the very start leaves an empty leading token, unless the match is
    /// empty.
    pub fn tokens<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut tokens: Vec<&'a str> = self.regex.split(text).collect();
        let leading_empty_match = self
            .regex
            .find(text)
            .is_some_and(|m| m.start() == 0 && m.is_empty());
        if leading_empty_match && tokens.len() > 1 {
            tokens.remove(0);
        }
        while tokens.last().is_some_and(|t| t.is_empty()) {
            tokens.pop();
        }
        tokens
    }
}

impl PartialEq for Delimiter {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Delimiter {}

impl FromStr for Delimiter {
    type Err = MatError;

    fn from_str(pattern: &str) -> Result<Self> {
        Delimiter::new(pattern)
    }
}

/// Text-parsing options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Token separator
    pub delimiter: Delimiter,
}

impl ParseOptions {
    pub fn new(delimiter: Delimiter) -> Self {
        ParseOptions { delimiter }
    }

    /// Options splitting on the regular expression `pattern`.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(ParseOptions::new(pattern.parse()?))
    }
}
