// fuzzy-pinyin Type Definitions
// Core types for tokens, match ranges and errors

use serde::Serialize;
use thiserror::Error;

/// One contiguous highlighted span of a label
///
/// Both ends are inclusive and counted in Unicode scalar values (`char`s)
/// of the original label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MatchRange {
    /// First highlighted character
    pub start: usize,

    /// Last highlighted character (inclusive)
    pub end: usize,
}

impl MatchRange {
    /// Create a new range covering `start..=end`
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Whether `offset` falls inside the range
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }
}

impl std::fmt::Display for MatchRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// Highlighted spans of a successful match, ascending and disjoint.
///
/// An empty vector still means "matched" (e.g. for an empty query).
pub type MatchResult = Vec<MatchRange>;

/// A segment of a label produced by the tokenizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Run of characters that are neither ASCII word characters nor ideographs
    /// Example: " ", "-", "（）"
    Literal(String),

    /// Maximal run of `[A-Za-z0-9_]`
    /// Example: "GitHub"
    AsciiWord(String),

    /// A single CJK ideograph, never merged with neighbours
    /// Example: '链'
    Ideograph(char),
}

impl Token {
    /// Length of the token in characters
    pub fn char_len(&self) -> usize {
        match self {
            Token::Literal(text) | Token::AsciiWord(text) => text.chars().count(),
            Token::Ideograph(_) => 1,
        }
    }

    /// Append the token's original text to `out`
    pub fn push_to(&self, out: &mut String) {
        match self {
            Token::Literal(text) | Token::AsciiWord(text) => out.push_str(text),
            Token::Ideograph(ch) => out.push(*ch),
        }
    }

    /// Characters of the token, in order
    pub fn chars(&self) -> Vec<char> {
        match self {
            Token::Literal(text) | Token::AsciiWord(text) => text.chars().collect(),
            Token::Ideograph(ch) => vec![*ch],
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Literal(text) => write!(f, "Literal({:?})", text),
            Token::AsciiWord(text) => write!(f, "AsciiWord({:?})", text),
            Token::Ideograph(ch) => write!(f, "Ideograph({:?})", ch),
        }
    }
}

/// Matcher construction errors
///
/// These never escape the public builders; they are logged and the
/// matcher degrades instead.
#[derive(Debug, Clone, Error)]
pub enum MatchError {
    #[error("sentence pattern of {pattern_len} bytes failed to compile: {source}")]
    Compile {
        pattern_len: usize,
        #[source]
        source: regex::Error,
    },

    #[error("invalid matcher configuration: {0}")]
    InvalidConfig(String),
}
