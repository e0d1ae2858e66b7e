//! # fuzzy-pinyin: Subsequence and Pinyin Label Matching
//!
//! Compiles a display label (ASCII words, punctuation, Chinese ideographs)
//! into a reusable matcher that decides whether a query is an ordered,
//! possibly discontinuous subsequence of the label or of its toneless
//! pinyin, and reports which label characters to highlight.
//!
//! ## Two Builders
//!
//! 1. **Plain** - `build_plain_matcher(label)`: subsequence matching only
//!    - `"GitHub Desktop"` matches `"gd"`, `"hub"`, `"gitdesk"`
//! 2. **Pinyin-aware** - `build_matcher(label)`: tries the pinyin
//!    transliteration first, then falls back to plain matching
//!    - `"链接"` matches `"lj"`, `"lianjie"` and `"链"`
//!
//! ## Example Usage
//!
//! ```
//! use fuzzy_pinyin::{build_matcher, MatchRange};
//!
//! let matcher = build_matcher("设置-Settings");
//!
//! // Compile once, query many times
//! assert_eq!(
//!     matcher.find("szs"),
//!     Some(vec![MatchRange::new(0, 0), MatchRange::new(1, 1), MatchRange::new(3, 3)])
//! );
//! assert_eq!(matcher.find(""), Some(vec![]));
//! assert_eq!(matcher.find("xyz"), None);
//! ```
//!
//! ## Architecture
//!
//! - **Tokenizer** - Splits labels into literal, word and ideograph tokens
//! - **Pattern Generator** - Turns each token into a subsequence regex fragment
//! - **Sentence Matcher** - One anchored regex per label, captures mapped back to ranges
//! - **Transliterator** - Pinyin text plus an index map to label offsets
//! - **Composite Matcher** - Ordered strategies, first match wins; plus a per-label cache
//!
//! Offsets are counted in Unicode scalar values. Matchers are immutable
//! and `Send + Sync`.

pub mod config;
pub mod highlight;
pub mod matcher;
pub mod pattern;
pub mod pinyin;
pub mod search;
pub mod tokenizer;
pub mod types;

// Re-export main types and functions for convenience
pub use config::MatcherConfig;
pub use highlight::{mark, segments, Segment};
pub use matcher::PlainMatcher;
pub use crate::pinyin::{transliterate, PinyinIndexMap, Transliteration};
pub use search::{CompiledMatcher, LabelMatch, MatchStrategy, MatcherCache, PinyinStrategy};
pub use tokenizer::tokenize;
pub use types::{MatchError, MatchRange, MatchResult, Token};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compile a subsequence-only matcher for `label`
pub fn build_plain_matcher(label: &str) -> CompiledMatcher {
    CompiledMatcher::plain(label, &MatcherConfig::default())
}

/// Compile a pinyin-aware matcher for `label`
pub fn build_matcher(label: &str) -> CompiledMatcher {
    CompiledMatcher::new(label, &MatcherConfig::default())
}

/// Compile a subsequence-only matcher with explicit settings
pub fn build_plain_matcher_with(label: &str, config: &MatcherConfig) -> CompiledMatcher {
    CompiledMatcher::plain(label, config)
}

/// Compile a pinyin-aware matcher with explicit settings
pub fn build_matcher_with(label: &str, config: &MatcherConfig) -> CompiledMatcher {
    CompiledMatcher::new(label, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_plain_builder_ignores_pinyin() {
        assert_eq!(build_plain_matcher("链接").find("lj"), None);
        assert!(build_matcher("链接").is_match("lj"));
    }
}
