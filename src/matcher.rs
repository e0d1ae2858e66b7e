// fuzzy-pinyin Sentence Matcher
// Compiles a token sequence into one anchored regex and maps captures back to label ranges

use regex::{Regex, RegexBuilder};
use tracing::{trace, warn};

use crate::config::MatcherConfig;
use crate::pattern::sentence_pattern;
use crate::search::MatchStrategy;
use crate::tokenizer::tokenize;
use crate::types::{MatchError, MatchRange, MatchResult, Token};

/// Compiled state of a plain matcher
#[derive(Debug, Clone)]
enum MatcherState {
    /// Sentence regex plus the characters of every token, in order
    Compiled {
        regex: Regex,
        tokens: Vec<Vec<char>>,
    },

    /// Compilation failed; every query is rejected
    AlwaysNull,
}

/// Subsequence matcher over a single label
///
/// Capture group `i + 1` of the sentence regex belongs to token `i`.
/// Immutable once built, so it can be shared between threads.
#[derive(Debug, Clone)]
pub struct PlainMatcher {
    state: MatcherState,
}

impl PlainMatcher {
    /// Compile tokens into a matcher
    ///
    /// Never fails: a pattern that does not compile yields a matcher that
    /// rejects every query, and the failure is logged.
    ///
    /// # Example
    /// ```
    /// # use fuzzy_pinyin::matcher::PlainMatcher;
    /// # use fuzzy_pinyin::config::MatcherConfig;
    /// # use fuzzy_pinyin::tokenizer::tokenize;
    /// let matcher = PlainMatcher::compile(&tokenize("GitHub Desktop"), &MatcherConfig::default());
    /// let ranges = matcher.find("gd").unwrap();
    /// assert_eq!(ranges.len(), 2);
    /// ```
    pub fn compile(tokens: &[Token], config: &MatcherConfig) -> Self {
        match Self::try_compile(tokens, config) {
            Ok(matcher) => matcher,
            Err(err) => {
                warn!(error = %err, tokens = tokens.len(), "sentence matcher disabled");
                Self::always_null()
            }
        }
    }

    /// Compile tokens into a matcher, reporting compilation errors
    pub fn try_compile(tokens: &[Token], config: &MatcherConfig) -> Result<Self, MatchError> {
        let pattern = sentence_pattern(tokens);
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .size_limit(config.size_limit)
            .nest_limit(config.nest_limit)
            .build()
            .map_err(|source| MatchError::Compile {
                pattern_len: pattern.len(),
                source,
            })?;

        trace!(
            pattern_len = pattern.len(),
            groups = regex.captures_len(),
            "compiled sentence pattern"
        );

        Ok(Self {
            state: MatcherState::Compiled {
                regex,
                tokens: tokens.iter().map(Token::chars).collect(),
            },
        })
    }

    /// Tokenize and compile a label
    pub fn for_label(label: &str, config: &MatcherConfig) -> Self {
        Self::compile(&tokenize(label), config)
    }

    /// A matcher that rejects every query
    pub fn always_null() -> Self {
        Self {
            state: MatcherState::AlwaysNull,
        }
    }

    /// Whether compilation succeeded
    pub fn is_compiled(&self) -> bool {
        matches!(self.state, MatcherState::Compiled { .. })
    }

    /// Match a query against the label
    ///
    /// # Returns
    /// - `None` if the query is not an ordered subsequence of the label
    /// - `Some(ranges)` with the highlighted label spans otherwise
    pub fn find(&self, query: &str) -> Option<MatchResult> {
        let MatcherState::Compiled { regex, tokens } = &self.state else {
            return None;
        };

        let captures = regex.captures(query)?;

        let mut ranges = Vec::new();
        let mut offset = 0;
        for (index, token) in tokens.iter().enumerate() {
            if let Some(group) = captures.get(index + 1) {
                if !group.as_str().is_empty() {
                    align_token(token, group.as_str(), offset, &mut ranges);
                }
            }
            offset += token.len();
        }

        Some(ranges)
    }
}

impl MatchStrategy for PlainMatcher {
    fn find(&self, query: &str) -> Option<MatchResult> {
        PlainMatcher::find(self, query)
    }
}

/// Case-insensitive character comparison consistent with the regex's
/// simple case folding
#[inline]
pub(crate) fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase()) || a.to_uppercase().eq(b.to_uppercase())
}

/// Locate the matched slice inside its token and push the covered ranges
///
/// The slice is aligned greedily from the left; consecutive positions in
/// the token collapse into one range. Ranges never span two tokens.
fn align_token(token: &[char], matched: &str, offset: usize, ranges: &mut Vec<MatchRange>) {
    let mut run: Option<MatchRange> = None;
    let mut cursor = 0;

    let matched_len = matched.chars().count();
    for (consumed, query_char) in matched.chars().enumerate() {
        let Some(found) = token[cursor..]
            .iter()
            .position(|&label_char| chars_eq_ignore_case(label_char, query_char))
        else {
            // The regex accepted a fold we do not reproduce; highlight the
            // rest of the slice contiguously.
            if cursor < token.len() {
                let last = (cursor + matched_len - consumed).min(token.len()) - 1;
                push_position_range(
                    &mut run,
                    ranges,
                    MatchRange::new(offset + cursor, offset + last),
                );
            }
            break;
        };

        let position = offset + cursor + found;
        cursor += found + 1;
        push_position_range(&mut run, ranges, MatchRange::new(position, position));
    }

    if let Some(range) = run {
        ranges.push(range);
    }
}

/// Extend the open run if `next` continues it, otherwise close it
fn push_position_range(
    run: &mut Option<MatchRange>,
    ranges: &mut Vec<MatchRange>,
    next: MatchRange,
) {
    if let Some(open) = run.as_mut() {
        if open.end + 1 == next.start {
            open.end = next.end;
            return;
        }
        ranges.push(*open);
    }
    *run = Some(next);
}
