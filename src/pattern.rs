// fuzzy-pinyin Pattern Generator
// Converts tokens into subsequence-matching regex fragments

use crate::types::Token;

/// Escape a single character for use inside a regex
#[inline]
fn escape_char(ch: char) -> String {
    let mut buf = [0u8; 4];
    regex::escape(ch.encode_utf8(&mut buf))
}

/// Regex fragment for one token
///
/// Every fragment introduces exactly one capturing group, so capture group
/// `i + 1` of the sentence belongs to token `i`.
///
/// # Conversion Rules
/// - AsciiWord: nested optional groups, one per character, only the
///   outermost capturing; accepts every ordered subsequence of the word.
///   Nesting stops at [`MAX_WORD_NESTING`] and the tail is flat
/// - Ideograph: the escaped character, optional and capturing
/// - Literal: each character independently optional, one flat group
///
/// # Examples
/// ```
/// # use fuzzy_pinyin::pattern::pattern_for;
/// # use fuzzy_pinyin::types::Token;
/// assert_eq!(pattern_for(&Token::AsciiWord("abc".into())), "(a?(?:b?(?:c?)))");
/// assert_eq!(pattern_for(&Token::Ideograph('链')), "(链?)");
/// assert_eq!(pattern_for(&Token::Literal(" .".into())), r"( ?\.?)");
/// ```
pub fn pattern_for(token: &Token) -> String {
    match token {
        Token::AsciiWord(word) => {
            let chars: Vec<char> = word.chars().collect();
            pattern_for_word(&chars, 0)
        }
        Token::Ideograph(ch) => format!("({}?)", escape_char(*ch)),
        Token::Literal(text) => {
            let mut fragment = String::from("(");
            for ch in text.chars() {
                fragment.push_str(&escape_char(ch));
                fragment.push('?');
            }
            fragment.push(')');
            fragment
        }
    }
}

/// Deepest group nesting emitted for one word
///
/// `a?(?:b?c?)` accepts the same subsequences as `a?(?:b?(?:c?))`, so
/// characters past this depth are emitted flat inside the innermost group.
/// Keeps long identifiers well under the regex parser's nest limit.
pub const MAX_WORD_NESTING: usize = 32;

/// Recursive subsequence fragment: "this character, optionally, then the
/// fragment for the remaining suffix"
fn pattern_for_word(chars: &[char], depth: usize) -> String {
    let Some((first, rest)) = chars.split_first() else {
        return String::new();
    };

    let mut fragment = String::from(if depth == 0 { "(" } else { "(?:" });
    fragment.push_str(&escape_char(*first));
    fragment.push('?');
    if depth + 1 < MAX_WORD_NESTING {
        fragment.push_str(&pattern_for_word(rest, depth + 1));
    } else {
        for ch in rest {
            fragment.push_str(&escape_char(*ch));
            fragment.push('?');
        }
    }
    fragment.push(')');
    fragment
}

/// Concatenate token fragments into one anchored sentence pattern
///
/// # Examples
/// ```
/// # use fuzzy_pinyin::pattern::sentence_pattern;
/// # use fuzzy_pinyin::tokenizer::tokenize;
/// assert_eq!(sentence_pattern(&tokenize("a b")), "^(a?)( ?)(b?)$");
/// assert_eq!(sentence_pattern(&[]), "^$");
/// ```
pub fn sentence_pattern(tokens: &[Token]) -> String {
    let mut pattern = String::from("^");
    for token in tokens {
        pattern.push_str(&pattern_for(token));
    }
    pattern.push('$');
    pattern
}
