// fuzzy-pinyin Tokenizer
// Splits a label into literal, ASCII word and ideograph tokens

use crate::types::Token;

/// Character classes seen by the tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Word,
    Ideograph,
    Other,
}

#[inline]
fn classify(ch: char) -> CharClass {
    if is_word_char(ch) {
        CharClass::Word
    } else if is_ideograph(ch) {
        CharClass::Ideograph
    } else {
        CharClass::Other
    }
}

/// ASCII word character: `[A-Za-z0-9_]`
#[inline]
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Check if a character is a CJK ideograph
///
/// Covers the unified block, extension A, the compatibility block and
/// extensions B through F.
#[inline]
pub fn is_ideograph(ch: char) -> bool {
    matches!(
        ch,
        '\u{4E00}'..='\u{9FFF}'
            | '\u{3400}'..='\u{4DBF}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{20000}'..='\u{2EBEF}'
    )
}

/// Whether the label contains at least one ideograph
pub fn contains_ideograph(label: &str) -> bool {
    label.chars().any(is_ideograph)
}

/// Split a label into tokens
///
/// Consecutive ASCII word characters form one `AsciiWord`, every ideograph
/// is its own `Ideograph`, and everything else is coalesced into `Literal`
/// runs. Concatenating the tokens gives back the label.
///
/// # Examples
/// ```
/// # use fuzzy_pinyin::tokenizer::tokenize;
/// # use fuzzy_pinyin::types::Token;
/// let tokens = tokenize("设置-Settings");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Ideograph('设'),
///         Token::Ideograph('置'),
///         Token::Literal("-".to_string()),
///         Token::AsciiWord("Settings".to_string()),
///     ]
/// );
/// ```
pub fn tokenize(label: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut run = String::new();
    let mut run_class = CharClass::Other;

    for ch in label.chars() {
        let class = classify(ch);

        if class == CharClass::Ideograph {
            flush(&mut tokens, &mut run, run_class);
            tokens.push(Token::Ideograph(ch));
            continue;
        }

        if class != run_class {
            flush(&mut tokens, &mut run, run_class);
            run_class = class;
        }
        run.push(ch);
    }

    flush(&mut tokens, &mut run, run_class);
    tokens
}

/// Emit the pending run (if any) as a token
fn flush(tokens: &mut Vec<Token>, run: &mut String, class: CharClass) {
    if run.is_empty() {
        return;
    }
    let text = std::mem::take(run);
    match class {
        CharClass::Word => tokens.push(Token::AsciiWord(text)),
        _ => tokens.push(Token::Literal(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Token {
        Token::AsciiWord(s.to_string())
    }

    fn lit(s: &str) -> Token {
        Token::Literal(s.to_string())
    }

    #[test]
    fn test_empty_label() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_words_and_spaces() {
        assert_eq!(
            tokenize("GitHub Desktop"),
            vec![word("GitHub"), lit(" "), word("Desktop")]
        );
    }

    #[test]
    fn test_ideographs_are_never_merged() {
        assert_eq!(
            tokenize("链接"),
            vec![Token::Ideograph('链'), Token::Ideograph('接')]
        );
    }

    #[test]
    fn test_literal_runs_coalesce() {
        assert_eq!(
            tokenize("a -- b"),
            vec![word("a"), lit(" -- "), word("b")]
        );
    }

    #[test]
    fn test_underscore_and_digits_are_word_chars() {
        assert_eq!(tokenize("foo_bar2.txt"), vec![word("foo_bar2"), lit("."), word("txt")]);
    }

    #[test]
    fn test_fullwidth_punctuation_is_literal() {
        assert_eq!(
            tokenize("你好，世界"),
            vec![
                Token::Ideograph('你'),
                Token::Ideograph('好'),
                lit("，"),
                Token::Ideograph('世'),
                Token::Ideograph('界'),
            ]
        );
    }

    #[test]
    fn test_non_ascii_letters_are_literal() {
        assert_eq!(tokenize("café"), vec![word("caf"), lit("é")]);
    }

    #[test]
    fn test_reconstruction() {
        for label in ["", "GitHub Desktop", "设置-Settings", "a𠀀b", "  x  ", "链接 (Link) #2"] {
            let mut rebuilt = String::new();
            for token in tokenize(label) {
                token.push_to(&mut rebuilt);
            }
            assert_eq!(rebuilt, label);
        }
    }

    #[test]
    fn test_extension_b_is_ideograph() {
        assert!(is_ideograph('𠀀'));
        assert!(is_ideograph('㐀'));
        assert!(!is_ideograph('a'));
        assert!(!is_ideograph('，'));
    }

    #[test]
    fn test_contains_ideograph() {
        assert!(contains_ideograph("设置-Settings"));
        assert!(!contains_ideograph("Settings"));
    }
}
