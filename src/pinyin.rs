// fuzzy-pinyin Transliterator
// Converts ideograph runs into toneless pinyin and tracks where every output character came from

use ::pinyin::ToPinyin;
use tracing::debug;

use crate::tokenizer::is_ideograph;
use crate::types::MatchRange;

/// Maps each character of a transliteration back to a label offset
///
/// Entry `i` is the offset (in chars) of the label character that produced
/// transliterated character `i`.
pub type PinyinIndexMap = Vec<usize>;

/// A label rewritten with pinyin syllables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transliteration {
    /// Label text with every readable ideograph replaced by its syllable
    pub text: String,

    /// One entry per character of `text`
    pub index_map: PinyinIndexMap,
}

impl Transliteration {
    /// Whether any ideograph was actually rewritten
    pub fn is_rewritten(&self, label: &str) -> bool {
        self.text != label
    }

    /// Map a range of the transliteration back onto the label
    ///
    /// Offsets outside the map are kept as they are.
    pub fn map_range(&self, range: MatchRange) -> MatchRange {
        let start = self.index_map.get(range.start).copied().unwrap_or(range.start);
        let end = self.index_map.get(range.end).copied().unwrap_or(range.end);
        MatchRange::new(start, end)
    }
}

/// Toneless pinyin syllable for an ideograph
///
/// `ü` is written as `v`, the usual keyboard spelling. Returns `None` for
/// characters without a reading; callers pass those through unchanged.
///
/// # Examples
/// ```
/// # use fuzzy_pinyin::pinyin::syllable;
/// assert_eq!(syllable('链').as_deref(), Some("lian"));
/// assert_eq!(syllable('a'), None);
/// ```
pub fn syllable(ch: char) -> Option<String> {
    if !is_ideograph(ch) {
        return None;
    }
    match ch.to_pinyin() {
        Some(reading) => Some(reading.plain().replace('ü', "v")),
        None => {
            debug!(character = %ch, "no pinyin reading, passing through");
            None
        }
    }
}

/// Transliterate a label into pinyin
///
/// Non-ideographs pass through and map to themselves. Adjacent syllables
/// are separated by `delimiter`, which maps to the same label character as
/// the syllable before it.
///
/// # Examples
/// ```
/// # use fuzzy_pinyin::pinyin::transliterate;
/// let result = transliterate("链接", '`');
/// assert_eq!(result.text, "lian`jie");
/// assert_eq!(result.index_map, vec![0, 0, 0, 0, 0, 1, 1, 1]);
/// ```
pub fn transliterate(label: &str, delimiter: char) -> Transliteration {
    let mut text = String::with_capacity(label.len() * 2);
    let mut index_map = Vec::with_capacity(label.len() * 2);
    let mut previous_syllable: Option<usize> = None;

    for (offset, ch) in label.chars().enumerate() {
        match syllable(ch) {
            Some(reading) => {
                if let Some(previous) = previous_syllable {
                    text.push(delimiter);
                    index_map.push(previous);
                }
                for letter in reading.chars() {
                    text.push(letter);
                    index_map.push(offset);
                }
                previous_syllable = Some(offset);
            }
            None => {
                text.push(ch);
                index_map.push(offset);
                previous_syllable = None;
            }
        }
    }

    Transliteration { text, index_map }
}
