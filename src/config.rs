// fuzzy-pinyin Configuration
// Knobs for matcher compilation

use serde::Deserialize;

use crate::tokenizer::{is_ideograph, is_word_char};
use crate::types::MatchError;

/// Default separator placed between adjacent pinyin syllables
pub const DEFAULT_SYLLABLE_DELIMITER: char = '`';

/// Default compiled-program budget for one sentence regex (1 MiB)
pub const DEFAULT_SIZE_LIMIT: usize = 1 << 20;

/// Default parser nesting budget; mirrors the regex crate's own default
pub const DEFAULT_NEST_LIMIT: u32 = 250;

/// Matcher compilation settings
///
/// # Example
/// ```
/// # use fuzzy_pinyin::config::MatcherConfig;
/// let config = MatcherConfig::default().with_pinyin(false).with_nest_limit(64);
/// assert!(!config.pinyin);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Try the pinyin transliteration before plain matching
    pub pinyin: bool,

    /// Separator between adjacent syllables of a transliterated run
    pub syllable_delimiter: char,

    /// Upper bound on the compiled size of a sentence regex, in bytes
    pub size_limit: usize,

    /// Upper bound on group nesting while parsing a sentence regex
    pub nest_limit: u32,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            pinyin: true,
            syllable_delimiter: DEFAULT_SYLLABLE_DELIMITER,
            size_limit: DEFAULT_SIZE_LIMIT,
            nest_limit: DEFAULT_NEST_LIMIT,
        }
    }
}

impl MatcherConfig {
    /// Enable or disable the pinyin strategy
    pub fn with_pinyin(mut self, enabled: bool) -> Self {
        self.pinyin = enabled;
        self
    }

    /// Set the syllable delimiter
    pub fn with_syllable_delimiter(mut self, delimiter: char) -> Self {
        self.syllable_delimiter = delimiter;
        self
    }

    /// Set the compiled regex size budget
    pub fn with_size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = bytes;
        self
    }

    /// Set the regex nesting budget
    pub fn with_nest_limit(mut self, depth: u32) -> Self {
        self.nest_limit = depth;
        self
    }

    /// Check that the delimiter cannot merge with neighbouring syllables
    pub fn validate(&self) -> Result<(), MatchError> {
        let delimiter = self.syllable_delimiter;
        if is_word_char(delimiter) || is_ideograph(delimiter) {
            return Err(MatchError::InvalidConfig(format!(
                "syllable delimiter {:?} must not be a word character or ideograph",
                delimiter
            )));
        }
        Ok(())
    }

    /// Return a config that is safe to compile with
    ///
    /// An invalid delimiter is replaced by the default one.
    pub(crate) fn sanitized(&self) -> MatcherConfig {
        match self.validate() {
            Ok(()) => self.clone(),
            Err(err) => {
                tracing::debug!(error = %err, "falling back to default syllable delimiter");
                self.clone()
                    .with_syllable_delimiter(DEFAULT_SYLLABLE_DELIMITER)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatcherConfig::default();
        assert!(config.pinyin);
        assert_eq!(config.syllable_delimiter, '`');
        assert_eq!(config.nest_limit, 250);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_word_delimiter_rejected() {
        let config = MatcherConfig::default().with_syllable_delimiter('x');
        assert!(matches!(
            config.validate(),
            Err(MatchError::InvalidConfig(_))
        ));
        assert_eq!(config.sanitized().syllable_delimiter, '`');
    }

    #[test]
    fn test_ideograph_delimiter_rejected() {
        let config = MatcherConfig::default().with_syllable_delimiter('一');
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_custom_delimiter_kept() {
        let config = MatcherConfig::default().with_syllable_delimiter(' ');
        assert_eq!(config.sanitized().syllable_delimiter, ' ');
    }

    #[test]
    fn test_deserialize_partial() {
        let config: MatcherConfig =
            serde_json::from_str(r#"{"pinyin": false, "syllable_delimiter": "'"}"#).unwrap();
        assert!(!config.pinyin);
        assert_eq!(config.syllable_delimiter, '\'');
        assert_eq!(config.size_limit, DEFAULT_SIZE_LIMIT);
    }
}
