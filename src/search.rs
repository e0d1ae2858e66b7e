// fuzzy-pinyin Composite Matcher
// Orchestrates pinyin and plain strategies and caches compiled matchers per label

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::config::MatcherConfig;
use crate::matcher::PlainMatcher;
use crate::pinyin::{transliterate, Transliteration};
use crate::tokenizer::{contains_ideograph, tokenize};
use crate::types::{MatchRange, MatchResult};

/// One way of matching a query against a compiled label
///
/// Strategies are pure: the same query always gives the same answer.
pub trait MatchStrategy: Send + Sync {
    /// `None` when the query does not match, highlighted ranges otherwise
    fn find(&self, query: &str) -> Option<MatchResult>;
}

/// Subsequence matching over the pinyin transliteration of a label
///
/// Ranges are reported in label coordinates.
#[derive(Debug, Clone)]
pub struct PinyinStrategy {
    matcher: PlainMatcher,
    transliteration: Transliteration,
}

impl PinyinStrategy {
    /// Compile a strategy from an existing transliteration
    pub fn new(transliteration: Transliteration, config: &MatcherConfig) -> Self {
        let matcher = PlainMatcher::compile(&tokenize(&transliteration.text), config);
        Self {
            matcher,
            transliteration,
        }
    }

    /// The transliterated text this strategy matches against
    pub fn text(&self) -> &str {
        &self.transliteration.text
    }
}

impl MatchStrategy for PinyinStrategy {
    fn find(&self, query: &str) -> Option<MatchResult> {
        let ranges = self.matcher.find(query)?;
        Some(remap_ranges(&self.transliteration, &ranges))
    }
}

/// Map transliteration ranges onto the label, merging ranges that land on
/// the same characters
fn remap_ranges(transliteration: &Transliteration, ranges: &[MatchRange]) -> MatchResult {
    let mut out: MatchResult = Vec::with_capacity(ranges.len());
    for range in ranges {
        let mapped = transliteration.map_range(*range);
        match out.last_mut() {
            Some(last) if mapped.start <= last.end => last.end = last.end.max(mapped.end),
            _ => out.push(mapped),
        }
    }
    out
}

/// A label compiled for repeated querying
///
/// Holds an ordered list of strategies; the first one that matches wins.
/// Compile once per label, then call [`CompiledMatcher::find`] per query.
pub struct CompiledMatcher {
    strategies: Vec<Box<dyn MatchStrategy>>,
}

impl CompiledMatcher {
    /// Build a matcher from explicit strategies
    pub fn from_strategies(strategies: Vec<Box<dyn MatchStrategy>>) -> Self {
        Self { strategies }
    }

    /// Subsequence-only matcher, no phonetic awareness
    pub fn plain(label: &str, config: &MatcherConfig) -> Self {
        Self::from_strategies(vec![Box::new(PlainMatcher::for_label(label, config))])
    }

    /// Pinyin-aware matcher
    ///
    /// Labels without ideographs (or configs with pinyin disabled) compile
    /// to the plain matcher alone. Otherwise the pinyin strategy is tried
    /// first and the plain matcher over the original label second.
    pub fn new(label: &str, config: &MatcherConfig) -> Self {
        let config = config.sanitized();
        if !config.pinyin || !contains_ideograph(label) {
            return Self::plain(label, &config);
        }

        let transliteration = transliterate(label, config.syllable_delimiter);
        if !transliteration.is_rewritten(label) {
            return Self::plain(label, &config);
        }

        Self::from_strategies(vec![
            Box::new(PinyinStrategy::new(transliteration, &config)),
            Box::new(PlainMatcher::for_label(label, &config)),
        ])
    }

    /// Match a query
    ///
    /// # Returns
    /// - `None`: exclude this label
    /// - `Some(ranges)`: include it and highlight `ranges` (possibly none)
    pub fn find(&self, query: &str) -> Option<MatchResult> {
        self.strategies
            .iter()
            .find_map(|strategy| strategy.find(query))
    }

    /// Whether the query matches at all
    pub fn is_match(&self, query: &str) -> bool {
        self.find(query).is_some()
    }

    /// Number of strategies tried per query
    pub fn strategy_count(&self) -> usize {
        self.strategies.len()
    }
}

impl MatchStrategy for CompiledMatcher {
    fn find(&self, query: &str) -> Option<MatchResult> {
        CompiledMatcher::find(self, query)
    }
}

impl std::fmt::Debug for CompiledMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledMatcher")
            .field("strategies", &self.strategies.len())
            .finish()
    }
}

/// A label accepted by [`MatcherCache::filter`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelMatch {
    /// Position of the label in the input sequence
    pub index: usize,

    /// The label itself
    pub label: String,

    /// Highlighted spans
    pub ranges: MatchResult,
}

/// Compiled matchers keyed by label text
///
/// Compilation is the expensive step; the cache makes per-keystroke
/// querying cost one regex execution per label.
///
/// Entries are never evicted on their own. Hosts with a changing label
/// set should call [`MatcherCache::clear`] when it is replaced.
#[derive(Debug, Default)]
pub struct MatcherCache {
    config: MatcherConfig,
    entries: FxHashMap<String, Arc<CompiledMatcher>>,
}

impl MatcherCache {
    /// Create an empty cache
    pub fn new(config: MatcherConfig) -> Self {
        Self {
            config,
            entries: FxHashMap::default(),
        }
    }

    /// Settings used for every compiled matcher
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Return the compiled matcher for `label`, compiling it on first use
    pub fn get_or_compile(&mut self, label: &str) -> Arc<CompiledMatcher> {
        if let Some(matcher) = self.entries.get(label) {
            return Arc::clone(matcher);
        }
        let matcher = Arc::new(CompiledMatcher::new(label, &self.config));
        self.entries.insert(label.to_string(), Arc::clone(&matcher));
        matcher
    }

    /// Match `query` against `label` using the cached matcher
    pub fn find(&mut self, label: &str, query: &str) -> Option<MatchResult> {
        self.get_or_compile(label).find(query)
    }

    /// Keep the labels that match `query`, in input order
    ///
    /// # Example
    /// ```
    /// # use fuzzy_pinyin::search::MatcherCache;
    /// # use fuzzy_pinyin::config::MatcherConfig;
    /// let mut cache = MatcherCache::new(MatcherConfig::default());
    /// let hits = cache.filter(["GitHub Desktop", "链接", "Settings"], "lj");
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].label, "链接");
    /// ```
    pub fn filter<'a, I>(&mut self, labels: I, query: &str) -> Vec<LabelMatch>
    where
        I: IntoIterator<Item = &'a str>,
    {
        labels
            .into_iter()
            .enumerate()
            .filter_map(|(index, label)| {
                self.find(label, query).map(|ranges| LabelMatch {
                    index,
                    label: label.to_string(),
                    ranges,
                })
            })
            .collect()
    }

    /// Number of compiled labels
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been compiled yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every compiled matcher
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
