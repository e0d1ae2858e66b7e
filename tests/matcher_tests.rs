// Integration tests for the plain subsequence matcher

use fuzzy_pinyin::{build_plain_matcher, build_plain_matcher_with, MatchRange, MatcherConfig};

fn r(start: usize, end: usize) -> MatchRange {
    MatchRange::new(start, end)
}

/// Characters of `label` covered by `ranges`, in order
fn highlighted(label: &str, ranges: &[MatchRange]) -> String {
    let chars: Vec<char> = label.chars().collect();
    ranges
        .iter()
        .flat_map(|range| chars[range.start..=range.end].iter())
        .collect()
}

fn assert_ascending_disjoint(ranges: &[MatchRange]) {
    for range in ranges {
        assert!(range.start <= range.end, "inverted range {}", range);
    }
    for pair in ranges.windows(2) {
        assert!(
            pair[0].end < pair[1].start,
            "ranges overlap or are out of order: {} then {}",
            pair[0],
            pair[1]
        );
    }
}

// ============ Documented Examples ============

#[test]
fn test_word_initials() {
    let matcher = build_plain_matcher("GitHub Desktop");
    assert_eq!(matcher.find("gd"), Some(vec![r(0, 0), r(7, 7)]));
}

#[test]
fn test_ascii_subsequence_across_words() {
    let matcher = build_plain_matcher("Hello World");
    let ranges = matcher.find("hlowrld").expect("letters appear in order");
    assert_eq!(highlighted("Hello World", &ranges), "HloWrld");
}

#[test]
fn test_out_of_order_is_rejected() {
    assert_eq!(build_plain_matcher("Hello World").find("wolrd"), None);
}

#[test]
fn test_negative_case() {
    assert_eq!(build_plain_matcher("abc").find("xyz"), None);
}

#[test]
fn test_query_longer_than_label() {
    assert_eq!(build_plain_matcher("ab").find("abc"), None);
}

#[test]
fn test_repeated_letters_need_repeated_label_letters() {
    let matcher = build_plain_matcher("Hello");
    assert!(matcher.find("ll").is_some());
    assert!(matcher.find("lll").is_none());
}

// ============ Properties ============

const LABELS: &[&str] = &[
    "",
    "GitHub Desktop",
    "Hello World",
    "Visual Studio Code",
    "foo_bar-baz.qux",
    "a  b  c",
    "链接 Link",
    "🚀 Launch",
];

#[test]
fn test_empty_query_always_matches_without_highlights() {
    for label in LABELS {
        assert_eq!(build_plain_matcher(label).find(""), Some(vec![]), "{:?}", label);
    }
}

#[test]
fn test_highlights_spell_the_query() {
    let cases = [
        ("GitHub Desktop", "ghd"),
        ("GitHub Desktop", "hubtop"),
        ("Visual Studio Code", "vsc"),
        ("Visual Studio Code", "VS CODE"),
        ("foo_bar-baz.qux", "fb-z.q"),
        ("a  b  c", "a b"),
        ("链接 Link", "链 l"),
        ("🚀 Launch", "🚀lh"),
    ];
    for (label, query) in cases {
        let ranges = build_plain_matcher(label)
            .find(query)
            .unwrap_or_else(|| panic!("{:?} should match {:?}", query, label));
        assert_ascending_disjoint(&ranges);
        assert_eq!(
            highlighted(label, &ranges).to_lowercase(),
            query.to_lowercase(),
            "label {:?} query {:?}",
            label,
            query
        );
    }
}

#[test]
fn test_ranges_within_label() {
    let label = "Visual Studio Code";
    let len = label.chars().count();
    for query in ["v", "code", "vsc", "isual", "e"] {
        let ranges = build_plain_matcher(label).find(query).unwrap();
        for range in ranges {
            assert!(range.end < len);
        }
    }
}

#[test]
fn test_deterministic() {
    let matcher = build_plain_matcher("Visual Studio Code");
    let first = matcher.find("vsc");
    for _ in 0..10 {
        assert_eq!(matcher.find("vsc"), first);
    }
    let again = build_plain_matcher("Visual Studio Code");
    assert_eq!(again.find("vsc"), first);
}

// ============ Compilation Failures ============

#[test]
fn test_very_long_words_still_compile() {
    for len in [124, 125, 300, 1000] {
        let label = "a".repeat(len);
        let matcher = build_plain_matcher(&label);
        assert_eq!(matcher.find(""), Some(vec![]), "length {}", len);
        assert_eq!(matcher.find("aa"), Some(vec![r(0, 1)]), "length {}", len);
    }
}

#[test]
fn test_long_id_next_to_word_matches_either() {
    let label = format!("{} build", "0123456789".repeat(13));
    let matcher = build_plain_matcher(&label);
    let offset = label.chars().count() - 5;
    assert_eq!(matcher.find("build"), Some(vec![r(offset, offset + 4)]));
    assert_eq!(matcher.find("012"), Some(vec![r(0, 2)]));
}

#[test]
fn test_nest_limit_below_word_depth_degrades() {
    let config = MatcherConfig::default().with_nest_limit(4);
    let matcher = build_plain_matcher_with("abcdefghij", &config);
    assert_eq!(matcher.find(""), None);
    assert_eq!(matcher.find("a"), None);
}

#[test]
fn test_tiny_size_limit_degrades() {
    let config = MatcherConfig::default().with_size_limit(16);
    let matcher = build_plain_matcher_with("GitHub Desktop", &config);
    assert!(!matcher.is_match("gd"));
}
