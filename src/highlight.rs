// fuzzy-pinyin Highlighting
// Splits a label into plain and highlighted pieces from match ranges

use crate::types::MatchRange;

/// A slice of a label and whether it is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

/// Split `label` into alternating plain and highlighted segments
///
/// Ranges are inclusive char offsets. Ranges past the end of the label are
/// clamped, and a range starting before the previous one ended is trimmed.
///
/// # Example
/// ```
/// # use fuzzy_pinyin::highlight::segments;
/// # use fuzzy_pinyin::types::MatchRange;
/// let parts = segments("GitHub Desktop", &[MatchRange::new(0, 0), MatchRange::new(7, 7)]);
/// let texts: Vec<&str> = parts.iter().map(|s| s.text).collect();
/// assert_eq!(texts, vec!["G", "itHub ", "D", "esktop"]);
/// ```
pub fn segments<'a>(label: &'a str, ranges: &[MatchRange]) -> Vec<Segment<'a>> {
    // byte offset of every char boundary, plus the end
    let boundaries: Vec<usize> = label
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(label.len()))
        .collect();
    let char_len = boundaries.len() - 1;

    let mut out = Vec::new();
    let mut cursor = 0;

    for range in ranges {
        let start = range.start.max(cursor);
        let end = range.end.saturating_add(1).min(char_len);
        if start >= end {
            continue;
        }
        if start > cursor {
            out.push(Segment {
                text: &label[boundaries[cursor]..boundaries[start]],
                highlighted: false,
            });
        }
        out.push(Segment {
            text: &label[boundaries[start]..boundaries[end]],
            highlighted: true,
        });
        cursor = end;
    }

    if cursor < char_len {
        out.push(Segment {
            text: &label[boundaries[cursor]..],
            highlighted: false,
        });
    }
    out
}

/// Wrap every highlighted segment in `open`/`close` markers
///
/// # Example
/// ```
/// # use fuzzy_pinyin::highlight::mark;
/// # use fuzzy_pinyin::types::MatchRange;
/// assert_eq!(mark("链接", &[MatchRange::new(0, 0)], "[", "]"), "[链]接");
/// ```
pub fn mark(label: &str, ranges: &[MatchRange], open: &str, close: &str) -> String {
    let mut out = String::with_capacity(label.len() + ranges.len() * (open.len() + close.len()));
    for segment in segments(label, ranges) {
        if segment.highlighted {
            out.push_str(open);
            out.push_str(segment.text);
            out.push_str(close);
        } else {
            out.push_str(segment.text);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(start: usize, end: usize) -> MatchRange {
        MatchRange::new(start, end)
    }

    #[test]
    fn test_no_ranges() {
        let parts = segments("abc", &[]);
        assert_eq!(
            parts,
            vec![Segment {
                text: "abc",
                highlighted: false
            }]
        );
    }

    #[test]
    fn test_empty_label() {
        assert!(segments("", &[r(0, 0)]).is_empty());
    }

    #[test]
    fn test_whole_label() {
        assert_eq!(mark("abc", &[r(0, 2)], "<", ">"), "<abc>");
    }

    #[test]
    fn test_multibyte_offsets() {
        assert_eq!(mark("设置-Settings", &[r(0, 1), r(3, 3)], "[", "]"), "[设置]-[S]ettings");
    }

    #[test]
    fn test_adjacent_ranges_stay_separate() {
        assert_eq!(mark("ab", &[r(0, 0), r(1, 1)], "[", "]"), "[a][b]");
    }

    #[test]
    fn test_out_of_bounds_clamped() {
        assert_eq!(mark("ab", &[r(1, 9)], "[", "]"), "a[b]");
        assert_eq!(mark("ab", &[r(5, 9)], "[", "]"), "ab");
        assert_eq!(mark("ab", &[r(0, usize::MAX)], "[", "]"), "[ab]");
        assert_eq!(mark("ab", &[r(usize::MAX, usize::MAX)], "[", "]"), "ab");
    }

    #[test]
    fn test_overlapping_ranges_trimmed() {
        assert_eq!(mark("abcd", &[r(0, 2), r(1, 3)], "[", "]"), "[abc][d]");
    }
}
