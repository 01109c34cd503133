//! Character-level diff: span extraction and similarity scoring.
//!
//! Uses the `similar` crate (Myers diff algorithm) over individual characters.
//! Spans drive the highlighted rendering of a modified line pair; the
//! similarity ratio decides whether two lines pair up at all.

use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};

/// How a span of characters relates to the two sides of a comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    /// Present in both strings.
    Common,
    /// Present only in the new string.
    Added,
    /// Present only in the old string.
    Removed,
}

/// A maximal run of characters sharing one [`SpanKind`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharSpan {
    /// Classification of this run.
    pub kind: SpanKind,
    /// The characters in this run.
    pub text: String,
}

/// Compute character-level spans between two strings.
///
/// Adjacent characters with the same classification are folded into a single
/// span, so concatenating the `Common` and `Removed` spans reproduces `old`
/// and concatenating the `Common` and `Added` spans reproduces `new`.
pub fn char_spans(old: &str, new: &str) -> Vec<CharSpan> {
    let diff = TextDiff::from_chars(old, new);

    let mut spans: Vec<CharSpan> = Vec::new();
    for change in diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Equal => SpanKind::Common,
            ChangeTag::Delete => SpanKind::Removed,
            ChangeTag::Insert => SpanKind::Added,
        };
        match spans.last_mut() {
            Some(span) if span.kind == kind => span.text.push_str(change.value()),
            _ => spans.push(CharSpan {
                kind,
                text: change.value().to_string(),
            }),
        }
    }
    spans
}

/// Similarity ratio between two strings in `0.0..=1.0`.
///
/// The ratio is shared characters over total distinct character positions:
/// every character of `old` and `new` counts once, with characters common to
/// both counted a single time. Two empty strings score `0.0`.
pub fn similarity(old: &str, new: &str) -> f64 {
    let diff = TextDiff::from_chars(old, new);

    let mut common = 0usize;
    let mut total = 0usize;
    for change in diff.iter_all_changes() {
        let chars = change.value().chars().count();
        total += chars;
        if change.tag() == ChangeTag::Equal {
            common += chars;
        }
    }

    if total == 0 {
        0.0
    } else {
        common as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(spans: &[CharSpan], keep: &[SpanKind]) -> String {
        spans
            .iter()
            .filter(|s| keep.contains(&s.kind))
            .map(|s| s.text.as_str())
            .collect()
    }

    #[test]
    fn identical_strings_single_common_span() {
        let spans = char_spans("timeout=30", "timeout=30");
        assert_eq!(
            spans,
            vec![CharSpan {
                kind: SpanKind::Common,
                text: "timeout=30".to_string()
            }]
        );
    }

    #[test]
    fn disjoint_strings_have_no_common_span() {
        let spans = char_spans("aaa", "bbb");
        assert!(spans.iter().all(|s| s.kind != SpanKind::Common));
    }

    #[test]
    fn adjacent_changes_fold_into_one_span() {
        let spans = char_spans("abc", "abd");
        assert_eq!(
            spans,
            vec![
                CharSpan {
                    kind: SpanKind::Common,
                    text: "ab".to_string()
                },
                CharSpan {
                    kind: SpanKind::Removed,
                    text: "c".to_string()
                },
                CharSpan {
                    kind: SpanKind::Added,
                    text: "d".to_string()
                },
            ]
        );
    }

    #[test]
    fn spans_reconstruct_both_sides() {
        let old = "retries=3,timeout=30";
        let new = "retries=5,timeout=300";
        let spans = char_spans(old, new);

        let rebuilt_old = render(&spans, &[SpanKind::Common, SpanKind::Removed]);
        let rebuilt_new = render(&spans, &[SpanKind::Common, SpanKind::Added]);
        assert_eq!(rebuilt_old, old);
        assert_eq!(rebuilt_new, new);
    }

    #[test]
    fn similarity_identical_is_one() {
        assert_eq!(similarity("hello", "hello"), 1.0);
    }

    #[test]
    fn similarity_disjoint_is_zero() {
        assert_eq!(similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn similarity_shared_prefix() {
        // "ab" is shared; one distinct character on each side.
        assert_eq!(similarity("abc", "abd"), 0.5);
    }

    #[test]
    fn similarity_empty_pair_is_zero() {
        assert_eq!(similarity("", ""), 0.0);
    }

    #[test]
    fn similarity_empty_against_content_is_zero() {
        assert_eq!(similarity("", "abc"), 0.0);
        assert_eq!(similarity("abc", ""), 0.0);
    }

    #[test]
    fn similarity_is_symmetric_for_shared_characters() {
        let a = similarity("server=web-01", "server=web-02");
        let b = similarity("server=web-02", "server=web-01");
        assert!((a - b).abs() < f64::EPSILON);
    }
}
