//! Line-level diff: value splitting and raw change segments.
//!
//! Config values are dense one-liners where `]` closes a logical group, so a
//! newline is inserted after every `]` before diffing. The Myers line diff is
//! then collapsed into maximal runs of one change kind; pairing of removed
//! and added runs happens later in [`crate::matcher`].

use serde::{Deserialize, Serialize};
use similar::{Algorithm, ChangeTag, TextDiff};

/// Classification of a run of lines in the raw line diff.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Lines present in both values.
    Unchanged,
    /// Lines present only in the old value.
    Removed,
    /// Lines present only in the new value.
    Added,
}

/// A maximal run of consecutive lines sharing one [`SegmentKind`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Classification of this run.
    pub kind: SegmentKind,
    /// The lines in this run, in order.
    pub lines: Vec<String>,
}

/// Split a config value into lines for diffing.
///
/// A newline is inserted after every `]`, then the result is split on line
/// boundaries and lines blank after trimming are dropped (kept lines are not
/// trimmed). A value without brackets stays a single line; an empty value
/// yields no lines.
pub fn split_value_lines(value: &str) -> Vec<String> {
    value
        .replace(']', "]\n")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Compute the raw line diff between two line sequences.
///
/// Runs a Myers diff over whole lines and folds consecutive changes with the
/// same tag into segments. A replaced region always yields its `Removed`
/// segment directly followed by its `Added` segment.
pub fn line_segments(old_lines: &[String], new_lines: &[String]) -> Vec<Segment> {
    let old_refs: Vec<&str> = old_lines.iter().map(String::as_str).collect();
    let new_refs: Vec<&str> = new_lines.iter().map(String::as_str).collect();

    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_slices(&old_refs, &new_refs);

    let mut segments: Vec<Segment> = Vec::new();
    for change in diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Equal => SegmentKind::Unchanged,
            ChangeTag::Delete => SegmentKind::Removed,
            ChangeTag::Insert => SegmentKind::Added,
        };
        let line = change.value().to_string();
        match segments.last_mut() {
            Some(seg) if seg.kind == kind => seg.lines.push(line),
            _ => segments.push(Segment {
                kind,
                lines: vec![line],
            }),
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn split_breaks_after_closing_bracket() {
        assert_eq!(
            split_value_lines("[a=1][b=2][c=3]"),
            vec!["[a=1]", "[b=2]", "[c=3]"]
        );
    }

    #[test]
    fn split_keeps_trailing_text_without_bracket() {
        assert_eq!(split_value_lines("[a=1]tail"), vec!["[a=1]", "tail"]);
    }

    #[test]
    fn split_without_brackets_is_single_line() {
        assert_eq!(split_value_lines("plain value"), vec!["plain value"]);
    }

    #[test]
    fn split_empty_value_has_no_lines() {
        assert!(split_value_lines("").is_empty());
    }

    #[test]
    fn split_trailing_bracket_has_no_empty_tail() {
        assert_eq!(split_value_lines("a]"), vec!["a]"]);
    }

    #[test]
    fn split_drops_blank_lines() {
        assert_eq!(split_value_lines("a]   "), vec!["a]"]);
        assert_eq!(split_value_lines("  "), Vec::<String>::new());
    }

    #[test]
    fn identical_lines_single_unchanged_segment() {
        let old = lines(&["a", "b", "c"]);
        let segments = line_segments(&old, &old);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].kind, SegmentKind::Unchanged);
        assert_eq!(segments[0].lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn replacement_yields_removed_then_added() {
        let old = lines(&["a", "b", "c"]);
        let new = lines(&["a", "B", "c"]);
        let segments = line_segments(&old, &new);

        let kinds: Vec<SegmentKind> = segments.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SegmentKind::Unchanged,
                SegmentKind::Removed,
                SegmentKind::Added,
                SegmentKind::Unchanged,
            ]
        );
        assert_eq!(segments[1].lines, vec!["b"]);
        assert_eq!(segments[2].lines, vec!["B"]);
    }

    #[test]
    fn consecutive_changes_fold_into_one_segment() {
        let old = lines(&["a", "b", "c", "d"]);
        let new = lines(&["a", "d"]);
        let segments = line_segments(&old, &new);

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1].kind, SegmentKind::Removed);
        assert_eq!(segments[1].lines, vec!["b", "c"]);
    }

    #[test]
    fn empty_old_side_is_all_added() {
        let segments = line_segments(&[], &lines(&["x", "y"]));
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].kind, SegmentKind::Added);
    }

    #[test]
    fn empty_new_side_is_all_removed() {
        let segments = line_segments(&lines(&["x"]), &[]);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].kind, SegmentKind::Removed);
    }

    #[test]
    fn both_empty_no_segments() {
        assert!(line_segments(&[], &[]).is_empty());
    }
}
