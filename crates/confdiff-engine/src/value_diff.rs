//! Value-level diff: the full comparison of two config values.
//!
//! Splits both values into lines, runs the line diff, and hands adjacent
//! removed/added runs to the matcher so tweaked lines come back as single
//! modifications. The result is a flat, ordered list of classified items.

use confdiff_parser::ConfigMapping;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::line_diff::{line_segments, split_value_lines, SegmentKind};
use crate::matcher::match_lines;

/// A single classified line in a value diff.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DiffItem {
    /// A line present in both values.
    Unchanged { line: String },
    /// A line present only in the new value.
    Added { line: String },
    /// A line present only in the old value.
    Removed { line: String },
    /// A pair of lines similar enough to count as one edited line.
    Modified {
        #[serde(rename = "removed")]
        old: String,
        #[serde(rename = "added")]
        new: String,
    },
}

/// The result of diffing two config values.
///
/// Items appear in old-value order: unchanged and removed lines at their
/// original positions, modified pairs at the position of their removed line,
/// and added lines at their insertion points.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueDiff {
    /// The classified diff items.
    pub items: Vec<DiffItem>,
}

impl ValueDiff {
    /// Create an empty value diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if any line was added, removed, or modified.
    pub fn has_changes(&self) -> bool {
        self.items
            .iter()
            .any(|item| !matches!(item, DiffItem::Unchanged { .. }))
    }

    /// Number of unchanged lines.
    pub fn unchanged(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, DiffItem::Unchanged { .. }))
            .count()
    }

    /// Number of added lines.
    pub fn additions(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, DiffItem::Added { .. }))
            .count()
    }

    /// Number of removed lines.
    pub fn removals(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, DiffItem::Removed { .. }))
            .count()
    }

    /// Number of modified line pairs.
    pub fn modifications(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, DiffItem::Modified { .. }))
            .count()
    }
}

/// Diff two config values line by line.
///
/// Both values are split after every `]`, the line diff is segmented, and
/// each removed run directly followed by an added run goes through similarity
/// matching. Every input line of both values appears in the result exactly
/// once.
pub fn diff_values(old_value: &str, new_value: &str) -> ValueDiff {
    let old_lines = split_value_lines(old_value);
    let new_lines = split_value_lines(new_value);
    let segments = line_segments(&old_lines, &new_lines);

    let mut items = Vec::new();
    let mut i = 0;
    while i < segments.len() {
        match segments[i].kind {
            SegmentKind::Unchanged => {
                for line in &segments[i].lines {
                    items.push(DiffItem::Unchanged { line: line.clone() });
                }
            }
            SegmentKind::Removed => {
                // A removed run directly followed by an added run is one
                // replacement block and goes through the matcher.
                if segments
                    .get(i + 1)
                    .is_some_and(|s| s.kind == SegmentKind::Added)
                {
                    items.extend(match_lines(&segments[i].lines, &segments[i + 1].lines));
                    i += 2;
                    continue;
                }
                for line in &segments[i].lines {
                    items.push(DiffItem::Removed { line: line.clone() });
                }
            }
            SegmentKind::Added => {
                for line in &segments[i].lines {
                    items.push(DiffItem::Added { line: line.clone() });
                }
            }
        }
        i += 1;
    }

    ValueDiff { items }
}

/// Diff the values selected by key from two raw config texts.
///
/// Both texts are parsed into mappings and the values under `old_key` and
/// `new_key` are compared; a key absent from its mapping compares as the
/// empty value. Returns `None` until both keys are non-empty, mirroring a
/// selection that has not been made yet.
pub fn diff_selected(
    old_text: &str,
    new_text: &str,
    old_key: &str,
    new_key: &str,
) -> Option<ValueDiff> {
    if old_key.is_empty() || new_key.is_empty() {
        return None;
    }

    let old_mapping = ConfigMapping::parse(old_text);
    let new_mapping = ConfigMapping::parse(new_text);
    let diff = diff_values(old_mapping.value(old_key), new_mapping.value(new_key));

    debug!(
        old_key = %old_key,
        new_key = %new_key,
        items = diff.len(),
        "computed value diff"
    );

    Some(diff)
}


#[cfg(test)]
mod prop_tests {
    use proptest::prelude::*;

    use super::*;

    const VALUE: &str = r"[a-e=\[\]]{0,30}";

    proptest! {
        #[test]
        fn old_lines_project_in_order(old in VALUE, new in VALUE) {
            let diff = diff_values(&old, &new);
            let old_side: Vec<String> = diff
                .items
                .iter()
                .filter_map(|item| match item {
                    DiffItem::Unchanged { line } | DiffItem::Removed { line } => {
                        Some(line.clone())
                    }
                    DiffItem::Modified { old, .. } => Some(old.clone()),
                    DiffItem::Added { .. } => None,
                })
                .collect();
            prop_assert_eq!(old_side, split_value_lines(&old));
        }

        #[test]
        fn new_lines_appear_exactly_once(old in VALUE, new in VALUE) {
            let diff = diff_values(&old, &new);
            let mut new_side: Vec<String> = diff
                .items
                .iter()
                .filter_map(|item| match item {
                    DiffItem::Unchanged { line } | DiffItem::Added { line } => {
                        Some(line.clone())
                    }
                    DiffItem::Modified { new, .. } => Some(new.clone()),
                    DiffItem::Removed { .. } => None,
                })
                .collect();
            let mut expected = split_value_lines(&new);
            new_side.sort();
            expected.sort();
            prop_assert_eq!(new_side, expected);
        }

        #[test]
        fn diffing_is_deterministic(old in VALUE, new in VALUE) {
            prop_assert_eq!(diff_values(&old, &new), diff_values(&old, &new));
        }

        #[test]
        fn identical_values_show_no_changes(value in VALUE) {
            prop_assert!(!diff_values(&value, &value).has_changes());
        }
    }
}
