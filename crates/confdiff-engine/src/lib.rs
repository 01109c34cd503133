//! Diff engine for confdiff.
//!
//! Compares two configuration values and classifies each line as unchanged,
//! added, removed, or modified. Structurally changed lines are paired by
//! character-level similarity so a tweaked line shows up as one modification
//! instead of an unrelated removal and addition.
//!
//! # Key Types
//!
//! - [`ValueDiff`] / [`DiffItem`] -- Classified line-level diff of two values
//! - [`Segment`] / [`SegmentKind`] -- Raw line-diff runs before pairing
//! - [`CharSpan`] / [`SpanKind`] -- Character-level spans within a line pair

pub mod char_diff;
pub mod line_diff;
pub mod matcher;
pub mod value_diff;

pub use char_diff::{char_spans, similarity, CharSpan, SpanKind};
pub use line_diff::{line_segments, split_value_lines, Segment, SegmentKind};
pub use matcher::{match_lines, MATCH_THRESHOLD};
pub use value_diff::{diff_selected, diff_values, DiffItem, ValueDiff};
