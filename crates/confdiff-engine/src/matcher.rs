//! Pairing of removed and added lines by similarity.
//!
//! When a line diff replaces one run of lines with another, the two runs are
//! matched pairwise so that lines which merely changed show up as a single
//! modification. Matching is greedy: the most similar pair wins first, each
//! line pairs at most once, and pairs below the similarity threshold are
//! never formed.

use crate::char_diff::similarity;
use crate::value_diff::DiffItem;

/// Minimum similarity (exclusive) for two lines to pair as modified.
pub const MATCH_THRESHOLD: f64 = 0.3;

struct Candidate {
    removed_idx: usize,
    added_idx: usize,
    score: f64,
}

/// Pair removed lines with added lines and emit classified diff items.
///
/// Every candidate pair scoring strictly above [`MATCH_THRESHOLD`] competes;
/// pairs are taken best score first, with ties resolved toward the earliest
/// line positions. The output walks both runs in order: unmatched removed
/// and added lines keep their standalone classification, matched pairs
/// become [`DiffItem::Modified`], and every input line appears exactly once.
pub fn match_lines(removed: &[String], added: &[String]) -> Vec<DiffItem> {
    let mut candidates = Vec::new();
    for (removed_idx, old_line) in removed.iter().enumerate() {
        for (added_idx, new_line) in added.iter().enumerate() {
            let score = similarity(old_line, new_line);
            if score > MATCH_THRESHOLD {
                candidates.push(Candidate {
                    removed_idx,
                    added_idx,
                    score,
                });
            }
        }
    }

    candidates.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(a.removed_idx.cmp(&b.removed_idx))
            .then(a.added_idx.cmp(&b.added_idx))
    });

    let mut removed_used = vec![false; removed.len()];
    let mut added_used = vec![false; added.len()];
    let mut matches = Vec::new();
    for cand in candidates {
        if !removed_used[cand.removed_idx] && !added_used[cand.added_idx] {
            removed_used[cand.removed_idx] = true;
            added_used[cand.added_idx] = true;
            matches.push(cand);
        }
    }
    matches.sort_by_key(|m| m.removed_idx);

    let mut items = Vec::new();
    let mut removed_cursor = 0;
    let mut added_cursor = 0;
    for m in &matches {
        while removed_cursor < m.removed_idx {
            items.push(DiffItem::Removed {
                line: removed[removed_cursor].clone(),
            });
            removed_cursor += 1;
        }
        // A match further down can claim an added line that sits before the
        // current one; such lines are skipped here and emitted with their
        // own pair.
        while added_cursor < m.added_idx {
            if !added_used[added_cursor] {
                items.push(DiffItem::Added {
                    line: added[added_cursor].clone(),
                });
            }
            added_cursor += 1;
        }
        items.push(DiffItem::Modified {
            old: removed[m.removed_idx].clone(),
            new: added[m.added_idx].clone(),
        });
        removed_cursor = m.removed_idx + 1;
        // Never move the cursor backwards when matches cross.
        added_cursor = added_cursor.max(m.added_idx + 1);
    }

    while removed_cursor < removed.len() {
        items.push(DiffItem::Removed {
            line: removed[removed_cursor].clone(),
        });
        removed_cursor += 1;
    }
    while added_cursor < added.len() {
        if !added_used[added_cursor] {
            items.push(DiffItem::Added {
                line: added[added_cursor].clone(),
            });
        }
        added_cursor += 1;
    }

    items
}
