//! Approximate substring scoring.
//!
//! The query is aligned against every window of the field whose length is
//! within one character of the query, using Levenshtein distance. The best
//! window decides the field's edit count, so "ali" finds "Alice" with zero
//! edits and "alcie" finds it with two.

use std::cmp::Ordering;

use rapidfuzz::distance::levenshtein;
use serde::Serialize;

use crate::config::SearchConfig;

/// How well one query matched one field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldMatch {
    /// Character edits of the best alignment.
    pub edits: usize,
    /// `edits / query_len`; 0.0 is a perfect match.
    pub score: f64,
    /// Share of the field covered by the query (1.0 for a whole-value match).
    pub coverage: f64,
}

impl FieldMatch {
    /// Lower score first, then higher coverage.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.coverage.total_cmp(&self.coverage))
    }
}

/// Score `query` against `field`; `None` when outside the configured tolerance.
///
/// Both inputs must already be normalized with the same [`SearchConfig`].
pub fn match_field(query: &[char], field: &[char], config: &SearchConfig) -> Option<FieldMatch> {
    if query.is_empty() || field.is_empty() {
        return None;
    }

    let edits = best_alignment(query, field);
    let score = edits as f64 / query.len() as f64;
    if edits > config.max_edits || score > config.threshold {
        return None;
    }

    let coverage = query.len().min(field.len()) as f64 / query.len().max(field.len()) as f64;
    Some(FieldMatch {
        edits,
        score,
        coverage,
    })
}

fn best_alignment(query: &[char], field: &[char]) -> usize {
    if query == field {
        return 0;
    }

    let mut best = distance(query, field);
    let shortest = query.len().saturating_sub(1).max(1);
    let longest = query.len() + 1;

    for len in shortest..=longest {
        if len >= field.len() {
            break;
        }
        for window in field.windows(len) {
            best = best.min(distance(query, window));
            if best == 0 {
                return 0;
            }
        }
    }

    best
}

fn distance(a: &[char], b: &[char]) -> usize {
    levenshtein::distance(a.iter().copied(), b.iter().copied())
}
