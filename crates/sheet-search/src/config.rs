//! Matching tolerance.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// Fuzziness settings shared by every query against one index.
///
/// A field matches a query when the best approximate alignment needs at most
/// `max_edits` character edits *and* `edits / query_len <= threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum normalized distance (0.0 = exact, 1.0 = anything). Default 0.4.
    pub threshold: f64,
    /// Hard cap on character edits regardless of query length. Default 2.
    pub max_edits: usize,
    /// Compare case-folded text. Default true.
    pub ignore_case: bool,
    /// Queries shorter than this (after trimming) match nothing. Default 1.
    pub min_query_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: 0.4,
            max_edits: 2,
            ignore_case: true,
            min_query_chars: 1,
        }
    }
}

impl SearchConfig {
    /// Create a configuration with explicit tolerance.
    pub fn new(threshold: f64, max_edits: usize) -> Result<Self> {
        let config = Self {
            threshold,
            max_edits,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Near-exact matching: one edit, threshold 0.2.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            threshold: 0.2,
            max_edits: 1,
            ..Self::default()
        }
    }

    /// Loose matching for exploratory lookups: three edits, threshold 0.6.
    #[must_use]
    pub fn relaxed() -> Self {
        Self {
            threshold: 0.6,
            max_edits: 3,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    #[must_use]
    pub fn with_min_query_chars(mut self, min_query_chars: usize) -> Self {
        self.min_query_chars = min_query_chars;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(SearchError::InvalidThreshold {
                value: self.threshold,
            });
        }
        Ok(())
    }

    /// Apply case folding and trimming the same way to queries and fields.
    pub(crate) fn normalize(&self, text: &str) -> Vec<char> {
        let trimmed = text.trim();
        if self.ignore_case {
            trimmed.to_lowercase().chars().collect()
        } else {
            trimmed.chars().collect()
        }
    }
}
