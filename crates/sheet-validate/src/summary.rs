use std::collections::BTreeMap;

use serde::Serialize;

use crate::issue::{ErrorKind, ValidationError};

/// Error counts for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    pub total: usize,
    pub by_kind: BTreeMap<ErrorKind, usize>,
    pub by_column: BTreeMap<String, usize>,
    /// Distinct displayed rows with at least one error.
    pub rows_affected: usize,
}

impl ValidationSummary {
    pub fn from_errors(errors: &[ValidationError]) -> Self {
        let mut summary = Self {
            total: errors.len(),
            ..Self::default()
        };
        let mut rows = std::collections::BTreeSet::new();
        for error in errors {
            *summary.by_kind.entry(error.kind()).or_insert(0) += 1;
            *summary
                .by_column
                .entry(error.column().to_string())
                .or_insert(0) += 1;
            rows.insert(error.row());
        }
        summary.rows_affected = rows.len();
        summary
    }

    pub fn count(&self, kind: ErrorKind) -> usize {
        self.by_kind.get(&kind).copied().unwrap_or(0)
    }
}
