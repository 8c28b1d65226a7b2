//! Uniqueness pass over identity columns.
//!
//! Runs after the per-cell pass. The first occurrence of a value is never
//! flagged; every later repeat is, and its message points back at the first.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use sheet_model::{Record, display_row};
use tracing::debug;

use crate::issue::{ValidationError, Violation};
use crate::rules::ColumnRules;

pub(crate) fn check(columns: &ColumnRules, records: &[Record]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for column in columns.identity_columns() {
        let mut first_seen: HashMap<String, usize> = HashMap::new();
        let before = errors.len();

        for (row_idx, record) in records.iter().enumerate() {
            let value = record.get(&column.name);
            if value.is_blank() {
                continue;
            }

            match first_seen.entry(value.normalized()) {
                Entry::Vacant(slot) => {
                    slot.insert(row_idx);
                }
                Entry::Occupied(slot) => {
                    let violation = Violation::Duplicate {
                        value: slot.key().clone(),
                        first_row: display_row(*slot.get()),
                    };
                    errors.push(ValidationError::at(
                        &violation,
                        column.index,
                        row_idx,
                        &column.name,
                    ));
                }
            }
        }

        debug!(
            column = %column.name,
            distinct = first_seen.len(),
            duplicates = errors.len() - before,
            "identity column scanned"
        );
    }

    errors
}
