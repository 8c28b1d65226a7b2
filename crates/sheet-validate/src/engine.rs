//! Row validation engine.

use sheet_model::{Record, Sheet};
use tracing::{info, info_span};

use crate::checks::{self, unique};
use crate::dataset::{ValidatedDataset, ValidationOutcome};
use crate::issue::{ValidationError, Violation};
use crate::rules::ColumnRules;
use crate::sort::{choose_sort_column, sort_records};

/// Validate every cell of every record, then check identity columns for
/// duplicates.
///
/// Errors come back row-major (rows in order, columns in header order, rules
/// in [`crate::RuleKind`] order within a cell), followed by uniqueness errors
/// grouped by identity column. A blank cell yields exactly one `blank` error
/// and no other rule runs on it.
pub fn validate<S: AsRef<str>>(headers: &[S], records: &[Record]) -> Vec<ValidationError> {
    let span = info_span!("validate", rows = records.len(), columns = headers.len());
    let _guard = span.enter();

    let columns = ColumnRules::classify_headers(headers);
    let mut errors = Vec::new();

    for (row_idx, record) in records.iter().enumerate() {
        for column in columns.iter() {
            let value = record.get(&column.name);
            if checks::is_blank(value) {
                errors.push(ValidationError::at(
                    &Violation::Blank,
                    column.index,
                    row_idx,
                    &column.name,
                ));
                continue;
            }

            let text = value.normalized();
            for rule in column.rules.field_rules() {
                if let Some(violation) = checks::check(rule, &text) {
                    errors.push(ValidationError::at(
                        &violation,
                        column.index,
                        row_idx,
                        &column.name,
                    ));
                }
            }
        }
    }

    let cell_errors = errors.len();
    errors.extend(unique::check(&columns, records));

    info!(
        cell_errors,
        unique_errors = errors.len() - cell_errors,
        "validation finished"
    );
    errors
}

/// Validate owned records and, when clean, sort them into a dataset.
pub fn validate_records(headers: Vec<String>, mut records: Vec<Record>) -> ValidationOutcome {
    let errors = validate(&headers, &records);
    if !errors.is_empty() {
        return ValidationOutcome::Invalid(errors);
    }

    let sort_key = choose_sort_column(&headers).map(str::to_string);
    if let Some(key) = &sort_key {
        sort_records(&mut records, key);
    }
    ValidationOutcome::Valid(ValidatedDataset::new(headers, records, sort_key))
}

/// Validate a decoded sheet.
pub fn validate_sheet(sheet: &Sheet) -> ValidationOutcome {
    validate_records(sheet.headers.clone(), sheet.records.clone())
}
