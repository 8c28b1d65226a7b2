use serde::Serialize;
use sheet_model::Record;

use crate::issue::ValidationError;

/// Error-free, sorted rows of one upload.
///
/// Only the validation engine builds these, so holding one proves the
/// source rows passed every rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedDataset {
    headers: Vec<String>,
    rows: Vec<Record>,
    sort_key: Option<String>,
}

impl ValidatedDataset {
    pub(crate) fn new(headers: Vec<String>, rows: Vec<Record>, sort_key: Option<String>) -> Self {
        Self {
            headers,
            rows,
            sort_key,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[Record] {
        &self.rows
    }

    /// Header the rows were sorted by; `None` only when there are no headers.
    pub fn sort_key(&self) -> Option<&str> {
        self.sort_key.as_deref()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.rows
    }
}

/// Result of validating one upload: a dataset or the full error list.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    Valid(ValidatedDataset),
    /// Never empty.
    Invalid(Vec<ValidationError>),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid(_))
    }

    pub fn dataset(&self) -> Option<&ValidatedDataset> {
        match self {
            ValidationOutcome::Valid(dataset) => Some(dataset),
            ValidationOutcome::Invalid(_) => None,
        }
    }

    pub fn errors(&self) -> &[ValidationError] {
        match self {
            ValidationOutcome::Valid(_) => &[],
            ValidationOutcome::Invalid(errors) => errors,
        }
    }

    pub fn into_result(self) -> Result<ValidatedDataset, Vec<ValidationError>> {
        match self {
            ValidationOutcome::Valid(dataset) => Ok(dataset),
            ValidationOutcome::Invalid(errors) => Err(errors),
        }
    }
}
