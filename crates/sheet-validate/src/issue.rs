//! Validation error types.
//!
//! [`Violation`] carries only the data each failure needs; it is turned into
//! an addressed, immutable [`ValidationError`] by the engine.

use std::fmt;

use serde::{Deserialize, Serialize};
use sheet_model::{cell_address, display_row};

/// The rule a [`ValidationError`] reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Blank,
    Email,
    Phone,
    Numeric,
    Date,
    Unique,
}

impl ErrorKind {
    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::Blank => "blank",
            ErrorKind::Email => "email",
            ErrorKind::Phone => "phone",
            ErrorKind::Numeric => "numeric",
            ErrorKind::Date => "date",
            ErrorKind::Unique => "unique",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single rule failure before it is tied to a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Violation {
    Blank,
    InvalidEmail { value: String },
    InvalidPhone { value: String },
    NotNumeric { value: String },
    InvalidDate { value: String },
    /// `first_row` is the displayed row number of the earlier occurrence.
    Duplicate { value: String, first_row: usize },
}

impl Violation {
    pub(crate) fn kind(&self) -> ErrorKind {
        match self {
            Violation::Blank => ErrorKind::Blank,
            Violation::InvalidEmail { .. } => ErrorKind::Email,
            Violation::InvalidPhone { .. } => ErrorKind::Phone,
            Violation::NotNumeric { .. } => ErrorKind::Numeric,
            Violation::InvalidDate { .. } => ErrorKind::Date,
            Violation::Duplicate { .. } => ErrorKind::Unique,
        }
    }

    pub(crate) fn message(&self, column: &str) -> String {
        match self {
            Violation::Blank => format!("{column} is required"),
            Violation::InvalidEmail { value } => format!("Invalid email address '{value}'"),
            Violation::InvalidPhone { value } => {
                format!("Phone number '{value}' must contain exactly 10 digits")
            }
            Violation::NotNumeric { value } => format!("'{value}' is not a valid number"),
            Violation::InvalidDate { value } => format!("'{value}' is not a valid date"),
            Violation::Duplicate { value, first_row } => {
                format!("Duplicate value '{value}' in {column} (first seen in row {first_row})")
            }
        }
    }
}

/// An addressed validation failure.
///
/// Immutable once built; `row` is the displayed row number (the first data
/// row is row 2).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    cell_address: String,
    row: usize,
    column: String,
    message: String,
    kind: ErrorKind,
}

impl ValidationError {
    pub(crate) fn at(
        violation: &Violation,
        column_index: usize,
        row_index: usize,
        column: &str,
    ) -> Self {
        Self {
            cell_address: cell_address(column_index, row_index),
            row: display_row(row_index),
            column: column.to_string(),
            message: violation.message(column),
            kind: violation.kind(),
        }
    }

    pub fn cell_address(&self) -> &str {
        &self.cell_address
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.cell_address, self.message)
    }
}
