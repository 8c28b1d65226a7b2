//! Raw cell values as produced by a spreadsheet decoder.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single scalar cell.
///
/// Decoders yield typed values where the container format has them (numbers,
/// booleans); CSV input only ever produces [`CellValue::Text`] and
/// [`CellValue::Empty`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    #[default]
    Empty,
}

impl CellValue {
    /// True for absent values and whitespace-only text.
    ///
    /// Numbers and booleans are never blank, including `0` and `false`.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(text) => text.trim().is_empty(),
            CellValue::Number(_) | CellValue::Bool(_) => false,
        }
    }

    /// Stringified, trimmed form used by every field rule.
    pub fn normalized(&self) -> String {
        self.to_string().trim().to_string()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(text) => f.write_str(text),
            // f64's Display drops the fraction for integral values: 10.0 -> "10"
            CellValue::Number(number) => write!(f, "{number}"),
            CellValue::Bool(flag) => write!(f, "{flag}"),
            CellValue::Empty => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// Largest integer magnitude an `f64` holds exactly (2^53).
const MAX_EXACT_INTEGER: i64 = 1 << 53;

/// Integers beyond ±2^53 become text so that large IDs keep every digit.
impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        if value.unsigned_abs() <= MAX_EXACT_INTEGER.unsigned_abs() {
            CellValue::Number(value as f64)
        } else {
            CellValue::Text(value.to_string())
        }
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Empty, Into::into)
    }
}
