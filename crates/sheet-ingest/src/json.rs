//! JSON workbook decoding.
//!
//! The format mirrors what a spreadsheet decoder emits for a whole file:
//!
//! ```json
//! {"sheets": [{"name": "Sheet1", "rows": [["Name", "Age"], ["Alice", 30]]}]}
//! ```
//!
//! The first row of each sheet is its header.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use sheet_model::{CellValue, Sheet, Workbook};
use tracing::debug;

use crate::error::{IngestError, Result};

#[derive(Debug, Deserialize)]
struct JsonWorkbook {
    sheets: Vec<JsonSheet>,
}

#[derive(Debug, Deserialize)]
struct JsonSheet {
    name: String,
    #[serde(default)]
    rows: Vec<Vec<Value>>,
}

/// One decoded sheet whose header row has not been checked yet.
#[derive(Debug)]
pub(crate) struct RawSheet {
    name: String,
    rows: Vec<Vec<CellValue>>,
}

impl RawSheet {
    pub(crate) fn into_sheet(self, path: &Path) -> Result<Sheet> {
        Sheet::from_rows(self.name, self.rows).map_err(|source| IngestError::Model {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Parse a JSON workbook into raw sheets without checking any header row.
pub(crate) fn decode_json_sheets(path: &Path) -> Result<Vec<RawSheet>> {
    let content = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    let parsed: JsonWorkbook =
        serde_json::from_str(&content).map_err(|source| IngestError::JsonParse {
            path: path.to_path_buf(),
            source,
        })?;

    let sheets: Vec<RawSheet> = parsed
        .sheets
        .into_iter()
        .map(|sheet| RawSheet {
            name: sheet.name,
            rows: sheet
                .rows
                .into_iter()
                .map(|row| row.into_iter().map(json_cell).collect::<Vec<_>>())
                .filter(|row| !row.iter().all(CellValue::is_blank))
                .collect(),
        })
        .collect();

    debug!(path = %path.display(), sheets = sheets.len(), "JSON workbook decoded");
    Ok(sheets)
}

/// Read a JSON workbook file.
///
/// Every sheet must have a valid header row.
pub fn read_json_workbook(path: &Path) -> Result<Workbook> {
    let sheets = decode_json_sheets(path)?
        .into_iter()
        .map(|sheet| sheet.into_sheet(path))
        .collect::<Result<Vec<_>>>()?;
    Ok(Workbook::new(sheets))
}

fn json_cell(value: Value) -> CellValue {
    match value {
        Value::Null => CellValue::Empty,
        Value::Bool(flag) => CellValue::Bool(flag),
        Value::Number(number) => match (number.as_i64(), number.as_u64(), number.as_f64()) {
            (Some(int), _, _) => CellValue::from(int),
            (None, Some(_), _) => CellValue::Text(number.to_string()),
            (None, None, Some(float)) => CellValue::Number(float),
            (None, None, None) => CellValue::Text(number.to_string()),
        },
        Value::String(text) if text.is_empty() => CellValue::Empty,
        Value::String(text) => CellValue::Text(text),
        other => CellValue::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_values_keep_their_types() {
        assert_eq!(json_cell(Value::Null), CellValue::Empty);
        assert_eq!(json_cell(serde_json::json!(30)), CellValue::Number(30.0));
        assert_eq!(json_cell(serde_json::json!(true)), CellValue::Bool(true));
        assert_eq!(json_cell(serde_json::json!("")), CellValue::Empty);
        assert_eq!(json_cell(serde_json::json!("x")), CellValue::from("x"));
        assert_eq!(json_cell(serde_json::json!([1, 2])), CellValue::from("[1,2]"));
        assert_eq!(json_cell(serde_json::json!(2.5)), CellValue::Number(2.5));
    }

    #[test]
    fn large_integer_ids_stay_exact() {
        assert_eq!(
            json_cell(serde_json::json!(9_007_199_254_740_993i64)),
            CellValue::from("9007199254740993")
        );
        assert_eq!(
            json_cell(serde_json::json!(18_446_744_073_709_551_615u64)),
            CellValue::from("18446744073709551615")
        );
    }
}
