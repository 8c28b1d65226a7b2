//! CSV decoding.
//!
//! A CSV file is a one-sheet workbook named after the file stem. CSV carries
//! no types, so every non-empty cell is text.

use std::path::Path;

use ::csv::ReaderBuilder;
use sheet_model::{CellValue, Sheet, Workbook};
use tracing::debug;

use crate::error::{IngestError, Result};

const UTF8_BOM: char = '\u{feff}';

/// Read a CSV file into a single-sheet workbook.
///
/// Ragged rows are accepted; rows whose cells are all empty are dropped.
pub fn read_csv_workbook(path: &Path) -> Result<Workbook> {
    let content = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(&content);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        let row: Vec<CellValue> = record.iter().map(text_cell).collect();
        if row.iter().all(CellValue::is_blank) {
            continue;
        }
        rows.push(row);
    }

    let name = sheet_name(path);
    let sheet = Sheet::from_rows(name, rows).map_err(|source| IngestError::Model {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        sheet = %sheet.name,
        rows = sheet.row_count(),
        "CSV decoded"
    );
    Ok(Workbook::single(sheet))
}

fn text_cell(raw: &str) -> CellValue {
    if raw.is_empty() {
        CellValue::Empty
    } else {
        CellValue::Text(raw.to_string())
    }
}

pub(crate) fn sheet_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Sheet1".to_string())
}
