//! The single-sheet gate in front of validation.

use std::path::Path;

use sheet_model::{Sheet, Workbook};
use tracing::info;

use crate::csv_reader::read_csv_workbook;
use crate::error::{IngestError, Result};
use crate::json::{decode_json_sheets, read_json_workbook};

/// Largest upload accepted (50 MB).
pub const MAX_UPLOAD_SIZE: u64 = 50 * 1024 * 1024;

/// Reject files larger than `max_size` bytes.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::io(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UploadFormat {
    Csv,
    Json,
}

fn upload_format(path: &Path) -> Result<UploadFormat> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());
    match extension.as_deref() {
        Some("csv") => Ok(UploadFormat::Csv),
        Some("json") => Ok(UploadFormat::Json),
        _ => Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Decode a file by extension (`.csv` or `.json`).
pub fn read_workbook(path: &Path) -> Result<Workbook> {
    check_file_size(path, MAX_UPLOAD_SIZE)?;
    match upload_format(path)? {
        UploadFormat::Csv => read_csv_workbook(path),
        UploadFormat::Json => read_json_workbook(path),
    }
}

/// Take the only sheet of a workbook.
///
/// Fails for zero or several sheets, and for a sheet without a header row
/// or without data rows.
pub fn single_sheet(workbook: Workbook) -> Result<Sheet> {
    let count = workbook.sheets.len();
    let mut sheets = workbook.sheets.into_iter();
    let sheet = match (sheets.next(), count) {
        (None, _) => return Err(IngestError::NoSheets),
        (Some(sheet), 1) => sheet,
        (Some(_), count) => return Err(IngestError::MultipleSheets { count }),
    };

    if sheet.is_empty() {
        return Err(IngestError::EmptySheet { name: sheet.name });
    }
    Ok(sheet)
}

/// Decode a file and pass it through the single-sheet gate.
///
/// The sheet count is checked before any header row, so a multi-sheet
/// workbook is always reported as such.
pub fn load_sheet(path: &Path) -> Result<Sheet> {
    check_file_size(path, MAX_UPLOAD_SIZE)?;
    let workbook = match upload_format(path)? {
        UploadFormat::Csv => read_csv_workbook(path)?,
        UploadFormat::Json => {
            let sheets = decode_json_sheets(path)?;
            if sheets.len() > 1 {
                return Err(IngestError::MultipleSheets {
                    count: sheets.len(),
                });
            }
            let sheets = sheets
                .into_iter()
                .map(|sheet| sheet.into_sheet(path))
                .collect::<Result<Vec<_>>>()?;
            Workbook::new(sheets)
        }
    };
    let sheet = single_sheet(workbook)?;
    info!(
        path = %path.display(),
        sheet = %sheet.name,
        rows = sheet.row_count(),
        columns = sheet.headers.len(),
        "upload decoded"
    );
    Ok(sheet)
}
