//! Upload decoding.
//!
//! Turns an uploaded file into a [`Workbook`] and enforces the gate in front
//! of validation: exactly one sheet, with a header row and at least one data
//! row.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use sheet_ingest::load_sheet;
//!
//! let sheet = load_sheet(Path::new("students.csv"))?;
//! println!("{} rows", sheet.row_count());
//! ```

mod csv_reader;
mod error;
mod gate;
mod json;

// === Error Types ===
pub use error::{IngestError, Result};

// === Decoding ===
pub use csv_reader::read_csv_workbook;
pub use json::read_json_workbook;

// === Single-sheet gate ===
pub use gate::{MAX_UPLOAD_SIZE, check_file_size, load_sheet, read_workbook, single_sheet};
