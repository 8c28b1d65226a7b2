//! Tabular data model shared by the sheetcheck crates.
//!
//! A decoded spreadsheet arrives as a [`Workbook`] of [`Sheet`]s. Each sheet
//! carries an ordered header row and one [`Record`] per data row, keyed by
//! header name.

pub mod address;
pub mod cell;
pub mod error;
pub mod table;

pub use address::{cell_address, column_letters, display_row};
pub use cell::CellValue;
pub use error::{ModelError, Result};
pub use table::{Record, Sheet, Workbook};
