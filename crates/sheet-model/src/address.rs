//! Spreadsheet-style cell addressing.
//!
//! Columns are lettered base-26 without a zero digit (A..Z, AA..AZ, ...).
//! Data rows are numbered from 2 because row 1 holds the headers.

/// Offset between a 0-based data row index and its displayed row number.
pub const HEADER_ROW_OFFSET: usize = 2;

/// Convert a 0-based column index into its spreadsheet letters.
pub fn column_letters(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Displayed (1-based, header-aware) row number of a 0-based data row index.
pub fn display_row(index: usize) -> usize {
    index + HEADER_ROW_OFFSET
}

/// Address of a data cell, e.g. `B3` for column 1 of the second data row.
pub fn cell_address(column: usize, row: usize) -> String {
    format!("{}{}", column_letters(column), display_row(row))
}
