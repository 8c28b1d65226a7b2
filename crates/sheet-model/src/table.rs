use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::address::column_letters;
use crate::cell::CellValue;
use crate::error::{ModelError, Result};

static EMPTY_CELL: CellValue = CellValue::Empty;

/// One data row, keyed by header name.
///
/// Missing keys read as [`CellValue::Empty`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    cells: BTreeMap<String, CellValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: &str) -> &CellValue {
        self.cells.get(column).unwrap_or(&EMPTY_CELL)
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Builder-style insert, handy for fixtures.
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A single decoded sheet: ordered headers plus data rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

impl Sheet {
    /// Create a sheet, rejecting blank or repeated header names.
    pub fn new(name: impl Into<String>, headers: Vec<String>, records: Vec<Record>) -> Result<Self> {
        check_headers(&headers)?;
        Ok(Self {
            name: name.into(),
            headers,
            records,
        })
    }

    /// Build a sheet from positional rows where the first row is the header.
    ///
    /// Short rows are padded with [`CellValue::Empty`]; cells beyond the last
    /// header are dropped. No rows at all yields a sheet with no headers.
    pub fn from_rows(name: impl Into<String>, rows: Vec<Vec<CellValue>>) -> Result<Self> {
        let mut rows = rows.into_iter();
        let headers: Vec<String> = rows
            .next()
            .map(|row| row.iter().map(CellValue::normalized).collect())
            .unwrap_or_default();

        let records = rows
            .map(|row| {
                let mut cells = row.into_iter();
                headers
                    .iter()
                    .map(|header| (header.clone(), cells.next().unwrap_or_default()))
                    .collect::<Record>()
            })
            .collect();

        Self::new(name, headers, records)
    }

    /// True when there is no header row or no data row.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() || self.records.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }
}

fn check_headers(headers: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for (idx, header) in headers.iter().enumerate() {
        if header.trim().is_empty() {
            return Err(ModelError::EmptyHeader {
                column: column_letters(idx),
            });
        }
        if !seen.insert(header.as_str()) {
            return Err(ModelError::DuplicateHeader {
                name: header.clone(),
                column: column_letters(idx),
            });
        }
    }
    Ok(())
}

/// Every sheet a decoder found in one uploaded file, in file order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    pub fn single(sheet: Sheet) -> Self {
        Self {
            sheets: vec![sheet],
        }
    }
}
