//! Error types for upload decoding.

use std::path::PathBuf;

use sheet_model::ModelError;
use thiserror::Error;

/// Failures that stop an upload before validation runs.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file {path} is {size} bytes, over the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    #[error("unsupported file type for {path} (expected .csv or .json)")]
    UnsupportedFormat { path: PathBuf },

    // === Decoding Errors ===
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: ::csv::Error,
    },

    #[error("failed to parse JSON workbook {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid header row in {path}: {source}")]
    Model {
        path: PathBuf,
        #[source]
        source: ModelError,
    },

    // === Sheet Gate Errors ===
    #[error("workbook contains no sheets")]
    NoSheets,

    #[error("workbook contains {count} sheets; upload a file with a single sheet")]
    MultipleSheets { count: usize },

    #[error("sheet '{name}' is empty")]
    EmptySheet { name: String },
}

impl IngestError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Result type for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;
