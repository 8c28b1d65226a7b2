use thiserror::Error;

/// Errors from building a search configuration. Queries themselves never fail.
#[derive(Debug, Error, PartialEq)]
pub enum SearchError {
    #[error("threshold must be within 0.0..=1.0, got {value}")]
    InvalidThreshold { value: f64 },
}

pub type Result<T> = std::result::Result<T, SearchError>;
