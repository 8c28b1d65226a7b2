use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("header at column {column} is empty")]
    EmptyHeader { column: String },
    #[error("duplicate header '{name}' at column {column}")]
    DuplicateHeader { name: String, column: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
