//! Fuzzy search over validated rows.
//!
//! A [`SearchIndex`] borrows the rows it indexes, so it cannot outlive or
//! observe a changed dataset; a new dataset means building a new index.
//! Matching tolerance lives in [`SearchConfig`] and is fixed per index.

mod config;
mod error;
mod index;
mod score;

pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use index::{SearchHit, SearchIndex};
pub use score::{FieldMatch, match_field};
