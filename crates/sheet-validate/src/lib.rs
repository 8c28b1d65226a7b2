//! Spreadsheet row validation.
//!
//! Validation is all-or-nothing: [`validate_sheet`] either returns every
//! [`ValidationError`] found in the upload or a sorted [`ValidatedDataset`],
//! never both.
//!
//! # Example
//!
//! ```ignore
//! use sheet_validate::{ValidationOutcome, validate_sheet};
//!
//! match validate_sheet(&sheet) {
//!     ValidationOutcome::Valid(dataset) => println!("{} rows", dataset.len()),
//!     ValidationOutcome::Invalid(errors) => {
//!         for error in &errors {
//!             eprintln!("{error}");
//!         }
//!     }
//! }
//! ```

pub mod checks;
mod dataset;
mod engine;
mod issue;
mod rules;
mod sort;
mod summary;

pub use dataset::{ValidatedDataset, ValidationOutcome};
pub use engine::{validate, validate_records, validate_sheet};
pub use issue::{ErrorKind, ValidationError};
pub use rules::{ColumnRules, RuleKind, RuleSet, classify};
pub use sort::{choose_sort_column, sort_records};
pub use summary::ValidationSummary;
