//! Field validators.
//!
//! Each check is a pure predicate over a stringified, trimmed cell value.
//! Blank detection runs before any of them and short-circuits the cell.

mod dates;
mod email;
mod numeric;
mod phone;
pub(crate) mod unique;

pub use dates::is_valid_date;
pub use email::is_valid_email;
pub use numeric::is_numeric;
pub use phone::is_valid_phone;

use sheet_model::CellValue;

use crate::issue::Violation;
use crate::rules::RuleKind;

/// True when a cell is absent, empty, or whitespace-only.
pub fn is_blank(value: &CellValue) -> bool {
    value.is_blank()
}

/// Run one field rule against a normalized value.
///
/// Identity is not a field rule and always passes here.
pub(crate) fn check(rule: RuleKind, value: &str) -> Option<Violation> {
    match rule {
        RuleKind::Email if !is_valid_email(value) => Some(Violation::InvalidEmail {
            value: value.to_string(),
        }),
        RuleKind::Phone if !is_valid_phone(value) => Some(Violation::InvalidPhone {
            value: value.to_string(),
        }),
        RuleKind::Numeric if !is_numeric(value) => Some(Violation::NotNumeric {
            value: value.to_string(),
        }),
        RuleKind::Date if !is_valid_date(value) => Some(Violation::InvalidDate {
            value: value.to_string(),
        }),
        _ => None,
    }
}
