use std::sync::LazyLock;

use regex::Regex;

/// Something, an `@`, something, a dot, something. No whitespace anywhere.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}
