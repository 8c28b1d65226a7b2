/// Exactly ten digits once every non-digit is stripped.
pub fn is_valid_phone(value: &str) -> bool {
    value.chars().filter(char::is_ascii_digit).count() == 10
}
