/// Parses as a finite decimal real number; NaN and infinities fail.
///
/// Only decimal notation (with optional exponent) is accepted. Hex, octal
/// and binary literals such as `0x1F` or `0b101` are not numbers here, and
/// neither are digit-group separators.
pub fn is_numeric(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok_and(f64::is_finite)
}
