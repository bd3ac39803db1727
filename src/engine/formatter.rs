/// Decimal places used when nothing else is configured
pub const DEFAULT_PRECISION: usize = 6;

/// Largest precision the display will honor
pub const MAX_PRECISION: usize = 15;

/// Render a result for display: fixed decimals, then trailing zeros and a
/// dangling decimal point are stripped. "2.500000" -> "2.5", "3.000000" -> "3".
pub fn format_value(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "∞" } else { "-∞" }.to_string();
    }

    let precision = precision.min(MAX_PRECISION);
    let fixed = format!("{:.*}", precision, value);
    let stripped = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };

    // -0.0000001 rounds to "-0"
    if stripped == "-0" {
        "0".to_string()
    } else {
        stripped.to_string()
    }
}
