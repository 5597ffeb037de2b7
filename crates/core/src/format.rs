/// Renders `value` with exactly two fractional digits.
///
/// Values sitting exactly on a half-cent in binary (`0.125`, `-2.375`, ...) are
/// rounded away from zero. Everything else is rendered from its exact binary
/// value, so `2.675` (stored as `2.67499...`) becomes `2.67`.
pub fn format_decimal(value: f64) -> String {
    // Overflow prints as `inf`/`-inf`, not `+Inf`.
    if !value.is_finite() {
        return value.to_string();
    }

    let rendered = if is_half_cent_tie(value) {
        round_tie_away(value)
    } else {
        format!("{value:.2}")
    };

    // `-0.00` (negative zero or a tiny negative) is printed unsigned.
    match rendered.strip_prefix('-') {
        Some(unsigned) if unsigned.bytes().all(|b| b == b'0' || b == b'.') => unsigned.to_string(),
        _ => rendered,
    }
}

// A half-cent tie is k/8 with k odd. Scaling by 8 is exact, and any value large
// enough to have no fractional bits left yields an even (or infinite) product.
fn is_half_cent_tie(value: f64) -> bool {
    let eighths = value * 8.0;
    eighths.fract() == 0.0 && (eighths % 2.0).abs() == 1.0
}

// A tie has at most three fractional digits, so `{:.3}` prints it exactly and
// always ends in `125`, `375`, `625` or `875`. Dropping the `5` and bumping the
// kept `2`/`7` rounds the magnitude up without ever carrying.
fn round_tie_away(value: f64) -> String {
    let exact = format!("{:.3}", value.abs());
    let mut digits = exact.into_bytes();
    digits.pop();
    if let Some(last) = digits.last_mut() {
        *last += 1;
    }

    let magnitude: String = digits.into_iter().map(char::from).collect();
    if value.is_sign_negative() {
        format!("-{magnitude}")
    } else {
        magnitude
    }
}
