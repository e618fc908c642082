//! Fixed-point decimal formatting.
//!
//! Rounds the exact binary value of an `f64`. Only values that sit exactly
//! halfway between two outputs are ties, and ties round away from zero.
//! `format!("{:.1}")` breaks the same ties to even, so `0.25` would print
//! as `0.2` there and `0.3` here.

/// Format `value` with exactly `digits` fractional digits.
///
/// Negative values, including those that round to zero, keep their '-'
/// sign; negative zero does not.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs();
    let body = if is_tie(magnitude, digits) {
        let scale = 10f64.powi(digits as i32);
        let up = (magnitude * scale + 0.5).floor();
        format!("{:.*}", digits, up / scale)
    } else {
        format!("{:.*}", digits, magnitude)
    };

    if value < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

/// Round to one decimal place using [`to_fixed`] rounding.
pub fn round1(value: f64) -> f64 {
    to_fixed(value, 1).parse().unwrap_or(value)
}

// A binary value is exactly halfway at `digits` places iff it is an odd
// multiple of 2^-(digits + 1). Scaling by a power of two is exact.
fn is_tie(magnitude: f64, digits: usize) -> bool {
    let scaled = magnitude * 2f64.powi(digits as i32 + 1);
    scaled.fract() == 0.0 && scaled % 2.0 == 1.0
}
