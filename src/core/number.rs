//! Number parsing and validation.
//!
//! Entries are parsed by longest numeric prefix, so an in-progress entry such
//! as `"12."` reads as `12` and a message such as `"Number too large"` reads
//! as nothing at all.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Longest numeric prefix: sign, then `Infinity` or a decimal mantissa
    /// with an exponent that only counts when it has digits.
    static ref NUMERIC_PREFIX: Regex = Regex::new(
        r"^\s*([+-])?(?:(Infinity)|((?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?))"
    ).unwrap();
}

/// Largest integer a 64-bit double can represent alongside all its
/// predecessors: 2^53 - 1.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Negation of [`MAX_SAFE_INTEGER`].
pub const MIN_SAFE_INTEGER: f64 = -9_007_199_254_740_991.0;

/// Parse the longest numeric prefix of `input`.
///
/// Accepts optional leading whitespace, an optional sign, then either
/// `Infinity` or a decimal mantissa with an optional exponent. Trailing
/// characters are ignored. Returns `None` when no digits were found.
///
/// # Example
///
/// ```rust
/// use reckoner::core::parse_number;
///
/// assert_eq!(parse_number("12."), Some(12.0));
/// assert_eq!(parse_number("9.000000e+15"), Some(9e15));
/// assert_eq!(parse_number("12abc"), Some(12.0));
/// assert_eq!(parse_number("Cannot divide by zero"), None);
/// ```
pub fn parse_number(input: &str) -> Option<f64> {
    let caps = NUMERIC_PREFIX.captures(input)?;
    let sign = caps.get(1).map_or("", |m| m.as_str());

    if caps.get(2).is_some() {
        return Some(if sign == "-" {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let literal = caps.get(3)?.as_str();
    format!("{sign}{literal}").parse().ok()
}

/// Check that a computed value is safe to show.
///
/// Valid means not NaN, finite, and inside
/// `[MIN_SAFE_INTEGER, MAX_SAFE_INTEGER]`.
pub fn is_valid_number(value: f64) -> bool {
    !value.is_nan()
        && value.is_finite()
        && (MIN_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&value)
}

/// Count the decimal digit characters in `entry`.
pub fn digit_count(entry: &str) -> usize {
    entry.chars().filter(char::is_ascii_digit).count()
}
