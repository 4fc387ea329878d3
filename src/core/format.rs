//! Display formatting for computed values and live entries.

use super::number::parse_number;
use crate::config::CalculatorConfig;

/// Format a computed value for the display.
///
/// - zero of either sign is `"0"`
/// - magnitudes at or above `exponential_upper`, or nonzero and below
///   `exponential_lower`, use exponential notation with
///   `exponential_fraction_digits` mantissa digits and a signed exponent
/// - everything else uses the shortest round-trip decimal form, rounded to
///   `rounding_precision` significant digits when that form is longer than
///   `max_display_length`
///
/// # Example
///
/// ```rust
/// use reckoner::config::CalculatorConfig;
/// use reckoner::core::format_number;
///
/// let config = CalculatorConfig::default();
/// assert_eq!(format_number(-0.0, &config), "0");
/// assert_eq!(format_number(1e16, &config), "1.000000e+16");
/// assert_eq!(format_number(0.1 + 0.2, &config), "0.3");
/// ```
pub fn format_number(value: f64, config: &CalculatorConfig) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    let magnitude = value.abs();
    if magnitude >= config.exponential_upper() || magnitude < config.exponential_lower() {
        return to_exponential(value, config.exponential_fraction_digits());
    }

    let plain = value.to_string();
    if plain.len() > config.max_display_length() {
        return round_to_significant(value, config.rounding_precision()).to_string();
    }

    plain
}

/// Format the live entry string for the display.
///
/// A trailing point is kept as typed so `"12."` stays visible while the user
/// is mid-keystroke. Anything unparseable shows as `"0"`.
pub fn format_display_value(entry: &str, config: &CalculatorConfig) -> String {
    if entry.ends_with('.') {
        return entry.to_string();
    }

    match parse_number(entry) {
        Some(value) => format_number(value, config),
        None => "0".to_string(),
    }
}

/// Enough fraction digits to spell out any finite double exactly.
const EXACT_DIGITS: usize = 800;

fn to_exponential(value: f64, fraction_digits: usize) -> String {
    let (digits, exponent) = round_half_up(value.abs(), fraction_digits + 1);
    let sign = if value < 0.0 { "-" } else { "" };
    let (lead, rest) = digits.split_at(1);
    let exponent_sign = if exponent < 0 { "-" } else { "+" };

    if rest.is_empty() {
        format!("{sign}{lead}e{exponent_sign}{}", exponent.abs())
    } else {
        format!("{sign}{lead}.{rest}e{exponent_sign}{}", exponent.abs())
    }
}

fn round_to_significant(value: f64, precision: usize) -> f64 {
    let (digits, exponent) = round_half_up(value.abs(), precision);
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}0.{digits}e{}", exponent + 1)
        .parse()
        .unwrap_or(value)
}

/// Round `magnitude` to `significant` digits, ties away from zero.
///
/// Returns the kept digits and the decimal exponent of the first one. The
/// decision is made on the exact decimal expansion of the double, so a value
/// sitting exactly on the halfway point always rounds up.
fn round_half_up(magnitude: f64, significant: usize) -> (String, i32) {
    let exact = format!("{:.*e}", EXACT_DIGITS, magnitude);
    let (mantissa, exponent) = exact.split_once('e').unwrap_or((exact.as_str(), "0"));
    let mut exponent: i32 = exponent.parse().unwrap_or(0);

    let digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    let significant = significant.clamp(1, digits.len());
    let mut kept = digits[..significant].to_vec();

    if digits.get(significant).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
            kept.pop();
            exponent += 1;
        }
    }

    (kept.into_iter().map(char::from).collect(), exponent)
}
