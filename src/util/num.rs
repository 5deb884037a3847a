use num::BigInt;

use crate::error::{ConfigError, ConfigResult};

/// Smallest decimal exponent rendered in positional notation.
pub const POSITIONAL_MIN_EXPONENT: i32 = -4;
/// Decimal exponent from which reals switch to scientific notation.
pub const POSITIONAL_MAX_EXPONENT: i32 = 16;

/// Converts an integer literal (`-?[0-9]+`) to an arbitrary-precision
/// integer.
///
/// ## Errors
/// Returns `ConfigError::InvalidValue` if the text is not an integer at all.
///
/// ## Example
/// ```
/// use cfgxml::util::num::parse_integer_literal;
/// use num::BigInt;
///
/// assert_eq!(parse_integer_literal("-042", 1).unwrap(), BigInt::from(-42));
/// assert_eq!(parse_integer_literal("99999999999999999999", 1).unwrap().to_string(),
///            "99999999999999999999");
/// assert!(parse_integer_literal("4x", 1).is_err());
/// ```
pub fn parse_integer_literal(text: &str, line: usize) -> ConfigResult<BigInt> {
    text.parse().map_err(|_| ConfigError::InvalidValue { text: text.to_string(),
                                                        line })
}

/// Converts a decimal literal (`-?[0-9]+\.[0-9]+`) to `f64`.
///
/// Literals beyond the `f64` range saturate to infinity, the same way the
/// standard float parser does.
///
/// ## Errors
/// Returns `ConfigError::InvalidValue` if the text is not a float at all.
pub fn parse_real_literal(text: &str, line: usize) -> ConfigResult<f64> {
    text.parse().map_err(|_| ConfigError::InvalidValue { text: text.to_string(),
                                                        line })
}

/// Renders a real number in its canonical textual form.
///
/// The digits are the shortest ones that round-trip to the same `f64`.
/// Values whose decimal exponent lies in `[-4, 16)` use positional notation
/// and always carry a fractional part; everything else uses scientific
/// notation with a signed exponent of at least two digits.
///
/// ## Example
/// ```
/// use cfgxml::util::num::format_real;
///
/// assert_eq!(format_real(3.5), "3.5");
/// assert_eq!(format_real(2.0), "2.0");
/// assert_eq!(format_real(0.0001), "0.0001");
/// assert_eq!(format_real(0.00001), "1e-05");
/// assert_eq!(format_real(1e16), "1e+16");
/// assert_eq!(format_real(-1.25e20), "-1.25e+20");
/// ```
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-inf" } else { "inf" }.to_string();
    }

    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    let (sign, mantissa) = mantissa.strip_prefix('-').map_or(("", mantissa), |m| ("-", m));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();

    let body = if (POSITIONAL_MIN_EXPONENT..POSITIONAL_MAX_EXPONENT).contains(&exponent) {
        positional(&digits, exponent + 1)
    } else {
        exponential(&digits, exponent)
    };

    format!("{sign}{body}")
}

/// Lays out `digits` with the decimal point after `point` digits.
fn positional(digits: &str, point: i32) -> String {
    if point <= 0 {
        let zeros = usize::try_from(-point).unwrap_or_default();
        return format!("0.{}{digits}", "0".repeat(zeros));
    }

    let point = usize::try_from(point).unwrap_or_default();
    if point >= digits.len() {
        format!("{digits}{}.0", "0".repeat(point - digits.len()))
    } else {
        format!("{}.{}", &digits[..point], &digits[point..])
    }
}

fn exponential(digits: &str, exponent: i32) -> String {
    let (lead, rest) = digits.split_at(1);
    let sign = if exponent < 0 { '-' } else { '+' };
    let magnitude = exponent.unsigned_abs();

    if rest.is_empty() {
        format!("{lead}e{sign}{magnitude:02}")
    } else {
        format!("{lead}.{rest}e{sign}{magnitude:02}")
    }
}
