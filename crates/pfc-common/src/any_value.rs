//! Polars `AnyValue` conversions.
//!
//! Spreadsheet exports mix text and numbers freely within one column, so
//! these helpers coerce a single cell to the representation a cleaning
//! step needs without failing.

use polars::prelude::AnyValue;

/// Converts a Polars `AnyValue` to its text form.
///
/// `Null` becomes an empty string. Floats keep a decimal point (`7.0`)
/// and booleans are capitalized (`True`), the way roster exports
/// already spell them.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use pfc_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
/// assert_eq!(any_to_string(AnyValue::Float64(7.0)), "7.0");
/// assert_eq!(any_to_string(AnyValue::Boolean(false)), "False");
/// assert_eq!(any_to_string(AnyValue::String("Dupré")), "Dupré");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_float32(v),
        AnyValue::Float64(v) => format_float(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => format_bool(b),
        other => {
            let s = other.to_string();
            // Display wraps some values in quotes
            if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
                s[1..s.len() - 1].to_string()
            } else {
                s
            }
        }
    }
}

/// Spells a boolean as `True` or `False`.
pub fn format_bool(b: bool) -> String {
    if b { "True" } else { "False" }.to_string()
}

/// Formats a float with the shortest digits that round-trip.
///
/// Integer-valued floats keep a trailing `.0`. Magnitudes below `1e-4`
/// or from `1e16` up use an exponent with at least two digits.
///
/// ```
/// use pfc_common::format_float;
///
/// assert_eq!(format_float(7.0), "7.0");
/// assert_eq!(format_float(12.5), "12.5");
/// assert_eq!(format_float(1e16), "1e+16");
/// assert_eq!(format_float(0.000015), "1.5e-05");
/// ```
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    from_scientific(&format!("{v:e}"))
}

/// [`format_float`] for `f32`, using the shortest `f32` digits.
pub fn format_float32(v: f32) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    from_scientific(&format!("{v:e}"))
}

/// Rewrites `LowerExp` output such as `-1.25e2` into positional or
/// exponent notation.
fn from_scientific(sci: &str) -> String {
    let (sign, unsigned) = match sci.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", sci),
    };
    let Some((mantissa, exp)) = unsigned.split_once('e') else {
        return sci.to_string();
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci.to_string();
    };
    let digits: String = mantissa.chars().filter(|ch| *ch != '.').collect();

    let body = if (-4..16).contains(&exp) {
        if exp >= 0 {
            let point = exp.unsigned_abs() as usize + 1;
            if digits.len() <= point {
                format!("{digits}{}.0", "0".repeat(point - digits.len()))
            } else {
                format!("{}.{}", &digits[..point], &digits[point..])
            }
        } else {
            let zeros = "0".repeat(exp.unsigned_abs() as usize - 1);
            format!("0.{zeros}{digits}")
        }
    } else {
        let (first, rest) = digits.split_at(1);
        let fraction = if rest.is_empty() {
            String::new()
        } else {
            format!(".{rest}")
        };
        let exp_sign = if exp < 0 { '-' } else { '+' };
        format!("{first}{fraction}e{exp_sign}{:02}", exp.unsigned_abs())
    };
    format!("{sign}{body}")
}

/// Converts an `AnyValue` to `f64`.
///
/// Numbers convert directly, booleans become `1.0`/`0.0` and strings are
/// parsed with [`parse_f64`]. Returns `None` for nulls and anything else.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Boolean(b) => Some(if b { 1.0 } else { 0.0 }),
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    }
}

/// Parses trimmed text as `f64`, returning `None` for empty or invalid input.
///
/// Accepts the usual float spellings including exponents, `inf` and `nan`.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_to_string_null() {
        assert_eq!(any_to_string(AnyValue::Null), "");
    }

    #[test]
    fn test_any_to_string_numbers() {
        assert_eq!(any_to_string(AnyValue::Int64(-12)), "-12");
        assert_eq!(any_to_string(AnyValue::UInt32(0)), "0");
        assert_eq!(any_to_string(AnyValue::Float64(1.5)), "1.5");
        assert_eq!(any_to_string(AnyValue::Float64(10.0)), "10.0");
        assert_eq!(any_to_string(AnyValue::Float64(f64::NAN)), "nan");
    }

    #[test]
    fn test_any_to_string_float32_keeps_own_precision() {
        assert_eq!(any_to_string(AnyValue::Float32(0.1)), "0.1");
        assert_eq!(any_to_string(AnyValue::Float32(2.0)), "2.0");
    }

    #[test]
    fn test_any_to_string_boolean() {
        assert_eq!(any_to_string(AnyValue::Boolean(true)), "True");
        assert_eq!(any_to_string(AnyValue::Boolean(false)), "False");
    }

    #[test]
    fn test_format_float_positional() {
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(-0.0), "-0.0");
        assert_eq!(format_float(100.0), "100.0");
        assert_eq!(format_float(-2.5), "-2.5");
        assert_eq!(format_float(1234.5678), "1234.5678");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(1e15), "1000000000000000.0");
    }

    #[test]
    fn test_format_float_exponent() {
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1.5e-5), "1.5e-05");
        assert_eq!(format_float(-2.25e100), "-2.25e+100");
    }

    #[test]
    fn test_format_float_non_finite() {
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_float32(f32::NAN), "nan");
    }

    #[test]
    fn test_any_to_f64() {
        assert_eq!(any_to_f64(AnyValue::Null), None);
        assert_eq!(any_to_f64(AnyValue::Int32(42)), Some(42.0));
        assert_eq!(any_to_f64(AnyValue::Boolean(true)), Some(1.0));
        assert_eq!(any_to_f64(AnyValue::String(" 2.5 ")), Some(2.5));
        assert_eq!(any_to_f64(AnyValue::String("deux")), None);
    }

    #[test]
    fn test_parse_f64() {
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("   "), None);
        assert_eq!(parse_f64("3.14"), Some(3.14));
        assert_eq!(parse_f64("1e3"), Some(1000.0));
        assert_eq!(parse_f64("inf"), Some(f64::INFINITY));
        assert!(parse_f64("nan").is_some_and(f64::is_nan));
        assert_eq!(parse_f64("12,5"), None);
    }
}
