//! Safe numeric coercion.

use pfc_common::CellValue;

/// Converts a cell to `f64`, returning `default` when it is missing or unparseable.
///
/// ```
/// use pfc_clean::safe_float;
///
/// assert_eq!(safe_float("3.14", 0.0), 3.14);
/// assert_eq!(safe_float("n/a", -1.0), -1.0);
/// assert_eq!(safe_float(None::<&str>, 0.0), 0.0);
/// ```
pub fn safe_float(value: impl CellValue, default: f64) -> f64 {
    if value.is_missing() {
        return default;
    }
    value.to_f64().unwrap_or(default)
}

/// [`safe_float`] with NaN as the default.
pub fn safe_float_or_nan(value: impl CellValue) -> f64 {
    safe_float(value, f64::NAN)
}
