//! The [`CellValue`] abstraction over raw spreadsheet cells.

use polars::prelude::AnyValue;

use crate::any_value::{
    any_to_f64, any_to_string, format_bool, format_float, format_float32, parse_f64,
};

/// A raw cell value of unknown type.
///
/// Cleaning functions accept anything implementing this trait, so the
/// same call works for a `&str` typed by hand, an `Option<String>` read
/// from a CSV reader, or an `AnyValue` pulled out of a `DataFrame`.
pub trait CellValue {
    /// Whether the value is a missing marker: absent, null or a NaN float.
    fn is_missing(&self) -> bool;

    /// Text form of the value. Absent and null values are empty.
    fn to_cell_string(&self) -> String;

    /// Attempts a conversion to `f64`.
    fn to_f64(&self) -> Option<f64>;
}

impl CellValue for str {
    fn is_missing(&self) -> bool {
        false
    }

    fn to_cell_string(&self) -> String {
        self.to_string()
    }

    fn to_f64(&self) -> Option<f64> {
        parse_f64(self)
    }
}

impl CellValue for String {
    fn is_missing(&self) -> bool {
        false
    }

    fn to_cell_string(&self) -> String {
        self.clone()
    }

    fn to_f64(&self) -> Option<f64> {
        parse_f64(self)
    }
}

impl<T: CellValue + ?Sized> CellValue for &T {
    fn is_missing(&self) -> bool {
        (**self).is_missing()
    }

    fn to_cell_string(&self) -> String {
        (**self).to_cell_string()
    }

    fn to_f64(&self) -> Option<f64> {
        (**self).to_f64()
    }
}

impl<T: CellValue> CellValue for Option<T> {
    fn is_missing(&self) -> bool {
        self.as_ref().is_none_or(CellValue::is_missing)
    }

    fn to_cell_string(&self) -> String {
        self.as_ref()
            .map(CellValue::to_cell_string)
            .unwrap_or_default()
    }

    fn to_f64(&self) -> Option<f64> {
        self.as_ref().and_then(CellValue::to_f64)
    }
}

impl CellValue for AnyValue<'_> {
    fn is_missing(&self) -> bool {
        match self {
            AnyValue::Null => true,
            AnyValue::Float32(v) => v.is_nan(),
            AnyValue::Float64(v) => v.is_nan(),
            _ => false,
        }
    }

    fn to_cell_string(&self) -> String {
        any_to_string(self.clone())
    }

    fn to_f64(&self) -> Option<f64> {
        any_to_f64(self.clone())
    }
}

impl CellValue for f64 {
    fn is_missing(&self) -> bool {
        self.is_nan()
    }

    fn to_cell_string(&self) -> String {
        format_float(*self)
    }

    fn to_f64(&self) -> Option<f64> {
        Some(*self)
    }
}

impl CellValue for f32 {
    fn is_missing(&self) -> bool {
        self.is_nan()
    }

    fn to_cell_string(&self) -> String {
        format_float32(*self)
    }

    fn to_f64(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl CellValue for bool {
    fn is_missing(&self) -> bool {
        false
    }

    fn to_cell_string(&self) -> String {
        format_bool(*self)
    }

    fn to_f64(&self) -> Option<f64> {
        Some(if *self { 1.0 } else { 0.0 })
    }
}

macro_rules! impl_cell_value_for_int {
    ($($ty:ty),*) => {
        $(
            impl CellValue for $ty {
                fn is_missing(&self) -> bool {
                    false
                }

                fn to_cell_string(&self) -> String {
                    self.to_string()
                }

                #[allow(clippy::cast_precision_loss)]
                fn to_f64(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

impl_cell_value_for_int!(i32, i64, u32, u64);
