//! Integer coercion of numeric `DataFrame` columns.
//!
//! Stat sheets arrive with goals, minutes and cards as floats, usually
//! because a single blank cell forced the whole column to `Float64`.
//! [`safe_int_numeric_only`] turns every numeric column into `Int64`.

use polars::prelude::{Column, DataFrame, DataType, NamedFrom, PlSmallStr, Series};

use crate::error::Result;

/// Options for [`safe_int_numeric_only`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerizeOptions {
    /// Round floats to the nearest integer (ties to even) before casting.
    /// When false the fractional part is truncated toward zero.
    /// Default: true.
    pub round_first: bool,
}

impl Default for IntegerizeOptions {
    fn default() -> Self {
        Self { round_first: true }
    }
}

impl IntegerizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_round_first(mut self, round_first: bool) -> Self {
        self.round_first = round_first;
        self
    }
}

fn is_integer_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

fn is_float_dtype(dtype: &DataType) -> bool {
    matches!(dtype, DataType::Float32 | DataType::Float64)
}

/// Returns a copy of `df` with every numeric column cast to `Int64`.
///
/// Floats are rounded first when `options.round_first` is set. Nulls and
/// NaN become 0. Infinities and unsigned values above `i64::MAX`
/// saturate to the `i64` bounds. Boolean,
/// string and other columns are left untouched, and a frame with no rows
/// or no columns comes back unchanged.
///
/// ```
/// use polars::prelude::*;
/// use pfc_clean::{IntegerizeOptions, safe_int_numeric_only};
///
/// let df = df!("goals" => [Some(1.6), None, Some(2.5)]).unwrap();
/// let out = safe_int_numeric_only(&df, IntegerizeOptions::default()).unwrap();
/// let goals: Vec<Option<i64>> = out.column("goals").unwrap().i64().unwrap().into_iter().collect();
/// assert_eq!(goals, vec![Some(2), Some(0), Some(2)]);
/// ```
pub fn safe_int_numeric_only(df: &DataFrame, options: IntegerizeOptions) -> Result<DataFrame> {
    if df.height() == 0 || df.width() == 0 {
        return Ok(df.clone());
    }

    let numeric: Vec<PlSmallStr> = df
        .get_columns()
        .iter()
        .filter(|col| is_integer_dtype(col.dtype()) || is_float_dtype(col.dtype()))
        .map(|col| col.name().clone())
        .collect();

    let mut out = df.clone();
    for name in numeric {
        let values = integerize_column(out.column(name.as_str())?, options)?;
        tracing::trace!(column = %name, "integerized numeric column");
        out.with_column(Series::new(name, values))?;
    }
    Ok(out)
}

fn integerize_column(column: &Column, options: IntegerizeOptions) -> Result<Vec<i64>> {
    if column.dtype() == &DataType::UInt64 {
        let mut saturated = 0_usize;
        let values = column
            .u64()?
            .into_iter()
            .map(|value| match value {
                Some(v) => i64::try_from(v).unwrap_or_else(|_| {
                    saturated += 1;
                    i64::MAX
                }),
                None => 0,
            })
            .collect();
        if saturated > 0 {
            tracing::warn!(
                column = %column.name(),
                saturated,
                "unsigned values above i64::MAX clamped"
            );
        }
        return Ok(values);
    }

    if is_integer_dtype(column.dtype()) {
        let cast = column.cast(&DataType::Int64)?;
        return Ok(cast.i64()?.into_iter().map(Option::unwrap_or_default).collect());
    }

    let cast = column.cast(&DataType::Float64)?;
    let values = cast
        .f64()?
        .into_iter()
        .map(|value| float_to_int(value, options.round_first))
        .collect();
    Ok(values)
}

/// Missing and NaN map to 0. The `as` cast truncates toward zero and
/// saturates at the `i64` bounds.
#[allow(clippy::cast_possible_truncation)]
fn float_to_int(value: Option<f64>, round_first: bool) -> i64 {
    match value {
        Some(v) if !v.is_nan() => {
            if round_first {
                v.round_ties_even() as i64
            } else {
                v as i64
            }
        }
        _ => 0,
    }
}
