//! Shared utilities for the roster cleaning crates.
//!
//! Spreadsheet cells arrive as text, numbers, nulls or nothing at all.
//! [`CellValue`] gives every cleaning function a single way to look at
//! them, and the `any_value` helpers convert Polars `AnyValue`s.

pub mod any_value;
mod cell;

pub use any_value::{
    any_to_f64, any_to_string, format_bool, format_float, format_float32, parse_f64,
};
pub use cell::CellValue;
