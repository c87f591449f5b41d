//! This crate provides generic aggregation helpers over slices of
//! primitive numbers: sums (optionally widened into a larger accumulator),
//! averages, and counts.
//!
//! All functions perform a single pass over a borrowed slice and never
//! modify it. Arithmetic follows the native rules of the numeric type doing
//! the accumulation: integer sums wrap on overflow, float sums saturate to
//! infinity, and averaging an empty slice divides by zero. The `checked_*`
//! variants report these cases as [`error::Error`] instead.
//!
//! ```
//! use contalgo::{average, count, count_if, sum, sum_as};
//!
//! let values = [1, 2, 3, 4, 5];
//! assert_eq!(sum(&values), 15);
//! assert_eq!(average(&values), 3);
//! assert_eq!(average(&[1, 2]), 1);
//! assert_eq!(count(&[1, 2, 2, 3, 2], &2), 3);
//! assert_eq!(count_if(&values, |value| value % 2 == 0), 2);
//!
//! let bytes: [i8; 3] = [100, 100, 100];
//! assert_eq!(sum_as::<i64, i8>(&bytes), 300);
//! ```

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_extern_crates,
    variant_size_differences,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]

pub mod aggregates;
pub mod datatypes;
pub mod error;

pub use aggregates::{
    average, checked_average, checked_sum, checked_sum_as, count, count_if, sum, sum_as,
};
