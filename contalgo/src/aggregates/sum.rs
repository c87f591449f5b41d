//! Sums of slices, optionally accumulated in a wider type.

use num::traits::AsPrimitive;

use crate::{datatypes::Numeric, error::Error};

use super::processors::{AggregateProcessor, CheckedSumAggregateProcessor, SumAggregateProcessor};

/// Sums all elements of `a`, converting each of them to `R` before adding.
///
/// Useful when `T` is too small to hold the result. The sum of an empty slice
/// is zero. Overflow in `R` is not detected: integers wrap, floats become infinite.
///
/// Complexity: O(len(a)).
///
/// ```
/// use contalgo::sum_as;
/// assert_eq!(sum_as::<u32, u8>(&[200, 200]), 400);
/// ```
pub fn sum_as<R, T>(a: &[T]) -> R
where
    R: Numeric,
    T: AsPrimitive<R>,
{
    let mut processor = SumAggregateProcessor::<R>::new();
    for &value in a {
        processor.write_aggregate_input_value(value.as_());
    }

    processor.finish()
}

/// Sums all elements of `a` in their own type.
///
/// Use [`sum_as`] if `T` cannot hold the result.
///
/// Complexity: O(len(a)).
pub fn sum<T: Numeric>(a: &[T]) -> T {
    sum_as::<T, T>(a)
}

/// Sums all elements of `a` in `R`, like [`sum_as`], but reports overflow.
///
/// # Errors
/// Returns [`Error::SumOverflow`] with the index of the first element whose
/// addition left the range of `R`.
pub fn checked_sum_as<R, T>(a: &[T]) -> Result<R, Error>
where
    R: Numeric,
    T: AsPrimitive<R>,
{
    let mut processor = CheckedSumAggregateProcessor::<R>::new();
    for &value in a {
        processor.write_aggregate_input_value(value.as_());

        if processor.overflowed() {
            break;
        }
    }

    processor.finish()
}

/// Sums all elements of `a` in their own type, like [`sum`], but reports overflow.
///
/// # Errors
/// Returns [`Error::SumOverflow`] if the sum does not fit into `T`.
pub fn checked_sum<T: Numeric>(a: &[T]) -> Result<T, Error> {
    checked_sum_as::<T, T>(a)
}
