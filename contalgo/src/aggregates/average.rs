//! Arithmetic means of slices.

use std::any::type_name;

use num::traits::AsPrimitive;

use crate::{
    datatypes::{Numeric, Widen},
    error::Error,
};

use super::sum::{checked_sum_as, sum_as};

/// Returns the average value of `a` as type `R`.
pub(crate) fn average_as<R, T>(a: &[T]) -> R
where
    R: Numeric,
    T: AsPrimitive<R>,
{
    sum_as::<R, T>(a) / R::from_len(a.len())
}

/// Returns the average value of `a`.
///
/// The sum is computed in the accumulator type [`Widen::Accumulator`] associated with `T`
/// and the quotient is converted back to `T`. For integers the quotient truncates toward zero.
///
/// The average of an empty slice divides by zero in the accumulator:
/// floating point types return NaN, integer types panic.
/// Use [`checked_average`] to get an error instead.
///
/// Complexity: O(len(a)).
pub fn average<T>(a: &[T]) -> T
where
    T: Widen + AsPrimitive<T::Accumulator>,
{
    log::trace!(
        "averaging {} values of {} in {}",
        a.len(),
        type_name::<T>(),
        type_name::<T::Accumulator>()
    );

    AsPrimitive::<T>::as_(average_as::<T::Accumulator, T>(a))
}

/// Returns the average value of `a`, like [`average`], but reports the cases
/// in which [`average`] would divide by zero or overflow its accumulator.
///
/// # Errors
/// Returns [`Error::EmptySequence`] if `a` is empty and [`Error::SumOverflow`]
/// if the sum does not fit into the accumulator of `T`.
pub fn checked_average<T>(a: &[T]) -> Result<T, Error>
where
    T: Widen + AsPrimitive<T::Accumulator>,
{
    if a.is_empty() {
        log::debug!("requested average of an empty sequence of {}", type_name::<T>());
        return Err(Error::EmptySequence);
    }

    let total = checked_sum_as::<T::Accumulator, T>(a)?;
    let count = <T::Accumulator as Numeric>::from_len(a.len());

    Ok(AsPrimitive::<T>::as_(total / count))
}

#[cfg(test)]
mod test {
    use super::{average, average_as, checked_average};
    use crate::error::Error;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;
    use test_log::test;

    #[test]
    fn average_small() {
        assert_eq!(average(&[1, 2, 3, 4, 5]), 3);
        assert_eq!(average(&[1, 2]), 1);
        assert_eq!(average(&[-1, -2]), -1);
        assert_eq!(average(&[1.0f64, 2.0]), 1.5);
    }

    #[test]
    fn average_as_divides_in_target() {
        assert_eq!(average_as::<f64, i32>(&[1, 2]), 1.5);
        assert_eq!(average_as::<i64, u8>(&[255, 255, 0]), 170);
    }

    #[test]
    fn narrow_integers_widen() {
        assert_eq!(average(&[i8::MAX, i8::MAX]), i8::MAX);
        assert_eq!(average(&[i8::MIN, i8::MIN, i8::MIN]), i8::MIN);
        assert_eq!(average::<u8>(&[200, 100]), 150);
        assert_eq!(average(&[u32::MAX, u32::MAX]), u32::MAX);
        assert_eq!(average::<isize>(&[-3, 4]), 0);
    }

    #[test]
    fn wide_integers_wrap() {
        // u64 and i64 accumulate in themselves
        assert_eq!(average(&[u64::MAX, 1]), 0);
        assert_eq!(average(&[i64::MAX, 1]), i64::MIN / 2);
    }

    #[test]
    fn floats_widen() {
        assert_eq!(average(&[f32::MAX, f32::MAX]), f32::MAX);
        assert_eq!(average(&[f64::MAX, f64::MAX]), f64::INFINITY);
    }

    #[test]
    fn empty_float_is_nan() {
        assert!(average::<f64>(&[]).is_nan());
        assert!(average::<f32>(&[]).is_nan());
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn empty_integer_divides_by_zero() {
        average::<i32>(&[]);
    }

    #[test]
    fn checked_average_reports_errors() {
        assert_eq!(checked_average::<i32>(&[]), Err(Error::EmptySequence));
        assert_eq!(checked_average::<f64>(&[]), Err(Error::EmptySequence));
        assert_eq!(
            checked_average(&[u64::MAX, 1]),
            Err(Error::SumOverflow { index: 1 })
        );
        assert_eq!(checked_average(&[i8::MAX, i8::MAX]), Ok(i8::MAX));
        assert_eq!(checked_average(&[f32::MAX, f32::MAX]), Ok(f32::MAX));
    }

    #[quickcheck]
    #[cfg_attr(miri, ignore)]
    fn average_truncates_i32(values: Vec<i32>) -> TestResult {
        if values.is_empty() {
            return TestResult::discard();
        }

        let total: i64 = values.iter().map(|&value| i64::from(value)).sum();
        let expected = total / values.len() as i64;

        TestResult::from_bool(i64::from(average(&values)) == expected)
    }

    #[quickcheck]
    #[cfg_attr(miri, ignore)]
    fn average_truncates_u16(values: Vec<u16>) -> TestResult {
        if values.is_empty() {
            return TestResult::discard();
        }

        let total: u64 = values.iter().map(|&value| u64::from(value)).sum();
        let expected = total / values.len() as u64;

        TestResult::from_bool(u64::from(average(&values)) == expected)
    }

    #[quickcheck]
    #[cfg_attr(miri, ignore)]
    fn average_f32_matches_double_mean(values: Vec<f32>) -> TestResult {
        let values: Vec<f32> = values.into_iter().filter(|value| value.is_finite()).collect();
        if values.is_empty() {
            return TestResult::discard();
        }

        let total: f64 = values.iter().map(|&value| f64::from(value)).sum();
        #[allow(clippy::cast_possible_truncation)]
        let expected = (total / values.len() as f64) as f32;
        let actual = average(&values);

        let ulp = if expected == 0.0 {
            f32::MIN_POSITIVE
        } else {
            expected.abs() * f32::EPSILON
        };

        TestResult::from_bool((actual - expected).abs() <= ulp)
    }

    #[quickcheck]
    #[cfg_attr(miri, ignore)]
    fn checked_average_agrees_with_average(values: Vec<i16>) -> bool {
        match checked_average(&values) {
            Ok(mean) => mean == average(&values),
            Err(error) => values.is_empty() && error == Error::EmptySequence,
        }
    }
}
