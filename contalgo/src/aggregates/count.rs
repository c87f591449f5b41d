//! Counting elements of slices.

use super::processors::{AggregateProcessor, CountAggregateProcessor};

/// Returns the number of elements in `a` equal to `x`.
///
/// Complexity: O(len(a)).
pub fn count<T: PartialEq>(a: &[T], x: &T) -> usize {
    let mut processor = CountAggregateProcessor::new();
    for value in a.iter().filter(|&value| value == x) {
        processor.write_aggregate_input_value(value);
    }

    processor.finish()
}

/// Returns the number of elements in `a` for which `pred` returns `true`.
///
/// `pred` is called exactly once per element, in order.
///
/// Complexity: O(len(a)).
pub fn count_if<T, P>(a: &[T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut processor = CountAggregateProcessor::new();
    for value in a {
        if pred(value) {
            processor.write_aggregate_input_value(value);
        }
    }

    processor.finish()
}
