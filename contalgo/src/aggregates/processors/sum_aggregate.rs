//! Computes the sum of all input values.

use crate::datatypes::Numeric;

use super::processor::AggregateProcessor;

/// Sums values of type `R`, following the native overflow rule of `R`.
#[derive(Debug, Clone, Copy)]
pub struct SumAggregateProcessor<R>
where
    R: Numeric,
{
    current_sum: R,
}

impl<R: Numeric> SumAggregateProcessor<R> {
    /// Creates a processor whose sum starts at zero.
    pub fn new() -> Self {
        Self {
            current_sum: R::zero(),
        }
    }
}

impl<R: Numeric> Default for SumAggregateProcessor<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Numeric> AggregateProcessor<R> for SumAggregateProcessor<R> {
    type Output = R;

    fn write_aggregate_input_value(&mut self, value: R) {
        self.current_sum = self.current_sum.accumulate(value);
    }

    fn finish(&self) -> R {
        self.current_sum
    }
}
