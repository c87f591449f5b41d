//! Computes the arithmetic mean of all input values.

use crate::datatypes::Numeric;

use super::{
    count_aggregate::CountAggregateProcessor, processor::AggregateProcessor,
    sum_aggregate::SumAggregateProcessor,
};

/// Averages values of type `R`, dividing their sum by their count in `R`.
///
/// Finishing without any input divides by zero: for floating point numbers
/// the result is NaN, for integers the division panics.
#[derive(Debug, Clone, Copy)]
pub struct AverageAggregateProcessor<R>
where
    R: Numeric,
{
    sum: SumAggregateProcessor<R>,
    count: CountAggregateProcessor<R>,
}

impl<R: Numeric> AverageAggregateProcessor<R> {
    /// Creates a processor that has not seen any value yet.
    pub fn new() -> Self {
        Self {
            sum: SumAggregateProcessor::new(),
            count: CountAggregateProcessor::new(),
        }
    }
}

impl<R: Numeric> Default for AverageAggregateProcessor<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Numeric> AggregateProcessor<R> for AverageAggregateProcessor<R> {
    type Output = R;

    fn write_aggregate_input_value(&mut self, value: R) {
        self.sum.write_aggregate_input_value(value);
        self.count.write_aggregate_input_value(value);
    }

    fn finish(&self) -> R {
        self.sum.finish() / R::from_len(self.count.finish())
    }
}
