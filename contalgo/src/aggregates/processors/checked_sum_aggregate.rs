//! Computes the sum of all input values, detecting overflow.

use crate::{datatypes::Numeric, error::Error};

use super::processor::AggregateProcessor;

/// Sums values of type `R` and remembers the first value whose addition overflowed.
///
/// Once an overflow has been recorded, further values are counted but no longer added.
#[derive(Debug, Clone, Copy)]
pub struct CheckedSumAggregateProcessor<R>
where
    R: Numeric,
{
    current_sum: R,
    processed: usize,
    overflow_index: Option<usize>,
}

impl<R: Numeric> CheckedSumAggregateProcessor<R> {
    /// Creates a processor whose sum starts at zero.
    pub fn new() -> Self {
        Self {
            current_sum: R::zero(),
            processed: 0,
            overflow_index: None,
        }
    }

    /// Returns whether an overflow has been recorded.
    pub fn overflowed(&self) -> bool {
        self.overflow_index.is_some()
    }
}

impl<R: Numeric> Default for CheckedSumAggregateProcessor<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Numeric> AggregateProcessor<R> for CheckedSumAggregateProcessor<R> {
    type Output = Result<R, Error>;

    fn write_aggregate_input_value(&mut self, value: R) {
        if self.overflow_index.is_none() {
            match self.current_sum.checked_accumulate(value) {
                Some(sum) => self.current_sum = sum,
                None => {
                    log::debug!(
                        "overflow adding {value:?} to {:?} at index {}",
                        self.current_sum,
                        self.processed
                    );
                    self.overflow_index = Some(self.processed);
                }
            }
        }

        self.processed += 1;
    }

    fn finish(&self) -> Result<R, Error> {
        match self.overflow_index {
            Some(index) => Err(Error::SumOverflow { index }),
            None => Ok(self.current_sum),
        }
    }
}
