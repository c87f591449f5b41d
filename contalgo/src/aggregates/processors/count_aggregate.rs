//! Counts the input values. Always returns a [usize], independent of the input value type.

use std::marker::PhantomData;

use super::processor::AggregateProcessor;

/// Counts the values written to it, ignoring the values themselves.
#[derive(Debug, Clone, Copy)]
pub struct CountAggregateProcessor<V> {
    current_count: usize,
    phantom_data: PhantomData<V>,
}

impl<V> CountAggregateProcessor<V> {
    /// Creates a processor that has not counted anything yet.
    pub fn new() -> Self {
        Self {
            current_count: 0,
            phantom_data: PhantomData,
        }
    }
}

impl<V> Default for CountAggregateProcessor<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> AggregateProcessor<V> for CountAggregateProcessor<V> {
    type Output = usize;

    fn write_aggregate_input_value(&mut self, _value: V) {
        self.current_count += 1;
    }

    fn finish(&self) -> usize {
        self.current_count
    }
}
