//! Traits for implementing new aggregate operations

/// Allows aggregation of a sequence of values, delivered one at a time, into a single aggregate value.
pub trait AggregateProcessor<V> {
    /// Type of the aggregate value
    type Output;

    /// Processes the next value of the sequence and updates the internal state.
    fn write_aggregate_input_value(&mut self, value: V);

    /// Returns the resulting aggregated value of all the processed input values.
    ///
    /// Further values may be written after calling this function.
    fn finish(&self) -> Self::Output;
}
