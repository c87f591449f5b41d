//! This module contains the streaming aggregate processors, which fold values one at a time into a single output value.

pub mod average_aggregate;
pub mod checked_sum_aggregate;
pub mod count_aggregate;
pub mod processor;
pub mod sum_aggregate;

pub use average_aggregate::AverageAggregateProcessor;
pub use checked_sum_aggregate::CheckedSumAggregateProcessor;
pub use count_aggregate::CountAggregateProcessor;
pub use processor::AggregateProcessor;
pub use sum_aggregate::SumAggregateProcessor;
