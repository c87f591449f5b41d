//! Aggregation of slices of primitive numbers into a single value.
//!
//! The functions in [`sum`](mod@sum), [`average`](mod@average) and [`count`](mod@count) each perform one pass over the input,
//! feeding the values into one of the [`processors`]. None of them modifies the input.

pub mod average;
pub mod count;
pub mod processors;
pub mod sum;

pub use average::{average, checked_average};
pub use count::{count, count_if};
pub use sum::{checked_sum, checked_sum_as, sum, sum_as};
