//! Error-handling module for the crate

use thiserror::Error;

/// Errors reported by the checked aggregation functions.
///
/// The unchecked functions never produce these; they surface the same
/// conditions through the native arithmetic of the accumulator type.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An average was requested for a sequence without elements
    #[error("cannot average an empty sequence")]
    EmptySequence,
    /// Adding an element exceeded the range of the accumulator type
    #[error("numeric overflow while adding element {index}")]
    SumOverflow {
        /// Position of the element whose addition overflowed
        index: usize,
    },
}
