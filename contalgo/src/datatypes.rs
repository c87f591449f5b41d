//! This module collects the traits describing how each primitive numeric type takes part in aggregation.

/// Module for defining [Numeric]
pub mod numeric;
pub use numeric::Numeric;
/// Module for defining [Widen]
pub mod widen;
pub use widen::Widen;
