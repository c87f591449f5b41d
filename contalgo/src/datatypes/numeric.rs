use num::{traits::AsPrimitive, Zero};
use std::{fmt::Debug, ops::Div};

/// Trait representing the primitive numbers that can serve as an aggregation accumulator.
///
/// Conversions between widths go through [`AsPrimitive`], i.e. they follow the
/// semantics of an `as` cast.
pub trait Numeric:
    Copy + Debug + PartialEq + PartialOrd + Zero + Div<Output = Self> + AsPrimitive<Self> + 'static
{
    /// Adds `value` following the native overflow rule of the type.
    ///
    /// Integers wrap around, floating point numbers saturate to infinity.
    fn accumulate(self, value: Self) -> Self;

    /// Adds `value`, returning `None` if the result leaves the range of the type.
    ///
    /// For floating point numbers this means a non-finite result computed from finite operands.
    fn checked_accumulate(self, value: Self) -> Option<Self>;

    /// Converts a sequence length into this type.
    fn from_len(len: usize) -> Self;
}

macro_rules! numeric_integer {
    ($($ty:ty),*) => {
        $(
            impl Numeric for $ty {
                fn accumulate(self, value: Self) -> Self {
                    self.wrapping_add(value)
                }

                fn checked_accumulate(self, value: Self) -> Option<Self> {
                    self.checked_add(value)
                }

                fn from_len(len: usize) -> Self {
                    <usize as AsPrimitive<$ty>>::as_(len)
                }
            }
        )*
    };
}

macro_rules! numeric_float {
    ($($ty:ty),*) => {
        $(
            impl Numeric for $ty {
                fn accumulate(self, value: Self) -> Self {
                    self + value
                }

                fn checked_accumulate(self, value: Self) -> Option<Self> {
                    let total = self + value;

                    if total.is_finite() || !self.is_finite() || !value.is_finite() {
                        Some(total)
                    } else {
                        None
                    }
                }

                fn from_len(len: usize) -> Self {
                    <usize as AsPrimitive<$ty>>::as_(len)
                }
            }
        )*
    };
}

numeric_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
numeric_float!(f32, f64);
