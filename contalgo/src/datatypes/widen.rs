use num::traits::AsPrimitive;

use super::Numeric;

/// Associates each primitive number with the accumulator used to average values of that type.
///
/// Narrow integers are averaged in [`i64`], [`u64`] stays [`u64`], and
/// floating point numbers are averaged in [`f64`]. Types that are already as wide
/// as any candidate accumulate in themselves.
///
/// Functions converting values into the accumulator additionally require
/// `T: AsPrimitive<T::Accumulator>`.
pub trait Widen: Numeric {
    /// Type in which the sum of the sequence is computed
    type Accumulator: Numeric + AsPrimitive<Self>;
}

macro_rules! widen {
    ($($ty:ty),* => $accumulator:ty) => {
        $(
            impl Widen for $ty {
                type Accumulator = $accumulator;
            }
        )*
    };
}

widen!(i8, i16, i32, isize, u8, u16, u32 => i64);
widen!(u64 => u64);
widen!(f32, f64 => f64);
widen!(i64 => i64);
widen!(usize => usize);
widen!(i128 => i128);
widen!(u128 => u128);
