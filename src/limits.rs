use num_traits::Bounded;
use crate::{Float, FloatFormat};

/// Extreme values of a numeric type, with the meanings of C++
/// `std::numeric_limits`: for floating point types `min` is the smallest
/// positive value and `lowest` the most negative one.
pub trait NumericLimits: Sized {
    fn max() -> Self;
    fn min() -> Self;
    fn lowest() -> Self;
}

/// Marks types that generic numeric code may treat like a built-in scalar.
pub trait Scalar: Copy + PartialEq + NumericLimits {
    const IS_ARITHMETIC: bool = true;
    const IS_FLOATING_POINT: bool;
}

impl<F: FloatFormat> NumericLimits for Float<F> {
    fn max() -> Self { Float::max() }
    fn min() -> Self { Float::min_positive() }
    fn lowest() -> Self { Float::lowest() }
}

impl<F: FloatFormat> Scalar for Float<F> {
    const IS_FLOATING_POINT: bool = true;
}

impl<F: FloatFormat> Bounded for Float<F> {
    fn min_value() -> Self { Float::lowest() }
    fn max_value() -> Self { Float::max() }
}

macro_rules! primitive_float {
    ($($t:ty),*) => {$(
        impl NumericLimits for $t {
            fn max() -> $t { <$t>::MAX }
            fn min() -> $t { <$t>::MIN_POSITIVE }
            fn lowest() -> $t { <$t>::MIN }
        }

        impl Scalar for $t {
            const IS_FLOATING_POINT: bool = true;
        }
    )*};
}

macro_rules! primitive_integer {
    ($($t:ty),*) => {$(
        impl NumericLimits for $t {
            fn max() -> $t { <$t>::MAX }
            fn min() -> $t { <$t>::MIN }
            fn lowest() -> $t { <$t>::MIN }
        }

        impl Scalar for $t {
            const IS_FLOATING_POINT: bool = false;
        }
    )*};
}

primitive_float!(f32, f64);
primitive_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
