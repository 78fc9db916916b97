//! Software floating point numbers made of an integer mantissa and a signed
//! integer exponent joined through a configurable base.
//!
//! The integer types, the base and the bounds of both components are chosen
//! at compile time through a [`FloatFormat`]. Values are kept in normalized
//! form: the mantissa holds as many base digits as its bounds allow, which
//! frees the pairs with a zero mantissa to encode the special values.
//!
//! | mantissa | exponent | value |
//! |----------|----------|-------|
//! | 0 | 0 | zero |
//! | 0 | 1 | positive infinity |
//! | 0 | 2 | negative infinity |
//! | 0 | 3 | not a number |
//!
//! ```
//! use radixfloat::{Binary, Float};
//!
//! let f = Float::<Binary<i16, i8>>::new(3, 0);
//! assert_eq!((f.mantissa(), f.exponent()), (24576, -13));
//!
//! let huge = Float::<Binary<i16, i8>>::new(1, 200);
//! assert!(huge.is_infinite());
//! ```

mod constant;
mod constructor;
mod error;
mod format;
mod getter;
mod limits;
mod util;

use std::fmt;
use std::marker::PhantomData;

pub use error::FormatError;
pub use format::{validate, Binary, Decimal, FloatFormat};
pub use limits::{NumericLimits, Scalar};

/// A floating point value laid out by the format `F`.
///
/// Values are immutable. Equality compares the stored mantissa and exponent,
/// so two not-a-number values are equal to each other.
pub struct Float<F: FloatFormat> {
    mantissa: F::Mantissa,
    exponent: F::Exponent,
    format: PhantomData<fn() -> F>,
}

impl<F: FloatFormat> Clone for Float<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: FloatFormat> Copy for Float<F> {}

impl<F: FloatFormat> PartialEq for Float<F> {
    fn eq(&self, other: &Self) -> bool {
        self.mantissa == other.mantissa && self.exponent == other.exponent
    }
}

impl<F: FloatFormat> Eq for Float<F> {}

impl<F: FloatFormat> Default for Float<F> {
    fn default() -> Self {
        Float::zero()
    }
}

impl<F: FloatFormat> fmt::Debug for Float<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Float")
            .field("mantissa", &self.mantissa)
            .field("exponent", &self.exponent)
            .finish()
    }
}
