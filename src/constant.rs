use std::marker::PhantomData;
use num_traits::{One, Zero};
use crate::{Float, FloatFormat};
use crate::util::saturating_cast;

pub(crate) const ZERO_CODE: u8 = 0;
pub(crate) const INFINITY_CODE: u8 = 1;
pub(crate) const NEG_INFINITY_CODE: u8 = 2;
pub(crate) const NAN_CODE: u8 = 3;

impl<F: FloatFormat> Float<F> {
  /// Stores the pair as given. Only normalized or special pairs may go
  /// through here.
  pub(crate) fn of(mantissa: F::Mantissa, exponent: F::Exponent) -> Float<F> {
    Float { mantissa, exponent, format: PhantomData }
  }

  fn special(code: u8) -> Float<F> {
    Float::of(F::Mantissa::zero(), saturating_cast(code))
  }

  pub fn zero() -> Float<F> {
    Float::special(ZERO_CODE)
  }

  /// The integer 1, normalized. Formats whose exponent range leaves no
  /// room for that are rejected by [`validate`](crate::validate), so this
  /// never equals `zero()`.
  pub fn one() -> Float<F> {
    Float::new(F::Mantissa::one(), F::Exponent::zero())
  }

  pub fn infinity() -> Float<F> {
    Float::special(INFINITY_CODE)
  }

  pub fn neg_infinity() -> Float<F> {
    Float::special(NEG_INFINITY_CODE)
  }

  pub fn nan() -> Float<F> {
    Float::special(NAN_CODE)
  }

  /// Smallest positive magnitude.
  pub fn min_positive() -> Float<F> {
    Float::of(F::Mantissa::one(), F::exponent_lowest())
  }

  /// Most negative value.
  pub fn lowest() -> Float<F> {
    Float::of(F::mantissa_lowest(), F::exponent_max())
  }

  /// Largest value.
  pub fn max() -> Float<F> {
    Float::of(F::mantissa_max(), F::exponent_max())
  }
}
