extern crate either;

use std::cmp::Ordering;
use either::Either;
use num_traits::{One, PrimInt, Zero};
use crate::{Float, FloatFormat, FormatError};
use crate::format::validate_once;
use crate::util::{compare, saturating_cast, strictly_within};

impl<F: FloatFormat> Float<F> {
  /// Builds the normalized value closest to `value * base^exponent`.
  ///
  /// `value` and `exponent` may be of any primitive integer type. Results
  /// that do not fit saturate: a magnitude too large becomes an infinity of
  /// the value's sign, a magnitude too small becomes zero.
  ///
  /// An `exponent` outside the format's bounds short-circuits before the
  /// value is looked at: above the bounds gives positive infinity and below
  /// gives negative infinity, whatever the sign of `value`.
  ///
  /// # Panics
  ///
  /// Panics if `F` is rejected by [`validate`](crate::validate).
  pub fn new<V, X>(value: V, exponent: X) -> Float<F>
    where V: PrimInt,
          X: PrimInt,
  {
    match Float::try_new(value, exponent) {
      Ok(f) => f,
      Err(err) => panic!("invalid float format: {}", err),
    }
  }

  /// Same as [`Float::new`] but reports an invalid format instead of
  /// panicking.
  pub fn try_new<V, X>(value: V, exponent: X) -> Result<Float<F>, FormatError>
    where V: PrimInt,
          X: PrimInt,
  {
    if let Err(err) = validate_once::<F>() {
      log::debug!("rejecting float format: {}", err);
      return Err(err);
    }

    Ok(Float::from_checked(value, exponent))
  }

  fn from_checked<V, X>(value: V, exponent: X) -> Float<F>
    where V: PrimInt,
          X: PrimInt,
  {
    if compare(exponent, F::exponent_max()) == Ordering::Greater {
      log::trace!("exponent above {:?}, saturating to infinity", F::exponent_max());
      return Float::infinity();
    }
    if compare(exponent, F::exponent_lowest()) == Ordering::Less {
      log::trace!("exponent below {:?}, saturating to negative infinity", F::exponent_lowest());
      return Float::neg_infinity();
    }

    // In range, so the cast is exact.
    let exponent: F::Exponent = saturating_cast(exponent);

    // A value strictly inside the mantissa bounds is normalized in the
    // mantissa type, so a narrower input type cannot overflow while growing.
    if strictly_within(value, F::mantissa_lowest(), F::mantissa_max()) {
      normalize::<F, F::Mantissa>(saturating_cast(value), exponent)
    } else {
      normalize::<F, V>(value, exponent)
    }
  }
}

/// Scales `value` by the base until it uses as many digits as the mantissa
/// bounds allow, adjusting `exponent` in step.
///
/// The bounds are evaluated in the working type `W`. They always fit there
/// for a value on their side of zero, since the value is either inside them
/// or beyond them.
fn normalize<F, W>(value: W, exponent: F::Exponent) -> Float<F>
  where F: FloatFormat,
        W: PrimInt,
{
  if value.is_zero() {
    return Float::zero();
  }

  let scaled = if value > W::zero() {
    scale_positive::<F, W>(value, exponent)
  } else {
    scale_negative::<F, W>(value, exponent)
  };

  match scaled {
    Either::Left(special) => special,
    Either::Right((value, exponent)) => Float::of(saturating_cast(value), exponent),
  }
}

fn scale_positive<F, W>(mut value: W, mut exponent: F::Exponent) -> Either<Float<F>, (W, F::Exponent)>
  where F: FloatFormat,
        W: PrimInt,
{
  let base: W = saturating_cast(F::base());
  let max: W = saturating_cast(F::mantissa_max());
  let grow_limit: W = saturating_cast(F::mantissa_max() / F::base());

  while value <= grow_limit {
    if exponent == F::exponent_lowest() {
      log::trace!("positive underflow at exponent {:?}", exponent);
      return Either::Left(Float::zero());
    }
    exponent = exponent - F::Exponent::one();
    value = value * base;
  }

  while value > max {
    if exponent == F::exponent_max() {
      log::trace!("positive overflow at exponent {:?}", exponent);
      return Either::Left(Float::infinity());
    }
    exponent = exponent + F::Exponent::one();
    value = value / base;
  }

  Either::Right((value, exponent))
}

fn scale_negative<F, W>(mut value: W, mut exponent: F::Exponent) -> Either<Float<F>, (W, F::Exponent)>
  where F: FloatFormat,
        W: PrimInt,
{
  // Nothing below zero is representable.
  if F::mantissa_lowest().is_zero() {
    log::trace!("negative value for a format without negative mantissas");
    return Either::Left(Float::neg_infinity());
  }

  let base: W = saturating_cast(F::base());
  let lowest: W = saturating_cast(F::mantissa_lowest());
  let grow_limit: W = saturating_cast(F::mantissa_lowest() / F::base());

  while value >= grow_limit {
    if exponent == F::exponent_lowest() {
      log::trace!("negative underflow at exponent {:?}", exponent);
      return Either::Left(Float::zero());
    }
    exponent = exponent - F::Exponent::one();
    value = value * base;
  }

  while value < lowest {
    if exponent == F::exponent_max() {
      log::trace!("negative overflow at exponent {:?}", exponent);
      return Either::Left(Float::neg_infinity());
    }
    exponent = exponent + F::Exponent::one();
    value = value / base;
  }

  Either::Right((value, exponent))
}
