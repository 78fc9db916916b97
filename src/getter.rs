use std::cmp::Ordering;
use num_traits::Zero;
use crate::{Float, FloatFormat};
use crate::constant::{INFINITY_CODE, NAN_CODE, NEG_INFINITY_CODE, ZERO_CODE};
use crate::util::compare;

impl<F: FloatFormat> Float<F> {
  pub fn mantissa(self) -> F::Mantissa { self.mantissa }

  pub fn exponent(self) -> F::Exponent { self.exponent }

  /// The factor one exponent step scales the mantissa by.
  pub fn base() -> F::Mantissa { F::base() }

  fn is_code(self, code: u8) -> bool {
    self.mantissa.is_zero() && compare(self.exponent, code) == Ordering::Equal
  }

  pub fn is_zero(self) -> bool { self.is_code(ZERO_CODE) }

  pub fn is_nan(self) -> bool { self.is_code(NAN_CODE) }

  pub fn is_infinite(self) -> bool {
    self.is_code(INFINITY_CODE) || self.is_code(NEG_INFINITY_CODE)
  }

  pub fn is_sign_positive_infinity(self) -> bool { self.is_code(INFINITY_CODE) }

  pub fn is_finite(self) -> bool { !self.is_infinite() && !self.is_nan() }

  /// True for zero, the infinities and not-a-number.
  pub fn is_special(self) -> bool {
    self.is_zero() || self.is_infinite() || self.is_nan()
  }

  /// True if the value is special, or if its mantissa lies within the
  /// format's bounds and one more multiplication by the base would leave
  /// them.
  ///
  /// `min_positive()` is the one constant that is not normalized.
  pub fn is_normalized(self) -> bool {
    if self.is_special() {
      return true;
    }

    let m = self.mantissa;
    let e = self.exponent;
    if m < F::mantissa_lowest() || m > F::mantissa_max() {
      return false;
    }
    if e < F::exponent_lowest() || e > F::exponent_max() {
      return false;
    }

    if m > F::Mantissa::zero() {
      m > F::mantissa_max() / F::base()
    } else {
      m < F::mantissa_lowest() / F::base()
    }
  }
}

#[cfg(test)]
mod test {
  use crate::{Binary, Decimal, Float};

  type Small = Float<Binary<i8, i8>>;

  #[test]
  fn accessors() {
    let f = Small::new(3, 0);
    assert_eq!(f.mantissa(), 96);
    assert_eq!(f.exponent(), -5);
    assert_eq!(Small::base(), 2);
    assert_eq!(Float::<Decimal<u32, i32>>::base(), 10);
  }

  #[test]
  fn classification() {
    assert!(Small::zero().is_zero() && Small::zero().is_finite());
    assert!(Small::nan().is_nan() && !Small::nan().is_finite());
    assert!(Small::infinity().is_infinite() && Small::infinity().is_sign_positive_infinity());
    assert!(Small::neg_infinity().is_infinite() && !Small::neg_infinity().is_sign_positive_infinity());

    let one = Small::one();
    assert!(!one.is_special() && one.is_finite() && !one.is_zero());
  }

  #[test]
  fn normalized_form() {
    assert!(Small::new(100, 0).is_normalized());
    assert!(Small::max().is_normalized());
    assert!(Small::lowest().is_normalized());
    assert!(Small::nan().is_normalized());
    assert!(!Small::min_positive().is_normalized());
    assert!(!Small::of(63, 0).is_normalized());
    assert!(!Small::of(-64, 0).is_normalized());
    assert!(Small::of(-65, 0).is_normalized());
    assert!(!Small::of(0, 9).is_normalized());
  }
}
