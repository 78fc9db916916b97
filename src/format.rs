use std::any::TypeId;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt::Debug;
use std::marker::PhantomData;
use std::sync::RwLock;
use lazy_static::lazy_static;
use num_traits::{Bounded, One, PrimInt, Signed, Zero};
use crate::error::FormatError;
use crate::util::{compare, saturating_cast};

/// Compile-time configuration of a `Float`.
///
/// A format picks the integer types holding the mantissa and the exponent,
/// the base one exponent step scales the mantissa by, and the bounds both
/// components are kept in. Every bound defaults to the natural range of its
/// integer type and the base defaults to 2.
///
/// The exponent type must be signed. The special values are encoded with a
/// zero mantissa and the exponent codes 0 to 3, so the exponent bounds have
/// to contain them (see [`validate`]).
pub trait FloatFormat: 'static {
  type Mantissa: PrimInt + Debug;
  type Exponent: PrimInt + Signed + Debug;

  fn base() -> Self::Mantissa {
    Self::Mantissa::one() + Self::Mantissa::one()
  }

  fn mantissa_lowest() -> Self::Mantissa {
    Self::Mantissa::min_value()
  }

  fn mantissa_max() -> Self::Mantissa {
    Self::Mantissa::max_value()
  }

  fn exponent_lowest() -> Self::Exponent {
    Self::Exponent::min_value()
  }

  fn exponent_max() -> Self::Exponent {
    Self::Exponent::max_value()
  }
}

/// Base 2 format using the full range of `M` and `E`.
pub struct Binary<M, E>(PhantomData<fn() -> (M, E)>);

impl<M, E> FloatFormat for Binary<M, E>
  where M: PrimInt + Debug + 'static,
        E: PrimInt + Signed + Debug + 'static,
{
  type Mantissa = M;
  type Exponent = E;
}

/// Base 10 format using the full range of `M` and `E`.
pub struct Decimal<M, E>(PhantomData<fn() -> (M, E)>);

impl<M, E> FloatFormat for Decimal<M, E>
  where M: PrimInt + Debug + 'static,
        E: PrimInt + Signed + Debug + 'static,
{
  type Mantissa = M;
  type Exponent = E;

  fn base() -> M {
    saturating_cast(10u8)
  }
}

/// Declares a zero-sized type implementing [`FloatFormat`].
///
/// ```
/// radixfloat::float_format! {
///     /// 8 bit mantissa, exponent squeezed into 4 bits.
///     pub struct Tiny: i8, i8;
///     base = 2,
///     exponent = [-8, 7]
/// }
///
/// let f = radixfloat::Float::<Tiny>::new(100, 0);
/// assert_eq!((f.mantissa(), f.exponent()), (100, 0));
/// ```
#[macro_export]
macro_rules! float_format {
  (
    $(#[$meta:meta])*
    $vis:vis struct $name:ident: $mantissa:ty, $exponent:ty;
    base = $base:expr
    $(, mantissa = [$m_lowest:expr, $m_max:expr])?
    $(, exponent = [$e_lowest:expr, $e_max:expr])?
  ) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    $vis struct $name;

    impl $crate::FloatFormat for $name {
      type Mantissa = $mantissa;
      type Exponent = $exponent;

      fn base() -> $mantissa { $base }

      $(
        fn mantissa_lowest() -> $mantissa { $m_lowest }
        fn mantissa_max() -> $mantissa { $m_max }
      )?

      $(
        fn exponent_lowest() -> $exponent { $e_lowest }
        fn exponent_max() -> $exponent { $e_max }
      )?
    }
  };
}

lazy_static! {
  static ref VALID_FORMATS: RwLock<HashSet<TypeId>> = RwLock::new(HashSet::new());
}

/// Checks that normalization terminates for `F`, that the special value
/// codes fit into its exponent range and that 1 can be normalized without
/// underflowing to zero.
pub fn validate<F: FloatFormat>() -> Result<(), FormatError> {
  let base = F::base();
  let two = F::Mantissa::one() + F::Mantissa::one();
  if base < two {
    return Err(FormatError::Base { base: format!("{:?}", base) });
  }

  let lowest = F::mantissa_lowest();
  let max = F::mantissa_max();
  let zero = F::Mantissa::zero();
  // A negative lower bound smaller in magnitude than the base lets the
  // shrink loop divide a mantissa down to zero.
  let collapses = lowest != zero && (lowest / base).is_zero();
  if lowest > zero || max < base || collapses {
    return Err(FormatError::MantissaBounds {
      lowest: format!("{:?}", lowest),
      max: format!("{:?}", max),
      base: format!("{:?}", base),
    });
  }

  let e_lowest = F::exponent_lowest();
  let e_max = F::exponent_max();
  if e_lowest.is_positive() || compare(e_max, 3u8) == Ordering::Less {
    return Err(FormatError::ExponentBounds {
      lowest: format!("{:?}", e_lowest),
      max: format!("{:?}", e_max),
    });
  }

  // Growth steps 1 needs, each taking one exponent step below 0.
  let mut one = F::Mantissa::one();
  let mut steps = 0u32;
  while one <= max / base {
    one = one * base;
    steps += 1;
  }
  if compare(e_lowest, -i64::from(steps)) == Ordering::Greater {
    return Err(FormatError::OneUnderflows {
      lowest: format!("{:?}", e_lowest),
      steps,
    });
  }

  Ok(())
}

/// [`validate`], run once per format type. Only passing formats are
/// remembered.
pub(crate) fn validate_once<F: FloatFormat>() -> Result<(), FormatError> {
  let id = TypeId::of::<F>();
  if VALID_FORMATS.read().map(|set| set.contains(&id)).unwrap_or(false) {
    return Ok(());
  }

  validate::<F>()?;
  if let Ok(mut set) = VALID_FORMATS.write() {
    set.insert(id);
  }
  Ok(())
}

#[cfg(test)]
fn is_remembered<F: FloatFormat>() -> bool {
  VALID_FORMATS.read().map(|set| set.contains(&TypeId::of::<F>())).unwrap_or(false)
}

#[cfg(test)]
mod test {
  use super::*;

  float_format! {
    struct BaseOne: i32, i32;
    base = 1
  }

  float_format! {
    struct PositiveLowest: i32, i32;
    base = 2,
    mantissa = [1, 100]
  }

  float_format! {
    struct NarrowNegative: i32, i32;
    base = 10,
    mantissa = [-5, 1000]
  }

  float_format! {
    struct MaxBelowBase: u8, i8;
    base = 10,
    mantissa = [0, 9]
  }

  float_format! {
    struct NoSpecialCodes: i32, i8;
    base = 2,
    exponent = [-10, 2]
  }

  float_format! {
    struct PositiveExponentLowest: i32, i8;
    base = 2,
    exponent = [1, 100]
  }

  float_format! {
    struct Unsigned: u16, i16;
    base = 16
  }

  float_format! {
    struct NoRoomForOne: i8, i8;
    base = 2,
    exponent = [0, 7]
  }

  float_format! {
    struct BarelyRoomForOne: i8, i8;
    base = 2,
    exponent = [-6, 7]
  }

  float_format! {
    struct Remembered: i32, i16;
    base = 2
  }

  #[test]
  fn natural_bounds_by_default() {
    assert_eq!(Binary::<i16, i8>::base(), 2);
    assert_eq!(Binary::<i16, i8>::mantissa_lowest(), i16::MIN);
    assert_eq!(Binary::<i16, i8>::mantissa_max(), i16::MAX);
    assert_eq!(Binary::<i16, i8>::exponent_lowest(), i8::MIN);
    assert_eq!(Binary::<i16, i8>::exponent_max(), i8::MAX);
    assert_eq!(Decimal::<u32, i16>::base(), 10);
    assert_eq!(Decimal::<u32, i16>::mantissa_lowest(), 0);
  }

  #[test]
  fn presets_are_valid() {
    assert_eq!(validate::<Binary<i8, i8>>(), Ok(()));
    assert_eq!(validate::<Binary<u128, i128>>(), Ok(()));
    assert_eq!(validate::<Decimal<i64, i32>>(), Ok(()));
    assert_eq!(validate::<Unsigned>(), Ok(()));
  }

  #[test]
  fn rejects_small_base() {
    match validate::<BaseOne>() {
      Err(FormatError::Base { base }) => assert_eq!(base, "1"),
      other => panic!("unexpected {:?}", other),
    }
  }

  #[test]
  fn rejects_unusable_mantissa_bounds() {
    assert!(matches!(validate::<PositiveLowest>(), Err(FormatError::MantissaBounds { .. })));
    assert!(matches!(validate::<NarrowNegative>(), Err(FormatError::MantissaBounds { .. })));
    assert!(matches!(validate::<MaxBelowBase>(), Err(FormatError::MantissaBounds { .. })));
  }

  #[test]
  fn rejects_exponent_range_without_special_codes() {
    assert!(matches!(validate::<NoSpecialCodes>(), Err(FormatError::ExponentBounds { .. })));
    assert!(matches!(validate::<PositiveExponentLowest>(), Err(FormatError::ExponentBounds { .. })));
  }

  #[test]
  fn error_message_names_bounds() {
    let err = validate::<NoSpecialCodes>().unwrap_err();
    assert_eq!(err.to_string(), "exponent bounds -10..=2 must contain the special codes 0..=3");
  }

  #[test]
  fn rejects_exponent_range_that_underflows_one() {
    match validate::<NoRoomForOne>() {
      Err(err @ FormatError::OneUnderflows { .. }) => assert_eq!(
        err.to_string(),
        "exponent lower bound 0 leaves no room to normalize 1 (6 base steps needed)"
      ),
      other => panic!("unexpected {:?}", other),
    }
    assert_eq!(validate::<BarelyRoomForOne>(), Ok(()));
  }

  #[test]
  fn passing_formats_are_remembered() {
    assert!(!is_remembered::<Remembered>());
    assert_eq!(validate_once::<Remembered>(), Ok(()));
    assert!(is_remembered::<Remembered>());
    assert_eq!(validate_once::<Remembered>(), Ok(()));

    assert!(validate_once::<BaseOne>().is_err());
    assert!(!is_remembered::<BaseOne>());
  }
}
