use std::cmp::Ordering;
use num_traits::{NumCast, PrimInt};

/// Orders two integers of possibly different primitive types.
///
/// A value that does not fit into `B` lies outside `B`'s whole range, so its
/// sign alone decides the ordering.
pub(crate) fn compare<A, B>(a: A, b: B) -> Ordering
  where A: PrimInt,
        B: PrimInt,
{
  match <B as NumCast>::from(a) {
    Some(a) => a.cmp(&b),
    None if a > A::zero() => Ordering::Greater,
    None => Ordering::Less,
  }
}

/// Converts between primitive integers, clamping to the target range.
pub(crate) fn saturating_cast<A, B>(a: A) -> B
  where A: PrimInt,
        B: PrimInt,
{
  match <B as NumCast>::from(a) {
    Some(b) => b,
    None if a > A::zero() => B::max_value(),
    None => B::min_value(),
  }
}

/// True if `a` lies strictly between `lowest` and `max`.
pub(crate) fn strictly_within<A, B>(a: A, lowest: B, max: B) -> bool
  where A: PrimInt,
        B: PrimInt,
{
  compare(a, lowest) == Ordering::Greater && compare(a, max) == Ordering::Less
}
