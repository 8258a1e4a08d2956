//! The numeric capability required of series terms.
//!
//! This module defines the trait that every term type must implement so
//! that closed-form series can be evaluated and combinators can operate
//! on their operands' terms.

use num_traits::{One, Zero};
use std::fmt::{Debug, Display};
use std::ops::{Neg, Sub};

/// A number that can be produced as the term of a series.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - `a - b == a + (-b)`
/// - `powi(0)` is `one()` for every value, including zero
/// - The `checked_*` operations agree with the operators whenever they
///   return `Some`
///
/// Operations whose result is not representable in the implementing type
/// return `None` instead of panicking, so callers can surface a typed
/// error. Fixed-width integers overflow; floats saturate to infinity and
/// rationals are unbounded, so those always succeed.
pub trait Numeric:
    Clone
    + PartialEq
    + Debug
    + Display
    + Send
    + Sync
    + 'static
    + Zero
    + One
    + Sub<Output = Self>
    + Neg<Output = Self>
{
    /// Converts a series index into this type.
    ///
    /// Returns `None` if the index is out of range for the type.
    fn from_index(i: i64) -> Option<Self>;

    /// Computes `self^exp` for an integer exponent.
    ///
    /// Negative exponents are supported where the type can represent the
    /// reciprocal.
    fn powi(&self, exp: i64) -> Option<Self>;

    /// Computes `self^exp` for an exponent of the same type.
    fn pow(&self, exp: &Self) -> Option<Self>;

    /// Computes `self + rhs`, or `None` on overflow.
    fn checked_add(&self, rhs: &Self) -> Option<Self>;

    /// Computes `self - rhs`, or `None` on overflow.
    fn checked_sub(&self, rhs: &Self) -> Option<Self>;

    /// Computes `self * rhs`, or `None` on overflow.
    fn checked_mul(&self, rhs: &Self) -> Option<Self>;

    /// Computes `-self`, or `None` on overflow.
    fn checked_neg(&self) -> Option<Self>;

    /// Returns the absolute value, or `None` on overflow.
    fn checked_abs(&self) -> Option<Self>;
}

/// Computes base^n for non-negative n by repeated squaring.
///
/// Returns `None` if any intermediate multiplication fails.
#[cfg_attr(not(feature = "rational"), allow(dead_code))]
pub(crate) fn pow_by_squaring<T, F>(base: &T, n: u64, mut mul: F) -> Option<T>
where
    T: Clone + One,
    F: FnMut(&T, &T) -> Option<T>,
{
    let mut result = T::one();
    let mut base = base.clone();
    let mut exp = n;

    while exp > 0 {
        if exp & 1 == 1 {
            result = mul(&result, &base)?;
        }
        exp >>= 1;
        if exp > 0 {
            base = mul(&base, &base)?;
        }
    }

    Some(result)
}
