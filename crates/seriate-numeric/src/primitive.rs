//! `Numeric` implementations for the primitive integer and float types.

use num_traits::{CheckedAdd, CheckedMul, CheckedNeg, CheckedSub};

use crate::traits::Numeric;

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            fn from_index(i: i64) -> Option<Self> {
                <$t>::try_from(i).ok()
            }

            fn powi(&self, exp: i64) -> Option<Self> {
                match *self {
                    1 => return Some(1),
                    -1 => return Some(if exp % 2 == 0 { 1 } else { -1 }),
                    0 if exp > 0 => return Some(0),
                    _ => {}
                }
                // Only units have integral reciprocals.
                let exp = u32::try_from(exp).ok()?;
                self.checked_pow(exp)
            }

            fn pow(&self, exp: &Self) -> Option<Self> {
                i64::try_from(*exp).ok().and_then(|e| Numeric::powi(self, e))
            }

            fn checked_add(&self, rhs: &Self) -> Option<Self> {
                CheckedAdd::checked_add(self, rhs)
            }

            fn checked_sub(&self, rhs: &Self) -> Option<Self> {
                CheckedSub::checked_sub(self, rhs)
            }

            fn checked_mul(&self, rhs: &Self) -> Option<Self> {
                CheckedMul::checked_mul(self, rhs)
            }

            fn checked_neg(&self) -> Option<Self> {
                CheckedNeg::checked_neg(self)
            }

            fn checked_abs(&self) -> Option<Self> {
                <$t>::checked_abs(*self)
            }
        }
    )*};
}

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            #[allow(clippy::cast_precision_loss)]
            fn from_index(i: i64) -> Option<Self> {
                Some(i as $t)
            }

            #[allow(clippy::cast_precision_loss)]
            fn powi(&self, exp: i64) -> Option<Self> {
                match i32::try_from(exp) {
                    Ok(e) => Some(<$t>::powi(*self, e)),
                    Err(_) => Some(<$t>::powf(*self, exp as $t)),
                }
            }

            fn pow(&self, exp: &Self) -> Option<Self> {
                let result = <$t>::powf(*self, *exp);
                // A NaN from finite inputs means a negative base with a
                // fractional exponent.
                if result.is_nan() && !self.is_nan() && !exp.is_nan() {
                    None
                } else {
                    Some(result)
                }
            }

            fn checked_add(&self, rhs: &Self) -> Option<Self> {
                Some(*self + *rhs)
            }

            fn checked_sub(&self, rhs: &Self) -> Option<Self> {
                Some(*self - *rhs)
            }

            fn checked_mul(&self, rhs: &Self) -> Option<Self> {
                Some(*self * *rhs)
            }

            fn checked_neg(&self) -> Option<Self> {
                Some(-*self)
            }

            fn checked_abs(&self) -> Option<Self> {
                Some(<$t>::abs(*self))
            }
        }
    )*};
}

impl_numeric_int!(i32, i64, i128);
impl_numeric_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_from_index() {
        assert_eq!(<i64 as Numeric>::from_index(-7), Some(-7));
        assert_eq!(<i32 as Numeric>::from_index(i64::MAX), None);
        assert_eq!(<i128 as Numeric>::from_index(i64::MIN), Some(i128::from(i64::MIN)));
    }

    #[test]
    fn test_int_powi() {
        assert_eq!(Numeric::powi(&2i64, 10), Some(1024));
        assert_eq!(Numeric::powi(&2i64, 0), Some(1));
        assert_eq!(Numeric::powi(&0i64, 0), Some(1));
        assert_eq!(Numeric::powi(&0i64, 3), Some(0));
        assert_eq!(Numeric::powi(&2i64, 64), None);
    }

    #[test]
    fn test_int_negative_exponent() {
        assert_eq!(Numeric::powi(&1i64, -5), Some(1));
        assert_eq!(Numeric::powi(&-1i64, -3), Some(-1));
        assert_eq!(Numeric::powi(&-1i64, -4), Some(1));
        assert_eq!(Numeric::powi(&2i64, -1), None);
        assert_eq!(Numeric::powi(&0i64, -1), None);
    }

    #[test]
    fn test_int_pow() {
        assert_eq!(Numeric::pow(&3i32, &4), Some(81));
        assert_eq!(Numeric::pow(&3i32, &-1), None);
    }

    #[test]
    fn test_float_powi() {
        assert_eq!(Numeric::powi(&2.0f64, -2), Some(0.25));
        assert_eq!(Numeric::powi(&0.5f64, 3), Some(0.125));
    }

    #[test]
    fn test_float_pow() {
        assert_eq!(Numeric::pow(&4.0f64, &0.5), Some(2.0));
        assert_eq!(Numeric::pow(&-8.0f64, &(1.0 / 3.0)), None);
        assert!(Numeric::pow(&f64::NAN, &2.0).is_some_and(f64::is_nan));
    }

    #[test]
    fn test_abs() {
        assert_eq!(Numeric::checked_abs(&-3i64), Some(3));
        assert_eq!(Numeric::checked_abs(&-1.5f64), Some(1.5));
        assert_eq!(Numeric::checked_abs(&i64::MIN), None);
    }

    #[test]
    fn test_int_checked_arithmetic() {
        assert_eq!(Numeric::checked_add(&2i64, &3), Some(5));
        assert_eq!(Numeric::checked_add(&i64::MAX, &1), None);
        assert_eq!(Numeric::checked_sub(&i32::MIN, &1), None);
        assert_eq!(Numeric::checked_mul(&i64::MAX, &2), None);
        assert_eq!(Numeric::checked_neg(&i128::MIN), None);
        assert_eq!(Numeric::checked_neg(&-4i32), Some(4));
    }

    #[test]
    fn test_float_checked_arithmetic_saturates() {
        assert_eq!(Numeric::checked_add(&f64::MAX, &f64::MAX), Some(f64::INFINITY));
        assert_eq!(Numeric::checked_mul(&1.5f32, &2.0), Some(3.0));
        assert_eq!(Numeric::checked_neg(&0.5f64), Some(-0.5));
    }
}
