//! Property-based tests for the numeric term types.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::Numeric;

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    // Strategy for exponents that keep i64 powers of small bases in range
    fn small_exp() -> impl Strategy<Value = i64> {
        0i64..6i64
    }

    proptest! {
        // Integer powers

        #[test]
        fn int_powi_matches_checked_pow(a in small_int(), e in small_exp()) {
            let expected = a.checked_pow(u32::try_from(e).unwrap());
            prop_assert_eq!(Numeric::powi(&a, e), expected);
        }

        #[test]
        fn int_pow_zero_is_one(a in small_int()) {
            prop_assert_eq!(Numeric::powi(&a, 0), Some(1));
        }

        #[test]
        fn int_negative_power_needs_unit(a in small_int(), e in 1i64..10i64) {
            let r = Numeric::powi(&a, -e);
            if a == 1 || a == -1 {
                prop_assert!(r.is_some());
            } else {
                prop_assert!(r.is_none());
            }
        }

        #[test]
        fn int_checked_add_matches_i128(a in any::<i64>(), b in any::<i64>()) {
            let wide = i128::from(a) + i128::from(b);
            let expected = i64::try_from(wide).ok();
            prop_assert_eq!(Numeric::checked_add(&a, &b), expected);
        }

        #[test]
        fn int_checked_mul_matches_i128(a in any::<i64>(), b in any::<i64>()) {
            let wide = i128::from(a) * i128::from(b);
            let expected = i64::try_from(wide).ok();
            prop_assert_eq!(Numeric::checked_mul(&a, &b), expected);
        }

        #[test]
        fn int_from_index_identity(i in any::<i64>()) {
            prop_assert_eq!(<i64 as Numeric>::from_index(i), Some(i));
            prop_assert_eq!(<i128 as Numeric>::from_index(i), Some(i128::from(i)));
        }

        // Float powers

        #[test]
        fn float_powi_negative_is_reciprocal(a in non_zero_int(), e in small_exp()) {
            #[allow(clippy::cast_precision_loss)]
            let a = a as f64;
            let pos = Numeric::powi(&a, e).unwrap();
            let neg = Numeric::powi(&a, -e).unwrap();
            prop_assert!((pos * neg - 1.0).abs() < 1e-9);
        }
    }

    #[cfg(feature = "rational")]
    proptest! {
        // Rational powers

        #[test]
        fn rational_powi_adds_exponents(
            num in non_zero_int(),
            den in non_zero_int(),
            m in -5i64..5i64,
            n in -5i64..5i64
        ) {
            use crate::Rational;
            let a = Rational::new(num, den);
            let lhs = a.powi(m + n).unwrap();
            let rhs = a.powi(m).unwrap() * a.powi(n).unwrap();
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn rational_negative_power_is_reciprocal(
            num in non_zero_int(),
            den in non_zero_int(),
            e in 1i64..6i64
        ) {
            use crate::Rational;
            let a = Rational::new(num, den);
            let product = a.powi(e).unwrap() * a.powi(-e).unwrap();
            prop_assert!(product.is_one());
        }

        #[test]
        fn rational_additive_inverse(num in small_int(), den in non_zero_int()) {
            use crate::Rational;
            let a = Rational::new(num, den);
            prop_assert!((a.clone() + (-a)).is_zero());
        }

        #[test]
        fn rational_sub_is_add_neg(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            use crate::Rational;
            let a = Rational::new(num_a, den_a);
            let b = Rational::new(num_b, den_b);
            prop_assert_eq!(a.clone() - b.clone(), a + (-b));
        }

        #[test]
        fn rational_abs_non_negative(num in small_int(), den in non_zero_int()) {
            use crate::Rational;
            let a = Rational::new(num, den).checked_abs().unwrap();
            prop_assert!(a.signum() >= 0);
        }
    }
}
