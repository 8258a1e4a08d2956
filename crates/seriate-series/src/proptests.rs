//! Property-based tests for series laws.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{accum, add, as_series, diff, Arithmetic, Geometric, Series, SeriesError};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for indices where products stay well inside i64
    fn index() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    proptest! {
        #[test]
        fn arithmetic_term_formula(a in small_int(), d in small_int(), i in index()) {
            prop_assert_eq!(Arithmetic::new(a, d).term(i), Ok(a + i * d));
        }

        #[test]
        fn arithmetic_term_never_panics(a in any::<i64>(), d in any::<i64>(), i in any::<i64>()) {
            let product = i128::from(i) * i128::from(d);
            let exact = i128::from(a) + product;
            let fits = i64::try_from(product).is_ok() && i64::try_from(exact).is_ok();
            match Arithmetic::new(a, d).term(i) {
                Ok(t) => {
                    prop_assert!(fits);
                    prop_assert_eq!(i128::from(t), exact);
                }
                Err(err) => {
                    prop_assert!(!fits);
                    let is_undefined = matches!(err, SeriesError::Undefined { .. });
                    prop_assert!(is_undefined);
                }
            }
        }

        #[test]
        fn geometric_term_formula(a in small_int(), r in -6i64..6i64, i in 0i64..12i64) {
            let expected = a * r.pow(u32::try_from(i).unwrap());
            prop_assert_eq!(Geometric::new(a, r).term(i), Ok(expected));
        }

        #[test]
        fn geometric_float_negative_index(a in 1i64..100i64, i in 1i64..20i64) {
            #[allow(clippy::cast_precision_loss)]
            let a = a as f64;
            let s = Geometric::new(a, 2.0f64);
            let product = s.term(-i).unwrap() * s.term(i).unwrap();
            prop_assert!((product / (a * a) - 1.0).abs() < 1e-12);
        }

        #[test]
        fn closed_form_add_matches_composition(
            a1 in small_int(),
            d1 in small_int(),
            a2 in small_int(),
            d2 in small_int(),
            i in index()
        ) {
            let closed = Arithmetic::new(a1, d1) + Arithmetic::new(a2, d2);
            let generic = add(Arithmetic::new(a1, d1), Arithmetic::new(a2, d2));
            prop_assert_eq!(closed.term(i), generic.term(i));
        }

        #[test]
        fn from_series_recovers_parameters(a in small_int(), d in small_int(), n in 2i64..20i64) {
            let original = Arithmetic::new(a, d);
            let terms = original.range(0, n, 1).unwrap();
            prop_assert_eq!(Arithmetic::from_series(&terms), Ok(original));
        }

        #[test]
        fn from_series_rejects_bent_sequences(
            a in small_int(),
            d in small_int(),
            bump in prop_oneof![(-50i64..=-1i64), (1i64..=50i64)]
        ) {
            let mut terms = Arithmetic::new(a, d).range(0, 5, 1).unwrap();
            terms[3] += bump;
            prop_assert!(matches!(
                Arithmetic::from_series(&terms),
                Err(SeriesError::NonConstantDifference(_))
            ));
        }

        #[test]
        fn diff_undoes_accum(a in -20i64..20i64, r in -3i64..3i64, i in 0i64..15i64) {
            let s = as_series(Geometric::new(a, r));
            prop_assert_eq!(diff(accum(&s)).term(i), s.term(i));
        }

        #[test]
        fn range_length(start in -50i64..50i64, stop in -50i64..50i64, step in 1i64..7i64) {
            let s = Arithmetic::new(0i64, 1);
            let forward = s.range(start, stop, step).unwrap();
            let expected = if stop > start { (stop - start + step - 1) / step } else { 0 };
            prop_assert_eq!(i64::try_from(forward.len()).unwrap(), expected);

            // With d = 1 the terms are the indices themselves.
            let backward = s.range(stop, start, -step).unwrap();
            prop_assert!(backward.iter().all(|&t| t <= stop && t > start));
        }
    }
}
