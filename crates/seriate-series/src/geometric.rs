//! Geometric series.
//!
//! A geometric series has a constant ratio between consecutive terms:
//! aᵢ = a·rⁱ. Negative indices divide by the ratio, which only succeeds
//! when the term type can represent the reciprocal.

use std::fmt;

use seriate_numeric::Numeric;

use crate::error::{SeriesError, SeriesResult};
use crate::series::{fmt_preview, Series};

/// The series a, a·r, a·r², ...
#[derive(Clone, Debug, PartialEq)]
pub struct Geometric<T: Numeric> {
    a: T,
    r: T,
}

impl<T: Numeric> Geometric<T> {
    /// Creates the geometric series with first term `a` and common ratio `r`.
    pub fn new(a: T, r: T) -> Self {
        Self { a, r }
    }

    /// Returns the first term.
    pub fn start(&self) -> &T {
        &self.a
    }

    /// Returns the common ratio.
    pub fn ratio(&self) -> &T {
        &self.r
    }
}

impl<T: Numeric> Series for Geometric<T> {
    type Term = T;

    fn name(&self) -> &'static str {
        "Geometric"
    }

    fn term(&self, i: i64) -> SeriesResult<T> {
        let power = self
            .r
            .powi(i)
            .ok_or_else(|| SeriesError::undefined("pow", &self.r, &i))?;
        self.a
            .checked_mul(&power)
            .ok_or_else(|| SeriesError::undefined("mul", &self.a, &power))
    }
}

impl<T: Numeric> fmt::Display for Geometric<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_preview(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term() {
        let s = Geometric::new(3i64, 2);
        assert_eq!(s.term(0), Ok(3));
        assert_eq!(s.term(4), Ok(48));
    }

    #[test]
    fn test_range() {
        let s = Geometric::new(3i64, 2);
        assert_eq!(s.range(0, 3, 1).unwrap(), vec![3, 6, 12]);
    }

    #[test]
    fn test_convergent_sum() {
        let s = Geometric::new(2.0f64, 0.5);
        let sum: f64 = s.range(0, 100, 1).unwrap().iter().sum();
        assert!((sum - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_index_float() {
        let s = Geometric::new(3.0f64, 2.0);
        assert_eq!(s.term(-1), Ok(1.5));
        assert_eq!(s.term(-2), Ok(0.75));
    }

    #[test]
    fn test_negative_index_integer_is_undefined() {
        let s = Geometric::new(3i64, 2);
        assert_eq!(
            s.term(-1),
            Err(SeriesError::Undefined {
                op: "pow",
                operands: "(2, -1)".into()
            })
        );
    }

    #[test]
    fn test_overflow_is_undefined() {
        let s = Geometric::new(1i64, 10);
        assert!(matches!(s.term(40), Err(SeriesError::Undefined { .. })));
    }

    #[test]
    fn test_scaled_power_overflow_is_undefined() {
        // 2^62 fits in i64 but 2 * 2^62 does not
        let s = Geometric::new(2i64, 2);
        assert_eq!(s.term(61), Ok(1 << 62));
        assert_eq!(
            s.term(62),
            Err(SeriesError::undefined("mul", &2, &(1i64 << 62)))
        );
        assert!(matches!(s.term(63), Err(SeriesError::Undefined { op: "pow", .. })));
    }

    #[test]
    fn test_display() {
        assert_eq!(Geometric::new(3i64, 2).to_string(), "Geometric: (3, 6, 12, ...)");
    }

    #[test]
    fn test_display_fractional_ratio() {
        assert_eq!(
            Geometric::new(2.0f64, 0.5).to_string(),
            "Geometric: (2, 1, 0.5, ...)"
        );
    }

    #[cfg(feature = "rational")]
    #[test]
    fn test_exact_rational_terms() {
        use seriate_numeric::Rational;

        let s = Geometric::new(Rational::from(2), Rational::new(1, 2));
        assert_eq!(s.term(3), Ok(Rational::new(1, 4)));
        assert_eq!(s.term(-2), Ok(Rational::from(8)));
        assert_eq!(s.to_string(), "Geometric: (2, 1, 1/2, ...)");
    }
}
