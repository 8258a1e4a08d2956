//! Arithmetic series.
//!
//! An arithmetic series has a constant difference between consecutive
//! terms: aᵢ = a + i·d.

use std::fmt;
use std::ops::Add;

use seriate_numeric::Numeric;

use crate::error::{DifferenceFault, SeriesError, SeriesResult};
use crate::series::{fmt_preview, Series};

/// The series a, a + d, a + 2d, ...
#[derive(Clone, Debug, PartialEq)]
pub struct Arithmetic<T: Numeric> {
    a: T,
    d: T,
}

impl<T: Numeric> Arithmetic<T> {
    /// Creates the arithmetic series with first term `a` and common
    /// difference `d`.
    pub fn new(a: T, d: T) -> Self {
        Self { a, d }
    }

    /// Returns the first term.
    pub fn start(&self) -> &T {
        &self.a
    }

    /// Returns the common difference.
    pub fn difference(&self) -> &T {
        &self.d
    }

    /// Reconstructs an arithmetic series from its leading terms.
    ///
    /// # Errors
    ///
    /// `NonConstantDifference` if fewer than two terms are given or the
    /// consecutive differences are not all equal.
    pub fn from_series(terms: &[T]) -> SeriesResult<Self> {
        let d = common_difference(terms)?;
        log::debug!("reconstructed arithmetic series: a = {}, d = {d}", terms[0]);
        Ok(Self::new(terms[0].clone(), d))
    }

    /// Like [`Arithmetic::from_series`], but with `a` as the first term
    /// instead of `terms[0]`.
    ///
    /// # Errors
    ///
    /// Same as [`Arithmetic::from_series`].
    pub fn from_series_with_start(terms: &[T], a: T) -> SeriesResult<Self> {
        let d = common_difference(terms)?;
        log::debug!("reconstructed arithmetic series: a = {a}, d = {d}");
        Ok(Self::new(a, d))
    }
}

/// Returns the difference shared by every pair of consecutive terms.
fn common_difference<T: Numeric>(terms: &[T]) -> SeriesResult<T> {
    if terms.len() < 2 {
        log::debug!("cannot determine a difference from {} terms", terms.len());
        return Err(SeriesError::NonConstantDifference(DifferenceFault::TooShort {
            len: terms.len(),
        }));
    }

    let step = |pair: &[T]| {
        pair[1]
            .checked_sub(&pair[0])
            .ok_or_else(|| SeriesError::undefined("sub", &pair[1], &pair[0]))
    };

    let d = step(&terms[..2])?;
    for (position, pair) in terms.windows(2).enumerate().skip(1) {
        let found = step(pair)?;
        if found != d {
            log::debug!("difference mismatch at position {position}: {found} != {d}");
            return Err(SeriesError::NonConstantDifference(DifferenceFault::Mismatch {
                position,
                expected: d.to_string(),
                found: found.to_string(),
            }));
        }
    }

    Ok(d)
}

impl<T: Numeric> Series for Arithmetic<T> {
    type Term = T;

    fn name(&self) -> &'static str {
        "Arithmetic"
    }

    fn term(&self, i: i64) -> SeriesResult<T> {
        let n = T::from_index(i).ok_or(SeriesError::IndexOverflow { index: i })?;
        let offset = n
            .checked_mul(&self.d)
            .ok_or_else(|| SeriesError::undefined("mul", &n, &self.d))?;
        self.a
            .checked_add(&offset)
            .ok_or_else(|| SeriesError::undefined("add", &self.a, &offset))
    }
}

/// The sum of two arithmetic series is arithmetic.
///
/// Parameters are added with `T`'s own `+`, so this overflows exactly when
/// `T` addition does.
impl<T: Numeric> Add for Arithmetic<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.a + rhs.a, self.d + rhs.d)
    }
}

/// Adding a constant shifts the first term and keeps the difference.
impl<T: Numeric> Add<T> for Arithmetic<T> {
    type Output = Self;

    fn add(self, rhs: T) -> Self::Output {
        Self::new(self.a + rhs, self.d)
    }
}

impl<T: Numeric> fmt::Display for Arithmetic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_preview(self, f)
    }
}
