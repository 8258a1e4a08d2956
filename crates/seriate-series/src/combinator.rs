//! Series derived from other series.
//!
//! Combinators hold their operands through [`SeriesRef`] handles and
//! compute every term on demand from the operands' terms. Nothing is
//! cached: asking for the same term twice recomputes it.

use std::fmt;
use std::sync::Arc;

use seriate_numeric::Numeric;

use crate::error::{SeriesError, SeriesResult};
use crate::series::{fmt_preview, Series, SeriesRef};

type BinaryFn<T> = dyn Fn(T, T) -> SeriesResult<T> + Send + Sync;
type UnaryFn<T> = dyn Fn(T) -> SeriesResult<T> + Send + Sync;

/// A named binary operation on terms.
#[derive(Clone)]
pub struct BinaryOperator<T> {
    name: &'static str,
    f: Arc<BinaryFn<T>>,
}

impl<T: Numeric> BinaryOperator<T> {
    /// Creates an operator from a function on terms.
    pub fn new<F>(name: &'static str, f: F) -> Self
    where
        F: Fn(T, T) -> SeriesResult<T> + Send + Sync + 'static,
    {
        Self {
            name,
            f: Arc::new(f),
        }
    }

    /// Term-wise addition.
    pub fn add() -> Self {
        Self::new("add", |a: T, b: T| {
            a.checked_add(&b).ok_or_else(|| SeriesError::undefined("add", &a, &b))
        })
    }

    /// Term-wise subtraction.
    pub fn sub() -> Self {
        Self::new("sub", |a: T, b: T| {
            a.checked_sub(&b).ok_or_else(|| SeriesError::undefined("sub", &a, &b))
        })
    }

    /// Term-wise multiplication.
    pub fn mul() -> Self {
        Self::new("mul", |a: T, b: T| {
            a.checked_mul(&b).ok_or_else(|| SeriesError::undefined("mul", &a, &b))
        })
    }

    /// Term-wise power, `a^b`.
    pub fn pow() -> Self {
        Self::new("pow", |a: T, b: T| {
            a.pow(&b).ok_or_else(|| SeriesError::undefined("pow", &a, &b))
        })
    }

    /// Returns the operator's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Applies the operator.
    pub fn apply(&self, lhs: T, rhs: T) -> SeriesResult<T> {
        (self.f)(lhs, rhs)
    }
}

impl<T> fmt::Debug for BinaryOperator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinaryOperator({})", self.name)
    }
}

/// A named unary operation on terms.
#[derive(Clone)]
pub struct UnaryOperator<T> {
    name: &'static str,
    f: Arc<UnaryFn<T>>,
}

impl<T: Numeric> UnaryOperator<T> {
    /// Creates an operator from a function on terms.
    pub fn new<F>(name: &'static str, f: F) -> Self
    where
        F: Fn(T) -> SeriesResult<T> + Send + Sync + 'static,
    {
        Self {
            name,
            f: Arc::new(f),
        }
    }

    /// Term-wise negation.
    pub fn neg() -> Self {
        Self::new("neg", |a: T| {
            a.checked_neg().ok_or_else(|| SeriesError::undefined_unary("neg", &a))
        })
    }

    /// Term-wise absolute value.
    pub fn abs() -> Self {
        Self::new("abs", |a: T| {
            a.checked_abs().ok_or_else(|| SeriesError::undefined_unary("abs", &a))
        })
    }

    /// Returns the operator's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Applies the operator.
    pub fn apply(&self, operand: T) -> SeriesResult<T> {
        (self.f)(operand)
    }
}

impl<T> fmt::Debug for UnaryOperator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnaryOperator({})", self.name)
    }
}

/// `op(lhs[i], rhs[i])`.
#[derive(Clone)]
pub struct BinaryOp<T: Numeric> {
    lhs: SeriesRef<T>,
    rhs: SeriesRef<T>,
    op: BinaryOperator<T>,
}

impl<T: Numeric> BinaryOp<T> {
    /// Combines two series term by term.
    pub fn new(lhs: SeriesRef<T>, rhs: SeriesRef<T>, op: BinaryOperator<T>) -> Self {
        Self { lhs, rhs, op }
    }

    /// Returns the left operand.
    pub fn lhs(&self) -> &SeriesRef<T> {
        &self.lhs
    }

    /// Returns the right operand.
    pub fn rhs(&self) -> &SeriesRef<T> {
        &self.rhs
    }

    /// Returns the operator.
    pub fn op(&self) -> &BinaryOperator<T> {
        &self.op
    }
}

impl<T: Numeric> Series for BinaryOp<T> {
    type Term = T;

    fn name(&self) -> &'static str {
        "BinaryOp"
    }

    fn term(&self, i: i64) -> SeriesResult<T> {
        self.op.apply(self.lhs.term(i)?, self.rhs.term(i)?)
    }
}

/// `op(operand[i])`.
#[derive(Clone)]
pub struct UnaryOp<T: Numeric> {
    operand: SeriesRef<T>,
    op: UnaryOperator<T>,
}

impl<T: Numeric> UnaryOp<T> {
    /// Maps a series term by term.
    pub fn new(operand: SeriesRef<T>, op: UnaryOperator<T>) -> Self {
        Self { operand, op }
    }

    /// Returns the operand.
    pub fn operand(&self) -> &SeriesRef<T> {
        &self.operand
    }

    /// Returns the operator.
    pub fn op(&self) -> &UnaryOperator<T> {
        &self.op
    }
}

impl<T: Numeric> Series for UnaryOp<T> {
    type Term = T;

    fn name(&self) -> &'static str {
        "UnaryOp"
    }

    fn term(&self, i: i64) -> SeriesResult<T> {
        self.op.apply(self.operand.term(i)?)
    }
}

/// Forward differences: `operand[i + 1] - operand[i]`.
///
/// Negative indices are passed through to the operand.
#[derive(Clone)]
pub struct Diff<T: Numeric> {
    operand: SeriesRef<T>,
}

impl<T: Numeric> Diff<T> {
    /// Creates the difference series of `operand`.
    pub fn new(operand: SeriesRef<T>) -> Self {
        Self { operand }
    }

    /// Returns the operand.
    pub fn operand(&self) -> &SeriesRef<T> {
        &self.operand
    }
}

impl<T: Numeric> Series for Diff<T> {
    type Term = T;

    fn name(&self) -> &'static str {
        "Diff"
    }

    fn term(&self, i: i64) -> SeriesResult<T> {
        let next = i.checked_add(1).ok_or(SeriesError::IndexOverflow { index: i })?;
        let (later, earlier) = (self.operand.term(next)?, self.operand.term(i)?);
        later
            .checked_sub(&earlier)
            .ok_or_else(|| SeriesError::undefined("sub", &later, &earlier))
    }
}

/// Running totals: the `i`-th term is the sum of the first `i` operand
/// terms, so `Accum[0] = 0`.
///
/// Each term is summed from scratch, O(i) operand evaluations per call.
/// Only non-negative indices are defined.
#[derive(Clone)]
pub struct Accum<T: Numeric> {
    operand: SeriesRef<T>,
}

impl<T: Numeric> Accum<T> {
    /// Creates the running-total series of `operand`.
    pub fn new(operand: SeriesRef<T>) -> Self {
        Self { operand }
    }

    /// Returns the operand.
    pub fn operand(&self) -> &SeriesRef<T> {
        &self.operand
    }
}

impl<T: Numeric> Series for Accum<T> {
    type Term = T;

    fn name(&self) -> &'static str {
        "Accum"
    }

    fn term(&self, i: i64) -> SeriesResult<T> {
        if i < 0 {
            return Err(SeriesError::NegativeIndex {
                series: self.name(),
                index: i,
            });
        }

        let mut total = T::zero();
        for k in 0..i {
            let t = self.operand.term(k)?;
            total = total
                .checked_add(&t)
                .ok_or_else(|| SeriesError::undefined("add", &total, &t))?;
        }
        Ok(total)
    }
}

macro_rules! impl_combinator_fmt {
    ($($ty:ident),*) => {$(
        impl<T: Numeric> fmt::Display for $ty<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt_preview(self, f)
            }
        }

        impl<T: Numeric> fmt::Debug for $ty<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($ty), self)
            }
        }
    )*};
}

impl_combinator_fmt!(BinaryOp, UnaryOp, Diff, Accum);
