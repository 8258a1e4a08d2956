//! Algebraic composition of series.
//!
//! Every function here accepts either series or plain numbers; numbers are
//! lifted into [`Fixed`] series through [`Operand`] before composing.

use std::sync::Arc;

use seriate_numeric::Numeric;

use crate::arithmetic::Arithmetic;
use crate::combinator::{Accum, BinaryOp, BinaryOperator, Diff, UnaryOp, UnaryOperator};
use crate::fixed::Fixed;
use crate::geometric::Geometric;
use crate::series::{Series, SeriesRef};

/// Something that can take part in a composition: a number or a series.
#[derive(Clone)]
pub enum Operand<T: Numeric> {
    /// A plain number, treated as a constant series.
    Number(T),
    /// Any series.
    Series(SeriesRef<T>),
}

impl<T: Numeric> Operand<T> {
    /// Converts to a series handle, wrapping numbers in [`Fixed`].
    pub fn into_series(self) -> SeriesRef<T> {
        match self {
            Operand::Number(value) => Arc::new(Fixed::new(value)),
            Operand::Series(series) => series,
        }
    }
}

impl<T: Numeric> From<SeriesRef<T>> for Operand<T> {
    fn from(series: SeriesRef<T>) -> Self {
        Operand::Series(series)
    }
}

impl<T: Numeric> From<&SeriesRef<T>> for Operand<T> {
    fn from(series: &SeriesRef<T>) -> Self {
        Operand::Series(Arc::clone(series))
    }
}

macro_rules! impl_operand_from_series {
    ($($ty:ident),*) => {$(
        impl<T: Numeric> From<$ty<T>> for Operand<T> {
            fn from(series: $ty<T>) -> Self {
                Operand::Series(Arc::new(series))
            }
        }
    )*};
}

impl_operand_from_series!(Arithmetic, Geometric, Fixed, BinaryOp, UnaryOp, Diff, Accum);

macro_rules! impl_operand_from_number {
    ($($t:ty),*) => {$(
        impl From<$t> for Operand<$t> {
            fn from(value: $t) -> Self {
                Operand::Number(value)
            }
        }
    )*};
}

impl_operand_from_number!(i32, i64, i128, f32, f64);

#[cfg(feature = "rational")]
impl_operand_from_number!(seriate_numeric::Rational);

/// Converts a number or series into a series handle.
pub fn as_series<T: Numeric>(operand: impl Into<Operand<T>>) -> SeriesRef<T> {
    operand.into().into_series()
}

/// Combines two operands term by term with `op`.
pub fn compose<T: Numeric>(
    op: BinaryOperator<T>,
    lhs: impl Into<Operand<T>>,
    rhs: impl Into<Operand<T>>,
) -> BinaryOp<T> {
    let lhs = as_series(lhs);
    let rhs = as_series(rhs);
    log::debug!("composing {} and {} with {}", lhs.name(), rhs.name(), op.name());
    BinaryOp::new(lhs, rhs, op)
}

/// Applies `op` to every term of an operand.
pub fn map<T: Numeric>(op: UnaryOperator<T>, operand: impl Into<Operand<T>>) -> UnaryOp<T> {
    let operand = as_series(operand);
    log::debug!("mapping {} with {}", operand.name(), op.name());
    UnaryOp::new(operand, op)
}

/// `lhs[i] + rhs[i]`.
///
/// Always builds the generic composition; `Arithmetic + Arithmetic` and
/// `Arithmetic + number` via the `+` operator give the equivalent closed
/// forms.
pub fn add<T: Numeric>(lhs: impl Into<Operand<T>>, rhs: impl Into<Operand<T>>) -> BinaryOp<T> {
    compose(BinaryOperator::add(), lhs, rhs)
}

/// `lhs[i] - rhs[i]`.
pub fn sub<T: Numeric>(lhs: impl Into<Operand<T>>, rhs: impl Into<Operand<T>>) -> BinaryOp<T> {
    compose(BinaryOperator::sub(), lhs, rhs)
}

/// `lhs[i] * rhs[i]`.
pub fn mul<T: Numeric>(lhs: impl Into<Operand<T>>, rhs: impl Into<Operand<T>>) -> BinaryOp<T> {
    compose(BinaryOperator::mul(), lhs, rhs)
}

/// `base[i] ^ exp[i]`.
pub fn power<T: Numeric>(base: impl Into<Operand<T>>, exp: impl Into<Operand<T>>) -> BinaryOp<T> {
    compose(BinaryOperator::pow(), base, exp)
}

/// `-operand[i]`.
pub fn neg<T: Numeric>(operand: impl Into<Operand<T>>) -> UnaryOp<T> {
    map(UnaryOperator::neg(), operand)
}

/// `operand[i + 1] - operand[i]`.
pub fn diff<T: Numeric>(operand: impl Into<Operand<T>>) -> Diff<T> {
    let operand = as_series(operand);
    log::debug!("differencing {}", operand.name());
    Diff::new(operand)
}

/// Running totals of an operand; see [`Accum`].
pub fn accum<T: Numeric>(operand: impl Into<Operand<T>>) -> Accum<T> {
    let operand = as_series(operand);
    log::debug!("accumulating {}", operand.name());
    Accum::new(operand)
}

impl<T: Numeric> std::fmt::Debug for Operand<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Number(value) => write!(f, "Number({value})"),
            Operand::Series(series) => write!(f, "Series({series})"),
        }
    }
}
