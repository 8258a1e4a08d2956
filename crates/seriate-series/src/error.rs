//! Errors raised by series evaluation, indexing and reconstruction.

use std::fmt::Display;
use thiserror::Error;

/// Errors that can occur while evaluating or indexing a series.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SeriesError {
    /// A range request had no upper bound; series are infinite.
    #[error("series range must specify a stop bound")]
    InvalidRange,

    /// An index key was neither an integer nor a range.
    #[error("series indices must be integers or ranges, not {type_name}")]
    UnsupportedKey {
        /// Name of the rejected key type.
        type_name: &'static str,
    },

    /// Values passed to arithmetic reconstruction are not arithmetic.
    #[error("sequence values don't have a constant difference: {0}")]
    NonConstantDifference(DifferenceFault),

    /// A range request used a step of zero.
    #[error("series range step cannot be zero")]
    ZeroStep,

    /// The series has no term at a negative index.
    #[error("{series} series is undefined at negative index {index}")]
    NegativeIndex {
        /// Variant name of the series.
        series: &'static str,
        /// The requested index.
        index: i64,
    },

    /// The index cannot be represented in the term type, or stepping past
    /// it overflows `i64`.
    #[error("index {index} overflows the term type")]
    IndexOverflow {
        /// The requested index.
        index: i64,
    },

    /// An integer key does not fit in an `i64` index.
    #[error("key {key} is out of range for a series index")]
    KeyOverflow {
        /// The key as given.
        key: String,
    },

    /// A term operation has no representable result.
    #[error("{op} is undefined for {operands}")]
    Undefined {
        /// Name of the operation.
        op: &'static str,
        /// The operands, formatted as a tuple.
        operands: String,
    },
}

impl SeriesError {
    /// Builds an `Undefined` error for a binary operation.
    pub fn undefined<A: Display, B: Display>(op: &'static str, lhs: &A, rhs: &B) -> Self {
        Self::Undefined {
            op,
            operands: format!("({lhs}, {rhs})"),
        }
    }

    /// Builds an `Undefined` error for a unary operation.
    pub fn undefined_unary<A: Display>(op: &'static str, operand: &A) -> Self {
        Self::Undefined {
            op,
            operands: format!("({operand})"),
        }
    }
}

/// Why a sequence could not be reconstructed as an arithmetic series.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DifferenceFault {
    /// Fewer than two values were given.
    #[error("need at least 2 values to determine a difference, got {len}")]
    TooShort {
        /// Number of values given.
        len: usize,
    },

    /// A consecutive difference disagrees with the first one.
    #[error("difference at position {position} is {found}, expected {expected}")]
    Mismatch {
        /// Index of the first value of the offending pair.
        position: usize,
        /// The first difference.
        expected: String,
        /// The disagreeing difference.
        found: String,
    },
}

/// Result alias for series operations.
pub type SeriesResult<T> = Result<T, SeriesError>;
