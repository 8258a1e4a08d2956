//! Lazy, indexable, composable numeric series.
//!
//! This crate provides:
//! - [`Series`]: the capability every series implements; only
//!   [`Series::term`] is required, ranges, slices and indexing are derived
//! - Closed-form series: [`Arithmetic`], [`Geometric`], [`Fixed`]
//! - Combinators: [`BinaryOp`], [`UnaryOp`], [`Diff`], [`Accum`]
//! - Composition functions in [`ops`] that accept series or plain numbers
//!
//! Series are immutable and evaluated on demand. Composition builds a tree
//! of shared [`SeriesRef`] handles; no term is ever cached.
//!
//! # Example
//!
//! ```
//! use seriate_series::{ops, Arithmetic, Series};
//!
//! let squares = ops::power(Arithmetic::new(0i64, 1), 2i64);
//! assert_eq!(squares.range(0, 4, 1).unwrap(), vec![0, 1, 4, 9]);
//! assert_eq!(squares.to_string(), "BinaryOp: (0, 1, 4, ...)");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arithmetic;
pub mod combinator;
pub mod error;
pub mod fixed;
pub mod geometric;
pub mod ops;
pub mod series;

#[cfg(test)]
mod proptests;

pub use arithmetic::Arithmetic;
pub use combinator::{Accum, BinaryOp, BinaryOperator, Diff, UnaryOp, UnaryOperator};
pub use error::{DifferenceFault, SeriesError, SeriesResult};
pub use fixed::Fixed;
pub use geometric::Geometric;
pub use ops::{accum, add, as_series, compose, diff, map, mul, neg, power, sub, Operand};
pub use series::{IndexRequest, Selection, Series, SeriesRef, Terms, PREVIEW_TERMS};

/// ctor runs this once per test binary so `RUST_LOG` controls test output.
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
