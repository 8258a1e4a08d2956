//! # seriate-numeric
//!
//! Term types for seriate series.
//!
//! This crate provides:
//! - The [`Numeric`] trait every series term type implements
//! - Implementations for `i32`, `i64`, `i128`, `f32` and `f64`
//! - An exact arbitrary precision [`Rational`] (feature `rational`, on by
//!   default), backed by `dashu`
//!
//! Fallible operations (`powi`, `pow`, `from_index`) return `None` rather
//! than panicking; the series layer turns these into typed errors.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod primitive;
#[cfg(feature = "rational")]
pub mod rational;
pub mod traits;

#[cfg(test)]
mod proptests;

#[cfg(feature = "rational")]
pub use rational::Rational;
pub use traits::Numeric;
