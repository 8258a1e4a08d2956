//! # Seriate
//!
//! Infinite numeric series as lazy, indexable, composable values.
//!
//! ## Features
//!
//! - **Closed-form series**: arithmetic, geometric and constant
//! - **Composition**: term-wise operators, differences and running totals
//! - **Uniform access**: single terms, half-open ranges and dynamic keys
//! - **Exact terms**: arbitrary precision rationals (feature `rational`)
//!
//! ## Quick Start
//!
//! ```rust
//! use seriate::prelude::*;
//!
//! let evens = Arithmetic::new(0i64, 2);
//! assert_eq!(evens.to_string(), "Arithmetic: (0, 2, 4, ...)");
//!
//! let halves = Geometric::new(2.0f64, 0.5);
//! let total: f64 = halves.range(0, 100, 1).unwrap().iter().sum();
//! assert!((total - 4.0).abs() < 1e-12);
//!
//! let back = diff(accum(evens.clone()));
//! assert_eq!(back.term(5), evens.term(5));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use seriate_numeric as numeric;
pub use seriate_series as series;

/// Prelude module for convenient imports.
pub mod prelude {
    #[cfg(feature = "rational")]
    pub use seriate_numeric::Rational;
    pub use seriate_numeric::Numeric;
    pub use seriate_series::{
        accum, add, as_series, compose, diff, map, mul, neg, power, sub, Accum, Arithmetic,
        BinaryOp, BinaryOperator, Diff, Fixed, Geometric, IndexRequest, Operand, Selection,
        Series, SeriesError, SeriesRef, SeriesResult, UnaryOp, UnaryOperator,
    };
}
