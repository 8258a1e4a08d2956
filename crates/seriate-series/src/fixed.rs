//! Constant series.

use std::fmt;

use seriate_numeric::Numeric;

use crate::error::SeriesResult;
use crate::series::{fmt_preview, Series};

/// The series c, c, c, ...
///
/// Plain numbers are lifted into `Fixed` when they are combined with
/// series.
#[derive(Clone, Debug, PartialEq)]
pub struct Fixed<T: Numeric> {
    value: T,
}

impl<T: Numeric> Fixed<T> {
    /// Creates the constant series.
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns the constant.
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: Numeric> Series for Fixed<T> {
    type Term = T;

    fn name(&self) -> &'static str {
        "Fixed"
    }

    fn term(&self, _i: i64) -> SeriesResult<T> {
        Ok(self.value.clone())
    }
}

impl<T: Numeric> fmt::Display for Fixed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_preview(self, f)
    }
}
