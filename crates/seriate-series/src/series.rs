//! The series capability and its indexing protocol.
//!
//! A series only has to produce its `i`-th term; ranges, slices, dynamic
//! indexing, previews and iteration are all derived from [`Series::term`].

use std::any::{type_name, Any};
use std::fmt;
use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};
use std::sync::Arc;

use seriate_numeric::Numeric;

use crate::error::{SeriesError, SeriesResult};

/// Number of leading terms shown by a series' `Display` output.
pub const PREVIEW_TERMS: i64 = 3;

/// A shared, read-only handle to any series producing `T` terms.
pub type SeriesRef<T> = Arc<dyn Series<Term = T>>;

/// An infinite, lazily evaluated sequence of numbers.
///
/// Implementations must be pure: `term(i)` returns the same value every
/// time it is called with the same `i`.
pub trait Series: Send + Sync {
    /// The type of each term.
    type Term: Numeric;

    /// The variant name, used for display and diagnostics.
    fn name(&self) -> &'static str;

    /// Returns the `i`-th term.
    fn term(&self, i: i64) -> SeriesResult<Self::Term>;

    /// Returns the terms at `start, start + step, ...` up to but excluding
    /// `stop`.
    ///
    /// A negative `step` walks downwards and stops before passing `stop`.
    fn range(&self, start: i64, stop: i64, step: i64) -> SeriesResult<Vec<Self::Term>> {
        if step == 0 {
            return Err(SeriesError::ZeroStep);
        }
        log::trace!("{}: range({start}, {stop}, {step})", self.name());

        let mut terms = Vec::new();
        let mut i = start;
        while (step > 0 && i < stop) || (step < 0 && i > stop) {
            terms.push(self.term(i)?);
            match i.checked_add(step) {
                Some(next) => i = next,
                None => break,
            }
        }
        Ok(terms)
    }

    /// Slice-shaped range request with `start = 0` and `step = 1` defaults.
    ///
    /// The series is infinite, so a missing `stop` is an error.
    fn slice(
        &self,
        start: Option<i64>,
        stop: Option<i64>,
        step: Option<i64>,
    ) -> SeriesResult<Vec<Self::Term>> {
        let stop = stop.ok_or(SeriesError::InvalidRange)?;
        self.range(start.unwrap_or(0), stop, step.unwrap_or(1))
    }

    /// Resolves an index request to a single term or a list of terms.
    fn get(&self, request: IndexRequest) -> SeriesResult<Selection<Self::Term>> {
        match request {
            IndexRequest::Single(i) => self.term(i).map(Selection::Term),
            IndexRequest::Range { start, stop, step } => {
                self.slice(start, stop, step).map(Selection::Terms)
            }
        }
    }

    /// Indexes by any key: integers select a term, ranges select terms.
    ///
    /// # Errors
    ///
    /// `UnsupportedKey` for any other key type, `InvalidRange` for ranges
    /// without an upper bound.
    fn index<K: Any>(&self, key: &K) -> SeriesResult<Selection<Self::Term>>
    where
        Self: Sized,
    {
        self.get(IndexRequest::from_key(key)?)
    }

    /// Returns the first [`PREVIEW_TERMS`] terms.
    fn preview(&self) -> SeriesResult<Vec<Self::Term>> {
        self.range(0, PREVIEW_TERMS, 1)
    }

    /// Returns an unbounded iterator over the terms from index 0.
    fn terms(&self) -> Terms<'_, Self>
    where
        Self: Sized,
    {
        Terms {
            series: self,
            next: Some(0),
        }
    }
}

impl<S: Series + ?Sized> Series for Arc<S> {
    type Term = S::Term;

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn term(&self, i: i64) -> SeriesResult<Self::Term> {
        (**self).term(i)
    }
}

impl<T: Numeric> fmt::Display for dyn Series<Term = T> + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_preview(self, f)
    }
}

/// Writes `"<Variant>: (t0, t1, t2, ...)"`.
///
/// A term that cannot be evaluated is rendered as the error in place of
/// the preview.
pub(crate) fn fmt_preview<S: Series + ?Sized>(series: &S, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match series.preview() {
        Ok(terms) => {
            write!(f, "{}: (", series.name())?;
            for t in &terms {
                write!(f, "{t}, ")?;
            }
            write!(f, "...)")
        }
        Err(err) => write!(f, "{}: (<{err}>)", series.name()),
    }
}

/// An iterator over consecutive terms of a series.
///
/// Never ends on its own; stops only if the index would overflow `i64`.
pub struct Terms<'a, S: ?Sized> {
    series: &'a S,
    next: Option<i64>,
}

impl<S: Series + ?Sized> Iterator for Terms<'_, S> {
    type Item = SeriesResult<S::Term>;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.next?;
        self.next = i.checked_add(1);
        Some(self.series.term(i))
    }
}

/// The shape of an index request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexRequest {
    /// A single term.
    Single(i64),
    /// A slice of terms; missing `start`/`step` default to 0 and 1.
    Range {
        /// First index (inclusive).
        start: Option<i64>,
        /// Bound (exclusive); required when resolved.
        stop: Option<i64>,
        /// Distance between consecutive indices.
        step: Option<i64>,
    },
}

impl IndexRequest {
    /// A bounded range with an explicit step.
    #[must_use]
    pub fn range(start: i64, stop: i64, step: i64) -> Self {
        Self::Range {
            start: Some(start),
            stop: Some(stop),
            step: Some(step),
        }
    }

    /// Classifies a key by its type.
    ///
    /// Accepts `i64`, `i32` and `usize` indices and the standard range
    /// types over those integers, so untyped literals such as `&(0..3)`
    /// work as keys.
    ///
    /// # Errors
    ///
    /// `UnsupportedKey` for any other type, `KeyOverflow` for a `usize`
    /// beyond `i64::MAX` and `IndexOverflow` for an inclusive end of
    /// `i64::MAX`.
    pub fn from_key<K: Any>(key: &K) -> SeriesResult<Self> {
        let key: &dyn Any = key;

        if let Some(request) = classify::<i64>(key)? {
            return Ok(request);
        }
        if let Some(request) = classify::<i32>(key)? {
            return Ok(request);
        }
        if let Some(request) = classify::<usize>(key)? {
            return Ok(request);
        }
        if key.is::<RangeFull>() {
            return Ok(Self::Range {
                start: None,
                stop: None,
                step: None,
            });
        }

        Err(SeriesError::UnsupportedKey {
            type_name: type_name::<K>(),
        })
    }
}

/// Integer types accepted as index keys.
trait IndexKey: Any + Copy + fmt::Display + TryInto<i64> {}

impl IndexKey for i64 {}
impl IndexKey for i32 {}
impl IndexKey for usize {}

fn to_index<I: IndexKey>(key: I) -> SeriesResult<i64> {
    key.try_into()
        .map_err(|_| SeriesError::KeyOverflow { key: key.to_string() })
}

fn inclusive_stop<I: IndexKey>(end: I) -> SeriesResult<i64> {
    let end = to_index(end)?;
    end.checked_add(1)
        .ok_or(SeriesError::IndexOverflow { index: end })
}

/// Recognises an index or range over `I`; `Ok(None)` if `key` is neither.
fn classify<I: IndexKey>(key: &dyn Any) -> SeriesResult<Option<IndexRequest>> {
    let span = |start: Option<i64>, stop: Option<i64>| -> SeriesResult<Option<IndexRequest>> {
        Ok(Some(IndexRequest::Range {
            start,
            stop,
            step: None,
        }))
    };

    if let Some(&i) = key.downcast_ref::<I>() {
        return to_index(i).map(|i| Some(IndexRequest::Single(i)));
    }
    if let Some(r) = key.downcast_ref::<Range<I>>() {
        return span(Some(to_index(r.start)?), Some(to_index(r.end)?));
    }
    if let Some(r) = key.downcast_ref::<RangeInclusive<I>>() {
        return span(Some(to_index(*r.start())?), Some(inclusive_stop(*r.end())?));
    }
    if let Some(r) = key.downcast_ref::<RangeTo<I>>() {
        return span(None, Some(to_index(r.end)?));
    }
    if let Some(r) = key.downcast_ref::<RangeToInclusive<I>>() {
        return span(None, Some(inclusive_stop(r.end)?));
    }
    if let Some(r) = key.downcast_ref::<RangeFrom<I>>() {
        return span(Some(to_index(r.start)?), None);
    }
    Ok(None)
}

/// The result of an index request.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection<T> {
    /// A single term.
    Term(T),
    /// Terms of a range, in request order.
    Terms(Vec<T>),
}

impl<T> Selection<T> {
    /// Returns the term if this is a single-term selection.
    pub fn into_term(self) -> Option<T> {
        match self {
            Selection::Term(t) => Some(t),
            Selection::Terms(_) => None,
        }
    }

    /// Returns the terms if this is a range selection.
    pub fn into_terms(self) -> Option<Vec<T>> {
        match self {
            Selection::Term(_) => None,
            Selection::Terms(ts) => Some(ts),
        }
    }
}
