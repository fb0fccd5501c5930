//! The list contract, split into a read-only and a mutating half.

use crate::error::ListError;
use std::fmt;

/// Read-only positional access to a sequence.
///
/// This is everything bulk append needs to know about its source: a
/// size and zero-based element lookup. Any container that exposes
/// these two can be appended into a [`List`] via
/// [`List::add_all`], which consumes sources as `&dyn ListView<T>`.
pub trait ListView<T> {
    /// Number of elements currently in the sequence.
    fn len(&self) -> usize;

    /// Borrow the element at `index`.
    ///
    /// Returns `Err(ListError::IndexOutOfBounds)` unless
    /// `index < self.len()`. The sequence is not mutated.
    fn get(&self, index: usize) -> Result<&T, ListError>;

    /// Whether the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A positionally addressable, growable sequence of elements.
///
/// Extends [`ListView`] with mutation: append, positional insertion,
/// in-place replacement, positional and value-based removal, and bulk
/// append from any [`ListView`] source.
///
/// # Index ranges
///
/// Access-type operations ([`get`](ListView::get), [`set`](List::set),
/// [`remove`](List::remove)) accept indices in `0..len`. Insertion
/// ([`insert`](List::insert)) additionally accepts `index == len`,
/// meaning "append at the end". The two ranges are deliberately
/// distinct; implementations must not share a single bounds check
/// between them.
///
/// # Element equality
///
/// [`remove_value`](List::remove_value) matches with `PartialEq`.
/// Callers that need a nullable element type instantiate the list with
/// `Option<U>` elements; derived `Option` equality already treats two
/// `None`s as a match and `None` as distinct from any `Some`.
pub trait List<T>: ListView<T> {
    /// Append `value` at the logical end, growing storage if needed.
    ///
    /// Never fails; amortized O(1).
    fn push(&mut self, value: T);

    /// Insert `value` at `index`, shifting elements at `index..len`
    /// one slot toward the end (order preserved).
    ///
    /// `index == len` is valid and appends. Returns
    /// `Err(ListError::IndexOutOfBounds)` for `index > len`.
    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError>;

    /// Replace the element at `index`, returning the previous value.
    ///
    /// Returns `Err(ListError::IndexOutOfBounds)` unless `index < len`.
    fn set(&mut self, index: usize, value: T) -> Result<T, ListError>;

    /// Remove and return the element at `index`, shifting elements at
    /// `index + 1..len` one slot toward the front.
    ///
    /// Returns `Err(ListError::IndexOutOfBounds)` unless `index < len`.
    fn remove(&mut self, index: usize) -> Result<T, ListError>;

    /// Remove and return the first (lowest-index) element equal to
    /// `value`.
    ///
    /// Scans forward from index 0. Returns
    /// `Err(ListError::ValueNotFound)` if no element matches; the
    /// error carries the searched-for value rendered with `Debug`.
    fn remove_value(&mut self, value: &T) -> Result<T, ListError>
    where
        T: PartialEq + fmt::Debug;

    /// Append every element of `source`, in source order, at the end.
    ///
    /// `None` and empty sources are no-ops. Implementations grow once
    /// up front for the full incoming size. Never fails.
    fn add_all(&mut self, source: Option<&dyn ListView<T>>)
    where
        T: Clone;
}
