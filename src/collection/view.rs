//! Read-only collection over a borrowed slice.

use super::{ScalarCollection, ScalarIterator};
use crate::CollectionError;
use crate::scalar::Scalar;

/// A read-only [`ScalarCollection`] over a borrowed slice.
///
/// Every query works as on any other collection. Every structural mutation
/// fails with [`CollectionError::Unsupported`], and
/// [`is_modifiable`](ScalarCollection::is_modifiable) returns `false` so
/// callers can check ahead of time.
///
/// # Examples
///
/// ```rust
/// use unboxed::prelude::*;
///
/// let values = [1_i64, 2, 3];
/// let mut view = ScalarSliceView::new(&values);
///
/// assert!(view.contains(2));
/// assert!(!view.is_modifiable());
/// assert!(view.add(4).unwrap_err().is_unsupported());
/// assert!(view.remove_first(2).unwrap_err().is_unsupported());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScalarSliceView<'a, T> {
    values: &'a [T],
}

impl<'a, T: Scalar> ScalarSliceView<'a, T> {
    /// Creates a view over `values`.
    #[inline]
    #[must_use]
    pub const fn new(values: &'a [T]) -> Self {
        Self { values }
    }

    /// Returns the viewed slice.
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &'a [T] {
        self.values
    }
}

impl<'a, T: Scalar> From<&'a [T]> for ScalarSliceView<'a, T> {
    fn from(values: &'a [T]) -> Self {
        Self::new(values)
    }
}

impl<T: Scalar> ScalarCollection<T> for ScalarSliceView<'_, T> {
    type Cursor<'b>
        = SliceCursor<'b, T>
    where
        Self: 'b;

    #[inline]
    fn len(&self) -> usize {
        self.values.len()
    }

    fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.values.iter().copied()
    }

    fn cursor(&mut self) -> Self::Cursor<'_> {
        SliceCursor::new(self.values)
    }

    fn is_modifiable(&self) -> bool {
        false
    }

    fn to_vec(&self) -> Vec<T> {
        self.values.to_vec()
    }
}

/// A cursor over a [`ScalarSliceView`]. Removal is unsupported.
#[derive(Debug, Clone)]
pub struct SliceCursor<'a, T> {
    values: &'a [T],
    position: usize,
}

impl<'a, T: Scalar> SliceCursor<'a, T> {
    const fn new(values: &'a [T]) -> Self {
        Self {
            values,
            position: 0,
        }
    }
}

impl<T: Scalar> ScalarIterator<T> for SliceCursor<'_, T> {
    #[inline]
    fn has_next(&self) -> bool {
        self.position < self.values.len()
    }

    fn next_value(&mut self) -> Result<T, CollectionError> {
        let value = *self
            .values
            .get(self.position)
            .ok_or(CollectionError::Exhausted)?;
        self.position += 1;
        Ok(value)
    }

    fn remove(&mut self) -> Result<(), CollectionError> {
        Err(CollectionError::Unsupported { operation: "remove" })
    }

    fn reset(&mut self) {
        self.position = 0;
    }

    fn is_modifiable(&self) -> bool {
        false
    }
}

impl<T: Scalar> Iterator for SliceCursor<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next_value().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.values.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl<T: Scalar> ExactSizeIterator for SliceCursor<'_, T> {}
