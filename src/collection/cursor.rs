//! Mutating cursor over a [`ScalarArrayList`].

use super::{ScalarArrayList, ScalarIterator};
use crate::CollectionError;
use crate::scalar::Scalar;

/// A cursor over a [`ScalarArrayList`] that can remove the element it most
/// recently yielded.
///
/// The cursor holds the list by exclusive borrow, so the list cannot be
/// changed by any other path while the cursor is alive.
///
/// `ArrayCursor` also implements [`Iterator`], so it can drive a `while let`
/// loop that removes elements as it goes:
///
/// ```rust
/// use unboxed::prelude::*;
///
/// let mut list = IntArrayList::from_slice(&[1, 2, 3, 4, 5, 6]);
/// let mut cursor = list.cursor();
/// while let Some(value) = cursor.next() {
///     if value % 2 == 0 {
///         cursor.remove().unwrap();
///     }
/// }
/// assert_eq!(list.as_slice(), &[1, 3, 5]);
/// ```
pub struct ArrayCursor<'a, T> {
    /// The list being traversed
    list: &'a mut ScalarArrayList<T>,
    /// Index of the next element to yield, in `[0, len]`
    position: usize,
    /// Index of the element most recently yielded, if it may still be removed
    last_returned: Option<usize>,
}

impl<'a, T: Scalar> ArrayCursor<'a, T> {
    pub(crate) const fn new(list: &'a mut ScalarArrayList<T>) -> Self {
        Self {
            list,
            position: 0,
            last_returned: None,
        }
    }

    /// Returns the index of the element the next call to `next_value` yields.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the element the next call to `next_value` would yield,
    /// without advancing.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<T> {
        self.list.get(self.position)
    }

    /// Returns the list the cursor traverses.
    #[must_use]
    pub fn list(&self) -> &ScalarArrayList<T> {
        self.list
    }
}

impl<T: Scalar> ScalarIterator<T> for ArrayCursor<'_, T> {
    #[inline]
    fn has_next(&self) -> bool {
        self.position < self.list.len()
    }

    fn next_value(&mut self) -> Result<T, CollectionError> {
        let value = self.list.get(self.position).ok_or(CollectionError::Exhausted)?;
        self.last_returned = Some(self.position);
        self.position += 1;
        Ok(value)
    }

    fn remove(&mut self) -> Result<(), CollectionError> {
        let index = self
            .last_returned
            .ok_or(CollectionError::IllegalState { operation: "remove" })?;
        self.list.remove_at(index)?;
        self.position = index;
        self.last_returned = None;
        Ok(())
    }

    fn reset(&mut self) {
        self.position = 0;
        self.last_returned = None;
    }
}

impl<T: Scalar> Iterator for ArrayCursor<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next_value().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<T: Scalar> ExactSizeIterator for ArrayCursor<'_, T> {}

static_assertions::assert_not_impl_any!(ArrayCursor<'static, i64>: Clone, Copy);
