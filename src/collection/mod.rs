//! Scalar collections and their mutating cursors.
//!
//! This module provides:
//!
//! - [`ScalarCollection`]: The capability trait every container implements,
//!   with cursor-based default implementations of the bulk operations
//! - [`ScalarIterator`]: The cursor protocol, allowing removal of the element
//!   most recently yielded
//! - [`ScalarArrayList`]: A growable array of unboxed scalars that overrides
//!   the defaults with direct buffer manipulation
//! - [`ScalarSliceView`]: A read-only view over a borrowed slice
//!
//! # Default and Fast Paths
//!
//! A container only has to say how long it is, how to read its values and
//! how to open a cursor. Everything else (value removal, retention, range
//! operations, conversion to arrays) has a default that traverses the
//! cursor and removes through it. Those defaults are O(n²) in the worst case
//! for array storage, so [`ScalarArrayList`] replaces them with single-pass
//! compaction.
//!
//! # Examples
//!
//! ```rust
//! use unboxed::prelude::*;
//!
//! let mut list = LongArrayList::from_slice(&[10, 20, 30]);
//!
//! // Filter in place through the cursor
//! let mut cursor = list.cursor();
//! while let Some(value) = cursor.next() {
//!     if value == 20 {
//!         cursor.remove().unwrap();
//!     }
//! }
//! assert_eq!(list.as_slice(), &[10, 30]);
//! ```

mod array_list;
mod cursor;
mod view;

pub use array_list::MIN_GROWTH;
pub use array_list::ScalarArrayList;
pub use cursor::ArrayCursor;
pub use view::ScalarSliceView;
pub use view::SliceCursor;

use crate::CollectionError;
use crate::scalar::{RangeScalar, Scalar};

// =============================================================================
// ScalarIterator
// =============================================================================

/// A forward cursor over a scalar collection that can remove the element it
/// most recently yielded.
///
/// The cursor sits at a position in `[0, len]`. [`next_value`](Self::next_value)
/// yields the element at that position and remembers it;
/// [`remove`](Self::remove) removes the remembered element and steps the
/// position back so the element that shifts into the freed slot is yielded
/// next. Removal is legal only once per yield.
///
/// # State Transitions
///
/// ```text
///              next_value               remove
///   Fresh ──────────────────► Yielded ───────────► Fresh
///     ▲                          │
///     │ reset                    │ next_value (cursor == len)
///     └────────────────────── Exhausted ◄── Err(Exhausted)
/// ```
pub trait ScalarIterator<T: Scalar> {
    /// Returns `true` if another element can be yielded.
    fn has_next(&self) -> bool;

    /// Yields the element at the cursor and advances past it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Exhausted`] if [`has_next`](Self::has_next)
    /// is `false`.
    fn next_value(&mut self) -> Result<T, CollectionError>;

    /// Removes the element most recently yielded.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::IllegalState`] if nothing has been yielded since
    ///   creation, the last removal, or the last reset
    /// - [`CollectionError::Unsupported`] if the underlying collection is
    ///   read-only
    fn remove(&mut self) -> Result<(), CollectionError>;

    /// Moves the cursor back to the first element.
    ///
    /// The cursor stays bound to the same collection and sees its current
    /// contents.
    fn reset(&mut self);

    /// Returns `true` if [`remove`](Self::remove) is supported.
    fn is_modifiable(&self) -> bool {
        true
    }
}

// =============================================================================
// ScalarCollection
// =============================================================================

/// An ordered collection of unboxed scalars.
///
/// Implementors provide [`len`](Self::len), [`values`](Self::values) and
/// [`cursor`](Self::cursor). Every other operation has a default built on
/// those three; containers backed by contiguous storage override the
/// defaults with faster versions.
///
/// Mutating operations return `Result`. On a collection whose
/// [`is_modifiable`](Self::is_modifiable) is `false` they fail with
/// [`CollectionError::Unsupported`] before anything is changed. Operations
/// returning `bool` report whether the collection changed.
pub trait ScalarCollection<T: Scalar> {
    /// The cursor type returned by [`cursor`](Self::cursor).
    type Cursor<'a>: ScalarIterator<T>
    where
        Self: 'a;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns an iterator over the elements in order.
    fn values(&self) -> impl Iterator<Item = T> + '_;

    /// Opens a cursor positioned before the first element.
    fn cursor(&mut self) -> Self::Cursor<'_>;

    /// Returns `true` if the collection contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the collection supports structural mutation.
    fn is_modifiable(&self) -> bool {
        true
    }

    // -------------------------------------------------------------------------
    // Addition
    // -------------------------------------------------------------------------

    /// Appends `value`.
    ///
    /// # Errors
    ///
    /// The default implementation always returns
    /// [`CollectionError::Unsupported`].
    fn add(&mut self, value: T) -> Result<bool, CollectionError> {
        let _ = value;
        Err(CollectionError::Unsupported { operation: "add" })
    }

    /// Appends every value in `values`, in order.
    ///
    /// # Errors
    ///
    /// Any error reported by [`add`](Self::add).
    fn add_all(&mut self, values: &[T]) -> Result<bool, CollectionError> {
        require_modifiable(self.is_modifiable(), "add_all")?;
        let mut changed = false;
        for &value in values {
            changed |= self.add(value)?;
        }
        Ok(changed)
    }

    /// Appends every element of `other`, in order.
    ///
    /// # Errors
    ///
    /// Any error reported by [`add_all`](Self::add_all).
    fn add_all_from<C: ScalarCollection<T>>(&mut self, other: &C) -> Result<bool, CollectionError> {
        let values = other.to_vec();
        self.add_all(&values)
    }

    /// Appends the values of the inclusive range `[start, end]` in ascending
    /// order.
    ///
    /// An inverted range appends nothing and returns `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Any error reported by [`add_all`](Self::add_all).
    fn add_range(&mut self, start: T, end: T) -> Result<bool, CollectionError>
    where
        T: RangeScalar,
    {
        require_modifiable(self.is_modifiable(), "add_range")?;
        let values: Vec<T> = T::values_between(start, end).collect();
        if values.is_empty() {
            return Ok(false);
        }
        self.add_all(&values)
    }

    // -------------------------------------------------------------------------
    // Membership
    // -------------------------------------------------------------------------

    /// Returns `true` if some element is equivalent to `value`.
    fn contains(&self, value: T) -> bool {
        self.values().any(|element| element.equivalent(value))
    }

    /// Returns `true` if every value in `values` is contained.
    fn contains_all(&self, values: &[T]) -> bool {
        values.iter().all(|&value| self.contains(value))
    }

    /// Returns `true` if at least one value in `values` is contained.
    fn contains_any(&self, values: &[T]) -> bool {
        values.iter().any(|&value| self.contains(value))
    }

    /// Returns `true` if every element of `other` is contained.
    fn contains_all_in<C: ScalarCollection<T>>(&self, other: &C) -> bool {
        other.values().all(|value| self.contains(value))
    }

    /// Returns `true` if at least one element of `other` is contained.
    fn contains_any_in<C: ScalarCollection<T>>(&self, other: &C) -> bool {
        other.values().any(|value| self.contains(value))
    }

    /// Returns `true` if every value of `[start, end]` is contained.
    ///
    /// An inverted range is vacuously contained.
    fn contains_all_range(&self, start: T, end: T) -> bool
    where
        T: RangeScalar,
    {
        T::values_between(start, end).all(|value| self.contains(value))
    }

    /// Returns `true` if at least one value of `[start, end]` is contained.
    ///
    /// An inverted range is never contained.
    fn contains_any_range(&self, start: T, end: T) -> bool
    where
        T: RangeScalar,
    {
        T::values_between(start, end).any(|value| self.contains(value))
    }

    // -------------------------------------------------------------------------
    // Removal
    // -------------------------------------------------------------------------

    /// Removes the first element equivalent to `value`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Unsupported`] on a read-only collection.
    fn remove_first(&mut self, value: T) -> Result<bool, CollectionError> {
        require_modifiable(self.is_modifiable(), "remove_first")?;
        let mut cursor = self.cursor();
        while cursor.has_next() {
            if cursor.next_value()?.equivalent(value) {
                cursor.remove()?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Removes every element equivalent to `value`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Unsupported`] on a read-only collection.
    fn remove_all_of(&mut self, value: T) -> Result<bool, CollectionError> {
        self.remove_where(|element| element.equivalent(value))
    }

    /// Removes every element equivalent to some value in `values`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Unsupported`] on a read-only collection.
    fn remove_all(&mut self, values: &[T]) -> Result<bool, CollectionError> {
        self.remove_where(|element| values.iter().any(|&value| value.equivalent(element)))
    }

    /// Removes every element also contained in `other`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Unsupported`] on a read-only collection.
    fn remove_all_in<C: ScalarCollection<T>>(&mut self, other: &C) -> Result<bool, CollectionError> {
        let values = other.to_vec();
        self.remove_all(&values)
    }

    /// Removes every element lying within `[start, end]`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Unsupported`] on a read-only collection.
    fn remove_range(&mut self, start: T, end: T) -> Result<bool, CollectionError>
    where
        T: RangeScalar,
    {
        self.remove_where(|element| element.is_within(start, end))
    }

    /// Removes every element for which `predicate` returns `true`.
    ///
    /// The default walks the cursor and removes through it.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Unsupported`] on a read-only collection.
    fn remove_where<P>(&mut self, mut predicate: P) -> Result<bool, CollectionError>
    where
        P: FnMut(T) -> bool,
    {
        require_modifiable(self.is_modifiable(), "remove_where")?;
        let mut removed = false;
        let mut cursor = self.cursor();
        while cursor.has_next() {
            if predicate(cursor.next_value()?) {
                cursor.remove()?;
                removed = true;
            }
        }
        Ok(removed)
    }

    /// Removes every element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Unsupported`] on a read-only collection.
    fn clear(&mut self) -> Result<(), CollectionError> {
        require_modifiable(self.is_modifiable(), "clear")?;
        let mut cursor = self.cursor();
        while cursor.has_next() {
            cursor.next_value()?;
            cursor.remove()?;
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Retention
    // -------------------------------------------------------------------------

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Unsupported`] on a read-only collection.
    fn retain_where<P>(&mut self, mut predicate: P) -> Result<bool, CollectionError>
    where
        P: FnMut(T) -> bool,
    {
        self.remove_where(|element| !predicate(element))
    }

    /// Keeps only the elements equivalent to some value in `values`.
    ///
    /// Retaining against an empty slice empties the collection.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Unsupported`] on a read-only collection.
    fn retain_all(&mut self, values: &[T]) -> Result<bool, CollectionError> {
        if values.is_empty() {
            let changed = !self.is_empty();
            self.clear()?;
            return Ok(changed);
        }
        self.retain_where(|element| values.iter().any(|&value| value.equivalent(element)))
    }

    /// Keeps only the elements also contained in `other`.
    ///
    /// An absent or empty `other` empties the collection.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Unsupported`] on a read-only collection.
    fn retain_all_in<C: ScalarCollection<T>>(
        &mut self,
        other: Option<&C>,
    ) -> Result<bool, CollectionError> {
        match other {
            Some(other) => {
                let values = other.to_vec();
                self.retain_all(&values)
            }
            None => {
                let changed = !self.is_empty();
                self.clear()?;
                Ok(changed)
            }
        }
    }

    /// Keeps only the elements lying within `[start, end]`.
    ///
    /// An inverted range retains nothing.
    ///
    /// # Errors
    ///
    /// [`CollectionError::Unsupported`] on a read-only collection.
    fn retain_range(&mut self, start: T, end: T) -> Result<bool, CollectionError>
    where
        T: RangeScalar,
    {
        self.retain_where(|element| element.is_within(start, end))
    }

    // -------------------------------------------------------------------------
    // Conversion
    // -------------------------------------------------------------------------

    /// Copies the elements into a new vector of exactly [`len`](Self::len)
    /// elements.
    fn to_vec(&self) -> Vec<T> {
        self.values().collect()
    }

    /// Writes the elements into `dest` starting at `start_index`.
    ///
    /// If `dest` has room for every element from `start_index` on, it is
    /// filled in place and returned. Otherwise a new vector of
    /// `start_index + len` elements is returned, holding the prefix
    /// `[0, start_index)` of `dest` (as far as `dest` reaches) followed by the
    /// elements. Slots not covered by either hold the kind's default value.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NegativeIndex`] if `start_index` is
    /// negative, whatever `dest` is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unboxed::prelude::*;
    ///
    /// let list = LongArrayList::from_slice(&[10, 30, 40, 50]);
    /// let array = list.to_array_into(None, 1).unwrap();
    /// assert_eq!(array, vec![0, 10, 30, 40, 50]);
    /// ```
    fn to_array_into(
        &self,
        dest: Option<Vec<T>>,
        start_index: isize,
    ) -> Result<Vec<T>, CollectionError> {
        let (mut target, start) = prepare_destination(dest, start_index, self.len())?;
        for (slot, value) in target[start..].iter_mut().zip(self.values()) {
            *slot = value;
        }
        Ok(target)
    }
}

// =============================================================================
// Helpers
// =============================================================================

pub(crate) const fn require_modifiable(
    modifiable: bool,
    operation: &'static str,
) -> Result<(), CollectionError> {
    if modifiable {
        Ok(())
    } else {
        Err(CollectionError::Unsupported { operation })
    }
}

/// Resolves the target of `to_array_into` and the offset to write at.
///
/// The returned vector is at least `start + length` long. A start so large
/// that no vector of that length can exist is reported as out of bounds.
pub(crate) fn prepare_destination<T: Scalar>(
    dest: Option<Vec<T>>,
    start_index: isize,
    length: usize,
) -> Result<(Vec<T>, usize), CollectionError> {
    let start = usize::try_from(start_index)
        .map_err(|_| CollectionError::NegativeIndex { index: start_index })?;
    let required = start
        .checked_add(length)
        .filter(|required| {
            required
                .checked_mul(size_of::<T>())
                .is_some_and(|bytes| bytes <= isize::MAX.unsigned_abs())
        })
        .ok_or(CollectionError::IndexOutOfBounds {
            index: start,
            length,
        })?;
    let target = match dest {
        Some(dest) if dest.len() >= required => dest,
        Some(dest) => {
            let mut grown = vec![T::default(); required];
            let prefix = start.min(dest.len());
            grown[..prefix].copy_from_slice(&dest[..prefix]);
            grown
        }
        None => vec![T::default(); required],
    };
    Ok((target, start))
}

// =============================================================================
// Tests
// =============================================================================
