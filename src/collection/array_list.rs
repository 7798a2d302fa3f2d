//! Growable array of unboxed scalars.
//!
//! This module provides [`ScalarArrayList`], a list backed by one contiguous
//! buffer of scalar values.
//!
//! # Overview
//!
//! The list owns a buffer whose length is its capacity, and a logical length.
//! Elements live at `[0, len)`; slots at `[len, capacity)` hold stale values
//! and are never observed.
//!
//! - O(1) amortized append, one growth per bulk append
//! - O(n) single-pass compaction for every value-based removal
//! - O(n) removal at an index (one contiguous shift)
//! - Capacity never shrinks unless [`ScalarArrayList::optimize`] is called
//!
//! # Growth Policy
//!
//! When `required` slots are needed and the capacity `c` is too small, the
//! buffer is reallocated to `max(c + c / 2, c + MIN_GROWTH, required)`.
//!
//! # Examples
//!
//! ```rust
//! use unboxed::prelude::*;
//!
//! let mut list: ScalarArrayList<i64> = ScalarArrayList::from_slice(&[10, 20, 30]);
//!
//! assert_eq!(list.remove_first(20), Ok(true));
//! assert_eq!(list.remove_first(99), Ok(false));
//! assert_eq!(list.add_all(&[40, 50]), Ok(true));
//! assert_eq!(list.as_slice(), &[10, 30, 40, 50]);
//!
//! let array = list.to_array_into(None, 1).unwrap();
//! assert_eq!(array, vec![0, 10, 30, 40, 50]);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Copied;
use std::ops::Index;
use std::slice;

use super::cursor::ArrayCursor;
use super::view::ScalarSliceView;
use super::{ScalarCollection, ScalarIterator, prepare_destination};
use crate::CollectionError;
use crate::scalar::{BoxedScalar, Scalar};

// =============================================================================
// Constants
// =============================================================================

/// Minimum number of slots added by a growth step.
pub const MIN_GROWTH: usize = 4;

/// Returns the capacity to grow to when `required` slots are needed.
const fn grown_capacity(current: usize, required: usize) -> usize {
    let half_again = current.saturating_add(current / 2);
    let minimum_step = current.saturating_add(MIN_GROWTH);
    let candidate = if half_again > minimum_step {
        half_again
    } else {
        minimum_step
    };
    if candidate > required {
        candidate
    } else {
        required
    }
}

// =============================================================================
// ScalarArrayList Definition
// =============================================================================

/// A growable, array-backed list of unboxed scalar values.
///
/// # Time Complexity
///
/// | Operation        | Complexity         |
/// |------------------|--------------------|
/// | `push` / `add`   | O(1) amortized     |
/// | `add_all`        | O(k), one growth   |
/// | `get` / `set`    | O(1)               |
/// | `insert`         | O(n)               |
/// | `remove_at`      | O(n)               |
/// | `remove_first`   | O(n)               |
/// | `remove_all_of`  | O(n)               |
/// | `remove_where`   | O(n)               |
/// | `retain_all`     | O(n * k)           |
/// | `optimize`       | O(n)               |
///
/// # Examples
///
/// ```rust
/// use unboxed::prelude::*;
///
/// let mut list = IntArrayList::new();
/// list.push(3);
/// list.push(1);
/// list.push(3);
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.remove_all_of(3), Ok(true));
/// assert_eq!(list.as_slice(), &[1]);
/// ```
pub struct ScalarArrayList<T> {
    /// Backing storage; its length is the capacity
    buffer: Box<[T]>,
    /// Number of logically present elements
    length: usize,
}

impl<T: Scalar> ScalarArrayList<T> {
    /// Creates a new empty list with no allocated capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unboxed::ScalarArrayList;
    ///
    /// let list: ScalarArrayList<f64> = ScalarArrayList::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: Box::default(),
            length: 0,
        }
    }

    /// Creates a new empty list with room for `capacity` elements.
    ///
    /// A zero hint creates a list with no allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: vec![T::default(); capacity].into_boxed_slice(),
            length: 0,
        }
    }

    /// Creates a list holding a copy of `values`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unboxed::ScalarArrayList;
    ///
    /// let list = ScalarArrayList::from_slice(&['a', 'b']);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.capacity(), 2);
    /// ```
    #[must_use]
    pub fn from_slice(values: &[T]) -> Self {
        Self {
            buffer: Box::from(values),
            length: values.len(),
        }
    }

    /// Creates a list holding a copy of the elements of `source`.
    ///
    /// The source is converted to an array in one step and adopted as the
    /// buffer.
    #[must_use]
    pub fn from_collection<C: ScalarCollection<T>>(source: &C) -> Self {
        Self::from(source.to_vec())
    }

    /// Creates a list by draining a cursor.
    ///
    /// The cursor is left exhausted.
    ///
    /// # Errors
    ///
    /// Any error reported by the cursor while yielding.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unboxed::prelude::*;
    ///
    /// let mut source = LongArrayList::from_slice(&[1, 2, 3]);
    /// let mut cursor = source.cursor();
    /// cursor.next_value().unwrap();
    ///
    /// let rest = LongArrayList::from_cursor(&mut cursor).unwrap();
    /// assert_eq!(rest.as_slice(), &[2, 3]);
    /// ```
    pub fn from_cursor<I>(source: &mut I) -> Result<Self, CollectionError>
    where
        I: ScalarIterator<T> + ?Sized,
    {
        let mut list = Self::new();
        while source.has_next() {
            list.push(source.next_value()?);
        }
        Ok(list)
    }

    /// Creates a list by unwrapping boxed values.
    ///
    /// Items may be given as `BoxedScalar` or `Option<BoxedScalar>`, where
    /// `None` is an absent value.
    ///
    /// # Errors
    ///
    /// [`CollectionError::NullValue`] or [`CollectionError::TypeMismatch`] for
    /// the first item that does not unwrap to a `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unboxed::{BoxedScalar, CollectionError, ScalarArrayList, ScalarKind};
    ///
    /// let list = ScalarArrayList::<i32>::try_from_boxed([BoxedScalar::Int(4), BoxedScalar::Int(2)]);
    /// assert_eq!(list.unwrap().as_slice(), &[4, 2]);
    ///
    /// let list = ScalarArrayList::<i32>::try_from_boxed([Some(BoxedScalar::Int(4)), None]);
    /// assert_eq!(
    ///     list.unwrap_err(),
    ///     CollectionError::NullValue { expected: ScalarKind::Int }
    /// );
    /// ```
    pub fn try_from_boxed<I, B>(source: I) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = B>,
        B: Into<Option<BoxedScalar>>,
    {
        let iter = source.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        for item in iter {
            list.push(T::try_from_boxed(item.into())?);
        }
        Ok(list)
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the number of elements the buffer can hold without growing.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer[..self.length]
    }

    /// Returns a read-only view over the elements.
    #[must_use]
    pub fn as_view(&self) -> ScalarSliceView<'_, T> {
        ScalarSliceView::new(self.as_slice())
    }

    /// Returns an iterator over the elements by value.
    #[inline]
    pub fn iter(&self) -> Copied<slice::Iter<'_, T>> {
        self.as_slice().iter().copied()
    }

    /// Returns the element at `index`, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).copied()
    }

    /// Returns the first element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<T> {
        self.as_slice().first().copied()
    }

    /// Returns the last element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<T> {
        self.as_slice().last().copied()
    }

    /// Returns the index of the first element equivalent to `value`.
    #[must_use]
    pub fn index_of(&self, value: T) -> Option<usize> {
        self.as_slice()
            .iter()
            .position(|&element| element.equivalent(value))
    }

    /// Returns the index of the last element equivalent to `value`.
    #[must_use]
    pub fn last_index_of(&self, value: T) -> Option<usize> {
        self.as_slice()
            .iter()
            .rposition(|&element| element.equivalent(value))
    }

    /// Replaces the element at `index`, returning the previous value.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBounds`] if `index >= len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, CollectionError> {
        self.check_index(index)?;
        let previous = self.buffer[index];
        self.buffer[index] = value;
        Ok(previous)
    }

    // -------------------------------------------------------------------------
    // Capacity
    // -------------------------------------------------------------------------

    /// Grows the buffer so it can hold at least `min_capacity` elements.
    ///
    /// Growth follows the list's growth policy, so the resulting capacity may
    /// exceed `min_capacity`. Does nothing if the capacity already suffices.
    pub fn ensure_capacity(&mut self, min_capacity: usize) {
        if min_capacity <= self.buffer.len() {
            return;
        }
        let capacity = grown_capacity(self.buffer.len(), min_capacity);
        let mut buffer = vec![T::default(); capacity].into_boxed_slice();
        buffer[..self.length].copy_from_slice(self.as_slice());
        self.buffer = buffer;
    }

    /// Reallocates the buffer to exactly [`len`](Self::len) slots.
    ///
    /// Does nothing if the capacity already equals the length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unboxed::prelude::*;
    ///
    /// let mut list = ShortArrayList::with_capacity(16);
    /// list.push(1);
    /// list.optimize();
    /// assert_eq!(list.capacity(), 1);
    /// ```
    pub fn optimize(&mut self) {
        if self.buffer.len() != self.length {
            self.buffer = Box::from(self.as_slice());
        }
    }

    // -------------------------------------------------------------------------
    // Infallible Mutation
    // -------------------------------------------------------------------------

    /// Appends `value`.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.ensure_capacity(self.length + 1);
        self.buffer[self.length] = value;
        self.length += 1;
    }

    /// Appends every value in `values` with at most one growth.
    pub fn extend_from_slice(&mut self, values: &[T]) {
        let new_length = self.length + values.len();
        self.ensure_capacity(new_length);
        self.buffer[self.length..new_length].copy_from_slice(values);
        self.length = new_length;
    }

    /// Shortens the list to `length` elements.
    ///
    /// Does nothing if the list is already shorter. The capacity is kept.
    pub fn truncate(&mut self, length: usize) {
        if length < self.length {
            self.length = length;
        }
    }

    // -------------------------------------------------------------------------
    // Positional Mutation
    // -------------------------------------------------------------------------

    /// Inserts `value` at `index`, shifting later elements right.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBounds`] if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), CollectionError> {
        self.check_insertion_index(index)?;
        self.ensure_capacity(self.length + 1);
        self.buffer.copy_within(index..self.length, index + 1);
        self.buffer[index] = value;
        self.length += 1;
        Ok(())
    }

    /// Inserts every value in `values` at `index`, shifting later elements
    /// right once.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBounds`] if `index > len`.
    pub fn insert_all(&mut self, index: usize, values: &[T]) -> Result<bool, CollectionError> {
        self.check_insertion_index(index)?;
        if values.is_empty() {
            return Ok(false);
        }
        let count = values.len();
        self.ensure_capacity(self.length + count);
        self.buffer.copy_within(index..self.length, index + count);
        self.buffer[index..index + count].copy_from_slice(values);
        self.length += count;
        Ok(true)
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// left.
    ///
    /// # Errors
    ///
    /// [`CollectionError::IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unboxed::prelude::*;
    ///
    /// let mut list = ByteArrayList::from_slice(&[1, 2, 3]);
    /// assert_eq!(list.remove_at(0), Ok(1));
    /// assert_eq!(list.as_slice(), &[2, 3]);
    /// assert!(list.remove_at(2).is_err());
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        self.check_index(index)?;
        let removed = self.buffer[index];
        self.buffer.copy_within(index + 1..self.length, index);
        self.length -= 1;
        Ok(removed)
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    const fn check_index(&self, index: usize) -> Result<(), CollectionError> {
        if index < self.length {
            Ok(())
        } else {
            Err(CollectionError::IndexOutOfBounds {
                index,
                length: self.length,
            })
        }
    }

    const fn check_insertion_index(&self, index: usize) -> Result<(), CollectionError> {
        if index <= self.length {
            Ok(())
        } else {
            Err(CollectionError::IndexOutOfBounds {
                index,
                length: self.length,
            })
        }
    }

    /// Drops every element for which `discard` returns `true` in one pass,
    /// moving survivors left. Returns `true` if anything was dropped.
    ///
    /// If `discard` panics, the elements already visited stay compacted and
    /// the unvisited tail is kept, so no element is duplicated or lost.
    fn compact<P>(&mut self, mut discard: P) -> bool
    where
        P: FnMut(T) -> bool,
    {
        let original = self.length;
        let mut pass = CompactPass {
            list: self,
            read: 0,
            write: 0,
        };
        while pass.read < original {
            let value = pass.list.buffer[pass.read];
            let dropped = discard(value);
            if !dropped {
                pass.list.buffer[pass.write] = value;
                pass.write += 1;
            }
            pass.read += 1;
        }
        pass.write != original
    }
}

/// Progress of a [`ScalarArrayList::compact`] pass.
///
/// Dropping it closes the gap between the kept prefix and the unvisited
/// tail and fixes up the length, whether the pass finished or unwound.
struct CompactPass<'a, T: Scalar> {
    list: &'a mut ScalarArrayList<T>,
    /// Elements in `[0, read)` have been visited
    read: usize,
    /// Survivors occupy `[0, write)`
    write: usize,
}

impl<T: Scalar> Drop for CompactPass<'_, T> {
    fn drop(&mut self) {
        let length = self.list.length;
        if self.read < length && self.write != self.read {
            self.list.buffer.copy_within(self.read..length, self.write);
        }
        self.list.length = self.write + (length - self.read);
    }
}

// =============================================================================
// ScalarCollection Implementation
// =============================================================================

impl<T: Scalar> ScalarCollection<T> for ScalarArrayList<T> {
    type Cursor<'a> = ArrayCursor<'a, T>;

    #[inline]
    fn len(&self) -> usize {
        self.length
    }

    fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.iter()
    }

    fn cursor(&mut self) -> Self::Cursor<'_> {
        ArrayCursor::new(self)
    }

    fn add(&mut self, value: T) -> Result<bool, CollectionError> {
        self.push(value);
        Ok(true)
    }

    fn add_all(&mut self, values: &[T]) -> Result<bool, CollectionError> {
        self.extend_from_slice(values);
        Ok(!values.is_empty())
    }

    fn add_all_from<C: ScalarCollection<T>>(&mut self, other: &C) -> Result<bool, CollectionError> {
        let values = other.to_vec();
        self.extend_from_slice(&values);
        Ok(!values.is_empty())
    }

    fn contains(&self, value: T) -> bool {
        self.index_of(value).is_some()
    }

    fn remove_first(&mut self, value: T) -> Result<bool, CollectionError> {
        match self.index_of(value) {
            Some(index) => self.remove_at(index).map(|_| true),
            None => Ok(false),
        }
    }

    fn remove_all_of(&mut self, value: T) -> Result<bool, CollectionError> {
        Ok(self.compact(|element| element.equivalent(value)))
    }

    fn remove_where<P>(&mut self, predicate: P) -> Result<bool, CollectionError>
    where
        P: FnMut(T) -> bool,
    {
        Ok(self.compact(predicate))
    }

    fn clear(&mut self) -> Result<(), CollectionError> {
        self.length = 0;
        Ok(())
    }

    fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }

    fn to_array_into(
        &self,
        dest: Option<Vec<T>>,
        start_index: isize,
    ) -> Result<Vec<T>, CollectionError> {
        let (mut target, start) = prepare_destination(dest, start_index, self.length)?;
        target[start..start + self.length].copy_from_slice(self.as_slice());
        Ok(target)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: Scalar> Clone for ScalarArrayList<T> {
    fn clone(&self) -> Self {
        Self::from_slice(self.as_slice())
    }
}

impl<T: Scalar> Default for ScalarArrayList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> From<Vec<T>> for ScalarArrayList<T> {
    fn from(values: Vec<T>) -> Self {
        let length = values.len();
        Self {
            buffer: values.into_boxed_slice(),
            length,
        }
    }
}

impl<T: Scalar> From<&[T]> for ScalarArrayList<T> {
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}

impl<T: Scalar> From<Option<&[T]>> for ScalarArrayList<T> {
    fn from(values: Option<&[T]>) -> Self {
        values.map_or_else(Self::new, Self::from_slice)
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for ScalarArrayList<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_slice(&values)
    }
}

impl<T: Scalar> FromIterator<T> for ScalarArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: Scalar> Extend<T> for ScalarArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.ensure_capacity(self.length + iter.size_hint().0);
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T: Scalar> Extend<&'a T> for ScalarArrayList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Scalar> IntoIterator for ScalarArrayList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut values = self.buffer.into_vec();
        values.truncate(self.length);
        values.into_iter()
    }
}

impl<'a, T: Scalar> IntoIterator for &'a ScalarArrayList<T> {
    type Item = T;
    type IntoIter = Copied<slice::Iter<'a, T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Scalar> Index<usize> for ScalarArrayList<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T: Scalar> PartialEq for ScalarArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length
            && self
                .iter()
                .zip(other.iter())
                .all(|(left, right)| left.equivalent(right))
    }
}

impl<T: Scalar> Eq for ScalarArrayList<T> {}

impl<T: Scalar> Hash for ScalarArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for value in self {
            value.hash_scalar(state);
        }
    }
}

impl<T: Scalar> fmt::Debug for ScalarArrayList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Scalar> fmt::Display for ScalarArrayList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for value in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "]")
    }
}

static_assertions::assert_impl_all!(ScalarArrayList<i64>: Send, Sync, Clone, Default, Eq, Hash);
static_assertions::assert_impl_all!(ScalarArrayList<char>: Send, Sync, Clone, Default);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: Scalar + serde::Serialize> serde::Serialize for ScalarArrayList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(&value)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ScalarArrayListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> ScalarArrayListVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for ScalarArrayListVisitor<T>
where
    T: Scalar + serde::Deserialize<'de>,
{
    type Value = ScalarArrayList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of scalars")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut list = ScalarArrayList::with_capacity(capacity);
        while let Some(value) = seq.next_element()? {
            list.push(value);
        }
        Ok(list)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for ScalarArrayList<T>
where
    T: Scalar + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ScalarArrayListVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_logical_elements() {
        let mut list = ScalarArrayList::<i32>::with_capacity(8);
        list.extend_from_slice(&[1, 2, 3]);
        assert_eq!(serde_json::to_string(&list).unwrap(), "[1,2,3]");
    }

    #[rstest]
    fn test_deserialize() {
        let list: ScalarArrayList<char> = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(list.as_slice(), &['a', 'b']);
    }
}
