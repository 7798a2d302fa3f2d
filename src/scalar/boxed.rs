//! The boxed representation of scalar values and the adapter seam built on it.
//!
//! Collections store unboxed values only. [`BoxedScalar`] exists for callers
//! that handle values of several kinds through one type, and
//! [`BoxedCollection`] lets any [`ScalarCollection`] be driven with boxed
//! values, unwrapping them to the collection's own kind at the boundary.

use std::fmt;

use super::{Scalar, ScalarKind};
use crate::CollectionError;
use crate::collection::{ScalarCollection, require_modifiable};

/// A scalar value tagged with its kind.
///
/// # Examples
///
/// ```rust
/// use unboxed::{BoxedScalar, Scalar, ScalarKind};
///
/// let boxed = 10_i64.into_boxed();
/// assert_eq!(boxed, BoxedScalar::Long(10));
/// assert_eq!(boxed.kind(), ScalarKind::Long);
/// assert_eq!(format!("{boxed}"), "10");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoxedScalar {
    /// A boxed `bool`.
    Boolean(bool),
    /// A boxed `i8`.
    Byte(i8),
    /// A boxed `i16`.
    Short(i16),
    /// A boxed `i32`.
    Int(i32),
    /// A boxed `i64`.
    Long(i64),
    /// A boxed `f32`.
    Float(f32),
    /// A boxed `f64`.
    Double(f64),
    /// A boxed `char`.
    Char(char),
}

impl BoxedScalar {
    /// Returns the kind of the wrapped value.
    #[must_use]
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Self::Boolean(_) => ScalarKind::Boolean,
            Self::Byte(_) => ScalarKind::Byte,
            Self::Short(_) => ScalarKind::Short,
            Self::Int(_) => ScalarKind::Int,
            Self::Long(_) => ScalarKind::Long,
            Self::Float(_) => ScalarKind::Float,
            Self::Double(_) => ScalarKind::Double,
            Self::Char(_) => ScalarKind::Char,
        }
    }

    /// Unwraps the value as kind `T`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::TypeMismatch`] if the value is not a `T`.
    pub fn unbox<T: Scalar>(self) -> Result<T, CollectionError> {
        T::try_from_boxed(Some(self))
    }
}

impl fmt::Display for BoxedScalar {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(value) => write!(formatter, "{value}"),
            Self::Byte(value) => write!(formatter, "{value}"),
            Self::Short(value) => write!(formatter, "{value}"),
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Long(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value}"),
            Self::Double(value) => write!(formatter, "{value}"),
            Self::Char(value) => write!(formatter, "{value}"),
        }
    }
}

// =============================================================================
// BoxedCollection
// =============================================================================

/// Boxed-value operations for any [`ScalarCollection`].
///
/// Values cross the seam as `Option<BoxedScalar>`, where `None` stands for an
/// absent value. Queries treat an absent or mismatched value as simply not
/// present; [`add_boxed`](Self::add_boxed) rejects it with an error.
///
/// # Examples
///
/// ```rust
/// use unboxed::prelude::*;
///
/// let mut list = LongArrayList::from_slice(&[1, 2, 3]);
/// assert!(list.add_boxed(Some(BoxedScalar::Long(4))).unwrap());
/// assert!(list.add_boxed(Some(BoxedScalar::Int(5))).is_err());
/// assert!(!list.contains_boxed(Some(BoxedScalar::Int(1))));
/// assert_eq!(list.to_boxed_vec().len(), 4);
/// ```
pub trait BoxedCollection<T: Scalar>: ScalarCollection<T> {
    /// Returns an iterator yielding each element in boxed form.
    fn boxed_values(&self) -> impl Iterator<Item = BoxedScalar> + '_ {
        self.values().map(Scalar::into_boxed)
    }

    /// Copies the elements into a new vector of boxed values.
    fn to_boxed_vec(&self) -> Vec<BoxedScalar> {
        self.boxed_values().collect()
    }

    /// Returns `true` if `value` unwraps to an element of this collection.
    fn contains_boxed(&self, value: Option<BoxedScalar>) -> bool {
        T::try_from_boxed(value).is_ok_and(|scalar| self.contains(scalar))
    }

    /// Unwraps `value` and appends it.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::Unsupported`] if the collection is read-only,
    ///   whatever `value` is
    /// - [`CollectionError::NullValue`] or [`CollectionError::TypeMismatch`]
    ///   if `value` does not unwrap to a `T`
    /// - any error [`ScalarCollection::add`] reports
    fn add_boxed(&mut self, value: Option<BoxedScalar>) -> Result<bool, CollectionError> {
        require_modifiable(self.is_modifiable(), "add")?;
        let scalar = T::try_from_boxed(value)?;
        self.add(scalar)
    }

    /// Removes the first element equal to the unwrapped `value`.
    ///
    /// Returns `Ok(false)` without touching the collection when `value` does
    /// not unwrap to a `T`.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::Unsupported`] if the collection is read-only,
    ///   whatever `value` is
    /// - any error [`ScalarCollection::remove_first`] reports
    fn remove_boxed(&mut self, value: Option<BoxedScalar>) -> Result<bool, CollectionError> {
        require_modifiable(self.is_modifiable(), "remove")?;
        match T::try_from_boxed(value) {
            Ok(scalar) => self.remove_first(scalar),
            Err(_) => Ok(false),
        }
    }
}

impl<T: Scalar, C: ScalarCollection<T>> BoxedCollection<T> for C {}
