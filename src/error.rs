//! Error types for scalar collections.
//!
//! Every fallible operation in this crate reports failure through
//! [`CollectionError`]. Errors are raised synchronously to the caller and
//! the collection or cursor involved is left exactly as it was before the
//! call.

use crate::scalar::ScalarKind;

/// Represents the errors that can occur when operating on a scalar collection.
///
/// The variants fall into four groups:
///
/// - precondition violations: [`NegativeIndex`](Self::NegativeIndex),
///   [`IndexOutOfBounds`](Self::IndexOutOfBounds),
///   [`IllegalState`](Self::IllegalState)
/// - capability errors: [`Unsupported`](Self::Unsupported)
/// - conversion errors at the boxed seam: [`TypeMismatch`](Self::TypeMismatch),
///   [`NullValue`](Self::NullValue)
/// - traversal past the end: [`Exhausted`](Self::Exhausted)
///
/// # Examples
///
/// ```rust
/// use unboxed::CollectionError;
///
/// let error = CollectionError::IndexOutOfBounds { index: 7, length: 3 };
/// assert_eq!(format!("{error}"), "index 7 out of bounds for length 3");
/// assert!(error.is_precondition_violation());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// A negative index was supplied where only non-negative indices are valid.
    NegativeIndex {
        /// The offending index.
        index: isize,
    },
    /// An index was outside the logical range of the collection.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The logical length at the time of the call.
        length: usize,
    },
    /// A cursor operation was requested in a state that does not allow it.
    IllegalState {
        /// The name of the rejected operation.
        operation: &'static str,
    },
    /// The collection or cursor does not support structural mutation.
    Unsupported {
        /// The name of the rejected operation.
        operation: &'static str,
    },
    /// A boxed value of the wrong kind was supplied.
    TypeMismatch {
        /// The kind the collection stores.
        expected: ScalarKind,
        /// The kind that was supplied.
        found: ScalarKind,
    },
    /// An absent boxed value was supplied where a scalar was required.
    NullValue {
        /// The kind the collection stores.
        expected: ScalarKind,
    },
    /// The next element was requested from an exhausted cursor.
    Exhausted,
}

impl CollectionError {
    /// Returns `true` for index and cursor-state errors.
    #[must_use]
    pub const fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            Self::NegativeIndex { .. } | Self::IndexOutOfBounds { .. } | Self::IllegalState { .. }
        )
    }

    /// Returns `true` if the error reports a missing mutation capability.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }

    /// Returns `true` for errors raised while unwrapping boxed values.
    #[must_use]
    pub const fn is_conversion_error(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. } | Self::NullValue { .. })
    }
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeIndex { index } => write!(formatter, "negative index {index}"),
            Self::IndexOutOfBounds { index, length } => {
                write!(formatter, "index {index} out of bounds for length {length}")
            }
            Self::IllegalState { operation } => write!(
                formatter,
                "{operation}: no element has been yielded since the last removal or reset"
            ),
            Self::Unsupported { operation } => {
                write!(formatter, "{operation}: operation not supported")
            }
            Self::TypeMismatch { expected, found } => {
                write!(formatter, "expected a {expected} value, found {found}")
            }
            Self::NullValue { expected } => {
                write!(formatter, "expected a {expected} value, found null")
            }
            Self::Exhausted => write!(formatter, "no more elements"),
        }
    }
}

impl std::error::Error for CollectionError {}
