//! The bounded set of scalar kinds a collection can store.
//!
//! This module provides:
//!
//! - [`Scalar`]: The sealed trait implemented by every supported kind
//! - [`RangeScalar`]: Kinds whose values form contiguous, enumerable ranges
//! - [`ScalarKind`]: A runtime tag naming each kind
//! - [`BoxedScalar`]: The object-wrapper representation used at the boxed seam
//!
//! # Supported Kinds
//!
//! | Rust type | [`ScalarKind`]  | Range operations |
//! |-----------|-----------------|------------------|
//! | `bool`    | `Boolean`       | no               |
//! | `i8`      | `Byte`          | yes              |
//! | `i16`     | `Short`         | yes              |
//! | `i32`     | `Int`           | yes              |
//! | `i64`     | `Long`          | yes              |
//! | `f32`     | `Float`         | no               |
//! | `f64`     | `Double`        | no               |
//! | `char`    | `Char`          | yes              |
//!
//! # Equivalence
//!
//! Collections compare elements with [`Scalar::equivalent`] rather than `==`.
//! For the floating-point kinds this compares bit patterns, so a `NaN` stored
//! in a collection can be found again and `0.0` is distinct from `-0.0`.
//!
//! ```rust
//! use unboxed::Scalar;
//!
//! assert!(f64::NAN.equivalent(f64::NAN));
//! assert!(!0.0_f64.equivalent(-0.0));
//! assert!(7_i64.equivalent(7));
//! ```

mod boxed;

pub use boxed::BoxedCollection;
pub use boxed::BoxedScalar;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;

use crate::CollectionError;

mod sealed {
    pub trait Sealed {}
}

// =============================================================================
// ScalarKind
// =============================================================================

/// Names one of the supported scalar kinds.
///
/// # Examples
///
/// ```rust
/// use unboxed::{Scalar, ScalarKind};
///
/// assert_eq!(i64::KIND, ScalarKind::Long);
/// assert_eq!(ScalarKind::Long.name(), "long");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// `bool`
    Boolean,
    /// `i8`
    Byte,
    /// `i16`
    Short,
    /// `i32`
    Int,
    /// `i64`
    Long,
    /// `f32`
    Float,
    /// `f64`
    Double,
    /// `char`
    Char,
}

impl ScalarKind {
    /// Returns the lowercase name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Char => "char",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

// =============================================================================
// Scalar
// =============================================================================

/// An unboxed value type that scalar collections can store.
///
/// This trait is sealed: it is implemented for `bool`, `i8`, `i16`, `i32`,
/// `i64`, `f32`, `f64` and `char` only. The [`Default`] value of each kind
/// is what unused buffer slots and padded array prefixes hold.
pub trait Scalar:
    Copy + Default + PartialEq + fmt::Debug + fmt::Display + sealed::Sealed + 'static
{
    /// The runtime tag for this kind.
    const KIND: ScalarKind;

    /// Returns `true` if both values are the same scalar.
    ///
    /// Floating-point kinds compare bit patterns.
    fn equivalent(self, other: Self) -> bool;

    /// Feeds the value into a hasher, consistently with [`equivalent`](Self::equivalent).
    fn hash_scalar<H: Hasher>(self, state: &mut H);

    /// Wraps the value in its boxed representation.
    fn into_boxed(self) -> BoxedScalar;

    /// Unwraps a boxed value.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::NullValue`] if `value` is `None`
    /// - [`CollectionError::TypeMismatch`] if `value` holds a different kind
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unboxed::{BoxedScalar, CollectionError, Scalar, ScalarKind};
    ///
    /// assert_eq!(i32::try_from_boxed(Some(BoxedScalar::Int(5))), Ok(5));
    /// assert_eq!(
    ///     i32::try_from_boxed(Some(BoxedScalar::Long(5))),
    ///     Err(CollectionError::TypeMismatch {
    ///         expected: ScalarKind::Int,
    ///         found: ScalarKind::Long,
    ///     })
    /// );
    /// assert_eq!(
    ///     i32::try_from_boxed(None),
    ///     Err(CollectionError::NullValue { expected: ScalarKind::Int })
    /// );
    /// ```
    fn try_from_boxed(value: Option<BoxedScalar>) -> Result<Self, CollectionError>;
}

macro_rules! impl_scalar {
    (@unbox $variant:ident) => {
        fn into_boxed(self) -> BoxedScalar {
            BoxedScalar::$variant(self)
        }

        fn try_from_boxed(value: Option<BoxedScalar>) -> Result<Self, CollectionError> {
            match value {
                Some(BoxedScalar::$variant(scalar)) => Ok(scalar),
                Some(other) => Err(CollectionError::TypeMismatch {
                    expected: Self::KIND,
                    found: other.kind(),
                }),
                None => Err(CollectionError::NullValue {
                    expected: Self::KIND,
                }),
            }
        }
    };
    (exact: $($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Scalar for $ty {
                const KIND: ScalarKind = ScalarKind::$variant;

                #[inline]
                fn equivalent(self, other: Self) -> bool {
                    self == other
                }

                #[inline]
                fn hash_scalar<H: Hasher>(self, state: &mut H) {
                    self.hash(state);
                }

                impl_scalar!(@unbox $variant);
            }
        )*
    };
    (bits: $($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Scalar for $ty {
                const KIND: ScalarKind = ScalarKind::$variant;

                #[inline]
                fn equivalent(self, other: Self) -> bool {
                    self.to_bits() == other.to_bits()
                }

                #[inline]
                fn hash_scalar<H: Hasher>(self, state: &mut H) {
                    self.to_bits().hash(state);
                }

                impl_scalar!(@unbox $variant);
            }
        )*
    };
}

impl_scalar!(exact:
    bool => Boolean,
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    char => Char,
);

impl_scalar!(bits:
    f32 => Float,
    f64 => Double,
);

// =============================================================================
// RangeScalar
// =============================================================================

/// A scalar kind whose values can be enumerated over an inclusive range.
///
/// Implemented for the integer kinds and `char`. Range operations such as
/// [`ScalarCollection::add_range`](crate::ScalarCollection::add_range) use
/// [`values_between`](Self::values_between) to walk the range in ascending
/// order. An inverted range (`start > end`) yields no values.
///
/// # Examples
///
/// ```rust
/// use unboxed::RangeScalar;
///
/// let values: Vec<i16> = i16::values_between(3, 6).collect();
/// assert_eq!(values, vec![3, 4, 5, 6]);
/// assert_eq!(i16::values_between(6, 3).count(), 0);
/// ```
pub trait RangeScalar: Scalar + PartialOrd {
    /// The iterator over a range of values.
    type Values: Iterator<Item = Self>;

    /// Returns the values in `[start, end]` in ascending order.
    fn values_between(start: Self, end: Self) -> Self::Values;

    /// Returns `true` if `self` lies within `[start, end]`.
    #[inline]
    fn is_within(self, start: Self, end: Self) -> bool {
        start <= self && self <= end
    }
}

macro_rules! impl_range_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl RangeScalar for $ty {
                type Values = RangeInclusive<Self>;

                #[inline]
                fn values_between(start: Self, end: Self) -> Self::Values {
                    start..=end
                }
            }
        )*
    };
}

impl_range_scalar!(i8, i16, i32, i64, char);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Scalar>(value: T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash_scalar(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    fn test_kinds() {
        assert_eq!(bool::KIND, ScalarKind::Boolean);
        assert_eq!(i8::KIND, ScalarKind::Byte);
        assert_eq!(i16::KIND, ScalarKind::Short);
        assert_eq!(i32::KIND, ScalarKind::Int);
        assert_eq!(i64::KIND, ScalarKind::Long);
        assert_eq!(f32::KIND, ScalarKind::Float);
        assert_eq!(f64::KIND, ScalarKind::Double);
        assert_eq!(char::KIND, ScalarKind::Char);
    }

    #[rstest]
    fn test_float_equivalence_uses_bits() {
        assert!(f32::NAN.equivalent(f32::NAN));
        assert!(!0.0_f32.equivalent(-0.0));
        assert!(1.5_f64.equivalent(1.5));
        assert_eq!(hash_of(f64::NAN), hash_of(f64::NAN));
    }

    #[rstest]
    fn test_hash_consistent_with_equivalence() {
        assert_eq!(hash_of(42_i64), hash_of(42_i64));
        assert_eq!(hash_of('x'), hash_of('x'));
        assert_eq!(hash_of(true), hash_of(true));
    }

    #[rstest]
    fn test_box_and_unbox() {
        assert_eq!('q'.into_boxed(), BoxedScalar::Char('q'));
        assert_eq!(bool::try_from_boxed(Some(BoxedScalar::Boolean(true))), Ok(true));
        assert_eq!(
            i8::try_from_boxed(Some(BoxedScalar::Short(1))),
            Err(CollectionError::TypeMismatch {
                expected: ScalarKind::Byte,
                found: ScalarKind::Short,
            })
        );
        assert_eq!(
            f64::try_from_boxed(None),
            Err(CollectionError::NullValue {
                expected: ScalarKind::Double
            })
        );
    }

    #[rstest]
    #[case(1, 4, vec![1, 2, 3, 4])]
    #[case(5, 5, vec![5])]
    #[case(9, 2, vec![])]
    fn test_values_between(#[case] start: i64, #[case] end: i64, #[case] expected: Vec<i64>) {
        let values: Vec<i64> = i64::values_between(start, end).collect();
        assert_eq!(values, expected);
    }

    #[rstest]
    fn test_char_range() {
        let values: String = char::values_between('a', 'e').collect();
        assert_eq!(values, "abcde");
    }

    #[rstest]
    fn test_range_at_type_bounds() {
        assert_eq!(i8::values_between(i8::MAX - 1, i8::MAX).count(), 2);
        assert!(i8::MIN.is_within(i8::MIN, 0));
        assert!(!1_i8.is_within(2, 1));
    }
}
