//! # unboxed
//!
//! Growable, array-backed list containers for unboxed scalar values.
//!
//! ## Overview
//!
//! This library gives list ergonomics (ordered sequence, membership tests,
//! bulk mutation, iteration with in-place removal) to the scalar kinds
//! `bool`, `i8`, `i16`, `i32`, `i64`, `f32`, `f64` and `char`, storing
//! every element unboxed in one contiguous buffer. It includes:
//!
//! - **Scalar kinds**: [`Scalar`], [`RangeScalar`], [`ScalarKind`]
//! - **Collections**: [`ScalarCollection`] with cursor-based defaults, and
//!   [`ScalarArrayList`] overriding them with direct buffer manipulation
//! - **Cursors**: [`ScalarIterator`], removing the element just yielded
//! - **Read-only views**: [`ScalarSliceView`]
//! - **Boxed seam**: [`BoxedScalar`] and [`BoxedCollection`]
//! - **Per-kind names**: `LongArrayList`, `CharArrayCursor`, `IntSliceView`, ...
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`ScalarArrayList`]
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use unboxed::prelude::*;
//!
//! let mut list = LongArrayList::from_slice(&[10, 20, 30]);
//! assert_eq!(list.remove_first(20), Ok(true));
//! assert_eq!(list.add_all(&[40, 50]), Ok(true));
//! assert_eq!(list.as_slice(), &[10, 30, 40, 50]);
//!
//! // Remove through a cursor while traversing
//! let mut cursor = list.cursor();
//! while let Some(value) = cursor.next() {
//!     if value > 35 {
//!         cursor.remove().unwrap();
//!     }
//! }
//! assert_eq!(list.as_slice(), &[10, 30]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the collection types, the per-kind aliases and the traits
/// whose methods they use.
///
/// # Usage
///
/// ```rust
/// use unboxed::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::*;
    pub use crate::error::CollectionError;
    pub use crate::kinds::*;
    pub use crate::scalar::*;
}

pub mod collection;
mod error;
pub mod kinds;
pub mod scalar;

pub use collection::ArrayCursor;
pub use collection::MIN_GROWTH;
pub use collection::ScalarArrayList;
pub use collection::ScalarCollection;
pub use collection::ScalarIterator;
pub use collection::ScalarSliceView;
pub use collection::SliceCursor;
pub use error::CollectionError;
pub use scalar::BoxedCollection;
pub use scalar::BoxedScalar;
pub use scalar::RangeScalar;
pub use scalar::Scalar;
pub use scalar::ScalarKind;
