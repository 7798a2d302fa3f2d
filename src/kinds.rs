//! Per-kind names for the generic collection types.
//!
//! Each supported scalar kind gets a family of aliases, for example
//! `i64` yields [`LongArrayList`], [`LongArrayCursor`] and [`LongSliceView`].
//!
//! ```rust
//! use unboxed::prelude::*;
//!
//! let mut list = CharArrayList::new();
//! list.add_range('a', 'c').unwrap();
//! assert_eq!(list.to_string(), "[a, b, c]");
//! ```

use crate::collection::{ArrayCursor, ScalarArrayList, ScalarSliceView};

macro_rules! kind_aliases {
    ($($ty:ident => $name:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = "A growable array of unboxed `" $ty "` values."]
                pub type [<$name ArrayList>] = ScalarArrayList<$ty>;

                #[doc = "A mutating cursor over a [`" $name "ArrayList`]."]
                pub type [<$name ArrayCursor>]<'a> = ArrayCursor<'a, $ty>;

                #[doc = "A read-only view over a slice of `" $ty "` values."]
                pub type [<$name SliceView>]<'a> = ScalarSliceView<'a, $ty>;
            )*
        }
    };
}

kind_aliases!(
    bool => Boolean,
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    char => Char,
);
