//! Property-based tests for ScalarArrayList laws.
//!
//! This module verifies the ordering, capacity and removal invariants of
//! ScalarArrayList using proptest, checking each operation against a plain
//! `Vec` model.

use proptest::prelude::*;
use unboxed::prelude::*;

// =============================================================================
// Growth and Capacity
// =============================================================================

proptest! {
    /// Every pushed value is retrievable at its insertion position.
    #[test]
    fn prop_push_preserves_order(elements in prop::collection::vec(any::<i64>(), 0..200)) {
        let mut list = LongArrayList::new();
        for &element in &elements {
            list.push(element);
        }
        prop_assert_eq!(list.len(), elements.len());
        for (index, &element) in elements.iter().enumerate() {
            prop_assert_eq!(list.get(index), Some(element));
        }
    }

    /// Capacity never decreases except through optimize, which makes it equal the length.
    #[test]
    fn prop_capacity_monotonic(
        elements in prop::collection::vec(any::<i32>(), 0..100),
        removed in any::<i32>()
    ) {
        let mut list = IntArrayList::new();
        let mut capacity = list.capacity();
        for &element in &elements {
            list.push(element);
            prop_assert!(list.capacity() >= capacity);
            capacity = list.capacity();
        }
        list.remove_all_of(removed).unwrap();
        prop_assert_eq!(list.capacity(), capacity);
        list.optimize();
        prop_assert_eq!(list.capacity(), list.len());
    }

    /// Rebuilding a list from its array yields an equal list.
    #[test]
    fn prop_to_vec_round_trip(elements in prop::collection::vec(any::<f64>(), 0..100)) {
        let list = DoubleArrayList::from_slice(&elements);
        let rebuilt = DoubleArrayList::from(list.to_vec());
        prop_assert_eq!(rebuilt, list);
    }
}

// =============================================================================
// Removal Against a Vec Model
// =============================================================================

proptest! {
    /// remove_first removes exactly the first equal element.
    #[test]
    fn prop_remove_first_matches_model(
        elements in prop::collection::vec(0_i16..8, 0..60),
        target in 0_i16..8
    ) {
        let mut list = ShortArrayList::from_slice(&elements);
        let mut model = elements.clone();
        let position = model.iter().position(|&element| element == target);
        if let Some(index) = position {
            model.remove(index);
        }

        prop_assert_eq!(list.remove_first(target).unwrap(), position.is_some());
        prop_assert_eq!(list.as_slice(), model.as_slice());
    }

    /// The compacting remove_all_of agrees with Vec::retain.
    #[test]
    fn prop_remove_all_of_matches_retain(
        elements in prop::collection::vec(0_i8..5, 0..80),
        target in 0_i8..5
    ) {
        let mut list = ByteArrayList::from_slice(&elements);
        let mut model = elements.clone();
        model.retain(|&element| element != target);

        prop_assert_eq!(list.remove_all_of(target).unwrap(), model.len() != elements.len());
        prop_assert_eq!(list.as_slice(), model.as_slice());
    }

    /// Cursor-driven filtering agrees with the compacting removal.
    #[test]
    fn prop_cursor_filter_matches_remove_where(
        elements in prop::collection::vec(any::<i32>(), 0..80)
    ) {
        let mut filtered = IntArrayList::from_slice(&elements);
        let mut cursor = filtered.cursor();
        while let Some(value) = cursor.next() {
            if value % 3 == 0 {
                cursor.remove().unwrap();
            }
        }

        let mut compacted = IntArrayList::from_slice(&elements);
        compacted.remove_where(|value| value % 3 == 0).unwrap();

        prop_assert_eq!(filtered, compacted);
    }

    /// Retaining against any set leaves only members of that set, in order.
    #[test]
    fn prop_retain_all_matches_model(
        elements in prop::collection::vec(0_i64..10, 0..60),
        keep in prop::collection::vec(0_i64..10, 0..5)
    ) {
        let mut list = LongArrayList::from_slice(&elements);
        let mut model = elements.clone();
        model.retain(|element| keep.contains(element));

        list.retain_all(&keep).unwrap();
        prop_assert_eq!(list.as_slice(), model.as_slice());
    }

    /// Insert then remove at the same index restores the list.
    #[test]
    fn prop_insert_remove_at_inverse(
        elements in prop::collection::vec(any::<i64>(), 0..50),
        position in any::<prop::sample::Index>(),
        value in any::<i64>()
    ) {
        let mut list = LongArrayList::from_slice(&elements);
        let index = position.index(elements.len() + 1);
        list.insert(index, value).unwrap();
        prop_assert_eq!(list.get(index), Some(value));
        prop_assert_eq!(list.remove_at(index).unwrap(), value);
        prop_assert_eq!(list.as_slice(), elements.as_slice());
    }
}

// =============================================================================
// to_array_into
// =============================================================================

proptest! {
    /// The result has length max(k, start + n) and keeps the destination prefix.
    #[test]
    fn prop_to_array_into_boundary(
        elements in prop::collection::vec(any::<i32>(), 0..20),
        dest in prop::option::of(prop::collection::vec(any::<i32>(), 0..40)),
        start in 0_usize..30
    ) {
        let list = IntArrayList::from_slice(&elements);
        let original = dest.clone();
        let start_index = isize::try_from(start).unwrap();

        let array = list.to_array_into(dest, start_index).unwrap();

        let destination_length = original.as_ref().map_or(0, Vec::len);
        prop_assert_eq!(array.len(), destination_length.max(start + elements.len()));
        prop_assert_eq!(&array[start..start + elements.len()], elements.as_slice());
        if let Some(original) = original {
            let prefix = start.min(original.len());
            prop_assert_eq!(&array[..prefix], &original[..prefix]);
        }
    }

    /// A negative start index is always rejected.
    #[test]
    fn prop_to_array_into_negative_start(
        elements in prop::collection::vec(any::<i32>(), 0..10),
        start in -100_isize..0
    ) {
        let list = IntArrayList::from_slice(&elements);
        prop_assert_eq!(
            list.to_array_into(Some(vec![0; 200]), start),
            Err(CollectionError::NegativeIndex { index: start })
        );
    }
}
