//! Integration tests for ScalarArrayList and its cursor.
//!
//! These tests exercise the public API through the prelude, covering the
//! construction surface, bulk operations and cursor-driven mutation.

use rstest::rstest;
use unboxed::prelude::*;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_construction_surface() {
    let empty = LongArrayList::new();
    assert!(empty.is_empty());

    let sized = LongArrayList::with_capacity(10);
    assert!(sized.is_empty());
    assert_eq!(sized.capacity(), 10);

    let copied = LongArrayList::from_slice(&[1, 2, 3]);
    assert_eq!(copied.as_slice(), &[1, 2, 3]);

    let absent = LongArrayList::from(None);
    assert!(absent.is_empty());

    let collected: LongArrayList = (1..=3).collect();
    assert_eq!(collected, copied);

    let from_array = LongArrayList::from([1, 2, 3]);
    assert_eq!(from_array, copied);
}

#[rstest]
fn test_from_collection_of_same_kind() {
    let source = IntArrayList::from_slice(&[9, 8, 7]);
    let copy = IntArrayList::from_collection(&source);
    assert_eq!(copy, source);
    assert_eq!(copy.capacity(), 3);
}

#[rstest]
fn test_from_cursor_drains_remaining_elements() {
    let values = [1_i16, 2, 3, 4];
    let mut view = ShortSliceView::new(&values);
    let mut cursor = view.cursor();
    cursor.next_value().unwrap();

    let rest = ShortArrayList::from_cursor(&mut cursor).unwrap();
    assert_eq!(rest.as_slice(), &[2, 3, 4]);
    assert!(!cursor.has_next());
}

#[rstest]
fn test_from_boxed_values() {
    let list = DoubleArrayList::try_from_boxed([BoxedScalar::Double(0.5), BoxedScalar::Double(1.5)])
        .unwrap();
    assert_eq!(list.as_slice(), &[0.5, 1.5]);

    let error = DoubleArrayList::try_from_boxed([BoxedScalar::Double(0.5), BoxedScalar::Float(1.5)])
        .unwrap_err();
    assert_eq!(
        error,
        CollectionError::TypeMismatch {
            expected: ScalarKind::Double,
            found: ScalarKind::Float,
        }
    );
}

// =============================================================================
// Concrete Scenario
// =============================================================================

#[rstest]
fn test_remove_add_and_to_array_scenario() {
    let mut list = LongArrayList::from_slice(&[10, 20, 30]);

    assert_eq!(list.remove_first(20), Ok(true));
    assert_eq!(list.as_slice(), &[10, 30]);

    assert_eq!(list.remove_first(99), Ok(false));
    assert_eq!(list.as_slice(), &[10, 30]);

    assert_eq!(list.add_all(&[40, 50]), Ok(true));
    assert_eq!(list.as_slice(), &[10, 30, 40, 50]);

    let array = list.to_array_into(None, 1).unwrap();
    assert_eq!(array, vec![0, 10, 30, 40, 50]);
}

// =============================================================================
// Cursor Removal
// =============================================================================

#[rstest]
fn test_cursor_removal_mid_traversal() {
    let mut list = CharArrayList::from_slice(&['a', 'b', 'c']);
    let mut cursor = list.cursor();

    let mut seen = Vec::new();
    while cursor.has_next() {
        let value = cursor.next_value().unwrap();
        seen.push(value);
        if value == 'b' {
            cursor.remove().unwrap();
        }
    }

    assert_eq!(seen, vec!['a', 'b', 'c']);
    assert_eq!(list.as_slice(), &['a', 'c']);
}

#[rstest]
fn test_cursor_errors() {
    let mut list = IntArrayList::from_slice(&[1]);
    let mut cursor = list.cursor();

    assert!(cursor.remove().unwrap_err().is_precondition_violation());
    assert_eq!(cursor.next_value(), Ok(1));
    assert_eq!(cursor.next_value(), Err(CollectionError::Exhausted));
    cursor.remove().unwrap();
    assert!(cursor.remove().unwrap_err().is_precondition_violation());
    assert!(list.is_empty());
}

// =============================================================================
// Bulk Operations
// =============================================================================

#[rstest]
#[case(&[1, 2, 3], &[], &[])]
#[case(&[], &[], &[])]
#[case(&[1, 2, 3, 2], &[2], &[2, 2])]
#[case(&[1, 2, 3], &[4, 5], &[])]
#[case(&[1, 2, 3], &[3, 2, 1], &[1, 2, 3])]
fn test_retain_all(#[case] initial: &[i32], #[case] keep: &[i32], #[case] expected: &[i32]) {
    let mut list = IntArrayList::from_slice(initial);
    let changed = list.retain_all(keep).unwrap();
    assert_eq!(list.as_slice(), expected);
    assert_eq!(changed, initial.len() != expected.len());
}

#[rstest]
fn test_retain_all_in_absent_collection_clears() {
    let mut list = IntArrayList::from_slice(&[1, 2]);
    assert_eq!(list.retain_all_in::<IntArrayList>(None), Ok(true));
    assert!(list.is_empty());
}

#[rstest]
fn test_remove_all_in_other_collection() {
    let mut list = ByteArrayList::from_slice(&[1, 2, 3, 4, 2]);
    let other = ByteArrayList::from_slice(&[2, 4]);
    assert_eq!(list.remove_all_in(&other), Ok(true));
    assert_eq!(list.as_slice(), &[1, 3]);
}

#[rstest]
fn test_add_all_from_other_collection() {
    let mut list = ByteArrayList::from_slice(&[1]);
    let values = [2_i8, 3];
    assert_eq!(list.add_all_from(&ByteSliceView::new(&values)), Ok(true));
    assert_eq!(list.add_all_from(&ByteArrayList::new()), Ok(false));
    assert_eq!(list.as_slice(), &[1, 2, 3]);
}

#[rstest]
fn test_range_membership() {
    let list = LongArrayList::from_slice(&[1, 2, 3, 10]);
    assert!(list.contains_all_range(1, 3));
    assert!(!list.contains_all_range(1, 4));
    assert!(list.contains_all_range(3, 1));
    assert!(list.contains_any_range(4, 10));
    assert!(!list.contains_any_range(10, 4));
}

#[rstest]
fn test_contains_in_other_collection() {
    let list = LongArrayList::from_slice(&[1, 2, 3]);
    assert!(list.contains_all_in(&LongArrayList::from_slice(&[3, 1])));
    assert!(!list.contains_all_in(&LongArrayList::from_slice(&[3, 4])));
    assert!(list.contains_any_in(&LongArrayList::from_slice(&[4, 2])));
    assert!(list.contains_all_in(&LongArrayList::new()));
}

// =============================================================================
// to_array_into
// =============================================================================

#[rstest]
#[case(None, 0, vec![1, 2, 3])]
#[case(None, 2, vec![0, 0, 1, 2, 3])]
#[case(Some(vec![7, 7, 7, 7, 7]), 1, vec![7, 1, 2, 3, 7])]
#[case(Some(vec![7, 7, 7, 7, 7]), 2, vec![7, 7, 1, 2, 3])]
#[case(Some(vec![7, 7, 7]), 1, vec![7, 1, 2, 3])]
#[case(Some(vec![7, 7]), 3, vec![7, 7, 0, 1, 2, 3])]
fn test_to_array_into(
    #[case] dest: Option<Vec<i64>>,
    #[case] start_index: isize,
    #[case] expected: Vec<i64>,
) {
    let list = LongArrayList::from_slice(&[1, 2, 3]);
    let destination_length = dest.as_ref().map_or(0, Vec::len);
    let start = usize::try_from(start_index).unwrap();

    let array = list.to_array_into(dest, start_index).unwrap();

    assert_eq!(array.len(), destination_length.max(start + list.len()));
    assert_eq!(array, expected);
}

#[rstest]
#[case(None)]
#[case(Some(vec![0; 100]))]
fn test_to_array_into_negative_index(#[case] dest: Option<Vec<i64>>) {
    let list = LongArrayList::from_slice(&[1]);
    assert_eq!(
        list.to_array_into(dest, -5),
        Err(CollectionError::NegativeIndex { index: -5 })
    );
}

// =============================================================================
// Capacity
// =============================================================================

#[rstest]
fn test_capacity_grows_and_optimizes() {
    let mut list = IntArrayList::new();
    let mut previous_capacity = list.capacity();
    for value in 0..100 {
        list.push(value);
        assert!(list.capacity() >= previous_capacity);
        previous_capacity = list.capacity();
    }
    list.retain_range(0, 9).unwrap();
    assert_eq!(list.capacity(), previous_capacity);
    list.optimize();
    assert_eq!(list.capacity(), 10);
}

#[rstest]
fn test_min_growth_constant() {
    assert_eq!(MIN_GROWTH, 4);
}
