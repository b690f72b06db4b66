// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::error::MultiverseError;
use crate::storage::GrowableArray;

fn filled(n: i64) -> GrowableArray<i64> {
    (0..n).collect()
}

#[test]
fn test_new_array_is_single_slot() {
    let array = GrowableArray::<i64>::new();
    assert_eq!(array.len(), 0);
    assert_eq!(array.capacity(), 1);
    assert!(array.is_empty());
}

#[test]
fn test_append_doubles_capacity() {
    let mut array = GrowableArray::new();
    let mut capacities = Vec::new();
    for i in 0..9 {
        array.append(i);
        capacities.push(array.capacity());
    }
    assert_eq!(capacities, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);
    assert_eq!(array.len(), 9);
    assert_eq!(*array.get(8).unwrap(), 8);
}

#[test]
fn test_insert_shifts_right() {
    let mut array = filled(3); // [0, 1, 2], capacity 4
    array.insert(0, 10).unwrap();
    array.insert(2, 20).unwrap();

    let items: Vec<i64> = array.iter().copied().collect();
    assert_eq!(items, vec![10, 0, 20, 1, 2]);
    assert_eq!(array.capacity(), 8);
}

#[test]
fn test_insert_at_len_appends() {
    let mut array = filled(2);
    array.insert(2, 7).unwrap();
    assert_eq!(*array.get(2).unwrap(), 7);
}

#[test]
fn test_insert_out_of_range() {
    let mut array = filled(2);
    let res = array.insert(3, 7);
    assert_eq!(res, Err(MultiverseError::IndexOutOfRange { index: 3, len: 2 }));
    assert_eq!(array.len(), 2);
}

#[test]
fn test_pop_default_and_negative() {
    let mut array = filled(5);
    assert_eq!(array.pop(None).unwrap(), 4);
    assert_eq!(array.pop(Some(-1)).unwrap(), 3);
    assert_eq!(array.pop(Some(-3)).unwrap(), 0);

    let items: Vec<i64> = array.iter().copied().collect();
    assert_eq!(items, vec![1, 2]);
}

#[test]
fn test_pop_middle_closes_gap() {
    let mut array = filled(4);
    assert_eq!(array.pop(Some(1)).unwrap(), 1);
    let items: Vec<i64> = array.iter().copied().collect();
    assert_eq!(items, vec![0, 2, 3]);
}

#[test]
fn test_pop_out_of_range() {
    let mut array = filled(5);
    match array.pop(Some(-6)) {
        Err(MultiverseError::IndexOutOfRange { index: -6, len: 5 }) => (),
        other => panic!("Expected IndexOutOfRange, got {:?}", other),
    }
    assert!(array.pop(Some(5)).is_err());
    assert_eq!(array.len(), 5);
}

#[test]
fn test_pop_empty() {
    let mut array = GrowableArray::<i64>::new();
    match array.pop(None) {
        Err(MultiverseError::IndexOutOfRange { len: 0, .. }) => (),
        other => panic!("Expected IndexOutOfRange, got {:?}", other),
    }
}

#[test]
fn test_shrink_on_quarter_full() {
    let mut array = filled(5);
    assert_eq!(array.capacity(), 8);

    // size 4, 3: still above a quarter
    array.pop(None).unwrap();
    array.pop(None).unwrap();
    assert_eq!(array.capacity(), 8);

    // size 2 == 8 / 4
    array.pop(None).unwrap();
    assert_eq!(array.capacity(), 4);

    // size 1 == 4 / 4
    array.pop(None).unwrap();
    assert_eq!(array.capacity(), 2);

    // size 0 never shrinks
    array.pop(None).unwrap();
    assert_eq!(array.capacity(), 2);
    assert!(array.is_empty());
}

#[test]
fn test_remove_value_first_match() {
    let mut array: GrowableArray<i64> = [1, 2, 1].into_iter().collect();
    array.remove_value(&1).unwrap();
    let items: Vec<i64> = array.iter().copied().collect();
    assert_eq!(items, vec![2, 1]);

    assert_eq!(array.remove_value(&9), Err(MultiverseError::ValueNotFound));
    assert_eq!(array.len(), 2);
}

#[test]
fn test_get_set_bounds() {
    let mut array = filled(3);
    array.set(1, 42).unwrap();
    assert_eq!(*array.get(1).unwrap(), 42);

    assert!(array.get(3).is_err());
    assert_eq!(
        array.set(3, 0),
        Err(MultiverseError::IndexOutOfRange { index: 3, len: 3 })
    );
}

#[test]
fn test_huge_index_reported_without_wrapping() {
    let mut array: GrowableArray<u8> = GrowableArray::new();
    let expected = MultiverseError::IndexOutOfRange {
        index: isize::MAX,
        len: 0,
    };
    assert_eq!(array.get(usize::MAX).err(), Some(expected.clone()));
    assert_eq!(array.set(usize::MAX, 1).err(), Some(expected.clone()));
    assert_eq!(array.insert(usize::MAX, 1).err(), Some(expected));
}

#[test]
fn test_clear_resets_storage() {
    let mut array = filled(20);
    array.clear();
    assert_eq!(array.len(), 0);
    assert_eq!(array.capacity(), 1);

    array.append(5);
    assert_eq!(*array.get(0).unwrap(), 5);
    assert_eq!(array.capacity(), 1);
}

#[test]
fn test_debug_and_display() {
    let array: GrowableArray<i64> = [1, 2].into_iter().collect();
    assert_eq!(format!("{:?}", array), "([1, 2])");
    assert_eq!(format!("{}", array), "([1, 2])");
}

#[test]
fn test_owned_iteration_skips_spare_slots() {
    let array = filled(3); // capacity 4
    let items: Vec<i64> = array.into_iter().collect();
    assert_eq!(items, vec![0, 1, 2]);
}
