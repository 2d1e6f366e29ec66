// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::DynamicArray;

// =============================================================================
// begin() / end()
// =============================================================================

#[test]
fn test_begin_equals_end_when_empty() {
    let array: DynamicArray<u8> = DynamicArray::new();

    assert_eq!(array.begin(), array.end());
    assert_eq!(array.end() - array.begin(), 0);
}

#[test]
fn test_begin_end_span_live_range() {
    let array = DynamicArray::from([1, 2, 3]);

    assert_eq!(array.begin().index(), 0);
    assert_eq!(array.end().index(), 3);
    assert_eq!(array.end() - array.begin(), array.len());
}

// =============================================================================
// Arithmetic / ordering
// =============================================================================

#[test]
fn test_position_arithmetic() {
    let array = DynamicArray::from([1, 2, 3, 4]);

    let mut position = array.begin() + 3;
    assert_eq!(array[position], 4);

    position -= 2;
    assert_eq!(array[position], 2);

    position += 1;
    assert_eq!(position, array.end() - 1 - 1);
    assert!(position < array.end());
    assert!(array.begin() <= position);
}

#[test]
fn test_position_walks_whole_array() {
    let array = DynamicArray::from([10, 20, 30]);
    let mut seen = Vec::new();

    let mut position = array.begin();
    while position != array.end() {
        seen.push(array[position]);
        position += 1;
    }

    assert_eq!(seen, [10, 20, 30]);
}

#[test]
fn test_position_debug() {
    let array = DynamicArray::from([1, 2]);

    insta::assert_snapshot!(format!("{:?}", array.begin() + 1), @"Position(1)");
}

#[test]
fn test_index_mut_by_position() {
    let mut array = DynamicArray::from([1, 2, 3]);
    let last = array.end() - 1;

    array[last] = 30;

    assert_eq!(array, [1, 2, 30]);
}

// =============================================================================
// Invalidation
// =============================================================================

#[test]
fn test_positions_survive_push_into_spare_capacity() {
    let mut array = DynamicArray::with_capacity(4).expect("Failed to with_capacity(..)");
    array.push_back(1).expect("Failed to push_back(..)");
    let first = array.begin();

    array.push_back(2).expect("Failed to push_back(..)");

    assert_eq!(array[first], 1);
}

#[test]
fn test_swap_keeps_positions_with_their_contents() {
    let mut a = DynamicArray::from([1, 2, 3]);
    let mut b = DynamicArray::from([7]);
    let second = a.begin() + 1;

    a.swap(&mut b);

    assert_eq!(b[second], 2);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "stale position")]
fn test_stale_position_after_growth_is_caught() {
    let mut array = DynamicArray::from([1, 2]);
    let first = array.begin();

    array.push_back(3).expect("Failed to push_back(..)");

    let _ = array[first];
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "stale position")]
fn test_stale_position_after_erase_is_caught() {
    let mut array = DynamicArray::from([1, 2, 3]);
    let last = array.begin() + 2;

    array.erase(array.begin());

    array.erase(last);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "stale position")]
fn test_stale_position_after_reserve_is_caught() {
    let mut array = DynamicArray::from([1, 2]);
    let end = array.end();

    array.reserve(10).expect("Failed to reserve(..)");

    let _ = array.insert(end, 3);
}
