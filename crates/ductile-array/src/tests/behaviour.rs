// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use ductile_buffer::BufferError;
use ductile_test_utils::DropTracker;

use crate::{ArrayError, DynamicArray, DynamicArrayBehaviour};

fn full_array() -> DynamicArray<u32> {
    let mut array = DynamicArray::with_capacity(4).expect("Failed to with_capacity(..)");
    for i in 1..=4 {
        array.push_back(i).expect("Failed to push_back(..)");
    }
    array
}

fn assert_allocation_failed(result: Result<(), ArrayError>) {
    assert!(matches!(
        result,
        Err(ArrayError::Allocation(BufferError::AllocationFailed { .. }))
    ));
}

// =============================================================================
// Growth failures
// =============================================================================

#[test]
fn test_push_back_failure_on_empty_keeps_capacity_zero() {
    let mut array = DynamicArray::new();
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);

    assert_allocation_failed(array.push_back(1u8));

    assert!(array.is_empty());
    assert_eq!(array.capacity(), 0);
}

#[test]
fn test_push_back_failure_on_full_is_strong() {
    let mut array = full_array();
    let ptr = array.as_ptr();
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);

    assert_allocation_failed(array.push_back(5));

    assert_eq!(array, [1, 2, 3, 4]);
    assert_eq!(array.capacity(), 4);
    assert_eq!(array.as_ptr(), ptr);
}

#[test]
fn test_push_back_with_spare_capacity_does_not_allocate() {
    let mut array = DynamicArray::with_capacity(2).expect("Failed to with_capacity(..)");
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);

    array.push_back('a').expect("Failed to push_back(..)");
    array.push_back('b').expect("Failed to push_back(..)");

    assert_eq!(array, ['a', 'b']);
}

#[test]
fn test_push_back_failure_drops_rejected_value() {
    let tracker = DropTracker::new();
    let mut array = DynamicArray::new();
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);

    assert!(array.push_back(tracker.track(1)).is_err());

    assert_eq!(tracker.drops(), 1);
}

#[test]
fn test_insert_failure_on_full_is_strong() {
    let mut array = full_array();
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);

    let result = array.insert(array.begin() + 1, 99);

    assert!(matches!(
        result,
        Err(ArrayError::Allocation(BufferError::AllocationFailed { .. }))
    ));
    assert_eq!(array, [1, 2, 3, 4]);
    assert_eq!(array.capacity(), 4);
}

#[test]
fn test_insert_failure_keeps_positions_valid() {
    let mut array = full_array();
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);

    let position = array.begin() + 2;
    assert!(array.insert(position, 0).is_err());

    assert_eq!(array[position], 3);
}

// =============================================================================
// reserve() / resize() failures
// =============================================================================

#[test]
fn test_reserve_failure_is_strong() {
    let mut array = full_array();
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);

    assert_allocation_failed(array.reserve(64));

    assert_eq!(array, [1, 2, 3, 4]);
    assert_eq!(array.capacity(), 4);
}

#[test]
fn test_reserve_within_capacity_ignores_behaviour() {
    let mut array = full_array();
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);

    array.reserve(4).expect("Failed to reserve(..)");
    array.reserve(0).expect("Failed to reserve(..)");

    assert_eq!(array.capacity(), 4);
}

#[test]
fn test_resize_failure_is_strong() {
    let mut array = full_array();
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);

    assert_allocation_failed(array.resize(10));

    assert_eq!(array, [1, 2, 3, 4]);
    assert_eq!(array.capacity(), 4);
}

#[test]
fn test_resize_down_ignores_behaviour() {
    let mut array = full_array();
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);

    array.resize(2).expect("Failed to resize(..)");

    assert_eq!(array, [1, 2]);
}

#[test]
fn test_resize_with_failure_never_calls_filler() {
    let mut array = full_array();
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);
    let mut calls = 0;

    let result = array.resize_with(8, || {
        calls += 1;
        0
    });

    assert_allocation_failed(result);
    assert_eq!(calls, 0);
}

// =============================================================================
// Copy failures
// =============================================================================

#[test]
fn test_try_clone_failure() {
    let mut array = full_array();
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);

    let result = array.try_clone();

    assert!(matches!(
        result,
        Err(ArrayError::Allocation(BufferError::AllocationFailed { .. }))
    ));
    assert_eq!(array, [1, 2, 3, 4]);
}

#[test]
fn test_try_clone_of_empty_succeeds_despite_behaviour() {
    let mut array: DynamicArray<u32> = DynamicArray::new();
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);

    let copy = array.try_clone().expect("Failed to try_clone()");

    assert!(copy.is_empty());
}

#[test]
fn test_try_clone_from_failure_leaves_target_untouched() {
    let mut source = full_array();
    source.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);
    let mut target = DynamicArray::from([7u32, 8]);
    let ptr = target.as_ptr();

    assert_allocation_failed(target.try_clone_from(&source));

    assert_eq!(target, [7, 8]);
    assert_eq!(target.capacity(), 2);
    assert_eq!(target.as_ptr(), ptr);
}

#[test]
fn test_clone_does_not_inherit_behaviour() {
    let mut array = DynamicArray::with_capacity(1).expect("Failed to with_capacity(..)");
    array.push_back(1u32).expect("Failed to push_back(..)");

    let mut copy = array.try_clone().expect("Failed to try_clone()");
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);

    copy.push_back(2).expect("Failed to push_back(..)");
    assert!(array.push_back(2).is_err());
}

// =============================================================================
// Recovery
// =============================================================================

#[test]
fn test_resetting_behaviour_recovers() {
    let mut array = full_array();
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);
    assert!(array.push_back(5).is_err());

    array.change_behaviour(DynamicArrayBehaviour::None);
    array.push_back(5).expect("Failed to push_back(..)");

    assert_eq!(array, [1, 2, 3, 4, 5]);
    assert_eq!(array.capacity(), 8);
}

#[test]
fn test_behaviour_is_sticky() {
    let mut array = DynamicArray::new();
    array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);

    for i in 0..3u8 {
        assert!(array.push_back(i).is_err());
    }

    assert_eq!(array.capacity(), 0);
}

#[test]
fn test_default_behaviour_is_none() {
    assert_eq!(DynamicArrayBehaviour::default(), DynamicArrayBehaviour::None);
}
