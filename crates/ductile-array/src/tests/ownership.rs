// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::panic::{AssertUnwindSafe, catch_unwind};

use ductile_test_utils::{CloneBudget, DropTracker};

use crate::DynamicArray;

// =============================================================================
// try_clone() / Clone
// =============================================================================

#[test]
fn test_clone_is_equal_and_independent() {
    let original = DynamicArray::from([String::from("a"), String::from("b")]);
    let mut copy = original.clone();

    assert_eq!(copy, original);
    assert_ne!(copy.as_ptr(), original.as_ptr());

    copy[0].push('!');
    copy.push_back(String::from("c")).expect("Failed to push_back(..)");

    assert_eq!(original, ["a", "b"]);
    assert_eq!(copy, ["a!", "b", "c"]);
}

#[test]
fn test_try_clone_capacity_matches_len() {
    let mut original = DynamicArray::with_capacity(16).expect("Failed to with_capacity(..)");
    original.push_back(1u8).expect("Failed to push_back(..)");
    original.push_back(2u8).expect("Failed to push_back(..)");

    let copy = original.try_clone().expect("Failed to try_clone()");

    assert_eq!(copy, [1, 2]);
    assert_eq!(copy.capacity(), 2);
}

#[test]
fn test_clone_of_empty_does_not_allocate() {
    let original: DynamicArray<String> = DynamicArray::new();

    let copy = original.clone();

    assert!(copy.is_empty());
    assert_eq!(copy.capacity(), 0);
}

#[test]
fn test_clone_from_replaces_contents() {
    let source = DynamicArray::from([7, 8, 9]);
    let mut target = DynamicArray::from([1]);

    target.clone_from(&source);

    assert_eq!(target, source);
    assert_eq!(source, [7, 8, 9]);
}

#[test]
fn test_try_clone_from_drops_previous_contents() {
    let tracker = DropTracker::new();
    let source = DynamicArray::from([tracker.track(1)]);
    let mut target = DynamicArray::from([tracker.track(2), tracker.track(3)]);

    target.try_clone_from(&source).expect("Failed to try_clone_from(..)");

    assert_eq!(tracker.drops(), 2);
    assert_eq!(target.len(), 1);
    assert_eq!(*target[0].value(), 1);
}

// =============================================================================
// Panic safety
// =============================================================================

#[test]
fn test_panicking_clone_drops_partial_copy_exactly_once() {
    let tracker = DropTracker::new();
    let budget = CloneBudget::new(2);
    let items: Vec<_> = (0..3).map(|i| budget.wrap(tracker.track(i))).collect();

    let result = catch_unwind(AssertUnwindSafe(|| DynamicArray::from_slice(&items)));

    assert!(result.is_err());
    assert_eq!(budget.remaining(), 0);
    assert_eq!(tracker.drops(), 2);

    drop(items);
    assert_eq!(tracker.drops(), 5);
}

#[test]
fn test_panicking_clone_leaves_assignment_target_untouched() {
    let budget = CloneBudget::new(1);
    let source = DynamicArray::from([budget.wrap(1), budget.wrap(2)]);
    let mut target = DynamicArray::from([budget.wrap(10)]);

    let result = catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));

    assert!(result.is_err());
    assert_eq!(target.len(), 1);
    assert_eq!(*target[0].value(), 10);
}

// =============================================================================
// take() / move semantics
// =============================================================================

#[test]
fn test_take_moves_contents_and_resets_source() {
    let mut source = DynamicArray::from([1, 2, 3]);
    let ptr = source.as_ptr();

    let target = source.take();

    assert_eq!(target, [1, 2, 3]);
    assert_eq!(target.as_ptr(), ptr);
    assert_eq!(source.len(), 0);
    assert_eq!(source.capacity(), 0);
}

#[test]
fn test_mem_take_matches_take() {
    let mut source = DynamicArray::from([String::from("x")]);

    let target = core::mem::take(&mut source);

    assert_eq!(target, ["x"]);
    assert!(source.is_empty());
    assert_eq!(source.capacity(), 0);
}

#[test]
fn test_move_assignment_drops_previous_target() {
    let tracker = DropTracker::new();
    let mut source = DynamicArray::from([tracker.track('s')]);
    let mut target = DynamicArray::from([tracker.track('t'), tracker.track('u')]);

    target = source.take();

    assert_eq!(tracker.drops(), 2);
    assert_eq!(*target[0].value(), 's');
    assert_eq!(source.capacity(), 0);
}

#[test]
fn test_taken_source_is_reusable() {
    let mut source = DynamicArray::from([1, 2]);
    let _target = source.take();

    source.push_back(3).expect("Failed to push_back(..)");

    assert_eq!(source, [3]);
    assert_eq!(source.capacity(), 1);
}

// =============================================================================
// swap()
// =============================================================================

#[test]
fn test_swap_exchanges_everything() {
    let mut a = DynamicArray::from([1, 2, 3]);
    let mut b = DynamicArray::with_capacity(10).expect("Failed to with_capacity(..)");
    b.push_back(9).expect("Failed to push_back(..)");
    let (a_ptr, b_ptr) = (a.as_ptr(), b.as_ptr());

    a.swap(&mut b);

    assert_eq!(a, [9]);
    assert_eq!(a.capacity(), 10);
    assert_eq!(a.as_ptr(), b_ptr);

    assert_eq!(b, [1, 2, 3]);
    assert_eq!(b.capacity(), 3);
    assert_eq!(b.as_ptr(), a_ptr);
}

// =============================================================================
// Drop
// =============================================================================

#[test]
fn test_drop_drops_each_live_element_once() {
    let tracker = DropTracker::new();

    {
        let mut array = DynamicArray::new();
        for i in 0..10 {
            array.push_back(tracker.track(i)).expect("Failed to push_back(..)");
        }
        array.pop_back();
        array.erase(array.begin() + 3);
        assert_eq!(tracker.drops(), 2);
    }

    assert_eq!(tracker.drops(), 10);
}

#[test]
fn test_growth_moves_without_dropping() {
    let tracker = DropTracker::new();
    let mut array = DynamicArray::new();

    for i in 0..33 {
        array.push_back(tracker.track(i)).expect("Failed to push_back(..)");
    }
    array.reserve(100).expect("Failed to reserve(..)");

    assert_eq!(tracker.drops(), 0);
    assert_eq!(array.capacity(), 100);
}
