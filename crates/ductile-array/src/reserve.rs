// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// A request to pre-allocate capacity without constructing any element.
///
/// Passed to [`DynamicArray::with_reserve`](crate::DynamicArray::with_reserve) so that
/// "N elements" and "room for N elements" can never be confused at a call site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReserveRequest {
    capacity: usize,
}

impl ReserveRequest {
    /// Requests room for `capacity` elements.
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Requested number of slots.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Shorthand for [`ReserveRequest::new`].
///
/// ```rust
/// use ductile_array::{DynamicArray, reserve};
///
/// let array = DynamicArray::<u8>::with_reserve(reserve(8)).expect("Failed to with_reserve(..)");
/// assert_eq!(array.len(), 0);
/// assert_eq!(array.capacity(), 8);
/// ```
pub const fn reserve(capacity: usize) -> ReserveRequest {
    ReserveRequest::new(capacity)
}
