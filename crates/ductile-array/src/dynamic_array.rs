// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::alloc::handle_alloc_error;
use core::ops::{Deref, DerefMut, Index, IndexMut};
use core::ptr;

use ductile_buffer::{Buffer, BufferError};

use crate::error::ArrayError;
use crate::position::{Generation, Position};
use crate::reserve::ReserveRequest;

/// Test behaviour for injecting allocation failures in `DynamicArray` operations.
///
/// This is only available with the `test-utils` feature and allows users
/// to test error handling paths in their code by injecting failures.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// // test-utils feature required in dev-dependencies
/// #[cfg(test)]
/// mod tests {
///     use ductile_array::{DynamicArray, DynamicArrayBehaviour};
///
///     #[test]
///     fn test_handles_allocation_failure() {
///         let mut array = DynamicArray::new();
///         array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);
///
///         // Growth from capacity 0 needs a buffer
///         assert!(array.push_back(1u8).is_err());
///         assert_eq!(array.capacity(), 0);
///     }
/// }
/// ```
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DynamicArrayBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every buffer allocation fails with `BufferError::AllocationFailed`.
    FailAtAllocation,
}

/// A growable, contiguous array.
///
/// `DynamicArray<T>` keeps `len()` live elements at the front of a [`Buffer`] holding
/// `capacity()` slots. Appending is amortized O(1): when the array is full, the capacity
/// doubles (or becomes 1 from 0). Explicit `reserve()` and growth through `resize()`
/// allocate exactly the requested capacity. The capacity never shrinks.
///
/// # Failure semantics
///
/// Every operation that may allocate returns `Result` and gives the strong guarantee:
/// on `Err`, the array is exactly as it was before the call.
///
/// # Access
///
/// - [`at`](Self::at) / [`at_mut`](Self::at_mut): checked, return
///   [`ArrayError::OutOfRange`].
/// - `array[i]`: checked, panics when out of range.
/// - [`get_unchecked`](Self::get_unchecked): `unsafe`, no bounds check.
///
/// # Example
///
/// ```rust
/// use ductile_array::{ArrayError, DynamicArray};
///
/// fn example() -> Result<(), ArrayError> {
///     let mut array = DynamicArray::new();
///     array.push_back(1)?;
///     array.push_back(2)?;
///     array.push_back(3)?;
///     assert_eq!(array.capacity(), 4);
///
///     let second = array.begin() + 1;
///     array.erase(second);
///     array.insert(array.begin(), 0)?;
///
///     assert_eq!(array, [0, 1, 3]);
///     assert!(array.at(3).is_err());
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct DynamicArray<T> {
    buffer: Buffer<T>,
    len: usize,
    generation: Generation,
    #[cfg(any(test, feature = "test-utils"))]
    behaviour: DynamicArrayBehaviour,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array that owns no allocation.
    pub const fn new() -> Self {
        Self::from_buffer(Buffer::new())
    }

    const fn from_buffer(buffer: Buffer<T>) -> Self {
        Self {
            buffer,
            len: 0,
            generation: Generation::INITIAL,
            #[cfg(any(test, feature = "test-utils"))]
            behaviour: DynamicArrayBehaviour::None,
        }
    }

    /// Creates an empty array with exactly the requested capacity.
    ///
    /// No element is constructed.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Allocation`] if the buffer cannot be acquired.
    pub fn with_reserve(request: ReserveRequest) -> Result<Self, ArrayError> {
        let mut array = Self::new();
        array.reserve(request.capacity())?;
        Ok(array)
    }

    /// Shorthand for `with_reserve(ReserveRequest::new(capacity))`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Allocation`] if the buffer cannot be acquired.
    pub fn with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        Self::with_reserve(ReserveRequest::new(capacity))
    }

    /// Creates an array of `len` default values, with `capacity() == len`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Allocation`] if the buffer cannot be acquired.
    pub fn with_len(len: usize) -> Result<Self, ArrayError>
    where
        T: Default,
    {
        let mut array = Self::with_capacity(len)?;
        array.resize_with(len, T::default)?;
        Ok(array)
    }

    /// Creates an array of `len` clones of `value`, with `capacity() == len`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Allocation`] if the buffer cannot be acquired.
    pub fn from_elem(len: usize, value: &T) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        let mut array = Self::with_capacity(len)?;
        array.resize_with(len, || value.clone())?;
        Ok(array)
    }

    /// Creates an array holding clones of `items`, in order, with `capacity() == items.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Allocation`] if the buffer cannot be acquired.
    pub fn from_slice(items: &[T]) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        let mut array = Self::with_capacity(items.len())?;

        for item in items {
            // SAFETY: capacity == items.len() > len for every iteration.
            unsafe { array.push_unchecked(item.clone()) };
        }

        Ok(array)
    }

    #[doc(hidden)]
    pub fn __from_elem_infallible(len: usize, value: &T) -> Self
    where
        T: Clone,
    {
        infallible(Self::from_elem(len, value))
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots, live or not.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns `true` if the array holds no live element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, len) are initialized; the pointer is non-null and aligned
        // even when nothing is allocated.
        unsafe { core::slice::from_raw_parts(self.buffer.as_ptr(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: see `as_slice`.
        unsafe { core::slice::from_raw_parts_mut(self.buffer.as_mut_ptr(), self.len) }
    }

    /// Appends `value` after the last element.
    ///
    /// Doubles the capacity first when the array is full (0 becomes 1).
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Allocation`] if growth fails. `value` is dropped and the
    /// array is unchanged.
    pub fn push_back(&mut self, value: T) -> Result<(), ArrayError> {
        self.grow_if_full()?;

        // SAFETY: grow_if_full guarantees len < capacity.
        unsafe { self.push_unchecked(value) };

        Ok(())
    }

    /// Removes the last element and returns it, or `None` if the array is empty.
    ///
    /// The capacity is unchanged.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        self.len -= 1;

        // SAFETY: slot `len` was live and is now outside the live range.
        Some(unsafe { self.buffer.read(self.len) })
    }

    /// Inserts `value` at `position`, shifting every following element one slot right.
    ///
    /// `position` may be anywhere in `[begin(), end()]`; `end()` appends. Returns the
    /// position of the inserted element. All other positions are invalidated.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Allocation`] if growth fails. The array is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `position` is past `end()`.
    pub fn insert(&mut self, position: Position, value: T) -> Result<Position, ArrayError> {
        self.check_position(position);

        // Captured before growth: growth invalidates `position`.
        let index = position.index();

        assert!(
            index <= self.len,
            "DynamicArray::insert: position {index} is past end ({})",
            self.len
        );

        self.grow_if_full()?;

        unsafe {
            // SAFETY: index <= len < capacity, so [index, len] fits the buffer. `ptr::copy`
            // handles the overlapping ranges (last element moves first).
            let slot = self.buffer.as_mut_ptr().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            slot.write(value);
        }

        self.len += 1;
        self.invalidate_positions();

        Ok(self.position_at(index))
    }

    /// Removes the element at `position`, shifting every following element one slot left.
    ///
    /// Returns the position now occupied by the next element, which is `end()` when the
    /// last element was removed. All other positions are invalidated.
    ///
    /// # Panics
    ///
    /// Panics if `position` does not reference a live element.
    pub fn erase(&mut self, position: Position) -> Position {
        self.check_position(position);

        let index = position.index();

        assert!(
            index < self.len,
            "DynamicArray::erase: position {index} out of range for length {}",
            self.len
        );

        let removed = unsafe {
            // SAFETY: index < len; the removed value is read out before its slot is
            // overwritten by the shift.
            let slot = self.buffer.as_mut_ptr().add(index);
            let removed = slot.read();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            removed
        };

        self.len -= 1;
        self.invalidate_positions();

        // Dropped once the array is consistent again.
        drop(removed);

        self.position_at(index)
    }

    /// Drops every element. The capacity and allocation are retained.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drops the elements past `new_len`. No-op if `new_len >= len()`.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }

        let tail_len = self.len - new_len;
        self.len = new_len;

        unsafe {
            // SAFETY: [new_len, new_len + tail_len) were live and are now outside the live
            // range, so they are dropped exactly once.
            let tail = ptr::slice_from_raw_parts_mut(self.buffer.as_mut_ptr().add(new_len), tail_len);
            ptr::drop_in_place(tail);
        }
    }

    /// Resizes to `new_len`, filling new slots with `T::default()`.
    ///
    /// Shrinking truncates. Growing past the capacity reserves exactly `new_len` slots
    /// (no doubling).
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Allocation`] if the reservation fails. The array is unchanged.
    pub fn resize(&mut self, new_len: usize) -> Result<(), ArrayError>
    where
        T: Default,
    {
        self.resize_with(new_len, T::default)
    }

    /// Resizes to `new_len`, filling new slots with values returned by `f`.
    ///
    /// Same capacity rules as [`resize`](Self::resize).
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Allocation`] if the reservation fails. The array is unchanged.
    pub fn resize_with<F>(&mut self, new_len: usize, mut f: F) -> Result<(), ArrayError>
    where
        F: FnMut() -> T,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }

        if new_len > self.capacity() {
            self.reserve(new_len)?;
        }

        while self.len < new_len {
            // SAFETY: new_len <= capacity.
            unsafe { self.push_unchecked(f()) };
        }

        Ok(())
    }

    /// Grows the capacity to exactly `new_capacity`. No-op if it is not larger.
    ///
    /// Elements are moved into a freshly acquired buffer before the old one is released.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Allocation`] if the new buffer cannot be acquired. The array,
    /// including its capacity, is unchanged.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }

        let mut replacement = self.allocate(new_capacity)?;

        unsafe {
            // SAFETY: both buffers hold at least `len` slots and never overlap. The old
            // slots are released below without being dropped, so each value moves once.
            ptr::copy_nonoverlapping(self.buffer.as_ptr(), replacement.as_mut_ptr(), self.len);
        }

        log::trace!(
            "DynamicArray capacity {} -> {} (len {})",
            self.capacity(),
            new_capacity,
            self.len
        );

        self.buffer.swap(&mut replacement);
        self.invalidate_positions();

        Ok(())
    }

    /// Checked access.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfRange`] if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Checked mutable access.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Unchecked access.
    ///
    /// # Safety
    ///
    /// `index < len()`. Anything else is undefined behavior.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "DynamicArray::get_unchecked: index out of range");
        // SAFETY: guaranteed by the caller.
        unsafe { self.buffer.get_unchecked(index) }
    }

    /// Unchecked mutable access.
    ///
    /// # Safety
    ///
    /// `index < len()`. Anything else is undefined behavior.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len, "DynamicArray::get_unchecked_mut: index out of range");
        // SAFETY: guaranteed by the caller.
        unsafe { self.buffer.get_unchecked_mut(index) }
    }

    /// First element, if any.
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Last element, if any.
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Position of the first element. Equal to `end()` when empty.
    #[inline]
    pub fn begin(&self) -> Position {
        self.position_at(0)
    }

    /// Position one past the last element.
    #[inline]
    pub fn end(&self) -> Position {
        self.position_at(self.len)
    }

    /// Exchanges contents (buffer, length, capacity) with `other`. O(1), never fails.
    pub fn swap(&mut self, other: &mut Self) {
        self.buffer.swap(&mut other.buffer);
        core::mem::swap(&mut self.len, &mut other.len);
        core::mem::swap(&mut self.generation, &mut other.generation);
    }

    /// Moves the contents out, leaving `self` empty with capacity 0.
    pub fn take(&mut self) -> Self {
        let mut taken = Self::new();
        self.swap(&mut taken);
        taken
    }

    /// Deep copy with `capacity() == len()`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Allocation`] if the copy's buffer cannot be acquired.
    pub fn try_clone(&self) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        let mut copy = Self::from_buffer(self.allocate(self.len)?);

        for item in self.as_slice() {
            // SAFETY: the copy has exactly `self.len` slots.
            unsafe { copy.push_unchecked(item.clone()) };
        }

        Ok(copy)
    }

    /// Replaces the contents of `self` with a deep copy of `source`.
    ///
    /// The copy is built completely before being swapped in, so `self` is untouched if
    /// building it fails (or if cloning an element panics).
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Allocation`] if the copy's buffer cannot be acquired.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), ArrayError>
    where
        T: Clone,
    {
        let mut copy = source.try_clone()?;
        self.swap(&mut copy);
        Ok(())
    }

    /// Changes the test behaviour for this array.
    ///
    /// This is only available with the `test-utils` feature and allows injecting
    /// failures for testing error handling paths.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn change_behaviour(&mut self, behaviour: DynamicArrayBehaviour) {
        self.behaviour = behaviour;
    }

    /// Hands the buffer and its live slots over to the caller, leaving `self` empty.
    pub(crate) fn take_buffer(&mut self) -> Buffer<T> {
        self.len = 0;
        self.buffer.take()
    }

    fn allocate(&self, capacity: usize) -> Result<Buffer<T>, ArrayError> {
        if capacity == 0 {
            return Ok(Buffer::new());
        }

        #[cfg(any(test, feature = "test-utils"))]
        if matches!(self.behaviour, DynamicArrayBehaviour::FailAtAllocation) {
            let layout = Buffer::<T>::layout_for(capacity)?;
            log::debug!("DynamicArray: injected allocation failure for {capacity} slots");
            return Err(BufferError::AllocationFailed { layout }.into());
        }

        Buffer::try_with_capacity(capacity).map_err(|err| {
            log::debug!("DynamicArray: cannot acquire {capacity} slots, left untouched: {err}");
            ArrayError::from(err)
        })
    }

    fn grow_if_full(&mut self) -> Result<(), ArrayError> {
        let capacity = self.capacity();

        if self.len < capacity {
            return Ok(());
        }

        let new_capacity = match capacity {
            0 => 1,
            _ => capacity
                .checked_mul(2)
                .ok_or(BufferError::CapacityOverflow { capacity })?,
        };

        self.reserve(new_capacity)
    }

    /// # Safety
    ///
    /// `len() < capacity()`.
    #[inline]
    unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.capacity());
        // SAFETY: guaranteed by the caller.
        unsafe { self.buffer.write(self.len, value) };
        self.len += 1;
    }

    #[inline]
    fn position_at(&self, index: usize) -> Position {
        Position::new(index, self.generation)
    }

    #[inline]
    fn check_position(&self, position: Position) {
        debug_assert!(
            position.generation() == self.generation,
            "DynamicArray: stale position {} used after a reallocation or shift",
            position.index()
        );
    }

    #[inline]
    fn invalidate_positions(&mut self) {
        self.generation.bump();
    }
}

/// Unwraps the result of an allocating operation the way `Vec` does: allocation failure
/// goes to `handle_alloc_error`, capacity overflow panics.
pub(crate) fn infallible<R>(result: Result<R, ArrayError>) -> R {
    match result {
        Ok(value) => value,
        Err(ArrayError::Allocation(BufferError::AllocationFailed { layout })) => {
            handle_alloc_error(layout)
        }
        Err(ArrayError::Allocation(BufferError::CapacityOverflow { .. })) => {
            panic!("capacity overflow")
        }
        Err(err) => panic!("{err}"),
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // SAFETY: the live range is dropped exactly once; Buffer then releases the
        // allocation without touching the slots.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) };
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        infallible(self.try_clone())
    }

    fn clone_from(&mut self, source: &Self) {
        infallible(self.try_clone_from(source));
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> Index<Position> for DynamicArray<T> {
    type Output = T;

    fn index(&self, position: Position) -> &T {
        self.check_position(position);
        &self.as_slice()[position.index()]
    }
}

impl<T> IndexMut<Position> for DynamicArray<T> {
    fn index_mut(&mut self, position: Position) -> &mut T {
        self.check_position(position);
        &mut self.as_mut_slice()[position.index()]
    }
}
