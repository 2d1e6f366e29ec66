// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Buffer - exclusive owner of a raw, fixed-capacity allocation.

use alloc::alloc::{alloc, dealloc};
use core::alloc::Layout;
use core::marker::PhantomData;
use core::mem::size_of;
use core::ptr::NonNull;

use crate::error::BufferError;

/// Raw storage for exactly `capacity` values of `T`.
///
/// Slots are uninitialized unless the owner writes them. The buffer never reads, drops or
/// tracks its slots: dropping a `Buffer` only releases the allocation.
///
/// A default-constructed buffer owns no allocation and has capacity 0. Zero-sized types
/// never allocate either, but still report the requested capacity.
pub struct Buffer<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

// Safety: Buffer exclusively owns its allocation and hands out references only through
// &self / &mut self, so it is as thread-safe as T itself.
unsafe impl<T: Send> Send for Buffer<T> {}
unsafe impl<T: Sync> Sync for Buffer<T> {}

impl<T> Buffer<T> {
    /// Creates a buffer that owns no allocation.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates storage for exactly `capacity` values of `T`.
    ///
    /// # Errors
    ///
    /// - [`BufferError::CapacityOverflow`] if `capacity` slots exceed `isize::MAX` bytes.
    /// - [`BufferError::AllocationFailed`] if the global allocator returns null.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, BufferError> {
        if capacity == 0 {
            return Ok(Self::new());
        }

        let layout = Self::layout_for(capacity)?;

        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                _marker: PhantomData,
            });
        }

        // SAFETY: layout has a non-zero size.
        let raw = unsafe { alloc(layout) };

        let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
            log::debug!(
                "allocator refused {} bytes for {} slots",
                layout.size(),
                capacity
            );
            return Err(BufferError::AllocationFailed { layout });
        };

        log::trace!("acquired {} bytes for {} slots", layout.size(), capacity);

        Ok(Self {
            ptr,
            capacity,
            _marker: PhantomData,
        })
    }

    /// Returns the layout of an allocation holding `capacity` values of `T`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::CapacityOverflow`] if the byte size exceeds `isize::MAX`.
    pub fn layout_for(capacity: usize) -> Result<Layout, BufferError> {
        Layout::array::<T>(capacity).map_err(|_| BufferError::CapacityOverflow { capacity })
    }

    /// Number of slots this buffer can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if this buffer owns a heap allocation.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.capacity != 0 && size_of::<T>() != 0
    }

    /// Pointer to the first slot. Dangling (but aligned) when nothing is allocated.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable pointer to the first slot. Dangling (but aligned) when nothing is allocated.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns a reference to the value in slot `index`.
    ///
    /// # Safety
    ///
    /// `index < capacity()` and the slot holds an initialized value.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.capacity, "Buffer::get_unchecked: index out of bounds");
        // SAFETY: guaranteed by the caller.
        unsafe { &*self.ptr.as_ptr().add(index) }
    }

    /// Returns a mutable reference to the value in slot `index`.
    ///
    /// # Safety
    ///
    /// `index < capacity()` and the slot holds an initialized value.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.capacity, "Buffer::get_unchecked_mut: index out of bounds");
        // SAFETY: guaranteed by the caller.
        unsafe { &mut *self.ptr.as_ptr().add(index) }
    }

    /// Writes `value` into slot `index` without reading or dropping the previous content.
    ///
    /// # Safety
    ///
    /// `index < capacity()`. An initialized value already in the slot is leaked.
    #[inline]
    pub unsafe fn write(&mut self, index: usize, value: T) {
        debug_assert!(index < self.capacity, "Buffer::write: index out of bounds");
        // SAFETY: guaranteed by the caller.
        unsafe { self.ptr.as_ptr().add(index).write(value) }
    }

    /// Moves the value out of slot `index`, leaving the slot logically uninitialized.
    ///
    /// # Safety
    ///
    /// `index < capacity()`, the slot holds an initialized value, and the caller must not
    /// read or drop that slot again before rewriting it.
    #[inline]
    pub unsafe fn read(&self, index: usize) -> T {
        debug_assert!(index < self.capacity, "Buffer::read: index out of bounds");
        // SAFETY: guaranteed by the caller.
        unsafe { self.ptr.as_ptr().add(index).read() }
    }

    /// Transfers ownership of the allocation out of `self`.
    ///
    /// `self` is left owning nothing (capacity 0).
    #[inline]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Exchanges allocations with `other`. O(1), never fails.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }
}

impl<T> Default for Buffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        if !self.is_allocated() {
            return;
        }

        // The layout was validated when this allocation was made.
        if let Ok(layout) = Self::layout_for(self.capacity) {
            log::trace!(
                "released {} bytes for {} slots",
                layout.size(),
                self.capacity
            );
            // SAFETY: ptr was returned by `alloc` with exactly this layout.
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
    }
}

impl<T> core::fmt::Debug for Buffer<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Buffer")
            .field("capacity", &self.capacity)
            .field("allocated", &self.is_allocated())
            .finish_non_exhaustive()
    }
}
