// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::iter::FusedIterator;
use core::mem::ManuallyDrop;
use core::ptr;

use ductile_buffer::Buffer;

use crate::dynamic_array::DynamicArray;

/// Owning iterator over the elements of a [`DynamicArray`].
///
/// Takes over the array's buffer. Elements not yielded are dropped with the iterator,
/// then the allocation is released.
pub struct IntoIter<T> {
    buffer: Buffer<T>,
    front: usize,
    back: usize,
}

impl<T> IntoIter<T> {
    /// Elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [front, back) are still live.
        unsafe {
            core::slice::from_raw_parts(self.buffer.as_ptr().add(self.front), self.back - self.front)
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }

        // SAFETY: slot `front` is live and leaves the live range right away.
        let value = unsafe { self.buffer.read(self.front) };
        self.front += 1;

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;

        // SAFETY: slot `back` was live and just left the live range.
        Some(unsafe { self.buffer.read(self.back) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = self.back - self.front;

        unsafe {
            // SAFETY: slots [front, back) are live and dropped exactly once here.
            let rest = ptr::slice_from_raw_parts_mut(self.buffer.as_mut_ptr().add(self.front), remaining);
            ptr::drop_in_place(rest);
        }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        // The array's own Drop must not run: its elements now belong to the iterator.
        let mut array = ManuallyDrop::new(self);
        let back = array.len();
        let buffer = array.take_buffer();

        IntoIter {
            buffer,
            front: 0,
            back,
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
