// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-capacity raw storage for growable containers.
//!
//! [`Buffer<T>`] owns zero or one contiguous heap allocation able to hold exactly
//! `capacity` values of `T`. It is deliberately dumb:
//!
//! - **No resizing**: the capacity is fixed at construction. Containers grow by allocating
//!   a new `Buffer` and relocating their elements into it.
//! - **No element bookkeeping**: a `Buffer` does not know which slots are initialized.
//!   Dropping it releases the allocation and never drops elements; the owner does that.
//! - **Ownership transfer**: [`Buffer::take`] moves the allocation out and leaves the source
//!   owning nothing; [`Buffer::swap`] exchanges allocations in O(1).
//!
//! Allocation failure is reported as a [`BufferError`] instead of aborting, so callers can
//! keep their previous state intact.
//!
//! # Example
//!
//! ```rust
//! use ductile_buffer::{Buffer, BufferError};
//!
//! fn example() -> Result<(), BufferError> {
//!     let mut buffer = Buffer::<u32>::try_with_capacity(4)?;
//!     assert_eq!(buffer.capacity(), 4);
//!
//!     unsafe {
//!         // SAFETY: slot 0 is in bounds and uninitialized.
//!         buffer.write(0, 42);
//!         assert_eq!(*buffer.get_unchecked(0), 42);
//!     }
//!
//!     let moved = buffer.take();
//!     assert_eq!(moved.capacity(), 4);
//!     assert_eq!(buffer.capacity(), 0);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod buffer;
mod error;

pub use buffer::Buffer;
pub use error::BufferError;
