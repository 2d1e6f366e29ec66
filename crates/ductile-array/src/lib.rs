// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous array with explicit capacity control.
//!
//! `DynamicArray<T>` stores its elements in a single [`Buffer`](ductile_buffer::Buffer)
//! and relocates them into a new buffer whenever it needs more room.
//!
//! # Core Guarantees
//!
//! - **Predictable growth**: appending to a full array doubles its capacity (0 becomes 1).
//!   `reserve()` and growth through `resize()` allocate exactly what was asked for.
//!   The capacity never shrinks.
//! - **Strong failure guarantee**: every allocating operation returns `Result`; on error
//!   the array is observably unchanged.
//! - **Checked by default**: `at()` returns [`ArrayError::OutOfRange`]; the unchecked fast
//!   path (`get_unchecked`) is an explicit `unsafe` opt-in.
//! - **Value semantics**: `try_clone()` makes an independent deep copy; `take()` moves the
//!   contents out and leaves an empty, capacity-0 array behind.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use ductile_array::{ArrayError, DynamicArray};
//!
//! fn example() -> Result<(), ArrayError> {
//!     let mut array = DynamicArray::new();
//!
//!     for i in 1..=3 {
//!         array.push_back(i)?;
//!     }
//!
//!     assert_eq!(array.len(), 3);
//!     assert_eq!(array.capacity(), 4);
//!     assert_eq!(array, [1, 2, 3]);
//!
//!     assert!(matches!(array.at(3), Err(ArrayError::OutOfRange { index: 3, len: 3 })));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Reserving Without Constructing
//!
//! ```rust
//! use ductile_array::{ArrayError, DynamicArray, reserve};
//!
//! fn example() -> Result<(), ArrayError> {
//!     // Ten default elements...
//!     let sized = DynamicArray::<u32>::with_len(10)?;
//!     assert_eq!(sized.len(), 10);
//!
//!     // ...versus room for ten elements.
//!     let reserved = DynamicArray::<u32>::with_reserve(reserve(10))?;
//!     assert_eq!(reserved.len(), 0);
//!     assert_eq!(reserved.capacity(), 10);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Positions
//!
//! `begin()`/`end()` return [`Position`]s used by `insert()` and `erase()`. Positions are
//! invalidated by anything that reallocates or shifts elements; debug builds detect the
//! use of a stale position.
//!
//! # Test Utilities
//!
//! Enable the `test-utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! ductile-array = { version = "*", features = ["test-utils"] }
//! ```
//!
//! Then use [`DynamicArrayBehaviour`] to test error scenarios.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod compare;
mod convert;
mod dynamic_array;
mod error;
mod into_iter;
mod position;
mod reserve;

#[cfg(test)]
mod tests;

pub use dynamic_array::DynamicArray;
pub use error::ArrayError;
pub use into_iter::IntoIter;
pub use position::Position;
pub use reserve::{ReserveRequest, reserve};

#[cfg(any(test, feature = "test-utils"))]
pub use dynamic_array::DynamicArrayBehaviour;

/// Creates a [`DynamicArray`] from a list of elements or from a value and a count.
///
/// Like `vec!`, allocation failure aborts through `handle_alloc_error`.
///
/// ```rust
/// use ductile_array::dyn_array;
///
/// let listed = dyn_array![1, 2, 3];
/// assert_eq!(listed, [1, 2, 3]);
///
/// let filled = dyn_array![7u8; 4];
/// assert_eq!(filled, [7, 7, 7, 7]);
/// assert_eq!(filled.capacity(), 4);
/// ```
#[macro_export]
macro_rules! dyn_array {
    () => {
        $crate::DynamicArray::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::DynamicArray::__from_elem_infallible($n, &$elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::DynamicArray::from([$($x),+])
    };
}
