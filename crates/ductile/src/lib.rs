// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Growable contiguous arrays with explicit capacity control.</em></p>
//!
//! ---
//!
//! Ductile is a small `no_std` container library built around [`DynamicArray<T>`]: a
//! contiguous, heap-backed array that grows by doubling, reports every allocation failure
//! as a value, and keeps the array intact when an operation fails.
//!
//! # Features
//!
//! - **Predictable capacity**: `push_back` doubles (0 becomes 1), `reserve` and growing
//!   `resize` allocate exactly what was asked for, nothing ever shrinks
//! - **Strong failure guarantee**: allocating operations return `Result` and leave the array
//!   untouched on `Err`
//! - **Checked and unchecked access**: `at()` returns [`ArrayError::OutOfRange`],
//!   `get_unchecked()` is an explicit `unsafe` opt-in
//! - **Positions**: `begin()`/`end()` drive `insert()` and `erase()`; debug builds catch stale
//!   positions
//! - **`no_std` compatible**: only needs `alloc`
//!
//! # Installation
//!
//! ```toml
//! [dependencies]
//! ductile = "0.1.0-rc.1"
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use ductile::{ArrayError, DynamicArray};
//!
//! fn main() -> Result<(), ArrayError> {
//!     let mut array = DynamicArray::new();
//!     array.push_back(1)?;
//!     array.push_back(2)?;
//!     array.push_back(3)?;
//!
//!     assert_eq!(array.len(), 3);
//!     assert_eq!(array.capacity(), 4);
//!
//!     // Erase the second element, then insert at the front.
//!     let second = array.begin() + 1;
//!     array.erase(second);
//!     array.insert(array.begin(), 0)?;
//!     assert_eq!(array, [0, 1, 3]);
//!
//!     // Grow with default values.
//!     array.resize(5)?;
//!     assert_eq!(array, [0, 1, 3, 0, 0]);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Sized versus reserved
//!
//! ```rust
//! use ductile::{DynamicArray, reserve};
//!
//! let sized = DynamicArray::<i32>::with_len(5)?;
//! assert_eq!((sized.len(), sized.capacity()), (5, 5));
//!
//! let reserved = DynamicArray::<i32>::with_reserve(reserve(5))?;
//! assert_eq!((reserved.len(), reserved.capacity()), (0, 5));
//! # Ok::<(), ductile::ArrayError>(())
//! ```
//!
//! # Crates
//!
//! | Crate | Contents |
//! |-------|----------|
//! | [`array`] | `DynamicArray`, `Position`, `ReserveRequest`, `ArrayError`, `dyn_array!` |
//! | [`buffer`] | `Buffer`, the raw fixed-capacity storage behind every array |
//!
//! # Testing
//!
//! With the `test-utils` feature, arrays accept an injected allocation failure:
//!
//! ```rust,ignore
//! use ductile::support::test_utils::DynamicArrayBehaviour;
//!
//! let mut array = ductile::DynamicArray::new();
//! array.change_behaviour(DynamicArrayBehaviour::FailAtAllocation);
//! assert!(array.push_back(1).is_err());
//! ```
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]

pub mod support;

pub use ductile_array as array;
pub use ductile_buffer as buffer;

pub use ductile_array::{ArrayError, DynamicArray, IntoIter, Position, ReserveRequest, dyn_array, reserve};
pub use ductile_buffer::BufferError;
