// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for ductile-array.

use ductile_buffer::BufferError;
use thiserror::Error;

/// Error type for `DynamicArray` operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ArrayError {
    /// Checked access with an index at or past the current length.
    ///
    /// The array is left untouched and remains usable.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Length at the time of the access.
        len: usize,
    },

    /// Acquiring a new buffer failed during growth, reservation or construction.
    ///
    /// The array is left exactly as it was before the call.
    #[error("allocation error: {0}")]
    Allocation(#[from] BufferError),
}
