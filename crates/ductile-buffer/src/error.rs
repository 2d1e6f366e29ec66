// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for ductile-buffer.
use core::alloc::Layout;

use thiserror::Error;

/// Errors that can occur when acquiring a buffer allocation.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BufferError {
    /// The requested number of slots does not fit in `isize::MAX` bytes.
    #[error("capacity overflow: {capacity} slots exceed the maximum allocation size")]
    CapacityOverflow {
        /// Requested number of slots.
        capacity: usize,
    },

    /// The global allocator could not satisfy the request.
    #[error("allocation of {} bytes (align {}) failed", .layout.size(), .layout.align())]
    AllocationFailed {
        /// Layout that was refused.
        layout: Layout,
    },
}
