// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared drop counter handed to [`Tracked`] values.
#[derive(Debug, Default, Clone)]
pub struct DropTracker {
    drops: Arc<AtomicUsize>,
}

impl DropTracker {
    /// Creates a tracker with a zeroed counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps `value` so that dropping it increments this tracker.
    pub fn track<V>(&self, value: V) -> Tracked<V> {
        Tracked {
            value,
            drops: Arc::clone(&self.drops),
        }
    }

    /// Number of tracked values dropped so far.
    pub fn drops(&self) -> usize {
        self.drops.load(Ordering::SeqCst)
    }
}

/// A value whose drop is recorded by a [`DropTracker`].
///
/// Clones are tracked by the same tracker. Equality and ordering look at the value only.
#[derive(Debug)]
pub struct Tracked<V> {
    value: V,
    drops: Arc<AtomicUsize>,
}

impl<V> Tracked<V> {
    /// Returns the wrapped value.
    pub fn value(&self) -> &V {
        &self.value
    }
}

impl<V: Clone> Clone for Tracked<V> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            drops: Arc::clone(&self.drops),
        }
    }
}

impl<V: PartialEq> PartialEq for Tracked<V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V> Drop for Tracked<V> {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}
