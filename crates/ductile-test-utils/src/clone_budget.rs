// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared allowance of successful clones.
///
/// Once the allowance is spent, cloning any [`Budgeted`] value from this budget panics.
#[derive(Debug, Clone)]
pub struct CloneBudget {
    remaining: Arc<AtomicUsize>,
}

impl CloneBudget {
    /// Allows `clones` successful clones before panicking.
    pub fn new(clones: usize) -> Self {
        Self {
            remaining: Arc::new(AtomicUsize::new(clones)),
        }
    }

    /// Wraps `value` so that its clones draw from this budget.
    pub fn wrap<V>(&self, value: V) -> Budgeted<V> {
        Budgeted {
            value,
            remaining: Arc::clone(&self.remaining),
        }
    }

    /// Clones still allowed.
    pub fn remaining(&self) -> usize {
        self.remaining.load(Ordering::SeqCst)
    }
}

/// A value that panics on clone once its [`CloneBudget`] is exhausted.
#[derive(Debug)]
pub struct Budgeted<V> {
    value: V,
    remaining: Arc<AtomicUsize>,
}

impl<V> Budgeted<V> {
    /// Returns the wrapped value.
    pub fn value(&self) -> &V {
        &self.value
    }
}

impl<V: Clone> Clone for Budgeted<V> {
    fn clone(&self) -> Self {
        let spent = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));

        if spent.is_err() {
            panic!("Budgeted::clone: clone budget exhausted");
        }

        Self {
            value: self.value.clone(),
            remaining: Arc::clone(&self.remaining),
        }
    }
}

impl<V: PartialEq> PartialEq for Budgeted<V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
