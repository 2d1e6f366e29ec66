// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for Ductile crates.
//!
//! Instrumented element types for exercising container ownership rules:
//!
//! - [`DropTracker`] / [`Tracked`]: count how many values were dropped, to prove that
//!   every constructed element is dropped exactly once.
//! - [`CloneBudget`] / [`Budgeted`]: panic on the N-th clone, to prove that a container
//!   survives a panicking copy without double drops or leaks.
//!
//! ## License
//!
//! GPL-3.0-only

mod clone_budget;
mod drop_tracker;

pub use clone_budget::{Budgeted, CloneBudget};
pub use drop_tracker::{DropTracker, Tracked};
