// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Sub, SubAssign};

/// Counter bumped whenever positions into an array stop being valid.
///
/// Only debug builds carry a value; release builds compare equal unconditionally.
#[cfg(debug_assertions)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Generation(u64);

#[cfg(debug_assertions)]
impl Generation {
    pub(crate) const INITIAL: Self = Self(0);

    #[inline]
    pub(crate) fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

#[cfg(not(debug_assertions))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Generation;

#[cfg(not(debug_assertions))]
impl Generation {
    pub(crate) const INITIAL: Self = Self;

    #[inline(always)]
    pub(crate) fn bump(&mut self) {}
}

/// A slot position inside a [`DynamicArray`](crate::DynamicArray).
///
/// Positions are plain indices obtained from `begin()`, `end()`, `insert()` or `erase()`
/// and moved around with `+`/`-`. They are valid for the live range `[begin, end]` of the
/// array that produced them.
///
/// # Invalidation
///
/// Any operation that reallocates or shifts elements (growth through `push_back`,
/// `insert`, `erase`, a reallocating `reserve`, growth through `resize`) invalidates every
/// outstanding position. Using a stale position is a caller bug; debug builds catch it
/// with an assertion, release builds silently address whatever now lives at that index.
#[derive(Clone, Copy)]
pub struct Position {
    index: usize,
    generation: Generation,
}

impl Position {
    #[inline]
    pub(crate) fn new(index: usize, generation: Generation) -> Self {
        Self { index, generation }
    }

    #[inline]
    pub(crate) fn generation(&self) -> Generation {
        self.generation
    }

    /// Element index this position refers to.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl core::fmt::Debug for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Position").field(&self.index).finish()
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Position {}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl Add<usize> for Position {
    type Output = Position;

    fn add(self, offset: usize) -> Position {
        Position::new(self.index + offset, self.generation)
    }
}

impl AddAssign<usize> for Position {
    fn add_assign(&mut self, offset: usize) {
        self.index += offset;
    }
}

impl Sub<usize> for Position {
    type Output = Position;

    fn sub(self, offset: usize) -> Position {
        Position::new(self.index - offset, self.generation)
    }
}

impl SubAssign<usize> for Position {
    fn sub_assign(&mut self, offset: usize) {
        self.index -= offset;
    }
}

/// Number of slots from `rhs` to `self`. `rhs` must not be past `self`.
impl Sub<Position> for Position {
    type Output = usize;

    fn sub(self, rhs: Position) -> usize {
        self.index - rhs.index
    }
}
