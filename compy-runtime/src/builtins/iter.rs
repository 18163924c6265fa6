//! Iterator support - Python's `range()` builtin
//!
//! Design: a [`RangeSequence`] holds three immutable bounds plus an
//! exhaustion flag decided once at construction. Traversals go through
//! [`RangeIter`], which owns its own cursor, so one sequence can be walked
//! any number of times (and from any number of threads) without interference.

use std::fmt;
use std::iter::FusedIterator;

use crate::error::{Result, RuntimeError};
use crate::logging::trace;

/// Half-open integer range `[start, stop)` advancing by `step`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeSequence {
    start: i64,
    stop: i64,
    step: i64,
    exhausted: bool,
}

impl RangeSequence {
    /// General form. Fails when `step` is zero.
    pub fn new(start: i64, stop: i64, step: i64) -> Result<Self> {
        if step == 0 {
            return Err(RuntimeError::InvalidStep { start, stop });
        }
        Ok(Self::build(start, stop, step))
    }

    /// `range(stop)`: counts up from zero
    pub fn up_to(stop: i64) -> Self {
        Self::build(0, stop, 1)
    }

    /// `range(start, stop)` with the default step of one
    pub fn between(start: i64, stop: i64) -> Self {
        Self::build(start, stop, 1)
    }

    fn build(start: i64, stop: i64, step: i64) -> Self {
        // (start - stop) > 0, compared directly so extreme bounds cannot overflow
        let descending_intent = start > stop;
        let exhausted = start == stop || descending_intent == (step > 0);

        trace!(target: "builtins", start, stop, step, exhausted, "range constructed");

        Self { start, stop, step, exhausted }
    }

    #[inline]
    pub const fn start(&self) -> i64 {
        self.start
    }

    #[inline]
    pub const fn stop(&self) -> i64 {
        self.stop
    }

    #[inline]
    pub const fn step(&self) -> i64 {
        self.step
    }

    /// True exactly when the sequence yields nothing, decided at construction
    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Number of values a full traversal yields
    pub fn len(&self) -> u64 {
        if self.exhausted {
            return 0;
        }
        remaining(self.start, self.stop, self.step)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a full traversal would yield `value`
    pub fn contains(&self, value: i64) -> bool {
        if self.is_empty() {
            return false;
        }

        let in_bounds = if self.step > 0 {
            self.start <= value && value < self.stop
        } else {
            self.stop < value && value <= self.start
        };

        in_bounds && (i128::from(value) - i128::from(self.start)) % i128::from(self.step) == 0
    }

    /// Start a fresh traversal with its own cursor
    #[inline]
    pub fn iter(&self) -> RangeIter {
        RangeIter {
            cursor: self.start,
            stop: self.stop,
            step: self.step,
            done: self.exhausted,
        }
    }
}

impl fmt::Display for RangeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.step == 1 {
            write!(f, "range({}, {})", self.start, self.stop)
        } else {
            write!(f, "range({}, {}, {})", self.start, self.stop, self.step)
        }
    }
}

impl IntoIterator for RangeSequence {
    type Item = i64;
    type IntoIter = RangeIter;

    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl IntoIterator for &RangeSequence {
    type Item = i64;
    type IntoIter = RangeIter;

    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

/// Cursor over a [`RangeSequence`]
#[derive(Debug, Clone)]
pub struct RangeIter {
    cursor: i64,
    stop: i64,
    step: i64,
    done: bool,
}

impl RangeIter {
    #[inline]
    fn before_stop(&self) -> bool {
        if self.step > 0 {
            self.cursor < self.stop
        } else {
            self.cursor > self.stop
        }
    }
}

impl Iterator for RangeIter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.done || !self.before_stop() {
            self.done = true;
            return None;
        }

        let value = self.cursor;
        match self.cursor.checked_add(self.step) {
            Some(next) => self.cursor = next,
            // Past i64 means past stop too
            None => self.done = true,
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = if self.done {
            0
        } else {
            remaining(self.cursor, self.stop, self.step)
        };

        match usize::try_from(left) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for RangeIter {}

/// Values left between `from` and `stop` in the direction of `step`
fn remaining(from: i64, stop: i64, step: i64) -> u64 {
    let (distance, stride) = if step > 0 {
        (i128::from(stop) - i128::from(from), i128::from(step))
    } else {
        (i128::from(from) - i128::from(stop), -i128::from(step))
    };

    if distance <= 0 {
        return 0;
    }

    // Ceiling division; distance < 2^64 so the result fits u64
    ((distance + stride - 1) / stride) as u64
}

/// Safe Rust API - `range(stop)`
#[inline]
pub fn range(stop: i64) -> RangeSequence {
    RangeSequence::up_to(stop)
}

/// Safe Rust API - `range(start, stop, step)`
#[inline]
pub fn range_step(start: i64, stop: i64, step: i64) -> Result<RangeSequence> {
    RangeSequence::new(start, stop, step)
}
