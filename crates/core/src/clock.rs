//! Monotonic timestamps and per-frame delta time.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use crate::types::NANOS_PER_SEC;

/// Source of monotonic nanosecond timestamps.
pub trait Clock {
    fn now_ns(&self) -> u64;
}

/// Real clock backed by [`Instant`].
///
/// Readings start from the Unix-epoch nanosecond count at construction and
/// advance monotonically from there, so they are large arbitrary-origin
/// values rather than "time since start".
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
    origin_ns: u64,
}

impl MonotonicClock {
    pub fn new() -> Self {
        let origin_ns = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self {
            origin: Instant::now(),
            origin_ns,
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ns(&self) -> u64 {
        self.origin_ns
            .saturating_add(self.origin.elapsed().as_nanos() as u64)
    }
}

/// Hand-driven clock for deterministic tests.
///
/// Clones share the same reading, so a test can keep one handle while the
/// runner owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start_ns: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ns)),
        }
    }

    pub fn set(&self, ns: u64) {
        self.now.set(ns);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms * 1_000_000));
    }
}

impl Clock for ManualClock {
    fn now_ns(&self) -> u64 {
        self.now.get()
    }
}

/// Tracks the previous iteration's timestamp.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last_ns: u64,
}

impl FrameClock {
    pub fn new(start_ns: u64) -> Self {
        Self { last_ns: start_ns }
    }

    /// Store `now_ns` and return seconds elapsed since the previous tick.
    pub fn tick(&mut self, now_ns: u64) -> f64 {
        let delta = now_ns.saturating_sub(self.last_ns) as f64 / NANOS_PER_SEC;
        self.last_ns = now_ns;
        delta
    }

    pub fn last_ns(&self) -> u64 {
        self.last_ns
    }
}
