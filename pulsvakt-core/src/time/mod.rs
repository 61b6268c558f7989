//! ## pulsvakt-core::time
//! **Clocks and display-time formatting**
//!
//! Two clock implementations share one trait: `SystemClock` for live
//! monitoring and `VirtualClock` for deterministic simulation and replay.
//!
//! ### Expectations:
//! - Nanosecond resolution
//! - Seedable and deterministic in simulation mode
//! - Lock-free operations

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Timelike, Utc};

pub const NANOS_PER_SECOND: u64 = 1_000_000_000;
pub const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
pub const NANOS_PER_MILLI: u64 = 1_000_000;

/// Source of the current instant, in nanoseconds since the Unix epoch
/// (or a seeded virtual epoch).
pub trait Clock: Send + Sync {
    fn now_ns(&self) -> u64;
}

/// Wall clock for live monitoring mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ns(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_nanos() as u64
    }
}

/// A simple virtual clock that advances in nanoseconds.
#[derive(Clone)]
pub struct VirtualClock {
    // A shared atomic counter representing the current simulation time in nanoseconds.
    offset: Arc<AtomicU64>,
}

impl VirtualClock {
    /// Creates a new virtual clock with the given seed (starting time).
    pub fn new(seed: u64) -> Self {
        Self {
            offset: Arc::new(AtomicU64::new(seed)),
        }
    }

    /// Returns the current virtual time in nanoseconds.
    #[inline]
    pub fn now_ns(&self) -> u64 {
        self.offset.load(Ordering::Acquire)
    }

    /// Advances the virtual clock by the given number of nanoseconds.
    #[inline]
    pub fn advance(&self, ns: u64) {
        self.offset.fetch_add(ns, Ordering::Release);
    }
}

impl Clock for VirtualClock {
    fn now_ns(&self) -> u64 {
        VirtualClock::now_ns(self)
    }
}

/// Renders an instant as a short `HH:MM:SS` display string (UTC projection).
pub fn format_time(ns: u64) -> String {
    DateTime::<Utc>::from_timestamp_nanos(ns as i64)
        .format("%H:%M:%S")
        .to_string()
}

/// Hour of day in `[0, 23]` for the given instant.
pub fn hour_of_day(ns: u64) -> u32 {
    DateTime::<Utc>::from_timestamp_nanos(ns as i64).hour()
}
