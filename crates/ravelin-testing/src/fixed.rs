//! Deterministic clock and id sources for reproducible runtime tests.

use chrono::{DateTime, TimeZone, Utc};
use ravelin_core::SessionId;
use ravelin_runtime::{Clock, IdSource};
use std::sync::atomic::{AtomicUsize, Ordering};

/// A clock pinned to a configured instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Pin the clock to the given instant.
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Pin the clock to the given UTC date and time.
    ///
    /// # Panics
    ///
    /// Panics on an invalid calendar date.
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        let instant = Utc
            .with_ymd_and_hms(year, month, day, hour, min, sec)
            .single()
            .expect("valid UTC date");
        Self::new(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// An id source producing `sess-0`, `sess-1`, ... in order.
#[derive(Debug, Default)]
pub struct SequentialIdSource {
    counter: AtomicUsize,
}

impl SequentialIdSource {
    /// Create a source starting at `sess-0`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&self) -> SessionId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        SessionId::parse(format!("sess-{n}")).expect("sequential ids are valid")
    }
}
