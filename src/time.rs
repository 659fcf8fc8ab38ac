//! Wrapping monotonic timestamps.
//!
//! Microcontroller millisecond counters are 32 bits wide and roll over after
//! about 49.7 days. Every due-check in the crate goes through
//! [`Millis::is_reached`], which compares through a signed difference so a
//! deadline scheduled just before the rollover still fires just after it.

use core::ops::Add;

use embassy_time::{Duration, Instant};

/// Millisecond timestamp of a fixed-width, wrapping monotonic clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Millis(u32);

impl Millis {
    /// Create a timestamp from a raw millisecond counter value.
    pub const fn from_raw(ms: u32) -> Self {
        Self(ms)
    }

    /// Raw millisecond counter value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Signed distance from `self` to `later`, in milliseconds.
    ///
    /// Correct as long as the two timestamps are less than 2^31 ms apart.
    #[allow(clippy::cast_possible_wrap)]
    pub const fn delta_to(self, later: Self) -> i32 {
        later.0.wrapping_sub(self.0) as i32
    }

    /// Returns whether `now` is at or past this timestamp.
    pub const fn is_reached(self, now: Self) -> bool {
        self.delta_to(now) >= 0
    }
}

impl Add<Duration> for Millis {
    type Output = Self;

    #[allow(clippy::cast_possible_truncation)]
    fn add(self, rhs: Duration) -> Self {
        Self(self.0.wrapping_add(rhs.as_millis() as u32))
    }
}

impl From<Instant> for Millis {
    /// Truncate an embassy instant to the low 32 bits of its millisecond count.
    #[allow(clippy::cast_possible_truncation)]
    fn from(instant: Instant) -> Self {
        Self(instant.as_millis() as u32)
    }
}
