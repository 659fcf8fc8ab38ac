//! Frame scheduling for the active pattern.
//!
//! Provides non-blocking frame pacing: the caller ticks the scheduler as often
//! as it likes and a frame is rendered only when the active pattern's due time
//! has been reached. Nothing here ever waits.

use embassy_time::Duration;

use crate::color::Rgb;
use crate::pattern::{PatternId, PatternSlot, Reschedule};
use crate::time::Millis;

/// Per-pattern timing state machine.
///
/// ```
/// use strip_cycler::{Duration, FrameScheduler, Millis, PatternId, Rgb};
///
/// let mut leds = [Rgb::default(); 6];
/// let mut scheduler = FrameScheduler::new(Duration::from_millis(20));
/// scheduler.enter(PatternId::Rainbow, Millis::from_raw(0));
///
/// assert!(scheduler.tick(Millis::from_raw(0), &mut leds));
/// assert!(!scheduler.tick(Millis::from_raw(10), &mut leds));
/// assert!(scheduler.tick(Millis::from_raw(20), &mut leds));
/// ```
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    slot: PatternSlot,
    /// `None` while a frame is being computed
    due: Option<Millis>,
    frame_delay: Duration,
}

impl FrameScheduler {
    /// Create a scheduler with no pattern entered yet.
    ///
    /// Nothing renders until [`FrameScheduler::enter`] is called.
    pub fn new(frame_delay: Duration) -> Self {
        Self {
            slot: PatternSlot::default(),
            due: None,
            frame_delay,
        }
    }

    /// Reset the phase state for `pattern` and make its first frame due now.
    pub fn enter(&mut self, pattern: PatternId, now: Millis) {
        self.slot = pattern.to_slot();
        self.due = Some(now);
    }

    /// Render a frame into `leds` if one is due.
    ///
    /// Returns whether a frame was rendered.
    pub fn tick(&mut self, now: Millis, leds: &mut [Rgb]) -> bool {
        match self.due {
            Some(due) if due.is_reached(now) => {}
            _ => return false,
        }

        // Consumed before rendering so the same frame can never fire twice.
        self.due = None;

        let next = match self.slot.step(leds) {
            Reschedule::AfterDelay => now + self.frame_delay,
            Reschedule::Immediately => now,
        };
        self.due = Some(next);
        true
    }

    /// When the next frame is due, if one is scheduled.
    pub fn due(&self) -> Option<Millis> {
        self.due
    }

    /// Phase state of the active pattern.
    pub fn slot(&self) -> &PatternSlot {
        &self.slot
    }
}
