//! Whole-strip color cycle
//!
//! Unlike the rainbows, every LED shows the same wheel color; the whole strip
//! walks through the wheel one position per frame.

use super::{Generator, Reschedule};
use crate::color::{Rgb, wheel};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorCyclePattern {
    /// Current wheel position, wraps at 256
    phase: u8,
}

impl ColorCyclePattern {
    pub const fn new() -> Self {
        Self { phase: 0 }
    }

    pub const fn phase(&self) -> u8 {
        self.phase
    }
}

impl Generator for ColorCyclePattern {
    fn step(&mut self, leds: &mut [Rgb]) -> Reschedule {
        leds.fill(wheel(self.phase));
        self.phase = self.phase.wrapping_add(1);
        Reschedule::AfterDelay
    }
}
