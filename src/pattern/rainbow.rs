//! Rainbow effects
//!
//! Provides two rainbow variants:
//! - `RainbowPattern`: the wheel shifted by one position per pixel
//! - `RainbowCyclePattern`: one full wheel spread evenly over the strip
//!
//! The two phase counters wrap at different periods. `RainbowCyclePattern`
//! runs a five times longer counter than the wheel itself; only the low byte
//! affects the colors.

use super::{Generator, Reschedule};
use crate::color::{Rgb, wheel};

/// Phase period of [`RainbowPattern`].
pub const RAINBOW_PERIOD: u16 = 256;

/// Phase period of [`RainbowCyclePattern`].
pub const RAINBOW_CYCLE_PERIOD: u16 = 256 * 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RainbowPattern {
    phase: u16,
}

impl RainbowPattern {
    pub const fn new() -> Self {
        Self { phase: 0 }
    }

    pub const fn phase(&self) -> u16 {
        self.phase
    }
}

impl Generator for RainbowPattern {
    #[allow(clippy::cast_possible_truncation)]
    fn step(&mut self, leds: &mut [Rgb]) -> Reschedule {
        for (i, led) in leds.iter_mut().enumerate() {
            *led = wheel(((i + usize::from(self.phase)) & 255) as u8);
        }
        self.phase = (self.phase + 1) % RAINBOW_PERIOD;
        Reschedule::AfterDelay
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RainbowCyclePattern {
    phase: u16,
}

impl RainbowCyclePattern {
    pub const fn new() -> Self {
        Self { phase: 0 }
    }

    pub const fn phase(&self) -> u16 {
        self.phase
    }
}

impl Generator for RainbowCyclePattern {
    #[allow(clippy::cast_possible_truncation)]
    fn step(&mut self, leds: &mut [Rgb]) -> Reschedule {
        let len = leds.len();
        for (i, led) in leds.iter_mut().enumerate() {
            let offset = i * 256 / len;
            *led = wheel(((offset + usize::from(self.phase)) & 255) as u8);
        }
        self.phase = (self.phase + 1) % RAINBOW_CYCLE_PERIOD;
        Reschedule::AfterDelay
    }
}
