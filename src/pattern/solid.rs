//! Solid color fill, also used for "off"

use super::{Generator, Reschedule};
use crate::color::Rgb;

/// Fills every LED with one fixed color. Has no phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolidPattern {
    color: Rgb,
}

impl SolidPattern {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }
}

impl Generator for SolidPattern {
    fn step(&mut self, leds: &mut [Rgb]) -> Reschedule {
        leds.fill(self.color);
        Reschedule::AfterDelay
    }
}
