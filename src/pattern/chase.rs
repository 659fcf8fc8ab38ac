//! Theater-style chase
//!
//! Every third LED is lit, starting at `offset`. Each step is split into an
//! "on" frame that lights the LEDs and holds them for the frame delay, and an
//! "off" frame that blanks the same LEDs and is followed immediately by the
//! next "on" frame one position further along.

use super::{Generator, Reschedule};
use crate::color::{BLACK, Rgb, wheel};

/// Distance between two lit LEDs.
pub const CHASE_STRIDE: u8 = 3;

/// Color source of a chase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChaseColor {
    /// Same color on every lit LED
    Fixed(Rgb),
    /// Wheel color per lit LED; `phase` advances once per full chase cycle
    Wheel { phase: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChasePattern {
    color: ChaseColor,
    /// First lit LED, `0..CHASE_STRIDE`
    offset: u8,
    lit: bool,
}

impl ChasePattern {
    /// Create a chase that starts with an "on" frame at offset 0
    pub const fn new(color: ChaseColor) -> Self {
        Self {
            color,
            offset: 0,
            lit: true,
        }
    }

    pub const fn color(&self) -> ChaseColor {
        self.color
    }

    pub const fn offset(&self) -> u8 {
        self.offset
    }

    /// Returns if the next frame lights the LEDs
    pub const fn is_lit(&self) -> bool {
        self.lit
    }

    #[allow(clippy::cast_possible_truncation)]
    fn color_at(&self, base: usize) -> Rgb {
        match self.color {
            ChaseColor::Fixed(color) => color,
            ChaseColor::Wheel { phase } => wheel(((base + usize::from(phase)) % 255) as u8),
        }
    }
}

impl Generator for ChasePattern {
    fn step(&mut self, leds: &mut [Rgb]) -> Reschedule {
        let offset = usize::from(self.offset);
        for base in (0..leds.len()).step_by(usize::from(CHASE_STRIDE)) {
            let color = if self.lit { self.color_at(base) } else { BLACK };
            if let Some(led) = leds.get_mut(base + offset) {
                *led = color;
            }
        }

        if self.lit {
            self.lit = false;
            return Reschedule::AfterDelay;
        }

        self.lit = true;
        self.offset = (self.offset + 1) % CHASE_STRIDE;
        if self.offset == 0 {
            if let ChaseColor::Wheel { phase } = &mut self.color {
                *phase = phase.wrapping_add(1);
            }
        }
        Reschedule::Immediately
    }
}
