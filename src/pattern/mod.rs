//! Pattern system with a compile-time known catalog
//!
//! Per-pattern state lives in [`PatternSlot`], a tagged union holding only
//! the typed phase fields of the active pattern. Each generator implements
//! the [`Generator`] trait.

mod chase;
mod color_cycle;
mod rainbow;
mod solid;

pub use chase::{CHASE_STRIDE, ChaseColor, ChasePattern};
pub use color_cycle::ColorCyclePattern;
pub use rainbow::{RAINBOW_CYCLE_PERIOD, RAINBOW_PERIOD, RainbowCyclePattern, RainbowPattern};
pub use solid::SolidPattern;

use crate::color::{BLACK, BLUE, GREEN, RED, Rgb, WHITE};

const PATTERN_NAME_OFF: &str = "off";
const PATTERN_NAME_SOLID_WHITE: &str = "solid_white";
const PATTERN_NAME_SOLID_RED: &str = "solid_red";
const PATTERN_NAME_SOLID_GREEN: &str = "solid_green";
const PATTERN_NAME_SOLID_BLUE: &str = "solid_blue";
const PATTERN_NAME_COLOR_CYCLE: &str = "color_cycle";
const PATTERN_NAME_CHASE_WHITE: &str = "chase_white";
const PATTERN_NAME_CHASE_RAINBOW: &str = "chase_rainbow";
const PATTERN_NAME_RAINBOW: &str = "rainbow";
const PATTERN_NAME_RAINBOW_CYCLE: &str = "rainbow_cycle";

const PATTERN_ID_OFF: u8 = 0;
const PATTERN_ID_SOLID_WHITE: u8 = 1;
const PATTERN_ID_SOLID_RED: u8 = 2;
const PATTERN_ID_SOLID_GREEN: u8 = 3;
const PATTERN_ID_SOLID_BLUE: u8 = 4;
const PATTERN_ID_COLOR_CYCLE: u8 = 5;
const PATTERN_ID_CHASE_WHITE: u8 = 6;
const PATTERN_ID_CHASE_RAINBOW: u8 = 7;
const PATTERN_ID_RAINBOW: u8 = 8;
const PATTERN_ID_RAINBOW_CYCLE: u8 = 9;

/// When the next frame of a pattern is due after the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reschedule {
    /// After the configured inter-frame delay
    AfterDelay,
    /// On the very next tick
    Immediately,
}

pub trait Generator {
    /// Render one frame into `leds` and advance the phase
    ///
    /// Must be bounded by the strip length and never wait.
    fn step(&mut self, leds: &mut [Rgb]) -> Reschedule;
}

/// Known patterns, in button cycling order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PatternId {
    Off = PATTERN_ID_OFF,
    SolidWhite = PATTERN_ID_SOLID_WHITE,
    SolidRed = PATTERN_ID_SOLID_RED,
    SolidGreen = PATTERN_ID_SOLID_GREEN,
    SolidBlue = PATTERN_ID_SOLID_BLUE,
    ColorCycle = PATTERN_ID_COLOR_CYCLE,
    ChaseWhite = PATTERN_ID_CHASE_WHITE,
    ChaseRainbow = PATTERN_ID_CHASE_RAINBOW,
    Rainbow = PATTERN_ID_RAINBOW,
    RainbowCycle = PATTERN_ID_RAINBOW_CYCLE,
}

impl PatternId {
    /// Number of patterns in the catalog.
    pub const COUNT: usize = Self::ALL.len();

    /// Every pattern, in cycling order.
    pub const ALL: [Self; 10] = [
        Self::Off,
        Self::SolidWhite,
        Self::SolidRed,
        Self::SolidGreen,
        Self::SolidBlue,
        Self::ColorCycle,
        Self::ChaseWhite,
        Self::ChaseRainbow,
        Self::Rainbow,
        Self::RainbowCycle,
    ];

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PATTERN_ID_OFF => Self::Off,
            PATTERN_ID_SOLID_WHITE => Self::SolidWhite,
            PATTERN_ID_SOLID_RED => Self::SolidRed,
            PATTERN_ID_SOLID_GREEN => Self::SolidGreen,
            PATTERN_ID_SOLID_BLUE => Self::SolidBlue,
            PATTERN_ID_COLOR_CYCLE => Self::ColorCycle,
            PATTERN_ID_CHASE_WHITE => Self::ChaseWhite,
            PATTERN_ID_CHASE_RAINBOW => Self::ChaseRainbow,
            PATTERN_ID_RAINBOW => Self::Rainbow,
            PATTERN_ID_RAINBOW_CYCLE => Self::RainbowCycle,
            _ => return None,
        })
    }

    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// The pattern after this one, wrapping from the last back to the first.
    pub const fn next(self) -> Self {
        let next = (self as usize + 1) % Self::COUNT;
        Self::ALL[next]
    }

    /// Fresh generator state for this pattern, with every phase field zeroed.
    pub const fn to_slot(self) -> PatternSlot {
        match self {
            Self::Off => PatternSlot::Solid(SolidPattern::new(BLACK)),
            Self::SolidWhite => PatternSlot::Solid(SolidPattern::new(WHITE)),
            Self::SolidRed => PatternSlot::Solid(SolidPattern::new(RED)),
            Self::SolidGreen => PatternSlot::Solid(SolidPattern::new(GREEN)),
            Self::SolidBlue => PatternSlot::Solid(SolidPattern::new(BLUE)),
            Self::ColorCycle => PatternSlot::ColorCycle(ColorCyclePattern::new()),
            Self::ChaseWhite => {
                PatternSlot::Chase(ChasePattern::new(ChaseColor::Fixed(WHITE)))
            }
            Self::ChaseRainbow => {
                PatternSlot::Chase(ChasePattern::new(ChaseColor::Wheel { phase: 0 }))
            }
            Self::Rainbow => PatternSlot::Rainbow(RainbowPattern::new()),
            Self::RainbowCycle => PatternSlot::RainbowCycle(RainbowCyclePattern::new()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => PATTERN_NAME_OFF,
            Self::SolidWhite => PATTERN_NAME_SOLID_WHITE,
            Self::SolidRed => PATTERN_NAME_SOLID_RED,
            Self::SolidGreen => PATTERN_NAME_SOLID_GREEN,
            Self::SolidBlue => PATTERN_NAME_SOLID_BLUE,
            Self::ColorCycle => PATTERN_NAME_COLOR_CYCLE,
            Self::ChaseWhite => PATTERN_NAME_CHASE_WHITE,
            Self::ChaseRainbow => PATTERN_NAME_CHASE_RAINBOW,
            Self::Rainbow => PATTERN_NAME_RAINBOW,
            Self::RainbowCycle => PATTERN_NAME_RAINBOW_CYCLE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }
}

/// Pattern slot - per-pattern phase state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSlot {
    /// Off and the solid colors
    Solid(SolidPattern),
    /// Whole strip stepping through the wheel
    ColorCycle(ColorCyclePattern),
    /// Theater-style chase, white or rainbow
    Chase(ChasePattern),
    /// Wheel shifted by one position per pixel
    Rainbow(RainbowPattern),
    /// Wheel spread evenly over the strip
    RainbowCycle(RainbowCyclePattern),
}

impl Default for PatternSlot {
    fn default() -> Self {
        PatternId::Off.to_slot()
    }
}

impl PatternSlot {
    /// Render the current frame
    pub fn step(&mut self, leds: &mut [Rgb]) -> Reschedule {
        match self {
            Self::Solid(pattern) => pattern.step(leds),
            Self::ColorCycle(pattern) => pattern.step(leds),
            Self::Chase(pattern) => pattern.step(leds),
            Self::Rainbow(pattern) => pattern.step(leds),
            Self::RainbowCycle(pattern) => pattern.step(leds),
        }
    }
}
