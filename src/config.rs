//! Build-time configuration.

use embassy_time::Duration;

use crate::pattern::PatternId;

/// Number of LEDs on the strip.
pub const STRIP_LEN: usize = 6;

/// Global output brightness, 255 leaves colors untouched.
pub const BRIGHTNESS: u8 = 128;

/// Delay between two frames of an animated pattern.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(20);

/// Pattern active after power-up.
pub const DEFAULT_PATTERN: PatternId = PatternId::SolidWhite;

/// Configuration for the display
#[derive(Debug, Clone, Copy)]
pub struct DisplayConfig {
    pub frame_delay: Duration,
    pub brightness: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_delay: DEFAULT_FRAME_DELAY,
            brightness: BRIGHTNESS,
        }
    }
}
