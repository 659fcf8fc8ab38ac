#[cfg(feature = "esp32-log")]
use esp_println::println;
use smart_leds::{SmartLedsWrite, brightness};

use crate::color::Rgb;
use crate::config::DisplayConfig;
use crate::frame_scheduler::FrameScheduler;
use crate::pattern::PatternId;
use crate::selector::PatternSelector;
use crate::time::Millis;

/// Display - the per-tick composition root
///
/// Owns the frame buffer, the scheduler and the strip driver. The selector is
/// only read, once per tick.
pub struct Display<'a, D, const N: usize> {
    // External dependencies and configuration
    selector: &'a PatternSelector,
    driver: D,
    brightness: u8,

    // Internal state
    last_rendered: Option<PatternId>,
    scheduler: FrameScheduler,
    frame_buffer: [Rgb; N],
}

impl<'a, D, const N: usize> Display<'a, D, N>
where
    D: SmartLedsWrite<Color = Rgb>,
{
    pub fn new(selector: &'a PatternSelector, driver: D, config: &DisplayConfig) -> Self {
        Self {
            selector,
            driver,
            brightness: config.brightness,
            last_rendered: None,
            scheduler: FrameScheduler::new(config.frame_delay),
            frame_buffer: [Rgb::default(); N],
        }
    }

    /// Process one control loop tick
    ///
    /// Enters the active pattern if it changed since the last tick, then
    /// renders and writes a frame if one is due. Returns whether a frame was
    /// written. Never waits.
    pub fn tick(&mut self, now: Millis) -> Result<bool, D::Error> {
        let pattern = self.selector.active();

        if self.last_rendered != Some(pattern) {
            #[cfg(feature = "esp32-log")]
            println!(
                "[display] pattern {} -> {}",
                self.last_rendered.map_or("none", PatternId::as_str),
                pattern.as_str()
            );
            self.scheduler.enter(pattern, now);
            self.last_rendered = Some(pattern);
        }

        if !self.scheduler.tick(now, &mut self.frame_buffer) {
            return Ok(false);
        }

        self.driver.write(brightness(
            self.frame_buffer.iter().copied(),
            self.brightness,
        ))?;
        Ok(true)
    }

    /// Forget the last rendered pattern
    ///
    /// The next tick re-enters the active pattern at its own `now`. Call this
    /// whenever the clock feeding [`Display::tick`] jumps backwards, otherwise
    /// the pending due time is still in the future and the strip stalls.
    pub fn restart(&mut self) {
        self.last_rendered = None;
    }

    /// Last rendered frame, before brightness scaling
    pub fn frame(&self) -> &[Rgb] {
        &self.frame_buffer
    }

    /// Pattern entered on the last transition tick
    pub fn last_rendered(&self) -> Option<PatternId> {
        self.last_rendered
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }
}
