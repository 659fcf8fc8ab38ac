//! Desktop preview app for strip-cycler patterns
//!
//! Simulates the strip and the push button in a window. The button feeds
//! levels to the selector exactly like the pin interrupt would, and the
//! display is ticked on every repaint with a synthetic wrapping clock.

use std::convert::Infallible;
use std::time::Instant as StdInstant;

use eframe::egui::{self};
use smart_leds::SmartLedsWrite;
use strip_cycler::{Display, DisplayConfig, Millis, PatternSelector, Rgb, config};

/// Number of LEDs in the simulated strip
const PREVIEW_LEDS: usize = 60;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Synthetic time the "rollover" control jumps to, two seconds before wrap
const ROLLOVER_JUMP_MS: u32 = u32::MAX - 2_000;

/// Shared with the UI the same way the firmware shares it with the interrupt
static SELECTOR: PatternSelector = PatternSelector::new(config::DEFAULT_PATTERN);

/// Strip driver that keeps the last written frame for drawing
#[derive(Default)]
struct PreviewStrip {
    frame: Vec<Rgb>,
    writes: u64,
}

impl SmartLedsWrite for PreviewStrip {
    type Error = Infallible;
    type Color = Rgb;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.frame.clear();
        self.frame.extend(iterator.into_iter().map(Into::into));
        self.writes += 1;
        Ok(())
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 320.0])
            .with_title("Strip Cycler Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "strip-cycler-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    display: Display<'static, PreviewStrip, PREVIEW_LEDS>,

    /// Synthetic wrapping time in milliseconds
    t_ms: u32,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// Show buffer colors instead of brightness-scaled output
    show_raw: bool,
    led_size: f32,
}

impl PreviewApp {
    fn new() -> Self {
        Self {
            display: Display::new(&SELECTOR, PreviewStrip::default(), &DisplayConfig::default()),
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            show_raw: false,
            led_size: LED_SIZE,
        }
    }

    /// One full button press, as two level changes seen by the interrupt
    fn press_button() {
        SELECTOR.on_level(true);
        SELECTOR.on_level(false);
    }

    fn reset_time(&mut self) {
        self.t_ms = 0;
        self.last_frame = StdInstant::now();
        self.display.restart();
    }

    fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                delta_ms_f64.clamp(0.0, f64::from(u32::MAX))
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u32;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();

        let _ = self.display.tick(Millis::from_raw(self.t_ms));

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui.button("⏮ Reset").clicked() {
                            self.reset_time();
                        }
                        if ui
                            .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                            .clicked()
                        {
                            self.toggle_playing();
                        }
                        if ui.button("⏭ Near rollover").clicked() {
                            self.t_ms = ROLLOVER_JUMP_MS;
                            self.display.restart();
                        }
                    });

                    ui.add_space(4.0);

                    ui.label(format!("Time: {} ms", self.t_ms));

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        ui.add(
                            egui::Slider::new(&mut self.time_scale, 0.1..=5.0)
                                .logarithmic(true),
                        );
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <PatternControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui.button("🔘 Button").clicked() {
                            Self::press_button();
                        }
                        let pattern = self
                            .display
                            .last_rendered()
                            .map_or("none", |id| id.as_str());
                        ui.label(format!("Pattern: {pattern}"));
                    });

                    ui.add_space(4.0);

                    ui.label(format!("Frames written: {}", self.display.driver().writes));

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Size: ");
                        ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
                        ui.checkbox(&mut self.show_raw, "Ignore brightness");
                    });
                });
                // </PatternControls>
            });

            ui.add_space(16.0);

            // === LED Display ===
            let pixels: &[Rgb] = if self.show_raw {
                self.display.frame()
            } else {
                &self.display.driver().frame
            };

            let available_width = ui.available_width();
            let led_pitch = self.led_size + LED_GAP;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = PREVIEW_LEDS.div_ceil(leds_per_row);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) =
                ui.allocate_painter(egui::vec2(available_width, height), egui::Sense::hover());
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in pixels.iter().enumerate() {
                let row = i / leds_per_row;
                let col = i % leds_per_row;
                let x = origin.x + col as f32 * led_pitch;
                let y = origin.y + row as f32 * led_pitch;

                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(self.led_size, self.led_size),
                );
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.rect_filled(rect, 3.0, color);
            }
        });
    }
}
