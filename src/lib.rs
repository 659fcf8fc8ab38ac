#![no_std]

pub mod color;
pub mod config;
pub mod display;
pub mod frame_scheduler;
pub mod pattern;
pub mod selector;
pub mod time;

pub use config::DisplayConfig;
pub use display::Display;
pub use frame_scheduler::FrameScheduler;
pub use pattern::{Generator, PatternId, PatternSlot, Reschedule};
pub use selector::PatternSelector;
pub use time::Millis;

pub use color::{Rgb, wheel};
pub use embassy_time::{Duration, Instant};
