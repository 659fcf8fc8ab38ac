//! Button-driven pattern selection.
//!
//! The selector is shared between the button interrupt and the control loop.
//! The interrupt feeds input levels through [`PatternSelector::on_level`] and
//! only ever writes the active pattern cell; the loop reads it once per tick
//! through [`PatternSelector::active`]. Both cells are guarded by
//! `critical-section`, so every read and write is a single indivisible unit.

use core::cell::Cell;

use critical_section::Mutex;
use embedded_hal::digital::InputPin;

use crate::pattern::PatternId;

/// Rising-edge pattern cycler.
///
/// Intended to live in a `static`:
///
/// ```
/// use strip_cycler::{PatternId, PatternSelector};
///
/// static SELECTOR: PatternSelector = PatternSelector::new(PatternId::Off);
///
/// SELECTOR.on_level(true);
/// assert_eq!(SELECTOR.active(), PatternId::SolidWhite);
/// ```
pub struct PatternSelector {
    active: Mutex<Cell<PatternId>>,
    last_level: Mutex<Cell<bool>>,
}

impl PatternSelector {
    /// Create a selector with `initial` active and the input assumed low.
    pub const fn new(initial: PatternId) -> Self {
        Self {
            active: Mutex::new(Cell::new(initial)),
            last_level: Mutex::new(Cell::new(false)),
        }
    }

    /// Feed one observed input level.
    ///
    /// A low-to-high transition advances the active pattern. Returns whether
    /// the pattern was advanced. Edges are detected by level only; contact
    /// bounce must be filtered in hardware.
    pub fn on_level(&self, level: bool) -> bool {
        critical_section::with(|cs| {
            let last_level = self.last_level.borrow(cs);
            let rising = level && !last_level.get();
            last_level.set(level);

            if rising {
                let active = self.active.borrow(cs);
                active.set(active.get().next());
            }
            rising
        })
    }

    /// Read `pin` and feed its level to [`PatternSelector::on_level`].
    pub fn sample<P: InputPin>(&self, pin: &mut P) -> Result<bool, P::Error> {
        let level = pin.is_high()?;
        Ok(self.on_level(level))
    }

    /// Advance to the next pattern regardless of the input level.
    pub fn advance(&self) -> PatternId {
        critical_section::with(|cs| {
            let active = self.active.borrow(cs);
            let next = active.get().next();
            active.set(next);
            next
        })
    }

    /// Snapshot of the active pattern.
    pub fn active(&self) -> PatternId {
        critical_section::with(|cs| self.active.borrow(cs).get())
    }
}

impl Default for PatternSelector {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PATTERN)
    }
}
