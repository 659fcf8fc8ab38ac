use super::Rgb;

/// Width of one linear segment of the wheel.
pub const WHEEL_SEGMENT: u8 = 85;

/// Map a cyclic position to a hue on the red -> green -> blue -> red ramp.
///
/// The wheel is made of three 85-wide linear segments. Within a segment one
/// channel falls by 3 per step while the next one rises by 3, so the sum of
/// the channels is always 255.
///
/// ```
/// use strip_cycler::color::{Rgb, wheel};
///
/// assert_eq!(wheel(0), Rgb::new(255, 0, 0));
/// assert_eq!(wheel(85), Rgb::new(0, 255, 0));
/// assert_eq!(wheel(170), Rgb::new(0, 0, 255));
/// ```
pub const fn wheel(position: u8) -> Rgb {
    if position < WHEEL_SEGMENT {
        let rise = position * 3;
        Rgb {
            r: 255 - rise,
            g: rise,
            b: 0,
        }
    } else if position < WHEEL_SEGMENT * 2 {
        let rise = (position - WHEEL_SEGMENT) * 3;
        Rgb {
            r: 0,
            g: 255 - rise,
            b: rise,
        }
    } else {
        let rise = (position - WHEEL_SEGMENT * 2) * 3;
        Rgb {
            r: rise,
            g: 0,
            b: 255 - rise,
        }
    }
}
