mod tests {
    use strip_cycler::color::{BLUE, GREEN, RED, Rgb, WHEEL_SEGMENT, wheel};

    fn channel_step(a: Rgb, b: Rgb) -> u8 {
        a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
    }

    #[test]
    fn test_wheel_segment_boundaries() {
        assert_eq!(wheel(0), RED);
        assert_eq!(wheel(WHEEL_SEGMENT), GREEN);
        assert_eq!(wheel(WHEEL_SEGMENT * 2), BLUE);
        assert_eq!(wheel(255), RED);
    }

    #[test]
    fn test_wheel_ramps() {
        assert_eq!(wheel(1), Rgb::new(252, 3, 0));
        assert_eq!(wheel(84), Rgb::new(3, 252, 0));
        assert_eq!(wheel(100), Rgb::new(0, 210, 45));
        assert_eq!(wheel(200), Rgb::new(90, 0, 165));
    }

    #[test]
    fn test_wheel_is_continuous() {
        for position in 0..=255u8 {
            let step = channel_step(wheel(position), wheel(position.wrapping_add(1)));
            assert!(step <= 3, "step {step} after position {position}");
        }
    }

    #[test]
    fn test_wheel_keeps_constant_sum() {
        for position in 0..=255u8 {
            let color = wheel(position);
            let sum = u16::from(color.r) + u16::from(color.g) + u16::from(color.b);
            assert_eq!(sum, 255);
        }
    }

    #[test]
    fn test_wheel_is_deterministic() {
        for position in 0..=255u8 {
            assert_eq!(wheel(position), wheel(position));
        }
    }
}
