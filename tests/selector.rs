mod tests {
    use core::convert::Infallible;

    use embedded_hal::digital::{ErrorKind, ErrorType, InputPin};
    use strip_cycler::{PatternId, PatternSelector};

    struct MockPin {
        high: bool,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl InputPin for MockPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.high)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.high)
        }
    }

    struct BrokenPin;

    impl ErrorType for BrokenPin {
        type Error = ErrorKind;
    }

    impl InputPin for BrokenPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Err(ErrorKind::Other)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Err(ErrorKind::Other)
        }
    }

    fn press(selector: &PatternSelector) {
        selector.on_level(true);
        selector.on_level(false);
    }

    #[test]
    fn test_rising_edge_advances() {
        let selector = PatternSelector::new(PatternId::Off);
        assert!(selector.on_level(true));
        assert_eq!(selector.active(), PatternId::SolidWhite);
    }

    #[test]
    fn test_levels_without_edge_do_not_advance() {
        let selector = PatternSelector::new(PatternId::Rainbow);
        assert!(!selector.on_level(false));
        assert!(selector.on_level(true));
        assert!(!selector.on_level(true));
        assert!(!selector.on_level(true));
        assert!(!selector.on_level(false));
        assert_eq!(selector.active(), PatternId::RainbowCycle);
    }

    #[test]
    fn test_last_pattern_wraps_to_first() {
        let selector = PatternSelector::new(PatternId::RainbowCycle);
        press(&selector);
        assert_eq!(selector.active(), PatternId::Off);
    }

    #[test]
    fn test_count_presses_return_to_start() {
        for start in PatternId::ALL {
            let selector = PatternSelector::new(start);
            for _ in 1..PatternId::COUNT {
                press(&selector);
                assert_ne!(selector.active(), start);
            }
            press(&selector);
            assert_eq!(selector.active(), start);
        }
    }

    #[test]
    fn test_advance_ignores_input_level() {
        let selector = PatternSelector::new(PatternId::SolidBlue);
        assert_eq!(selector.advance(), PatternId::ColorCycle);
        assert_eq!(selector.active(), PatternId::ColorCycle);
        assert!(selector.on_level(true));
        assert_eq!(selector.active(), PatternId::ChaseWhite);
    }

    #[test]
    fn test_sample_reads_pin() {
        let selector = PatternSelector::new(PatternId::Off);
        let mut pin = MockPin { high: false };
        assert_eq!(selector.sample(&mut pin), Ok(false));

        pin.high = true;
        assert_eq!(selector.sample(&mut pin), Ok(true));
        assert_eq!(selector.sample(&mut pin), Ok(false));
        assert_eq!(selector.active(), PatternId::SolidWhite);
    }

    #[test]
    fn test_sample_propagates_pin_error() {
        let selector = PatternSelector::new(PatternId::Off);
        assert_eq!(selector.sample(&mut BrokenPin), Err(ErrorKind::Other));
        assert_eq!(selector.active(), PatternId::Off);
    }

    #[test]
    fn test_default_starts_on_solid_white() {
        let selector = PatternSelector::default();
        assert_eq!(selector.active(), PatternId::SolidWhite);
    }
}
