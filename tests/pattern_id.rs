mod tests {
    use strip_cycler::PatternId;

    #[test]
    fn test_pattern_id_from_raw() {
        assert_eq!(PatternId::from_raw(0), Some(PatternId::Off));
        assert_eq!(PatternId::from_raw(7), Some(PatternId::ChaseRainbow));
        assert_eq!(PatternId::from_raw(9), Some(PatternId::RainbowCycle));
        assert_eq!(PatternId::from_raw(10), None);
    }

    #[test]
    fn test_pattern_id_raw_matches_order() {
        for (index, id) in PatternId::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(id.raw()), index);
            assert_eq!(PatternId::from_raw(id.raw()), Some(id));
        }
    }

    #[test]
    fn test_pattern_id_names() {
        assert_eq!(PatternId::ChaseRainbow.as_str(), "chase_rainbow");
        assert_eq!(
            PatternId::parse_from_str("rainbow_cycle"),
            Some(PatternId::RainbowCycle)
        );
        assert_eq!(PatternId::parse_from_str("aurora"), None);
        for id in PatternId::ALL {
            assert_eq!(PatternId::parse_from_str(id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_pattern_id_next_wraps() {
        assert_eq!(PatternId::Off.next(), PatternId::SolidWhite);
        assert_eq!(PatternId::Rainbow.next(), PatternId::RainbowCycle);
        assert_eq!(PatternId::RainbowCycle.next(), PatternId::Off);
    }

    #[test]
    fn test_pattern_id_next_is_cyclic() {
        for start in PatternId::ALL {
            let mut id = start;
            for _ in 1..PatternId::COUNT {
                id = id.next();
                assert_ne!(id, start);
            }
            assert_eq!(id.next(), start);
        }
    }
}
