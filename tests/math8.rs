mod tests {
    use myrtio_dotstar::Brightness;
    use myrtio_dotstar::math8::{SINE8, scale8, sine8};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_sine8() {
        assert_eq!(sine8(0), 128);
        assert_eq!(sine8(32), 218);
        assert_eq!(sine8(64), 255);
        assert_eq!(sine8(128), 128);
        assert_eq!(sine8(192), 0);
        assert_eq!(sine8(64u8.wrapping_add(255)), sine8(63));
    }

    #[test]
    fn test_sine8_symmetry() {
        for x in 1..128u8 {
            let mirrored = 256 - u16::from(SINE8[usize::from(128 + x)]);
            assert!(mirrored.abs_diff(u16::from(SINE8[usize::from(128 - x)])) <= 1);
        }
    }

    #[test]
    fn test_brightness_encoding() {
        assert_eq!(Brightness::new(255).raw(), 0);
        assert_eq!(Brightness::new(0).raw(), 1);
        assert_eq!(Brightness::new(128).raw(), 129);
        for logical in 0..=255u8 {
            assert_eq!(Brightness::new(logical).logical(), logical);
        }
        assert!(!Brightness::new(255).is_scaling());
        assert!(Brightness::new(254).is_scaling());
        assert_eq!(Brightness::default(), Brightness::FULL);
    }

    #[test]
    fn test_brightness_apply() {
        assert_eq!(Brightness::new(128).apply(200), 100);
        assert_eq!(Brightness::new(0).apply(255), 0);
        assert_eq!(Brightness::new(255).apply(200), 200);
        assert_eq!(Brightness::new(254).apply(255), 254);
        assert_eq!(Brightness::new(63).apply(100), 25);
        for raw in 0..=255u8 {
            let logical = Brightness::new(200);
            assert_eq!(logical.apply(raw), ((u16::from(raw) * 201) >> 8) as u8);
        }
    }
}
