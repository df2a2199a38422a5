mod tests {
    use myrtio_dotstar::color::{Rgb, color, color_hsv, color_hue, rgb_from_u32, rgb_to_u32};

    #[test]
    fn test_color_packing() {
        assert_eq!(color(0x12, 0x34, 0x56), 0x0012_3456);
        assert_eq!(rgb_from_u32(0xFF12_3456), Rgb::new(0x12, 0x34, 0x56));
        assert_eq!(rgb_to_u32(Rgb::new(1, 2, 3)), 0x0001_0203);
    }

    #[test]
    fn test_hue_primaries() {
        assert_eq!(color_hsv(0, 255, 255), 0xFF_0000);
        assert_eq!(color_hsv(21845, 255, 255), 0x00_FF00);
        assert_eq!(color_hsv(43690, 255, 255), 0x00_00FF);
    }

    #[test]
    fn test_hue_secondaries() {
        assert_eq!(color_hue(10923), 0xFF_FF00);
        assert_eq!(color_hue(32768), 0x00_FFFF);
        assert_eq!(color_hue(5461), 0xFF_7F00);
    }

    #[test]
    fn test_hue_rollover() {
        let wrapped = (65536u32 % 65536) as u16;
        assert_eq!(color_hsv(0, 255, 255), color_hsv(wrapped, 255, 255));
        // Red is centered on the rollover point
        assert_eq!(color_hue(65535), 0xFF_0000);
        assert_eq!(color_hue(u16::MAX.wrapping_add(1)), 0xFF_0000);
    }

    #[test]
    fn test_saturation_and_value() {
        assert_eq!(color_hsv(0, 0, 255), 0xFF_FFFF);
        assert_eq!(color_hsv(0, 255, 0), 0x00_0000);
        assert_eq!(color_hsv(0, 128, 255), 0xFF_7F7F);
        assert_eq!(color_hsv(0, 255, 128), 0x80_0000);
        assert_eq!(color_hsv(21845, 100, 200), 0x79_C879);
    }

    #[test]
    fn test_high_byte_is_zero() {
        for hue in (0..=u16::MAX).step_by(97) {
            assert_eq!(color_hsv(hue, 200, 255) >> 24, 0);
        }
    }
}
