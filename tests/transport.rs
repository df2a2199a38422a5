mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use embedded_hal::digital::{self, OutputPin};
    use embedded_hal::spi::{self, SpiBus};
    use myrtio_dotstar::transport::BitBangError;
    use myrtio_dotstar::{
        BitBangTransport, ColorOrder, DotStar, SpiTransport, StripConfig, Transport, frame_len,
    };

    #[derive(Default)]
    struct MockSpi {
        written: Vec<u8>,
        flushes: usize,
        fail_at: Option<usize>,
    }

    impl spi::ErrorType for MockSpi {
        type Error = spi::ErrorKind;
    }

    impl SpiBus for MockSpi {
        fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
            words.fill(0);
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
            if self.fail_at == Some(self.written.len()) {
                return Err(spi::ErrorKind::Other);
            }
            self.written.extend_from_slice(words);
            Ok(())
        }

        fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
            read.fill(0);
            self.write(write)
        }

        fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
            self.written.extend_from_slice(words);
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Line {
        Data,
        Clock,
    }

    struct MockPin {
        line: Line,
        log: Rc<RefCell<Vec<(Line, bool)>>>,
        broken: bool,
    }

    impl digital::ErrorType for MockPin {
        type Error = digital::ErrorKind;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.set(false)
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.set(true)
        }
    }

    impl MockPin {
        fn set(&mut self, level: bool) -> Result<(), digital::ErrorKind> {
            if self.broken {
                return Err(digital::ErrorKind::Other);
            }
            self.log.borrow_mut().push((self.line, level));
            Ok(())
        }
    }

    fn pins(log: &Rc<RefCell<Vec<(Line, bool)>>>, broken_clock: bool) -> (MockPin, MockPin) {
        (
            MockPin {
                line: Line::Data,
                log: Rc::clone(log),
                broken: false,
            },
            MockPin {
                line: Line::Clock,
                log: Rc::clone(log),
                broken: broken_clock,
            },
        )
    }

    /// Sample the data line on every rising clock edge
    fn sampled_bytes(log: &[(Line, bool)]) -> Vec<u8> {
        let mut data = false;
        let mut clock = false;
        let mut bits = Vec::new();
        for &(line, level) in log {
            match line {
                Line::Data => data = level,
                Line::Clock => {
                    if level && !clock {
                        bits.push(data);
                    }
                    clock = level;
                }
            }
        }
        bits.chunks(8)
            .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit)))
            .collect()
    }

    #[test]
    fn test_spi_transport_frame() {
        let config = StripConfig {
            order: ColorOrder::Rgb,
            ..StripConfig::default()
        };
        let mut strip = DotStar::<_, 6>::new(2, SpiTransport::new(MockSpi::default()), &config);
        strip.set_pixel_color(0, 0x0010_2030);
        strip.show();

        let mut transport = strip.release();
        assert!(transport.take_error().is_none());
        let bus = transport.release();
        assert_eq!(bus.written.len(), frame_len(2));
        assert_eq!(&bus.written[..8], [0, 0, 0, 0, 0xFF, 0x10, 0x20, 0x30]);
        assert_eq!(bus.flushes, 1);
    }

    #[test]
    fn test_spi_transport_latches_error() {
        let bus = MockSpi {
            fail_at: Some(2),
            ..MockSpi::default()
        };
        let mut transport = SpiTransport::new(bus);
        transport.begin();
        for byte in [1, 2, 3, 4] {
            transport.transfer(byte);
        }
        transport.end();
        assert_eq!(transport.take_error(), Some(spi::ErrorKind::Other));
        assert_eq!(transport.take_error(), None);

        let bus = transport.release();
        assert_eq!(bus.written, [1, 2]);
        assert_eq!(bus.flushes, 0);
    }

    #[test]
    fn test_bitbang_msb_first() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (data, clock) = pins(&log, false);
        let mut transport = BitBangTransport::new(data, clock);
        transport.begin();
        transport.transfer(0xA5);
        transport.transfer(0x01);
        transport.end();
        assert!(transport.take_error().is_none());
        assert_eq!(sampled_bytes(&log.borrow()), [0xA5, 0x01]);
        // Both lines idle low afterwards
        assert_eq!(log.borrow().last(), Some(&(Line::Clock, false)));
    }

    #[test]
    fn test_bitbang_strip() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (data, clock) = pins(&log, false);
        let config = StripConfig {
            order: ColorOrder::Grb,
            ..StripConfig::default()
        };
        let mut strip = DotStar::<_, 3>::new(1, BitBangTransport::new(data, clock), &config);
        strip.set_pixel_color(0, 0x00AA_BBCC);
        strip.show();
        assert_eq!(
            sampled_bytes(&log.borrow()),
            [0, 0, 0, 0, 0xFF, 0xBB, 0xAA, 0xCC, 0xFF]
        );
    }

    #[test]
    fn test_bitbang_latches_pin_error() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (data, clock) = pins(&log, true);
        let mut transport = BitBangTransport::new(data, clock);
        transport.begin();
        transport.transfer(0xFF);
        assert_eq!(
            transport.take_error(),
            Some(BitBangError::Clock(digital::ErrorKind::Other))
        );
        let (data, _clock) = transport.release();
        assert_eq!(data.line, Line::Data);
    }
}
