mod common;

mod tests {
    use std::vec::Vec;

    use proton_pack::color::rgbw;
    use proton_pack::{LedStrip, PixelBuffer, Rgb, Rgbw, SmartLedsOutput};
    use smart_leds::SmartLedsWrite;

    use crate::common::{Recorder, Ring};

    /// `smart-leds` writer keeping every frame it receives
    #[derive(Default)]
    struct FrameLog {
        frames: Vec<Vec<Rgbw>>,
        fail: bool,
    }

    impl SmartLedsWrite for FrameLog {
        type Error = ();
        type Color = Rgbw;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            if self.fail {
                return Err(());
            }
            self.frames.push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    #[test]
    fn test_writes_are_invisible_until_show() {
        let mut ring: Ring = PixelBuffer::new(Recorder::default());

        ring.set(3, rgbw(1, 2, 3, 4));
        assert_eq!(ring.get(3), Some(rgbw(1, 2, 3, 4)));
        assert_eq!(ring.driver().flushes, 0);

        ring.show();
        assert_eq!(ring.driver().flushes, 1);
        assert_eq!(ring.driver().last[3], rgbw(1, 2, 3, 4));

        ring.driver_mut().flushes = 0;
        ring.show();
        assert_eq!(ring.driver().flushes, 1);
    }

    #[test]
    fn test_get_out_of_range() {
        let ring: Ring = PixelBuffer::new(Recorder::default());
        assert_eq!(ring.get(ring.len()), None);
    }

    #[test]
    fn test_fill_sets_every_cell() {
        let mut bar: PixelBuffer<Rgb, Recorder<Rgb>, 4> = PixelBuffer::new(Recorder::default());
        bar.fill(Rgb { r: 9, g: 0, b: 0 });
        assert!(bar.cells().iter().all(|cell| cell.r == 9));
    }

    #[test]
    fn test_smart_leds_output_forwards_frames() {
        let mut strip: PixelBuffer<Rgbw, SmartLedsOutput<FrameLog>, 3> =
            PixelBuffer::new(SmartLedsOutput::new(FrameLog::default()));

        strip.set(1, rgbw(0, 0, 0, 255));
        strip.show();
        strip.show();

        let frames = &strip.driver().writer().frames;
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0], [Rgbw::default(), rgbw(0, 0, 0, 255), Rgbw::default()]);
    }

    #[test]
    fn test_smart_leds_output_survives_write_errors() {
        let failing = FrameLog {
            fail: true,
            ..FrameLog::default()
        };
        let mut strip: PixelBuffer<Rgbw, SmartLedsOutput<FrameLog>, 3> =
            PixelBuffer::new(SmartLedsOutput::new(failing));

        strip.set(0, rgbw(1, 1, 1, 1));
        strip.show();

        assert_eq!(strip.get(0), Some(rgbw(1, 1, 1, 1)));
        assert!(strip.driver().writer().frames.is_empty());

    }
}
