mod common;

mod tests {
    use embassy_time::{Duration, Instant};
    use proton_pack::{Animation, Effect, FillEffect, Frame, LedStrip, PixelBuffer, Rgb};

    use crate::common::Recorder;

    /// Effect counting its ticks
    #[derive(Default)]
    struct Counter {
        ticks: usize,
        frames: Vec<Frame>,
    }

    impl Effect for Counter {
        type Color = Rgb;

        fn render<S: LedStrip<Rgb> + ?Sized>(&mut self, frame: Frame, strip: &mut S) {
            self.ticks += 1;
            self.frames.push(frame);
            strip.set(0, Rgb::new(1, 2, 3));
        }
    }

    fn strip() -> PixelBuffer<Rgb, Recorder<Rgb>, 4> {
        PixelBuffer::new(Recorder::default())
    }

    #[test]
    fn test_throttle_runs_once_per_interval() {
        let mut animation = Animation::new(Counter::default(), Duration::from_millis(30));
        let mut strip = strip();

        for ms in 0..=300 {
            animation.update(Instant::from_millis(ms), &mut strip);
        }

        // runs at 31, 62, ..., 279
        assert_eq!(animation.effect().ticks, 9);
        assert_eq!(strip.driver().flushes, 9);
        assert_eq!(animation.last_update(), Instant::from_millis(279));
    }

    #[test]
    fn test_interval_is_exclusive() {
        let mut animation = Animation::new(Counter::default(), Duration::from_millis(30));
        let mut strip = strip();

        assert!(!animation.update(Instant::from_millis(30), &mut strip));
        assert!(animation.update(Instant::from_millis(31), &mut strip));
        assert!(!animation.update(Instant::from_millis(31), &mut strip));
        assert!(!animation.update(Instant::from_millis(61), &mut strip));
        assert!(animation.update(Instant::from_millis(62), &mut strip));
    }

    #[test]
    fn test_frame_carries_previous_update() {
        let mut animation = Animation::new(Counter::default(), Duration::from_millis(10));
        let mut strip = strip();

        animation.update(Instant::from_millis(20), &mut strip);
        animation.update(Instant::from_millis(45), &mut strip);

        let frames = &animation.effect().frames;
        assert_eq!(frames[0].last_update, Instant::from_millis(0));
        assert_eq!(frames[1].last_update, Instant::from_millis(20));
        assert_eq!(frames[1].elapsed(), Duration::from_millis(25));
    }

    #[test]
    fn test_flush_pushes_rendered_cells() {
        let mut animation = Animation::new(Counter::default(), Duration::from_millis(10));
        let mut strip = strip();

        animation.update(Instant::from_millis(11), &mut strip);

        assert_eq!(strip.driver().last[0], Rgb::new(1, 2, 3));
        assert_eq!(strip.driver().last.len(), 4);
    }

    #[test]
    fn test_clock_going_backwards_is_ignored() {
        let mut animation = Animation::new(Counter::default(), Duration::from_millis(10));
        let mut strip = strip();

        animation.update(Instant::from_millis(100), &mut strip);
        assert!(!animation.update(Instant::from_millis(50), &mut strip));
        assert_eq!(animation.effect().ticks, 1);
    }

    #[test]
    fn test_effect_can_be_retuned_between_runs() {
        let mut animation = Animation::new(
            FillEffect::new(Rgb::new(0, 0, 255)),
            Duration::from_millis(30),
        );
        let mut bar = strip();

        assert!(animation.update(Instant::from_millis(31), &mut bar));
        animation.effect_mut().set_color(Rgb::new(255, 0, 0));
        assert!(animation.update(Instant::from_millis(62), &mut bar));

        assert_eq!(animation.effect().color(), Rgb::new(255, 0, 0));
        assert_eq!(bar.cells()[0], Rgb::new(0, 0, 255));
        assert_eq!(bar.cells()[1], Rgb::new(255, 0, 0));
        assert_eq!(bar.driver().last[1], Rgb::new(255, 0, 0));
    }
}
