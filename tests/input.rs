mod common;

mod tests {
    use embassy_time::{Duration, Instant};
    use embedded_hal::digital::{Error, ErrorKind, ErrorType, InputPin};
    use proton_pack::{DebouncedInput, Debouncer};

    use crate::common::FakePin;

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_idle_level_is_high() {
        let mut switch = Debouncer::new(FakePin::released());
        switch.update(at(0));
        switch.update(at(50));
        assert!(switch.value());
        assert!(!switch.rose());
        assert!(!switch.fell());
    }

    #[test]
    fn test_press_falls_after_settling() {
        let pin = FakePin::released();
        let level = pin.0.clone();
        let mut switch = Debouncer::new(pin);

        level.set(false);
        switch.update(at(100));
        assert!(!switch.fell());
        switch.update(at(105));
        assert!(!switch.fell());
        switch.update(at(110));
        assert!(switch.fell());
        assert!(!switch.value());

        // the edge only lasts for one update
        switch.update(at(111));
        assert!(!switch.fell());
        assert!(!switch.value());
    }

    #[test]
    fn test_release_rises() {
        let pin = FakePin::released();
        let level = pin.0.clone();
        let mut switch = Debouncer::new(pin);

        level.set(false);
        switch.update(at(0));
        switch.update(at(10));
        assert!(switch.fell());

        level.set(true);
        switch.update(at(20));
        switch.update(at(30));
        assert!(switch.rose());
        assert!(!switch.fell());
        assert!(switch.value());
    }

    #[test]
    fn test_bounce_yields_single_edge() {
        let pin = FakePin::released();
        let level = pin.0.clone();
        let mut switch = Debouncer::new(pin);
        let mut edges = 0;

        for (ms, raw) in [(0, false), (3, true), (6, false), (8, true), (9, false)] {
            level.set(raw);
            switch.update(at(ms));
            edges += usize::from(switch.fell() || switch.rose());
        }
        for ms in 10..40 {
            switch.update(at(ms));
            edges += usize::from(switch.fell() || switch.rose());
        }

        assert_eq!(edges, 1);
        assert!(!switch.value());
    }

    #[test]
    fn test_custom_interval() {
        let pin = FakePin::released();
        let level = pin.0.clone();
        let mut switch = Debouncer::with_interval(pin, Duration::from_millis(50));

        level.set(false);
        switch.update(at(0));
        switch.update(at(49));
        assert!(!switch.fell());
        switch.update(at(50));
        assert!(switch.fell());
    }

    #[test]
    fn test_state_durations() {
        let pin = FakePin::released();
        let level = pin.0.clone();
        let mut switch = Debouncer::new(pin);

        level.set(false);
        switch.update(at(1000));
        switch.update(at(1010));
        assert!(switch.fell());
        assert_eq!(switch.last_duration(), Duration::from_millis(1010));

        level.set(true);
        switch.update(at(1200));
        switch.update(at(1210));
        assert!(switch.rose());
        assert_eq!(switch.last_duration(), Duration::from_millis(200));
        assert_eq!(switch.current_duration(at(1300)), Duration::from_millis(90));
    }

    #[derive(Debug)]
    struct PinFault;

    impl Error for PinFault {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    struct BrokenPin;

    impl ErrorType for BrokenPin {
        type Error = PinFault;
    }

    impl InputPin for BrokenPin {
        fn is_high(&mut self) -> Result<bool, PinFault> {
            Err(PinFault)
        }

        fn is_low(&mut self) -> Result<bool, PinFault> {
            Err(PinFault)
        }
    }

    #[test]
    fn test_read_errors_keep_last_level() {
        let mut switch = Debouncer::new(BrokenPin);
        for ms in 0..100 {
            switch.update(at(ms));
            assert!(!switch.fell() && !switch.rose());
        }
        assert!(switch.value());
    }
}
