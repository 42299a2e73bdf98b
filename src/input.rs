//! Debounced switch inputs
//!
//! Switches are wired active-low with a pull-up: the idle level reads
//! `true`, a press is a falling edge and a release is a rising edge.

use embassy_time::{Duration, Instant};
use embedded_hal::digital::InputPin;

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Default time a raw level must hold before it is accepted
pub const DEFAULT_DEBOUNCE_INTERVAL: Duration = Duration::from_millis(10);

/// Stable boolean level with per-update edge flags
pub trait DebouncedInput {
    /// Sample the raw level and advance the debounce state
    ///
    /// Edge flags afterwards describe this call only.
    fn update(&mut self, now: Instant);

    /// Current stable level
    fn value(&self) -> bool;

    /// Level went false -> true on the last update
    fn rose(&self) -> bool;

    /// Level went true -> false on the last update
    fn fell(&self) -> bool;
}

/// Stable-interval debouncer over an `embedded-hal` input pin
///
/// A raw change restarts the settle timer; the debounced level only follows
/// once the raw level has held for the whole interval.
#[derive(Debug)]
pub struct Debouncer<P> {
    pin: P,
    interval: Duration,
    stable: bool,
    unstable: bool,
    changed: bool,
    last_bounce: Instant,
    state_changed: Instant,
    last_duration: Duration,
}

impl<P: InputPin> Debouncer<P> {
    /// Create a debouncer with [`DEFAULT_DEBOUNCE_INTERVAL`]
    pub fn new(pin: P) -> Self {
        Self::with_interval(pin, DEFAULT_DEBOUNCE_INTERVAL)
    }

    /// Create a debouncer with a custom settle interval
    ///
    /// The initial level is read from the pin; a failed read assumes the
    /// pulled-up idle level.
    pub fn with_interval(mut pin: P, interval: Duration) -> Self {
        let level = pin.is_high().unwrap_or(true);
        Self {
            pin,
            interval,
            stable: level,
            unstable: level,
            changed: false,
            last_bounce: Instant::from_ticks(0),
            state_changed: Instant::from_ticks(0),
            last_duration: Duration::from_ticks(0),
        }
    }

    /// How long the previous stable level lasted
    pub const fn last_duration(&self) -> Duration {
        self.last_duration
    }

    /// How long the current stable level has lasted
    pub fn current_duration(&self, now: Instant) -> Duration {
        now.checked_duration_since(self.state_changed)
            .unwrap_or(Duration::from_ticks(0))
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }

    fn sample(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(level) => level,
            Err(_) => {
                #[cfg(feature = "esp32-log")]
                println!("[Debouncer.sample] pin read failed, keeping last level");
                self.unstable
            }
        }
    }
}

impl<P: InputPin> DebouncedInput for Debouncer<P> {
    fn update(&mut self, now: Instant) {
        self.changed = false;
        let level = self.sample();

        if level != self.unstable {
            self.last_bounce = now;
            self.unstable = level;
            return;
        }

        let settled = now
            .checked_duration_since(self.last_bounce)
            .is_some_and(|held| held >= self.interval);
        if settled && level != self.stable {
            self.last_bounce = now;
            self.stable = level;
            self.changed = true;
            self.last_duration = self.current_duration(now);
            self.state_changed = now;
        }
    }

    fn value(&self) -> bool {
        self.stable
    }

    fn rose(&self) -> bool {
        self.stable && self.changed
    }

    fn fell(&self) -> bool {
        !self.stable && self.changed
    }
}
