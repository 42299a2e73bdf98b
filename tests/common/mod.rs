#![allow(dead_code)]

use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, InputPin};
use proton_pack::config::{BAR_GRAPH_LEN, MAIN_STRIP_LEN, RING_LEN};
use proton_pack::{
    AudioChannel, Debouncer, Hardware, Instant, OutputDriver, PackConfig, Peripherals,
    PixelBuffer, PropController, Rgb, Rgbw, Sample, SilentChannel,
};

/// Driver that keeps the last flushed frame
#[derive(Debug, Default)]
pub struct Recorder<C> {
    pub flushes: usize,
    pub last: Vec<C>,
}

impl<C: Copy> OutputDriver<C> for Recorder<C> {
    fn write(&mut self, colors: &[C]) {
        self.flushes += 1;
        self.last = colors.to_vec();
    }
}

/// Input pin whose level the test flips from outside
#[derive(Debug, Clone)]
pub struct FakePin(pub Rc<Cell<bool>>);

impl FakePin {
    /// Released switch, pulled up
    pub fn released() -> Self {
        Self(Rc::new(Cell::new(true)))
    }
}

impl ErrorType for FakePin {
    type Error = Infallible;
}

impl InputPin for FakePin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0.get())
    }
}

/// Audio channel that plays until the test finishes the sample
#[derive(Debug, Default)]
pub struct FakeAudio {
    pub playing: Option<Sample>,
    pub played: Vec<Sample>,
}

impl FakeAudio {
    pub fn finish(&mut self) {
        self.playing = None;
    }

    pub fn count(&self, sample: Sample) -> usize {
        self.played.iter().filter(|played| **played == sample).count()
    }
}

impl AudioChannel for FakeAudio {
    fn play(&mut self, sample: Sample) {
        self.playing = Some(sample);
        self.played.push(sample);
    }

    fn is_playing(&self) -> bool {
        self.playing.is_some()
    }

    fn stop(&mut self) {
        self.playing = None;
    }
}

pub type MainStrip = PixelBuffer<Rgbw, Recorder<Rgbw>, MAIN_STRIP_LEN>;
pub type BarGraph = PixelBuffer<Rgb, Recorder<Rgb>, BAR_GRAPH_LEN>;
pub type Ring = PixelBuffer<Rgbw, Recorder<Rgbw>, RING_LEN>;

pub struct FakeHardware;

impl Hardware for FakeHardware {
    type Strip = MainStrip;
    type BarGraph = BarGraph;
    type Ring = Ring;
    type Audio = FakeAudio;
    type Switch = Debouncer<FakePin>;
}

pub struct SilentHardware;

impl Hardware for SilentHardware {
    type Strip = MainStrip;
    type BarGraph = BarGraph;
    type Ring = Ring;
    type Audio = SilentChannel;
    type Switch = Debouncer<FakePin>;
}

/// Controller on fake hardware with a millisecond clock
pub struct Bench<H: Hardware> {
    pub controller: PropController<H>,
    pub switch1: Rc<Cell<bool>>,
    pub switch2: Rc<Cell<bool>>,
    pub now_ms: u64,
}

fn peripherals<H, A>(audio: A) -> (Peripherals<H>, Rc<Cell<bool>>, Rc<Cell<bool>>)
where
    H: Hardware<Strip = MainStrip, BarGraph = BarGraph, Ring = Ring, Audio = A, Switch = Debouncer<FakePin>>,
{
    let pin1 = FakePin::released();
    let pin2 = FakePin::released();
    let levels = (pin1.0.clone(), pin2.0.clone());
    let config = PackConfig::DEFAULT;
    let peripherals = Peripherals {
        strip: PixelBuffer::new(Recorder::default()),
        bar_graph: PixelBuffer::new(Recorder::default()),
        ring: PixelBuffer::new(Recorder::default()),
        audio,
        switch1: Debouncer::with_interval(pin1, config.debounce_interval),
        switch2: Debouncer::with_interval(pin2, config.debounce_interval),
    };
    (peripherals, levels.0, levels.1)
}

impl Bench<FakeHardware> {
    pub fn new() -> Self {
        let (peripherals, switch1, switch2) = peripherals::<FakeHardware, _>(FakeAudio::default());
        let controller =
            PropController::new(peripherals, &PackConfig::DEFAULT, Instant::from_millis(0))
                .expect("all states are registered");
        Self {
            controller,
            switch1,
            switch2,
            now_ms: 0,
        }
    }

    pub fn audio(&mut self) -> &mut FakeAudio {
        &mut self.controller.context_mut().audio
    }

    /// Let the playing sample end
    pub fn finish_sample(&mut self) {
        self.audio().finish();
    }
}

impl Bench<SilentHardware> {
    pub fn silent() -> Self {
        let (peripherals, switch1, switch2) = peripherals::<SilentHardware, _>(SilentChannel);
        let controller =
            PropController::new(peripherals, &PackConfig::DEFAULT, Instant::from_millis(0))
                .expect("all states are registered");
        Self {
            controller,
            switch1,
            switch2,
            now_ms: 0,
        }
    }
}

impl<H: Hardware> Bench<H> {
    /// Advance the clock by one millisecond and run one iteration
    pub fn tick(&mut self) {
        self.now_ms += 1;
        self.controller.tick(Instant::from_millis(self.now_ms));
    }

    pub fn tick_for(&mut self, ms: u64) {
        for _ in 0..ms {
            self.tick();
        }
    }

    /// Tick until the controller is in `state`, at most `limit` times
    pub fn tick_until(&mut self, state: proton_pack::StateId, limit: u64) -> bool {
        for _ in 0..limit {
            if self.controller.state() == Some(state) {
                return true;
            }
            self.tick();
        }
        self.controller.state() == Some(state)
    }

    pub fn press_switch1(&self) {
        self.switch1.set(false);
    }

    pub fn release_switch1(&self) {
        self.switch1.set(true);
    }

    pub fn press_switch2(&self) {
        self.switch2.set(false);
    }

    pub fn release_switch2(&self) {
        self.switch2.set(true);
    }
}
