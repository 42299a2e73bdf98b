//! Desktop preview app for the proton pack controller
//!
//! Runs the real state machine against simulated hardware: pixel buffers
//! drawn as LED rows, two hold buttons standing in for the switches and an
//! audio channel that "plays" each sample for a fixed time.

use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;
use std::time::Instant as StdInstant;

use eframe::egui::{self};
use embedded_hal::digital::{ErrorType, InputPin};
use proton_pack::config::{BAR_GRAPH_LEN, MAIN_STRIP_LEN, RING_LEN};
use proton_pack::{
    AudioChannel, Debouncer, Hardware, Instant, OutputDriver, PackConfig,
    Peripherals, PixelBuffer, PropController, Rgb, Rgbw, Sample, StateError,
};

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 14.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Simulated clock shared by the app and the audio channel
type Clock = Rc<Cell<u64>>;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("Proton Pack Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "proton-pack-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()?))),
    )
}

/// Driver that only counts flushes; the app draws the buffer itself
#[derive(Debug, Default)]
struct FrameCounter {
    flushes: u64,
}

impl<C> OutputDriver<C> for FrameCounter {
    fn write(&mut self, _colors: &[C]) {
        self.flushes += 1;
    }
}

/// Button level shared between the UI and the debouncer
#[derive(Debug, Clone)]
struct HoldButton(Rc<Cell<bool>>);

impl HoldButton {
    fn released() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    fn set_pressed(&self, pressed: bool) {
        self.0.set(!pressed);
    }
}

impl ErrorType for HoldButton {
    type Error = Infallible;
}

impl InputPin for HoldButton {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0.get())
    }
}

/// Audio channel that reports each sample as audible for its length
struct TimedAudio {
    clock: Clock,
    playing: Option<(Sample, u64)>,
}

impl TimedAudio {
    fn new(clock: Clock) -> Self {
        Self {
            clock,
            playing: None,
        }
    }

    const fn length_ms(sample: Sample) -> u64 {
        match sample {
            Sample::Startup => 4_000,
            Sample::HumLoop => 6_000,
            Sample::WandStart => 1_500,
            Sample::BeamStart => 1_000,
            Sample::BeamLoop => 3_000,
            Sample::BeamStop => 2_000,
        }
    }

    fn current(&self) -> Option<Sample> {
        self.playing
            .filter(|(_, ends)| self.clock.get() < *ends)
            .map(|(sample, _)| sample)
    }
}

impl AudioChannel for TimedAudio {
    fn play(&mut self, sample: Sample) {
        let ends = self.clock.get().saturating_add(Self::length_ms(sample));
        self.playing = Some((sample, ends));
    }

    fn is_playing(&self) -> bool {
        self.current().is_some()
    }

    fn stop(&mut self) {
        self.playing = None;
    }
}

struct Simulated;

impl Hardware for Simulated {
    type Strip = PixelBuffer<Rgbw, FrameCounter, MAIN_STRIP_LEN>;
    type BarGraph = PixelBuffer<Rgb, FrameCounter, BAR_GRAPH_LEN>;
    type Ring = PixelBuffer<Rgbw, FrameCounter, RING_LEN>;
    type Audio = TimedAudio;
    type Switch = Debouncer<HoldButton>;
}

struct PreviewApp {
    controller: PropController<Simulated>,
    /// Synthetic time in milliseconds
    clock: Clock,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    switch1: HoldButton,
    switch2: HoldButton,
    /// LED pixel size for display
    led_size: f32,
}

impl PreviewApp {
    fn new() -> Result<Self, StateError> {
        let config = PackConfig::DEFAULT;
        let clock = Clock::default();
        let switch1 = HoldButton::released();
        let switch2 = HoldButton::released();

        let peripherals = Peripherals::<Simulated> {
            strip: PixelBuffer::new(FrameCounter::default()),
            bar_graph: PixelBuffer::new(FrameCounter::default()),
            ring: PixelBuffer::new(FrameCounter::default()),
            audio: TimedAudio::new(Rc::clone(&clock)),
            switch1: Debouncer::with_interval(switch1.clone(), config.debounce_interval),
            switch2: Debouncer::with_interval(switch2.clone(), config.debounce_interval),
        };

        let controller = PropController::new(peripherals, &config, Instant::from_millis(0))?;

        Ok(Self {
            controller,
            clock,
            last_frame: StdInstant::now(),
            time_scale: 1.0,
            switch1,
            switch2,
            led_size: LED_SIZE,
        })
    }

    /// Advance synthetic time, ticking the controller once per millisecond
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
        let delta_ms_f64 = if delta_ms_f64.is_finite() {
            delta_ms_f64.clamp(0.0, 1000.0)
        } else {
            0.0
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let delta_ms = delta_ms_f64 as u64;

        for _ in 0..delta_ms {
            let t_ms = self.clock.get() + 1;
            self.clock.set(t_ms);
            self.controller.tick(Instant::from_millis(t_ms));
        }
    }

    fn draw_row<C: Copy>(
        &self,
        ui: &mut egui::Ui,
        label: &str,
        cells: &[C],
        to_color: impl Fn(C) -> egui::Color32,
    ) {
        ui.label(label);
        let led_pitch = self.led_size + LED_GAP;
        let available_width = ui.available_width();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
        let rows = cells.len().div_ceil(leds_per_row);
        #[allow(clippy::cast_precision_loss)]
        let height = rows as f32 * led_pitch;

        let (response, painter) = ui.allocate_painter(
            egui::vec2(available_width, height),
            egui::Sense::hover(),
        );
        let origin = response.rect.min;

        #[allow(clippy::cast_precision_loss)]
        for (i, pixel) in cells.iter().enumerate() {
            let row = i / leds_per_row;
            let col = i % leds_per_row;
            let x = origin.x + col as f32 * led_pitch;
            let y = origin.y + row as f32 * led_pitch;

            let rect = egui::Rect::from_min_size(
                egui::pos2(x, y),
                egui::vec2(self.led_size, self.led_size),
            );
            painter.rect_filled(rect, 3.0, to_color(*pixel));
        }
        ui.add_space(8.0);
    }
}

fn rgbw_color(pixel: Rgbw) -> egui::Color32 {
    let w = pixel.a.0;
    egui::Color32::from_rgb(
        pixel.r.saturating_add(w),
        pixel.g.saturating_add(w),
        pixel.b.saturating_add(w),
    )
}

fn rgb_color(pixel: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b)
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <Switches>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        let wand = ui.button("Wand power (hold)");
                        self.switch1.set_pressed(wand.is_pointer_button_down_on());

                        ui.add_space(8.0);

                        let trigger = ui.button("Trigger (hold)");
                        self.switch2.set_pressed(trigger.is_pointer_button_down_on());
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        ui.add(
                            egui::Slider::new(&mut self.time_scale, 0.1..=5.0)
                                .logarithmic(true),
                        );
                    });
                });
                // </Switches>
                ui.add_space(16.0);
                // <Status>
                ui.vertical(|ui| {
                    let t_ms = self.clock.get();
                    let secs = t_ms / 1000;
                    let ms = t_ms % 1000;
                    ui.label(format!("Time: {secs}.{ms:03}s"));

                    let state = self
                        .controller
                        .state()
                        .map_or("none", |state| state.as_str());
                    ui.label(format!("State: {state}"));

                    let sample = self
                        .controller
                        .context()
                        .audio
                        .current()
                        .map_or("silence", |sample| sample.file_name());
                    ui.label(format!("Audio: {sample}"));
                });
                // </Status>
                ui.add_space(16.0);
                ui.vertical(|ui| {
                    ui.label("Size: ");
                    ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
                });
            });

            ui.add_space(16.0);

            let pack = self.controller.context();
            self.draw_row(ui, "Wand and beam", pack.strip.cells(), rgbw_color);
            self.draw_row(ui, "Bar graph", pack.bar_graph.cells(), rgb_color);
            self.draw_row(ui, "Cyclotron", pack.ring.cells(), rgbw_color);

            let flushes = pack.strip.driver().flushes
                + pack.bar_graph.driver().flushes
                + pack.ring.driver().flushes;
            ui.label(format!("Flushes: {flushes}"));
        });
    }
}
