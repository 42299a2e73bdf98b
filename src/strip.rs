//! Addressable pixel buffers
//!
//! A [`LedStrip`] is an ordered, fixed-length run of color cells that is
//! only pushed to the hardware on [`LedStrip::show`]. Writes between two
//! flushes are invisible.

use smart_leds::SmartLedsWrite;

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Addressable color buffer with an explicit flush
pub trait LedStrip<C: Copy> {
    /// Number of cells
    fn len(&self) -> usize;

    /// Color currently stored at `index`
    ///
    /// Returns `None` if `index` is out of range.
    fn get(&self, index: usize) -> Option<C>;

    /// Store a color at `index`. Out of range writes are ignored.
    fn set(&mut self, index: usize, color: C);

    /// Push the current cell values to the hardware
    fn show(&mut self);

    /// Check if the strip has no cells
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Store the same color in every cell
    fn fill(&mut self, color: C) {
        for index in 0..self.len() {
            self.set(index, color);
        }
    }
}

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// Pixel buffers are generic over this trait.
pub trait OutputDriver<C> {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[C]);
}

/// Fixed-length pixel buffer flushed through an [`OutputDriver`]
#[derive(Debug, Clone)]
pub struct PixelBuffer<C, D, const N: usize> {
    cells: [C; N],
    driver: D,
}

impl<C: Copy + Default, D: OutputDriver<C>, const N: usize> PixelBuffer<C, D, N> {
    /// Create a dark buffer on top of `driver`
    pub fn new(driver: D) -> Self {
        Self {
            cells: [C::default(); N],
            driver,
        }
    }

    /// Current cell values
    pub fn cells(&self) -> &[C] {
        &self.cells
    }

    /// Get a reference to the driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get a mutable reference to the driver
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}

impl<C: Copy + Default, D: OutputDriver<C>, const N: usize> LedStrip<C> for PixelBuffer<C, D, N> {
    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<C> {
        self.cells.get(index).copied()
    }

    fn set(&mut self, index: usize, color: C) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = color;
        }
    }

    fn show(&mut self) {
        self.driver.write(&self.cells);
    }
}

/// Output driver backed by any `smart-leds` writer
///
/// Write errors are reported and dropped: the frame is lost, the next
/// flush tries again.
#[derive(Debug)]
pub struct SmartLedsOutput<W> {
    writer: W,
}

impl<W> SmartLedsOutput<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get a reference to the wrapped writer
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Release the wrapped writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<C, W> OutputDriver<C> for SmartLedsOutput<W>
where
    C: Copy + Into<W::Color>,
    W: SmartLedsWrite,
{
    fn write(&mut self, colors: &[C]) {
        if self.writer.write(colors.iter().copied()).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[SmartLedsOutput.write] failed to flush {} cells", colors.len());
        }
    }
}
