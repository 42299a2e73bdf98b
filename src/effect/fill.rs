//! Bar-graph fill effect
//!
//! Lights one more cell per tick; once the last cell is lit the bar is
//! blanked and filling starts over from the first cell.

use super::{Effect, Frame};
use crate::strip::LedStrip;

#[derive(Debug, Clone)]
pub struct FillEffect<C> {
    color: C,
    pos: usize,
}

impl<C: Copy> FillEffect<C> {
    pub const fn new(color: C) -> Self {
        Self { color, pos: 0 }
    }

    /// Cell the next tick lights
    pub const fn position(&self) -> usize {
        self.pos
    }

    pub const fn color(&self) -> C {
        self.color
    }

    pub fn set_color(&mut self, color: C) {
        self.color = color;
    }
}

impl<C: Copy + Default> Effect for FillEffect<C> {
    type Color = C;

    fn render<S: LedStrip<C> + ?Sized>(&mut self, _frame: Frame, strip: &mut S) {
        if strip.is_empty() {
            return;
        }
        strip.set(self.pos, self.color);
        self.pos += 1;
        if self.pos >= strip.len() {
            self.pos = 0;
            strip.fill(C::default());
        }
    }

    fn reset(&mut self) {
        self.pos = 0;
    }
}
