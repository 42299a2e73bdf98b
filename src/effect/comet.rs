//! Comet chase effect
//!
//! A bright head with a fading tail running around a circular strip in a
//! single direction. One background cell trails the tail and erases the
//! cell the comet just left.

use super::{Effect, Frame};
use crate::color::Scale;
use crate::strip::LedStrip;

/// Intensity of the dimmest tail cell
const TAIL_FLOOR: f32 = 0.05;

/// Intensity range spread over the tail
const TAIL_SPAN: f32 = 0.95;

#[derive(Debug, Clone)]
pub struct CometEffect<C> {
    color: C,
    background: C,
    tail_length: usize,
    reverse: bool,
    /// First drawn cell; resolved against the strip length on first render
    tail_start: Option<usize>,
}

impl<C: Copy + Default> CometEffect<C> {
    /// Create a comet with a tail of `tail_length` cells (at least one)
    pub fn new(color: C, tail_length: usize) -> Self {
        Self {
            color,
            background: C::default(),
            tail_length: tail_length.max(1),
            reverse: false,
            tail_start: None,
        }
    }

    /// Run the comet towards lower indices
    #[must_use]
    pub fn with_reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Set the color left behind the tail
    #[must_use]
    pub fn with_background(mut self, background: C) -> Self {
        self.background = background;
        self
    }

    pub const fn tail_length(&self) -> usize {
        self.tail_length
    }

    /// Cell where the next tick starts drawing
    pub const fn tail_start(&self) -> Option<usize> {
        self.tail_start
    }

    /// Start position so the head enters at the first cell
    fn initial_start(&self, len: usize) -> usize {
        let lead = (self.tail_length + 1) % len;
        if self.reverse {
            lead
        } else {
            (len - lead) % len
        }
    }
}

impl<C: Scale + Default> CometEffect<C> {
    /// Color of the `n`th drawn cell, background first and head last
    #[allow(clippy::cast_precision_loss)]
    fn ramp(&self, n: usize) -> C {
        if n == 0 {
            return self.background;
        }
        let step = TAIL_SPAN / self.tail_length as f32;
        self.color.scaled((n - 1) as f32 * step + TAIL_FLOOR)
    }
}

impl<C: Scale + Default> Effect for CometEffect<C> {
    type Color = C;

    fn render<S: LedStrip<C> + ?Sized>(&mut self, _frame: Frame, strip: &mut S) {
        let len = strip.len();
        if len == 0 {
            return;
        }
        let start = match self.tail_start {
            Some(start) => start % len,
            None => self.initial_start(len),
        };

        let cells = self.tail_length + 1;
        for n in 0..cells {
            let color = if self.reverse {
                self.ramp(cells - 1 - n)
            } else {
                self.ramp(n)
            };
            strip.set((start + n) % len, color);
        }

        let next = if self.reverse {
            (start + len - 1) % len
        } else {
            (start + 1) % len
        };
        self.tail_start = Some(next);
    }

    fn reset(&mut self) {
        self.tail_start = None;
    }
}
