//! Color types used by the pack's LED chains
//!
//! The bar graph is a plain RGB chain, the cyclotron ring and the main
//! strip carry an extra white channel.

use smart_leds::{RGB8, RGBW, White};

pub type Rgb = RGB8;
pub type Rgbw = RGBW<u8>;

/// Fully dark RGB cell
pub const RGB_OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Fully dark RGBW cell
pub const RGBW_OFF: Rgbw = rgbw(0, 0, 0, 0);

/// Build an RGBW color
pub const fn rgbw(r: u8, g: u8, b: u8, w: u8) -> Rgbw {
    Rgbw {
        r,
        g,
        b,
        a: White(w),
    }
}

/// Color channel math shared by the effect renderers
pub trait Scale: Copy {
    /// Scale every channel by `intensity` (0.0-1.0), truncating
    #[must_use]
    fn scaled(self, intensity: f32) -> Self;
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_channel(value: u8, intensity: f32) -> u8 {
    (f32::from(value) * intensity.clamp(0.0, 1.0)) as u8
}

impl Scale for Rgb {
    fn scaled(self, intensity: f32) -> Self {
        Rgb {
            r: scale_channel(self.r, intensity),
            g: scale_channel(self.g, intensity),
            b: scale_channel(self.b, intensity),
        }
    }
}

impl Scale for Rgbw {
    fn scaled(self, intensity: f32) -> Self {
        rgbw(
            scale_channel(self.r, intensity),
            scale_channel(self.g, intensity),
            scale_channel(self.b, intensity),
            scale_channel(self.a.0, intensity),
        )
    }
}
