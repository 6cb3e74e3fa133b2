//! Piecewise pH-to-display-color ramp.
//!
//! The calculator paints its result box with a color keyed to the pH band:
//! deep red for strong acids, an orange-to-yellow ramp for weak acids,
//! green at neutral, and three blues of increasing depth for bases. The
//! mapping is total: any input is clamped to the 0-14 scale first.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use crate::consts::{NEUTRAL_BAND_HALF_WIDTH, PH_NEUTRAL};
use crate::scale::clamp_to_scale;

/// An opaque sRGB color on the pH ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex string for DOM use, e.g. `"#d70000"`.
    #[must_use]
    pub fn css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// Fixed band colors, most acidic to most basic.
const STRONG_ACID: Rgb = Rgb::new(0xd7, 0x00, 0x00);
const WEAK_ACID_FROM: Rgb = Rgb::new(215, 100, 0);
const WEAK_ACID_TO: Rgb = Rgb::new(255, 255, 0);
const SLIGHTLY_ACIDIC: Rgb = Rgb::new(0xe0, 0xf5, 0x7c);
const NEUTRAL: Rgb = Rgb::new(0x7c, 0xeb, 0x7c);
const SLIGHTLY_BASIC: Rgb = Rgb::new(0x7c, 0xd6, 0xf5);
const MODERATELY_BASIC: Rgb = Rgb::new(0x00, 0x88, 0xcc);
const STRONG_BASE: Rgb = Rgb::new(0x00, 0x00, 0xcc);

/// Interpolate one channel. Truncates toward zero, not rounds: the ramp
/// midpoint between 100 and 255 must read 177.
fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    (f64::from(from) + t * (f64::from(to) - f64::from(from))) as u8
}

fn lerp(from: Rgb, to: Rgb, t: f64) -> Rgb {
    Rgb::new(
        lerp_channel(from.r, to.r, t),
        lerp_channel(from.g, to.g, t),
        lerp_channel(from.b, to.b, t),
    )
}

/// Map a pH value to its display color.
///
/// Total over all inputs: the value is clamped to the 0-14 scale before
/// band selection. The neutral band is epsilon-tolerant
/// (`|pH - 7| <= 0.05`) rather than an exact float comparison.
#[must_use]
pub fn color_for_ph(ph: f64) -> Rgb {
    let ph = clamp_to_scale(ph);
    if ph < 3.0 {
        return STRONG_ACID;
    }
    if ph < 6.0 {
        // Weak acid: ramp from orange to yellow across pH 3..6.
        return lerp(WEAK_ACID_FROM, WEAK_ACID_TO, (ph - 3.0) / 3.0);
    }
    if (ph - PH_NEUTRAL).abs() <= NEUTRAL_BAND_HALF_WIDTH {
        return NEUTRAL;
    }
    if ph < PH_NEUTRAL {
        return SLIGHTLY_ACIDIC;
    }
    if ph < 9.0 {
        return SLIGHTLY_BASIC;
    }
    if ph < 12.0 {
        return MODERATELY_BASIC;
    }
    STRONG_BASE
}
