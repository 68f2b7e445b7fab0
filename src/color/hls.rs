//! Hue-lightness-saturation colours
//!
//! All three components live in `[0, 1]`; hue is a fraction of a full turn.
//! The conversions follow the usual `colorsys` formulas so an achromatic
//! input always yields hue 0 and saturation 0.

use crate::color::channel::{clamp_unit, normalize, quantize};
use crate::spatial::Rgb;

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// A colour in HLS space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hls {
    /// Hue as a fraction of 360 degrees
    pub hue: f64,
    /// Lightness, 0 is black and 1 is white
    pub lightness: f64,
    /// Saturation
    pub saturation: f64,
}

impl Hls {
    /// Build a colour from its components without clamping
    pub const fn new(hue: f64, lightness: f64, saturation: f64) -> Self {
        Self {
            hue,
            lightness,
            saturation,
        }
    }

    /// Convert an 8-bit RGB pixel
    pub fn from_rgb(pixel: Rgb) -> Self {
        let [r, g, b] = pixel;
        rgb_to_hls(normalize(r), normalize(g), normalize(b))
    }

    /// Convert back to an 8-bit RGB pixel, truncating each channel
    pub fn to_rgb(self) -> Rgb {
        let (r, g, b) = hls_to_rgb(self);
        [quantize(r), quantize(g), quantize(b)]
    }

    /// Whether hue and saturation carry no information (pure black or white)
    // Only the exact extremes are degenerate
    #[allow(clippy::float_cmp)]
    pub fn is_degenerate(&self) -> bool {
        self.lightness == 0.0 || self.lightness == 1.0
    }

    /// Borrow hue and saturation from `donor` when this colour is degenerate
    ///
    /// Lightness is always kept.
    pub fn or_chroma_of(self, donor: Self) -> Self {
        if self.is_degenerate() {
            Self {
                hue: donor.hue,
                lightness: self.lightness,
                saturation: donor.saturation,
            }
        } else {
            self
        }
    }

    /// Component-wise half of `self - other`
    ///
    /// The result is a difference, not a colour: components may be negative.
    pub fn half_difference(self, other: Self) -> Self {
        Self {
            hue: (self.hue - other.hue) / 2.0,
            lightness: (self.lightness - other.lightness) / 2.0,
            saturation: (self.saturation - other.saturation) / 2.0,
        }
    }

    /// Add `delta` scaled by `scale` to each component, clamping to `[0, 1]`
    // Fused rounding shifts truncated channels by one step
    #[allow(clippy::suboptimal_flops)]
    pub fn shifted(self, delta: Self, scale: f64) -> Self {
        Self {
            hue: clamp_unit(self.hue + delta.hue * scale),
            lightness: clamp_unit(self.lightness + delta.lightness * scale),
            saturation: clamp_unit(self.saturation + delta.saturation * scale),
        }
    }
}

/// Convert unit-range RGB to HLS
// Equality against the channel maximum picks the hue sector
#[allow(clippy::float_cmp)]
pub fn rgb_to_hls(r: f64, g: f64, b: f64) -> Hls {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let sum = max + min;
    let range = max - min;
    let lightness = sum / 2.0;

    if max == min {
        return Hls::new(0.0, lightness, 0.0);
    }

    let saturation = if lightness <= 0.5 {
        range / sum
    } else {
        range / (2.0 - max - min)
    };

    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;

    let sector = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    Hls::new((sector / 6.0).rem_euclid(1.0), lightness, saturation)
}

/// Convert HLS to unit-range RGB
// Zero saturation is the exact achromatic case; operation order is kept unfused
#[allow(clippy::float_cmp, clippy::suboptimal_flops)]
pub fn hls_to_rgb(hls: Hls) -> (f64, f64, f64) {
    let Hls {
        hue,
        lightness,
        saturation,
    } = hls;

    if saturation == 0.0 {
        return (lightness, lightness, lightness);
    }

    let m2 = if lightness <= 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - (lightness * saturation)
    };
    let m1 = 2.0 * lightness - m2;

    (
        hue_channel(m1, m2, hue + ONE_THIRD),
        hue_channel(m1, m2, hue),
        hue_channel(m1, m2, hue - ONE_THIRD),
    )
}

// Unfused so channels truncate to the same byte as `colorsys`
#[allow(clippy::suboptimal_flops)]
fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRDS {
        m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0
    } else {
        m1
    }
}
