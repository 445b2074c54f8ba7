//! Color mapping for point sequence positions

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::ColorScheme;

/// Alpha applied to every point color
pub const POINT_ALPHA: f32 = 0.9;

/// RGBA color with 8-bit channels and a fractional alpha
///
/// Formats as the CSS `rgba(r,g,b,a)` string plotting front-ends expect.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    /// Create an opaque-ish point color with the fixed point alpha
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            a: POINT_ALPHA,
        }
    }

    /// Normalized `[r, g, b, a]` for GPU vertex buffers
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a,
        ]
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Trait for mapping a normalized sequence position `t` in `[0, 1]` to a color
pub trait ColorMapper {
    /// Map `t` to an RGBA color
    fn map_color(&self, t: f32) -> Rgba;
}

impl ColorMapper for ColorScheme {
    fn map_color(&self, t: f32) -> Rgba {
        match self {
            ColorScheme::BlueToRed => Rgba::new(
                channel(255.0 * t),
                channel(100.0 * (1.0 - t)),
                channel(255.0 * (1.0 - t)),
            ),
            ColorScheme::Rainbow => {
                let [r, g, b] = hue_to_rgb(t * 360.0);
                Rgba::new(channel(255.0 * r), channel(255.0 * g), channel(255.0 * b))
            }
            ColorScheme::GreenToPurple => Rgba::new(
                channel(128.0 + 127.0 * t),
                channel(255.0 * (1.0 - t)),
                channel(128.0 + 127.0 * t),
            ),
        }
    }
}

/// Linear two-stop gradient for presenters that want their own palette
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientColorMapper {
    /// Color at `t = 0`
    pub start: [u8; 3],
    /// Color at `t = 1`
    pub end: [u8; 3],
}

impl Default for GradientColorMapper {
    fn default() -> Self {
        Self {
            start: [0, 100, 255],
            end: [255, 0, 0],
        }
    }
}

impl ColorMapper for GradientColorMapper {
    fn map_color(&self, t: f32) -> Rgba {
        let lerp = |i: usize| {
            let a = self.start[i] as f32;
            let b = self.end[i] as f32;
            channel(a + (b - a) * t)
        };
        Rgba::new(lerp(0), lerp(1), lerp(2))
    }
}

/// Truncate toward zero and clamp into `[0, 255]`
#[inline]
fn channel(value: f32) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// HSV to RGB at full saturation and value
///
/// `hue` is in degrees and wraps every 360. Each channel comes from the
/// hue's position within its 60° sextant.
fn hue_to_rgb(hue: f32) -> [f32; 3] {
    let h = hue.rem_euclid(360.0) / 60.0;
    let x = 1.0 - ((h % 2.0) - 1.0).abs();

    match h as u32 {
        0 => [1.0, x, 0.0],
        1 => [x, 1.0, 0.0],
        2 => [0.0, 1.0, x],
        3 => [0.0, x, 1.0],
        4 => [x, 0.0, 1.0],
        _ => [1.0, 0.0, x],
    }
}
