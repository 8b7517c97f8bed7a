//! Color types and conversion functions.
//!
//! Provides the 8-bit [`Rgb`] color and its HSL working-space form [`Hsl`],
//! plus pure conversion functions between hex text, RGB and HSL.
//!
//! Hex text is the interchange format everywhere in hue-forge: parsing accepts
//! `#rrggbb` or `rrggbb` in any case, rendering always emits lowercase
//! `#rrggbb`.

use crate::error::PaletteError;
use crate::prng::RandomSource;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// sRGB color with 8-bit channels.
///
/// Serializes as a hex string `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL color: hue in degrees [0, 360), saturation and lightness in percent [0, 100].
///
/// [`rgb_to_hsl`] produces whole numbers; the generators feed fractional
/// saturation and lightness back through [`hsl_to_rgb`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Exactly six hex digits are required: 3-digit shorthand, sign
    /// characters and anything else are rejected with
    /// `PaletteError::InvalidColor`.
    pub fn from_hex(hex: &str) -> Result<Rgb, PaletteError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return Err(PaletteError::InvalidColor(format!(
                "expected 6 hex digits in {hex:?}, got {}",
                digits.len()
            )));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(PaletteError::InvalidColor(format!(
                "non-hex digit in {hex:?}"
            )));
        }
        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| PaletteError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        Ok(Rgb {
            r: channel(0..2, "red")?,
            g: channel(2..4, "green")?,
            b: channel(4..6, "blue")?,
        })
    }

    /// Converts the color to a lowercase hex string like `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Parses hex text into RGB, or `None` if the text is not a 6-digit hex color.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    Rgb::from_hex(hex).ok()
}

/// Renders RGB as lowercase `#rrggbb`.
pub fn rgb_to_hex(c: Rgb) -> String {
    c.to_hex()
}

/// Converts RGB to HSL without rounding.
///
/// Gray (max == min) has hue and saturation 0.
pub fn rgb_to_hsl_exact(c: Rgb) -> Hsl {
    let r = c.r as f64 / 255.0;
    let g = c.g as f64 / 255.0;
    let b = c.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: l * 100.0,
        };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    // Position on the hue hexagon in sextants [0, 6).
    let sextant = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl {
        h: sextant / 6.0 * 360.0,
        s: s * 100.0,
        l: l * 100.0,
    }
}

/// Converts RGB to HSL with every component rounded to the nearest integer.
///
/// A hue that rounds up to 360 is reported as 0, which names the same color.
pub fn rgb_to_hsl(c: Rgb) -> Hsl {
    let exact = rgb_to_hsl_exact(c);
    Hsl {
        h: exact.h.round() % 360.0,
        s: exact.s.round(),
        l: exact.l.round(),
    }
}

/// One linear segment of the HSL reconstruction for a single channel.
///
/// `t` is the channel's fractional hue position; it is wrapped once into [0, 1].
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Converts HSL to RGB, rounding each channel to the nearest integer.
///
/// Hue may be any value in (-360, 720); the per-channel wrap maps it back onto
/// the color wheel.
pub fn hsl_to_rgb(c: Hsl) -> Rgb {
    let h = c.h / 360.0;
    let s = c.s / 100.0;
    let l = c.l / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb {
        r: (r * 255.0).round() as u8,
        g: (g * 255.0).round() as u8,
        b: (b * 255.0).round() as u8,
    }
}

/// Returns a uniformly random color as lowercase hex.
pub fn random_color<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    let mut channel = || (rng.next_f64() * 256.0).floor() as u8;
    let r = channel();
    let g = channel();
    let b = channel();
    Rgb { r, g, b }.to_hex()
}
