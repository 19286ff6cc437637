//! Conversions between `#rrggbb` hex strings and HSL triples.
//!
//! Hue is expressed in degrees in `[0, 360)`, saturation and lightness as
//! percentages in `[0, 100]`. HSL values only live for the duration of a
//! generation pass; hex strings are what callers store and display.

use once_cell::sync::Lazy;
use palette::Srgb;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Six hex digits with an optional leading `#`.
static HEX_INPUT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").unwrap()
});

/// The canonical form stored in palette entries.
static HEX_CANONICAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid color `{0}`, expected six hex digits such as #3b82f6")]
pub struct ParseHexError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HslColor {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl HslColor {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        HslColor { h, s, l }
    }

    pub fn to_hex(&self) -> String {
        hsl_to_hex(self.h, self.s, self.l)
    }
}

/// Parses `rrggbb` or `#rrggbb`, in any letter case, into 8-bit channels.
pub fn parse_hex(hex: &str) -> Result<Srgb<u8>, ParseHexError> {
    let captures = HEX_INPUT
        .captures(hex)
        .ok_or_else(|| ParseHexError(hex.to_owned()))?;

    let channel = |i: usize| {
        u8::from_str_radix(&captures[i], 16).map_err(|_| ParseHexError(hex.to_owned()))
    };

    Ok(Srgb::new(channel(1)?, channel(2)?, channel(3)?))
}

/// Lowercase `#rrggbb` rendering of 8-bit channels.
pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Coerces user or service supplied input into the canonical `#rrggbb` form.
pub fn normalize_hex(hex: &str) -> Option<String> {
    parse_hex(hex.trim()).ok().map(to_hex)
}

/// True when `hex` is exactly `#` followed by six hex digits.
pub fn is_valid_hex(hex: &str) -> bool {
    HEX_CANONICAL.is_match(hex)
}

/// Strict conversion, surfacing malformed input as an error.
pub fn try_hex_to_hsl(hex: &str) -> Result<HslColor, ParseHexError> {
    Ok(rgb_to_hsl(parse_hex(hex)?.into_format()))
}

/// Lenient conversion. Anything that isn't a six digit hex color becomes
/// black (`{0, 0, 0}`) instead of an error.
pub fn hex_to_hsl(hex: &str) -> HslColor {
    try_hex_to_hsl(hex).unwrap_or_else(|e| {
        log::debug!("{}, falling back to black", e);
        HslColor::default()
    })
}

fn rgb_to_hsl(rgb: Srgb<f64>) -> HslColor {
    let (r, g, b) = (rgb.red, rgb.green, rgb.blue);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    // Achromatic
    if max == min {
        return HslColor::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    HslColor::new(h / 6.0 * 360.0, s * 100.0, l * 100.0)
}

/// Inverse of [`hex_to_hsl`]. Output is lowercase `#rrggbb`.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let l = l / 100.0;
    let a = s * l.min(1.0 - l) / 100.0;

    let channel = |n: f64| -> u8 {
        let k = (n + h / 30.0).rem_euclid(12.0);
        let color = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);

        (255.0 * color).round().clamp(0.0, 255.0) as u8
    };

    to_hex(Srgb::new(channel(0.0), channel(8.0), channel(4.0)))
}

pub fn generate_random_hex() -> String {
    generate_random_hex_with(&mut rand::thread_rng())
}

/// Samples a uniformly distributed 24-bit color from `rng`.
pub fn generate_random_hex_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let value: u32 = rng.gen_range(0..=0xff_ffff);

    format!("#{:06x}", value)
}

/// ITU-R BT.709 luma over 0-255 channels.
pub fn luma(color: Srgb<u8>) -> f64 {
    0.2126 * color.red as f64 + 0.7152 * color.green as f64 + 0.0722 * color.blue as f64
}
