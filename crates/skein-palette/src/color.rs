// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! RGB color tokens and dark-luminosity sampling.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// An opaque RGB display color.
///
/// Equality and hashing are over the byte triple, so `#0071ce` and
/// `#0071CE` are the same color. Serializes as a lowercase hex token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color(pub [u8; 3]);

/// The reserved delivery-center blue (`#0071CE`).
///
/// Every delivery marker uses it, and the palette never hands it to a
/// supplier.
pub const DELIVERY_BLUE: Color = Color([0x00, 0x71, 0xCE]);

/// Failure to parse a hex color token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Token was not `#rrggbb` / `rrggbb` shaped.
    #[error("expected 6 hex digits with optional '#', got {0:?}")]
    BadShape(String),
    /// A component was not valid hex.
    #[error("invalid hex digit in {0:?}")]
    BadDigit(String),
}

impl Color {
    /// Build a color from raw RGB bytes.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Lowercase `#rrggbb` token.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.0;
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Parse a `#rrggbb` (or bare `rrggbb`) token.
    pub fn parse(token: &str) -> Result<Self, ParseColorError> {
        let hex = token.strip_prefix('#').unwrap_or(token);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ParseColorError::BadShape(token.to_owned()));
        }
        let byte = |range| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ParseColorError::BadDigit(token.to_owned()))
        };
        Ok(Self([byte(0..2)?, byte(2..4)?, byte(4..6)?]))
    }

    /// Draw one random dark-luminosity color.
    ///
    /// Hue ranges over the full wheel; saturation and value stay in a dark
    /// band so supplier markers read against the light map background.
    /// Pure function of the RNG—no other state consulted.
    pub fn random_dark<R: Rng>(rng: &mut R) -> Self {
        let hue = rng.gen_range(0.0..360.0);
        let saturation = rng.gen_range(0.55..1.0);
        let value = rng.gen_range(0.18..0.45);
        Self(hsv_to_rgb(hue, saturation, value))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        Self::parse(&token)
    }
}

/// Convert HSV (h in degrees, s/v in [0, 1]) to RGB bytes.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [u8; 3] {
    let c = v * s;
    let hp = (h / 60.0) % 6.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = v - c;
    let to_byte = |ch: f64| ((ch + m) * 255.0).round() as u8;
    [to_byte(r1), to_byte(g1), to_byte(b1)]
}
