use std::fmt;
use image::Rgb;
use serde::{Deserialize, Serialize};
use crate::error::HeatmapError;

/// An opaque sRGB color, serialized as `#rrggbb`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub fn from_hex(hex: &str) -> Result<Self, HeatmapError> {
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.is_ascii())
            .ok_or_else(|| HeatmapError::InvalidColor(hex.to_string()))?;

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| HeatmapError::InvalidColor(hex.to_string()))
        };

        Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_rgb(&self) -> Rgb<u8> {
        Rgb([self.r, self.g, self.b])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = HeatmapError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Ordered colors for the threshold buckets. Index 0 is the warmest color;
/// bucket `i` (counted cold to warm) is painted with `colors[len - 1 - i]`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn from_hex<S: AsRef<str>>(hexes: &[S]) -> Result<Self, HeatmapError> {
        let colors = hexes
            .iter()
            .map(|hex| Color::from_hex(hex.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Palette { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Color for a bucket index counted cold to warm.
    pub fn for_bucket(&self, bucket: usize) -> Option<Color> {
        let last = self.colors.len().checked_sub(1)?;
        self.get(last.checked_sub(bucket)?)
    }
}

impl From<Vec<Color>> for Palette {
    fn from(colors: Vec<Color>) -> Self {
        Palette { colors }
    }
}
