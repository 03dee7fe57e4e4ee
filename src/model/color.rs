//! Color value type shared by the palette, the color inputs and the assignment store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color_utils::{hex_to_rgb, rgb_to_hex};
use crate::error::ColorError;

/// A 24-bit RGB color.
///
/// Serializes as its lowercase `#rrggbb` form, which is also what the
/// recomposition service expects for each segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Pure white, the color shown for segments without a committed color.
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the `#` is optional, case-insensitive).
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let (r, g, b) = hex_to_rgb(hex)?;
        Ok(Self::new(r, g, b))
    }

    /// Lowercase `#rrggbb` representation.
    pub fn to_hex(&self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }

    /// Value of a single channel.
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Copy of this color with one channel replaced.
    pub fn with_channel(mut self, channel: Channel, value: u8) -> Self {
        match channel {
            Channel::Red => self.r = value,
            Channel::Green => self.g = value,
            Channel::Blue => self.b = value,
        }
        self
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::new(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// One of the three RGB sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red slider
    Red,
    /// Green slider
    Green,
    /// Blue slider
    Blue,
}
