//! Color conversion utilities shared across the application.
//!
//! Colors travel as `#rrggbb` strings (hex field, native picker, wire format)
//! and as three 8-bit channels (sliders). These functions convert between the
//! two without loss.

use crate::error::ColorError;

/// Number of hex digits in a color string, excluding the `#`.
const HEX_DIGITS: usize = 6;

/// Parse a hex color into RGB channels.
///
/// Accepts an optional leading `#` followed by exactly six hex digits,
/// in any case. Shorthand (`#abc`), alpha (`#rrggbbaa`), surrounding
/// whitespace and named colors are rejected.
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8), ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    // from_str_radix tolerates a leading '+', so check the digits up front
    if digits.len() != HEX_DIGITS || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidFormat(hex.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| ColorError::InvalidFormat(hex.to_string()))
    };

    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Format RGB channels as a lowercase `#rrggbb` string.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Normalize a hex color to its canonical `#rrggbb` form.
pub fn normalize_hex(hex: &str) -> Result<String, ColorError> {
    let (r, g, b) = hex_to_rgb(hex)?;
    Ok(rgb_to_hex(r, g, b))
}

/// Clamp a raw slider reading into the 8-bit channel range.
pub fn clamp_channel(value: i64) -> u8 {
    value.clamp(0, i64::from(u8::MAX)) as u8
}
