//! Preset wall colors offered as swatches.

use super::Color;

/// Number of tones in each palette group.
pub const TONES_PER_GROUP: usize = 5;

/// Preset room colors, in display order (5 groups of 5 tones).
static ROOM_COLORS: [Color; 25] = [
    // Grays
    Color::new(0xF5, 0xF5, 0xF5),
    Color::new(0xE0, 0xE0, 0xE0),
    Color::new(0xBD, 0xBD, 0xBD),
    Color::new(0x9E, 0x9E, 0x9E),
    Color::new(0x75, 0x75, 0x75),
    // Light pastels
    Color::new(0xFF, 0xCD, 0xD2),
    Color::new(0xF8, 0xBB, 0xD0),
    Color::new(0xE1, 0xBE, 0xE7),
    Color::new(0xD1, 0xC4, 0xE9),
    Color::new(0xC5, 0xCA, 0xE9),
    // More light pastels
    Color::new(0xB3, 0xE5, 0xFC),
    Color::new(0xB2, 0xDF, 0xDB),
    Color::new(0xC8, 0xE6, 0xC9),
    Color::new(0xDC, 0xED, 0xC8),
    Color::new(0xF0, 0xF4, 0xC3),
    // Neutrals
    Color::new(0xFF, 0xE0, 0xB2),
    Color::new(0xFF, 0xCC, 0xBC),
    Color::new(0xD7, 0xCC, 0xC8),
    Color::new(0xCF, 0xD8, 0xDC),
    Color::new(0xF0, 0xF0, 0xF0),
    // Medium tones
    Color::new(0xC5, 0xE1, 0xA5),
    Color::new(0x80, 0xCB, 0xC4),
    Color::new(0x81, 0xD4, 0xFA),
    Color::new(0x9F, 0xA8, 0xDA),
    Color::new(0xCE, 0x93, 0xD8),
];

/// Names of the palette groups, one per row of swatches.
static GROUP_NAMES: [&str; 5] = [
    "Grays",
    "Light pastels",
    "More light pastels",
    "Neutrals",
    "Medium tones",
];

/// Static swatch palette. Never mutated.
#[derive(Debug, Clone, Copy, Default)]
pub struct Palette;

impl Palette {
    /// All preset colors in display order.
    pub fn colors(&self) -> &'static [Color] {
        &ROOM_COLORS
    }

    /// Color of the swatch at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Color> {
        ROOM_COLORS.get(index).copied()
    }

    /// Number of swatches.
    pub fn len(&self) -> usize {
        ROOM_COLORS.len()
    }

    /// Whether the palette has no swatches.
    pub fn is_empty(&self) -> bool {
        ROOM_COLORS.is_empty()
    }

    /// Swatches grouped into named rows.
    pub fn groups(&self) -> impl Iterator<Item = (&'static str, &'static [Color])> {
        GROUP_NAMES
            .iter()
            .copied()
            .zip(ROOM_COLORS.chunks(TONES_PER_GROUP))
    }
}
