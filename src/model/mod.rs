//! Data models for the RoomTint client.

mod color;
mod palette;
mod segment;

pub use color::{Channel, Color};
pub use palette::{Palette, TONES_PER_GROUP};
pub use segment::{DisplayedImage, PngPayload, Segment, SegmentIndex};
