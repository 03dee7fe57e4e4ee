//! Segment and image data models.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::constants::PNG_DATA_URL_PREFIX;

/// Zero-based segment index, valid for one segmentation run only.
pub type SegmentIndex = usize;

/// Base64-encoded PNG as delivered by the service.
///
/// The payload is kept opaque; it is only wrapped into a data URL for display
/// or decoded when the native driver writes it to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngPayload(String);

impl PngPayload {
    /// Wrap a base64 payload.
    pub fn new(base64: impl Into<String>) -> Self {
        Self(base64.into())
    }

    /// The raw base64 text.
    pub fn as_base64(&self) -> &str {
        &self.0
    }

    /// `data:image/png;base64,...` source for an image element.
    pub fn data_url(&self) -> String {
        format!("{}{}", PNG_DATA_URL_PREFIX, self.0)
    }

    /// Decode the payload into PNG bytes.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(self.0.as_bytes())
    }
}

/// A segment discovered by the segmentation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Position in the current segment set
    pub index: SegmentIndex,
    /// Room image with this segment highlighted
    pub preview: PngPayload,
}

impl Segment {
    /// Create a segment with its highlighted preview.
    pub fn new(index: SegmentIndex, preview: PngPayload) -> Self {
        Self { index, preview }
    }

    /// One-based label shown in the segment list.
    pub fn label(&self) -> String {
        format!("Segment {}", self.index + 1)
    }
}

/// What the main image view currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisplayedImage {
    /// No image uploaded yet
    #[default]
    Empty,
    /// The uploaded original, served by the service
    Uploaded(String),
    /// Highlighted preview of a selected segment
    SegmentPreview(SegmentIndex, PngPayload),
    /// Recomposited room with the committed colors
    Composite(PngPayload),
}

impl DisplayedImage {
    /// Source string for an image element, `None` when nothing is shown.
    pub fn src(&self) -> Option<String> {
        match self {
            DisplayedImage::Empty => None,
            DisplayedImage::Uploaded(url) => Some(url.clone()),
            DisplayedImage::SegmentPreview(_, png) | DisplayedImage::Composite(png) => {
                Some(png.data_url())
            }
        }
    }
}
