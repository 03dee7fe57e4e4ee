//! Wire types for the three service endpoints.
//!
//! Field names match the service exactly:
//!
//! ```json
//! POST /               -> { "image_url": "/static/temp_image.png" }
//! POST /process_image  -> { "num_segments": 2, "highlighted_images": ["iVBOR...", "iVBOR..."] }
//! POST /apply_colors   <- { "segment_colors": { "0": "#112233" } }
//!                      -> { "colored_image": "iVBOR..." }
//! ```
//!
//! Failures come back as `{ "error": "..." }`, often with HTTP 200.

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::model::{Color, PngPayload, SegmentIndex};

/// Image to upload as the `file` multipart field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// File name reported to the service
    pub file_name: String,
    /// MIME type of the image
    pub mime: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Create an upload from in-memory bytes, guessing the MIME type from the name.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_for(&file_name).to_string();
        Self {
            file_name,
            mime,
            bytes,
        }
    }

    /// Read an image from disk.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        Ok(Self::new(file_name, bytes))
    }
}

/// MIME type for common image extensions.
fn mime_for(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// Reply to an upload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadResponse {
    /// Where the service serves the uploaded image
    pub image_url: String,
}

/// Reply to a segmentation request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProcessResponse {
    /// Number of segments found
    pub num_segments: usize,
    /// One base64 PNG per segment, with that segment highlighted
    pub highlighted_images: Vec<String>,
    /// The original image as base64, sent by some service versions
    #[serde(default)]
    pub original_image: Option<String>,
}

impl ProcessResponse {
    /// Highlighted previews as payloads, in segment order.
    pub fn previews(&self) -> Vec<PngPayload> {
        self.highlighted_images
            .iter()
            .map(|b64| PngPayload::new(b64.as_str()))
            .collect()
    }
}

/// Body of a recomposition request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplyColorsRequest {
    /// Committed colors keyed by segment index (serialized as string keys)
    pub segment_colors: BTreeMap<SegmentIndex, Color>,
}

/// Reply to a recomposition request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApplyColorsResponse {
    /// The recolored room as base64 PNG
    pub colored_image: String,
}

#[derive(Deserialize)]
struct ServiceErrorBody {
    error: String,
}

/// Decode a reply body, turning `{"error": ...}` bodies into [`ApiError::Service`].
pub fn decode_reply<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if value.get("error").is_some() {
        let ServiceErrorBody { error } = serde_json::from_value(value)?;
        return Err(ApiError::Service(error));
    }
    Ok(serde_json::from_value(value)?)
}
