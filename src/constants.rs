//! Global constants for the RoomTint client

use crate::model::Color;

/// Color shown by every color input when a segment has no committed color
pub const DEFAULT_COLOR: Color = Color::WHITE;

/// Base URL of the upload/segmentation service when none is configured
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Request timeout in seconds (segmentation can take a while)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Output file for the recomposited preview written by the native driver
pub const DEFAULT_OUTPUT_PATH: &str = "composite.png";

/// Service endpoints, relative to the base URL
pub mod endpoint {
    /// Multipart image upload
    pub const UPLOAD: &str = "/";
    /// Segmentation of the last uploaded image
    pub const PROCESS_IMAGE: &str = "/process_image";
    /// Recomposition with the committed segment colors
    pub const APPLY_COLORS: &str = "/apply_colors";
}

/// Multipart form field carrying the uploaded image
pub const UPLOAD_FIELD: &str = "file";

/// Prefix turning a base64 PNG payload into a displayable image source
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";
