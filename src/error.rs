//! Error types for the segment-color workflow.

use thiserror::Error;

use crate::api::ApiError;

/// Errors produced while parsing color text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Text is not `#rrggbb` (the `#` is optional)
    #[error("Invalid color format: {0:?}")]
    InvalidFormat(String),
}

/// Phase of an outbound request, used to report guard violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Image upload
    Upload,
    /// Segmentation
    Process,
    /// Recomposition with committed colors
    ApplyAll,
}

impl RequestKind {
    /// Human-readable name for logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            RequestKind::Upload => "upload",
            RequestKind::Process => "process",
            RequestKind::ApplyAll => "apply-all",
        }
    }
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors surfaced by the workflow orchestrator.
///
/// None of these are fatal: the session stays interactive after any of them.
#[derive(Error, Debug)]
pub enum WorkflowError {
    /// Malformed color text from the hex field or native picker
    #[error(transparent)]
    InvalidFormat(#[from] ColorError),

    /// Segment index outside the current segment set
    #[error("Segment {index} is out of range (segment count: {count})")]
    OutOfRange {
        /// The rejected index
        index: usize,
        /// Number of segments in the current run
        count: usize,
    },

    /// Apply or clear attempted with no segment selected
    #[error("No segment is selected")]
    NoSelection,

    /// Palette swatch index outside the preset list
    #[error("Swatch {index} does not exist (palette size: {len})")]
    SwatchOutOfRange {
        /// The rejected index
        index: usize,
        /// Number of preset swatches
        len: usize,
    },

    /// Action not available in the current phase
    #[error("Cannot {action} while {phase}")]
    InvalidTransition {
        /// The attempted action
        action: &'static str,
        /// Description of the current phase
        phase: &'static str,
    },

    /// A request is already outstanding
    #[error("A {0} request is already in flight")]
    RequestInFlight(RequestKind),

    /// A reply arrived for a request that was never issued
    #[error("Received a {0} response with no matching request in flight")]
    UnexpectedResponse(RequestKind),

    /// Segmentation reply with inconsistent preview count
    #[error("Service reported {expected} segments but sent {actual} preview images")]
    SegmentCountMismatch {
        /// `num_segments` from the reply
        expected: usize,
        /// Length of `highlighted_images`
        actual: usize,
    },

    /// Any of the outbound requests failed
    #[error("Network failure: {0}")]
    Network(#[from] ApiError),
}

impl WorkflowError {
    /// Create an out-of-range error.
    pub fn out_of_range(index: usize, count: usize) -> Self {
        Self::OutOfRange { index, count }
    }

    /// Create an invalid transition error.
    pub fn invalid_transition(action: &'static str, phase: &'static str) -> Self {
        Self::InvalidTransition { action, phase }
    }
}
