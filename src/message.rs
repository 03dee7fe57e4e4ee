//! Workflow message types.
//!
//! All user actions and service replies are represented as messages in the
//! Elm architecture style. A UI adapter translates raw input events into
//! these and hands them to [`Session::update`](crate::Session::update).

use crate::api::{
    ApiError, ApplyColorsRequest, ApplyColorsResponse, Collaborator, ProcessResponse, UploadFile,
    UploadResponse,
};
use crate::error::RequestKind;
use crate::model::{Channel, SegmentIndex};

/// Messages that can be sent to update the session.
#[derive(Debug, Clone)]
pub enum Message {
    // Service round-trips
    /// User picked a photo to upload
    UploadRequested(UploadFile),
    /// Upload reply arrived
    UploadFinished(Result<UploadResponse, ApiError>),
    /// User asked for segmentation
    ProcessRequested,
    /// Segmentation reply arrived
    ProcessFinished(Result<ProcessResponse, ApiError>),
    /// User asked for a recolored preview
    ApplyAllRequested,
    /// Recomposition reply arrived
    ApplyAllFinished(Result<ApplyColorsResponse, ApiError>),

    // Segment list
    /// Segment clicked in the list
    SegmentSelected(SegmentIndex),
    /// Commit the active color to the selected segment
    ApplyToSegment,
    /// Remove the committed color of the selected segment
    ClearSegment,

    // Color inputs
    /// Palette swatch clicked, by position in the palette
    SwatchClicked(usize),
    /// Native picker changed
    PickerChanged(String),
    /// Hex field edited
    HexEdited(String),
    /// A slider moved (raw reading, clamped to 0-255)
    SliderEdited(Channel, i64),
}

impl Message {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Message::UploadRequested(_) => "UploadRequested",
            Message::UploadFinished(_) => "UploadFinished",
            Message::ProcessRequested => "ProcessRequested",
            Message::ProcessFinished(_) => "ProcessFinished",
            Message::ApplyAllRequested => "ApplyAllRequested",
            Message::ApplyAllFinished(_) => "ApplyAllFinished",
            Message::SegmentSelected(_) => "SegmentSelected",
            Message::ApplyToSegment => "ApplyToSegment",
            Message::ClearSegment => "ClearSegment",
            Message::SwatchClicked(_) => "SwatchClicked",
            Message::PickerChanged(_) => "PickerChanged",
            Message::HexEdited(_) => "HexEdited",
            Message::SliderEdited(..) => "SliderEdited",
        }
    }
}

/// Outbound request the adapter must run; its reply comes back as a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// `POST /` with the photo
    Upload(UploadFile),
    /// `POST /process_image`
    Process,
    /// `POST /apply_colors` with the committed colors
    ApplyColors(ApplyColorsRequest),
}

impl Request {
    /// Which workflow step this request belongs to.
    pub fn kind(&self) -> RequestKind {
        match self {
            Request::Upload(_) => RequestKind::Upload,
            Request::Process => RequestKind::Process,
            Request::ApplyColors(_) => RequestKind::ApplyAll,
        }
    }

    /// Run the request and wrap the reply as the matching `*Finished` message.
    pub fn dispatch(&self, api: &dyn Collaborator) -> Message {
        match self {
            Request::Upload(file) => Message::UploadFinished(api.upload(file)),
            Request::Process => Message::ProcessFinished(api.process_image()),
            Request::ApplyColors(body) => Message::ApplyAllFinished(api.apply_colors(body)),
        }
    }
}
