//! Client side of the upload/segmentation/recomposition service.

mod client;
mod error;
mod types;

#[cfg(not(target_arch = "wasm32"))]
pub use client::HttpCollaborator;
pub use client::Collaborator;
pub use error::ApiError;
pub use types::{
    ApplyColorsRequest, ApplyColorsResponse, ProcessResponse, UploadFile, UploadResponse,
    decode_reply,
};
