//! RoomTint - segment-based room recoloring client
//!
//! Uploads a room photo to a segmentation service, lets the user pick a color
//! per segment (walls, floor, ...) through a swatch palette, hex field, RGB
//! sliders or a native picker, and requests a recolored preview.
//!
//! The [`Session`] is the whole client-side workflow: UI adapters translate
//! input events into [`Message`]s, run the [`Request`]s it hands back against
//! a [`Collaborator`](api::Collaborator), and render from its queries.

pub mod api;
mod app;
pub mod color_utils;
pub mod config;
pub mod constants;
mod error;
mod handlers;
mod message;
pub mod model;
pub mod state;
pub mod widget_state;

#[cfg(test)]
mod tests;

pub use app::{Phase, SegmentRow, Session};
pub use error::{ColorError, RequestKind, WorkflowError};
pub use message::{Message, Request};
