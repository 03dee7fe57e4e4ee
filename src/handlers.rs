//! Message handlers for the segment list and the color inputs.
//!
//! Each handler takes only the pieces of session state it needs, keeping
//! `Session::update` a thin dispatcher.

use crate::constants::DEFAULT_COLOR;
use crate::error::WorkflowError;
use crate::model::{Channel, Color, DisplayedImage, Palette, SegmentIndex};
use crate::state::{AssignmentStore, SegmentRegistry};
use crate::widget_state::{ColorInputs, InputSource};

/// Select a segment: show its preview and load its committed color (white if unset).
///
/// Reads the assignment store but never writes to it.
pub fn handle_select_segment(
    index: SegmentIndex,
    registry: &mut SegmentRegistry,
    assignments: &AssignmentStore,
    inputs: &mut ColorInputs,
) -> Result<DisplayedImage, WorkflowError> {
    let segment = registry.select(index)?;
    let preview = DisplayedImage::SegmentPreview(index, segment.preview.clone());
    let color = assignments.color_or(index, DEFAULT_COLOR);
    inputs.set_active_color(color, InputSource::Segment);
    Ok(preview)
}

/// Commit the active color to the selected segment.
pub fn handle_apply_to_segment(
    registry: &SegmentRegistry,
    assignments: &mut AssignmentStore,
    inputs: &ColorInputs,
) -> Result<SegmentIndex, WorkflowError> {
    assignments.apply(registry.selected(), inputs.active())
}

/// Remove the selected segment's color and reset the inputs to white.
pub fn handle_clear_segment(
    registry: &SegmentRegistry,
    assignments: &mut AssignmentStore,
    inputs: &mut ColorInputs,
) -> Result<Option<Color>, WorkflowError> {
    let removed = assignments.clear(registry.selected())?;
    inputs.reset();
    Ok(removed)
}

/// Palette swatch clicked.
pub fn handle_swatch(
    index: usize,
    palette: &Palette,
    inputs: &mut ColorInputs,
) -> Result<Color, WorkflowError> {
    let color = palette.get(index).ok_or(WorkflowError::SwatchOutOfRange {
        index,
        len: palette.len(),
    })?;
    inputs.set_active_color(color, InputSource::Swatch);
    Ok(color)
}

/// Native picker changed.
pub fn handle_picker(value: &str, inputs: &mut ColorInputs) -> Result<Color, WorkflowError> {
    inputs.edit_picker(value).map_err(|e| {
        log::warn!("Ignoring picker value: {}", e);
        WorkflowError::from(e)
    })
}

/// Hex field edited. Partial or malformed text leaves the active color unchanged.
pub fn handle_hex(text: &str, inputs: &mut ColorInputs) -> Result<Color, WorkflowError> {
    inputs.edit_hex(text).map_err(|e| {
        log::debug!("Hex field not a color yet: {}", e);
        WorkflowError::from(e)
    })
}

/// A slider moved.
pub fn handle_slider(channel: Channel, raw: i64, inputs: &mut ColorInputs) -> Color {
    inputs.edit_slider(channel, raw)
}
