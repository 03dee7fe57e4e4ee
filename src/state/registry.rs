//! Segments discovered by the last segmentation run, plus the current selection.

use crate::error::WorkflowError;
use crate::model::{PngPayload, Segment, SegmentIndex};

/// The segment set of one processing run and the selected segment.
///
/// A new run replaces every segment; indices from an earlier run are never
/// valid afterwards.
#[derive(Debug, Clone, Default)]
pub struct SegmentRegistry {
    segments: Vec<Segment>,
    selected: Option<SegmentIndex>,
}

impl SegmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the segment set and drop the selection.
    ///
    /// `previews` must hold exactly one highlighted image per segment.
    pub fn initialize(
        &mut self,
        num_segments: usize,
        previews: Vec<PngPayload>,
    ) -> Result<(), WorkflowError> {
        if previews.len() != num_segments {
            return Err(WorkflowError::SegmentCountMismatch {
                expected: num_segments,
                actual: previews.len(),
            });
        }

        self.segments = previews
            .into_iter()
            .enumerate()
            .map(|(index, preview)| Segment::new(index, preview))
            .collect();
        self.selected = None;
        log::info!("🧩 {} segments ready", num_segments);
        Ok(())
    }

    /// Forget all segments (a new image was uploaded).
    pub fn clear(&mut self) {
        self.segments.clear();
        self.selected = None;
    }

    /// Number of segments in the current run.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether `index` names a segment of the current run.
    pub fn contains(&self, index: SegmentIndex) -> bool {
        index < self.segments.len()
    }

    /// All segments in index order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn get(&self, index: SegmentIndex) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Make `index` the selected segment.
    pub fn select(&mut self, index: SegmentIndex) -> Result<&Segment, WorkflowError> {
        let count = self.segments.len();
        let segment = self
            .segments
            .get(index)
            .ok_or_else(|| WorkflowError::out_of_range(index, count))?;
        self.selected = Some(index);
        log::debug!("👆 Selected {}", segment.label());
        Ok(segment)
    }

    /// Currently selected segment index.
    pub fn selected(&self) -> Option<SegmentIndex> {
        self.selected
    }

    /// Currently selected segment.
    pub fn selected_segment(&self) -> Option<&Segment> {
        self.selected.and_then(|index| self.segments.get(index))
    }
}
