//! Committed segment colors.

use std::collections::BTreeMap;

use crate::error::WorkflowError;
use crate::model::{Color, SegmentIndex};

/// Mapping from segment index to the color the user applied to it.
///
/// A missing entry means "no color" (the segment is left as photographed),
/// not "white". Entries only appear through [`AssignmentStore::apply`] and
/// only disappear through [`AssignmentStore::clear`] or a reset; selecting
/// segments never touches the store.
#[derive(Debug, Clone, Default)]
pub struct AssignmentStore {
    colors: BTreeMap<SegmentIndex, Color>,
    /// Size of the segment set the keys must stay within
    segment_count: usize,
}

impl AssignmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every entry and bind the store to a new segment set.
    pub fn reset(&mut self, segment_count: usize) {
        if !self.colors.is_empty() {
            log::debug!("🗑️ Discarding {} committed colors", self.colors.len());
        }
        self.colors.clear();
        self.segment_count = segment_count;
    }

    /// Commit `color` for the selected segment, replacing any earlier color.
    ///
    /// Returns the segment that received the color.
    pub fn apply(
        &mut self,
        selection: Option<SegmentIndex>,
        color: Color,
    ) -> Result<SegmentIndex, WorkflowError> {
        let index = selection.ok_or(WorkflowError::NoSelection)?;
        self.set(index, color)?;
        Ok(index)
    }

    /// Remove the committed color of the selected segment, if it has one.
    ///
    /// Returns the removed color.
    pub fn clear(
        &mut self,
        selection: Option<SegmentIndex>,
    ) -> Result<Option<Color>, WorkflowError> {
        let index = selection.ok_or(WorkflowError::NoSelection)?;
        let removed = self.colors.remove(&index);
        log::debug!("🧽 Cleared segment {} (had {:?})", index, removed);
        Ok(removed)
    }

    /// Set the color of `index` directly.
    pub fn set(&mut self, index: SegmentIndex, color: Color) -> Result<Option<Color>, WorkflowError> {
        if index >= self.segment_count {
            return Err(WorkflowError::out_of_range(index, self.segment_count));
        }
        let previous = self.colors.insert(index, color);
        log::debug!("✅ Segment {} colored {}", index, color);
        Ok(previous)
    }

    /// Committed color of a segment.
    pub fn get(&self, index: SegmentIndex) -> Option<Color> {
        self.colors.get(&index).copied()
    }

    /// Committed color of a segment, or `default` when unset.
    pub fn color_or(&self, index: SegmentIndex, default: Color) -> Color {
        self.get(index).unwrap_or(default)
    }

    /// Copy of every committed color, used for the recomposition request.
    pub fn snapshot(&self) -> BTreeMap<SegmentIndex, Color> {
        self.colors.clone()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Size of the segment set this store is bound to.
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }
}
