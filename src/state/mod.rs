//! Session state: the segment set and the committed colors.

mod assignments;
mod registry;

pub use assignments::AssignmentStore;
pub use registry::SegmentRegistry;
