//! RoomTint session - the segment-color workflow.
//!
//! A `Session` owns everything one user interaction needs:
//! - the workflow phase (`Idle` → `ImageLoaded` → `SegmentsReady` ⇄ `Recomposed`)
//! - the segment set with the current selection
//! - the committed segment colors
//! - the active color and the inputs mirroring it
//! - the single outstanding service request, if any (the progress indicator)
//!
//! Messages are handled one at a time. Actions that need the service return a
//! [`Request`]; the adapter runs it and feeds the reply back as a message.
//! Only one request may be in flight; a second one is rejected instead of
//! racing the first.

use web_time::Instant;

use crate::api::{
    ApiError, ApplyColorsRequest, ApplyColorsResponse, Collaborator, ProcessResponse, UploadFile,
    UploadResponse,
};
use crate::error::{RequestKind, WorkflowError};
use crate::handlers;
use crate::message::{Message, Request};
use crate::model::{Color, DisplayedImage, Palette, PngPayload, SegmentIndex};
use crate::state::{AssignmentStore, SegmentRegistry};
use crate::widget_state::ColorInputs;

// ============================================================================
// Phase
// ============================================================================

/// Where the session is in the upload → segment → recolor workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No image uploaded
    #[default]
    Idle,
    /// Image uploaded, not segmented yet
    ImageLoaded,
    /// Segments available for coloring
    SegmentsReady,
    /// A recolored preview is shown; segments remain editable
    Recomposed,
}

impl Phase {
    /// Description used in transition errors and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "no image is loaded",
            Phase::ImageLoaded => "the image is not segmented",
            Phase::SegmentsReady => "segments are ready",
            Phase::Recomposed => "a recolored preview is shown",
        }
    }

    /// Whether an uploaded image exists.
    pub fn has_image(&self) -> bool {
        !matches!(self, Phase::Idle)
    }

    /// Whether segments exist.
    pub fn has_segments(&self) -> bool {
        matches!(self, Phase::SegmentsReady | Phase::Recomposed)
    }
}

/// The request currently outstanding.
#[derive(Debug, Clone, Copy)]
struct PendingRequest {
    kind: RequestKind,
    started: Instant,
}

/// One row of the segment list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentRow {
    /// Segment index
    pub index: SegmentIndex,
    /// `Segment N`, one-based
    pub label: String,
    /// Committed color, `None` renders as transparent
    pub indicator: Option<Color>,
    /// Whether this is the selected segment
    pub selected: bool,
}

// ============================================================================
// Session
// ============================================================================

/// The workflow orchestrator.
#[derive(Debug, Default)]
pub struct Session {
    phase: Phase,
    /// URL of the uploaded original
    image_url: Option<String>,
    displayed: DisplayedImage,
    registry: SegmentRegistry,
    assignments: AssignmentStore,
    inputs: ColorInputs,
    palette: Palette,
    pending: Option<PendingRequest>,
    last_error: Option<String>,
}

impl Session {
    /// Start a fresh session with no image and white inputs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle one message.
    ///
    /// Returns the service request to run, if the message started one.
    pub fn update(&mut self, message: Message) -> Result<Option<Request>, WorkflowError> {
        log::trace!("📨 {}", message.name());
        match message {
            Message::UploadRequested(file) => self.begin_upload(file).map(Some),
            Message::UploadFinished(reply) => self.finish_upload(reply).map(|()| None),
            Message::ProcessRequested => self.begin_process().map(Some),
            Message::ProcessFinished(reply) => self.finish_process(reply).map(|()| None),
            Message::ApplyAllRequested => self.begin_apply_all().map(Some),
            Message::ApplyAllFinished(reply) => self.finish_apply_all(reply).map(|()| None),

            Message::SegmentSelected(index) => {
                self.displayed = handlers::handle_select_segment(
                    index,
                    &mut self.registry,
                    &self.assignments,
                    &mut self.inputs,
                )?;
                self.resume_editing();
                Ok(None)
            }
            Message::ApplyToSegment => {
                handlers::handle_apply_to_segment(
                    &self.registry,
                    &mut self.assignments,
                    &self.inputs,
                )?;
                self.resume_editing();
                Ok(None)
            }
            Message::ClearSegment => {
                handlers::handle_clear_segment(
                    &self.registry,
                    &mut self.assignments,
                    &mut self.inputs,
                )?;
                self.resume_editing();
                Ok(None)
            }

            Message::SwatchClicked(index) => {
                handlers::handle_swatch(index, &self.palette, &mut self.inputs)?;
                Ok(None)
            }
            Message::PickerChanged(value) => {
                handlers::handle_picker(&value, &mut self.inputs)?;
                Ok(None)
            }
            Message::HexEdited(text) => {
                handlers::handle_hex(&text, &mut self.inputs)?;
                Ok(None)
            }
            Message::SliderEdited(channel, raw) => {
                handlers::handle_slider(channel, raw, &mut self.inputs);
                Ok(None)
            }
        }
    }

    /// Handle a message and run any request it starts against `api` until idle.
    pub fn run(&mut self, message: Message, api: &dyn Collaborator) -> Result<(), WorkflowError> {
        let mut next = self.update(message)?;
        while let Some(request) = next.take() {
            let reply = request.dispatch(api);
            next = self.update(reply)?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Service round-trips
    // ------------------------------------------------------------------------

    fn begin(&mut self, kind: RequestKind) -> Result<(), WorkflowError> {
        if let Some(pending) = self.pending {
            log::warn!("Ignoring {} request, {} still in flight", kind, pending.kind);
            return Err(WorkflowError::RequestInFlight(pending.kind));
        }
        log::info!("⏳ Starting {} request", kind);
        self.pending = Some(PendingRequest {
            kind,
            started: Instant::now(),
        });
        Ok(())
    }

    /// Hide the progress indicator for `kind`, whatever the outcome.
    fn finish(&mut self, kind: RequestKind) -> Result<(), WorkflowError> {
        match self.pending {
            Some(pending) if pending.kind == kind => {
                self.pending = None;
                log::debug!("⌛ {} request done in {:.1?}", kind, pending.started.elapsed());
                Ok(())
            }
            _ => Err(WorkflowError::UnexpectedResponse(kind)),
        }
    }

    fn fail(&mut self, kind: RequestKind, error: WorkflowError) -> WorkflowError {
        log::error!("❌ {} failed: {}", kind, error);
        self.last_error = Some(error.to_string());
        error
    }

    fn begin_upload(&mut self, file: UploadFile) -> Result<Request, WorkflowError> {
        self.begin(RequestKind::Upload)?;
        log::debug!("Uploading {} ({} bytes)", file.file_name, file.bytes.len());
        Ok(Request::Upload(file))
    }

    fn finish_upload(
        &mut self,
        reply: Result<UploadResponse, ApiError>,
    ) -> Result<(), WorkflowError> {
        self.finish(RequestKind::Upload)?;
        let response = reply.map_err(|e| self.fail(RequestKind::Upload, e.into()))?;

        // A new photo invalidates every segment and color of the previous one
        self.registry.clear();
        self.assignments.reset(0);
        self.inputs.reset();
        self.displayed = DisplayedImage::Uploaded(response.image_url.clone());
        self.image_url = Some(response.image_url);
        self.last_error = None;
        self.set_phase(Phase::ImageLoaded);
        Ok(())
    }

    fn begin_process(&mut self) -> Result<Request, WorkflowError> {
        if !self.phase.has_image() {
            return Err(WorkflowError::invalid_transition("process", self.phase.name()));
        }
        self.begin(RequestKind::Process)?;
        Ok(Request::Process)
    }

    fn finish_process(
        &mut self,
        reply: Result<ProcessResponse, ApiError>,
    ) -> Result<(), WorkflowError> {
        self.finish(RequestKind::Process)?;
        let response = reply.map_err(|e| self.fail(RequestKind::Process, e.into()))?;

        let num_segments = response.num_segments;
        self.registry
            .initialize(num_segments, response.previews())
            .map_err(|e| self.fail(RequestKind::Process, e))?;

        // Indices of an earlier run no longer name the same regions
        self.assignments.reset(num_segments);
        self.inputs.reset();
        if let Some(url) = &self.image_url {
            self.displayed = DisplayedImage::Uploaded(url.clone());
        }
        self.last_error = None;
        self.set_phase(Phase::SegmentsReady);
        Ok(())
    }

    fn begin_apply_all(&mut self) -> Result<Request, WorkflowError> {
        if !self.phase.has_segments() {
            return Err(WorkflowError::invalid_transition("apply colors", self.phase.name()));
        }
        self.begin(RequestKind::ApplyAll)?;
        let request = self.apply_colors_request();
        log::debug!("Sending {} segment colors", request.segment_colors.len());
        Ok(Request::ApplyColors(request))
    }

    fn finish_apply_all(
        &mut self,
        reply: Result<ApplyColorsResponse, ApiError>,
    ) -> Result<(), WorkflowError> {
        self.finish(RequestKind::ApplyAll)?;
        let response = reply.map_err(|e| {
            self.resume_editing();
            self.fail(RequestKind::ApplyAll, e.into())
        })?;

        self.displayed = DisplayedImage::Composite(PngPayload::new(response.colored_image));
        self.last_error = None;
        self.set_phase(Phase::Recomposed);
        Ok(())
    }

    /// Segment edits and failed recompositions drop back to `SegmentsReady`.
    fn resume_editing(&mut self) {
        if self.phase == Phase::Recomposed {
            self.set_phase(Phase::SegmentsReady);
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            log::info!("🔀 {:?} -> {:?}", self.phase, phase);
        }
        self.phase = phase;
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Current workflow phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Body of the recomposition request for the current colors.
    pub fn apply_colors_request(&self) -> ApplyColorsRequest {
        ApplyColorsRequest {
            segment_colors: self.assignments.snapshot(),
        }
    }

    /// What the image view shows.
    pub fn displayed_image(&self) -> &DisplayedImage {
        &self.displayed
    }

    /// URL of the uploaded original.
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// The active color and its mirrored inputs.
    pub fn inputs(&self) -> &ColorInputs {
        &self.inputs
    }

    /// Shorthand for `inputs().active()`.
    pub fn active_color(&self) -> Color {
        self.inputs.active()
    }

    /// Swatch palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Segments of the current run.
    pub fn registry(&self) -> &SegmentRegistry {
        &self.registry
    }

    /// Committed colors.
    pub fn assignments(&self) -> &AssignmentStore {
        &self.assignments
    }

    /// Selected segment, if any.
    pub fn selected_segment(&self) -> Option<SegmentIndex> {
        self.registry.selected()
    }

    /// Rows for the segment list, in index order.
    pub fn segment_rows(&self) -> Vec<SegmentRow> {
        let selected = self.registry.selected();
        self.registry
            .segments()
            .iter()
            .map(|segment| SegmentRow {
                index: segment.index,
                label: segment.label(),
                indicator: self.assignments.get(segment.index),
                selected: selected == Some(segment.index),
            })
            .collect()
    }

    /// Whether the progress indicator is shown.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// The request in flight, if any.
    pub fn pending_request(&self) -> Option<RequestKind> {
        self.pending.map(|pending| pending.kind)
    }

    /// Whether the Process control is enabled.
    pub fn can_process(&self) -> bool {
        self.phase.has_image() && !self.is_busy()
    }

    /// Whether the Apply-all control is enabled.
    pub fn can_apply_all(&self) -> bool {
        self.phase.has_segments() && !self.is_busy()
    }

    /// Message of the last failed service round-trip, cleared by the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
