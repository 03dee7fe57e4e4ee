//! Full session scenarios: upload, segment, color, recompose.

use super::fake_service::{FakeService, process_response, room_photo};
use crate::api::ApiError;
use crate::model::{Channel, Color, DisplayedImage, PngPayload};
use crate::{Message, Phase, Session, WorkflowError};

/// A session that has uploaded a photo and received the given segments.
fn segmented_session(service: &FakeService) -> Session {
    let mut session = Session::new();
    session
        .run(Message::UploadRequested(room_photo()), service)
        .unwrap();
    session.run(Message::ProcessRequested, service).unwrap();
    session
}

#[test]
fn test_upload_loads_image() {
    let service = FakeService::with_segments(&["a", "b"]);
    let mut session = Session::new();
    assert_eq!(session.phase(), Phase::Idle);
    assert!(!session.can_process());

    session
        .run(Message::UploadRequested(room_photo()), &service)
        .unwrap();

    assert_eq!(session.phase(), Phase::ImageLoaded);
    assert_eq!(session.image_url(), Some("/static/temp_image.png"));
    assert_eq!(
        session.displayed_image().src().as_deref(),
        Some("/static/temp_image.png")
    );
    assert!(session.can_process());
    assert!(!session.can_apply_all());
    assert_eq!(service.uploads.borrow()[0].file_name, "room.png");
}

#[test]
fn test_process_lists_segments_and_previews() {
    let service = FakeService::with_segments(&["a", "b", "c"]);
    let mut session = segmented_session(&service);

    assert_eq!(session.phase(), Phase::SegmentsReady);
    let rows = session.segment_rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].label, "Segment 1");
    assert_eq!(rows[2].label, "Segment 3");
    assert!(rows.iter().all(|row| row.indicator.is_none() && !row.selected));
    assert_eq!(session.selected_segment(), None);
    assert!(!session.is_busy());

    session.update(Message::SegmentSelected(2)).unwrap();
    assert_eq!(
        session.displayed_image(),
        &DisplayedImage::SegmentPreview(2, PngPayload::new("c"))
    );
    assert_eq!(
        session.displayed_image().src().as_deref(),
        Some("data:image/png;base64,c")
    );
    assert!(session.segment_rows()[2].selected);
}

#[test]
fn test_select_shows_default_or_committed_color() {
    let service = FakeService::with_segments(&["a", "b"]);
    let mut session = segmented_session(&service);

    session.update(Message::SegmentSelected(0)).unwrap();
    assert_eq!(session.active_color(), Color::WHITE);

    session.update(Message::SwatchClicked(5)).unwrap();
    session.update(Message::ApplyToSegment).unwrap();
    assert_eq!(session.active_color().to_hex(), "#ffcdd2");

    session.update(Message::SegmentSelected(1)).unwrap();
    assert_eq!(session.active_color(), Color::WHITE);
    assert_eq!(session.inputs().hex_text(), "#ffffff");

    session.update(Message::SegmentSelected(0)).unwrap();
    assert_eq!(session.active_color().to_hex(), "#ffcdd2");
    assert_eq!(session.inputs().slider(Channel::Green), 0xcd);
    assert_eq!(session.inputs().picker().value, "#ffcdd2");
}

#[test]
fn test_uncommitted_color_is_lost_on_navigation() {
    let service = FakeService::with_segments(&["a", "b"]);
    let mut session = segmented_session(&service);

    session.update(Message::SegmentSelected(0)).unwrap();
    session.update(Message::HexEdited("#123456".into())).unwrap();
    session.update(Message::SegmentSelected(1)).unwrap();
    session.update(Message::SegmentSelected(0)).unwrap();

    assert_eq!(session.active_color(), Color::WHITE);
    assert!(session.assignments().is_empty());
}

#[test]
fn test_slider_color_applied_to_segment() {
    let service = FakeService::with_segments(&["a", "b", "c"]);
    let mut session = segmented_session(&service);

    session.update(Message::SegmentSelected(0)).unwrap();
    session
        .update(Message::SliderEdited(Channel::Red, 17))
        .unwrap();
    session
        .update(Message::SliderEdited(Channel::Green, 34))
        .unwrap();
    session
        .update(Message::SliderEdited(Channel::Blue, 51))
        .unwrap();
    assert_eq!(session.inputs().hex_text(), "#112233");
    session.update(Message::ApplyToSegment).unwrap();

    let body = serde_json::to_value(session.apply_colors_request()).unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "segment_colors": { "0": "#112233" } })
    );
    assert_eq!(
        session.segment_rows()[0].indicator,
        Some(Color::new(0x11, 0x22, 0x33))
    );
}

#[test]
fn test_clear_removes_color() {
    let service = FakeService::with_segments(&["a", "b"]);
    let mut session = segmented_session(&service);

    session.update(Message::SegmentSelected(1)).unwrap();
    session.update(Message::PickerChanged("#abcdef".into())).unwrap();
    session.update(Message::ApplyToSegment).unwrap();
    assert_eq!(session.assignments().len(), 1);

    session.update(Message::ClearSegment).unwrap();
    assert!(session.apply_colors_request().segment_colors.is_empty());
    assert_eq!(session.active_color(), Color::WHITE);
    assert_eq!(session.segment_rows()[1].indicator, None);

    session.update(Message::SegmentSelected(0)).unwrap();
    session.update(Message::SegmentSelected(1)).unwrap();
    assert_eq!(session.active_color(), Color::WHITE);
}

#[test]
fn test_apply_and_clear_need_selection() {
    let service = FakeService::with_segments(&["a"]);
    let mut session = segmented_session(&service);

    assert!(matches!(
        session.update(Message::ApplyToSegment),
        Err(WorkflowError::NoSelection)
    ));
    assert!(matches!(
        session.update(Message::ClearSegment),
        Err(WorkflowError::NoSelection)
    ));
    assert!(session.assignments().is_empty());
}

#[test]
fn test_select_out_of_range() {
    let service = FakeService::with_segments(&["a", "b"]);
    let mut session = segmented_session(&service);

    assert!(matches!(
        session.update(Message::SegmentSelected(2)),
        Err(WorkflowError::OutOfRange { index: 2, count: 2 })
    ));
    assert_eq!(session.selected_segment(), None);
}

#[test]
fn test_invalid_hex_does_not_change_active_color() {
    let service = FakeService::with_segments(&["a"]);
    let mut session = segmented_session(&service);
    session.update(Message::SwatchClicked(0)).unwrap();

    assert!(matches!(
        session.update(Message::HexEdited("#f5f5f".into())),
        Err(WorkflowError::InvalidFormat(_))
    ));
    assert_eq!(session.active_color().to_hex(), "#f5f5f5");
    assert_eq!(session.inputs().picker().value, "#f5f5f5");
}

#[test]
fn test_apply_all_shows_composite() {
    let service = FakeService::with_segments(&["a", "b", "c"]);
    let mut session = segmented_session(&service);

    session.update(Message::SegmentSelected(0)).unwrap();
    session.update(Message::HexEdited("#112233".into())).unwrap();
    session.update(Message::ApplyToSegment).unwrap();
    session.update(Message::SegmentSelected(2)).unwrap();
    session.update(Message::HexEdited("#FFFFFF".into())).unwrap();
    session.update(Message::ApplyToSegment).unwrap();

    session.run(Message::ApplyAllRequested, &service).unwrap();

    let sent = service.apply_requests.borrow();
    assert_eq!(
        serde_json::to_value(&sent[0]).unwrap(),
        serde_json::json!({ "segment_colors": { "0": "#112233", "2": "#ffffff" } })
    );
    assert_eq!(session.phase(), Phase::Recomposed);
    assert_eq!(
        session.displayed_image().src().as_deref(),
        Some("data:image/png;base64,Y29sb3JlZA==")
    );
    assert!(!session.is_busy());
}

#[test]
fn test_recomposed_session_stays_editable() {
    let service = FakeService::with_segments(&["a", "b"]);
    let mut session = segmented_session(&service);
    session.run(Message::ApplyAllRequested, &service).unwrap();
    assert_eq!(session.phase(), Phase::Recomposed);

    session.update(Message::SegmentSelected(1)).unwrap();
    session.update(Message::SwatchClicked(3)).unwrap();
    session.update(Message::ApplyToSegment).unwrap();
    session.run(Message::ApplyAllRequested, &service).unwrap();

    assert_eq!(service.apply_requests.borrow().len(), 2);
    assert_eq!(
        service.apply_requests.borrow()[1].segment_colors[&1].to_hex(),
        "#9e9e9e"
    );
}

#[test]
fn test_segment_edits_leave_recomposed() {
    let service = FakeService::with_segments(&["a", "b"]);
    let mut session = segmented_session(&service);

    session.run(Message::ApplyAllRequested, &service).unwrap();
    session.update(Message::SegmentSelected(1)).unwrap();
    assert_eq!(session.phase(), Phase::SegmentsReady);
    assert_eq!(
        session.displayed_image(),
        &DisplayedImage::SegmentPreview(1, PngPayload::new("b"))
    );

    session.run(Message::ApplyAllRequested, &service).unwrap();
    session.update(Message::ApplyToSegment).unwrap();
    assert_eq!(session.phase(), Phase::SegmentsReady);

    session.run(Message::ApplyAllRequested, &service).unwrap();
    session.update(Message::ClearSegment).unwrap();
    assert_eq!(session.phase(), Phase::SegmentsReady);

    // Picking a color alone does not touch the composite
    session.run(Message::ApplyAllRequested, &service).unwrap();
    session.update(Message::SwatchClicked(0)).unwrap();
    assert_eq!(session.phase(), Phase::Recomposed);
}

#[test]
fn test_failed_apply_all_after_recompose_returns_to_segments_ready() {
    let mut service = FakeService::with_segments(&["a", "b"]);
    let mut session = segmented_session(&service);
    session.run(Message::ApplyAllRequested, &service).unwrap();
    assert_eq!(session.phase(), Phase::Recomposed);

    service.apply_reply = Err(ApiError::Service("no colors".into()));
    assert!(session.run(Message::ApplyAllRequested, &service).is_err());
    assert_eq!(session.phase(), Phase::SegmentsReady);
    assert!(!session.is_busy());
    assert!(session.last_error().is_some());
}

#[test]
fn test_reprocess_clears_committed_colors() {
    let service = FakeService::with_segments(&["a", "b", "c"]);
    let mut session = segmented_session(&service);
    session.update(Message::SegmentSelected(2)).unwrap();
    session.update(Message::SwatchClicked(1)).unwrap();
    session.update(Message::ApplyToSegment).unwrap();

    let mut service = service;
    service.process_reply = Ok(process_response(&["x", "y"]));
    session.run(Message::ProcessRequested, &service).unwrap();

    assert_eq!(session.phase(), Phase::SegmentsReady);
    assert_eq!(session.registry().len(), 2);
    assert!(session.assignments().is_empty());
    assert_eq!(session.selected_segment(), None);
    assert_eq!(session.active_color(), Color::WHITE);
    assert_eq!(
        session.displayed_image(),
        &DisplayedImage::Uploaded("/static/temp_image.png".into())
    );
}

#[test]
fn test_new_upload_discards_segments() {
    let service = FakeService::with_segments(&["a", "b"]);
    let mut session = segmented_session(&service);
    session.update(Message::SegmentSelected(0)).unwrap();
    session.update(Message::ApplyToSegment).unwrap();

    session
        .run(Message::UploadRequested(room_photo()), &service)
        .unwrap();

    assert_eq!(session.phase(), Phase::ImageLoaded);
    assert!(session.registry().is_empty());
    assert!(session.assignments().is_empty());
    assert!(!session.can_apply_all());
}

#[test]
fn test_upload_failure_leaves_idle() {
    let mut service = FakeService::with_segments(&["a"]);
    service.upload_reply = Err(ApiError::Service("No selected file".into()));
    let mut session = Session::new();

    let err = session
        .run(Message::UploadRequested(room_photo()), &service)
        .unwrap_err();
    assert!(matches!(err, WorkflowError::Network(ApiError::Service(_))));
    assert_eq!(session.phase(), Phase::Idle);
    assert!(!session.is_busy());
    assert!(session.last_error().unwrap().contains("No selected file"));
}

#[test]
fn test_process_failure_hides_progress_and_keeps_state() {
    let mut service = FakeService::with_segments(&["a"]);
    service.process_reply = Err(ApiError::Transport("connection refused".into()));
    let mut session = Session::new();
    session
        .run(Message::UploadRequested(room_photo()), &service)
        .unwrap();

    assert!(session.run(Message::ProcessRequested, &service).is_err());
    assert_eq!(session.phase(), Phase::ImageLoaded);
    assert!(!session.is_busy());
    assert!(session.can_process());

    // User retries manually once the service is back
    service.process_reply = Ok(process_response(&["a"]));
    session.run(Message::ProcessRequested, &service).unwrap();
    assert_eq!(session.phase(), Phase::SegmentsReady);
    assert_eq!(session.last_error(), None);
    assert_eq!(*service.process_calls.borrow(), 2);
}

#[test]
fn test_process_count_mismatch_is_a_failure() {
    let mut service = FakeService::with_segments(&["a", "b"]);
    let mut session = segmented_session(&service);
    session.update(Message::SegmentSelected(1)).unwrap();
    session.update(Message::ApplyToSegment).unwrap();

    let mut reply = process_response(&["x"]);
    reply.num_segments = 4;
    service.process_reply = Ok(reply);

    assert!(matches!(
        session.run(Message::ProcessRequested, &service),
        Err(WorkflowError::SegmentCountMismatch {
            expected: 4,
            actual: 1
        })
    ));
    assert!(!session.is_busy());
    assert_eq!(session.registry().len(), 2);
    assert_eq!(session.assignments().len(), 1);
    assert!(session.last_error().is_some());
}

#[test]
fn test_apply_all_failure_keeps_segments_ready() {
    let mut service = FakeService::with_segments(&["a"]);
    service.apply_reply = Err(ApiError::Status {
        status: 500,
        body: "boom".into(),
    });
    let mut session = segmented_session(&service);

    assert!(session.run(Message::ApplyAllRequested, &service).is_err());
    assert_eq!(session.phase(), Phase::SegmentsReady);
    assert!(!session.is_busy());
    assert!(session.can_apply_all());
    assert_eq!(
        session.displayed_image(),
        &DisplayedImage::Uploaded("/static/temp_image.png".into())
    );
}
