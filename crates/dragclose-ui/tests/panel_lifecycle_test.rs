//! Attach, programmatic open/close, blocking and enable/disable.

use dragclose_testing::{
    EngineCall, FakeCaptureEngine, ListenerEvent, PanelTestRule, RecordingHost,
    RecordingListener, CONTAINER_ID, HANDLE_ID,
};
use dragclose_ui::{
    CaptureEngine, ConfigurationError, DragState, InterceptResult, PanelConfig, PanelController,
    PanelGeometry, PointerEvent, PointerEventKind,
};
use dragclose_ui_graphics::{EdgeInsets, Point, Rect, Size};

fn host_with(elements: &[(u64, Rect)]) -> RecordingHost {
    elements
        .iter()
        .fold(RecordingHost::new(), |host, (id, bounds)| {
            host.with_element(*id, *bounds)
        })
}

#[test]
fn attach_requires_both_ids() {
    let host = host_with(&[(CONTAINER_ID, Rect::new(0.0, 0.0, 360.0, 640.0))]);
    let mut panel =
        PanelController::new(PanelConfig::default(), FakeCaptureEngine::default(), host);
    assert_eq!(
        panel.attach(PanelGeometry::new(640.0, 0.0, 0.0)),
        Err(ConfigurationError::MissingContainerId)
    );

    panel.set_container_id(CONTAINER_ID);
    assert_eq!(
        panel.attach(PanelGeometry::new(640.0, 0.0, 0.0)),
        Err(ConfigurationError::MissingHandleId)
    );
    assert!(!panel.is_attached());
}

#[test]
fn attach_requires_elements_in_layout() {
    let container = Rect::new(0.0, 0.0, 360.0, 640.0);
    let config = PanelConfig::new(CONTAINER_ID, HANDLE_ID);

    let mut panel = PanelController::new(
        config,
        FakeCaptureEngine::default(),
        host_with(&[(CONTAINER_ID, container)]),
    );
    assert_eq!(
        panel.attach(PanelGeometry::new(640.0, 0.0, 0.0)),
        Err(ConfigurationError::HandleNotFound(HANDLE_ID))
    );

    let mut panel = PanelController::new(
        config,
        FakeCaptureEngine::default(),
        host_with(&[(HANDLE_ID, container)]),
    );
    let err = panel
        .attach(PanelGeometry::new(640.0, 0.0, 0.0))
        .unwrap_err();
    assert_eq!(err, ConfigurationError::ContainerNotFound(CONTAINER_ID));
    assert_eq!(
        err.to_string(),
        "draggable container 1 not found in host layout"
    );
}

#[test]
fn attach_to_layout_reads_container_bounds() {
    let container = Rect::new(16.0, 24.0, 328.0, 600.0);
    let host = host_with(&[
        (CONTAINER_ID, container),
        (HANDLE_ID, Rect::new(16.0, 24.0, 328.0, 80.0)),
    ]);
    let mut panel = PanelController::new(
        PanelConfig::new(CONTAINER_ID, HANDLE_ID),
        FakeCaptureEngine::default().with_view(CONTAINER_ID, container),
        host,
    );
    let padding = EdgeInsets::from_components(16.0, 24.0, 16.0, 16.0);
    panel
        .attach_to_layout(Size::new(360.0, 640.0), padding)
        .expect("attach");

    let geometry = panel.geometry().expect("geometry");
    assert_eq!(geometry.draggable_range, 640.0);
    assert_eq!(geometry.open_position(), Point::new(16.0, 24.0));
    assert_eq!(panel.decisions().clamp_vertical(0.0), 24.0);
    assert_eq!(panel.open_panel(), Some(Point::new(16.0, 24.0)));
}

#[test]
fn unattached_panel_is_inert() {
    let mut panel = PanelController::new(
        PanelConfig::new(CONTAINER_ID, HANDLE_ID),
        FakeCaptureEngine::default(),
        RecordingHost::new(),
    );
    assert!(!panel.route_touch(&PointerEvent::down(10.0, 10.0)));
    assert_eq!(
        panel.route_intercept_check(&PointerEvent::down(10.0, 10.0)),
        InterceptResult::Pass
    );
    assert_eq!(panel.open_panel(), None);
    assert!(panel.engine().calls().is_empty());
}

#[test]
fn close_panel_blocks_input_and_finishes() {
    let mut rule = PanelTestRule::new(1000.0);
    assert_eq!(rule.panel_mut().close_panel(), Some(Point::new(0.0, 1000.0)));
    assert!(rule.panel().is_ui_blocked());
    assert_eq!(rule.engine().state(), DragState::Settling);
    assert!(rule.host().frame_requests() > 0);

    let calls_before = rule.engine().calls().len();
    assert!(rule.press(180.0, 50.0));
    assert!(rule.move_to(180.0, 400.0, 16));
    assert_eq!(
        rule.intercept(PointerEventKind::Move, 180.0, 420.0, 16),
        InterceptResult::Consume
    );
    let forwarded = &rule.engine().calls()[calls_before..];
    assert!(forwarded.is_empty(), "blocked events reached the engine: {forwarded:?}");

    rule.pump_frames();
    assert_eq!(rule.panel().drag_offset(), 1000.0);
    assert_eq!(rule.listener().count(ListenerEvent::ViewClosed), 1);
    assert_eq!(rule.host().finish_count(), 1);
}

#[test]
fn blocked_events_are_marked_consumed() {
    let mut rule = PanelTestRule::new(1000.0);
    rule.panel_mut().close_panel();
    let event = PointerEvent::down(180.0, 50.0);
    assert!(rule.panel_mut().route_touch(&event));
    assert!(event.is_consumed());
}

#[test]
fn open_panel_is_idempotent() {
    let mut rule = PanelTestRule::new(1000.0);
    let first = rule.panel_mut().open_panel();
    let second = rule.panel_mut().open_panel();
    assert_eq!(first, Some(Point::new(0.0, 0.0)));
    assert_eq!(first, second);
    assert!(!rule.panel().is_ui_blocked());
}

#[test]
fn open_unblocks_before_animation_ends() {
    let mut rule = PanelTestRule::new(1000.0);
    rule.panel_mut().close_panel();
    for _ in 0..3 {
        rule.panel_mut().on_frame();
    }
    rule.panel_mut().open_panel();
    assert!(!rule.panel().is_ui_blocked());
    assert!(rule.engine().is_settling());

    rule.pump_frames();
    assert_eq!(rule.panel().drag_offset(), 0.0);
    assert_eq!(rule.listener().count(ListenerEvent::ViewClosed), 0);
    assert_eq!(rule.host().finish_count(), 0);
}

#[test]
fn intercept_needs_slop_and_handle() {
    let mut rule = PanelTestRule::new(1000.0);
    assert_eq!(
        rule.intercept(PointerEventKind::Down, 180.0, 50.0, 0),
        InterceptResult::Pass
    );
    assert_eq!(
        rule.intercept(PointerEventKind::Move, 180.0, 54.0, 16),
        InterceptResult::Pass
    );
    assert_eq!(
        rule.intercept(PointerEventKind::Move, 180.0, 70.0, 16),
        InterceptResult::Intercept
    );
    assert_eq!(
        rule.listener().events(),
        vec![ListenerEvent::StartDragging]
    );
}

#[test]
fn intercept_ignores_drags_outside_handle() {
    let mut rule = PanelTestRule::new(1000.0);
    rule.intercept(PointerEventKind::Down, 180.0, 500.0, 0);
    assert_eq!(
        rule.intercept(PointerEventKind::Move, 180.0, 540.0, 16),
        InterceptResult::Pass
    );
}

#[test]
fn disabling_cancels_and_keeps_position() {
    let mut rule = PanelTestRule::new(1000.0);
    rule.press(180.0, 50.0);
    rule.move_to(180.0, 300.0, 16);
    assert_eq!(rule.panel().drag_offset(), 250.0);

    rule.panel_mut().set_enabled(false);
    assert_eq!(
        rule.intercept(PointerEventKind::Move, 180.0, 320.0, 16),
        InterceptResult::Pass
    );
    assert!(rule.engine().calls().contains(&EngineCall::Cancel));
    assert_eq!(rule.engine().state(), DragState::Idle);
    assert_eq!(rule.panel().drag_offset(), 250.0);
    assert!(rule.engine().settle_targets().is_empty());
}

#[test]
fn close_on_click_is_opt_in() {
    let mut rule = PanelTestRule::new(1000.0);
    assert!(!rule.panel_mut().on_handle_click());
    assert!(!rule.panel().is_ui_blocked());

    rule.panel_mut().set_close_on_click(true);
    assert!(rule.panel().close_on_click());
    assert!(rule.panel_mut().on_handle_click());
    assert!(rule.panel().is_ui_blocked());
    assert!(rule.engine().calls().contains(&EngineCall::SmoothSlide {
        element: CONTAINER_ID,
        left: 0.0,
        top: 1000.0,
    }));
}

#[test]
fn last_registered_listener_wins() {
    let mut rule = PanelTestRule::new(1000.0);
    let replacement = RecordingListener::new();
    rule.panel_mut().set_listener(replacement.clone());

    rule.drag_and_release(1000.0, 0.0);
    assert!(rule.listener().events().is_empty());
    assert_eq!(replacement.count(ListenerEvent::ViewClosed), 1);

    rule.panel_mut().clear_listener();
    rule.panel_mut().open_panel();
    rule.pump_frames();
    assert_eq!(replacement.count(ListenerEvent::ViewClosed), 1);
}

#[test]
fn settings_round_trip() {
    let mut rule = PanelTestRule::new(1000.0);
    let panel = rule.panel_mut();
    assert_eq!(panel.container_id(), Some(CONTAINER_ID));
    assert_eq!(panel.handle_id(), Some(HANDLE_ID));
    assert!(panel.finish_on_close());
    panel.set_finish_on_close(false);
    assert!(!panel.finish_on_close());
    panel.set_handle_id(9);
    assert_eq!(panel.config().handle_id, Some(9));
    assert!(panel.is_enabled());
}
