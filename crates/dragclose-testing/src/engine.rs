//! Deterministic capture engine for tests and demos.
//!
//! Behaves like a platform drag helper reduced to one pointer:
//!
//! - a press on a capturable view in the touch phase captures it at once;
//!   in the intercept phase a drag only starts once the pointer has moved
//!   past the slop,
//! - a captured view follows the pointer, clamped through the callback,
//! - release velocity is measured across the last two motion samples,
//! - `settle_captured_at` is only honoured between a release and the next
//!   call into the engine,
//! - settles run a [`SettleAnimation`] per axis, one [`FRAME_NANOS`] step
//!   per `continue_settling` call.

use dragclose_animation::{AnimationSpec, SettleAnimation};
use dragclose_foundation::{
    CaptureEngine, DragCallback, DragState, ElementId, PointerEvent, PointerEventKind,
    DRAG_SENSITIVITY, DRAG_THRESHOLD, MAX_FLING_VELOCITY,
};
use dragclose_ui_graphics::{Point, Rect};

/// One 60 Hz frame.
pub const FRAME_NANOS: u64 = 16_666_667;

/// Every call the panel made into the engine, in order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EngineCall {
    Intercept(PointerEventKind),
    Process(PointerEventKind),
    ContinueSettling,
    SmoothSlide {
        element: ElementId,
        left: f32,
        top: f32,
    },
    SettleCaptured {
        left: f32,
        top: f32,
    },
    Cancel,
}

#[derive(Clone, Copy, Debug)]
struct Sample {
    position: Point,
    time_millis: u64,
}

#[derive(Clone, Debug)]
struct Settle {
    x: SettleAnimation,
    y: SettleAnimation,
}

#[derive(Debug)]
pub struct FakeCaptureEngine {
    /// Views the engine can capture, topmost last.
    views: Vec<(ElementId, Rect)>,
    slop: f32,
    state: DragState,
    captured: Option<usize>,
    grab: Point,
    down: Option<Sample>,
    motion: [Option<Sample>; 2],
    settle: Option<Settle>,
    frame_time_nanos: u64,
    /// Set once a release has been reported; cleared by the next engine call.
    release_window: bool,
    states: Vec<DragState>,
    calls: Vec<EngineCall>,
}

impl Default for FakeCaptureEngine {
    fn default() -> Self {
        Self::new(DRAG_SENSITIVITY)
    }
}

impl FakeCaptureEngine {
    /// Larger `sensitivity` means a smaller slop.
    pub fn new(sensitivity: f32) -> Self {
        Self {
            views: Vec::new(),
            slop: DRAG_THRESHOLD / sensitivity.max(f32::EPSILON),
            state: DragState::Idle,
            captured: None,
            grab: Point::ZERO,
            down: None,
            motion: [None, None],
            settle: None,
            frame_time_nanos: 0,
            release_window: false,
            states: Vec::new(),
            calls: Vec::new(),
        }
    }

    /// Registers a view that presses can land on. Later views sit on top.
    pub fn with_view(mut self, id: ElementId, bounds: Rect) -> Self {
        self.views.push((id, bounds));
        self
    }

    pub fn slop(&self) -> f32 {
        self.slop
    }

    pub fn view_bounds(&self, id: ElementId) -> Option<Rect> {
        self.views
            .iter()
            .find(|(view, _)| *view == id)
            .map(|(_, bounds)| *bounds)
    }

    pub fn captured_view(&self) -> Option<ElementId> {
        self.captured.map(|index| self.views[index].0)
    }

    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    pub fn calls(&self) -> &[EngineCall] {
        &self.calls
    }

    /// Every state the engine entered, in order.
    pub fn state_history(&self) -> &[DragState] {
        &self.states
    }

    /// Settle targets requested after a release, in order.
    pub fn settle_targets(&self) -> Vec<f32> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                EngineCall::SettleCaptured { top, .. } => Some(*top),
                _ => None,
            })
            .collect()
    }

    fn set_state(&mut self, state: DragState, callback: &mut dyn DragCallback) {
        if self.state != state {
            log::trace!("engine state {:?} -> {:?}", self.state, state);
            self.state = state;
            self.states.push(state);
            callback.on_drag_state_changed(state);
        }
    }

    fn view_under(&self, position: Point) -> Option<usize> {
        self.views
            .iter()
            .rposition(|(_, bounds)| bounds.contains_point(position))
    }

    fn try_capture(
        &mut self,
        index: usize,
        position: Point,
        callback: &mut dyn DragCallback,
    ) -> bool {
        if self.captured == Some(index) && self.state == DragState::Dragging {
            return true;
        }
        let (id, bounds) = self.views[index];
        if !callback.try_capture(id) {
            return false;
        }
        self.settle = None;
        self.captured = Some(index);
        self.grab = Point::new(position.x - bounds.x, position.y - bounds.y);
        self.set_state(DragState::Dragging, callback);
        true
    }

    fn record_down(&mut self, event: &PointerEvent) {
        let sample = Sample {
            position: event.position,
            time_millis: event.time_millis,
        };
        self.down = Some(sample);
        self.motion = [None, Some(sample)];
    }

    fn record_motion(&mut self, event: &PointerEvent) {
        self.motion = [
            self.motion[1],
            Some(Sample {
                position: event.position,
                time_millis: event.time_millis,
            }),
        ];
    }

    fn clear_pointer(&mut self) {
        self.down = None;
        self.motion = [None, None];
    }

    fn passed_slop(&self, position: Point, callback: &dyn DragCallback) -> bool {
        let Some(down) = self.down else {
            return false;
        };
        callback.vertical_drag_range() > 0.0 && (position.y - down.position.y).abs() > self.slop
    }

    /// Velocity across the last two motion samples, in pixels per second.
    fn release_velocity(&self) -> (f32, f32) {
        let [Some(previous), Some(last)] = self.motion else {
            return (0.0, 0.0);
        };
        let dt_millis = last.time_millis.saturating_sub(previous.time_millis);
        if dt_millis == 0 {
            return (0.0, 0.0);
        }
        let seconds = dt_millis as f32 / 1_000.0;
        let clamp = |v: f32| v.clamp(-MAX_FLING_VELOCITY, MAX_FLING_VELOCITY);
        (
            clamp((last.position.x - previous.position.x) / seconds),
            clamp((last.position.y - previous.position.y) / seconds),
        )
    }

    fn drag_to(&mut self, position: Point, callback: &mut dyn DragCallback) {
        let Some(index) = self.captured else {
            return;
        };
        let bounds = self.views[index].1;
        let left = callback.clamp_horizontal(position.x - self.grab.x, bounds.x);
        let top = callback.clamp_vertical(position.y - self.grab.y);
        if left != bounds.x || top != bounds.y {
            self.views[index].1 = bounds.with_origin(left, top);
            callback.on_position_changed(left, top);
        }
    }

    fn release(&mut self, velocity: (f32, f32), callback: &mut dyn DragCallback) {
        log::trace!("engine release at {:?}", velocity);
        callback.on_released(velocity.0, velocity.1);
        if self.state == DragState::Dragging {
            self.set_state(DragState::Idle, callback);
        }
        self.release_window = true;
    }

    fn force_settle(
        &mut self,
        index: usize,
        left: f32,
        top: f32,
        callback: &mut dyn DragCallback,
    ) -> bool {
        let bounds = self.views[index].1;
        if bounds.x == left && bounds.y == top {
            self.settle = None;
            self.set_state(DragState::Idle, callback);
            return false;
        }
        let range = callback.vertical_drag_range();
        let spec = AnimationSpec::settle(top - bounds.y, range);
        self.settle = Some(Settle {
            x: SettleAnimation::new(bounds.x, left, spec),
            y: SettleAnimation::new(bounds.y, top, spec),
        });
        self.set_state(DragState::Settling, callback);
        true
    }
}

impl CaptureEngine for FakeCaptureEngine {
    fn should_intercept(
        &mut self,
        event: &PointerEvent,
        callback: &mut dyn DragCallback,
    ) -> bool {
        self.calls.push(EngineCall::Intercept(event.kind));
        self.release_window = false;
        match event.kind {
            PointerEventKind::Down => {
                self.record_down(event);
                // A press on a settling view grabs it straight away.
                if self.state == DragState::Settling {
                    if let Some(index) = self.view_under(event.position) {
                        if self.captured == Some(index) {
                            self.try_capture(index, event.position, callback);
                        }
                    }
                }
            }
            PointerEventKind::Move => {
                self.record_motion(event);
                if self.state != DragState::Dragging && self.passed_slop(event.position, callback)
                {
                    let under = self.down.and_then(|down| self.view_under(down.position));
                    if let Some(index) = under {
                        self.try_capture(index, event.position, callback);
                    }
                }
            }
            PointerEventKind::Up | PointerEventKind::Cancel => self.clear_pointer(),
        }
        self.state == DragState::Dragging
    }

    fn process_event(&mut self, event: &PointerEvent, callback: &mut dyn DragCallback) {
        self.calls.push(EngineCall::Process(event.kind));
        self.release_window = false;
        match event.kind {
            PointerEventKind::Down => {
                self.record_down(event);
                if let Some(index) = self.view_under(event.position) {
                    self.try_capture(index, event.position, callback);
                }
            }
            PointerEventKind::Move => {
                self.record_motion(event);
                if self.state == DragState::Dragging {
                    self.drag_to(event.position, callback);
                } else if self.passed_slop(event.position, callback) {
                    let under = self.down.and_then(|down| self.view_under(down.position));
                    if let Some(index) = under {
                        if self.try_capture(index, event.position, callback) {
                            self.drag_to(event.position, callback);
                        }
                    }
                }
            }
            PointerEventKind::Up => {
                if self.state == DragState::Dragging {
                    let velocity = self.release_velocity();
                    self.release(velocity, callback);
                }
                self.clear_pointer();
            }
            PointerEventKind::Cancel => {
                if self.state == DragState::Dragging {
                    self.release((0.0, 0.0), callback);
                }
                self.clear_pointer();
            }
        }
    }

    fn continue_settling(&mut self, callback: &mut dyn DragCallback) -> bool {
        self.calls.push(EngineCall::ContinueSettling);
        self.release_window = false;
        let (Some(index), Some(settle)) = (self.captured, self.settle.as_mut()) else {
            return false;
        };
        self.frame_time_nanos += FRAME_NANOS;
        let left = settle.x.advance(self.frame_time_nanos);
        let top = settle.y.advance(self.frame_time_nanos);
        let finished = settle.x.is_finished() && settle.y.is_finished();

        let bounds = self.views[index].1;
        if left != bounds.x || top != bounds.y {
            self.views[index].1 = bounds.with_origin(left, top);
            callback.on_position_changed(left, top);
        }
        if finished {
            self.settle = None;
            self.set_state(DragState::Idle, callback);
        }
        self.state == DragState::Settling
    }

    fn smooth_slide_to(
        &mut self,
        element: ElementId,
        left: f32,
        top: f32,
        callback: &mut dyn DragCallback,
    ) -> bool {
        self.calls.push(EngineCall::SmoothSlide { element, left, top });
        self.release_window = false;
        let Some(index) = self.views.iter().position(|(id, _)| *id == element) else {
            log::warn!("no view {element} to slide");
            return false;
        };
        self.captured = Some(index);
        self.force_settle(index, left, top, callback)
    }

    fn settle_captured_at(&mut self, left: f32, top: f32, callback: &mut dyn DragCallback) -> bool {
        self.calls.push(EngineCall::SettleCaptured { left, top });
        if !std::mem::take(&mut self.release_window) {
            log::warn!("settle requested outside a release, ignoring");
            return false;
        }
        let Some(index) = self.captured else {
            log::warn!("settle requested with nothing captured");
            return false;
        };
        self.force_settle(index, left, top, callback)
    }

    fn cancel(&mut self, callback: &mut dyn DragCallback) {
        self.calls.push(EngineCall::Cancel);
        self.release_window = false;
        self.clear_pointer();
        if self.state == DragState::Dragging {
            self.set_state(DragState::Idle, callback);
        }
    }

    fn state(&self) -> DragState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dragclose_foundation::{DragDecision, DragDecisionController, DragThresholds};

    const CONTAINER: ElementId = 1;

    fn setup() -> (FakeCaptureEngine, DragDecisionController) {
        let engine =
            FakeCaptureEngine::default().with_view(CONTAINER, Rect::new(0.0, 0.0, 360.0, 1000.0));
        let mut decisions = DragDecisionController::new(CONTAINER, DragThresholds::default());
        decisions.set_draggable_range(1000.0);
        (engine, decisions)
    }

    #[test]
    fn intercept_waits_for_slop() {
        let (mut engine, mut decisions) = setup();
        assert!(!engine.should_intercept(&PointerEvent::down(100.0, 50.0), &mut decisions));
        assert!(!engine.should_intercept(
            &PointerEvent::moved(100.0, 55.0).with_time(16),
            &mut decisions
        ));
        assert!(engine.should_intercept(
            &PointerEvent::moved(100.0, 70.0).with_time(32),
            &mut decisions
        ));
        assert_eq!(engine.state(), DragState::Dragging);
        assert_eq!(
            decisions.take_decisions().as_slice(),
            &[DragDecision::DragStarted]
        );
    }

    #[test]
    fn refused_capture_never_drags() {
        let mut engine = FakeCaptureEngine::default()
            .with_view(CONTAINER, Rect::new(0.0, 0.0, 360.0, 1000.0))
            .with_view(9, Rect::new(0.0, 0.0, 360.0, 100.0));
        let mut decisions = DragDecisionController::new(CONTAINER, DragThresholds::default());
        decisions.set_draggable_range(1000.0);

        engine.process_event(&PointerEvent::down(10.0, 10.0), &mut decisions);
        assert_eq!(engine.state(), DragState::Idle);
        assert_eq!(engine.captured_view(), None);
    }

    #[test]
    fn release_velocity_uses_last_two_motion_samples() {
        let (mut engine, mut decisions) = setup();
        engine.process_event(&PointerEvent::down(100.0, 50.0), &mut decisions);
        engine.process_event(&PointerEvent::moved(100.0, 250.0).with_time(100), &mut decisions);
        engine.process_event(&PointerEvent::moved(100.0, 266.0).with_time(120), &mut decisions);
        let (x_velocity, y_velocity) = engine.release_velocity();
        assert_eq!(x_velocity, 0.0);
        assert!((y_velocity - 800.0).abs() < 0.01, "got {y_velocity}");
    }

    #[test]
    fn slide_settles_over_frames_and_goes_idle() {
        let (mut engine, mut decisions) = setup();
        assert!(engine.smooth_slide_to(CONTAINER, 0.0, 1000.0, &mut decisions));
        assert_eq!(engine.state(), DragState::Settling);

        let mut frames = 0;
        while engine.continue_settling(&mut decisions) {
            frames += 1;
            assert!(frames < 120);
        }
        assert_eq!(engine.state(), DragState::Idle);
        assert_eq!(engine.view_bounds(CONTAINER).map(|b| b.y), Some(1000.0));
        assert_eq!(
            decisions.take_decisions().last(),
            Some(&DragDecision::ViewClosed)
        );
    }

    #[test]
    fn settle_is_only_accepted_right_after_release() {
        let (mut engine, mut decisions) = setup();
        engine.process_event(&PointerEvent::down(100.0, 50.0), &mut decisions);
        engine.process_event(&PointerEvent::moved(100.0, 650.0).with_time(100), &mut decisions);
        assert!(!engine.settle_captured_at(0.0, 1000.0, &mut decisions));

        engine.process_event(&PointerEvent::up(100.0, 650.0).with_time(116), &mut decisions);
        assert_eq!(engine.state(), DragState::Idle);
        assert!(engine.settle_captured_at(0.0, 1000.0, &mut decisions));
        assert_eq!(engine.state(), DragState::Settling);
        assert_eq!(
            engine.state_history(),
            &[DragState::Dragging, DragState::Idle, DragState::Settling]
        );
    }

    #[test]
    fn release_window_closes_on_next_call() {
        let (mut engine, mut decisions) = setup();
        engine.process_event(&PointerEvent::down(100.0, 50.0), &mut decisions);
        engine.process_event(&PointerEvent::moved(100.0, 350.0).with_time(100), &mut decisions);
        engine.process_event(&PointerEvent::up(100.0, 350.0).with_time(116), &mut decisions);
        assert!(!engine.continue_settling(&mut decisions));
        assert!(!engine.settle_captured_at(0.0, 0.0, &mut decisions));
        assert_eq!(engine.state(), DragState::Idle);
        assert_eq!(engine.view_bounds(CONTAINER).map(|b| b.y), Some(300.0));
    }

    #[test]
    fn slide_to_current_position_does_not_animate() {
        let (mut engine, mut decisions) = setup();
        assert!(!engine.smooth_slide_to(CONTAINER, 0.0, 0.0, &mut decisions));
        assert_eq!(engine.state(), DragState::Idle);
        assert!(!engine.is_settling());
    }
}
