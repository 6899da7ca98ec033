//! Drag-to-close decision layer.
//!
//! [`DragDecisionController`] watches what a capture engine reports about the
//! draggable container and decides, at each instant, whether a drag started,
//! how far the panel has travelled, and where it should settle on release.
//! It never touches the engine itself: decisions are queued and drained by
//! the owner after the engine call returns.
//!
//! Offsets are measured from the panel's resting top edge. `0` is fully open
//! and `draggable_range` is fully closed.

use smallvec::SmallVec;

use super::capture::DragCallback;
use crate::gesture_constants::{HEIGHT_THRESHOLD_TO_CLOSE, SPEED_THRESHOLD_TO_CLOSE};
use crate::nodes::input::types::ElementId;

/// Activity of the underlying capture engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
    Settling,
}

/// Release thresholds, defaulting to the values in
/// [`gesture_constants`](crate::gesture_constants).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragThresholds {
    /// Downward release velocity above which the panel always closes.
    pub speed_to_close: f32,
    /// Fraction of the draggable range past which a slow release closes.
    pub height_fraction_to_close: f32,
}

impl DragThresholds {
    pub fn with_speed_to_close(mut self, speed: f32) -> Self {
        self.speed_to_close = speed;
        self
    }

    pub fn with_height_fraction_to_close(mut self, fraction: f32) -> Self {
        self.height_fraction_to_close = fraction;
        self
    }
}

impl Default for DragThresholds {
    fn default() -> Self {
        Self {
            speed_to_close: SPEED_THRESHOLD_TO_CLOSE,
            height_fraction_to_close: HEIGHT_THRESHOLD_TO_CLOSE,
        }
    }
}

/// Something the panel owner has to act on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragDecision {
    /// The engine just entered [`DragState::Dragging`].
    DragStarted,
    /// The container moved; carries `|offset| / range` in `[0, 1]`.
    DragProgress(f32),
    /// Ask the engine to settle the captured container at this top offset.
    SettleTo(f32),
    /// The container came to rest fully out of range.
    ViewClosed,
}

pub type DragDecisions = SmallVec<[DragDecision; 4]>;

#[derive(Debug)]
pub struct DragDecisionController {
    container: ElementId,
    thresholds: DragThresholds,
    draggable_range: f32,
    top_padding: f32,
    last_state: DragState,
    top: f32,
    pending: DragDecisions,
}

impl DragDecisionController {
    pub fn new(container: ElementId, thresholds: DragThresholds) -> Self {
        Self {
            container,
            thresholds,
            draggable_range: 0.0,
            top_padding: 0.0,
            last_state: DragState::Idle,
            top: 0.0,
            pending: DragDecisions::new(),
        }
    }

    pub fn container(&self) -> ElementId {
        self.container
    }

    pub fn set_container(&mut self, container: ElementId) {
        self.container = container;
    }

    pub fn thresholds(&self) -> DragThresholds {
        self.thresholds
    }

    pub fn set_thresholds(&mut self, thresholds: DragThresholds) {
        self.thresholds = thresholds;
    }

    pub fn draggable_range(&self) -> f32 {
        self.draggable_range
    }

    /// Takes effect immediately; a negative range is treated as zero.
    pub fn set_draggable_range(&mut self, range: f32) {
        self.draggable_range = range.max(0.0);
    }

    pub fn set_top_padding(&mut self, padding: f32) {
        self.top_padding = padding;
    }

    pub fn last_state(&self) -> DragState {
        self.last_state
    }

    /// Last observed top offset of the container.
    pub fn drag_offset(&self) -> f32 {
        self.top
    }

    /// Normalised offset in `[0, 1]`. A zero range reports `0`.
    pub fn drag_fraction(&self) -> f32 {
        offset_fraction(self.top, self.draggable_range)
    }

    pub fn on_lifecycle_changed(&mut self, state: DragState) {
        if state == self.last_state {
            return;
        }
        let was_moving = matches!(self.last_state, DragState::Dragging | DragState::Settling);
        if was_moving && state == DragState::Idle && self.top == self.draggable_range {
            log::debug!("container came to rest at {}, closing", self.top);
            self.pending.push(DragDecision::ViewClosed);
        }
        if state == DragState::Dragging {
            log::debug!("drag started at offset {}", self.top);
            self.pending.push(DragDecision::DragStarted);
        }
        self.last_state = state;
    }

    pub fn on_position_changed(&mut self, top: f32) {
        self.top = top;
        let fraction = self.drag_fraction();
        log::trace!("container top {top} ({fraction:.3})");
        self.pending.push(DragDecision::DragProgress(fraction));
    }

    pub fn on_released(&mut self, y_velocity: f32) {
        if let Some(target) = self.settle_target(y_velocity) {
            log::debug!(
                "released at {} with velocity {y_velocity}, settling to {target}",
                self.top
            );
            self.pending.push(DragDecision::SettleTo(target));
        }
    }

    /// Where a release with `y_velocity` at the current offset should settle.
    ///
    /// `None` when the panel never left its resting position or is already
    /// at (or past) the closed extreme. Velocity is checked before position.
    pub fn settle_target(&self, y_velocity: f32) -> Option<f32> {
        if self.top <= 0.0 || self.top >= self.draggable_range {
            return None;
        }
        let close = y_velocity > self.thresholds.speed_to_close
            || self.top > self.draggable_range * self.thresholds.height_fraction_to_close;
        Some(if close { self.draggable_range } else { 0.0 })
    }

    pub fn clamp_vertical(&self, top: f32) -> f32 {
        top.min(self.draggable_range).max(self.top_padding)
    }

    /// Horizontal motion is never allowed.
    pub fn clamp_horizontal(&self, _left: f32, current_left: f32) -> f32 {
        current_left
    }

    pub fn capture_range(&self) -> f32 {
        self.draggable_range
    }

    /// Only the designated container can be captured, never one of its
    /// descendants.
    pub fn should_capture(&self, candidate: ElementId) -> bool {
        candidate == self.container
    }

    pub fn has_pending_decisions(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Hands over every decision queued since the last call, oldest first.
    pub fn take_decisions(&mut self) -> DragDecisions {
        std::mem::take(&mut self.pending)
    }
}

impl DragCallback for DragDecisionController {
    fn on_drag_state_changed(&mut self, state: DragState) {
        self.on_lifecycle_changed(state);
    }

    fn on_position_changed(&mut self, _left: f32, top: f32) {
        DragDecisionController::on_position_changed(self, top);
    }

    fn on_released(&mut self, _x_velocity: f32, y_velocity: f32) {
        DragDecisionController::on_released(self, y_velocity);
    }

    fn try_capture(&self, element: ElementId) -> bool {
        self.should_capture(element)
    }

    fn clamp_horizontal(&self, left: f32, current_left: f32) -> f32 {
        DragDecisionController::clamp_horizontal(self, left, current_left)
    }

    fn clamp_vertical(&self, top: f32) -> f32 {
        DragDecisionController::clamp_vertical(self, top)
    }

    fn vertical_drag_range(&self) -> f32 {
        self.capture_range()
    }
}

/// `|offset| / range`, clamped to `[0, 1]`.
pub fn offset_fraction(offset: f32, range: f32) -> f32 {
    if range <= 0.0 {
        return 0.0;
    }
    (offset.abs() / range).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "tests/drag_tests.rs"]
mod tests;
