//! Seams between the capture engine and the decision layer.
//!
//! A capture engine owns the pointer: it decides when a press has moved far
//! enough to become a drag, tracks release velocity, and interpolates settle
//! animations frame by frame. It reports everything it does through a
//! [`DragCallback`] and asks the same callback for clamping and capture
//! permission. The engine never decides where a panel ends up.

use super::drag::DragState;
use crate::nodes::input::types::{ElementId, PointerEvent};

/// Engine-facing callback surface.
///
/// Every method is invoked synchronously from inside an engine call, on the
/// UI thread.
pub trait DragCallback {
    /// The engine moved between idle, dragging and settling.
    fn on_drag_state_changed(&mut self, state: DragState);

    /// The captured view moved to `(left, top)`.
    fn on_position_changed(&mut self, left: f32, top: f32);

    /// The pointer let go of the captured view with the given velocity in
    /// logical pixels per second. Positive `y_velocity` points down.
    ///
    /// The engine is still borrowed here; a settle is requested afterwards
    /// through [`CaptureEngine::settle_captured_at`].
    fn on_released(&mut self, x_velocity: f32, y_velocity: f32);

    /// Whether `element` may be captured by a press that landed on it.
    fn try_capture(&self, element: ElementId) -> bool;

    fn clamp_horizontal(&self, left: f32, current_left: f32) -> f32;

    fn clamp_vertical(&self, top: f32) -> f32;

    /// Vertical travel available to the captured view. Engines scale their
    /// slop and settle duration by it; zero disables vertical dragging.
    fn vertical_drag_range(&self) -> f32;
}

/// Pointer capture and settle physics provided by the host platform.
pub trait CaptureEngine {
    /// Feeds an intercept-phase sample. Returns `true` once the engine's own
    /// slop check says a drag has begun and it wants the rest of the stream.
    fn should_intercept(&mut self, event: &PointerEvent, callback: &mut dyn DragCallback)
        -> bool;

    /// Processes a down/move/up/cancel sample for the captured view.
    fn process_event(&mut self, event: &PointerEvent, callback: &mut dyn DragCallback);

    /// Advances an in-flight settle by one frame. Returns `true` while the
    /// settle is still running.
    fn continue_settling(&mut self, callback: &mut dyn DragCallback) -> bool;

    /// Animates `element` to an absolute position without a user drag.
    /// Returns `true` if an animation was started.
    fn smooth_slide_to(
        &mut self,
        element: ElementId,
        left: f32,
        top: f32,
        callback: &mut dyn DragCallback,
    ) -> bool;

    /// Settles the view that was just released at `(left, top)`.
    ///
    /// Valid from the moment [`DragCallback::on_released`] returns until the
    /// engine is handed its next pointer sample, frame or cancel. The engine
    /// reports [`DragState::Idle`] once the release is handled, so a
    /// settled release is seen as `Dragging -> Idle -> Settling`. Outside
    /// that window the call is refused. Returns `true` if an animation was
    /// started.
    fn settle_captured_at(&mut self, left: f32, top: f32, callback: &mut dyn DragCallback)
        -> bool;

    /// Aborts any drag or settle, leaving the view where it was last placed.
    fn cancel(&mut self, callback: &mut dyn DragCallback);

    fn state(&self) -> DragState;
}
