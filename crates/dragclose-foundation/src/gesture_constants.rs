//! Shared gesture constants for drag-to-close panels.
//!
//! All distances are in logical pixels and velocities in logical pixels per
//! second. Panels copy these into a [`DragThresholds`](crate::DragThresholds)
//! at construction, so individual panels can override them without touching
//! any global state.

/// Release velocity above which a panel always closes.
///
/// A downward flick faster than this dismisses the panel no matter how little
/// it has travelled, matching the usual "flick to dismiss" affordance.
pub const SPEED_THRESHOLD_TO_CLOSE: f32 = 800.0;

/// Fraction of the draggable range past which a slow release closes the panel.
///
/// Releasing above this line returns the panel to its resting position.
pub const HEIGHT_THRESHOLD_TO_CLOSE: f32 = 0.5;

/// Sensitivity handed to capture engines when detecting the start of a drag.
///
/// Larger values are more sensitive: the effective slop is
/// `DRAG_THRESHOLD / DRAG_SENSITIVITY`.
pub const DRAG_SENSITIVITY: f32 = 1.0;

/// Touch slop in logical pixels.
///
/// Pointer movement below this distance from the press position is treated as
/// jitter and never starts a drag. Matches the common platform convention
/// (Android uses ~8dp for ViewConfiguration.TOUCH_SLOP).
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Maximum release velocity in logical pixels per second.
///
/// Engines clamp tracked velocity to this before reporting a release, so a
/// glitchy sample pair can't produce an absurd flick.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
