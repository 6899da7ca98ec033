//! Pointer input and gesture decisions for dragclose
//!
//! The [`DragDecisionController`] sits between a capture engine (which owns
//! raw pointer tracking, slop detection and settle physics) and the panel
//! that hosts it.

pub mod gesture_constants;
pub mod nodes;

pub use gesture_constants::*;
pub use nodes::input::gestures::{
    offset_fraction, CaptureEngine, DragCallback, DragDecision, DragDecisionController,
    DragDecisions, DragState, DragThresholds,
};
pub use nodes::input::{ElementId, PointerDispatcher, PointerEvent, PointerEventKind, PointerId};

pub mod prelude {
    pub use crate::gesture_constants::*;
    pub use crate::nodes::input::gestures::{
        CaptureEngine, DragCallback, DragDecision, DragDecisionController, DragState,
        DragThresholds,
    };
    pub use crate::nodes::input::prelude::*;
}
