pub mod capture;
pub mod drag;

pub use capture::{CaptureEngine, DragCallback};
pub use drag::{
    offset_fraction, DragDecision, DragDecisionController, DragDecisions, DragState,
    DragThresholds,
};
