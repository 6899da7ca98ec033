//! Testing utilities and harness for dragclose
//!
//! [`FakeCaptureEngine`] is a small, deterministic capture engine: it detects
//! slop, tracks release velocity from event timestamps and settles with a
//! [`SettleAnimation`](dragclose_animation::SettleAnimation) advanced one
//! fixed frame per tick. [`PanelTestRule`] wires it to a panel with a
//! [`RecordingHost`] and [`RecordingListener`] so tests can script whole
//! gestures.

pub mod assertions;
pub mod engine;
pub mod recording;
pub mod rule;

pub use assertions::*;
pub use engine::{EngineCall, FakeCaptureEngine, FRAME_NANOS};
pub use recording::{ListenerEvent, RecordingHost, RecordingListener};
pub use rule::{PanelTestRule, TestPanel, CONTAINER_ID, HANDLE_HEIGHT, HANDLE_ID, PANEL_WIDTH};

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::engine::{EngineCall, FakeCaptureEngine};
    pub use crate::recording::{ListenerEvent, RecordingHost, RecordingListener};
    pub use crate::rule::{PanelTestRule, TestPanel, CONTAINER_ID, HANDLE_ID};
}
