//! Drag-to-close panels
//!
//! A [`PanelController`] lets the user dismiss a panel by dragging it down
//! past a threshold, or flicking it. Pointer capture and settle physics come
//! from an injected [`CaptureEngine`]; the host layout, alpha and screen
//! teardown come from a [`PanelHost`]. The controller wires the two through a
//! [`DragDecisionController`] and reports to an optional [`DragListener`].

mod config;
mod error;
mod geometry;
mod host;
mod listener;
mod panel;

pub use config::PanelConfig;
pub use error::ConfigurationError;
pub use geometry::PanelGeometry;
pub use host::PanelHost;
pub use listener::{DragListener, NoopDragListener};
pub use panel::{InterceptResult, PanelController};

pub use dragclose_foundation::{
    CaptureEngine, DragCallback, DragDecision, DragDecisionController, DragState,
    DragThresholds, ElementId, PointerEvent, PointerEventKind,
};

pub mod prelude {
    pub use crate::{
        ConfigurationError, DragListener, InterceptResult, PanelConfig, PanelController,
        PanelGeometry, PanelHost,
    };
    pub use dragclose_foundation::prelude::*;
    pub use dragclose_ui_graphics::prelude::*;
}
