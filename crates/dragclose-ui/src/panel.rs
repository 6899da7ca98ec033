//! Panel controller.
//!
//! Routes host pointer events into the capture engine, lets the
//! [`DragDecisionController`] judge what the engine reports, and applies the
//! resulting decisions: settle animations, container alpha, listener callbacks
//! and finishing the host.
//!
//! Everything runs on the host's UI thread. Pointer callbacks and `on_frame`
//! ticks interleave in arrival order and nothing is buffered across frames.

use dragclose_foundation::{
    offset_fraction, CaptureEngine, DragDecision, DragDecisionController, ElementId,
    PointerEvent,
};
use dragclose_ui_graphics::{EdgeInsets, Point, Size};

use crate::config::PanelConfig;
use crate::error::ConfigurationError;
use crate::geometry::PanelGeometry;
use crate::host::PanelHost;
use crate::listener::DragListener;

/// Outcome of offering an intercept-phase pointer sample to the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterceptResult {
    /// A drag began over the handle; the panel takes the rest of the stream.
    Intercept,
    /// The panel is closing programmatically; the event was swallowed.
    Consume,
    /// Leave the event to the host's normal dispatch.
    Pass,
}

#[derive(Clone, Copy, Debug)]
struct Attachment {
    container: ElementId,
    handle: ElementId,
    geometry: PanelGeometry,
}

pub struct PanelController<E, H> {
    config: PanelConfig,
    engine: E,
    host: H,
    decisions: DragDecisionController,
    attachment: Option<Attachment>,
    listener: Option<Box<dyn DragListener>>,
    ui_blocked: bool,
    enabled: bool,
    alpha: f32,
}

impl<E, H> PanelController<E, H>
where
    E: CaptureEngine,
    H: PanelHost,
{
    pub fn new(config: PanelConfig, engine: E, host: H) -> Self {
        let container = config.container_id.unwrap_or_default();
        let decisions = DragDecisionController::new(container, config.thresholds);
        Self {
            config,
            engine,
            host,
            decisions,
            attachment: None,
            listener: None,
            ui_blocked: false,
            enabled: true,
            alpha: 1.0,
        }
    }

    /// Resolves the container and handle in the host layout and captures the
    /// panel geometry. Calling it again re-resolves both and replaces the
    /// geometry.
    pub fn attach(&mut self, geometry: PanelGeometry) -> Result<(), ConfigurationError> {
        let (container, handle) = self.resolve_elements().inspect_err(|err| {
            log::warn!("cannot attach drag-to-close panel: {err}");
        })?;

        self.decisions.set_container(container);
        self.decisions.set_draggable_range(geometry.draggable_range);
        self.decisions.set_top_padding(geometry.top_padding);
        self.attachment = Some(Attachment {
            container,
            handle,
            geometry,
        });
        log::debug!("panel attached: container {container}, handle {handle}, {geometry:?}");
        Ok(())
    }

    /// Attaches using the container's current bounds from the host layout.
    pub fn attach_to_layout(
        &mut self,
        panel: Size,
        padding: EdgeInsets,
    ) -> Result<(), ConfigurationError> {
        let (container, _) = self.resolve_elements()?;
        let bounds = self
            .host
            .element_bounds(container)
            .ok_or(ConfigurationError::ContainerNotFound(container))?;
        self.attach(PanelGeometry::from_layout(bounds, panel, padding))
    }

    fn resolve_elements(&self) -> Result<(ElementId, ElementId), ConfigurationError> {
        let container = self
            .config
            .container_id
            .ok_or(ConfigurationError::MissingContainerId)?;
        let handle = self
            .config
            .handle_id
            .ok_or(ConfigurationError::MissingHandleId)?;
        if self.host.element_bounds(container).is_none() {
            return Err(ConfigurationError::ContainerNotFound(container));
        }
        if self.host.element_bounds(handle).is_none() {
            return Err(ConfigurationError::HandleNotFound(handle));
        }
        Ok((container, handle))
    }

    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// The panel was resized; its new height becomes the draggable range.
    pub fn on_resized(&mut self, height: f32) {
        self.decisions.set_draggable_range(height);
        if let Some(attachment) = self.attachment.as_mut() {
            attachment.geometry.draggable_range = self.decisions.draggable_range();
        }
        log::debug!("draggable range is now {}", self.decisions.draggable_range());
    }

    /// Slides the container back to its resting position. Touches are accepted
    /// again right away, not when the animation ends.
    ///
    /// Returns the target position, or `None` before the panel is attached.
    pub fn open_panel(&mut self) -> Option<Point> {
        let target = self.slide_container(|geometry| geometry.open_position());
        self.ui_blocked = false;
        target
    }

    /// Slides the container out of range. Every pointer event is swallowed
    /// until [`open_panel`](Self::open_panel) is called.
    ///
    /// Returns the target position, or `None` before the panel is attached.
    pub fn close_panel(&mut self) -> Option<Point> {
        self.ui_blocked = true;
        self.slide_container(|geometry| geometry.closed_position())
    }

    fn slide_container(&mut self, target: impl FnOnce(&PanelGeometry) -> Point) -> Option<Point> {
        let Some(attachment) = self.attachment else {
            log::warn!("panel is not attached, ignoring slide request");
            return None;
        };
        let target = target(&attachment.geometry);
        let started = self.engine.smooth_slide_to(
            attachment.container,
            target.x,
            target.y,
            &mut self.decisions,
        );
        if started {
            self.host.request_frame();
        }
        self.apply_decisions();
        Some(target)
    }

    /// Intercept-phase routing for a pointer sample.
    ///
    /// Intercepts only when the panel is enabled, the engine's slop check
    /// passes and the pointer is over the handle. A disabled panel cancels
    /// whatever the engine was doing.
    pub fn route_intercept_check(&mut self, event: &PointerEvent) -> InterceptResult {
        if self.ui_blocked {
            event.consume();
            return InterceptResult::Consume;
        }
        let Some(attachment) = self.attachment else {
            return InterceptResult::Pass;
        };
        if !self.enabled {
            self.engine.cancel(&mut self.decisions);
            self.apply_decisions();
            return InterceptResult::Pass;
        }

        let dragging = self.engine.should_intercept(event, &mut self.decisions);
        self.apply_decisions();
        if dragging && self.is_over(attachment.handle, event.position) {
            InterceptResult::Intercept
        } else {
            InterceptResult::Pass
        }
    }

    /// Touch-phase routing for a pointer sample.
    ///
    /// Returns `true` when the panel handled the event: always while blocked
    /// (the event is swallowed without reaching the engine), otherwise when
    /// the pointer is over the handle so the host can dispatch clicks to it.
    pub fn route_touch(&mut self, event: &PointerEvent) -> bool {
        if self.ui_blocked {
            event.consume();
            return true;
        }
        let Some(attachment) = self.attachment else {
            return false;
        };
        self.engine.process_event(event, &mut self.decisions);
        self.apply_decisions();
        self.is_over(attachment.handle, event.position)
    }

    /// Render tick. Advances any settle by one step and asks the host for
    /// another frame while it is still running.
    pub fn on_frame(&mut self) -> bool {
        let running = self.engine.continue_settling(&mut self.decisions);
        self.apply_decisions();
        if running {
            self.host.request_frame();
        }
        running
    }

    /// A click was dispatched on the handle. Closes the panel when
    /// close-on-click is enabled; returns whether it did.
    pub fn on_handle_click(&mut self) -> bool {
        if !self.config.close_on_click {
            return false;
        }
        self.close_panel();
        true
    }

    fn is_over(&self, element: ElementId, position: Point) -> bool {
        self.host
            .element_bounds(element)
            .is_some_and(|bounds| bounds.contains_point(position))
    }

    fn apply_decisions(&mut self) {
        loop {
            let decisions = self.decisions.take_decisions();
            if decisions.is_empty() {
                break;
            }
            for decision in decisions {
                self.apply(decision);
            }
        }
    }

    fn apply(&mut self, decision: DragDecision) {
        match decision {
            DragDecision::DragStarted => {
                if let Some(listener) = self.listener.as_mut() {
                    listener.on_start_dragging();
                }
            }
            DragDecision::DragProgress(fraction) => {
                self.alpha = 1.0 - fraction;
                self.host.set_container_alpha(self.alpha);
                if let Some(listener) = self.listener.as_mut() {
                    listener.on_dragging(fraction);
                }
            }
            DragDecision::SettleTo(top) => {
                // Only emitted by a release; no engine call has happened since.
                let left = self
                    .attachment
                    .map_or(0.0, |attachment| attachment.geometry.original_left);
                if self.engine.settle_captured_at(left, top, &mut self.decisions) {
                    self.host.request_frame();
                }
            }
            DragDecision::ViewClosed => {
                log::debug!("panel closed");
                if let Some(listener) = self.listener.as_mut() {
                    listener.on_view_closed();
                }
                if self.config.finish_on_close {
                    self.host.finish();
                }
            }
        }
    }

    /// Replaces any previously registered listener.
    pub fn set_listener(&mut self, listener: impl DragListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Container opacity for a given top offset.
    pub fn alpha_for_offset(&self, offset: f32) -> f32 {
        1.0 - offset_fraction(offset, self.decisions.draggable_range())
    }

    /// Container opacity after the last position change.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn drag_offset(&self) -> f32 {
        self.decisions.drag_offset()
    }

    pub fn draggable_range(&self) -> f32 {
        self.decisions.draggable_range()
    }

    pub fn geometry(&self) -> Option<PanelGeometry> {
        self.attachment.map(|attachment| attachment.geometry)
    }

    pub fn decisions(&self) -> &DragDecisionController {
        &self.decisions
    }

    pub fn is_ui_blocked(&self) -> bool {
        self.ui_blocked
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn container_id(&self) -> Option<ElementId> {
        self.config.container_id
    }

    /// Takes effect on the next [`attach`](Self::attach).
    pub fn set_container_id(&mut self, id: ElementId) {
        self.config.container_id = Some(id);
    }

    pub fn handle_id(&self) -> Option<ElementId> {
        self.config.handle_id
    }

    /// Takes effect on the next [`attach`](Self::attach).
    pub fn set_handle_id(&mut self, id: ElementId) {
        self.config.handle_id = Some(id);
    }

    pub fn finish_on_close(&self) -> bool {
        self.config.finish_on_close
    }

    pub fn set_finish_on_close(&mut self, finish_on_close: bool) {
        self.config.finish_on_close = finish_on_close;
    }

    pub fn close_on_click(&self) -> bool {
        self.config.close_on_click
    }

    pub fn set_close_on_click(&mut self, close_on_click: bool) {
        self.config.close_on_click = close_on_click;
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
