//! Host and listener doubles that remember everything they were told.

use std::cell::RefCell;
use std::rc::Rc;

use dragclose_foundation::ElementId;
use dragclose_ui::{DragListener, PanelHost};
use dragclose_ui_graphics::Rect;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ListenerEvent {
    StartDragging,
    Dragging(f32),
    ViewClosed,
}

/// Listener whose clones share one event log, so a test can keep a handle
/// after giving the listener to a panel.
#[derive(Clone, Debug, Default)]
pub struct RecordingListener {
    events: Rc<RefCell<Vec<ListenerEvent>>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ListenerEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn count(&self, event: ListenerEvent) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|recorded| match (recorded, &event) {
                (ListenerEvent::Dragging(_), ListenerEvent::Dragging(_)) => true,
                (recorded, event) => *recorded == event,
            })
            .count()
    }

    /// Offsets reported through `on_dragging`, in order.
    pub fn drag_offsets(&self) -> Vec<f32> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                ListenerEvent::Dragging(offset) => Some(*offset),
                _ => None,
            })
            .collect()
    }
}

impl DragListener for RecordingListener {
    fn on_start_dragging(&mut self) {
        self.events.borrow_mut().push(ListenerEvent::StartDragging);
    }

    fn on_dragging(&mut self, offset: f32) {
        self.events
            .borrow_mut()
            .push(ListenerEvent::Dragging(offset));
    }

    fn on_view_closed(&mut self) {
        self.events.borrow_mut().push(ListenerEvent::ViewClosed);
    }
}

/// Static layout plus a log of alpha updates, frame requests and finishes.
#[derive(Clone, Debug, Default)]
pub struct RecordingHost {
    elements: Vec<(ElementId, Rect)>,
    alpha_history: Vec<f32>,
    frame_requests: usize,
    finish_count: usize,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(mut self, id: ElementId, bounds: Rect) -> Self {
        self.elements.push((id, bounds));
        self
    }

    pub fn alpha_history(&self) -> &[f32] {
        &self.alpha_history
    }

    pub fn last_alpha(&self) -> Option<f32> {
        self.alpha_history.last().copied()
    }

    pub fn frame_requests(&self) -> usize {
        self.frame_requests
    }

    pub fn finish_count(&self) -> usize {
        self.finish_count
    }
}

impl PanelHost for RecordingHost {
    fn element_bounds(&self, id: ElementId) -> Option<Rect> {
        self.elements
            .iter()
            .find(|(element, _)| *element == id)
            .map(|(_, bounds)| *bounds)
    }

    fn set_container_alpha(&mut self, alpha: f32) {
        self.alpha_history.push(alpha);
    }

    fn request_frame(&mut self) {
        self.frame_requests += 1;
    }

    fn finish(&mut self) {
        self.finish_count += 1;
    }
}
