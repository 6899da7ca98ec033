//! Stand-in for a window: a fixed layout that logs what the panel asks of it.

use dragclose_foundation::ElementId;
use dragclose_ui::PanelHost;
use dragclose_ui_graphics::Rect;

#[derive(Debug, Default)]
pub struct DemoHost {
    elements: Vec<(ElementId, Rect)>,
    alpha: f32,
    frame_requests: usize,
    finished: bool,
}

impl DemoHost {
    pub fn new() -> Self {
        Self {
            alpha: 1.0,
            ..Self::default()
        }
    }

    pub fn with_element(mut self, id: ElementId, bounds: Rect) -> Self {
        self.elements.push((id, bounds));
        self
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn frame_requests(&self) -> usize {
        self.frame_requests
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl PanelHost for DemoHost {
    fn element_bounds(&self, id: ElementId) -> Option<Rect> {
        self.elements
            .iter()
            .find(|(element, _)| *element == id)
            .map(|(_, bounds)| *bounds)
    }

    fn set_container_alpha(&mut self, alpha: f32) {
        log::trace!("container alpha {alpha:.3}");
        self.alpha = alpha;
    }

    fn request_frame(&mut self) {
        self.frame_requests += 1;
    }

    fn finish(&mut self) {
        log::info!("window finished");
        self.finished = true;
    }
}
