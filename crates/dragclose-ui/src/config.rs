use dragclose_foundation::{DragThresholds, ElementId};

/// Per-panel options.
///
/// Both element ids are required before the panel can be attached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelConfig {
    /// The view that moves while dragging.
    pub container_id: Option<ElementId>,
    /// The view whose press starts a drag.
    pub handle_id: Option<ElementId>,
    /// Tear down the hosting screen once the panel is dragged out.
    pub finish_on_close: bool,
    /// A click on the handle closes the panel.
    pub close_on_click: bool,
    pub thresholds: DragThresholds,
}

impl PanelConfig {
    pub fn new(container_id: ElementId, handle_id: ElementId) -> Self {
        Self {
            container_id: Some(container_id),
            handle_id: Some(handle_id),
            ..Self::default()
        }
    }

    pub fn with_finish_on_close(mut self, finish_on_close: bool) -> Self {
        self.finish_on_close = finish_on_close;
        self
    }

    pub fn with_close_on_click(mut self, close_on_click: bool) -> Self {
        self.close_on_click = close_on_click;
        self
    }

    pub fn with_thresholds(mut self, thresholds: DragThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            container_id: None,
            handle_id: None,
            finish_on_close: true,
            close_on_click: false,
            thresholds: DragThresholds::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dragclose_foundation::{HEIGHT_THRESHOLD_TO_CLOSE, SPEED_THRESHOLD_TO_CLOSE};

    #[test]
    fn defaults_finish_but_do_not_close_on_click() {
        let config = PanelConfig::default();
        assert!(config.finish_on_close);
        assert!(!config.close_on_click);
        assert_eq!(config.container_id, None);
        assert_eq!(config.thresholds.speed_to_close, SPEED_THRESHOLD_TO_CLOSE);
        assert_eq!(
            config.thresholds.height_fraction_to_close,
            HEIGHT_THRESHOLD_TO_CLOSE
        );
    }

    #[test]
    fn builder_overrides() {
        let config = PanelConfig::new(1, 2)
            .with_finish_on_close(false)
            .with_close_on_click(true)
            .with_thresholds(DragThresholds::default().with_speed_to_close(1200.0));
        assert_eq!(config.container_id, Some(1));
        assert_eq!(config.handle_id, Some(2));
        assert!(!config.finish_on_close);
        assert!(config.close_on_click);
        assert_eq!(config.thresholds.speed_to_close, 1200.0);
    }
}
