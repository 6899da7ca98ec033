use dragclose_ui_graphics::{EdgeInsets, Point, Rect, Size};

/// Where the panel rests and how far it can travel.
///
/// Captured once at attach time; only `draggable_range` changes afterwards,
/// on resize.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanelGeometry {
    /// Maximum vertical travel, equal to the panel height.
    pub draggable_range: f32,
    pub original_top: f32,
    pub original_left: f32,
    /// Lowest top offset the container may be dragged to.
    pub top_padding: f32,
}

impl PanelGeometry {
    pub fn new(draggable_range: f32, original_left: f32, original_top: f32) -> Self {
        Self {
            draggable_range: draggable_range.max(0.0),
            original_top,
            original_left,
            top_padding: 0.0,
        }
    }

    pub fn with_top_padding(mut self, top_padding: f32) -> Self {
        self.top_padding = top_padding;
        self
    }

    /// Geometry of a container laid out at `container` inside a panel of
    /// `panel` size with `padding`.
    pub fn from_layout(container: Rect, panel: Size, padding: EdgeInsets) -> Self {
        Self::new(panel.height, container.x, container.y).with_top_padding(padding.top)
    }

    pub fn open_position(&self) -> Point {
        Point::new(self.original_left, self.original_top)
    }

    pub fn closed_position(&self) -> Point {
        Point::new(self.original_left, self.draggable_range)
    }
}
