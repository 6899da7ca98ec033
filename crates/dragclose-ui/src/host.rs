use dragclose_foundation::ElementId;
use dragclose_ui_graphics::Rect;

/// What a panel needs from the screen hosting it.
pub trait PanelHost {
    /// Current bounds of `id` in panel coordinates, or `None` if the layout
    /// has no such element.
    fn element_bounds(&self, id: ElementId) -> Option<Rect>;

    /// Opacity of the draggable container, in `[0, 1]`.
    fn set_container_alpha(&mut self, alpha: f32);

    /// Schedule another render tick; the panel's `on_frame` should run on it.
    fn request_frame(&mut self);

    /// Tear down the hosting screen (with a fade-out where the platform has one).
    fn finish(&mut self);
}
