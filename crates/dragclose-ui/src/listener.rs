/// Receives drag events from a panel.
///
/// Every method defaults to doing nothing, so implementors only override what
/// they care about.
pub trait DragListener {
    /// The panel has just started to be dragged.
    fn on_start_dragging(&mut self) {}

    /// The panel moved; `offset` is the vertical drag offset in `[0, 1]`.
    fn on_dragging(&mut self, offset: f32) {
        let _ = offset;
    }

    /// The panel was dragged out of range, just before the host is finished.
    fn on_view_closed(&mut self) {}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopDragListener;

impl DragListener for NoopDragListener {}
