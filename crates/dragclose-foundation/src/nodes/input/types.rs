use dragclose_ui_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

pub type PointerId = u64;

/// Identifier the host layout uses for a view (the draggable container, the
/// handle, or anything else it can resolve).
pub type ElementId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pointer sample with consumption tracking.
///
/// Positions are local to the panel host. `time_millis` is the platform event
/// time; capture engines derive release velocity from it.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    pub time_millis: u64,
    /// Shared via Rc<Cell> so consumption is visible across copies.
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: 0,
            kind,
            position,
            time_millis: 0,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y))
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y))
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y))
    }

    pub fn with_time(mut self, time_millis: u64) -> Self {
        self.time_millis = time_millis;
        self
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    /// Mark this event as consumed so nothing downstream handles it.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumption_is_shared_between_clones() {
        let event = PointerEvent::down(1.0, 2.0).with_time(16);
        let copy = event.clone();
        copy.consume();
        assert!(event.is_consumed());
        assert_eq!(event.time_millis, 16);
        assert_eq!(event.kind, PointerEventKind::Down);
    }
}
