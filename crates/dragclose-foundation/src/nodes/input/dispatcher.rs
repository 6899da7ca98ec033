//! Pointer event queue.
//!
//! Platform integrations push events as they arrive and the panel drains them
//! on the UI thread. Events are delivered strictly in arrival order.

use super::types::{PointerEvent, PointerId};

#[derive(Default)]
pub struct PointerDispatcher {
    queue: Vec<(PointerId, PointerEvent)>,
}

impl PointerDispatcher {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    pub fn push(&mut self, event: PointerEvent) {
        self.queue.push((event.id, event));
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(PointerId, PointerEvent),
    {
        for (id, event) in self.queue.drain(..) {
            handler(id, event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_arrival_order() {
        let mut dispatcher = PointerDispatcher::new();
        dispatcher.push(PointerEvent::down(0.0, 0.0).with_time(1));
        dispatcher.push(PointerEvent::moved(0.0, 10.0).with_time(2));
        dispatcher.push(PointerEvent::up(0.0, 20.0).with_time(3));
        assert_eq!(dispatcher.len(), 3);

        let mut times = Vec::new();
        dispatcher.drain(|_, event| times.push(event.time_millis));
        assert_eq!(times, vec![1, 2, 3]);
        assert!(dispatcher.is_empty());
    }
}
