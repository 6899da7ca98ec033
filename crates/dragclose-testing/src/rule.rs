//! Scripted gestures against a real [`PanelController`].
//!
//! # Example
//!
//! ```
//! use dragclose_testing::PanelTestRule;
//!
//! let mut rule = PanelTestRule::new(1000.0);
//! rule.drag_and_release(600.0, 100.0);
//! rule.pump_frames();
//! assert_eq!(rule.panel().drag_offset(), 1000.0);
//! ```

use dragclose_foundation::{ElementId, PointerDispatcher, PointerEvent, PointerEventKind};
use dragclose_ui::{InterceptResult, PanelConfig, PanelController, PanelGeometry};
use dragclose_ui_graphics::{Point, Rect};

use crate::engine::FakeCaptureEngine;
use crate::recording::{RecordingHost, RecordingListener};

pub const CONTAINER_ID: ElementId = 1;
pub const HANDLE_ID: ElementId = 2;
pub const PANEL_WIDTH: f32 = 360.0;
pub const HANDLE_HEIGHT: f32 = 100.0;

/// Upper bound on frames pumped before a settle is considered stuck.
const MAX_FRAMES: usize = 600;

pub type TestPanel = PanelController<FakeCaptureEngine, RecordingHost>;

/// A full-height panel whose top strip is the handle, attached and ready.
pub struct PanelTestRule {
    panel: TestPanel,
    listener: RecordingListener,
    dispatcher: PointerDispatcher,
    time_millis: u64,
    pointer: Point,
    last_handled: bool,
}

impl PanelTestRule {
    pub fn new(range: f32) -> Self {
        Self::with_config(range, PanelConfig::default())
    }

    /// Uses `config`'s flags and thresholds; the element ids are always the
    /// rule's own.
    pub fn with_config(range: f32, config: PanelConfig) -> Self {
        let container = Rect::new(0.0, 0.0, PANEL_WIDTH, range);
        let handle = Rect::new(0.0, 0.0, PANEL_WIDTH, HANDLE_HEIGHT);
        let engine = FakeCaptureEngine::default().with_view(CONTAINER_ID, container);
        let host = RecordingHost::new()
            .with_element(CONTAINER_ID, container)
            .with_element(HANDLE_ID, handle);
        let config = PanelConfig {
            container_id: Some(CONTAINER_ID),
            handle_id: Some(HANDLE_ID),
            ..config
        };

        let mut panel = PanelController::new(config, engine, host);
        panel
            .attach(PanelGeometry::new(range, 0.0, 0.0))
            .expect("test layout resolves both elements");
        let listener = RecordingListener::new();
        panel.set_listener(listener.clone());

        Self {
            panel,
            listener,
            dispatcher: PointerDispatcher::new(),
            time_millis: 0,
            pointer: Point::ZERO,
            last_handled: false,
        }
    }

    pub fn panel(&self) -> &TestPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut TestPanel {
        &mut self.panel
    }

    pub fn listener(&self) -> &RecordingListener {
        &self.listener
    }

    pub fn engine(&self) -> &FakeCaptureEngine {
        self.panel.engine()
    }

    pub fn host(&self) -> &RecordingHost {
        self.panel.host()
    }

    pub fn time_millis(&self) -> u64 {
        self.time_millis
    }

    /// Whether the panel reported the last touch-phase event as handled.
    pub fn last_handled(&self) -> bool {
        self.last_handled
    }

    fn event(
        &mut self,
        kind: PointerEventKind,
        x: f32,
        y: f32,
        after_millis: u64,
    ) -> PointerEvent {
        self.time_millis += after_millis;
        self.pointer = Point::new(x, y);
        PointerEvent::new(kind, self.pointer).with_time(self.time_millis)
    }

    /// Queues an event and drains the queue through the touch phase.
    pub fn dispatch(&mut self, event: PointerEvent) -> bool {
        self.dispatcher.push(event);
        let panel = &mut self.panel;
        let mut handled = false;
        self.dispatcher.drain(|_, event| {
            handled = panel.route_touch(&event);
        });
        self.last_handled = handled;
        handled
    }

    /// Offers an event to the intercept phase only.
    pub fn intercept(
        &mut self,
        kind: PointerEventKind,
        x: f32,
        y: f32,
        after_millis: u64,
    ) -> InterceptResult {
        let event = self.event(kind, x, y, after_millis);
        self.panel.route_intercept_check(&event)
    }

    pub fn press(&mut self, x: f32, y: f32) -> bool {
        let event = self.event(PointerEventKind::Down, x, y, 0);
        self.dispatch(event)
    }

    pub fn move_to(&mut self, x: f32, y: f32, after_millis: u64) -> bool {
        let event = self.event(PointerEventKind::Move, x, y, after_millis);
        self.dispatch(event)
    }

    /// Lifts the pointer where it is, at the time of the last sample.
    pub fn release(&mut self) -> bool {
        let event = self.event(PointerEventKind::Up, self.pointer.x, self.pointer.y, 0);
        self.dispatch(event)
    }

    pub fn cancel(&mut self) -> bool {
        let event = self.event(PointerEventKind::Cancel, self.pointer.x, self.pointer.y, 0);
        self.dispatch(event)
    }

    /// Grabs the middle of the handle, drags the panel down by `distance`
    /// and lets go so the engine measures `velocity` on release.
    ///
    /// The last 16 ms of the drag cover `velocity * 0.016` pixels.
    pub fn drag_and_release(&mut self, distance: f32, velocity: f32) {
        let x = PANEL_WIDTH / 2.0;
        let y = HANDLE_HEIGHT / 2.0;
        let last_step = velocity * 0.016;
        self.press(x, y);
        self.move_to(x, y + distance - last_step, 100);
        self.move_to(x, y + distance, 16);
        self.release();
    }

    /// Runs render ticks until the panel stops asking for them. Returns the
    /// number of ticks.
    pub fn pump_frames(&mut self) -> usize {
        let mut frames = 0;
        while self.panel.on_frame() {
            frames += 1;
            assert!(frames < MAX_FRAMES, "settle did not finish");
        }
        frames
    }
}
