//! A bottom-sheet card wired to a [`PanelController`].
//!
//! The card fills the window; its top strip is the drag handle. Gestures are
//! scripted as timestamped pointer events and pushed through a
//! [`PointerDispatcher`] the way a platform event loop would.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::Context;
use dragclose_foundation::{ElementId, PointerDispatcher, PointerEvent, PointerEventKind};
use dragclose_testing::FakeCaptureEngine;
use dragclose_ui::{DragListener, PanelConfig, PanelController, PanelGeometry};
use dragclose_ui_graphics::{Point, Rect};

use crate::host::DemoHost;

pub const CARD_ID: ElementId = 10;
pub const HANDLE_ID: ElementId = 11;
pub const CARD_WIDTH: f32 = 400.0;
pub const HANDLE_HEIGHT: f32 = 48.0;

const MAX_FRAMES: usize = 600;

/// Logs listener callbacks and counts closes.
#[derive(Clone, Debug, Default)]
struct LoggingListener {
    closes: Rc<Cell<usize>>,
}

impl DragListener for LoggingListener {
    fn on_start_dragging(&mut self) {
        log::info!("drag started");
    }

    fn on_dragging(&mut self, offset: f32) {
        log::debug!("dragging, offset {offset:.3}");
    }

    fn on_view_closed(&mut self) {
        log::info!("card closed");
        self.closes.set(self.closes.get() + 1);
    }
}

pub struct Card {
    panel: PanelController<FakeCaptureEngine, DemoHost>,
    dispatcher: PointerDispatcher,
    closes: Rc<Cell<usize>>,
    time_millis: u64,
    frames: usize,
}

impl Card {
    pub fn new(height: f32, config: PanelConfig) -> anyhow::Result<Self> {
        let bounds = Rect::new(0.0, 0.0, CARD_WIDTH, height);
        let handle = Rect::new(0.0, 0.0, CARD_WIDTH, HANDLE_HEIGHT);
        let engine = FakeCaptureEngine::default().with_view(CARD_ID, bounds);
        let host = DemoHost::new()
            .with_element(CARD_ID, bounds)
            .with_element(HANDLE_ID, handle);
        let config = PanelConfig {
            container_id: Some(CARD_ID),
            handle_id: Some(HANDLE_ID),
            ..config
        };

        let mut panel = PanelController::new(config, engine, host);
        panel
            .attach(PanelGeometry::new(height, bounds.x, bounds.y))
            .context("attaching card panel")?;
        let listener = LoggingListener::default();
        let closes = Rc::clone(&listener.closes);
        panel.set_listener(listener);

        Ok(Self {
            panel,
            dispatcher: PointerDispatcher::new(),
            closes,
            time_millis: 0,
            frames: 0,
        })
    }

    pub fn panel(&self) -> &PanelController<FakeCaptureEngine, DemoHost> {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut PanelController<FakeCaptureEngine, DemoHost> {
        &mut self.panel
    }

    pub fn closes(&self) -> usize {
        self.closes.get()
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Grabs the handle and drags the card down by `distance`, finishing at
    /// `velocity` pixels per second, then lets go.
    pub fn drag(&mut self, distance: f32, velocity: f32) {
        let x = CARD_WIDTH / 2.0;
        let y = HANDLE_HEIGHT / 2.0;
        let last_step = velocity * 0.016;
        self.push(PointerEventKind::Down, Point::new(x, y), 0);
        self.push(
            PointerEventKind::Move,
            Point::new(x, y + distance - last_step),
            120,
        );
        self.push(PointerEventKind::Move, Point::new(x, y + distance), 16);
        self.push(PointerEventKind::Up, Point::new(x, y + distance), 0);
        self.flush();
    }

    /// A tap on the handle: press, release, then the click.
    pub fn tap_handle(&mut self) -> bool {
        let at = Point::new(CARD_WIDTH / 2.0, HANDLE_HEIGHT / 2.0);
        self.push(PointerEventKind::Down, at, 0);
        self.push(PointerEventKind::Up, at, 40);
        let over_handle = self.flush();
        over_handle && self.panel.on_handle_click()
    }

    /// Ticks frames until the card stops animating.
    pub fn run_frames(&mut self) -> anyhow::Result<usize> {
        let mut frames = 0;
        while self.panel.on_frame() {
            frames += 1;
            anyhow::ensure!(frames < MAX_FRAMES, "settle did not finish in {MAX_FRAMES} frames");
        }
        self.frames += frames;
        Ok(frames)
    }

    fn push(&mut self, kind: PointerEventKind, position: Point, after_millis: u64) {
        self.time_millis += after_millis;
        self.dispatcher
            .push(PointerEvent::new(kind, position).with_time(self.time_millis));
    }

    /// Delivers queued events; returns whether the last one hit the handle.
    fn flush(&mut self) -> bool {
        let panel = &mut self.panel;
        let mut handled = false;
        self.dispatcher.drain(|_, event| {
            handled = panel.route_touch(&event);
        });
        handled
    }
}
