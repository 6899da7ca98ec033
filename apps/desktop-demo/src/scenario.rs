use std::fmt;
use std::str::FromStr;

use dragclose_ui::PanelConfig;

use crate::card::Card;

/// Card height used by every scenario.
pub const CARD_HEIGHT: f32 = 600.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
    /// Short, fast flick down: closes on velocity alone.
    FlickClose,
    /// Slow drag that stops short of half way: springs back open.
    SlowReopen,
    /// Slow drag past half way: closes.
    PastHalfClose,
    /// Tap on the handle with close-on-click enabled.
    TapClose,
    /// Programmatic close, then open again before it finishes.
    CloseThenOpen,
}

impl Scenario {
    pub const ALL: [Scenario; 5] = [
        Scenario::FlickClose,
        Scenario::SlowReopen,
        Scenario::PastHalfClose,
        Scenario::TapClose,
        Scenario::CloseThenOpen,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scenario::FlickClose => "flick-close",
            Scenario::SlowReopen => "slow-reopen",
            Scenario::PastHalfClose => "past-half-close",
            Scenario::TapClose => "tap-close",
            Scenario::CloseThenOpen => "close-then-open",
        }
    }

    pub fn run(self) -> anyhow::Result<Outcome> {
        log::info!("running {self}");
        let config = PanelConfig::default().with_close_on_click(self == Scenario::TapClose);
        let mut card = Card::new(CARD_HEIGHT, config)?;
        match self {
            Scenario::FlickClose => card.drag(CARD_HEIGHT * 0.2, 1_500.0),
            Scenario::SlowReopen => card.drag(CARD_HEIGHT * 0.3, 100.0),
            Scenario::PastHalfClose => card.drag(CARD_HEIGHT * 0.7, 100.0),
            Scenario::TapClose => {
                anyhow::ensure!(card.tap_handle(), "tap did not close the card");
            }
            Scenario::CloseThenOpen => {
                card.panel_mut().close_panel();
                for _ in 0..5 {
                    card.panel_mut().on_frame();
                }
                card.panel_mut().open_panel();
            }
        }
        card.run_frames()?;
        Ok(Outcome::from_card(&card))
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Scenario {
    type Err = anyhow::Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name() == name)
            .ok_or_else(|| anyhow::anyhow!("unknown scenario `{name}`"))
    }
}

/// Where a scenario left the card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outcome {
    pub offset: f32,
    pub alpha: f32,
    pub closed: bool,
    pub finished: bool,
    pub frames: usize,
}

impl Outcome {
    fn from_card(card: &Card) -> Self {
        let panel = card.panel();
        Self {
            offset: panel.drag_offset(),
            alpha: panel.host().alpha(),
            closed: card.closes() > 0,
            finished: panel.host().is_finished(),
            frames: card.frames(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.closed { "closed" } else { "open" };
        write!(
            f,
            "{state} at offset {:.0} (alpha {:.2}) after {} frames",
            self.offset, self.alpha, self.frames
        )
    }
}
