use super::*;

#[test]
fn flick_closes_and_finishes() {
    let outcome = Scenario::FlickClose.run().expect("scenario");
    assert!(outcome.closed);
    assert!(outcome.finished);
    assert_eq!(outcome.offset, CARD_HEIGHT);
    assert_eq!(outcome.alpha, 0.0);
    assert!(outcome.frames > 0);
}

#[test]
fn slow_short_drag_reopens() {
    let outcome = Scenario::SlowReopen.run().expect("scenario");
    assert!(!outcome.closed);
    assert!(!outcome.finished);
    assert_eq!(outcome.offset, 0.0);
    assert_eq!(outcome.alpha, 1.0);
}

#[test]
fn slow_long_drag_closes() {
    let outcome = Scenario::PastHalfClose.run().expect("scenario");
    assert!(outcome.closed);
    assert_eq!(outcome.offset, CARD_HEIGHT);
}

#[test]
fn tap_closes_when_enabled() {
    let outcome = Scenario::TapClose.run().expect("scenario");
    assert!(outcome.closed);
    assert!(outcome.finished);
}

#[test]
fn reopening_mid_close_stays_open() {
    let outcome = Scenario::CloseThenOpen.run().expect("scenario");
    assert!(!outcome.closed);
    assert_eq!(outcome.offset, 0.0);
}

#[test]
fn tap_without_close_on_click_keeps_card() {
    let mut card = Card::new(CARD_HEIGHT, dragclose_ui::PanelConfig::default()).expect("card");
    assert!(!card.tap_handle());
    assert!(!card.panel().is_ui_blocked());
    assert_eq!(card.run_frames().expect("frames"), 0);
}

#[test]
fn scenarios_parse_by_name() {
    for scenario in Scenario::ALL {
        assert_eq!(scenario.name().parse::<Scenario>().ok(), Some(scenario));
    }
    assert!("sideways".parse::<Scenario>().is_err());
}
