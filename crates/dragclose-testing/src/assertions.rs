//! Assertion helpers for panel tests.

use dragclose_ui_graphics::Rect;

/// Assert that a value is within `tolerance` of `expected`.
///
/// Positions derived from event timestamps and easing curves rarely land on
/// exact floats, so most panel assertions go through this.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert that a sequence never increases.
pub fn assert_non_increasing(values: &[f32], msg: &str) {
    for (index, pair) in values.windows(2).enumerate() {
        assert!(
            pair[1] <= pair[0],
            "{}: value rose from {} to {} at index {}",
            msg,
            pair[0],
            pair[1],
            index + 1
        );
    }
}

/// Assert that a sequence never decreases.
pub fn assert_non_decreasing(values: &[f32], msg: &str) {
    for (index, pair) in values.windows(2).enumerate() {
        assert!(
            pair[1] >= pair[0],
            "{}: value fell from {} to {} at index {}",
            msg,
            pair[0],
            pair[1],
            index + 1
        );
    }
}
