//! Assertion helpers for sliding menu tests.

use slidemenu_ui_graphics::Rect;

/// Assert that a value is within `tolerance` of the expected one.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let off_by = (actual - expected).abs();
    assert!(
        off_by <= tolerance,
        "{msg}: {actual} is {off_by} away from {expected}, allowed {tolerance}"
    );
}

/// Assert each edge of `actual` against `expected`.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    let edges = [
        ("left", actual.x, expected.x),
        ("top", actual.y, expected.y),
        ("right", actual.right(), expected.right()),
        ("bottom", actual.bottom(), expected.bottom()),
    ];
    for (edge, got, want) in edges {
        assert_approx_eq(got, want, tolerance, &format!("{msg} ({edge} edge)"));
    }
}

/// Assert that `values` never decreases.
pub fn assert_monotonic(values: &[f32], msg: &str) {
    for pair in values.windows(2) {
        assert!(
            pair[1] >= pair[0],
            "{}: {} followed by {} in {:?}",
            msg,
            pair[0],
            pair[1],
            values
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_eq_accepts_tolerance() {
        assert_approx_eq(1.0, 1.05, 0.1, "close enough");
    }

    #[test]
    #[should_panic(expected = "too far")]
    fn approx_eq_rejects_outside_tolerance() {
        assert_approx_eq(1.0, 2.0, 0.1, "too far");
    }

    #[test]
    #[should_panic(expected = "dips")]
    fn monotonic_rejects_dips() {
        assert_monotonic(&[0.0, 0.5, 0.4], "dips");
    }
}
