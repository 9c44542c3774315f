// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float comparisons for layout geometry.

use crate::kurbo::Rect;

/// Tolerance used by the geometry assertions.
pub(crate) const TOLERANCE: f64 = 1e-3;

/// Assert that two values are equal within [`TOLERANCE`].
#[track_caller]
pub(crate) fn assert_close(actual: impl Into<f64>, expected: impl Into<f64>, case: &str) {
    let (actual, expected) = (actual.into(), expected.into());
    assert!(
        (actual - expected).abs() <= TOLERANCE,
        "{case}: expected {expected}, got {actual}"
    );
}

/// Assert that two rectangles are equal within [`TOLERANCE`].
#[track_caller]
pub(crate) fn assert_close_rect(actual: Rect, expected: Rect, case: &str) {
    assert_close(actual.x0, expected.x0, &format!("{case} x0"));
    assert_close(actual.y0, expected.y0, &format!("{case} y0"));
    assert_close(actual.x1, expected.x1, &format!("{case} x1"));
    assert_close(actual.y1, expected.y1, &format!("{case} y1"));
}
