// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text that follows a curve.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::f32::consts::PI;
use core::fmt;

#[cfg(feature = "libm")]
#[allow(unused_imports)]
use core_maths::CoreFloat;
use peniko::kurbo::{BezPath, ParamCurve, ParamCurveArclen, ParamCurveDeriv, PathSeg, Vec2};

use super::alignment::Alignment;
use super::boxes::{LineBoxes, PathPosition};

/// Arc-length accuracy used when building and querying [`ArcLengthTable`].
pub const ARC_LENGTH_ACCURACY: f64 = 1e-3;

/// A point on a path together with the direction of travel there.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PathPoint {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
    /// Angle of the tangent in radians.
    pub angle: f32,
}

/// Arc-length parameterization of a path.
///
/// Hosts with their own geometry code can implement this directly; others
/// can use [`ArcLengthTable`].
pub trait PathMetrics: fmt::Debug + Send + Sync {
    /// Length of the whole path.
    fn total_length(&self) -> f32;

    /// The point at `length` along the path, clamped to the path's ends.
    fn point_at_length(&self, length: f32) -> PathPoint;
}

#[derive(Clone, Debug)]
struct Segment {
    seg: PathSeg,
    start: f64,
    length: f64,
}

/// Arc lengths of a [`BezPath`], computed once.
#[derive(Clone, Debug, Default)]
pub struct ArcLengthTable {
    segments: Vec<Segment>,
    total: f64,
}

impl ArcLengthTable {
    /// Measures every segment of `path`. Zero-length segments are skipped.
    pub fn new(path: &BezPath) -> Self {
        let mut segments = Vec::new();
        let mut total = 0.0;
        for seg in path.segments() {
            let length = seg.arclen(ARC_LENGTH_ACCURACY);
            if !length.is_finite() || length <= 0.0 {
                continue;
            }
            segments.push(Segment {
                seg,
                start: total,
                length,
            });
            total += length;
        }
        Self { segments, total }
    }

    /// Number of measured segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

impl PathMetrics for ArcLengthTable {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Layout works in f32; path lengths are accumulated in f64."
    )]
    fn total_length(&self) -> f32 {
        self.total as f32
    }

    fn point_at_length(&self, length: f32) -> PathPoint {
        let length = f64::from(length).clamp(0.0, self.total);
        let index = self
            .segments
            .partition_point(|s| s.start + s.length < length)
            .min(self.segments.len().saturating_sub(1));
        let Some(segment) = self.segments.get(index) else {
            return PathPoint::default();
        };
        let local = (length - segment.start).clamp(0.0, segment.length);
        let t = segment.seg.inv_arclen(local, ARC_LENGTH_ACCURACY);
        let point = segment.seg.eval(t);
        let tangent: Vec2 = match segment.seg {
            PathSeg::Line(line) => line.p1 - line.p0,
            PathSeg::Quad(quad) => quad.deriv().eval(t).to_vec2(),
            PathSeg::Cubic(cubic) => cubic.deriv().eval(t).to_vec2(),
        };
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Layout works in f32; path geometry is evaluated in f64 for accuracy."
        )]
        let (x, y, angle) = (point.x as f32, point.y as f32, tangent.atan2() as f32);
        PathPoint { x, y, angle }
    }
}

/// Which side of the path the text runs along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PathSide {
    /// Text runs in the path's direction.
    #[default]
    Left,
    /// Text runs against the path's direction, upside down.
    Right,
}

/// A path for text to follow.
#[derive(Clone, Debug)]
pub struct TextPath {
    /// Arc-length parameterization of the path.
    pub metrics: Arc<dyn PathMetrics>,
    /// Side of the path the text runs along.
    pub side: PathSide,
    /// Distance along the path added to every line's starting offset.
    pub start_offset: f32,
}

impl TextPath {
    /// Creates a path on the left side with no start offset.
    pub fn new(metrics: impl PathMetrics + 'static) -> Self {
        Self {
            metrics: Arc::new(metrics),
            side: PathSide::Left,
            start_offset: 0.0,
        }
    }

    /// Measures a [`BezPath`] and wraps it as a text path.
    pub fn from_bez_path(path: &BezPath) -> Self {
        Self::new(ArcLengthTable::new(path))
    }

    /// Sets the side of the path.
    #[must_use]
    pub fn with_side(mut self, side: PathSide) -> Self {
        self.side = side;
        self
    }

    /// Sets the start offset.
    #[must_use]
    pub fn with_start_offset(mut self, start_offset: f32) -> Self {
        self.start_offset = start_offset;
        self
    }

    /// Whether the path has any length to place text on.
    pub fn is_usable(&self) -> bool {
        let total = self.metrics.total_length();
        total.is_finite() && total > 0.0
    }

    /// Offset along the path where a line of `line_width` starts.
    ///
    /// The result is not wrapped; see [`wrap_offset`].
    pub fn line_start(&self, alignment: Alignment, line_width: f32) -> f32 {
        let total = self.metrics.total_length();
        let reverse = self.side == PathSide::Right;
        let start = match alignment.fallback() {
            Alignment::Center => (total - line_width) / 2.0,
            Alignment::Right if !reverse => total - line_width,
            Alignment::Right => 0.0,
            _ if reverse => total - line_width,
            _ => 0.0,
        };
        if reverse {
            start - self.start_offset
        } else {
            start + self.start_offset
        }
    }
}

/// Brings an offset past either end of a path of `total` length back onto it.
pub fn wrap_offset(offset: f32, total: f32) -> f32 {
    if offset > total || offset < 0.0 {
        offset.rem_euclid(total)
    } else {
        offset
    }
}

/// Places every grapheme of a measured line on `path`.
///
/// Each grapheme sits at the point under the centre of its advance,
/// relative to the start of the path. On the right side graphemes are
/// placed from the last one backwards and turned by half a turn. The
/// end-of-line box is not placed.
pub fn place_on_path(mut line: LineBoxes, path: &TextPath, alignment: Alignment) -> LineBoxes {
    let total = path.metrics.total_length();
    let origin = path.metrics.point_at_length(0.0);
    let reverse = path.side == PathSide::Right;
    let mut position = path.line_start(alignment, line.width);
    let len = line.len();
    for step in 0..len {
        let i = if reverse { len - 1 - step } else { step };
        let b = &mut line.boxes[i];
        position = wrap_offset(position, total);
        let point = path
            .metrics
            .point_at_length(position + b.kerned_width / 2.0);
        b.path = Some(PathPosition {
            render_left: point.x - origin.x,
            render_top: point.y - origin.y,
            angle: if reverse { point.angle + PI } else { point.angle },
        });
        position += b.kerned_width;
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use peniko::kurbo::Point;

    fn straight(length: f64) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(Point::ZERO);
        path.line_to((length, 0.0));
        path
    }

    #[test]
    fn table_measures_lines() {
        let mut path = straight(60.0);
        path.line_to((60.0, 40.0));
        let table = ArcLengthTable::new(&path);
        assert_eq!(table.segment_count(), 2);
        assert!((table.total_length() - 100.0).abs() < 1e-3);
        let p = table.point_at_length(80.0);
        assert!((p.x - 60.0).abs() < 1e-3 && (p.y - 20.0).abs() < 1e-3);
        assert!((p.angle - PI / 2.0).abs() < 1e-4);
        // Out of range lengths clamp.
        assert_eq!(table.point_at_length(-5.0).x, 0.0);
    }

    #[test]
    fn empty_path_is_unusable() {
        assert!(!TextPath::from_bez_path(&BezPath::new()).is_usable());
        let degenerate = BezPath::from_vec(alloc::vec![
            peniko::kurbo::PathEl::MoveTo(Point::ZERO),
            peniko::kurbo::PathEl::LineTo(Point::ZERO),
        ]);
        assert!(!TextPath::from_bez_path(&degenerate).is_usable());
    }

    #[test]
    fn curves_have_tangent_angles() {
        let mut path = BezPath::new();
        path.move_to(Point::ZERO);
        path.quad_to((50.0, 50.0), (100.0, 0.0));
        let table = ArcLengthTable::new(&path);
        let start = table.point_at_length(0.0);
        assert!((start.angle - PI / 4.0).abs() < 1e-3);
        let middle = table.point_at_length(table.total_length() / 2.0);
        assert!(middle.angle.abs() < 1e-2);
    }

    #[test]
    fn centered_line_longer_than_path_wraps() {
        let path = TextPath::from_bez_path(&straight(100.0));
        let start = path.line_start(Alignment::Center, 150.0);
        assert_eq!(start, -25.0);
        assert_eq!(wrap_offset(start, 100.0), 75.0);
        assert_eq!(wrap_offset(230.0, 100.0), 30.0);
        assert_eq!(wrap_offset(100.0, 100.0), 100.0);
    }

    #[test]
    fn right_side_mirrors_start_offsets() {
        let path = TextPath::from_bez_path(&straight(100.0))
            .with_side(PathSide::Right)
            .with_start_offset(5.0);
        assert_eq!(path.line_start(Alignment::Left, 30.0), 65.0);
        assert_eq!(path.line_start(Alignment::Right, 30.0), -5.0);
    }
}
