// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-grapheme bounding boxes.

use alloc::vec::Vec;

use crate::context::LayoutContext;
use crate::measure::MeasureText;
use crate::style::{Brush, TextStyle};

/// Where a grapheme sits when text follows a path.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PathPosition {
    /// Horizontal position of the grapheme's centre on the path.
    pub render_left: f32,
    /// Vertical position of the grapheme's centre on the path.
    pub render_top: f32,
    /// Rotation of the grapheme in radians.
    pub angle: f32,
}

/// Geometry of one grapheme on a visual line.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GraphemeBox {
    /// Offset of the leading edge from the start of the line.
    pub left: f32,
    /// Advance of the grapheme on its own.
    pub width: f32,
    /// Advance once kerning against the previous grapheme is applied.
    pub kerned_width: f32,
    /// Font size of the grapheme.
    pub height: f32,
    /// Vertical shift of the grapheme.
    pub delta_y: f32,
    /// Placement along the path, for text that follows one.
    pub path: Option<PathPosition>,
}

/// Measured visual line.
///
/// `boxes` holds one entry per grapheme plus a trailing zero-width entry, so
/// a cursor after the last grapheme has a position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineBoxes {
    /// Sum of the kerned widths of the line's graphemes.
    pub width: f32,
    /// Largest font size on the line.
    pub max_font_size: f32,
    /// Grapheme boxes, followed by the end-of-line box.
    pub boxes: Vec<GraphemeBox>,
}

impl LineBoxes {
    /// Number of graphemes, not counting the end-of-line box.
    pub fn len(&self) -> usize {
        self.boxes.len().saturating_sub(1)
    }

    /// Whether the line has no graphemes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Boxes of the graphemes, without the end-of-line box.
    pub fn graphemes(&self) -> &[GraphemeBox] {
        &self.boxes[..self.len()]
    }
}

/// Measures a visual line.
///
/// `style_at(i)` resolves the style of the `i`-th grapheme of the line; it is
/// called for `0` even on an empty line to size it. Each grapheme is kerned
/// against its predecessor, and its leading edge advances by the
/// predecessor's plain width plus its own kerning delta.
pub fn measure_line<B: Brush, M: MeasureText>(
    cx: &mut LayoutContext<M>,
    graphemes: &[&str],
    mut style_at: impl FnMut(usize) -> TextStyle<B>,
) -> LineBoxes {
    let mut boxes = Vec::with_capacity(graphemes.len() + 1);
    let mut width = 0.0;
    let mut max_font_size = 0.0_f32;
    let mut previous: Option<(&str, TextStyle<B>)> = None;

    for (i, grapheme) in graphemes.iter().copied().enumerate() {
        let style = style_at(i);
        let metrics = cx.measure(
            grapheme,
            &style,
            previous.as_ref().map(|(g, s)| (*g, s)),
        );
        let spacing = style.letter_spacing_px();
        let left = boxes.last().map_or(0.0, |prev: &GraphemeBox| {
            prev.left + prev.width + metrics.kerned_width - metrics.width
        });
        let b = GraphemeBox {
            left,
            width: metrics.width + spacing,
            kerned_width: metrics.kerned_width + spacing,
            height: style.font_size,
            delta_y: style.delta_y,
            path: None,
        };
        width += b.kerned_width;
        max_font_size = max_font_size.max(style.font_size);
        boxes.push(b);
        previous = Some((grapheme, style));
    }

    let end_height = match &previous {
        Some((_, style)) => style.font_size,
        None => {
            max_font_size = style_at(0).font_size;
            max_font_size
        }
    };
    let end_left = boxes.last().map_or(0.0, |b| b.left + b.width);
    boxes.push(GraphemeBox {
        left: end_left,
        height: end_height,
        ..GraphemeBox::default()
    });

    LineBoxes {
        width,
        max_font_size,
        boxes,
    }
}

/// Kerned width of a run of graphemes measured as one word.
///
/// The first grapheme is not kerned against anything before the run.
pub fn measure_word<'a, B: Brush, M: MeasureText>(
    cx: &mut LayoutContext<M>,
    graphemes: impl IntoIterator<Item = &'a str>,
    mut style_at: impl FnMut(usize) -> TextStyle<B>,
) -> f32 {
    let mut width = 0.0;
    let mut previous: Option<(&str, TextStyle<B>)> = None;
    for (i, grapheme) in graphemes.into_iter().enumerate() {
        let style = style_at(i);
        let metrics = cx.measure(
            grapheme,
            &style,
            previous.as_ref().map(|(g, s)| (*g, s)),
        );
        width += metrics.kerned_width + style.letter_spacing_px();
        previous = Some((grapheme, style));
    }
    width
}
