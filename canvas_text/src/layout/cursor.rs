// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping between linear indices, line positions and points.

use alloc::vec::Vec;

#[cfg(feature = "libm")]
#[allow(unused_imports)]
use core_maths::CoreFloat;
use peniko::kurbo::{Point, Rect};

use crate::style::{Brush, FONT_SIZE_FRACTION};

use super::TextLayout;

/// Width given to the selection of an empty line.
pub(crate) const EMPTY_LINE_SELECTION_WIDTH: f32 = 5.0;

/// Which line structure a line index refers to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Addressing {
    /// Lines as displayed, after wrapping.
    #[default]
    Visual,
    /// Lines delimited by hard breaks.
    Logical,
}

/// Which side of a soft wrap point a linear index attaches to.
///
/// Only grapheme-mode wrap points are ambiguous: the end of one visual line
/// and the start of the next share a linear index there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Affinity {
    /// Attached to the grapheme that follows, at the start of the later line.
    #[default]
    Downstream,
    /// Attached to the grapheme that precedes, at the end of the earlier line.
    Upstream,
}

/// A linear index with the line side it attaches to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Linear grapheme index.
    pub index: usize,
    /// Side of a wrap point the index attaches to.
    pub affinity: Affinity,
}

/// A position as a line and a grapheme offset within it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CursorLocation {
    /// Line index.
    pub line: usize,
    /// Grapheme offset within the line; equal to the line length at its end.
    pub index: usize,
}

impl<B: Brush> TextLayout<B> {
    fn separator_after(&self, line: usize, addressing: Addressing) -> usize {
        match addressing {
            Addressing::Logical => 1,
            Addressing::Visual => self.style_map.missing_newline_offset(line),
        }
    }

    /// Finds the line position of a linear index.
    ///
    /// An index at a line boundary resolves to the end of the earlier line.
    /// Indices past the end clamp to the end of the last line.
    pub fn locate(&self, index: usize, addressing: Addressing) -> CursorLocation {
        self.locate_with_affinity(index, addressing, Affinity::Upstream)
    }

    /// Finds the line position of a linear index, resolving a grapheme-mode
    /// wrap point to the side named by `affinity`.
    pub fn locate_with_affinity(
        &self,
        index: usize,
        addressing: Addressing,
        affinity: Affinity,
    ) -> CursorLocation {
        let count = self.line_count(addressing);
        let mut remaining = index;
        for line in 0..count {
            let len = self.line_len(line, addressing);
            let separator = self.separator_after(line, addressing);
            let moves_down =
                affinity == Affinity::Downstream && separator == 0 && line + 1 < count;
            if remaining < len || (remaining == len && !moves_down) {
                return CursorLocation {
                    line,
                    index: remaining,
                };
            }
            remaining -= len + separator;
        }
        let line = count.saturating_sub(1);
        CursorLocation {
            line,
            index: self.line_len(line, addressing),
        }
    }

    /// Linear index of a line position. Out of range positions clamp.
    pub fn index_of(&self, location: CursorLocation, addressing: Addressing) -> usize {
        let count = self.line_count(addressing);
        let line = location.line.min(count.saturating_sub(1));
        let before: usize = (0..line)
            .map(|l| self.line_len(l, addressing) + self.separator_after(l, addressing))
            .sum();
        before + location.index.min(self.line_len(line, addressing))
    }

    /// Visual line containing a vertical offset, or the nearest one.
    pub fn line_at_y(&self, y: f64) -> usize {
        let mut top = 0.0_f64;
        let mut found = 0;
        for line in 0..self.lines.len() {
            if top > y {
                break;
            }
            found = line;
            top += f64::from(self.line_height(line));
        }
        found
    }

    /// Linear index nearest to a point in the text's local space.
    ///
    /// The point lands before or after the grapheme under it, whichever edge
    /// is closer.
    pub fn hit_test(&self, point: Point) -> usize {
        self.hit_test_cursor(point).index
    }

    /// Like [`hit_test`](Self::hit_test), also reporting which visual line
    /// the index belongs to.
    ///
    /// A hit at the start of a line is downstream and anywhere else is
    /// upstream, so [`locate_with_affinity`](Self::locate_with_affinity)
    /// always finds the line under the point.
    pub fn hit_test_cursor(&self, point: Point) -> Cursor {
        let line = self.line_at_y(point.y);
        let line_start = self.index_of(CursorLocation { line, index: 0 }, Addressing::Visual);
        let len = self.line_len(line, Addressing::Visual);

        let mut offset = 0;
        if let Some(boxes) = self.measure_line(line) {
            let mut leading = f64::from(self.line_left_offset(line));
            for b in boxes.graphemes() {
                let trailing = leading + f64::from(b.kerned_width);
                if point.x <= trailing {
                    if (point.x - trailing).abs() <= (point.x - leading).abs() {
                        offset += 1;
                    }
                    break;
                }
                leading = trailing;
                offset += 1;
            }
        }
        if self.options.flip_x {
            offset = len - offset.min(len);
        }
        Cursor {
            index: (line_start + offset).min(self.grapheme_count()),
            affinity: if offset == 0 {
                Affinity::Downstream
            } else {
                Affinity::Upstream
            },
        }
    }

    /// Rectangle of a caret of `width` at a linear index.
    pub fn cursor_rect(&self, index: usize, width: f64) -> Rect {
        let location = self.locate(index, Addressing::Visual);
        let line = location.line;
        let style = self.style_at(line, location.index.saturating_sub(1));

        let mut left = self.line_left_offset(line);
        if let Some(b) = self
            .measure_line(line)
            .and_then(|boxes| boxes.boxes.get(location.index))
        {
            left += b.left;
        }
        let spacing = self.styles.defaults().letter_spacing_px();
        if spacing != 0.0 && location.index == self.line_len(line, Addressing::Visual) {
            left -= spacing;
        }

        let line_height = self.line_height(line);
        let top = self.line_top(line)
            + (1.0 - FONT_SIZE_FRACTION) * line_height / self.options.line_height
            - style.font_size * (1.0 - FONT_SIZE_FRACTION)
            + style.delta_y;
        let left = f64::from(left);
        let top = f64::from(top);
        Rect::new(
            left - width / 2.0,
            top,
            left + width / 2.0,
            top + f64::from(style.font_size),
        )
    }

    /// Rectangles covering the selection between two linear indices, one per
    /// visual line.
    pub fn selection_rects(&self, start: usize, end: usize) -> Vec<Rect> {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        let from = self.locate(start, Addressing::Visual);
        let to = self.locate(end, Addressing::Visual);
        let justified = self.options.alignment.is_justified();
        let spacing = self.styles.defaults().letter_spacing_px();

        let mut rects = Vec::with_capacity(to.line - from.line + 1);
        let mut top = self.line_top(from.line);
        for line in from.line..=to.line {
            let Some(boxes) = self.measure_line(line) else {
                break;
            };
            let box_left = |index: usize| boxes.boxes.get(index).map_or(0.0, |b| b.left);
            let start_x = if line == from.line {
                box_left(from.index)
            } else {
                0.0
            };
            let end_x = if line < to.line {
                if justified && !self.style_map.is_end_of_wrapping(line) {
                    self.width
                } else if boxes.width > 0.0 {
                    boxes.width
                } else {
                    EMPTY_LINE_SELECTION_WIDTH
                }
            } else if to.index == 0 {
                box_left(0)
            } else {
                boxes
                    .boxes
                    .get(to.index - 1)
                    .map_or(0.0, |b| b.left + b.width - spacing)
            };

            let full_height = self.line_height(line);
            let lh = self.options.line_height;
            let height = if lh < 1.0 || (line == to.line && lh > 1.0) {
                full_height / lh
            } else {
                full_height
            };
            let x = self.line_left_offset(line) + start_x;
            rects.push(Rect::new(
                f64::from(x),
                f64::from(top),
                f64::from(x + end_x - start_x),
                f64::from(top + height),
            ));
            top += full_height;
        }
        rects
    }
}
