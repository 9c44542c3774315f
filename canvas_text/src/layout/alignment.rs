// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::grapheme::is_word_joiner;

use super::boxes::LineBoxes;

/// Horizontal alignment of lines within the container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    /// Lines start at the left edge.
    #[default]
    Left,
    /// Lines are centred.
    Center,
    /// Lines end at the right edge.
    Right,
    /// Every line, including the last line of a paragraph, is stretched to
    /// the container width.
    Justify,
    /// Lines are stretched; the last line of a paragraph is left aligned.
    JustifyLeft,
    /// Lines are stretched; the last line of a paragraph is centred.
    JustifyCenter,
    /// Lines are stretched; the last line of a paragraph is right aligned.
    JustifyRight,
}

impl Alignment {
    /// Whether any lines are stretched.
    pub fn is_justified(self) -> bool {
        matches!(
            self,
            Self::Justify | Self::JustifyLeft | Self::JustifyCenter | Self::JustifyRight
        )
    }

    /// Whether a line gets stretched, given whether it ends its paragraph.
    pub fn justifies(self, end_of_paragraph: bool) -> bool {
        match self {
            Self::Justify => true,
            Self::JustifyLeft | Self::JustifyCenter | Self::JustifyRight => !end_of_paragraph,
            Self::Left | Self::Center | Self::Right => false,
        }
    }

    /// The non-justified alignment a line falls back to.
    pub(crate) fn fallback(self) -> Self {
        match self {
            Self::Justify | Self::JustifyLeft => Self::Left,
            Self::JustifyCenter => Self::Center,
            Self::JustifyRight => Self::Right,
            other => other,
        }
    }
}

/// Horizontal offset of a line's start within the container.
pub(crate) fn line_left_offset(
    alignment: Alignment,
    container_width: f32,
    line_width: f32,
    end_of_paragraph: bool,
) -> f32 {
    if alignment.justifies(end_of_paragraph) {
        return 0.0;
    }
    let free = container_width - line_width;
    match alignment.fallback() {
        Alignment::Center => free / 2.0,
        Alignment::Right => free,
        _ => 0.0,
    }
}

/// Stretches the joiners of a line so it fills `container_width`.
///
/// `graphemes` are the line's graphemes, in box order. Lines that already
/// fill the container, or have no joiner to stretch, come back unchanged.
pub fn justify<'a>(
    mut line: LineBoxes,
    graphemes: impl IntoIterator<Item = &'a str>,
    container_width: f32,
) -> LineBoxes {
    if line.width >= container_width {
        return line;
    }
    let stretchable: smallvec::SmallVec<[bool; 32]> =
        graphemes.into_iter().map(is_word_joiner).collect();
    let spaces = stretchable.iter().filter(|s| **s).count();
    if spaces == 0 {
        return line;
    }
    let extra = (container_width - line.width) / spaces as f32;
    let mut shift = 0.0;
    for (i, b) in line.boxes.iter_mut().enumerate() {
        b.left += shift;
        if stretchable.get(i).copied().unwrap_or(false) {
            b.width += extra;
            b.kerned_width += extra;
            shift += extra;
        }
    }
    line.width = container_width;
    line
}
