// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translation between visual and logical line addressing.

use alloc::vec::Vec;

use crate::wrap::SplitMode;

/// Where a visual line starts in logical addressing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineMapping {
    /// Logical line the visual line belongs to.
    pub line: usize,
    /// Grapheme offset within the logical line where the visual line starts.
    pub offset: usize,
}

/// Per-visual-line mapping back to logical lines.
///
/// Entries are non-decreasing in `line`, and the visual lines of a logical
/// line partition its graphemes, except that in [`SplitMode::Word`] the single
/// joiner at each wrap point belongs to neither side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleMap {
    entries: Vec<LineMapping>,
    split_mode: SplitMode,
}

impl StyleMap {
    /// Builds the map from logical and visual line lengths, in graphemes.
    pub fn build(
        logical_lens: impl IntoIterator<Item = usize>,
        visual_lens: impl IntoIterator<Item = usize>,
        split_mode: SplitMode,
    ) -> Self {
        let logical_lens: Vec<usize> = logical_lens.into_iter().collect();
        let mut entries = Vec::with_capacity(logical_lens.len());
        let mut line = 0;
        let mut consumed = 0;
        for (i, len) in visual_lens.into_iter().enumerate() {
            if i > 0 {
                let line_len = logical_lens.get(line).copied().unwrap_or(0);
                if consumed >= line_len {
                    line += 1;
                    consumed = 0;
                } else if split_mode == SplitMode::Word {
                    // The joiner dropped at the wrap point.
                    consumed += 1;
                }
            }
            entries.push(LineMapping {
                line,
                offset: consumed,
            });
            consumed += len;
        }
        Self {
            entries,
            split_mode,
        }
    }

    /// Number of visual lines.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no visual lines.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The split mode the map was built for.
    pub fn split_mode(&self) -> SplitMode {
        self.split_mode
    }

    /// The mapping of a visual line.
    pub fn get(&self, visual_line: usize) -> Option<LineMapping> {
        self.entries.get(visual_line).copied()
    }

    /// All mappings in visual order.
    pub fn entries(&self) -> &[LineMapping] {
        &self.entries
    }

    /// Translates a visual position to a logical one.
    pub fn to_logical(&self, visual_line: usize, index: usize) -> LineMapping {
        match self.get(visual_line) {
            Some(entry) => LineMapping {
                line: entry.line,
                offset: entry.offset + index,
            },
            None => LineMapping {
                line: visual_line,
                offset: index,
            },
        }
    }

    /// Translates a logical position to the visual line containing it.
    ///
    /// An offset on a dropped joiner maps to the end of the earlier visual
    /// line.
    pub fn to_visual(&self, line: usize, offset: usize) -> (usize, usize) {
        let candidates = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.line == line && entry.offset <= offset);
        match candidates.last() {
            Some((visual, entry)) => (visual, offset - entry.offset),
            None => (line, offset),
        }
    }

    /// Whether a visual line is the last one of its logical line.
    pub fn is_end_of_wrapping(&self, visual_line: usize) -> bool {
        match (self.get(visual_line), self.get(visual_line + 1)) {
            (Some(current), Some(next)) => next.line != current.line,
            _ => true,
        }
    }

    /// Separator graphemes counted after a visual line in linear indexing.
    ///
    /// Word mode always has one: either the hard break or the dropped
    /// joiner. Grapheme mode only has one at the end of a logical line.
    pub fn missing_newline_offset(&self, visual_line: usize) -> usize {
        match self.split_mode {
            SplitMode::Word => 1,
            SplitMode::Grapheme => usize::from(self.is_end_of_wrapping(visual_line)),
        }
    }
}
