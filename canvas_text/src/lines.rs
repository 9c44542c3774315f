// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitting text into logical lines.

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use crate::grapheme;

/// Text segmented into graphemes and hard-break-delimited lines.
///
/// Grapheme indices count every grapheme of the text, line breaks included,
/// so the flat sequence has exactly as many entries as the text has
/// graphemes. Logical lines are ranges into that sequence that exclude their
/// terminating break.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitText {
    text: String,
    graphemes: Vec<Range<usize>>,
    lines: Vec<Range<usize>>,
}

impl SplitText {
    /// Segments `text` and splits it on hard breaks.
    pub fn new(text: &str) -> Self {
        let graphemes = grapheme::byte_ranges(text);
        let mut lines = Vec::new();
        let mut start = 0;
        for (index, range) in graphemes.iter().enumerate() {
            if grapheme::is_line_break(&text[range.clone()]) {
                lines.push(start..index);
                start = index + 1;
            }
        }
        lines.push(start..graphemes.len());
        Self {
            text: String::from(text),
            graphemes,
            lines,
        }
    }

    /// The source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of graphemes, line breaks included.
    pub fn grapheme_count(&self) -> usize {
        self.graphemes.len()
    }

    /// The grapheme at a flat index.
    pub fn grapheme(&self, index: usize) -> Option<&str> {
        self.graphemes.get(index).map(|r| &self.text[r.clone()])
    }

    /// Every grapheme in order, with one break grapheme between lines.
    pub fn flat_graphemes(&self) -> impl Iterator<Item = &str> + '_ {
        self.graphemes.iter().map(|r| &self.text[r.clone()])
    }

    /// Number of logical lines. Never zero: empty text has one empty line.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Flat grapheme range of a logical line, excluding its break.
    pub fn line_range(&self, line: usize) -> Option<Range<usize>> {
        self.lines.get(line).cloned()
    }

    /// Grapheme length of a logical line.
    pub fn line_len(&self, line: usize) -> usize {
        self.lines.get(line).map_or(0, ExactSizeIterator::len)
    }

    /// Grapheme lengths of all logical lines.
    pub fn line_lens(&self) -> impl Iterator<Item = usize> + '_ {
        self.lines.iter().map(ExactSizeIterator::len)
    }

    /// Raw string form of a logical line.
    pub fn line_str(&self, line: usize) -> Option<&str> {
        let range = self.lines.get(line)?;
        if range.is_empty() {
            return Some("");
        }
        let start = self.graphemes[range.start].start;
        let end = self.graphemes[range.end - 1].end;
        Some(&self.text[start..end])
    }

    /// Raw string forms of every logical line.
    pub fn logical_lines(&self) -> impl Iterator<Item = &str> + '_ {
        (0..self.lines.len()).filter_map(|line| self.line_str(line))
    }

    /// Graphemes of a logical line.
    pub fn line_graphemes(&self, line: usize) -> impl Iterator<Item = &str> + '_ {
        self.lines
            .get(line)
            .cloned()
            .unwrap_or_default()
            .map(|index| &self.text[self.graphemes[index].clone()])
    }

    /// Graphemes of every logical line.
    ///
    /// These are also the unwrapped lines a wrapped layout keeps for logical
    /// addressing.
    pub fn grapheme_lines(&self) -> Vec<Vec<&str>> {
        (0..self.lines.len())
            .map(|line| self.line_graphemes(line).collect())
            .collect()
    }

    /// Byte offset where the grapheme at a flat index starts, or the text
    /// length past the end.
    pub(crate) fn byte_offset(&self, index: usize) -> usize {
        self.graphemes.get(index).map_or(self.text.len(), |r| r.start)
    }

    /// Logical position of a flat grapheme index, or `None` for a break.
    pub(crate) fn logical_position(&self, index: usize) -> Option<(usize, usize)> {
        let line = self.lines.partition_point(|r| r.end < index);
        let range = self.lines.get(line)?;
        range.contains(&index).then(|| (line, index - range.start))
    }

    /// Graphemes of a flat index range.
    pub(crate) fn slice(&self, range: Range<usize>) -> impl Iterator<Item = &str> + '_ {
        self.graphemes[range].iter().map(|r| &self.text[r.clone()])
    }
}
