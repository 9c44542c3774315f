// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy word wrapping.

use alloc::vec::Vec;
use core::ops::Range;

use smallvec::SmallVec;

use crate::grapheme::is_word_joiner;
use crate::lines::SplitText;

/// Granularity at which lines may be broken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SplitMode {
    /// Break between words separated by spaces, tabs or carriage returns.
    ///
    /// The joiner at a break belongs to neither visual line.
    #[default]
    Word,
    /// Break between any two graphemes, for scripts without word spaces.
    ///
    /// Nothing is dropped at a break.
    Grapheme,
}

/// Parameters of a wrap pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WrapOptions {
    /// Width lines should fit in.
    pub width: f32,
    /// Break granularity.
    pub split_mode: SplitMode,
    /// When `false`, only hard breaks start new lines.
    pub enabled: bool,
    /// Spacing added after every character, in pixels.
    pub char_spacing: f32,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            width: 0.0,
            split_mode: SplitMode::Word,
            enabled: true,
            char_spacing: 0.0,
        }
    }
}

#[derive(Clone, Debug)]
struct Word {
    /// Grapheme range within the logical line.
    range: Range<usize>,
    width: f32,
}

type LineWords = SmallVec<[Word; 8]>;

/// Wraps logical lines into visual lines.
///
/// Tracks the widest unbreakable unit seen so far: wrapping never packs
/// lines narrower than that, and the floor only grows.
#[derive(Clone, Debug, Default)]
pub struct WordWrapper {
    dynamic_min_width: f32,
    largest_word_width: f32,
}

impl WordWrapper {
    /// Creates a wrapper with no minimum width.
    pub fn new() -> Self {
        Self::default()
    }

    /// Width of the widest unbreakable unit seen across wrap passes.
    pub fn dynamic_min_width(&self) -> f32 {
        self.dynamic_min_width
    }

    /// Width of the widest word in the last wrap pass.
    pub fn largest_word_width(&self) -> f32 {
        self.largest_word_width
    }

    /// Forgets the minimum width, e.g. after the text is replaced.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Wraps every logical line of `text`.
    ///
    /// `measure(line, range)` returns the kerned width of a grapheme range of
    /// a logical line, measured as a standalone word. Returns the visual lines
    /// as flat grapheme ranges.
    pub fn wrap(
        &mut self,
        text: &SplitText,
        options: &WrapOptions,
        mut measure: impl FnMut(usize, Range<usize>) -> f32,
    ) -> Vec<Range<usize>> {
        let mut visual = Vec::with_capacity(text.line_count());
        if !options.enabled {
            visual.extend((0..text.line_count()).filter_map(|line| text.line_range(line)));
            return visual;
        }

        let mut largest_word_width = 0.0_f32;
        let words: Vec<LineWords> = (0..text.line_count())
            .map(|line| {
                let words = split_words(text, line, options.split_mode);
                words
                    .into_iter()
                    .map(|range| {
                        let width = if range.is_empty() {
                            0.0
                        } else {
                            measure(line, range.clone())
                        };
                        largest_word_width = largest_word_width.max(width);
                        Word { range, width }
                    })
                    .collect()
            })
            .collect();

        let max_width = options
            .width
            .max(largest_word_width)
            .max(self.dynamic_min_width);
        for (line, line_words) in words.iter().enumerate() {
            let base = text.line_range(line).map_or(0, |r| r.start);
            let line_len = text.line_len(line);
            wrap_line(
                line_words,
                max_width,
                options,
                line_len,
                |range| measure(line, range),
                |range| visual.push(base + range.start..base + range.end),
            );
        }

        self.largest_word_width = largest_word_width;
        self.dynamic_min_width = self
            .dynamic_min_width
            .max(largest_word_width - options.char_spacing);
        tracing::trace!(
            lines = visual.len(),
            largest_word_width,
            dynamic_min_width = self.dynamic_min_width,
            "wrapped"
        );
        visual
    }
}

/// Splits a logical line into breakable units.
///
/// In word mode consecutive joiners produce empty words, and every word but
/// the last is followed by exactly one joiner. A line always has at least
/// one (possibly empty) word.
fn split_words(text: &SplitText, line: usize, mode: SplitMode) -> SmallVec<[Range<usize>; 8]> {
    let mut words = SmallVec::new();
    match mode {
        SplitMode::Grapheme => {
            words.extend((0..text.line_len(line)).map(|i| i..i + 1));
        }
        SplitMode::Word => {
            let mut start = 0;
            for (i, grapheme) in text.line_graphemes(line).enumerate() {
                if is_word_joiner(grapheme) {
                    words.push(start..i);
                    start = i + 1;
                }
            }
            words.push(start..text.line_len(line));
        }
    }
    if words.is_empty() {
        words.push(0..0);
    }
    words
}

fn wrap_line(
    words: &[Word],
    max_width: f32,
    options: &WrapOptions,
    line_len: usize,
    mut measure: impl FnMut(Range<usize>) -> f32,
    mut emit: impl FnMut(Range<usize>),
) {
    let spacing = options.char_spacing;
    let mut line_width = 0.0;
    let mut infix_width = 0.0;
    let mut just_started = true;
    let mut start = words.first().map_or(0, |w| w.range.start);
    let mut end = start;
    for word in words {
        line_width += infix_width + word.width - spacing;
        if line_width > max_width && !just_started {
            emit(start..end);
            start = word.range.start;
            line_width = word.width;
            just_started = true;
        } else {
            line_width += spacing;
        }
        end = word.range.end;
        infix_width = match options.split_mode {
            SplitMode::Word if end < line_len => measure(end..end + 1),
            _ => 0.0,
        };
        just_started = false;
    }
    emit(start..end);
}
