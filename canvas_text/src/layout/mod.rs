// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout types.

pub(crate) mod alignment;
pub(crate) mod boxes;
mod cursor;
mod editing;
pub(crate) mod path;

use alloc::vec::Vec;
use core::ops::Range;

use crate::context::LayoutContext;
use crate::error::Error;
use crate::grapheme;
use crate::lines::SplitText;
use crate::measure::MeasureText;
use crate::resolve::{StyleResolver, StyleSheet};
use crate::style::{Brush, StyleKey, TextStyle, FONT_SIZE_MULT};
use crate::style_map::StyleMap;
use crate::wrap::{SplitMode, WordWrapper, WrapOptions};

pub use alignment::{justify, Alignment};
pub use boxes::{measure_line, measure_word, GraphemeBox, LineBoxes, PathPosition};
pub use cursor::{Addressing, Affinity, Cursor, CursorLocation};
pub use path::{
    place_on_path, wrap_offset, ArcLengthTable, PathMetrics, PathPoint, PathSide, TextPath,
    ARC_LENGTH_ACCURACY,
};

/// Default line height multiplier.
pub const DEFAULT_LINE_HEIGHT: f32 = 1.16;

/// Default minimum container width.
pub const DEFAULT_MIN_WIDTH: f32 = 20.0;

/// Container options of a layout.
#[derive(Clone, Debug)]
pub struct TextOptions {
    /// Requested container width.
    pub width: f32,
    /// Smallest container width when wrapping.
    pub min_width: f32,
    /// Whether lines wrap at the container width.
    pub wrap: bool,
    /// Break granularity when wrapping.
    pub split_mode: SplitMode,
    /// Horizontal alignment.
    pub alignment: Alignment,
    /// Line height multiplier.
    pub line_height: f32,
    /// Whether the text is mirrored horizontally.
    pub flip_x: bool,
    /// Path the text follows, if any.
    pub path: Option<TextPath>,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            width: 0.0,
            min_width: DEFAULT_MIN_WIDTH,
            wrap: true,
            split_mode: SplitMode::Word,
            alignment: Alignment::Left,
            line_height: DEFAULT_LINE_HEIGHT,
            flip_x: false,
            path: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
struct LineData {
    boxes: LineBoxes,
    height: f32,
}

/// Styled text laid out into visual lines.
///
/// Every mutation re-runs the whole pipeline: splitting, wrapping, the
/// style map, then per-line boxes. Queries read the results of the last run.
#[derive(Clone, Debug)]
pub struct TextLayout<B: Brush> {
    options: TextOptions,
    styles: StyleSheet<B>,
    split: SplitText,
    visual: Vec<Range<usize>>,
    style_map: StyleMap,
    wrapper: WordWrapper,
    lines: Vec<LineData>,
    width: f32,
}

impl<B: Brush> TextLayout<B> {
    /// Lays out `text` with the given defaults and options.
    pub fn new<M: MeasureText>(
        cx: &mut LayoutContext<M>,
        text: &str,
        defaults: TextStyle<B>,
        options: TextOptions,
    ) -> Self {
        let mut layout = Self {
            options,
            styles: StyleSheet::new(defaults),
            split: SplitText::new(text),
            visual: Vec::new(),
            style_map: StyleMap::default(),
            wrapper: WordWrapper::new(),
            lines: Vec::new(),
            width: 0.0,
        };
        layout.relayout(cx);
        layout
    }

    /// Lays out UTF-16 text, rejecting unpaired surrogates.
    pub fn from_utf16<M: MeasureText>(
        cx: &mut LayoutContext<M>,
        text: &[u16],
        defaults: TextStyle<B>,
        options: TextOptions,
    ) -> Result<Self, Error> {
        let text = grapheme::decode_utf16(text)?;
        Ok(Self::new(cx, &text, defaults, options))
    }

    /// The text.
    pub fn text(&self) -> &str {
        self.split.text()
    }

    /// The text split into graphemes and logical lines.
    pub fn split(&self) -> &SplitText {
        &self.split
    }

    /// The container options.
    pub fn options(&self) -> &TextOptions {
        &self.options
    }

    /// The style defaults and overlay.
    pub fn styles(&self) -> &StyleSheet<B> {
        &self.styles
    }

    /// The visual-to-logical line mapping.
    pub fn style_map(&self) -> &StyleMap {
        &self.style_map
    }

    /// Number of graphemes, line breaks included.
    pub fn grapheme_count(&self) -> usize {
        self.split.grapheme_count()
    }

    /// Number of lines.
    pub fn line_count(&self, addressing: Addressing) -> usize {
        match addressing {
            Addressing::Logical => self.split.line_count(),
            Addressing::Visual => self.visual.len(),
        }
    }

    /// Grapheme length of a line.
    pub fn line_len(&self, line: usize, addressing: Addressing) -> usize {
        match addressing {
            Addressing::Logical => self.split.line_len(line),
            Addressing::Visual => self.visual.get(line).map_or(0, ExactSizeIterator::len),
        }
    }

    /// Graphemes of a visual line.
    pub fn visual_line(&self, line: usize) -> impl Iterator<Item = &str> + '_ {
        let range = self.visual.get(line).cloned().unwrap_or_default();
        self.split.slice(range)
    }

    /// Flat grapheme range of a visual line.
    pub fn visual_range(&self, line: usize) -> Option<Range<usize>> {
        self.visual.get(line).cloned()
    }

    /// Boxes of a visual line.
    pub fn measure_line(&self, line: usize) -> Option<&LineBoxes> {
        self.lines.get(line).map(|l| &l.boxes)
    }

    /// Width of a visual line.
    pub fn line_width(&self, line: usize) -> f32 {
        self.lines.get(line).map_or(0.0, |l| l.boxes.width)
    }

    /// Height of a visual line.
    pub fn line_height(&self, line: usize) -> f32 {
        self.lines.get(line).map_or(0.0, |l| l.height)
    }

    /// Height of the whole text.
    ///
    /// The last line does not get the line height multiplier's extra
    /// leading.
    pub fn total_height(&self) -> f32 {
        let count = self.lines.len();
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                if i + 1 == count {
                    line.height / self.options.line_height
                } else {
                    line.height
                }
            })
            .sum()
    }

    /// Offset of a visual line's top from the top of the text.
    pub fn line_top(&self, line: usize) -> f32 {
        self.lines.iter().take(line).map(|l| l.height).sum()
    }

    /// Width of the container after the last layout.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Width of the widest unbreakable unit.
    pub fn dynamic_min_width(&self) -> f32 {
        self.wrapper.dynamic_min_width()
    }

    /// Horizontal offset of a visual line within the container.
    pub fn line_left_offset(&self, line: usize) -> f32 {
        alignment::line_left_offset(
            self.options.alignment,
            self.width,
            self.line_width(line),
            self.style_map.is_end_of_wrapping(line),
        )
    }

    /// Complete style of a character at a visual position.
    pub fn style_at(&self, line: usize, index: usize) -> TextStyle<B> {
        let logical = self.style_map.to_logical(line, index);
        self.styles.resolve_at(logical.line, logical.offset)
    }

    /// Whether any character on a visual line (or anywhere when `None`)
    /// overrides `key`.
    pub fn has_overlay_for(&self, key: StyleKey, line: Option<usize>) -> bool {
        let line = line.map(|line| self.style_map.to_logical(line, 0).line);
        self.styles.has_overlay_for(key, line)
    }

    /// Replaces the text. Styles of the old text are dropped.
    pub fn set_text<M: MeasureText>(&mut self, cx: &mut LayoutContext<M>, text: &str) {
        self.split = SplitText::new(text);
        self.styles.clear();
        self.wrapper.reset();
        self.relayout(cx);
    }

    /// Replaces the text with UTF-16 input.
    ///
    /// On error the layout is unchanged.
    pub fn set_text_utf16<M: MeasureText>(
        &mut self,
        cx: &mut LayoutContext<M>,
        text: &[u16],
    ) -> Result<(), Error> {
        let text = grapheme::decode_utf16(text)?;
        self.set_text(cx, &text);
        Ok(())
    }

    /// Sets the requested container width.
    pub fn set_width<M: MeasureText>(&mut self, cx: &mut LayoutContext<M>, width: f32) {
        self.options.width = width;
        self.relayout(cx);
    }

    /// Turns wrapping at the container width on or off.
    pub fn set_wrap_enabled<M: MeasureText>(&mut self, cx: &mut LayoutContext<M>, wrap: bool) {
        self.options.wrap = wrap;
        self.relayout(cx);
    }

    /// Sets the break granularity.
    pub fn set_split_mode<M: MeasureText>(
        &mut self,
        cx: &mut LayoutContext<M>,
        split_mode: SplitMode,
    ) {
        self.options.split_mode = split_mode;
        self.relayout(cx);
    }

    /// Sets the horizontal alignment.
    pub fn set_alignment<M: MeasureText>(
        &mut self,
        cx: &mut LayoutContext<M>,
        alignment: Alignment,
    ) {
        self.options.alignment = alignment;
        self.relayout(cx);
    }

    /// Sets or clears the path the text follows.
    pub fn set_path<M: MeasureText>(&mut self, cx: &mut LayoutContext<M>, path: Option<TextPath>) {
        self.options.path = path;
        self.relayout(cx);
    }

    /// Replaces all container options.
    pub fn set_options<M: MeasureText>(&mut self, cx: &mut LayoutContext<M>, options: TextOptions) {
        self.options = options;
        self.relayout(cx);
    }

    /// Edits the document defaults.
    pub fn update_defaults<M: MeasureText>(
        &mut self,
        cx: &mut LayoutContext<M>,
        f: impl FnOnce(&mut TextStyle<B>),
    ) {
        f(self.styles.defaults_mut());
        self.relayout(cx);
    }

    /// Runs the whole layout pipeline.
    pub fn relayout<M: MeasureText>(&mut self, cx: &mut LayoutContext<M>) {
        let split_mode = self.options.split_mode;
        let wrap_options = WrapOptions {
            width: self.options.width,
            split_mode,
            enabled: self.options.wrap,
            char_spacing: self.styles.defaults().letter_spacing_px(),
        };

        let split = &self.split;
        let styles = &self.styles;
        self.visual = self.wrapper.wrap(split, &wrap_options, |line, range| {
            let start = range.start;
            let flat = split.line_range(line).map_or(0, |r| r.start);
            measure_word(cx, split.slice(flat + range.start..flat + range.end), |i| {
                styles.resolve_at(line, start + i)
            })
        });
        self.style_map = StyleMap::build(
            self.split.line_lens(),
            self.visual.iter().map(ExactSizeIterator::len),
            split_mode,
        );

        if self.options.wrap {
            self.width = self
                .options
                .width
                .max(self.options.min_width)
                .max(self.wrapper.dynamic_min_width());
        }

        let mut lines = Vec::with_capacity(self.visual.len());
        for (line, range) in self.visual.iter().enumerate() {
            let graphemes: Vec<&str> = self.split.slice(range.clone()).collect();
            let mapping = self.style_map.to_logical(line, 0);
            let boxes = measure_line(cx, &graphemes, |i| {
                self.styles.resolve_at(mapping.line, mapping.offset + i)
            });
            lines.push((boxes, graphemes));
        }

        if !self.options.wrap {
            self.width = lines
                .iter()
                .map(|(boxes, _)| boxes.width)
                .fold(self.options.width, f32::max);
        }

        let path = self.options.path.as_ref().filter(|path| path.is_usable());
        let alignment = self.options.alignment;
        let line_height = self.options.line_height;
        self.lines = lines
            .into_iter()
            .enumerate()
            .map(|(line, (boxes, graphemes))| {
                let boxes = match path {
                    Some(path) => place_on_path(boxes, path, alignment),
                    None if alignment.justifies(self.style_map.is_end_of_wrapping(line)) => {
                        justify(boxes, graphemes, self.width)
                    }
                    None => boxes,
                };
                let height = boxes.max_font_size * line_height * FONT_SIZE_MULT;
                LineData { boxes, height }
            })
            .collect();

        tracing::debug!(
            logical_lines = self.split.line_count(),
            visual_lines = self.visual.len(),
            width = self.width,
            dynamic_min_width = self.wrapper.dynamic_min_width(),
            "relayout"
        );
    }
}
