// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::style::FONT_SIZE_MULT;
use crate::{
    FontDeclaration, LayoutContext, MeasureText, SplitMode, TextLayout, TextOptions, TextStyle,
};

/// Advance of every character at the default 40px size.
pub(crate) const CHAR_WIDTH: f32 = 10.0;

/// Height of a line of default-sized text.
pub(crate) const LINE_HEIGHT: f32 = 40.0 * 1.16 * FONT_SIZE_MULT;

/// Deterministic stand-in for the host measurer.
///
/// Every character is a quarter em wide, except those given their own
/// advance. Kerning pairs adjust the width of strings containing them.
/// Every call is recorded.
#[derive(Clone, Debug, Default)]
pub(crate) struct TestMeasurer {
    advances: HashMap<char, f32>,
    kerning: HashMap<(char, char), f32>,
    pub(crate) calls: Vec<String>,
}

impl TestMeasurer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Gives `c` an advance of `em` ems.
    pub(crate) fn with_advance(mut self, c: char, em: f32) -> Self {
        self.advances.insert(c, em);
        self
    }

    /// Adjusts the pair `left`, `right` by `em` ems.
    pub(crate) fn with_kerning(mut self, left: char, right: char, em: f32) -> Self {
        self.kerning.insert((left, right), em);
        self
    }
}

impl MeasureText for TestMeasurer {
    fn measure_text(&mut self, font: &FontDeclaration<'_>, text: &str) -> f32 {
        self.calls.push(String::from(text));
        let mut em = 0.0;
        let mut previous = None;
        for c in text.chars() {
            em += self.advances.get(&c).copied().unwrap_or(0.25);
            if let Some(p) = previous {
                em += self.kerning.get(&(p, c)).copied().unwrap_or(0.0);
            }
            previous = Some(c);
        }
        em * font.size
    }
}

/// A measurement context plus shortcuts for building layouts in tests.
pub(crate) struct TestEnv {
    pub(crate) cx: LayoutContext<TestMeasurer>,
}

impl TestEnv {
    pub(crate) fn new() -> Self {
        Self::with_measurer(TestMeasurer::new())
    }

    pub(crate) fn with_measurer(measurer: TestMeasurer) -> Self {
        Self {
            cx: LayoutContext::new(measurer),
        }
    }

    pub(crate) fn layout(&mut self, text: &str, options: TextOptions) -> TextLayout<u32> {
        TextLayout::new(&mut self.cx, text, TextStyle::default(), options)
    }

    /// Lays out `text` wrapping at `width`.
    pub(crate) fn wrapped(&mut self, text: &str, width: f32) -> TextLayout<u32> {
        self.layout(
            text,
            TextOptions {
                width,
                ..TextOptions::default()
            },
        )
    }

    /// Lays out `text` wrapping at `width` between any two graphemes.
    pub(crate) fn wrapped_graphemes(&mut self, text: &str, width: f32) -> TextLayout<u32> {
        self.layout(
            text,
            TextOptions {
                width,
                split_mode: SplitMode::Grapheme,
                ..TextOptions::default()
            },
        )
    }

    pub(crate) fn calls(&self) -> usize {
        self.cx.measurer().calls.len()
    }
}

/// The visual lines of a layout as strings.
pub(crate) fn visual_lines(layout: &TextLayout<u32>) -> Vec<String> {
    (0..layout.line_count(crate::Addressing::Visual))
        .map(|line| layout.visual_line(line).collect())
        .collect()
}
