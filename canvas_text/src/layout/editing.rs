// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edits to text and per-character styles.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::iter;

use crate::context::LayoutContext;
use crate::lines::SplitText;
use crate::measure::MeasureText;
use crate::resolve::StyleResolver;
use crate::style::{
    Brush, ScriptShift, StyleDeclaration, StyleKey, StyleProperty, SUBSCRIPT, SUPERSCRIPT,
};

use super::TextLayout;

impl<B: Brush> TextLayout<B> {
    /// Logical positions of the non-break graphemes in a linear range.
    fn logical_positions(
        &self,
        start: usize,
        end: usize,
    ) -> impl Iterator<Item = (usize, usize)> + '_ {
        let end = end.min(self.grapheme_count());
        (start.min(end)..end).filter_map(|index| self.split.logical_position(index))
    }

    /// Merges `declaration` into the style of every grapheme in
    /// `start..end`. Line breaks in the range are skipped.
    pub fn set_style_range<M: MeasureText>(
        &mut self,
        cx: &mut LayoutContext<M>,
        start: usize,
        end: usize,
        declaration: &StyleDeclaration<B>,
    ) {
        let positions: Vec<(usize, usize)> = self.logical_positions(start, end).collect();
        for (line, index) in positions {
            self.styles.set_at(line, index, declaration);
        }
        self.relayout(cx);
    }

    /// Overrides stored for every index in `start..end`, empty where there
    /// are none.
    pub fn styles_in_range(&self, start: usize, end: usize) -> Vec<StyleDeclaration<B>> {
        let end = end.min(self.grapheme_count());
        (start.min(end)..end)
            .map(|index| {
                self.split
                    .logical_position(index)
                    .and_then(|(line, index)| self.styles.declaration_at(line, index))
                    .cloned()
                    .unwrap_or_default()
            })
            .collect()
    }

    /// Removes `key` from every override.
    pub fn remove_style<M: MeasureText>(&mut self, cx: &mut LayoutContext<M>, key: StyleKey) {
        self.styles.remove_style(key);
        self.relayout(cx);
    }

    /// Shrinks and raises `start..end`.
    pub fn set_superscript<M: MeasureText>(
        &mut self,
        cx: &mut LayoutContext<M>,
        start: usize,
        end: usize,
    ) {
        self.set_script(cx, start, end, SUPERSCRIPT);
    }

    /// Shrinks and lowers `start..end`.
    pub fn set_subscript<M: MeasureText>(
        &mut self,
        cx: &mut LayoutContext<M>,
        start: usize,
        end: usize,
    ) {
        self.set_script(cx, start, end, SUBSCRIPT);
    }

    /// The shift is computed from the style of the first grapheme and applied
    /// to the whole range.
    fn set_script<M: MeasureText>(
        &mut self,
        cx: &mut LayoutContext<M>,
        start: usize,
        end: usize,
        shift: ScriptShift,
    ) {
        let Some((line, index)) = self.logical_positions(start, end).next() else {
            return;
        };
        let style = self.styles.resolve_at(line, index);
        let declaration = StyleDeclaration::new()
            .with(StyleProperty::FontSize(style.font_size * shift.size))
            .with(StyleProperty::DeltaY(
                style.delta_y + style.font_size * shift.baseline,
            ));
        self.set_style_range(cx, start, end, &declaration);
    }

    /// Replaces the graphemes in `start..end` with `text`.
    ///
    /// Overrides move with the graphemes they belong to. Inserted graphemes
    /// take the override of the grapheme before `start`, unless that is a
    /// line break or there is none.
    pub fn insert_text<M: MeasureText>(
        &mut self,
        cx: &mut LayoutContext<M>,
        start: usize,
        end: usize,
        text: &str,
    ) {
        let count = self.grapheme_count();
        let end = end.min(count);
        let start = start.min(end);

        let mut flat: Vec<Option<StyleDeclaration<B>>> = vec![None; count];
        for (line, index, declaration) in self.styles.iter() {
            if let Some(slot) = self
                .split
                .line_range(line)
                .map(|range| range.start + index)
                .and_then(|flat_index| flat.get_mut(flat_index))
            {
                *slot = Some(declaration.clone());
            }
        }
        let inherited = start
            .checked_sub(1)
            .filter(|&previous| self.split.logical_position(previous).is_some())
            .and_then(|previous| flat[previous].clone());

        let old = self.split.text();
        let (head, tail) = (
            &old[..self.split.byte_offset(start)],
            &old[self.split.byte_offset(end)..],
        );
        let mut new_text = String::with_capacity(head.len() + text.len() + tail.len());
        new_text.push_str(head);
        new_text.push_str(text);
        new_text.push_str(tail);
        let split = SplitText::new(&new_text);

        let kept_tail = flat.split_off(end);
        flat.truncate(start);
        let inserted = split
            .grapheme_count()
            .saturating_sub(flat.len() + kept_tail.len());
        flat.extend(iter::repeat_n(inherited, inserted));
        flat.extend(kept_tail);
        flat.truncate(split.grapheme_count());

        self.styles.clear();
        for (index, declaration) in flat.into_iter().enumerate() {
            if let Some((line, offset)) = split.logical_position(index) {
                self.styles.replace_at(line, offset, declaration);
            }
        }
        self.split = split;
        self.wrapper.reset();
        self.relayout(cx);
    }
}
