// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-font measurement cache with inferred kerning.

use alloc::boxed::Box;
use alloc::string::String;

use hashbrown::HashMap;

use crate::style::{Brush, FontDeclaration, TextStyle};

/// The host's text measurement primitive.
///
/// Returns the advance width of `text` rendered with `font`. The engine
/// treats this as opaque: shaping, ligatures and font loading all happen on
/// the other side.
pub trait MeasureText {
    /// Measures `text` in `font`.
    fn measure_text(&mut self, font: &FontDeclaration<'_>, text: &str) -> f32;
}

impl<F> MeasureText for F
where
    F: FnMut(&FontDeclaration<'_>, &str) -> f32,
{
    fn measure_text(&mut self, font: &FontDeclaration<'_>, text: &str) -> f32 {
        self(font, text)
    }
}

/// Advance of a single grapheme.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CharMetrics {
    /// Width of the grapheme measured on its own.
    pub width: f32,
    /// Width once kerning against the previous grapheme is accounted for.
    pub kerned_width: f32,
}

/// Memoized grapheme and kerning-couple widths.
///
/// Widths are stored at [`REFERENCE_FONT_SIZE`](Self::REFERENCE_FONT_SIZE)
/// per font table (family, style and weight) and scaled on the way out, so
/// small sizes do not accumulate rounding error. Entries are never evicted:
/// a font and string always measure the same.
#[derive(Clone, Debug, Default)]
pub struct MeasurementCache {
    fonts: HashMap<String, HashMap<Box<str>, f32>>,
}

impl MeasurementCache {
    /// Font size at which all measurement happens.
    pub const REFERENCE_FONT_SIZE: f32 = 400.0;

    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Measures `grapheme` in `style`, inferring kerning from `previous`.
    ///
    /// Kerning is only inferred when the previous grapheme resolves to the
    /// same font declaration: the couple is measured together and the
    /// previous grapheme's own width subtracted. Across a style boundary the
    /// kerned width equals the plain width.
    pub fn measure<B: Brush>(
        &mut self,
        measurer: &mut impl MeasureText,
        grapheme: &str,
        style: &TextStyle<B>,
        previous: Option<(&str, &TextStyle<B>)>,
    ) -> CharMetrics {
        let font = style.font();
        let reference = font.with_size(Self::REFERENCE_FONT_SIZE);
        let table = self.fonts.entry(font.cache_key()).or_default();

        let width = cached_width(table, measurer, &reference, grapheme);
        let mut kerned_width = width;
        if let Some((previous, previous_style)) = previous {
            if previous_style.font() == font {
                let previous_width = cached_width(table, measurer, &reference, previous);
                let mut couple = String::with_capacity(previous.len() + grapheme.len());
                couple.push_str(previous);
                couple.push_str(grapheme);
                let couple_width = cached_width(table, measurer, &reference, &couple);
                kerned_width = couple_width - previous_width;
            }
        }

        let scale = font.size / Self::REFERENCE_FONT_SIZE;
        CharMetrics {
            width: width * scale,
            kerned_width: kerned_width * scale,
        }
    }

    /// Returns the cached reference-size width of `text` in `font`, if any.
    pub fn get(&self, font: &FontDeclaration<'_>, text: &str) -> Option<f32> {
        self.fonts.get(&font.cache_key())?.get(text).copied()
    }

    /// Number of cached strings across all fonts.
    pub fn len(&self) -> usize {
        self.fonts.values().map(HashMap::len).sum()
    }

    /// Whether nothing has been measured yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn cached_width(
    table: &mut HashMap<Box<str>, f32>,
    measurer: &mut impl MeasureText,
    font: &FontDeclaration<'_>,
    text: &str,
) -> f32 {
    *table.entry_ref(text).or_insert_with(|| {
        let width = measurer.measure_text(font, text);
        tracing::trace!(font = %font, text, width, "measured");
        width
    })
}
