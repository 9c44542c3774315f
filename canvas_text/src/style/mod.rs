// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rich styling support.

mod brush;
mod font;

use alloc::sync::Arc;

pub use brush::Brush;
pub use font::{FontDeclaration, FontStyle, FontWeight};

/// Multiplier applied to the tallest font size of a line to get its height.
pub const FONT_SIZE_MULT: f32 = 1.13;

/// Fraction of the font size that sits below the baseline.
pub const FONT_SIZE_FRACTION: f32 = 0.222;

/// Scale and baseline shift used for superscript and subscript runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScriptShift {
    /// Font size multiplier.
    pub size: f32,
    /// Baseline shift as a fraction of the original font size.
    pub baseline: f32,
}

/// Shift applied by [`TextLayout::set_superscript`](crate::TextLayout::set_superscript).
pub const SUPERSCRIPT: ScriptShift = ScriptShift {
    size: 0.6,
    baseline: -0.35,
};

/// Shift applied by [`TextLayout::set_subscript`](crate::TextLayout::set_subscript).
pub const SUBSCRIPT: ScriptShift = ScriptShift {
    size: 0.6,
    baseline: 0.11,
};

/// Names a single style property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleKey {
    /// Font family.
    FontFamily,
    /// Font size.
    FontSize,
    /// Font weight.
    FontWeight,
    /// Font style.
    FontStyle,
    /// Fill brush.
    Fill,
    /// Stroke brush.
    Stroke,
    /// Stroke width.
    StrokeWidth,
    /// Underline decoration.
    Underline,
    /// Overline decoration.
    Overline,
    /// Line-through decoration.
    Linethrough,
    /// Vertical shift.
    DeltaY,
    /// Letter spacing.
    LetterSpacing,
}

/// Properties that define a style.
#[derive(Clone, PartialEq, Debug)]
pub enum StyleProperty<B: Brush> {
    /// Font family name.
    FontFamily(Arc<str>),
    /// Font size in pixels.
    FontSize(f32),
    /// Font weight.
    FontWeight(FontWeight),
    /// Font style.
    FontStyle(FontStyle),
    /// Brush used to fill glyphs.
    Fill(B),
    /// Brush used to stroke glyphs.
    Stroke(Option<B>),
    /// Width of the glyph stroke.
    StrokeWidth(f32),
    /// Underline decoration.
    Underline(bool),
    /// Overline decoration.
    Overline(bool),
    /// Line-through decoration.
    Linethrough(bool),
    /// Vertical shift of the glyph in pixels, positive downwards.
    DeltaY(f32),
    /// Extra advance per character, in thousandths of an em.
    LetterSpacing(f32),
}

impl<B: Brush> StyleProperty<B> {
    /// The key naming this property.
    pub fn key(&self) -> StyleKey {
        match self {
            Self::FontFamily(_) => StyleKey::FontFamily,
            Self::FontSize(_) => StyleKey::FontSize,
            Self::FontWeight(_) => StyleKey::FontWeight,
            Self::FontStyle(_) => StyleKey::FontStyle,
            Self::Fill(_) => StyleKey::Fill,
            Self::Stroke(_) => StyleKey::Stroke,
            Self::StrokeWidth(_) => StyleKey::StrokeWidth,
            Self::Underline(_) => StyleKey::Underline,
            Self::Overline(_) => StyleKey::Overline,
            Self::Linethrough(_) => StyleKey::Linethrough,
            Self::DeltaY(_) => StyleKey::DeltaY,
            Self::LetterSpacing(_) => StyleKey::LetterSpacing,
        }
    }
}

/// Fully resolved style of a character.
#[derive(Clone, PartialEq, Debug)]
pub struct TextStyle<B: Brush> {
    /// Font family name.
    pub font_family: Arc<str>,
    /// Font size in pixels.
    pub font_size: f32,
    /// Font weight.
    pub font_weight: FontWeight,
    /// Font style.
    pub font_style: FontStyle,
    /// Brush used to fill glyphs.
    pub fill: B,
    /// Brush used to stroke glyphs.
    pub stroke: Option<B>,
    /// Width of the glyph stroke.
    pub stroke_width: f32,
    /// Underline decoration.
    pub underline: bool,
    /// Overline decoration.
    pub overline: bool,
    /// Line-through decoration.
    pub linethrough: bool,
    /// Vertical shift of the glyph in pixels, positive downwards.
    pub delta_y: f32,
    /// Extra advance per character, in thousandths of an em.
    pub letter_spacing: f32,
}

impl<B: Brush> Default for TextStyle<B> {
    fn default() -> Self {
        Self {
            font_family: Arc::from("Times New Roman"),
            font_size: 40.0,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
            fill: B::default(),
            stroke: None,
            stroke_width: 1.0,
            underline: false,
            overline: false,
            linethrough: false,
            delta_y: 0.0,
            letter_spacing: 0.0,
        }
    }
}

impl<B: Brush> TextStyle<B> {
    /// The font this style selects.
    pub fn font(&self) -> FontDeclaration<'_> {
        FontDeclaration {
            family: &self.font_family,
            style: self.font_style,
            weight: self.font_weight,
            size: self.font_size,
        }
    }

    /// Extra advance added to every character, in pixels.
    pub fn letter_spacing_px(&self) -> f32 {
        self.font_size * self.letter_spacing / 1000.0
    }

    /// Overrides every property set in `declaration`.
    pub fn apply(&mut self, declaration: &StyleDeclaration<B>) {
        if let Some(v) = &declaration.font_family {
            self.font_family = v.clone();
        }
        if let Some(v) = declaration.font_size {
            self.font_size = v;
        }
        if let Some(v) = declaration.font_weight {
            self.font_weight = v;
        }
        if let Some(v) = declaration.font_style {
            self.font_style = v;
        }
        if let Some(v) = &declaration.fill {
            self.fill = v.clone();
        }
        if let Some(v) = &declaration.stroke {
            self.stroke = v.clone();
        }
        if let Some(v) = declaration.stroke_width {
            self.stroke_width = v;
        }
        if let Some(v) = declaration.underline {
            self.underline = v;
        }
        if let Some(v) = declaration.overline {
            self.overline = v;
        }
        if let Some(v) = declaration.linethrough {
            self.linethrough = v;
        }
        if let Some(v) = declaration.delta_y {
            self.delta_y = v;
        }
        if let Some(v) = declaration.letter_spacing {
            self.letter_spacing = v;
        }
    }
}

/// Partial style: the form stored in the per-character overlay.
///
/// Unset fields inherit from the document defaults.
#[derive(Clone, PartialEq, Debug)]
pub struct StyleDeclaration<B: Brush> {
    /// Font family name.
    pub font_family: Option<Arc<str>>,
    /// Font size in pixels.
    pub font_size: Option<f32>,
    /// Font weight.
    pub font_weight: Option<FontWeight>,
    /// Font style.
    pub font_style: Option<FontStyle>,
    /// Brush used to fill glyphs.
    pub fill: Option<B>,
    /// Brush used to stroke glyphs.
    pub stroke: Option<Option<B>>,
    /// Width of the glyph stroke.
    pub stroke_width: Option<f32>,
    /// Underline decoration.
    pub underline: Option<bool>,
    /// Overline decoration.
    pub overline: Option<bool>,
    /// Line-through decoration.
    pub linethrough: Option<bool>,
    /// Vertical shift of the glyph in pixels.
    pub delta_y: Option<f32>,
    /// Extra advance per character, in thousandths of an em.
    pub letter_spacing: Option<f32>,
}

impl<B: Brush> Default for StyleDeclaration<B> {
    fn default() -> Self {
        Self {
            font_family: None,
            font_size: None,
            font_weight: None,
            font_style: None,
            fill: None,
            stroke: None,
            stroke_width: None,
            underline: None,
            overline: None,
            linethrough: None,
            delta_y: None,
            letter_spacing: None,
        }
    }
}

impl<B: Brush> StyleDeclaration<B> {
    /// Creates an empty declaration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a single property, returning the declaration for chaining.
    #[must_use]
    pub fn with(mut self, property: StyleProperty<B>) -> Self {
        self.set(property);
        self
    }

    /// Sets a single property.
    pub fn set(&mut self, property: StyleProperty<B>) {
        match property {
            StyleProperty::FontFamily(v) => self.font_family = Some(v),
            StyleProperty::FontSize(v) => self.font_size = Some(v),
            StyleProperty::FontWeight(v) => self.font_weight = Some(v),
            StyleProperty::FontStyle(v) => self.font_style = Some(v),
            StyleProperty::Fill(v) => self.fill = Some(v),
            StyleProperty::Stroke(v) => self.stroke = Some(v),
            StyleProperty::StrokeWidth(v) => self.stroke_width = Some(v),
            StyleProperty::Underline(v) => self.underline = Some(v),
            StyleProperty::Overline(v) => self.overline = Some(v),
            StyleProperty::Linethrough(v) => self.linethrough = Some(v),
            StyleProperty::DeltaY(v) => self.delta_y = Some(v),
            StyleProperty::LetterSpacing(v) => self.letter_spacing = Some(v),
        }
    }

    /// Whether no property is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether the property named by `key` is set.
    pub fn has(&self, key: StyleKey) -> bool {
        match key {
            StyleKey::FontFamily => self.font_family.is_some(),
            StyleKey::FontSize => self.font_size.is_some(),
            StyleKey::FontWeight => self.font_weight.is_some(),
            StyleKey::FontStyle => self.font_style.is_some(),
            StyleKey::Fill => self.fill.is_some(),
            StyleKey::Stroke => self.stroke.is_some(),
            StyleKey::StrokeWidth => self.stroke_width.is_some(),
            StyleKey::Underline => self.underline.is_some(),
            StyleKey::Overline => self.overline.is_some(),
            StyleKey::Linethrough => self.linethrough.is_some(),
            StyleKey::DeltaY => self.delta_y.is_some(),
            StyleKey::LetterSpacing => self.letter_spacing.is_some(),
        }
    }

    /// Whether the property named by `key` is set to something other than
    /// its value in `defaults`.
    pub fn overrides(&self, key: StyleKey, defaults: &TextStyle<B>) -> bool {
        match key {
            StyleKey::FontFamily => self
                .font_family
                .as_ref()
                .is_some_and(|v| *v != defaults.font_family),
            StyleKey::FontSize => self.font_size.is_some_and(|v| v != defaults.font_size),
            StyleKey::FontWeight => self.font_weight.is_some_and(|v| v != defaults.font_weight),
            StyleKey::FontStyle => self.font_style.is_some_and(|v| v != defaults.font_style),
            StyleKey::Fill => self.fill.as_ref().is_some_and(|v| *v != defaults.fill),
            StyleKey::Stroke => self.stroke.as_ref().is_some_and(|v| *v != defaults.stroke),
            StyleKey::StrokeWidth => self
                .stroke_width
                .is_some_and(|v| v != defaults.stroke_width),
            StyleKey::Underline => self.underline.is_some_and(|v| v != defaults.underline),
            StyleKey::Overline => self.overline.is_some_and(|v| v != defaults.overline),
            StyleKey::Linethrough => self.linethrough.is_some_and(|v| v != defaults.linethrough),
            StyleKey::DeltaY => self.delta_y.is_some_and(|v| v != defaults.delta_y),
            StyleKey::LetterSpacing => self
                .letter_spacing
                .is_some_and(|v| v != defaults.letter_spacing),
        }
    }

    /// Clears the property named by `key`.
    pub fn remove(&mut self, key: StyleKey) {
        match key {
            StyleKey::FontFamily => self.font_family = None,
            StyleKey::FontSize => self.font_size = None,
            StyleKey::FontWeight => self.font_weight = None,
            StyleKey::FontStyle => self.font_style = None,
            StyleKey::Fill => self.fill = None,
            StyleKey::Stroke => self.stroke = None,
            StyleKey::StrokeWidth => self.stroke_width = None,
            StyleKey::Underline => self.underline = None,
            StyleKey::Overline => self.overline = None,
            StyleKey::Linethrough => self.linethrough = None,
            StyleKey::DeltaY => self.delta_y = None,
            StyleKey::LetterSpacing => self.letter_spacing = None,
        }
    }

    /// Copies every property set in `other` into `self`; later writes win.
    pub fn merge(&mut self, other: &Self) {
        macro_rules! merge_fields {
            ($($field:ident),*) => {
                $(
                    if other.$field.is_some() {
                        self.$field = other.$field.clone();
                    }
                )*
            };
        }
        merge_fields!(
            font_family,
            font_size,
            font_weight,
            font_style,
            fill,
            stroke,
            stroke_width,
            underline,
            overline,
            linethrough,
            delta_y,
            letter_spacing
        );
    }
}

impl<B: Brush> FromIterator<StyleProperty<B>> for StyleDeclaration<B> {
    fn from_iter<I: IntoIterator<Item = StyleProperty<B>>>(iter: I) -> Self {
        let mut declaration = Self::new();
        for property in iter {
            declaration.set(property);
        }
        declaration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_only_touches_set_fields() {
        let mut style = TextStyle::<u32>::default();
        let declaration = StyleDeclaration::new()
            .with(StyleProperty::FontSize(20.0))
            .with(StyleProperty::Fill(7));
        style.apply(&declaration);
        assert_eq!(style.font_size, 20.0);
        assert_eq!(style.fill, 7);
        assert_eq!(&*style.font_family, "Times New Roman");
    }

    #[test]
    fn overrides_compares_against_defaults() {
        let defaults = TextStyle::<u32>::default();
        let same = StyleDeclaration::new().with(StyleProperty::FontSize(40.0));
        let different = StyleDeclaration::new().with(StyleProperty::FontSize(12.0));
        assert!(same.has(StyleKey::FontSize));
        assert!(!same.overrides(StyleKey::FontSize, &defaults));
        assert!(different.overrides(StyleKey::FontSize, &defaults));
        assert!(!different.overrides(StyleKey::Fill, &defaults));
    }

    #[test]
    fn merge_and_remove() {
        let mut a: StyleDeclaration<u32> = [StyleProperty::Underline(true)].into_iter().collect();
        let b = StyleDeclaration::new().with(StyleProperty::DeltaY(3.0));
        a.merge(&b);
        assert_eq!(a.underline, Some(true));
        assert_eq!(a.delta_y, Some(3.0));
        a.remove(StyleKey::Underline);
        a.remove(StyleKey::DeltaY);
        assert!(a.is_empty());
    }
}
