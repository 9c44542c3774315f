// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use core::fmt;

/// Visual weight class of a font, typically on a scale from 1.0 to 1000.0.
///
/// In CSS, this corresponds to the `font-weight` property.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FontWeight(f32);

impl FontWeight {
    /// Weight value of 100.
    pub const THIN: Self = Self(100.0);

    /// Weight value of 300.
    pub const LIGHT: Self = Self(300.0);

    /// Weight value of 400. This is the default value.
    pub const NORMAL: Self = Self(400.0);

    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500.0);

    /// Weight value of 600.
    pub const SEMI_BOLD: Self = Self(600.0);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700.0);

    /// Weight value of 900.
    pub const BLACK: Self = Self(900.0);

    /// Creates a new weight value.
    pub fn new(weight: f32) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value.
    pub fn value(self) -> f32 {
        self.0
    }

    /// Parses a CSS `font-weight` value.
    ///
    /// ```
    /// use canvas_text::style::FontWeight;
    ///
    /// assert_eq!(FontWeight::parse("bold"), Some(FontWeight::BOLD));
    /// assert_eq!(FontWeight::parse(" 850 "), Some(FontWeight::new(850.0)));
    /// assert_eq!(FontWeight::parse("heavy-ish"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Some(match s {
            "normal" => Self::NORMAL,
            "bold" => Self::BOLD,
            _ => Self(s.parse::<f32>().ok()?),
        })
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visual style or "slope" of a font.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FontStyle {
    /// `normal`.
    #[default]
    Normal,
    /// `italic`.
    Italic,
    /// `oblique`.
    Oblique,
}

impl FontStyle {
    /// Parses a CSS `font-style` keyword.
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "normal" => Self::Normal,
            "italic" => Self::Italic,
            "oblique" => Self::Oblique,
            _ => return None,
        })
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
            Self::Oblique => "oblique",
        })
    }
}

/// The font-selecting subset of a resolved style.
///
/// Two graphemes are only measured as a kerning couple when their
/// declarations compare equal, size included. The [`Display`] form is the
/// CSS `font` shorthand handed to the host measurer.
///
/// [`Display`]: fmt::Display
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontDeclaration<'a> {
    /// Font family name.
    pub family: &'a str,
    /// Font style.
    pub style: FontStyle,
    /// Font weight.
    pub weight: FontWeight,
    /// Font size in pixels.
    pub size: f32,
}

impl FontDeclaration<'_> {
    /// Returns this declaration with its size replaced.
    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Key of the measurement table this declaration reads from.
    ///
    /// Size is excluded since all measurement happens at one reference size.
    pub fn cache_key(&self) -> String {
        let mut key = format!("{} {} {}", self.style, self.weight, self.family);
        key.make_ascii_lowercase();
        key
    }
}

impl fmt::Display for FontDeclaration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}px {}",
            self.style, self.weight, self.size, self.family
        )
    }
}
