// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rich text layout and cursor addressing for canvas text objects.
//!
//! A [`TextLayout`] turns a string, document-level style defaults and a sparse
//! per-character style overlay into wrapped visual lines with per-grapheme
//! boxes. It maps between linear grapheme indices, line positions and points,
//! and can lay text along a curve.
//!
//! Measuring text is left to the host through [`MeasureText`]; the results
//! are memoized in a [`LayoutContext`] that is meant to be shared by every
//! layout for the lifetime of the process.
//!
//! ```
//! use canvas_text::{Addressing, FontDeclaration, LayoutContext, TextLayout, TextOptions, TextStyle};
//!
//! // A monospaced host: every character is half an em wide.
//! let measurer = |font: &FontDeclaration<'_>, text: &str| font.size * 0.5 * text.chars().count() as f32;
//! let mut cx = LayoutContext::new(measurer);
//!
//! let options = TextOptions { width: 100.0, ..TextOptions::default() };
//! let layout = TextLayout::<()>::new(&mut cx, "hello brave new world", TextStyle::default(), options);
//!
//! assert_eq!(layout.line_count(Addressing::Logical), 1);
//! assert!(layout.line_count(Addressing::Visual) > 1);
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("canvas_text requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

pub mod context;
pub mod error;
pub mod grapheme;
pub mod layout;
pub mod lines;
pub mod measure;
pub mod resolve;
pub mod style;
pub mod style_map;
pub mod wrap;

#[cfg(test)]
mod tests;

pub use peniko::kurbo;

pub use context::LayoutContext;
pub use error::{Error, ErrorKind};
pub use layout::{
    Addressing, Affinity, Alignment, ArcLengthTable, Cursor, CursorLocation, GraphemeBox,
    LineBoxes, PathMetrics, PathPoint, PathPosition, PathSide, TextLayout, TextOptions, TextPath,
};
pub use lines::SplitText;
pub use measure::{CharMetrics, MeasureText, MeasurementCache};
pub use resolve::{StyleResolver, StyleSheet};
pub use style::{
    Brush, FontDeclaration, FontStyle, FontWeight, StyleDeclaration, StyleKey, StyleProperty,
    TextStyle,
};
pub use style_map::{LineMapping, StyleMap};
pub use wrap::{SplitMode, WordWrapper, WrapOptions};
