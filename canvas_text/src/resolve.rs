// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of per-character styles.

use alloc::collections::BTreeMap;

use crate::style::{Brush, StyleDeclaration, StyleKey, TextStyle};

/// Capability to resolve the effective style of a character.
///
/// Addresses are logical: `line` is a hard-break-delimited line and `index`
/// a grapheme offset within it. Layout stages depend on this trait, never on
/// how overrides are stored.
pub trait StyleResolver<B: Brush> {
    /// Returns the complete style at a logical position.
    fn resolve_at(&self, line: usize, index: usize) -> TextStyle<B>;

    /// Whether any character (on `line`, or anywhere when `None`) sets `key`
    /// to something other than the document default.
    fn has_overlay_for(&self, key: StyleKey, line: Option<usize>) -> bool;
}

/// Document defaults plus a sparse per-character overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleSheet<B: Brush> {
    defaults: TextStyle<B>,
    overlay: BTreeMap<usize, BTreeMap<usize, StyleDeclaration<B>>>,
}

impl<B: Brush> Default for StyleSheet<B> {
    fn default() -> Self {
        Self::new(TextStyle::default())
    }
}

impl<B: Brush> StyleSheet<B> {
    /// Creates a sheet with no overrides.
    pub fn new(defaults: TextStyle<B>) -> Self {
        Self {
            defaults,
            overlay: BTreeMap::new(),
        }
    }

    /// The document-level style.
    pub fn defaults(&self) -> &TextStyle<B> {
        &self.defaults
    }

    /// Mutable access to the document-level style.
    pub fn defaults_mut(&mut self) -> &mut TextStyle<B> {
        &mut self.defaults
    }

    /// The override stored at a logical position, if any.
    pub fn declaration_at(&self, line: usize, index: usize) -> Option<&StyleDeclaration<B>> {
        self.overlay.get(&line)?.get(&index)
    }

    /// Merges `declaration` into the override at a logical position.
    pub fn set_at(&mut self, line: usize, index: usize, declaration: &StyleDeclaration<B>) {
        if declaration.is_empty() {
            return;
        }
        self.overlay
            .entry(line)
            .or_default()
            .entry(index)
            .or_default()
            .merge(declaration);
    }

    /// Replaces the override at a logical position, removing it on `None`.
    pub fn replace_at(
        &mut self,
        line: usize,
        index: usize,
        declaration: Option<StyleDeclaration<B>>,
    ) {
        match declaration.filter(|d| !d.is_empty()) {
            Some(declaration) => {
                self.overlay
                    .entry(line)
                    .or_default()
                    .insert(index, declaration);
            }
            None => {
                if let Some(chars) = self.overlay.get_mut(&line) {
                    chars.remove(&index);
                    if chars.is_empty() {
                        self.overlay.remove(&line);
                    }
                }
            }
        }
    }

    /// Removes `key` from every override, dropping overrides left empty.
    pub fn remove_style(&mut self, key: StyleKey) {
        for chars in self.overlay.values_mut() {
            for declaration in chars.values_mut() {
                declaration.remove(key);
            }
            chars.retain(|_, declaration| !declaration.is_empty());
        }
        self.overlay.retain(|_, chars| !chars.is_empty());
    }

    /// Drops every override.
    pub fn clear(&mut self) {
        self.overlay.clear();
    }

    /// Whether `line` (or the whole document when `None`) carries no overrides.
    pub fn is_empty(&self, line: Option<usize>) -> bool {
        match line {
            Some(line) => self.overlay.get(&line).is_none_or(BTreeMap::is_empty),
            None => self.overlay.values().all(BTreeMap::is_empty),
        }
    }

    /// Iterates every override as `(line, index, declaration)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &StyleDeclaration<B>)> + '_ {
        self.overlay.iter().flat_map(|(&line, chars)| {
            chars
                .iter()
                .map(move |(&index, declaration)| (line, index, declaration))
        })
    }
}

impl<B: Brush> StyleResolver<B> for StyleSheet<B> {
    fn resolve_at(&self, line: usize, index: usize) -> TextStyle<B> {
        let mut style = self.defaults.clone();
        if let Some(declaration) = self.declaration_at(line, index) {
            style.apply(declaration);
        }
        style
    }

    fn has_overlay_for(&self, key: StyleKey, line: Option<usize>) -> bool {
        let overrides = |chars: &BTreeMap<usize, StyleDeclaration<B>>| {
            chars
                .values()
                .any(|declaration| declaration.overrides(key, &self.defaults))
        };
        match line {
            Some(line) => self.overlay.get(&line).is_some_and(overrides),
            None => self.overlay.values().any(overrides),
        }
    }
}
