// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Context for layout.

use core::fmt;

use crate::measure::{CharMetrics, MeasureText, MeasurementCache};
use crate::style::{Brush, TextStyle};

/// Shared state for laying out text: the host measurer and the measurement
/// cache it feeds.
///
/// One context is meant to live as long as the process and be handed to
/// every layout. Tests build a fresh one per case for determinism.
pub struct LayoutContext<M: MeasureText> {
    measurer: M,
    cache: MeasurementCache,
}

impl<M: MeasureText> LayoutContext<M> {
    /// Creates a context with an empty cache.
    pub fn new(measurer: M) -> Self {
        Self::with_cache(measurer, MeasurementCache::new())
    }

    /// Creates a context reusing an existing cache.
    pub fn with_cache(measurer: M, cache: MeasurementCache) -> Self {
        Self { measurer, cache }
    }

    /// The measurement cache.
    pub fn cache(&self) -> &MeasurementCache {
        &self.cache
    }

    /// The host measurer.
    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    /// Splits the context back into measurer and cache.
    pub fn into_parts(self) -> (M, MeasurementCache) {
        (self.measurer, self.cache)
    }

    pub(crate) fn measure<B: Brush>(
        &mut self,
        grapheme: &str,
        style: &TextStyle<B>,
        previous: Option<(&str, &TextStyle<B>)>,
    ) -> CharMetrics {
        self.cache
            .measure(&mut self.measurer, grapheme, style, previous)
    }
}

impl<M: MeasureText> fmt::Debug for LayoutContext<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutContext")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
