// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grapheme segmentation.
//!
//! Every index used by the layout (cursor positions, style overlay offsets,
//! line ranges) counts user-perceived characters as produced here.

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use icu_segmenter::GraphemeClusterSegmenter;

use crate::error::Error;

/// Splits `text` into extended grapheme clusters.
///
/// A surrogate pair always lands in a single grapheme, as does `"\r\n"`.
pub fn split(text: &str) -> Vec<&str> {
    byte_ranges(text)
        .into_iter()
        .map(|range| &text[range])
        .collect()
}

/// Returns the byte range of every grapheme in `text`, in order.
pub fn byte_ranges(text: &str) -> Vec<Range<usize>> {
    let segmenter = GraphemeClusterSegmenter::new();
    let mut ranges = Vec::with_capacity(text.len());
    let mut start = 0;
    for boundary in segmenter.segment_str(text) {
        if boundary > start {
            ranges.push(start..boundary);
            start = boundary;
        }
    }
    ranges
}

/// Decodes UTF-16 into a string, rejecting unpaired surrogates.
///
/// Hosts that hand over UTF-16 buffers may contain lone surrogates; replacing
/// them would shift every downstream index, so they are reported instead.
pub fn decode_utf16(units: &[u16]) -> Result<String, Error> {
    let len = units.len();
    let mut out = String::with_capacity(len);
    let mut index = 0;
    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(c) => {
                out.push(c);
                index += c.len_utf16();
            }
            Err(err) => {
                let unit = err.unpaired_surrogate();
                return Err(if (0xD800..=0xDBFF).contains(&unit) {
                    Error::unpaired_high_surrogate(index, unit, len)
                } else {
                    Error::unpaired_low_surrogate(index, unit, len)
                });
            }
        }
    }
    Ok(out)
}

/// Splits a UTF-16 buffer into graphemes.
///
/// Fails on an unpaired high surrogate (including one at the end of the
/// buffer) or a low surrogate with no preceding high surrogate.
pub fn split_utf16(units: &[u16]) -> Result<Vec<String>, Error> {
    let text = decode_utf16(units)?;
    Ok(split(&text).into_iter().map(String::from).collect())
}

/// Whether `grapheme` is a hard line break.
pub fn is_line_break(grapheme: &str) -> bool {
    matches!(grapheme, "\n" | "\r\n")
}

/// Whether `grapheme` separates words for wrapping and justification.
pub fn is_word_joiner(grapheme: &str) -> bool {
    matches!(grapheme, " " | "\t" | "\r")
}
