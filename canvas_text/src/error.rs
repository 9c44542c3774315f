// Copyright 2025 the Canvas Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error raised while segmenting text into graphemes.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the position and value of the
/// offending UTF-16 code unit. Every index in a [`TextLayout`] assumes that
/// segmentation is total, so malformed input is rejected instead of dropped.
///
/// [`TextLayout`]: crate::TextLayout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// Index of the offending code unit in the caller-provided buffer.
    index: usize,

    /// The offending code unit.
    unit: u16,

    /// The length in code units of the caller-provided buffer.
    len: usize,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports source buffer length context; an `is_empty` method would be misleading and unused."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The index of the offending code unit.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The offending code unit.
    pub fn unit(&self) -> u16 {
        self.unit
    }

    /// The length in code units of the buffer that failed to segment.
    pub fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn unpaired_high_surrogate(index: usize, unit: u16, len: usize) -> Self {
        Self {
            kind: ErrorKind::UnpairedHighSurrogate,
            index,
            unit,
            len,
        }
    }

    pub(crate) fn unpaired_low_surrogate(index: usize, unit: u16, len: usize) -> Self {
        Self {
            kind: ErrorKind::UnpairedLowSurrogate,
            index,
            unit,
            len,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::UnpairedHighSurrogate => write!(
                f,
                "high surrogate {:#06x} at {} of {} is not followed by a low surrogate",
                self.unit, self.index, self.len
            ),
            ErrorKind::UnpairedLowSurrogate => write!(
                f,
                "low surrogate {:#06x} at {} of {} has no preceding high surrogate",
                self.unit, self.index, self.len
            ),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A high surrogate was followed by something other than a low surrogate,
    /// or ended the buffer.
    UnpairedHighSurrogate,

    /// A low surrogate appeared without a preceding high surrogate.
    UnpairedLowSurrogate,
}
