//! Batched range substitution.
//!
//! Passes that rewrite several places at once stage their changes as
//! [`Edit`]s against the offsets of the *original* text and apply them in a
//! single pass. Staging first keeps earlier replacements from invalidating
//! the offsets of later ones.

use std::ops::Range;

/// One staged replacement of a byte range by new text.
///
/// An empty range is an insertion. Offsets always refer to the string the
/// edit was staged against, never to an intermediate result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    start: usize,
    end: usize,
    replacement: String,
}

impl Edit {
    /// Stages `text` as a replacement for `span`.
    pub fn replace(span: Range<usize>, text: impl Into<String>) -> Self {
        Edit {
            start: span.start,
            end: span.end,
            replacement: text.into(),
        }
    }

    /// Stages `text` for insertion directly before the byte at `at`.
    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Edit::replace(at..at, text)
    }

    /// Start offset in the original text.
    pub fn start(&self) -> usize {
        self.start
    }

    /// End offset (exclusive) in the original text.
    pub fn end(&self) -> usize {
        self.end
    }
}

/// Applies staged edits to `original` in one linear pass.
///
/// Edits must be sorted ascending by start and must not overlap; empty and
/// touching ranges are fine. All offsets must lie on char boundaries.
pub fn apply_edits(original: &str, edits: &[Edit]) -> String {
    let mut out = String::with_capacity(original.len());
    let mut cursor = 0;
    for edit in edits {
        debug_assert!(
            cursor <= edit.start && edit.start <= edit.end,
            "edits must be ascending and disjoint"
        );
        out.push_str(&original[cursor..edit.start]);
        out.push_str(&edit.replacement);
        cursor = edit.end;
    }
    out.push_str(&original[cursor..]);
    out
}
