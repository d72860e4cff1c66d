// StavaHandle: top-level integration point for Swedish compound
// segmentation.
//
// Owns the two immutable word-form sets and exposes `compounds`, a pure
// function of (word, lexicon): no per-call state survives, so a handle
// can serve any number of concurrent callers through `&self`.

use stava_core::segmentation::Segmentation;

use crate::lexicon::Lexicon;
use crate::segmenter::{self, SegmenterOptions};

/// Error type for segmentation calls.
///
/// `NotCompound` is a normal, expected outcome for unknown simplex
/// words, not a defect; only `EmptyWord` indicates malformed input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SegmentError {
    /// The input was empty (or contained nothing but a hyphen) after
    /// normalization. Rejected before the search starts.
    #[error("empty input word")]
    EmptyWord,

    /// No segmentation into known lexemes exists. Carries the
    /// normalized form of the input.
    #[error("no compound segmentation found for \"{0}\"")]
    NotCompound(String),
}

/// Top-level handle owning the lexicon sets and segmenter options.
pub struct StavaHandle {
    lexicon: Lexicon,
    options: SegmenterOptions,
}

impl StavaHandle {
    /// Create a handle with default segmenter options.
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_options(lexicon, SegmenterOptions::default())
    }

    /// Create a handle with explicit segmenter options.
    pub fn with_options(lexicon: Lexicon, options: SegmenterOptions) -> Self {
        Self { lexicon, options }
    }

    /// The underlying word-form sets.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Segment a word into its constituent lexical parts.
    ///
    /// The word is normalized (Swedish case folding, first hyphen
    /// removed), then:
    /// - a word found whole in the tail set is returned as a single
    ///   part, never decomposed further;
    /// - otherwise the boundary search runs and the selector picks one
    ///   segmentation (fewest parts, triple-consonant dispreference,
    ///   discovery order).
    ///
    /// Returns `SegmentError::NotCompound` when no segmentation exists,
    /// and `SegmentError::EmptyWord` for empty input.
    pub fn compounds(&self, word: &str) -> Result<Segmentation, SegmentError> {
        let normalized = segmenter::normalize(word);
        if normalized.is_empty() {
            return Err(SegmentError::EmptyWord);
        }

        if self.lexicon.is_tail(&normalized) {
            return Ok(Segmentation::single(normalized));
        }

        let candidates = segmenter::split(&self.lexicon, &normalized, &self.options);
        match segmenter::select(candidates) {
            Some(parts) => Ok(Segmentation::from_parts(parts)),
            None => Err(SegmentError::NotCompound(normalized)),
        }
    }
}
