// Segmentation result type

use std::fmt;

/// An ordered, non-empty sequence of normalized word parts whose
/// concatenation (after undoing the boundary transformations applied
/// during segmentation: linking-s elision and doubled-consonant
/// reduction) reconstructs the normalized input word.
///
/// Produced fresh per segmentation call and owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segmentation {
    parts: Vec<String>,
}

impl Segmentation {
    /// Create a single-part segmentation (a word found whole in the
    /// dictionary).
    pub fn single(part: impl Into<String>) -> Self {
        Self {
            parts: vec![part.into()],
        }
    }

    /// Create a segmentation from an ordered list of parts.
    /// The list must be non-empty.
    pub fn from_parts(parts: Vec<String>) -> Self {
        debug_assert!(!parts.is_empty(), "segmentation must have at least one part");
        Self { parts }
    }

    /// The parts in surface order, each already normalized.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Number of parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Always false: a segmentation has at least one part.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Consume the segmentation and return the parts.
    pub fn into_parts(self) -> Vec<String> {
        self.parts
    }
}

impl fmt::Display for Segmentation {
    /// Formats the parts joined with `+`: `prins+korv+macka`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parts.join("+"))
    }
}

impl<'a> IntoIterator for &'a Segmentation {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}
