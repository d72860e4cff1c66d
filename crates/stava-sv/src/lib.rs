//! Swedish compound-word segmentation.
//!
//! Splits a single orthographic word into its constituent lexical parts
//! when the word is a compound, using two precomputed word-form sets
//! derived from a SALDO-style lexical resource:
//!
//! - [`lexicon`] -- classification of lexical entries into the prefix set
//!   (forms licensed to open or continue a compound) and the tail set
//!   (forms licensed to end a compound or stand alone)
//! - [`segmenter`] -- normalization, the recursive boundary search, and
//!   the candidate selector
//! - [`handle`] -- the top-level [`StavaHandle`] owning the lexicon and
//!   exposing [`StavaHandle::compounds`]
//!
//! ```
//! use stava_sv::{LexEntry, Lexicon, StavaHandle};
//!
//! let lexicon = Lexicon::classify([
//!     LexEntry::new("prins", "nn", "c"),
//!     LexEntry::new("korv", "nn", "c"),
//!     LexEntry::new("korv", "nn", ""),
//!     LexEntry::new("macka", "nn", ""),
//! ]);
//! let handle = StavaHandle::new(lexicon);
//! let seg = handle.compounds("prinskorvsmacka").unwrap();
//! assert_eq!(seg.parts(), &["prins", "korv", "macka"]);
//! ```

pub mod handle;
pub mod lexicon;
pub mod segmenter;

pub use handle::{SegmentError, StavaHandle};
pub use lexicon::{CompoundRole, LexEntry, Lexicon, PartOfSpeech};
pub use segmenter::SegmenterOptions;
