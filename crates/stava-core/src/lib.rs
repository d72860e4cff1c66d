//! Shared types for Stava Swedish compound-word analysis.
//!
//! - [`character`] -- Swedish character classification and simple case mapping
//! - [`segmentation`] -- the segmentation value type produced by the language module

pub mod character;
pub mod segmentation;
