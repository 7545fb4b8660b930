//! Element model for extracted document content.
//!
//! This module defines the element stream produced by an upstream layout
//! extractor: an ordered list of typed elements, each tagged with the page
//! it came from. The cleaning stages only ever remove elements from it.

mod element;
mod sequence;

pub use element::{Category, Element, ElementMetadata};
pub use sequence::{page_break_positions, page_count, DropMask};
