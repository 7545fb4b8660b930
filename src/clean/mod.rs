//! Element cleanup stages and the pipeline that chains them.
//!
//! ## Pipeline Stages
//!
//! 1. **Leading matter** - cover page, then leading pages opening with a title/TOC marker
//! 2. **Branded images** - logo images at the top of the sequence or after a page break
//! 3. **Trailing index** - the trailing run of pages opening with "Index"
//! 4. **Footers** - the inferred number of trailing elements before every page break
//! 5. **Page breaks** - all page break markers
//! 6. **TOC continuation** - the leading run of dot-leader tables
//!
//! Every stage takes the sequence by value and returns the surviving
//! elements in their original order. Stages never add, merge or modify
//! elements.

mod branding;
mod footer;
mod index;
mod leading;
mod markers;
mod options;
mod page_break;
mod pipeline;
mod stats;
mod toc;

pub use branding::remove_branded_images;
pub use footer::{
    find_footer_length, find_minimum_footer_length, remove_footer_elements, remove_footers,
    FooterFingerprint,
};
pub use index::remove_trailing_index;
pub use leading::remove_leading_matter;
pub use markers::MarkerSet;
pub use options::{
    CleanupOptions, CleanupPreset, FooterOptions, DEFAULT_BRAND_MARKERS, DEFAULT_INDEX_MARKER,
    DEFAULT_LEADING_MARKERS,
};
pub use page_break::remove_page_breaks;
pub use pipeline::{CleanupPipeline, Stage};
pub use stats::{CleanupResult, CleanupStats};
pub use toc::{is_toc_continuation, remove_toc_continuation};
