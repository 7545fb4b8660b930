//! # unfurnish
//!
//! Post-processing cleaner for extracted document element streams.
//!
//! Layout extractors split a paginated document into an ordered list of
//! typed elements (text, tables, images, page breaks). Alongside the real
//! content that list carries the document's furniture: cover pages,
//! running footers, logos, tables of contents and index sections. This
//! library strips that furniture so retrieval and indexing pipelines only
//! see substantive content.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unfurnish::{json, CleanupOptions, CleanupPipeline};
//!
//! fn main() -> unfurnish::Result<()> {
//!     let elements = json::from_file("elements.json")?;
//!
//!     let pipeline = CleanupPipeline::new(CleanupOptions::default())?;
//!     let result = pipeline.process_with_stats(elements);
//!     println!("footer length: {}", result.stats.footer_length);
//!
//!     json::to_file("elements.clean.json", &result.elements, json::JsonFormat::Pretty)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Boundary detection**: cover, title and TOC pages up front; index pages at the end
//! - **Footer fingerprinting**: infers footer length from near-duplicate page endings
//! - **Pluggable similarity**: any normalized scorer, built-ins backed by `strsim`
//! - **Order preserving**: stages only remove elements, never reorder or edit them
//! - **Batch mode**: cleans many documents in parallel with Rayon

pub mod batch;
pub mod clean;
pub mod error;
pub mod json;
pub mod model;
pub mod similarity;

// Re-export commonly used types
pub use clean::{
    find_footer_length, find_minimum_footer_length, CleanupOptions, CleanupPipeline,
    CleanupPreset, CleanupResult, CleanupStats, FooterFingerprint, FooterOptions, Stage,
};
pub use error::{Error, Result};
pub use json::JsonFormat;
pub use model::{Category, Element, ElementMetadata};
pub use similarity::{Similarity, SimilarityMetric};

use std::path::Path;

/// Clean an element sequence with the standard pipeline.
///
/// # Example
///
/// ```
/// use unfurnish::{clean, Element};
///
/// let elements = vec![
///     Element::text("Cover", 1),
///     Element::page_break(1),
///     Element::table("Contents ........ 3", 2),
///     Element::text("Chapter 1", 2),
/// ];
/// let cleaned = clean(elements);
/// assert_eq!(cleaned, vec![Element::text("Chapter 1", 2)]);
/// ```
pub fn clean(elements: Vec<Element>) -> Vec<Element> {
    CleanupPipeline::default().process(elements)
}

/// Clean a JSON element list and return the cleaned list as JSON.
///
/// # Example
///
/// ```
/// use unfurnish::{clean_json, CleanupOptions};
///
/// let input = r#"[{"type": "Text", "text": "Body", "metadata": {"page_number": 2}}]"#;
/// let output = clean_json(input, &CleanupOptions::default())?;
/// assert!(output.contains("Body"));
/// # Ok::<(), unfurnish::Error>(())
/// ```
pub fn clean_json(input: &str, options: &CleanupOptions) -> Result<String> {
    let pipeline = CleanupPipeline::new(options.clone())?;
    let elements = json::from_str(input)?;
    json::to_string(&pipeline.process(elements), JsonFormat::Compact)
}

/// Load a JSON element file and clean it.
///
/// # Example
///
/// ```no_run
/// use unfurnish::{clean_file, CleanupOptions, CleanupPreset};
///
/// let options = CleanupOptions::from_preset(CleanupPreset::Layout);
/// let result = clean_file("elements.json", &options).unwrap();
/// println!("removed {} elements", result.stats.total_removed());
/// ```
pub fn clean_file<P: AsRef<Path>>(path: P, options: &CleanupOptions) -> Result<CleanupResult> {
    let pipeline = CleanupPipeline::new(options.clone())?;
    let elements = json::from_file(path)?;
    Ok(pipeline.process_with_stats(elements))
}

/// Clean several JSON element files in parallel.
pub fn clean_files<P>(
    paths: &[P],
    options: &CleanupOptions,
) -> Result<Vec<(std::path::PathBuf, Result<CleanupResult>)>>
where
    P: AsRef<Path> + Sync,
{
    batch::clean_files(paths, options)
}
