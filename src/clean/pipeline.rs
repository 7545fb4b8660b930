//! The six-stage element cleanup pipeline.

use super::{
    remove_branded_images, remove_footers, remove_leading_matter, remove_page_breaks,
    remove_toc_continuation, remove_trailing_index, CleanupOptions, CleanupPreset, CleanupResult,
    CleanupStats, MarkerSet,
};
use crate::error::Result;
use crate::model::Element;
use crate::similarity::Similarity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A cleanup stage, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Cover page and leading title/TOC pages
    LeadingMatter,
    /// Branding images at the top of pages
    BrandedImages,
    /// Trailing index pages
    TrailingIndex,
    /// Repeated page footers
    Footers,
    /// Page break markers
    PageBreaks,
    /// Leftover dot-leader TOC tables
    TocContinuation,
}

impl Stage {
    /// All stages in the order they run.
    pub const ALL: [Stage; 6] = [
        Stage::LeadingMatter,
        Stage::BrandedImages,
        Stage::TrailingIndex,
        Stage::Footers,
        Stage::PageBreaks,
        Stage::TocContinuation,
    ];

    /// Short stage name used in logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Stage::LeadingMatter => "leading matter",
            Stage::BrandedImages => "branded images",
            Stage::TrailingIndex => "trailing index",
            Stage::Footers => "footers",
            Stage::PageBreaks => "page breaks",
            Stage::TocContinuation => "toc continuation",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Element cleanup pipeline.
///
/// # Example
///
/// ```
/// use unfurnish::{CleanupOptions, CleanupPipeline, Element};
///
/// let pipeline = CleanupPipeline::new(CleanupOptions::default())?;
/// let elements = vec![
///     Element::text("Cover", 1),
///     Element::page_break(1),
///     Element::text("Body", 2),
/// ];
/// let cleaned = pipeline.process(elements);
/// assert_eq!(cleaned, vec![Element::text("Body", 2)]);
/// # Ok::<(), unfurnish::Error>(())
/// ```
pub struct CleanupPipeline {
    options: CleanupOptions,
    leading_markers: MarkerSet,
    brand_markers: MarkerSet,
    index_markers: MarkerSet,
    scorer: Arc<dyn Similarity>,
}

impl CleanupPipeline {
    /// Create a new pipeline, validating the options.
    pub fn new(options: CleanupOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::build(options))
    }

    /// Create a pipeline from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        Self::build(CleanupOptions::from_preset(preset))
    }

    fn build(options: CleanupOptions) -> Self {
        Self {
            leading_markers: MarkerSet::prefix_ignore_case(&options.leading_markers),
            brand_markers: MarkerSet::contains(&options.brand_markers),
            index_markers: MarkerSet::contains([&options.index_marker]),
            scorer: Arc::new(options.footer.metric),
            options,
        }
    }

    /// Use a custom similarity scorer for footer detection.
    pub fn with_scorer(mut self, scorer: Arc<dyn Similarity>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Get the pipeline options.
    pub fn options(&self) -> &CleanupOptions {
        &self.options
    }

    /// Check whether a stage is enabled.
    pub fn is_enabled(&self, stage: Stage) -> bool {
        match stage {
            Stage::LeadingMatter => self.options.remove_leading_matter,
            Stage::BrandedImages => self.options.remove_branded_images,
            Stage::TrailingIndex => self.options.remove_trailing_index,
            Stage::Footers => self.options.remove_footers,
            Stage::PageBreaks => self.options.remove_page_breaks,
            Stage::TocContinuation => self.options.remove_toc_continuation,
        }
    }

    /// Clean an element sequence.
    pub fn process(&self, elements: Vec<Element>) -> Vec<Element> {
        self.process_with_stats(elements).elements
    }

    /// Clean an element sequence and report what each stage removed.
    pub fn process_with_stats(&self, elements: Vec<Element>) -> CleanupResult {
        let mut stats = CleanupStats::new(&elements);

        let mut elements = elements;
        for stage in Stage::ALL {
            if !self.is_enabled(stage) {
                continue;
            }

            let before = elements.len();
            elements = self.run_stage(stage, elements, &mut stats);
            let removed = before - elements.len();
            stats.set_removed(stage, removed);

            log::debug!("{}: removed {} of {} elements", stage, removed, before);
            if before > 0 && elements.is_empty() {
                log::warn!("{} stage removed every remaining element", stage);
            }
        }

        stats.output_elements = elements.len();
        CleanupResult { elements, stats }
    }

    fn run_stage(
        &self,
        stage: Stage,
        elements: Vec<Element>,
        stats: &mut CleanupStats,
    ) -> Vec<Element> {
        match stage {
            Stage::LeadingMatter => remove_leading_matter(elements, &self.leading_markers),
            Stage::BrandedImages => remove_branded_images(elements, &self.brand_markers),
            Stage::TrailingIndex => remove_trailing_index(elements, &self.index_markers),
            Stage::Footers => {
                let (cleaned, fingerprint) =
                    remove_footers(elements, &self.options.footer, self.scorer.as_ref());
                stats.footer_length = fingerprint.length;
                stats.mismatched_footers = fingerprint.mismatched;
                cleaned
            }
            Stage::PageBreaks => remove_page_breaks(elements),
            Stage::TocContinuation => remove_toc_continuation(elements),
        }
    }
}

impl Default for CleanupPipeline {
    fn default() -> Self {
        Self::build(CleanupOptions::default())
    }
}
