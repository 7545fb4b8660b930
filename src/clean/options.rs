//! Cleanup options and presets.

use crate::error::{Error, Result};
use crate::similarity::SimilarityMetric;
use serde::{Deserialize, Serialize};

/// Markers that flag a leading page as title/cover matter.
pub const DEFAULT_LEADING_MARKERS: [&str; 2] = ["published date:", "table of contents"];

/// Markers identifying recurring branding images.
pub const DEFAULT_BRAND_MARKERS: [&str; 2] = ["Allscripts", "Altera"];

/// Marker identifying trailing index pages.
pub const DEFAULT_INDEX_MARKER: &str = "Index";

/// Cleanup preset levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanupPreset {
    /// Minimal cleanup: page break markers only
    Minimal,
    /// Layout cleanup: footers and page breaks, no content-marker heuristics
    Layout,
    /// Standard cleanup: all stages
    #[default]
    Standard,
}

/// Options for footer fingerprinting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterOptions {
    /// Minimum similarity for two footers to count as the same pattern (0.0-1.0)
    pub threshold: f64,

    /// Share of pages allowed to deviate from the dominant footer (0-100)
    pub tolerance_percentage: f64,

    /// Longest footer (in elements) to try
    pub max_length: usize,

    /// Similarity scorer
    pub metric: SimilarityMetric,
}

impl FooterOptions {
    /// Create footer options with the given threshold and tolerance.
    pub fn new(threshold: f64, tolerance_percentage: f64) -> Self {
        Self {
            threshold,
            tolerance_percentage,
            ..Self::default()
        }
    }

    /// Set the similarity metric.
    pub fn with_metric(mut self, metric: SimilarityMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Set the longest footer length to try.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Largest number of mismatched footers tolerated across `total_pages` page breaks.
    pub fn max_mismatches(&self, total_pages: usize) -> usize {
        let allowed = (self.tolerance_percentage / 100.0 * total_pages as f64).floor() as usize;
        allowed.max(1)
    }

    /// Check that every value is within range.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::InvalidOption(format!(
                "footer threshold must be within [0, 1], got {}",
                self.threshold
            )));
        }
        if !(0.0..=100.0).contains(&self.tolerance_percentage) {
            return Err(Error::InvalidOption(format!(
                "footer tolerance must be within [0, 100], got {}",
                self.tolerance_percentage
            )));
        }
        if self.max_length == 0 {
            return Err(Error::InvalidOption(
                "footer max length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for FooterOptions {
    fn default() -> Self {
        Self {
            threshold: 0.8,
            tolerance_percentage: 7.0,
            max_length: 3,
            metric: SimilarityMetric::default(),
        }
    }
}

/// Options for the element cleanup pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanupOptions {
    /// Drop the cover page and leading title/TOC pages
    pub remove_leading_matter: bool,

    /// Drop branding images at the top of pages
    pub remove_branded_images: bool,

    /// Drop trailing index pages
    pub remove_trailing_index: bool,

    /// Detect and strip repeated page footers
    pub remove_footers: bool,

    /// Drop page break markers
    pub remove_page_breaks: bool,

    /// Drop leading dot-leader tables left over from a table of contents
    pub remove_toc_continuation: bool,

    /// Case-insensitive prefixes marking leading pages to drop
    pub leading_markers: Vec<String>,

    /// Substrings marking branding images
    pub brand_markers: Vec<String>,

    /// Substring marking index pages
    pub index_marker: String,

    /// Footer fingerprinting options
    pub footer: FooterOptions,
}

impl CleanupOptions {
    /// Create new cleanup options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        match preset {
            CleanupPreset::Minimal => Self::minimal(),
            CleanupPreset::Layout => Self::layout(),
            CleanupPreset::Standard => Self::standard(),
        }
    }

    /// Minimal cleanup options.
    pub fn minimal() -> Self {
        Self {
            remove_leading_matter: false,
            remove_branded_images: false,
            remove_trailing_index: false,
            remove_footers: false,
            remove_page_breaks: true,
            remove_toc_continuation: false,
            ..Self::standard()
        }
    }

    /// Layout-only cleanup options.
    pub fn layout() -> Self {
        Self {
            remove_leading_matter: false,
            remove_branded_images: false,
            remove_trailing_index: false,
            remove_footers: true,
            remove_page_breaks: true,
            remove_toc_continuation: false,
            ..Self::standard()
        }
    }

    /// Standard cleanup options.
    pub fn standard() -> Self {
        Self {
            remove_leading_matter: true,
            remove_branded_images: true,
            remove_trailing_index: true,
            remove_footers: true,
            remove_page_breaks: true,
            remove_toc_continuation: true,
            leading_markers: DEFAULT_LEADING_MARKERS.iter().map(|s| s.to_string()).collect(),
            brand_markers: DEFAULT_BRAND_MARKERS.iter().map(|s| s.to_string()).collect(),
            index_marker: DEFAULT_INDEX_MARKER.to_string(),
            footer: FooterOptions::default(),
        }
    }

    /// Enable or disable leading matter removal.
    pub fn with_leading_matter(mut self, remove: bool) -> Self {
        self.remove_leading_matter = remove;
        self
    }

    /// Enable or disable branded image removal.
    pub fn with_branded_images(mut self, remove: bool) -> Self {
        self.remove_branded_images = remove;
        self
    }

    /// Enable or disable trailing index removal.
    pub fn with_trailing_index(mut self, remove: bool) -> Self {
        self.remove_trailing_index = remove;
        self
    }

    /// Enable or disable footer removal.
    pub fn with_footers(mut self, remove: bool) -> Self {
        self.remove_footers = remove;
        self
    }

    /// Enable or disable page break removal.
    pub fn with_page_breaks(mut self, remove: bool) -> Self {
        self.remove_page_breaks = remove;
        self
    }

    /// Enable or disable TOC continuation removal.
    pub fn with_toc_continuation(mut self, remove: bool) -> Self {
        self.remove_toc_continuation = remove;
        self
    }

    /// Replace the leading page markers.
    pub fn with_leading_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.leading_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the brand markers.
    pub fn with_brand_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.brand_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Set the index page marker.
    pub fn with_index_marker(mut self, marker: impl Into<String>) -> Self {
        self.index_marker = marker.into();
        self
    }

    /// Set footer options.
    pub fn with_footer(mut self, footer: FooterOptions) -> Self {
        self.footer = footer;
        self
    }

    /// Set the footer similarity threshold.
    pub fn with_footer_threshold(mut self, threshold: f64) -> Self {
        self.footer.threshold = threshold;
        self
    }

    /// Set the footer mismatch tolerance (percent of pages).
    pub fn with_footer_tolerance(mut self, tolerance_percentage: f64) -> Self {
        self.footer.tolerance_percentage = tolerance_percentage;
        self
    }

    /// Set the footer similarity metric.
    pub fn with_similarity_metric(mut self, metric: SimilarityMetric) -> Self {
        self.footer.metric = metric;
        self
    }

    /// Check that every option is usable.
    pub fn validate(&self) -> Result<()> {
        self.footer.validate()?;
        if self.leading_markers.iter().any(|m| m.is_empty()) {
            return Err(Error::InvalidOption(
                "leading markers must not be empty".to_string(),
            ));
        }
        if self.brand_markers.iter().any(|m| m.is_empty()) {
            return Err(Error::InvalidOption(
                "brand markers must not be empty".to_string(),
            ));
        }
        if self.remove_trailing_index && self.index_marker.is_empty() {
            return Err(Error::InvalidOption(
                "index marker must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self::standard()
    }
}
