//! Cleanup result with statistics.

use super::Stage;
use crate::model::{page_count, Element};
use serde::{Deserialize, Serialize};

/// Result of cleaning an element sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupResult {
    /// The surviving elements, in their original order
    pub elements: Vec<Element>,

    /// What each stage removed
    pub stats: CleanupStats,
}

/// Statistics collected while cleaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupStats {
    /// Number of elements received
    pub input_elements: usize,

    /// Number of elements returned
    pub output_elements: usize,

    /// Number of pages in the input (page breaks + 1)
    pub input_pages: usize,

    /// Elements removed as cover, title or TOC pages
    pub leading_matter: usize,

    /// Branding images removed
    pub branded_images: usize,

    /// Elements removed as trailing index pages
    pub trailing_index: usize,

    /// Footer elements removed
    pub footer_elements: usize,

    /// Page break markers removed
    pub page_breaks: usize,

    /// Leading table-of-contents tables removed
    pub toc_continuation: usize,

    /// Inferred footer length (0 = no footer found)
    pub footer_length: usize,

    /// Footer texts that did not match the dominant footer
    pub mismatched_footers: Vec<String>,
}

impl CleanupStats {
    /// Start statistics for an input sequence, before any stage has run.
    pub fn new(input: &[Element]) -> Self {
        Self {
            input_elements: input.len(),
            input_pages: page_count(input),
            ..Self::default()
        }
    }

    /// Number of elements removed by a stage.
    pub fn removed_by(&self, stage: Stage) -> usize {
        match stage {
            Stage::LeadingMatter => self.leading_matter,
            Stage::BrandedImages => self.branded_images,
            Stage::TrailingIndex => self.trailing_index,
            Stage::Footers => self.footer_elements,
            Stage::PageBreaks => self.page_breaks,
            Stage::TocContinuation => self.toc_continuation,
        }
    }

    /// Record the number of elements removed by a stage.
    pub fn set_removed(&mut self, stage: Stage, removed: usize) {
        let slot = match stage {
            Stage::LeadingMatter => &mut self.leading_matter,
            Stage::BrandedImages => &mut self.branded_images,
            Stage::TrailingIndex => &mut self.trailing_index,
            Stage::Footers => &mut self.footer_elements,
            Stage::PageBreaks => &mut self.page_breaks,
            Stage::TocContinuation => &mut self.toc_continuation,
        };
        *slot = removed;
    }

    /// Total number of elements removed across all stages.
    pub fn total_removed(&self) -> usize {
        Stage::ALL.iter().map(|&stage| self.removed_by(stage)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_total_removed() {
        let mut stats = CleanupStats::new(&[]);
        stats.set_removed(Stage::LeadingMatter, 4);
        stats.set_removed(Stage::Footers, 6);
        stats.set_removed(Stage::PageBreaks, 3);

        assert_eq!(stats.removed_by(Stage::Footers), 6);
        assert_eq!(stats.footer_elements, 6);
        assert_eq!(stats.total_removed(), 13);
    }

    #[test]
    fn test_new_records_input() {
        let input = vec![
            Element::text("Body", 1),
            Element::page_break(1),
            Element::text("More", 2),
        ];
        let stats = CleanupStats::new(&input);
        assert_eq!(stats.input_elements, 3);
        assert_eq!(stats.input_pages, 2);
        assert_eq!(stats.total_removed(), 0);
        assert_eq!(stats.output_elements, 0);
    }

    #[test]
    fn test_stats_serialize() {
        let stats = CleanupStats {
            footer_length: 2,
            mismatched_footers: vec!["Draft".to_string()],
            ..Default::default()
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["footer_length"], 2);
        assert_eq!(json["mismatched_footers"][0], "Draft");
    }
}
