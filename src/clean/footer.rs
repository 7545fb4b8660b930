//! Repeated page footer detection and removal.
//!
//! Pages usually end with a short footer (title, page number, legal line)
//! repeated with small variations. The footer length is inferred by
//! concatenating the last `L` elements before every page break, clustering
//! those strings by similarity and accepting the longest `L` whose outliers
//! stay within the configured tolerance.

use super::FooterOptions;
use crate::model::{page_break_positions, DropMask, Element};
use crate::similarity::{Similarity, SimilarityMetric};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Inferred footer length and the footers that did not match the dominant pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterFingerprint {
    /// Number of trailing elements per page that form the footer (0 = none)
    pub length: usize,

    /// Distinct footer texts outside the dominant cluster, in first-seen order
    pub mismatched: Vec<String>,
}

impl FooterFingerprint {
    /// Check if a footer was detected.
    pub fn is_detected(&self) -> bool {
        self.length > 0
    }
}

/// Infer the footer length of `elements`.
///
/// Lengths from `options.max_length` down to 1 are tried in turn and the
/// first one with at most [`FooterOptions::max_mismatches`] outliers wins.
/// Returns an empty fingerprint when there are no page breaks or no length
/// qualifies.
pub fn find_footer_length(
    elements: &[Element],
    options: &FooterOptions,
    scorer: &dyn Similarity,
) -> FooterFingerprint {
    let breaks = page_break_positions(elements);
    if breaks.is_empty() {
        return FooterFingerprint::default();
    }

    let max_mismatches = options.max_mismatches(breaks.len());

    for length in (1..=options.max_length).rev() {
        let footers = footer_texts(elements, &breaks, length);
        if footers.is_empty() {
            log::trace!("footer length {}: no page has enough elements", length);
            continue;
        }

        let mismatched = mismatched_footers(&footers, options.threshold, scorer);
        log::trace!(
            "footer length {}: {} footers, {} mismatched (allowed {})",
            length,
            footers.len(),
            mismatched.len(),
            max_mismatches
        );

        if mismatched.len() <= max_mismatches {
            return FooterFingerprint { length, mismatched };
        }
    }

    FooterFingerprint::default()
}

/// Infer the footer length with the default scorer.
///
/// Returns `(footer_length, mismatched_footer_texts)`.
pub fn find_minimum_footer_length(
    elements: &[Element],
    threshold: f64,
    tolerance_percentage: f64,
) -> (usize, Vec<String>) {
    let options = FooterOptions::new(threshold, tolerance_percentage);
    let fingerprint = find_footer_length(elements, &options, &SimilarityMetric::default());
    (fingerprint.length, fingerprint.mismatched)
}

/// Drop the `footer_length` elements preceding every page break.
///
/// Breaks with fewer preceding elements are left alone. Pages whose footer
/// was reported as mismatched are stripped all the same.
pub fn remove_footer_elements(elements: Vec<Element>, footer_length: usize) -> Vec<Element> {
    if footer_length == 0 {
        return elements;
    }

    let mut mask = DropMask::new(elements.len());
    for pos in page_break_positions(&elements) {
        if pos >= footer_length {
            (pos - footer_length..pos).for_each(|i| mask.mark(i));
        }
    }
    mask.apply(elements)
}

/// Detect the footer and strip it from every page.
pub fn remove_footers(
    elements: Vec<Element>,
    options: &FooterOptions,
    scorer: &dyn Similarity,
) -> (Vec<Element>, FooterFingerprint) {
    let fingerprint = find_footer_length(&elements, options, scorer);
    if !fingerprint.is_detected() {
        log::debug!("no footer detected (scorer {})", scorer.name());
        return (elements, fingerprint);
    }

    log::debug!(
        "footer length {} ({} mismatched footers, scorer {})",
        fingerprint.length,
        fingerprint.mismatched.len(),
        scorer.name()
    );
    for text in &fingerprint.mismatched {
        log::trace!("mismatched footer: {:?}", text);
    }

    let cleaned = remove_footer_elements(elements, fingerprint.length);
    (cleaned, fingerprint)
}

/// Concatenated text of the `length` elements before each page break that has that many.
fn footer_texts(elements: &[Element], breaks: &[usize], length: usize) -> Vec<String> {
    breaks
        .iter()
        .filter(|&&pos| pos >= length)
        .map(|&pos| {
            elements[pos - length..pos]
                .iter()
                .map(|e| e.text.as_str())
                .collect()
        })
        .collect()
}

/// Footers whose similarity count falls below the dominant cluster size.
///
/// A footer's count is the number of footers (itself included, duplicates
/// counted individually) scoring at least `threshold` against it.
fn mismatched_footers(footers: &[String], threshold: f64, scorer: &dyn Similarity) -> Vec<String> {
    // Distinct texts with multiplicity; duplicates always share a count
    let mut distinct: Vec<(&str, usize)> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();
    for footer in footers {
        match slots.entry(footer.as_str()) {
            Entry::Occupied(slot) => distinct[*slot.get()].1 += 1,
            Entry::Vacant(slot) => {
                slot.insert(distinct.len());
                distinct.push((footer.as_str(), 1));
            }
        }
    }

    let counts: Vec<usize> = distinct
        .iter()
        .map(|(text, _)| {
            distinct
                .iter()
                .filter(|(other, _)| scorer.similarity(text, other) >= threshold)
                .map(|(_, occurrences)| occurrences)
                .sum()
        })
        .collect();

    let dominant = counts.iter().copied().max().unwrap_or(0);

    distinct
        .iter()
        .zip(&counts)
        .filter(|(_, &count)| count < dominant)
        .map(|((text, _), _)| text.to_string())
        .collect()
}
