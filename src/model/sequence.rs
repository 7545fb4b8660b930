//! Helpers over ordered element sequences.

use super::Element;

/// Indices of all page break markers, in sequence order.
pub fn page_break_positions(elements: &[Element]) -> Vec<usize> {
    elements
        .iter()
        .enumerate()
        .filter(|(_, e)| e.is_page_break())
        .map(|(i, _)| i)
        .collect()
}

/// Number of pages delimited by the page breaks in `elements`.
///
/// An empty sequence has no pages; otherwise there is one page more than
/// there are page breaks.
pub fn page_count(elements: &[Element]) -> usize {
    if elements.is_empty() {
        0
    } else {
        page_break_positions(elements).len() + 1
    }
}

/// Bitmap of element indices marked for removal.
///
/// Filters mark indices while scanning a borrowed sequence and project the
/// owned sequence afterwards, so nothing is removed mid-iteration.
#[derive(Debug, Clone, Default)]
pub struct DropMask {
    marked: Vec<bool>,
    count: usize,
}

impl DropMask {
    /// Create an empty mask for a sequence of `len` elements.
    pub fn new(len: usize) -> Self {
        Self {
            marked: vec![false; len],
            count: 0,
        }
    }

    /// Mark an index. Out-of-range indices are ignored.
    pub fn mark(&mut self, index: usize) {
        if let Some(slot) = self.marked.get_mut(index) {
            if !*slot {
                *slot = true;
                self.count += 1;
            }
        }
    }

    /// Check whether an index is marked.
    pub fn is_marked(&self, index: usize) -> bool {
        self.marked.get(index).copied().unwrap_or(false)
    }

    /// Number of marked indices.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Check if nothing is marked.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Keep every unmarked element, preserving order.
    pub fn apply(&self, elements: Vec<Element>) -> Vec<Element> {
        if self.is_empty() {
            return elements;
        }
        elements
            .into_iter()
            .enumerate()
            .filter(|(i, _)| !self.is_marked(*i))
            .map(|(_, e)| e)
            .collect()
    }
}
