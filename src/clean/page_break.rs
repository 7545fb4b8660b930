//! Page break marker removal.

use crate::model::Element;

/// Drop every page break marker.
pub fn remove_page_breaks(elements: Vec<Element>) -> Vec<Element> {
    elements.into_iter().filter(|e| !e.is_page_break()).collect()
}
