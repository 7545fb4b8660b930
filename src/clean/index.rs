//! Trailing index section removal.

use super::MarkerSet;
use crate::model::{page_break_positions, Element};

/// Truncate the trailing run of pages that open with the index marker.
///
/// Page breaks are walked from last to first. For the break at `pb[j]` the
/// probed element is the one right after the previous break `pb[j - 1]` (or
/// element 1 for the first break). While the probed element matches, the
/// sequence is cut just after that previous break; the first non-matching
/// page stops the walk, so only a contiguous tail is ever removed.
pub fn remove_trailing_index(mut elements: Vec<Element>, markers: &MarkerSet) -> Vec<Element> {
    let breaks = page_break_positions(&elements);
    let mut end = elements.len();

    for j in (0..breaks.len()).rev() {
        let start = if j > 0 { breaks[j - 1] } else { 0 };
        if start + 1 >= end {
            continue;
        }
        if markers.matches(&elements[start + 1].text) {
            end = start + 1;
        } else {
            break;
        }
    }

    if end < elements.len() {
        log::debug!(
            "removing {} trailing index elements",
            elements.len() - end
        );
        elements.truncate(end);
    }
    elements
}
