//! Leftover table-of-contents removal.

use crate::model::Element;
use std::collections::HashMap;

/// Drop the leading run of dot-leader tables.
///
/// A table of contents that spills over several pages survives the leading
/// matter stage as tables full of `.....` fillers. Only the prefix of the
/// sequence is inspected: the first element that is not such a table ends
/// the scan.
pub fn remove_toc_continuation(mut elements: Vec<Element>) -> Vec<Element> {
    let leading = elements
        .iter()
        .take_while(|e| is_toc_continuation(e))
        .count();

    if leading > 0 {
        log::debug!("removing {} leading table-of-contents tables", leading);
        elements.drain(..leading);
    }
    elements
}

/// Check whether an element is a table whose most frequent character is `.`.
pub fn is_toc_continuation(element: &Element) -> bool {
    element.is_table() && most_frequent_char(&element.text) == Some('.')
}

/// Most frequent character of `text`; ties go to the character seen first.
fn most_frequent_char(text: &str) -> Option<char> {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in text.chars() {
        *counts.entry(c).or_default() += 1;
    }

    let max = counts.values().copied().max()?;
    text.chars().find(|c| counts[c] == max)
}
