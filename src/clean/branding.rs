//! Recurring branding image removal.

use super::MarkerSet;
use crate::model::{DropMask, Element};

/// Drop branding images that open the sequence or directly follow a page break.
///
/// An image counts as branding when its text matches `markers`. Images
/// elsewhere on a page, and the page breaks themselves, are kept.
pub fn remove_branded_images(elements: Vec<Element>, markers: &MarkerSet) -> Vec<Element> {
    let is_branded = |element: &Element| element.is_image() && markers.matches(&element.text);

    let mut mask = DropMask::new(elements.len());
    if elements.first().is_some_and(is_branded) {
        mask.mark(0);
    }
    for (i, element) in elements.iter().enumerate() {
        if element.is_page_break() && elements.get(i + 1).is_some_and(is_branded) {
            mask.mark(i + 1);
        }
    }

    if !mask.is_empty() {
        log::debug!("removing {} branded images", mask.count());
    }
    mask.apply(elements)
}
