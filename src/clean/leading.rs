//! Cover page and leading title/TOC page removal.

use super::MarkerSet;
use crate::model::Element;

/// Drop the cover page and every leading page that opens with a marker.
///
/// Page 1 and page break markers are skipped outright. The first element of
/// each following page decides whether the whole page is dropped: the page
/// goes if that element's text matches `markers`, or if it is an image whose
/// next element matches (a logo placed above the title). The first page that
/// is kept ends the scan and the rest of the sequence is returned verbatim.
///
/// If every page is dropped the result is empty.
pub fn remove_leading_matter(mut elements: Vec<Element>, markers: &MarkerSet) -> Vec<Element> {
    let start = first_kept_index(&elements, markers);

    match start {
        Some(index) => elements.split_off(index),
        None => {
            if !elements.is_empty() {
                log::warn!(
                    "no content page found after leading matter; dropping all {} elements",
                    elements.len()
                );
            }
            Vec::new()
        }
    }
}

fn first_kept_index(elements: &[Element], markers: &MarkerSet) -> Option<usize> {
    let mut current_page = 1;
    let mut skip_page = false;

    for (i, element) in elements.iter().enumerate() {
        if element.page_number() == 1 || element.is_page_break() {
            continue;
        }

        if element.page_number() != current_page {
            current_page = element.page_number();
            skip_page = markers.matches(&element.text)
                || (element.is_image()
                    && elements
                        .get(i + 1)
                        .is_some_and(|next| markers.matches(&next.text)));
        }

        if !skip_page {
            return Some(i);
        }
    }

    None
}
