//! Integration tests for the cleanup pipeline.

use unfurnish::clean::{
    remove_branded_images, remove_footer_elements, remove_leading_matter, remove_page_breaks,
    remove_toc_continuation, remove_trailing_index, MarkerSet, DEFAULT_BRAND_MARKERS,
    DEFAULT_INDEX_MARKER, DEFAULT_LEADING_MARKERS,
};
use unfurnish::{
    find_minimum_footer_length, CleanupOptions, CleanupPipeline, CleanupPreset, Element, Stage,
};

fn push_footer(elements: &mut Vec<Element>, page: u32) {
    elements.push(Element::text("Annual Report 2023", page));
    elements.push(Element::text("Confidential", page));
    elements.push(Element::text(format!("Page {}", page), page));
    elements.push(Element::page_break(page));
}

/// A six page report: cover, TOC page, three content pages, index page.
fn create_sample_report() -> Vec<Element> {
    let mut elements = Vec::new();

    // Page 1: cover
    elements.push(Element::image("Altera logo", 1));
    elements.push(Element::text("Annual Report", 1));
    elements.push(Element::page_break(1));

    // Page 2: table of contents below the logo
    elements.push(Element::image("Altera", 2));
    elements.push(Element::text("Table of Contents", 2));
    elements.push(Element::table("1. Introduction ........ 3", 2));
    push_footer(&mut elements, 2);

    // Page 3: TOC spill-over, then content
    elements.push(Element::image("Altera", 3));
    elements.push(Element::table("2. Results ........ 5", 3));
    elements.push(Element::text("Introduction", 3));
    elements.push(Element::text("This report covers the fiscal year.", 3));
    push_footer(&mut elements, 3);

    // Page 4
    elements.push(Element::image("Altera", 4));
    elements.push(Element::text("Results", 4));
    elements.push(Element::text("Revenue grew across all regions.", 4));
    push_footer(&mut elements, 4);

    // Page 5
    elements.push(Element::text("Outlook remains positive.", 5));
    push_footer(&mut elements, 5);

    // Page 6: index
    elements.push(Element::text("Index", 6));
    elements.push(Element::text("apple, 3", 6));
    push_footer(&mut elements, 6);

    elements
        .into_iter()
        .enumerate()
        .map(|(i, e)| e.with_id(format!("e{}", i)))
        .collect()
}

fn texts(elements: &[Element]) -> Vec<&str> {
    elements.iter().map(|e| e.text.as_str()).collect()
}

#[test]
fn test_standard_pipeline_on_report() {
    let pipeline = CleanupPipeline::new(CleanupOptions::default()).unwrap();
    let result = pipeline.process_with_stats(create_sample_report());

    assert_eq!(
        texts(&result.elements),
        vec![
            "Introduction",
            "This report covers the fiscal year.",
            "Results",
            "Revenue grew across all regions.",
            "Outlook remains positive.",
        ]
    );

    let stats = &result.stats;
    assert_eq!(stats.input_elements, 36);
    assert_eq!(stats.input_pages, 7);
    assert_eq!(stats.leading_matter, 10);
    assert_eq!(stats.branded_images, 2);
    assert_eq!(stats.trailing_index, 6);
    assert_eq!(stats.footer_elements, 9);
    assert_eq!(stats.page_breaks, 3);
    assert_eq!(stats.toc_continuation, 1);
    assert_eq!(stats.footer_length, 3);
    assert!(stats.mismatched_footers.is_empty());
    assert_eq!(stats.total_removed(), 31);
    assert_eq!(stats.output_elements, 5);
}

#[test]
fn test_output_preserves_order() {
    let input = create_sample_report();
    let input_ids: Vec<_> = input.iter().map(|e| e.element_id.clone()).collect();

    for preset in [
        CleanupPreset::Minimal,
        CleanupPreset::Layout,
        CleanupPreset::Standard,
    ] {
        let output = CleanupPipeline::from_preset(preset).process(input.clone());

        // Every output id appears in the input after the previous one
        let mut cursor = 0;
        for element in &output {
            let offset = input_ids[cursor..]
                .iter()
                .position(|id| *id == element.element_id)
                .expect("output element missing from input or out of order");
            cursor += offset + 1;
        }
    }
}

#[test]
fn test_stages_can_be_disabled() {
    let options = CleanupOptions::default()
        .with_leading_matter(false)
        .with_trailing_index(false);
    let pipeline = CleanupPipeline::new(options).unwrap();
    let result = pipeline.process_with_stats(create_sample_report());

    assert!(!pipeline.is_enabled(Stage::LeadingMatter));
    assert_eq!(result.stats.removed_by(Stage::LeadingMatter), 0);
    assert_eq!(result.stats.removed_by(Stage::TrailingIndex), 0);
    assert!(result.elements.iter().any(|e| e.text == "Index"));
    assert!(result.elements.iter().all(|e| !e.is_page_break()));
}

#[test]
fn test_custom_brand_markers() {
    let elements = vec![
        Element::image("Acme Corp", 1),
        Element::text("Body", 1),
        Element::page_break(1),
        Element::image("Altera", 2),
    ];
    let options = CleanupOptions::from_preset(CleanupPreset::Minimal)
        .with_branded_images(true)
        .with_brand_markers(["Acme"]);
    let cleaned = CleanupPipeline::new(options).unwrap().process(elements);

    assert_eq!(texts(&cleaned), vec!["Body", "Altera"]);
}

#[test]
fn test_default_pipeline_strips_double_digit_page_numbers() {
    let mut elements = Vec::new();
    for page in 1..=12u32 {
        let body = match page {
            3 => "Quarterly revenue grew strongly in the northern region.".to_string(),
            7 => "Staff turnover remained below the industry average.".to_string(),
            11 => "Capital expenditure is expected to double next year.".to_string(),
            _ => format!("Section {} body text", page),
        };
        elements.push(Element::text(body, page));
        elements.push(Element::text(format!("Sheet {}", page), page));
        elements.push(Element::page_break(page));
    }

    let result = CleanupPipeline::default().process_with_stats(elements);

    assert_eq!(result.stats.footer_length, 1);
    assert_eq!(result.elements.len(), 11);
    assert!(result.elements.iter().all(|e| !e.text.starts_with("Sheet")));
}

// ==================== Stage Scenarios ====================

#[test]
fn test_leading_matter_published_date() {
    let elements = vec![
        Element::text("Cover", 1),
        Element::page_break(1),
        Element::text("Published Date: 2020", 2),
        Element::page_break(2),
        Element::text("Chapter 1", 3),
        Element::text("Body", 3),
    ];
    let markers = MarkerSet::prefix_ignore_case(DEFAULT_LEADING_MARKERS);
    let result = remove_leading_matter(elements, &markers);

    assert_eq!(texts(&result), vec!["Chapter 1", "Body"]);
    assert!(result.iter().all(|e| e.page_number() >= 3));
}

#[test]
fn test_trailing_index_page() {
    let elements = vec![
        Element::text("Body", 1),
        Element::page_break(1),
        Element::text("More body", 2),
        Element::page_break(2),
        Element::text("Index A-Z", 3),
        Element::text("zebra, 12", 3),
        Element::page_break(3),
    ];
    let markers = MarkerSet::contains([DEFAULT_INDEX_MARKER]);
    let result = remove_trailing_index(elements, &markers);

    assert_eq!(texts(&result), vec!["Body", "", "More body", ""]);
}

#[test]
fn test_toc_continuation_table() {
    let elements = vec![
        Element::table(".....................", 1),
        Element::text("Intro", 1),
    ];
    assert_eq!(
        remove_toc_continuation(elements),
        vec![Element::text("Intro", 1)]
    );
}

#[test]
fn test_branded_image_first() {
    let markers = MarkerSet::contains(DEFAULT_BRAND_MARKERS);

    let branded = vec![Element::image("Altera", 1), Element::text("Body", 1)];
    assert_eq!(remove_branded_images(branded, &markers).len(), 1);

    let unrelated = vec![Element::image("Bar chart", 1), Element::text("Body", 1)];
    assert_eq!(remove_branded_images(unrelated, &markers).len(), 2);
}

#[test]
fn test_page_numbers_as_footer() {
    // Nine pages; pages 3 and 8 carry distinct prose and page 6 ends with a
    // stray figure caption instead of its page number
    let mut elements = Vec::new();
    for page in 1..=9u32 {
        let body = match page {
            3 => "Quarterly revenue grew strongly in the northern region.",
            8 => "Staff turnover remained below the industry average.",
            _ => "Section text",
        };
        elements.push(Element::text(body, page));
        if page == 6 {
            elements.push(Element::text("Figure 4: distribution of outcomes", page));
        } else {
            elements.push(Element::text(format!("Page {}", page), page));
        }
        elements.push(Element::page_break(page));
    }

    let (length, mismatched) = find_minimum_footer_length(&elements, 0.8, 7.0);
    assert_eq!(length, 1);
    assert_eq!(mismatched, vec!["Figure 4: distribution of outcomes"]);

    let cleaned = remove_page_breaks(remove_footer_elements(elements, length));
    assert_eq!(cleaned.len(), 9);
    assert!(cleaned.iter().all(|e| !e.text.starts_with("Page ")));
    assert!(cleaned.iter().all(|e| !e.text.starts_with("Figure")));
}
