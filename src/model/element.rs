//! Element-level types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Category tag assigned to an element by the layout extractor.
///
/// Only the four structural categories drive the cleaning heuristics. Every
/// other tag (`NarrativeText`, `Title`, `ListItem`, ...) is kept verbatim in
/// [`Category::Other`] and passes through the filters untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Plain text block
    Text,
    /// Table (text holds the flattened cell content)
    Table,
    /// Image (text holds any OCR'd or alt text)
    Image,
    /// Page break marker
    PageBreak,
    /// Any other extractor category
    Other(String),
}

impl Category {
    /// Get the wire name of this category.
    pub fn as_str(&self) -> &str {
        match self {
            Category::Text => "Text",
            Category::Table => "Table",
            Category::Image => "Image",
            Category::PageBreak => "PageBreak",
            Category::Other(name) => name,
        }
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Text" => Category::Text,
            "Table" => Category::Table,
            "Image" => Category::Image,
            "PageBreak" => Category::PageBreak,
            _ => Category::Other(name),
        }
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Category::from(name.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extractor metadata attached to an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementMetadata {
    /// Page number (1-indexed)
    #[serde(default = "default_page_number")]
    pub page_number: u32,

    /// Remaining metadata keys, preserved as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_page_number() -> u32 {
    1
}

impl Default for ElementMetadata {
    fn default() -> Self {
        Self {
            page_number: default_page_number(),
            extra: Map::new(),
        }
    }
}

/// A single unit of extracted document content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Category tag
    #[serde(rename = "type")]
    pub category: Category,

    /// Extractor-assigned identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,

    /// Text content (empty for pure layout markers)
    #[serde(default)]
    pub text: String,

    /// Page number and other extractor metadata
    #[serde(default)]
    pub metadata: ElementMetadata,
}

impl Element {
    /// Create an element with the given category, text and page number.
    pub fn new(category: impl Into<Category>, text: impl Into<String>, page_number: u32) -> Self {
        Self {
            category: category.into(),
            element_id: None,
            text: text.into(),
            metadata: ElementMetadata {
                page_number,
                extra: Map::new(),
            },
        }
    }

    /// Create a text element.
    pub fn text(text: impl Into<String>, page_number: u32) -> Self {
        Self::new(Category::Text, text, page_number)
    }

    /// Create a table element.
    pub fn table(text: impl Into<String>, page_number: u32) -> Self {
        Self::new(Category::Table, text, page_number)
    }

    /// Create an image element.
    pub fn image(text: impl Into<String>, page_number: u32) -> Self {
        Self::new(Category::Image, text, page_number)
    }

    /// Create a page break marker.
    pub fn page_break(page_number: u32) -> Self {
        Self::new(Category::PageBreak, "", page_number)
    }

    /// Set the element identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.element_id = Some(id.into());
        self
    }

    /// Get the page number (1-indexed).
    pub fn page_number(&self) -> u32 {
        self.metadata.page_number
    }

    /// Check if this element is a page break marker.
    pub fn is_page_break(&self) -> bool {
        self.category == Category::PageBreak
    }

    /// Check if this element is an image.
    pub fn is_image(&self) -> bool {
        self.category == Category::Image
    }

    /// Check if this element is a table.
    pub fn is_table(&self) -> bool {
        self.category == Category::Table
    }
}
