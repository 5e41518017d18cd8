use serde::{Deserialize, Serialize};

use crate::guide::Tab;

/// A markdown heading eligible for the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level (1-3)
    pub level: usize,
    /// Display text, trimmed, inline markdown left intact
    pub text: String,
    /// URL-fragment-safe slug derived from `text`
    pub id: String,
    /// Source line (1-indexed) within the text the heading was extracted from
    pub line: usize,
}

impl Heading {
    /// Fragment link to this heading, e.g. `#setup-step-1`.
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// A document partitioned into its main body and trailing Q&A region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSplit {
    pub main: String,
    /// Empty when the document has no Q&A marker.
    pub qa: String,
}

impl DocumentSplit {
    pub fn has_qa(&self) -> bool {
        !self.qa.is_empty()
    }

    /// Markdown of a single region.
    pub fn region(&self, tab: Tab) -> &str {
        match tab {
            Tab::Main => &self.main,
            Tab::Qa => &self.qa,
        }
    }
}

/// A loaded post: raw content, its split, and the headings of the whole text.
#[derive(Debug, Clone)]
pub struct Document {
    pub content: String,
    pub split: DocumentSplit,
    pub headings: Vec<Heading>,
}

impl Document {
    pub fn new(content: String, split: DocumentSplit, headings: Vec<Heading>) -> Self {
        Self {
            content,
            split,
            headings,
        }
    }

    /// Headings of one region, extracted from that region's own text so that
    /// `line` values are relative to what gets rendered for the tab.
    pub fn headings_for(&self, tab: Tab) -> Vec<Heading> {
        super::extract_headings(self.split.region(tab))
    }

    /// Get headings at a specific level.
    pub fn headings_at_level(&self, level: usize) -> Vec<&Heading> {
        self.headings.iter().filter(|h| h.level == level).collect()
    }

    /// Find the first heading with the given id.
    pub fn find_by_id(&self, id: &str) -> Option<&Heading> {
        self.headings.iter().find(|h| h.id == id)
    }
}
