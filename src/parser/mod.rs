//! Heading extraction and document partitioning.
//!
//! Both entry points are total: malformed heading syntax is simply not a
//! heading, and a document without the Q&A marker has an empty Q&A region.

mod document;
pub mod output;
mod slug;
pub mod utils;

pub use document::{Document, DocumentSplit, Heading};
pub use output::{GuideOutput, build_json_output};
pub use slug::slugify;

use std::path::Path;

use crate::error::{Error, Result};

/// Title of the level-2 heading that opens the Q&A region.
pub const QA_TITLE: &str = "常见问题";

/// Extract level 1-3 headings in document order.
///
/// A line is a heading when it starts with one to three `#`, then
/// whitespace, then non-empty text. Duplicate texts yield duplicate ids; see
/// [`crate::toc::unique_ids`] for the opt-in disambiguation.
///
/// # Examples
///
/// ```
/// use blogtoc::parser::extract_headings;
///
/// let headings = extract_headings("## 快速部署（入门）\nbody\n#### Too Deep");
/// assert_eq!(headings.len(), 1);
/// assert_eq!(headings[0].level, 2);
/// assert_eq!(headings[0].id, "快速部署入门");
/// ```
pub fn extract_headings(markdown: &str) -> Vec<Heading> {
    markdown
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let (level, text) = utils::parse_heading_line(line)?;
            Some(Heading {
                level,
                text: text.to_string(),
                id: slugify(text),
                line: idx + 1,
            })
        })
        .collect()
}

/// Split a document into its main body and the Q&A region.
///
/// The Q&A region starts at the first `"\n## 常见问题"`.
pub fn split_document(markdown: &str) -> DocumentSplit {
    split_document_at(markdown, QA_TITLE)
}

/// Split a document at the first `"\n## {title}"`.
///
/// Exact substring search: the marker must follow a line break, and only
/// its first occurrence counts.
pub fn split_document_at(markdown: &str, title: &str) -> DocumentSplit {
    let marker = format!("\n## {title}");

    match markdown.find(&marker) {
        Some(idx) => {
            tracing::debug!(offset = idx, title, "found Q&A marker");
            DocumentSplit {
                main: markdown[..idx].trim().to_string(),
                qa: markdown[idx..].trim().to_string(),
            }
        }
        None => DocumentSplit {
            main: markdown.trim().to_string(),
            qa: String::new(),
        },
    }
}

/// Parse markdown content into a [`Document`], splitting at `qa_title`.
pub fn parse_markdown(content: &str, qa_title: &str) -> Document {
    let headings = extract_headings(content);
    let split = split_document_at(content, qa_title);
    tracing::debug!(
        headings = headings.len(),
        has_qa = split.has_qa(),
        "parsed document"
    );
    Document::new(content.to_string(), split, headings)
}

/// Read and parse a markdown file.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn parse_file(path: &Path, qa_title: &str) -> Result<Document> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_markdown(&content, qa_title))
}
