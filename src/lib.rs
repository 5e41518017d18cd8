//! # blogtoc
//!
//! Heading extraction, slug generation and table-of-contents modelling for
//! the guide viewer of a Markdown blog CMS.
//!
//! A post is split into its main body and a trailing Q&A region (starting at
//! a `## 常见问题` heading). Each region gets its own table of contents, and
//! rendered headings carry the same ids the TOC links to.
//!
//! ## Example
//!
//! ```rust
//! use blogtoc::{extract_headings, split_document};
//!
//! let markdown = "# 指南\ntext\n### Setup: Step 1\n## 常见问题\nQ1";
//!
//! let split = split_document(markdown);
//! assert_eq!(split.qa, "## 常见问题\nQ1");
//!
//! let headings = extract_headings(&split.main);
//! assert_eq!(headings[1].id, "setup-step-1");
//! ```

/// Configuration module for persisting user preferences.
///
/// Provides the Q&A marker title, tab labels, layout breakpoint and render
/// options, loaded from a TOML file.
pub mod config;

/// Error type for the I/O and configuration edges.
pub mod error;

/// Guide viewer state: tabs, TOC placement and active heading.
pub mod guide;

/// Input handling for file and stdin sources.
pub mod input;

/// Parser module for markdown documents.
///
/// Provides heading extraction, slug generation and the main/Q&A split.
pub mod parser;

/// HTML rendering with pre-computed heading ids.
pub mod render;

/// Table of contents entries, id disambiguation and active-heading tracking.
pub mod toc;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use guide::{GuideView, Tab, TocPlacement};
pub use parser::{
    Document, DocumentSplit, Heading, extract_headings, parse_file, parse_markdown, slugify,
    split_document,
};
