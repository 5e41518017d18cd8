//! Markdown to HTML rendering with pre-computed heading ids.
//!
//! Ids come from [`extract_headings`](crate::parser::extract_headings) and are
//! attached while rendering, keyed by source line, so the table of contents
//! and the rendered document always agree without re-scanning the output.

use std::collections::HashMap;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag};

use crate::config::RenderConfig;
use crate::parser::Heading;

/// Options for rendering markdown to HTML.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Enable GitHub Flavored Markdown tables
    pub enable_tables: bool,
    /// Enable strikethrough syntax (~~text~~)
    pub enable_strikethrough: bool,
    /// Enable task list items ([x] and [ ])
    pub enable_tasklists: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            enable_tables: true,
            enable_strikethrough: true,
            enable_tasklists: true,
        }
    }
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        Self {
            enable_tables: config.tables,
            enable_strikethrough: config.strikethrough,
            enable_tasklists: config.tasklists,
        }
    }
}

impl RenderOptions {
    fn to_pulldown_options(&self) -> Options {
        let mut options = Options::empty();
        if self.enable_tables {
            options.insert(Options::ENABLE_TABLES);
        }
        if self.enable_strikethrough {
            options.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.enable_tasklists {
            options.insert(Options::ENABLE_TASKLISTS);
        }
        options
    }
}

/// Convert byte offset to line number (1-indexed).
fn byte_offset_to_line(content: &str, byte_offset: usize) -> usize {
    content.as_bytes()[..byte_offset.min(content.len())]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}

/// Render markdown to HTML, giving each heading the id of the extracted
/// heading on the same source line.
///
/// `headings` must come from the same `markdown` string (their `line` values
/// are matched against it). Rendered headings without a counterpart, such
/// as setext or level 4-6 headings, get no id. Extracted lines that do not
/// render as headings (inside a code fence, say) are skipped.
///
/// # Example
///
/// ```
/// use blogtoc::parser::extract_headings;
/// use blogtoc::render::{RenderOptions, render_html};
///
/// let md = "## Setup: Step 1\n\nbody";
/// let html = render_html(md, &extract_headings(md), &RenderOptions::default());
/// assert!(html.starts_with(r#"<h2 id="setup-step-1">"#));
/// ```
pub fn render_html(markdown: &str, headings: &[Heading], options: &RenderOptions) -> String {
    let by_line: HashMap<usize, &Heading> = headings.iter().map(|h| (h.line, h)).collect();
    let mut assigned = 0usize;

    let parser = Parser::new_ext(markdown, options.to_pulldown_options());
    let events = parser.into_offset_iter().map(|(event, range)| match event {
        Event::Start(Tag::Heading {
            level,
            id,
            classes,
            attrs,
        }) => {
            let line = byte_offset_to_line(markdown, range.start);
            let id = match by_line.get(&line) {
                Some(h) if h.level == level as usize && !h.id.is_empty() => {
                    assigned += 1;
                    Some(CowStr::from(h.id.clone()))
                }
                _ => id,
            };
            Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            })
        }
        other => other,
    });

    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, events);

    tracing::debug!(
        headings = headings.len(),
        assigned,
        html_len = html_output.len(),
        "rendered markdown"
    );

    html_output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract_headings;

    fn render(md: &str) -> String {
        render_html(md, &extract_headings(md), &RenderOptions::default())
    }

    #[test]
    fn test_byte_offset_to_line() {
        let content = "a\nbb\n\nccc";
        assert_eq!(byte_offset_to_line(content, 0), 1);
        assert_eq!(byte_offset_to_line(content, 2), 2);
        assert_eq!(byte_offset_to_line(content, 6), 4);
        assert_eq!(byte_offset_to_line(content, 100), 4);
    }

    #[test]
    fn test_heading_ids_assigned() {
        let html = render("# 指南\n\n## 快速部署（入门）\n\ntext");
        assert!(html.contains(r#"<h1 id="指南">指南</h1>"#));
        assert!(html.contains(r#"<h2 id="快速部署入门">快速部署（入门）</h2>"#));
    }

    #[test]
    fn test_deep_and_setext_headings_get_no_id() {
        let html = render("#### Deep\n\nSetext\n======\n");
        assert!(html.contains("<h4>Deep</h4>"));
        assert!(html.contains("<h1>Setext</h1>"));
    }

    #[test]
    fn test_code_fence_lines_are_skipped() {
        let md = "```sh\n# install\n```\n\n## Real";
        let headings = extract_headings(md);
        assert_eq!(headings.len(), 2);

        let html = render_html(md, &headings, &RenderOptions::default());
        assert!(html.contains(r#"<h2 id="real">Real</h2>"#));
        assert!(!html.contains(r#"id="install""#));
    }

    #[test]
    fn test_caller_supplied_ids_win() {
        let md = "## Same\n\n## Same";
        let headings = crate::toc::unique_ids(&extract_headings(md));
        let html = render_html(md, &headings, &RenderOptions::default());
        assert!(html.contains(r#"<h2 id="same">"#));
        assert!(html.contains(r#"<h2 id="same-1">"#));
    }

    #[test]
    fn test_gfm_options() {
        let md = "| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~";
        let html = render(md);
        assert!(html.contains("<table>"));
        assert!(html.contains("<del>gone</del>"));

        let plain = render_html(
            md,
            &[],
            &RenderOptions {
                enable_tables: false,
                enable_strikethrough: false,
                enable_tasklists: false,
            },
        );
        assert!(!plain.contains("<table>"));
        assert!(!plain.contains("<del>"));
    }
}
