//! Table of contents model.
//!
//! - [`Toc`] turns extracted headings into indented, linkable entries
//! - [`unique_ids`] disambiguates duplicate slugs (opt-in)
//! - [`ActiveHeadingTracker`] picks the highlighted entry from visibility updates

use std::collections::{HashMap, HashSet};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::parser::Heading;

/// One line of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub level: usize,
    pub text: String,
    pub id: String,
    /// Indent steps: none for level 1, one for level 2, two for level 3
    pub indent: usize,
    /// Top-level entries are rendered with extra weight
    pub emphasized: bool,
}

impl TocEntry {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

impl From<&Heading> for TocEntry {
    fn from(heading: &Heading) -> Self {
        Self {
            level: heading.level,
            text: heading.text.clone(),
            id: heading.id.clone(),
            indent: heading.level.saturating_sub(1),
            emphasized: heading.level == 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toc {
    entries: Vec<TocEntry>,
}

impl Toc {
    pub fn new(headings: &[Heading]) -> Self {
        Self {
            entries: headings.iter().map(TocEntry::from).collect(),
        }
    }

    pub fn entries(&self) -> &[TocEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as an indented text outline, one entry per line.
    ///
    /// Titles are truncated to `width` display columns (CJK glyphs count as
    /// two) and padded so the `#id` anchors line up. The active entry, if
    /// any, is marked with `>`.
    pub fn render_plain(&self, width: usize, active: Option<&str>) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            let marker = if active == Some(entry.id.as_str()) { '>' } else { ' ' };
            let title = format!("{}{}", "  ".repeat(entry.indent), entry.text);
            let title = truncate_to_width(&title, width);
            let pad = width.saturating_sub(title.width());
            out.push_str(&format!(
                "{marker} {title}{} {}\n",
                " ".repeat(pad),
                entry.href()
            ));
        }
        out
    }
}

/// Truncate `text` to at most `max` display columns, ending with `…` when cut.
fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        // Reserve one column for the ellipsis.
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Make heading ids pairwise distinct.
///
/// The first occurrence of a slug keeps it, later ones get `-1`, `-2`, ...
/// appended. A suffixed id that collides with an id already handed out is
/// bumped again.
///
/// ```
/// use blogtoc::{parser::extract_headings, toc::unique_ids};
///
/// let headings = unique_ids(&extract_headings("## FAQ\n## FAQ\n## FAQ"));
/// let ids: Vec<_> = headings.iter().map(|h| h.id.as_str()).collect();
/// assert_eq!(ids, ["faq", "faq-1", "faq-2"]);
/// ```
pub fn unique_ids(headings: &[Heading]) -> Vec<Heading> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut counters: HashMap<&str, usize> = HashMap::new();

    headings
        .iter()
        .map(|heading| {
            let mut id = heading.id.clone();
            if seen.contains(&id) {
                let counter = counters.entry(heading.id.as_str()).or_insert(0);
                loop {
                    *counter += 1;
                    let candidate = format!("{}-{}", heading.id, counter);
                    if !seen.contains(&candidate) {
                        id = candidate;
                        break;
                    }
                }
                tracing::trace!(from = %heading.id, to = %id, "disambiguated heading id");
            }
            seen.insert(id.clone());
            Heading {
                id,
                ..heading.clone()
            }
        })
        .collect()
}

/// The heading a reader positioned at `line` is in: the last heading at or
/// before it.
pub fn heading_at_line(headings: &[Heading], line: usize) -> Option<&Heading> {
    headings.iter().take_while(|h| h.line <= line).last()
}

/// Tracks which TOC entry is highlighted.
///
/// Fed with the set of heading ids currently in view, the first one in
/// document order becomes active. An empty update keeps the previous
/// highlight.
#[derive(Debug, Clone, Default)]
pub struct ActiveHeadingTracker {
    order: Vec<String>,
    active: Option<String>,
}

impl ActiveHeadingTracker {
    pub fn new(headings: &[Heading]) -> Self {
        Self {
            order: headings.iter().map(|h| h.id.clone()).collect(),
            active: None,
        }
    }

    /// Replace the tracked headings and clear the highlight.
    pub fn reset(&mut self, headings: &[Heading]) {
        *self = Self::new(headings);
    }

    /// Apply a visibility update and return the active id.
    pub fn observe<'a, I>(&mut self, visible: I) -> Option<&str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let visible: HashSet<&str> = visible.into_iter().collect();
        if let Some(first) = self.order.iter().find(|id| visible.contains(id.as_str())) {
            self.active = Some(first.clone());
        }
        self.active.as_deref()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract_headings;

    fn sample() -> Vec<Heading> {
        extract_headings("# 指南\n## 安装\n### Setup: Step 1\n## 部署\n")
    }

    #[test]
    fn test_toc_entries() {
        let toc = Toc::new(&sample());
        let entries = toc.entries();
        assert_eq!(entries.len(), 4);
        assert!(entries[0].emphasized);
        assert_eq!(entries[0].indent, 0);
        assert_eq!(entries[1].indent, 1);
        assert!(!entries[1].emphasized);
        assert_eq!(entries[2].indent, 2);
        assert_eq!(entries[2].href(), "#setup-step-1");
    }

    #[test]
    fn test_render_plain() {
        let toc = Toc::new(&extract_headings("# Intro\n## Setup"));
        let rendered = toc.render_plain(10, Some("setup"));
        assert_eq!(rendered, "  Intro      #intro\n>   Setup    #setup\n");
    }

    #[test]
    fn test_render_plain_truncates_wide_text() {
        let toc = Toc::new(&extract_headings("# 快速部署入门指南"));
        let rendered = toc.render_plain(7, None);
        // Three double-width glyphs plus the ellipsis fit in seven columns.
        assert_eq!(rendered, "  快速部… #快速部署入门指南\n");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_unique_ids() {
        let headings = extract_headings("## A\n## A\n## A-1\n## A");
        let ids: Vec<_> = unique_ids(&headings).into_iter().map(|h| h.id).collect();
        assert_eq!(ids, vec!["a", "a-1", "a-1-1", "a-2"]);
    }

    #[test]
    fn test_unique_ids_keeps_other_fields() {
        let headings = extract_headings("# X\n\n### X");
        let unique = unique_ids(&headings);
        assert_eq!(unique[1].level, 3);
        assert_eq!(unique[1].text, "X");
        assert_eq!(unique[1].line, 3);
        assert_eq!(unique[1].id, "x-1");
    }

    #[test]
    fn test_heading_at_line() {
        let headings = sample();
        assert!(heading_at_line(&headings, 0).is_none());
        assert_eq!(heading_at_line(&headings, 1).map(|h| h.id.as_str()), Some("指南"));
        assert_eq!(heading_at_line(&headings, 3).map(|h| h.id.as_str()), Some("setup-step-1"));
        assert_eq!(heading_at_line(&headings, 99).map(|h| h.id.as_str()), Some("部署"));
    }

    #[test]
    fn test_tracker_prefers_document_order() {
        let mut tracker = ActiveHeadingTracker::new(&sample());
        assert_eq!(tracker.active(), None);

        // Visibility batches are unordered; the earliest heading wins.
        assert_eq!(tracker.observe(["部署", "安装"]), Some("安装"));
        assert!(tracker.is_active("安装"));
    }

    #[test]
    fn test_tracker_keeps_highlight_on_empty_update() {
        let mut tracker = ActiveHeadingTracker::new(&sample());
        tracker.observe(["setup-step-1"]);
        assert_eq!(tracker.observe(std::iter::empty()), Some("setup-step-1"));
        // Unknown ids do not count as visible headings.
        assert_eq!(tracker.observe(["elsewhere"]), Some("setup-step-1"));
    }

    #[test]
    fn test_tracker_reset() {
        let mut tracker = ActiveHeadingTracker::new(&sample());
        tracker.observe(["指南"]);
        tracker.reset(&extract_headings("## Q1"));
        assert_eq!(tracker.active(), None);
        assert_eq!(tracker.observe(["q1"]), Some("q1"));
    }
}
