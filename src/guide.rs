//! Guide viewer state.
//!
//! A post is shown as a main tab plus an optional Q&A tab, each with its own
//! table of contents. The TOC sits in a sidebar on wide containers and in a
//! floating drawer on narrow ones.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::config::{GuideConfig, TocConfig};
use crate::parser::{self, DocumentSplit, Heading};
use crate::render::{self, RenderOptions};
use crate::toc::{self, ActiveHeadingTracker, Toc};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Tab {
    Main,
    Qa,
}

/// Where the table of contents is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TocPlacement {
    /// Current tab has no headings
    Hidden,
    /// Sticky sidebar next to the content
    Sidebar,
    /// Floating button; `open` when the drawer is expanded
    Floating { open: bool },
}

#[derive(Debug, Clone)]
pub struct GuideView {
    split: DocumentSplit,
    main_headings: Vec<Heading>,
    qa_headings: Vec<Heading>,
    main_label: String,
    qa_label: String,
    narrow_breakpoint: u32,
    tab: Tab,
    narrow: bool,
    toc_open: bool,
    tracker: ActiveHeadingTracker,
}

impl GuideView {
    pub fn new(markdown: &str, guide: &GuideConfig, toc_config: &TocConfig) -> Self {
        let split = parser::split_document_at(markdown, &guide.qa_title);

        let extract = |region: &str| {
            let headings = parser::extract_headings(region);
            if toc_config.unique_ids {
                toc::unique_ids(&headings)
            } else {
                headings
            }
        };
        let main_headings = extract(&split.main);
        let qa_headings = extract(&split.qa);

        Self {
            tracker: ActiveHeadingTracker::new(&main_headings),
            split,
            main_headings,
            qa_headings,
            main_label: guide.main_tab_label.clone(),
            qa_label: guide.qa_tab_label.clone(),
            narrow_breakpoint: toc_config.narrow_breakpoint,
            tab: Tab::Main,
            narrow: false,
            toc_open: false,
        }
    }

    /// Tabs to offer: Q&A only when the document has a Q&A region.
    pub fn tabs(&self) -> Vec<Tab> {
        if self.split.has_qa() {
            vec![Tab::Main, Tab::Qa]
        } else {
            vec![Tab::Main]
        }
    }

    pub fn current_tab(&self) -> Tab {
        self.tab
    }

    pub fn tab_label(&self, tab: Tab) -> &str {
        match tab {
            Tab::Main => &self.main_label,
            Tab::Qa => &self.qa_label,
        }
    }

    /// Switch tabs. Always closes the TOC drawer. Returns `false` if the tab
    /// is not available.
    pub fn set_tab(&mut self, tab: Tab) -> bool {
        if !self.tabs().contains(&tab) {
            return false;
        }
        self.tab = tab;
        self.toc_open = false;
        let headings = self.headings(tab).to_vec();
        self.tracker.reset(&headings);
        true
    }

    /// Update the container width. Returns whether the layout is now narrow.
    pub fn resize(&mut self, width: u32) -> bool {
        self.narrow = width < self.narrow_breakpoint;
        self.narrow
    }

    pub fn is_narrow(&self) -> bool {
        self.narrow
    }

    /// Open or close the floating drawer. No-op on wide layouts.
    pub fn toggle_toc(&mut self) {
        if self.narrow {
            self.toc_open = !self.toc_open;
        }
    }

    pub fn close_toc(&mut self) {
        self.toc_open = false;
    }

    pub fn toc_placement(&self) -> TocPlacement {
        if self.current_headings().is_empty() {
            TocPlacement::Hidden
        } else if self.narrow {
            TocPlacement::Floating {
                open: self.toc_open,
            }
        } else {
            TocPlacement::Sidebar
        }
    }

    pub fn headings(&self, tab: Tab) -> &[Heading] {
        match tab {
            Tab::Main => &self.main_headings,
            Tab::Qa => &self.qa_headings,
        }
    }

    pub fn current_headings(&self) -> &[Heading] {
        self.headings(self.tab)
    }

    pub fn current_markdown(&self) -> &str {
        self.split.region(self.tab)
    }

    pub fn toc(&self) -> Toc {
        Toc::new(self.current_headings())
    }

    /// Feed the ids of headings currently in view; returns the active one.
    pub fn observe_visible<'a, I>(&mut self, visible: I) -> Option<&str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.tracker.observe(visible)
    }

    pub fn active_heading(&self) -> Option<&str> {
        self.tracker.active()
    }

    /// Render the current tab with ids matching [`Self::current_headings`].
    pub fn render_current(&self, options: &RenderOptions) -> String {
        render::render_html(self.current_markdown(), self.current_headings(), options)
    }
}
