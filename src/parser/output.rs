//! JSON output types for the CLI

use serde::{Deserialize, Serialize};

use super::{Document, Heading};
use crate::guide::Tab;
use crate::toc;

/// Root JSON structure: metadata plus one entry per available tab
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideOutput {
    pub metadata: GuideMetadata,
    pub tabs: Vec<TabOutput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideMetadata {
    pub source: Option<String>,
    #[serde(rename = "headingCount")]
    pub heading_count: usize,
    #[serde(rename = "hasQa")]
    pub has_qa: bool,
    #[serde(rename = "uniqueIds")]
    pub unique_ids: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabOutput {
    /// `main` or `qa`
    pub tab: Tab,
    pub label: String,
    pub headings: Vec<Heading>,
}

/// Build the JSON output for a document.
///
/// `labels` maps a tab to its display label. The Q&A tab is only listed when
/// the document has a Q&A region.
pub fn build_json_output(
    doc: &Document,
    source: Option<&str>,
    unique_ids: bool,
    labels: impl Fn(Tab) -> String,
) -> GuideOutput {
    let mut tabs = vec![Tab::Main];
    if doc.split.has_qa() {
        tabs.push(Tab::Qa);
    }

    let tabs: Vec<TabOutput> = tabs
        .into_iter()
        .map(|tab| {
            let headings = doc.headings_for(tab);
            TabOutput {
                tab,
                label: labels(tab),
                headings: if unique_ids {
                    toc::unique_ids(&headings)
                } else {
                    headings
                },
            }
        })
        .collect();

    GuideOutput {
        metadata: GuideMetadata {
            source: source.map(str::to_string),
            heading_count: tabs.iter().map(|t| t.headings.len()).sum(),
            has_qa: doc.split.has_qa(),
            unique_ids,
        },
        tabs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{QA_TITLE, parse_markdown};

    #[test]
    fn test_build_json_output() {
        let doc = parse_markdown("# A\n## B\n## 常见问题\n### Q", QA_TITLE);
        let output = build_json_output(&doc, Some("post.md"), false, |tab| tab.to_string());

        assert_eq!(output.metadata.heading_count, 4);
        assert!(output.metadata.has_qa);
        assert_eq!(output.tabs.len(), 2);
        assert_eq!(output.tabs[1].label, "qa");

        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["metadata"]["headingCount"], 4);
        assert_eq!(json["tabs"][0]["tab"], "main");
        assert_eq!(json["tabs"][1]["headings"][1]["id"], "q");
    }

    #[test]
    fn test_build_json_output_without_qa() {
        let doc = parse_markdown("# A\n## A", QA_TITLE);
        let output = build_json_output(&doc, None, true, |_| String::new());
        assert_eq!(output.tabs.len(), 1);
        let ids: Vec<_> = output.tabs[0].headings.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "a-1"]);
    }
}
