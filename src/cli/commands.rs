use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blogtoc")]
#[command(version)]
#[command(about = "Extract headings, slugs and the Q&A split from blog posts")]
#[command(
    long_about = "blogtoc - Table of contents tooling for Markdown blog posts.\n\n\
    Lists level 1-3 headings with their anchor ids, splits a post into its main\n\
    body and trailing Q&A region, and renders HTML whose heading ids match the TOC.\n\n\
    Examples:\n  \
    blogtoc post.md                 # TOC of the whole post\n  \
    blogtoc --tab qa post.md        # TOC of the Q&A region\n  \
    blogtoc -o json post.md         # Per-tab headings as JSON\n  \
    blogtoc --split post.md         # Print main and Q&A regions\n  \
    blogtoc --html --tab main post.md\n  \
    cat post.md | blogtoc at-line 42"
)]
pub struct Cli {
    /// Markdown file to read, or '-' for stdin
    ///
    /// If no file is specified and stdin is piped, input is read from stdin.
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,

    /// List headings as a table of contents (default action)
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Region to operate on
    ///
    ///   all  - the whole document (default)
    ///   main - everything before the Q&A marker
    ///   qa   - the Q&A region
    #[arg(long = "tab", default_value = "all")]
    pub tab: TabArg,

    /// Output format for --list
    ///
    ///   plain - Indented outline with anchors (default)
    ///   json  - Per-tab headings for scripting
    #[arg(short = 'o', long = "output", default_value = "plain")]
    pub output: OutputFormat,

    /// Print the main and Q&A regions
    #[arg(long = "split", conflicts_with = "html")]
    pub split: bool,

    /// Render the selected region to HTML with heading ids
    #[arg(long = "html")]
    pub html: bool,

    /// Count headings by level
    #[arg(long = "count")]
    pub count: bool,

    /// Append -1, -2, ... to duplicate heading ids (overrides config)
    #[arg(long = "unique-ids")]
    pub unique_ids: bool,

    /// Title of the level-2 heading that starts the Q&A region
    ///
    /// Defaults to the configured title ("常见问题").
    #[arg(long = "qa-title", value_name = "TITLE")]
    pub qa_title: Option<String>,

    /// Column width for heading titles in plain output
    #[arg(short = 'w', long = "width", value_name = "COLUMNS")]
    pub width: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TabArg {
    All,
    Main,
    Qa,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Show the heading at or before a line number
    ///
    /// Line numbers refer to the selected region (see --tab).
    AtLine {
        /// Line number (1-indexed)
        line: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    Plain,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["blogtoc", "--tab", "qa", "-o", "json", "--unique-ids", "post.md"]);
        assert_eq!(cli.tab, TabArg::Qa);
        assert_eq!(cli.output, OutputFormat::Json);
        assert!(cli.unique_ids);
        assert_eq!(cli.file, Some(PathBuf::from("post.md")));
    }

    #[test]
    fn test_parse_subcommand() {
        let cli = Cli::parse_from(["blogtoc", "post.md", "at-line", "12"]);
        assert!(matches!(cli.command, Some(Command::AtLine { line: 12 })));
    }

    #[test]
    fn test_split_conflicts_with_html() {
        assert!(Cli::try_parse_from(["blogtoc", "--split", "--html", "post.md"]).is_err());
    }
}
