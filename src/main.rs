//! # blogtoc
//!
//! Table of contents tooling for Markdown blog posts.
//!
//! ## Usage
//!
//! List the headings of a post with their anchors:
//! ```sh
//! blogtoc post.md
//! ```
//!
//! Render the Q&A tab with heading ids:
//! ```sh
//! blogtoc --html --tab qa post.md
//! ```

mod cli;

use blogtoc::guide::Tab;
use blogtoc::render::{self, RenderOptions};
use blogtoc::toc::{self, Toc};
use blogtoc::{Config, Document, Heading, input, parser};
use clap::Parser as ClapParser;
use cli::{Cli, Command, OutputFormat, TabArg};
use color_eyre::Result;
use std::collections::BTreeMap;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;

    // Logs go to stderr so stdout stays clean for piping
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    // Priority: CLI args > config file > defaults
    let mut config = Config::load();
    if let Some(ref title) = args.qa_title {
        config.guide.qa_title = title.clone();
    }
    if args.unique_ids {
        config.toc.unique_ids = true;
    }
    if let Some(width) = args.width {
        config.toc.outline_width = width;
    }

    let source = input::determine_input_source(args.file.as_deref())?;
    let content = input::read_input(&source)?;
    let doc = parser::parse_markdown(&content, &config.guide.qa_title);
    tracing::info!(source = %source.name(), headings = doc.headings.len(), "loaded document");

    if args.split {
        print_split(&doc, &config);
        return Ok(());
    }

    let region = selected_region(&doc, args.tab);
    let headings = selected_headings(&doc, args.tab, config.toc.unique_ids);

    if let Some(Command::AtLine { line }) = args.command {
        match toc::heading_at_line(&headings, line) {
            Some(heading) => println!("{} {}", "#".repeat(heading.level), heading.text),
            None => eprintln!("No heading at or before line {}", line),
        }
        return Ok(());
    }

    if args.html {
        let options = RenderOptions::from(&config.render);
        print!("{}", render::render_html(region, &headings, &options));
        return Ok(());
    }

    if args.count {
        print_heading_counts(&headings);
        return Ok(());
    }

    match args.output {
        OutputFormat::Plain => {
            print!(
                "{}",
                Toc::new(&headings).render_plain(config.toc.outline_width, None)
            );
        }
        OutputFormat::Json => {
            let json = if args.tab == TabArg::All {
                let output = parser::build_json_output(
                    &doc,
                    Some(&source.name()),
                    config.toc.unique_ids,
                    |tab| config.guide.tab_label(tab).to_string(),
                );
                serde_json::to_string_pretty(&output)?
            } else {
                serde_json::to_string_pretty(&headings)?
            };
            println!("{}", json);
        }
    }

    Ok(())
}

fn selected_region(doc: &Document, tab: TabArg) -> &str {
    match tab {
        TabArg::All => &doc.content,
        TabArg::Main => doc.split.region(Tab::Main),
        TabArg::Qa => doc.split.region(Tab::Qa),
    }
}

fn selected_headings(doc: &Document, tab: TabArg, unique_ids: bool) -> Vec<Heading> {
    let headings = match tab {
        TabArg::All => doc.headings.clone(),
        TabArg::Main => doc.headings_for(Tab::Main),
        TabArg::Qa => doc.headings_for(Tab::Qa),
    };
    if unique_ids {
        toc::unique_ids(&headings)
    } else {
        headings
    }
}

fn print_split(doc: &Document, config: &Config) {
    println!("==> {} <==", config.guide.tab_label(Tab::Main));
    println!("{}", doc.split.main);
    if doc.split.has_qa() {
        println!("\n==> {} <==", config.guide.tab_label(Tab::Qa));
        println!("{}", doc.split.qa);
    }
}

fn print_heading_counts(headings: &[Heading]) {
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();

    for heading in headings {
        *counts.entry(heading.level).or_insert(0) += 1;
    }

    println!("Heading counts:");
    for (level, count) in &counts {
        println!("  {}: {}", "#".repeat(*level), count);
    }
    println!("\nTotal: {}", headings.len());
}
