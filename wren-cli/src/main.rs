//! Wren CLI
//!
//! Parses a restricted-HTML document and prints the resulting tree.
//!
//! Usage:
//!   wren <file>                 Print the node tree
//!   wren <file> --json          Print the tree as JSON
//!   wren <file> --stats         Print node counts and depth
//!   wren --html '<p>Hi</p>'     Parse a string instead of a file
//!   wren -                      Read the document from stdin

use std::fs;
use std::io::{self, Read};
use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;
use owo_colors::OwoColorize;
use wren_common::logger;
use wren_common::warning::warn_once;
use wren_dom::{Node, print_tree};
use wren_html::{
    DEFAULT_MAX_DEPTH, HTMLParser, MAX_SUPPORTED_DEPTH, ParseError, ParseIssue, ParserOptions,
};

/// Wren: strict parser for a restricted HTML dialect
#[derive(Parser, Debug)]
#[command(name = "wren")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the tree of a file
    wren page.html

    # Parse inline markup and print JSON
    wren --json --html '<p id="hw">Hello, world</p>'

    # Accept single-quoted attribute values
    wren --single-quotes page.html
"#)]
struct Cli {
    /// Path to the document, or "-" for stdin
    #[arg(value_name = "FILE", conflicts_with = "html")]
    path: Option<String>,

    /// Parse this markup string instead of a file
    #[arg(long, value_name = "HTML")]
    html: Option<String>,

    /// Print the tree as pretty JSON
    #[arg(short, long)]
    json: bool,

    /// Print node counts and nesting depth
    #[arg(short, long)]
    stats: bool,

    /// Maximum element nesting depth
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_MAX_DEPTH,
        value_parser = parse_max_depth
    )]
    max_depth: usize,

    /// Accept '-quoted attribute values as well as "-quoted ones
    #[arg(long)]
    single_quotes: bool,

    /// Reject empty tag and attribute names
    #[arg(long)]
    strict_names: bool,

    /// More log output (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Less log output (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    quiet: u8,
}

impl Cli {
    fn parser_options(&self) -> ParserOptions {
        let mut options = ParserOptions::default().with_max_depth(self.max_depth);
        if self.single_quotes {
            options = options.with_single_quotes();
        }
        if self.strict_names {
            options = options.with_strict_names();
        }
        options
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(logger::level_from_verbosity(cli.verbose, cli.quiet))
        .context("failed to install logger")?;

    let input = load_input(&cli)?;
    info!(target: "wren::cli", "parsing {} bytes", input.len());

    let (result, issues) = HTMLParser::new(&input)
        .with_options(cli.parser_options())
        .run_with_issues();

    for issue in &issues {
        warn_once("HTML", &issue_line(issue));
    }

    let tree = match result {
        Ok(tree) => tree,
        Err(err) => {
            report_error(&input, &err);
            process::exit(1);
        }
    };

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&tree).context("failed to serialize tree")?
        );
    } else {
        print_tree(&tree);
    }

    if cli.stats {
        println!("\n=== Stats ===");
        print!("{}", TreeStats::collect(&tree));
    }

    Ok(())
}

/// Accept a nesting depth between 1 and [`MAX_SUPPORTED_DEPTH`].
fn parse_max_depth(arg: &str) -> Result<usize, String> {
    let depth: usize = arg.parse().map_err(|err| format!("not a depth: {err}"))?;
    if (1..=MAX_SUPPORTED_DEPTH).contains(&depth) {
        Ok(depth)
    } else {
        Err(format!("must be between 1 and {MAX_SUPPORTED_DEPTH}"))
    }
}

/// One warning line per issue: its kind, then the details.
fn issue_line(issue: &ParseIssue) -> String {
    format!("{}: {}", issue.kind, issue.message)
}

/// Load the document bytes from the CLI arguments
fn load_input(cli: &Cli) -> Result<Vec<u8>> {
    if let Some(ref markup) = cli.html {
        Ok(markup.as_bytes().to_vec())
    } else if let Some(ref path) = cli.path {
        if path == "-" {
            let mut buffer = Vec::new();
            let _ = io::stdin()
                .read_to_end(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        } else {
            fs::read(path).with_context(|| format!("failed to read '{path}'"))
        }
    } else {
        bail!("no input: pass a file path, '-' for stdin, or --html")
    }
}

/// Print a parse error with its code and source location
fn report_error(input: &[u8], err: &ParseError) {
    let (line, column) = line_column(input, err.offset);
    eprintln!(
        "{}: {err} (line {line}, column {column})",
        format!("error[{}]", err.code()).red().bold()
    );
}

/// 1-based line and byte column of `offset` in `input`.
fn line_column(input: &[u8], offset: usize) -> (usize, usize) {
    let before = &input[..offset.min(input.len())];
    let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = before
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);
    (line, before.len() - line_start + 1)
}

/// Node counts for `--stats`.
#[derive(Debug, Default, PartialEq, Eq)]
struct TreeStats {
    elements: usize,
    texts: usize,
    attributes: usize,
    depth: usize,
}

impl TreeStats {
    fn collect(tree: &Node) -> Self {
        let mut stats = Self {
            depth: tree.depth(),
            ..Self::default()
        };
        for node in tree.descendants() {
            match node {
                Node::Element(data) => {
                    stats.elements += 1;
                    stats.attributes += data.attrs.len();
                }
                Node::Text { .. } => stats.texts += 1,
            }
        }
        stats
    }
}

impl std::fmt::Display for TreeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} elements", self.elements)?;
        writeln!(f, "{} text nodes", self.texts)?;
        writeln!(f, "{} attributes", self.attributes)?;
        writeln!(f, "depth {}", self.depth)
    }
}
