//! Command-line interface for repotree.
//!
//! This binary fetches a GitHub repository's file listing and prints (or
//! writes) its folder structure in markdown, plain text, or JSON.

use clap::{Parser, ValueEnum};
use repotree::{output, repotree, RepoTreeBuilder, RepoTreeOptions, TreeSnapshot};
use std::path::PathBuf;
use std::process::exit;

/// repotree — GitHub folder structure generator
#[derive(Parser)]
#[command(name = "repotree", version, about, long_about = None)]
struct Cli {
    /// Repository URL, e.g. https://github.com/rust-lang/cargo
    url: String,

    /// Branch to list (default branch of the repository if not set)
    #[arg(short, long)]
    branch: Option<String>,

    /// GitHub API token for private repositories and higher rate limits
    #[arg(long)]
    token: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,

    /// Pretty output (indented JSON)
    #[arg(short, long)]
    pretty: bool,

    /// Write the result to a file instead of stdout
    /// (defaults to <repo>-structure.md when given without a value)
    #[arg(short, long, num_args = 0..=1, default_missing_value = "")]
    output: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Markdown,
    Text,
    Json,
}

impl From<OutputFormat> for output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Markdown => output::OutputFormat::Markdown,
            OutputFormat::Text => output::OutputFormat::Text,
            OutputFormat::Json => output::OutputFormat::Json,
        }
    }
}

impl Cli {
    fn into_options(self) -> (RepoTreeOptions, OutputFormat, bool, Option<PathBuf>) {
        let mut builder = RepoTreeBuilder::new(self.url).token(self.token);

        builder = if let Some(branch) = self.branch {
            builder.branch(branch)
        } else {
            builder.default_branch()
        };

        (builder.build(), self.format, self.pretty, self.output)
    }
}

fn main() {
    let cli = Cli::parse();
    let (options, format, pretty, output_path) = cli.into_options();

    match repotree(options) {
        Ok(snapshot) => emit_snapshot(&snapshot, format, pretty, output_path),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn emit_snapshot(
    snapshot: &TreeSnapshot,
    format: OutputFormat,
    pretty: bool,
    output_path: Option<PathBuf>,
) {
    let format = format.into();
    match output_path {
        Some(path) => {
            let path = if path.as_os_str().is_empty() {
                PathBuf::from(output::default_file_name(&snapshot.repo))
            } else {
                path
            };
            if let Err(e) = output::write_snapshot_to_file(snapshot, format, &path, pretty) {
                eprintln!("Error: {}", e);
                exit(1);
            }
            println!("Wrote {}", path.display());
        }
        None => {
            print!("{}", output::format_snapshot(snapshot, format, pretty));
        }
    }
}
