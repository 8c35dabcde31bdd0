//! Command-line interface for srccat.
//!
//! Scans the given root directory and writes the bundled Markdown document
//! to the output file.

use clap::Parser;
use srccat::{SrccatBuilder, SrccatOptions, collect, output};
use std::path::PathBuf;
use std::process::exit;
use tracing_subscriber::EnvFilter;

/// Bundle a source tree into one annotated Markdown document
#[derive(Parser)]
#[command(name = "srccat", version, about, long_about = None)]
struct Cli {
    /// Root directory to scan
    root: PathBuf,

    /// File extension to collect, without the leading dot
    #[arg(long, default_value = "ts")]
    ext: String,

    /// Output file path
    #[arg(short, long, default_value = output::DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Directory name to exclude; replaces the default exclusion set (can be repeated)
    #[arg(short = 'x', long = "exclude")]
    exclude: Vec<String>,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,
}

impl Cli {
    fn into_options(self) -> (SrccatOptions, PathBuf) {
        let mut builder = SrccatBuilder::new(self.root)
            .extension(self.ext)
            .follow_links(self.follow_links);
        if !self.exclude.is_empty() {
            builder = builder.excluded_dirs(self.exclude);
        }
        (builder.build(), self.output)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (options, output_path) = cli.into_options();

    let result = match collect(options) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    if let Err(e) = output::write_markdown(&result, &output_path) {
        eprintln!("Error: {}", e);
        exit(1);
    }

    println!(
        "Wrote {} files to '{}'",
        result.files.len(),
        output_path.display()
    );
}
