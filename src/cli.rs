use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "leakscan",
    version,
    about = "Downloads exposed web assets and scans them for leaked secrets",
    long_about = "leakscan harvests artifact URLs from pasted text, downloads each file, \
reformats it for readability, and scans the text for patterns resembling leaked \
credentials or sensitive configuration values."
)]
pub struct Cli {
    /// Files containing pasted text with URLs ('-' for stdin); with
    /// --local, artifact files to scan directly
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Treat inputs as already-downloaded artifact files (no network)
    #[arg(short, long)]
    pub local: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Directory for the secrets report and saved artifacts
    #[arg(short, long, default_value = "extracted_files")]
    pub output_dir: PathBuf,

    /// Concurrent downloads
    #[arg(short, long, default_value_t = crate::fetch::DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Request timeout in seconds
    #[arg(long, default_value_t = crate::fetch::DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Save fetched artifacts under the output directory, organized by
    /// extension
    #[arg(long)]
    pub save_files: bool,

    /// Skip line-oriented reformatting before scanning
    #[arg(long)]
    pub raw: bool,

    /// Download and save only; skip secret scanning
    #[arg(long)]
    pub no_secret_scan: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
