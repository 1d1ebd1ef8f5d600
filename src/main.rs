use clap::Parser;
use leakscan::cli::{Cli, OutputFormat};
use leakscan::reporter::{json::JsonReporter, terminal::TerminalReporter, Reporter};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = match leakscan::run::run(&cli) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let rendered = match cli.format {
        OutputFormat::Terminal => TerminalReporter::new(cli.verbose).report(&outcome.result),
        OutputFormat::Json => JsonReporter::new().report(&outcome.result),
    };
    print!("{rendered}");

    if let Some(path) = &outcome.report_path {
        eprintln!("Secrets report written to {}", path.display());
    }

    if outcome.failed_downloads > 0 {
        eprintln!("{} download(s) failed", outcome.failed_downloads);
    }

    if outcome.result.summary.passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
