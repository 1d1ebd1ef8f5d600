//! leakscan harvests artifact URLs from pasted text, downloads each file,
//! reformats it line-by-line for readability, and scans the result for
//! patterns resembling leaked credentials or sensitive configuration.
//!
//! The pipeline is registry -> scanner -> collector -> reporter. Each stage
//! is usable on its own:
//!
//! ```
//! use leakscan::{Registry, Scanner};
//! use std::sync::Arc;
//!
//! let registry = Arc::new(Registry::new().unwrap());
//! let scanner = Scanner::new(registry);
//! let findings = scanner.scan("api_key = \"abcdefghij1234567890\"");
//! assert_eq!(findings.len(), 1);
//! ```

pub mod aggregator;
pub mod beautify;
pub mod cli;
pub mod engine;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod reporter;
pub mod rules;
pub mod run;

pub use aggregator::{BatchCollector, SummaryBuilder};
pub use cli::{Cli, OutputFormat};
pub use engine::Scanner;
pub use error::{AuditError, Result};
pub use reporter::{json::JsonReporter, terminal::TerminalReporter, Reporter};
pub use rules::{Category, DocumentFindings, Finding, Registry, ScanResult, Severity, Summary};
pub use run::{run, RunOutcome};
