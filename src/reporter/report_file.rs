//! The append-only secrets report.
//!
//! One block per document that produced at least one finding, separated by
//! an 80-character rule line. The block layout is stable and consumed by
//! golden-file tests; change it only together with them.

use crate::error::{AuditError, Result};
use crate::rules::{DocumentFindings, Finding, Severity};
use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::{Path, PathBuf};

/// Rendered values longer than this are cut and marked with `...`.
/// The underlying finding always retains the full value.
const VALUE_DISPLAY_LIMIT: usize = 50;

const RULE_HEAVY: &str =
    "================================================================================";
const RULE_LIGHT: &str =
    "--------------------------------------------------------------------------------";
const RULE_SHORT: &str = "----------------------------------------";

/// Renders one document's findings as a report block. Returns an empty
/// string for a document without findings.
pub fn format_document(doc: &DocumentFindings) -> String {
    if doc.findings.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    let _ = writeln!(out, "\n{}", RULE_HEAVY);
    let _ = writeln!(out, "FILE: {}", doc.name);
    let _ = writeln!(out, "URL: {}", doc.locator);
    let _ = writeln!(out, "SECRETS FOUND: {}", doc.findings.len());
    let _ = writeln!(out, "{}\n", RULE_HEAVY);

    for severity in Severity::ORDERED {
        let group: Vec<&Finding> = doc
            .findings
            .iter()
            .filter(|f| f.severity == severity)
            .collect();
        if group.is_empty() {
            continue;
        }

        let _ = writeln!(out, "\n[{}] SEVERITY", severity);
        let _ = writeln!(out, "{}", RULE_LIGHT);
        for finding in group {
            let _ = writeln!(out, "\nType: {}", finding.category);
            let _ = writeln!(out, "Line: {}", finding.line);
            let _ = writeln!(out, "Value: {}", truncate_value(&finding.value));
            let _ = writeln!(out, "Context: {}", finding.context);
            let _ = writeln!(out, "{}", RULE_SHORT);
        }
    }

    out.push('\n');
    out
}

fn truncate_value(value: &str) -> String {
    if value.chars().count() > VALUE_DISPLAY_LIMIT {
        let cut: String = value.chars().take(VALUE_DISPLAY_LIMIT).collect();
        format!("{}...", cut)
    } else {
        value.to_string()
    }
}

/// Appends document blocks to `secrets_report.txt` in the output directory.
/// Repeated calls within one batch accumulate; prior content is never
/// overwritten.
#[derive(Debug)]
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            path: output_dir.join("secrets_report.txt"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one document's block; a no-op for documents without findings.
    pub fn append(&self, doc: &DocumentFindings) -> Result<()> {
        let block = format_document(doc);
        if block.is_empty() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| AuditError::WriteError {
                path: self.path.display().to_string(),
                source,
            })?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| AuditError::WriteError {
                path: self.path.display().to_string(),
                source,
            })?;
        file.write_all(block.as_bytes())
            .map_err(|source| AuditError::WriteError {
                path: self.path.display().to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Category;

    fn make_doc(findings: Vec<Finding>) -> DocumentFindings {
        DocumentFindings {
            name: "1.js".to_string(),
            locator: "https://app.example/static/1.js".to_string(),
            findings,
        }
    }

    fn make_finding(category: Category, severity: Severity, line: usize, value: &str) -> Finding {
        Finding {
            category,
            severity,
            value: value.to_string(),
            line,
            context: format!("ctx {}", value),
        }
    }

    #[test]
    fn test_empty_document_renders_nothing() {
        assert_eq!(format_document(&make_doc(vec![])), "");
    }

    #[test]
    fn test_block_header() {
        let doc = make_doc(vec![make_finding(
            Category::ApiKey,
            Severity::Critical,
            3,
            "abcd1234efgh5678ijkl",
        )]);
        let block = format_document(&doc);
        assert!(block.starts_with(&format!("\n{}\n", "=".repeat(80))));
        assert!(block.contains("FILE: 1.js\n"));
        assert!(block.contains("URL: https://app.example/static/1.js\n"));
        assert!(block.contains("SECRETS FOUND: 1\n"));
    }

    #[test]
    fn test_severity_blocks_in_fixed_order_empty_levels_omitted() {
        let doc = make_doc(vec![
            make_finding(Category::Email, Severity::Low, 9, "a@b.example"),
            make_finding(Category::StripeKey, Severity::Critical, 2, "sk_live_x"),
            make_finding(Category::Password, Severity::High, 5, "hunter2"),
        ]);
        let block = format_document(&doc);

        let critical = block.find("[CRITICAL] SEVERITY").unwrap();
        let high = block.find("[HIGH] SEVERITY").unwrap();
        let low = block.find("[LOW] SEVERITY").unwrap();
        assert!(critical < high && high < low);
        assert!(!block.contains("[MEDIUM] SEVERITY"));
    }

    #[test]
    fn test_finding_fields_rendered() {
        let doc = make_doc(vec![make_finding(
            Category::Password,
            Severity::High,
            17,
            "hunter2",
        )]);
        let block = format_document(&doc);
        assert!(block.contains("Type: password\n"));
        assert!(block.contains("Line: 17\n"));
        assert!(block.contains("Value: hunter2\n"));
        assert!(block.contains("Context: ctx hunter2\n"));
        assert!(block.contains(&"-".repeat(40)));
    }

    #[test]
    fn test_value_truncated_at_50_chars() {
        let long = "a".repeat(80);
        let doc = make_doc(vec![make_finding(
            Category::ApiKey,
            Severity::Critical,
            1,
            &long,
        )]);
        let block = format_document(&doc);
        let expected = format!("Value: {}...\n", "a".repeat(50));
        assert!(block.contains(&expected));
        assert!(!block.contains(&"a".repeat(51)));
        // The finding itself keeps all 80 characters
        assert_eq!(doc.findings[0].value.chars().count(), 80);
    }

    #[test]
    fn test_value_of_exactly_50_chars_not_truncated() {
        let exact = "b".repeat(50);
        let doc = make_doc(vec![make_finding(
            Category::ApiKey,
            Severity::Critical,
            1,
            &exact,
        )]);
        let block = format_document(&doc);
        assert!(block.contains(&format!("Value: {}\n", exact)));
        assert!(!block.contains("..."));
    }

    #[test]
    fn test_writer_appends_across_documents() {
        let dir = tempfile::TempDir::new().unwrap();
        let writer = ReportWriter::new(dir.path());

        let first = make_doc(vec![make_finding(
            Category::ApiKey,
            Severity::Critical,
            1,
            "abcd1234efgh5678ijkl",
        )]);
        let mut second = make_doc(vec![make_finding(
            Category::Email,
            Severity::Low,
            4,
            "a@b.example",
        )]);
        second.name = "2.css".to_string();

        writer.append(&first).unwrap();
        writer.append(&second).unwrap();

        let content = std::fs::read_to_string(writer.path()).unwrap();
        let f1 = content.find("FILE: 1.js").unwrap();
        let f2 = content.find("FILE: 2.css").unwrap();
        assert!(f1 < f2);
    }

    #[test]
    fn test_writer_skips_empty_documents() {
        let dir = tempfile::TempDir::new().unwrap();
        let writer = ReportWriter::new(dir.path());
        writer.append(&make_doc(vec![])).unwrap();
        assert!(!writer.path().exists());
    }
}
