use crate::reporter::Reporter;
use crate::rules::{ScanResult, Severity};
use colored::Colorize;

pub struct TerminalReporter {
    verbose: bool,
}

impl TerminalReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn severity_color(&self, severity: &Severity) -> colored::ColoredString {
        let label = format!("[{}]", severity);
        match severity {
            Severity::Critical => label.red().bold(),
            Severity::High => label.yellow().bold(),
            Severity::Medium => label.cyan(),
            Severity::Low => label.white(),
        }
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, result: &ScanResult) -> String {
        let mut output = String::new();

        for doc in &result.documents {
            if doc.findings.is_empty() {
                if self.verbose {
                    output.push_str(&format!("{} {}: clean\n", "✓".green(), doc.name));
                }
                continue;
            }

            output.push_str(&format!(
                "{} {} ({}): {} finding(s)\n",
                "✗".red().bold(),
                doc.name.bold(),
                doc.locator,
                doc.findings.len()
            ));
            for finding in &doc.findings {
                output.push_str(&format!(
                    "  {} {} line {}: {}\n",
                    self.severity_color(&finding.severity),
                    finding.category,
                    finding.line,
                    finding.context
                ));
            }
        }

        let s = &result.summary;
        output.push_str(&format!(
            "\n{} {} critical, {} high, {} medium, {} low across {} document(s)\n",
            "Summary:".bold(),
            s.critical,
            s.high,
            s.medium,
            s.low,
            result.documents.len()
        ));
        if s.passed {
            output.push_str(&format!("{}\n", "PASSED (no critical/high findings)".green()));
        } else {
            output.push_str(&format!("{}\n", "FAILED (critical or high findings)".red().bold()));
        }
        output
    }
}
