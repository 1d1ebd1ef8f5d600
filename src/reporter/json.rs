use crate::reporter::Reporter;
use crate::rules::ScanResult;

pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for JsonReporter {
    fn report(&self, result: &ScanResult) -> String {
        serde_json::to_string_pretty(result)
            .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize result: {}"}}"#, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Category, DocumentFindings, Finding, Severity, Summary};

    fn make_result(findings: Vec<Finding>) -> ScanResult {
        let summary = Summary::from_findings(&findings);
        ScanResult {
            version: "0.3.0".to_string(),
            scanned_at: "2026-08-31T12:00:00Z".to_string(),
            summary,
            documents: vec![DocumentFindings {
                name: "1.js".to_string(),
                locator: "https://app.example/1.js".to_string(),
                findings,
            }],
        }
    }

    #[test]
    fn test_json_output_structure() {
        let output = JsonReporter::new().report(&make_result(vec![]));
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["version"], "0.3.0");
        assert!(parsed["summary"]["passed"].as_bool().unwrap());
        assert_eq!(parsed["documents"][0]["name"], "1.js");
    }

    #[test]
    fn test_json_output_with_findings() {
        let finding = Finding {
            category: Category::GithubToken,
            severity: Severity::Critical,
            value: format!("ghp_{}", "A".repeat(36)),
            line: 12,
            context: "token context".to_string(),
        };
        let output = JsonReporter::new().report(&make_result(vec![finding]));
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            parsed["documents"][0]["findings"][0]["category"],
            "github_token"
        );
        assert_eq!(
            parsed["documents"][0]["findings"][0]["severity"],
            "critical"
        );
        assert_eq!(parsed["summary"]["critical"], 1);
        assert!(!parsed["summary"]["passed"].as_bool().unwrap());
    }
}
