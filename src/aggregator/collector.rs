//! Batch collector for per-document finding sequences.

use crate::rules::{DocumentFindings, Finding, Severity};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Collects findings one document at a time and maintains running totals
/// for the batch. No finding is ever dropped or merged.
#[derive(Debug, Default)]
pub struct BatchCollector {
    documents: Vec<DocumentFindings>,
    by_severity: HashMap<Severity, usize>,
    total: usize,
}

/// Findings of one severity within one document, in original detection order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeverityGroup {
    pub severity: Severity,
    pub findings: Vec<Finding>,
}

/// Point-in-time view of the batch: documents in feed order, each grouped
/// by severity (report order), findings inside a group in detection order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSnapshot {
    pub total: usize,
    pub documents_scanned: usize,
    pub documents_with_findings: usize,
    pub by_severity: Vec<(Severity, usize)>,
    pub documents: Vec<(String, Vec<SeverityGroup>)>,
}

impl BatchCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one document's ordered findings into the batch.
    pub fn add(&mut self, doc: DocumentFindings) {
        for finding in &doc.findings {
            *self.by_severity.entry(finding.severity).or_default() += 1;
        }
        self.total += doc.findings.len();
        self.documents.push(doc);
    }

    pub fn add_document(&mut self, name: String, locator: String, findings: Vec<Finding>) {
        self.add(DocumentFindings {
            name,
            locator,
            findings,
        });
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn documents_scanned(&self) -> usize {
        self.documents.len()
    }

    pub fn documents_with_findings(&self) -> usize {
        self.documents
            .iter()
            .filter(|d| !d.findings.is_empty())
            .count()
    }

    pub fn count_for(&self, severity: Severity) -> usize {
        self.by_severity.get(&severity).copied().unwrap_or(0)
    }

    pub fn count_for_document(&self, name: &str) -> usize {
        self.documents
            .iter()
            .filter(|d| d.name == name)
            .map(|d| d.findings.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Documents in feed order, each with detection-ordered findings.
    pub fn documents(&self) -> &[DocumentFindings] {
        &self.documents
    }

    pub fn all_findings(&self) -> Vec<&Finding> {
        self.documents
            .iter()
            .flat_map(|d| d.findings.iter())
            .collect()
    }

    /// Final grouping query: document -> severity (report order) ->
    /// original detection order.
    pub fn snapshot(&self) -> BatchSnapshot {
        let documents = self
            .documents
            .iter()
            .map(|doc| {
                let groups = Severity::ORDERED
                    .iter()
                    .filter_map(|&severity| {
                        let findings: Vec<Finding> = doc
                            .findings
                            .iter()
                            .filter(|f| f.severity == severity)
                            .cloned()
                            .collect();
                        if findings.is_empty() {
                            None
                        } else {
                            Some(SeverityGroup { severity, findings })
                        }
                    })
                    .collect();
                (doc.name.clone(), groups)
            })
            .collect();

        BatchSnapshot {
            total: self.total,
            documents_scanned: self.documents_scanned(),
            documents_with_findings: self.documents_with_findings(),
            by_severity: Severity::ORDERED
                .iter()
                .map(|&s| (s, self.count_for(s)))
                .collect(),
            documents,
        }
    }
}
