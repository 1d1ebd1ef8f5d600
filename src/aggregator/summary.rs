//! Summary builder for batch results.

use crate::aggregator::BatchCollector;
use crate::rules::{ScanResult, Summary};

/// Builds the [`ScanResult`] handed to reporters from a finished batch.
#[derive(Debug, Default)]
pub struct SummaryBuilder {
    documents_requested: usize,
    documents_failed: usize,
}

impl SummaryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents_requested(mut self, count: usize) -> Self {
        self.documents_requested = count;
        self
    }

    pub fn with_documents_failed(mut self, count: usize) -> Self {
        self.documents_failed = count;
        self
    }

    pub fn documents_failed(&self) -> usize {
        self.documents_failed
    }

    pub fn build(self, collector: &BatchCollector) -> ScanResult {
        let findings: Vec<_> = collector.all_findings().into_iter().cloned().collect();
        ScanResult {
            version: env!("CARGO_PKG_VERSION").to_string(),
            scanned_at: chrono::Utc::now().to_rfc3339(),
            summary: Summary::from_findings(&findings),
            documents: collector.documents().to_vec(),
        }
    }
}
