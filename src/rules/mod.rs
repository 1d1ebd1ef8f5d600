pub mod builtin;
pub mod types;

pub use types::{Category, DocumentFindings, Finding, Rule, ScanResult, Severity, Summary};

use crate::error::{AuditError, Result};
use regex::Regex;

/// A rule with its matchers compiled.
#[derive(Debug)]
pub struct CompiledRule {
    pub category: Category,
    pub severity: Severity,
    pub matchers: Vec<Regex>,
}

/// The immutable detector registry. Compiled once at startup; an invalid
/// pattern aborts construction rather than surfacing per scan.
#[derive(Debug)]
pub struct Registry {
    rules: Vec<CompiledRule>,
}

impl Registry {
    pub fn new() -> Result<Self> {
        Self::from_rules(builtin::rules())
    }

    pub fn from_rules(rules: Vec<Rule>) -> Result<Self> {
        let mut compiled = Vec::with_capacity(rules.len());
        for rule in rules {
            let mut matchers = Vec::with_capacity(rule.patterns.len());
            for pattern in &rule.patterns {
                let matcher = Regex::new(pattern).map_err(|source| AuditError::InvalidPattern {
                    category: rule.category.as_str(),
                    source,
                })?;
                matchers.push(matcher);
            }
            compiled.push(CompiledRule {
                category: rule.category,
                severity: rule.severity,
                matchers,
            });
        }
        Ok(Self { rules: compiled })
    }

    /// Rules in registry order (category definition order).
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    pub fn get(&self, category: Category) -> Option<&CompiledRule> {
        self.rules.iter().find(|r| r.category == category)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
