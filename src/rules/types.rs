use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Report ordering: severities are always rendered in this sequence,
    /// never in map iteration order.
    pub const ORDERED: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// A named class of sensitive data. Variants are declared in registry order;
/// that order is the first key of the scan output ordering contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    ApiKey,
    AwsKey,
    PrivateKey,
    OauthToken,
    JwtToken,
    DatabaseUrl,
    Password,
    SecretKey,
    StripeKey,
    SlackToken,
    GithubToken,
    Email,
    IpAddress,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ApiKey => "api_key",
            Category::AwsKey => "aws_key",
            Category::PrivateKey => "private_key",
            Category::OauthToken => "oauth_token",
            Category::JwtToken => "jwt_token",
            Category::DatabaseUrl => "database_url",
            Category::Password => "password",
            Category::SecretKey => "secret_key",
            Category::StripeKey => "stripe_key",
            Category::SlackToken => "slack_token",
            Category::GithubToken => "github_token",
            Category::Email => "email",
            Category::IpAddress => "ip_address",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An uncompiled detector rule: one category, one severity, one or more
/// pattern sources evaluated independently.
#[derive(Debug, Clone)]
pub struct Rule {
    pub category: Category,
    pub severity: Severity,
    pub patterns: Vec<&'static str>,
}

/// One concrete pattern match. Immutable once created by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub category: Category,
    pub severity: Severity,
    /// First capture group when the matcher defines one, otherwise the
    /// entire matched span. Never truncated here; display truncation is the
    /// report formatter's job.
    pub value: String,
    /// 1-based line number within the scanned document.
    pub line: usize,
    /// Matched span widened by a fixed margin, clamped to the line.
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub passed: bool,
}

impl Summary {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let (critical, high, medium, low) =
            findings
                .iter()
                .fold((0, 0, 0, 0), |(c, h, m, l), f| match f.severity {
                    Severity::Critical => (c + 1, h, m, l),
                    Severity::High => (c, h + 1, m, l),
                    Severity::Medium => (c, h, m + 1, l),
                    Severity::Low => (c, h, m, l + 1),
                });

        Self {
            critical,
            high,
            medium,
            low,
            passed: critical == 0 && high == 0,
        }
    }

    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

/// Findings for one scanned document, in detection order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentFindings {
    /// Short label, e.g. the saved filename.
    pub name: String,
    /// Source locator: the URL the document came from, or its path.
    pub locator: String,
    pub findings: Vec<Finding>,
}

/// Batch-level result consumed by the reporters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    pub version: String,
    pub scanned_at: String,
    pub summary: Summary,
    pub documents: Vec<DocumentFindings>,
}
