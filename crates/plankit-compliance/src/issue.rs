//! Issue types produced by the rule evaluator.

use serde::Serialize;
use std::fmt;

/// Finding severity. Severities partition 1:1 into three buckets: hard
/// violations, advisories to double-check, and satisfied checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Success,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Success => write!(f, "success"),
        }
    }
}

/// A single advisory finding. Derived from the document on every
/// change, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceIssue {
    /// Stable rule identifier.
    pub id: &'static str,
    pub title: &'static str,
    pub description: String,
    pub severity: Severity,
    /// Citation of the regulation the rule is derived from.
    pub code: Option<&'static str>,
}

/// A severity-partitioned view over an evaluation pass.
#[derive(Debug, Clone, Serialize)]
pub struct IssueReport {
    pub issues: Vec<ComplianceIssue>,
}

impl IssueReport {
    pub fn new(issues: Vec<ComplianceIssue>) -> Self {
        Self { issues }
    }

    pub fn errors(&self) -> impl Iterator<Item = &ComplianceIssue> {
        self.by_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ComplianceIssue> {
        self.by_severity(Severity::Warning)
    }

    pub fn successes(&self) -> impl Iterator<Item = &ComplianceIssue> {
        self.by_severity(Severity::Success)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn success_count(&self) -> usize {
        self.successes().count()
    }

    fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &ComplianceIssue> {
        self.issues.iter().filter(move |i| i.severity == severity)
    }
}
