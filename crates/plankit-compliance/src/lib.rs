//! # PlanKit Compliance
//!
//! An advisory rule evaluator over floor-plan documents. A pure
//! function of the document: no internal state, deterministic output,
//! safely re-runnable on every document change.
//!
//! Findings are informational only — they do not constitute a legal or
//! engineering determination.

mod issue;
mod rules;

pub use issue::{ComplianceIssue, IssueReport, Severity};
pub use rules::evaluate;
