//! Graduation credit audit over extracted transcript records.

pub mod categorize;
pub mod common;
pub mod engine;
pub mod report;
pub mod retake;
pub mod summary;

pub use categorize::categorize;
pub use engine::run_audit;
pub use report::{AuditReport, CategoryAudit, CommonRequirementStatus, CoreCheck, Totals};
pub use summary::{ProgressSummary, current_roc_year};

#[cfg(test)]
pub(crate) mod testing;
