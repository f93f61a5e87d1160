//! The audit pass.
//!
//! One walk over the records in transcript order. Every record is
//! categorised, then resolved against the retake ledger: a pass is counted
//! at most once per code, a failure is listed at most once and only for
//! codes never passed. Core prefixes and totals are derived afterwards.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info};

use gradcheck_core::{
    Category, CourseRecord, Credits, RequirementProfile, matching_prefix, normalize_code,
};

use crate::categorize::categorize;
use crate::common::CommonRequirementTracker;
use crate::report::{AuditReport, CategoryAudit, CoreCheck, Totals};
use crate::retake::RetakeLedger;

/// Audit `records` against `profile`.
///
/// Pure: no state survives the call, and the same input always yields the
/// same report.
pub fn run_audit(records: &[CourseRecord], profile: &RequirementProfile) -> AuditReport {
    let mut categories: BTreeMap<Category, CategoryAudit> = Category::ALL
        .iter()
        .map(|&c| (c, CategoryAudit::new(Credits::from(profile.goals.goal(c)))))
        .collect();
    let mut ledger = RetakeLedger::new(records);
    let mut common = CommonRequirementTracker::new(&profile.common_rules);
    let mut core_passed: BTreeSet<String> = BTreeSet::new();

    for record in records {
        let code = normalize_code(&record.course_code);
        let category = categorize(&record.category_label);
        let Some(audit) = categories.get_mut(&category) else {
            continue;
        };

        if record.is_passed() {
            if !ledger.admit_pass(&code) {
                debug!(code = %code, "already counted, skipping retake");
                continue;
            }
            audit.earned_sum += &record.credits;
            audit.earned_courses.push(format!(
                "{} - {} 學分",
                record.display_name(),
                record.credits
            ));
            common.observe(&code, &record.course_name, &record.credits);

            if category == Category::GeneralEducation
                && let Some(prefix) = matching_prefix(&code, &profile.core_prefixes)
            {
                core_passed.insert(prefix.to_string());
            }
        } else if ledger.admit_failure(&code) {
            audit.failed_courses.push(record.display_name());
        }
    }

    let required: BTreeSet<String> = profile.core_prefixes.iter().cloned().collect();
    let missing: Vec<String> = required.difference(&core_passed).cloned().collect();
    if let Some(gen_ed) = categories.get_mut(&Category::GeneralEducation) {
        gen_ed.core = Some(CoreCheck {
            core_required_prefixes: required.iter().cloned().collect(),
            core_passed_count: core_passed.len(),
            core_passed_prefixes: core_passed.into_iter().collect(),
            is_core_complete: missing.is_empty(),
            core_missing_prefixes: missing,
        });
    }

    let totals = Totals {
        total_earned: categories.values().map(|a| &a.earned_sum).sum(),
        total_required: Credits::from(profile.total_required),
    };

    info!(
        records = records.len(),
        counted = ledger.counted_len(),
        total_earned = %totals.total_earned,
        total_required = %totals.total_required,
        "audit complete"
    );

    AuditReport {
        audit_categories: categories,
        common_requirements_detail: common.finish(),
        totals,
    }
}
