//! Vertical card display for audit results.
//!
//! Renders one student's audit as grouped sections: identity, per-category
//! progress with evidence, general-education core coverage, common
//! requirements, and totals.

use std::fmt::Write;

use gradcheck_audit::{AuditReport, CategoryAudit, ProgressSummary};
use gradcheck_core::{Category, StudentInfo};

const MAX_LIST_ITEMS: usize = 10;

// ── Public API ──

/// Render the audit card as text.
pub fn render_card(
    student: &StudentInfo,
    report: &AuditReport,
    summary: &ProgressSummary,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    write_card(&mut out, student, report, summary)?;
    Ok(out)
}

fn write_card(
    out: &mut String,
    student: &StudentInfo,
    report: &AuditReport,
    summary: &ProgressSummary,
) -> std::fmt::Result {
    let id = student.id.as_deref().unwrap_or("-");
    let name = student.name.as_deref().unwrap_or("-");
    writeln!(out, "=== {id} {name} ===")?;
    if let Some((major, status)) = student.major_and_status() {
        writeln!(out, "{major} ({status})")?;
    }
    writeln!(out)?;

    writeln!(out, "Student")?;
    field(out, "grade_level", &summary.grade_label())?;
    if let Some(year) = student.year {
        field(out, "enrollment_year", &year.to_string())?;
    }
    writeln!(out)?;

    for (category, audit) in &report.audit_categories {
        write_category(out, *category, audit)?;
    }

    writeln!(out, "Common Requirements")?;
    for status in report.common_requirements_detail.values() {
        field(
            out,
            &status.name,
            &format!("{} / {} (gap {})", status.earned, status.goal, status.gap),
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Totals")?;
    field(
        out,
        "earned",
        &format!("{} / {}", summary.total_earned, summary.total_required),
    )?;
    field(out, "remaining", &summary.remaining_credits.to_string())?;
    if !summary.in_progress_credits.is_zero() {
        field(out, "in_progress", &summary.in_progress_credits.to_string())?;
    }
    Ok(())
}

// ── Section rendering ──

fn write_category(out: &mut String, category: Category, audit: &CategoryAudit) -> std::fmt::Result {
    // Nothing to show for an empty category with no goal.
    if audit.goal.is_zero() && audit.earned_courses.is_empty() && audit.failed_courses.is_empty() {
        return Ok(());
    }

    writeln!(out, "{} {}", category.display_name(), category.as_str())?;
    field(
        out,
        "earned",
        &format!("{} / {}", audit.earned_sum, audit.goal),
    )?;
    field(out, "remaining", &audit.remaining().to_string())?;
    list(out, "earned_courses", &audit.earned_courses)?;
    list(out, "failed_courses", &audit.failed_courses)?;

    if let Some(core) = &audit.core {
        let passed = if core.core_passed_prefixes.is_empty() {
            "-".to_string()
        } else {
            core.core_passed_prefixes.join(", ")
        };
        field(
            out,
            "core_passed",
            &format!(
                "{passed} ({}/{})",
                core.core_passed_count,
                core.core_required_prefixes.len()
            ),
        )?;
        if !core.is_core_complete {
            field(out, "core_missing", &core.core_missing_prefixes.join(", "))?;
        }
    }
    writeln!(out)
}

fn field(out: &mut String, name: &str, value: &str) -> std::fmt::Result {
    writeln!(out, "  {:<26} {}", name, value)
}

fn list(out: &mut String, name: &str, items: &[String]) -> std::fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(out, "  {name}")?;
    for item in items.iter().take(MAX_LIST_ITEMS) {
        writeln!(out, "    {item}")?;
    }
    if items.len() > MAX_LIST_ITEMS {
        writeln!(out, "    ... ({} more)", items.len() - MAX_LIST_ITEMS)?;
    }
    Ok(())
}
