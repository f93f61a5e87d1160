//! Progress summary: a compact digest of one audit for display.

use chrono::{Datelike, Local};
use serde::Serialize;

use gradcheck_core::{Category, CourseRecord, Credits, StudentInfo};

use crate::report::AuditReport;

/// Offset between the Gregorian and ROC (Minguo) calendars.
pub const ROC_EPOCH_OFFSET: i32 = 1911;

/// Grade shown for a course whose score has not been submitted yet.
pub const IN_PROGRESS_GRADE: &str = "修習中";

/// Current year in the ROC calendar, from the local clock.
pub fn current_roc_year() -> i32 {
    Local::now().year() - ROC_EPOCH_OFFSET
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSummary {
    /// Year of study, 1 for freshmen. Absent without an enrollment year.
    pub grade_level: Option<u32>,
    pub total_earned: Credits,
    pub total_required: Credits,
    pub remaining_credits: Credits,
    /// Credits of attempts whose score is still pending.
    pub in_progress_credits: Credits,
    pub unpassed_required: Vec<String>,
    pub missing_core: Vec<String>,
    /// `[112-1] 資料結構 (3學分, 88)`
    pub transcript: Vec<String>,
}

impl ProgressSummary {
    pub fn build(
        student: &StudentInfo,
        records: &[CourseRecord],
        report: &AuditReport,
        current_roc_year: i32,
    ) -> Self {
        let grade_level = student
            .year
            .and_then(|enrolled| grade_level(enrolled, current_roc_year));

        let in_progress_credits: Credits = records
            .iter()
            .filter(|r| r.is_in_progress())
            .map(|r| &r.credits)
            .sum();

        let unpassed_required = report
            .category(Category::Required)
            .map(|a| a.failed_courses.clone())
            .unwrap_or_default();

        let missing_core = report
            .core()
            .map(|c| c.core_missing_prefixes.clone())
            .unwrap_or_default();

        let totals = &report.totals;
        Self {
            grade_level,
            total_earned: totals.total_earned.clone(),
            total_required: totals.total_required.clone(),
            remaining_credits: totals.total_required.gap_to(&totals.total_earned),
            in_progress_credits,
            unpassed_required,
            missing_core,
            transcript: records.iter().map(transcript_line).collect(),
        }
    }

    /// `大3`, or `未知年級` when the grade level is unknown.
    pub fn grade_label(&self) -> String {
        match self.grade_level {
            Some(n) => format!("大{n}"),
            None => "未知年級".to_string(),
        }
    }
}

fn grade_level(enrolled: u32, current_roc_year: i32) -> Option<u32> {
    let level = i64::from(current_roc_year) - i64::from(enrolled) + 1;
    u32::try_from(level).ok().filter(|&n| n > 0)
}

fn transcript_line(record: &CourseRecord) -> String {
    let grade = if record.is_in_progress() {
        IN_PROGRESS_GRADE.to_string()
    } else {
        record.raw_score.to_string()
    };
    format!(
        "[{}] {} ({}學分, {})",
        record.semester_label(),
        record.course_name,
        record.credits,
        grade
    )
}
