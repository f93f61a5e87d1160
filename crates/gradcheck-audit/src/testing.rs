//! Record builders for audit tests.

use gradcheck_core::{
    CourseRecord, Credits, DepartmentFlag, GradeStatus, Period, ScoreToken, normalize_code,
};

pub fn record(code: &str, label: &str, credits: u32, status: GradeStatus) -> CourseRecord {
    CourseRecord {
        department_flag: DepartmentFlag::InHouse,
        course_code: normalize_code(code),
        period: Period::Full {
            volume: 1,
            academic_year: 112,
            term: 1,
        },
        course_name: format!("課程{}", normalize_code(code)),
        category_label: label.to_string(),
        grade_status: status,
        credits: Credits::from(credits),
        cumulative_credits: 0,
        raw_score: match status {
            GradeStatus::Passed => ScoreToken::Mark("80".into()),
            GradeStatus::Failed => ScoreToken::Mark("40".into()),
        },
        remarks: None,
    }
}

pub fn passed(code: &str, label: &str, credits: u32) -> CourseRecord {
    record(code, label, credits, GradeStatus::Passed)
}

pub fn failed(code: &str, label: &str, credits: u32) -> CourseRecord {
    record(code, label, credits, GradeStatus::Failed)
}

pub fn named(mut r: CourseRecord, name: &str) -> CourseRecord {
    r.course_name = name.to_string();
    r
}

pub fn in_progress(mut r: CourseRecord) -> CourseRecord {
    r.raw_score = ScoreToken::InProgress;
    r
}
