//! Transcript records shared between extraction and audit.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::code::offering_department;
use crate::credits::Credits;

/// Enrollment status assumed when the department line carries none.
pub const DEFAULT_STATUS: &str = "一般生";

/// Which program offered the course, as flagged in the first column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentFlag {
    /// `本系`
    InHouse,
    /// `外系`
    External,
    /// `--`
    Unspecified,
}

impl DepartmentFlag {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "本系" => Some(Self::InHouse),
            "外系" => Some(Self::External),
            "--" => Some(Self::Unspecified),
            _ => None,
        }
    }

    pub fn as_token(&self) -> &'static str {
        match self {
            Self::InHouse => "本系",
            Self::External => "外系",
            Self::Unspecified => "--",
        }
    }
}

/// Serialised as the token printed on the transcript.
impl Serialize for DepartmentFlag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_token())
    }
}

/// Outcome of one attempt at a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeStatus {
    /// `通過`
    Passed,
    /// `未過`
    Failed,
}

impl GradeStatus {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "通過" => Some(Self::Passed),
            "未過" => Some(Self::Failed),
            _ => None,
        }
    }
}

/// When the course was taken.
///
/// Transcripts print either the full `volume year term` triple or the term
/// alone; which one appears depends on the program that issued the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum Period {
    Full {
        volume: u32,
        academic_year: u32,
        term: u32,
    },
    Partial {
        term: u32,
    },
}

impl Period {
    pub fn term(&self) -> u32 {
        match self {
            Self::Full { term, .. } | Self::Partial { term } => *term,
        }
    }

}

impl fmt::Display for Period {
    /// "112-1" for the long form, "1" for the short form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full {
                academic_year,
                term,
                ..
            } => write!(f, "{academic_year}-{term}"),
            Self::Partial { term } => write!(f, "{term}"),
        }
    }
}

/// The score column: a numeric mark, `Pass`, or a sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreToken {
    /// Digits exactly as printed, e.g. `085` or full-width `８８`.
    Mark(String),
    Pass,
    /// `*`: grade not yet submitted.
    InProgress,
    /// `#`: credit granted by exemption.
    Exempt,
}

impl ScoreToken {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Pass" => Some(Self::Pass),
            "*" => Some(Self::InProgress),
            "#" => Some(Self::Exempt),
            t if !t.is_empty() && t.chars().all(char::is_numeric) => Some(Self::Mark(t.into())),
            _ => None,
        }
    }
}

impl fmt::Display for ScoreToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mark(digits) => f.write_str(digits),
            Self::Pass => f.write_str("Pass"),
            Self::InProgress => f.write_str("*"),
            Self::Exempt => f.write_str("#"),
        }
    }
}

/// Serialised as the token printed on the transcript.
impl Serialize for ScoreToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One transcript line: a single attempt at a course.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseRecord {
    pub department_flag: DepartmentFlag,
    /// Normalised code; shared by every attempt at the same course.
    pub course_code: String,
    pub period: Period,
    pub course_name: String,
    /// Category text as printed, before canonicalisation.
    pub category_label: String,
    pub grade_status: GradeStatus,
    pub credits: Credits,
    /// Running total printed by the registrar. Informational only.
    pub cumulative_credits: u32,
    pub raw_score: ScoreToken,
    pub remarks: Option<String>,
}

impl CourseRecord {
    pub fn is_passed(&self) -> bool {
        self.grade_status == GradeStatus::Passed
    }

    /// Score not yet submitted for this attempt.
    pub fn is_in_progress(&self) -> bool {
        self.raw_score == ScoreToken::InProgress
    }

    pub fn semester_label(&self) -> String {
        self.period.to_string()
    }

    pub fn offering_department(&self) -> String {
        offering_department(&self.course_code)
    }

    /// `[課號: CS201] 資料結構`
    pub fn display_name(&self) -> String {
        format!("[課號: {}] {}", self.course_code, self.course_name)
    }
}

/// Student identity as printed in the transcript header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StudentInfo {
    /// Enrollment year, ROC calendar (e.g. 110 = 2021).
    pub year: Option<u32>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub department: Option<String>,
}

impl StudentInfo {
    /// Split the department text into `(major, status)`.
    ///
    /// "資訊管理學系 進修部" → ("資訊管理學系", "進修部");
    /// a missing status defaults to [`DEFAULT_STATUS`].
    pub fn major_and_status(&self) -> Option<(String, String)> {
        let raw = self.department.as_deref()?;
        let mut parts = raw.split_whitespace();
        let major = parts.next().unwrap_or(raw).to_string();
        let status = parts.next().unwrap_or(DEFAULT_STATUS).to_string();
        Some((major, status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(period: Period, score: ScoreToken) -> CourseRecord {
        CourseRecord {
            department_flag: DepartmentFlag::InHouse,
            course_code: "CS201".into(),
            period,
            course_name: "資料結構".into(),
            category_label: "系必修".into(),
            grade_status: GradeStatus::Passed,
            credits: Credits::from(3),
            cumulative_credits: 45,
            raw_score: score,
            remarks: None,
        }
    }

    #[test]
    fn tokens_round_trip() {
        for flag in [
            DepartmentFlag::InHouse,
            DepartmentFlag::External,
            DepartmentFlag::Unspecified,
        ] {
            assert_eq!(DepartmentFlag::from_token(flag.as_token()), Some(flag));
        }
        assert_eq!(GradeStatus::from_token("通過"), Some(GradeStatus::Passed));
        assert_eq!(GradeStatus::from_token("未過"), Some(GradeStatus::Failed));
        assert_eq!(GradeStatus::from_token("停修"), None);
    }

    #[test]
    fn score_tokens() {
        assert_eq!(
            ScoreToken::from_token("85"),
            Some(ScoreToken::Mark("85".into()))
        );
        assert_eq!(ScoreToken::from_token("Pass"), Some(ScoreToken::Pass));
        assert_eq!(ScoreToken::from_token("*"), Some(ScoreToken::InProgress));
        assert_eq!(ScoreToken::from_token("#"), Some(ScoreToken::Exempt));
        assert_eq!(ScoreToken::from_token("A+"), None);
        assert_eq!(ScoreToken::from_token(""), None);
    }

    #[test]
    fn mark_keeps_printed_digits() {
        for raw in ["085", "99999999999", "８８"] {
            let token = ScoreToken::from_token(raw).unwrap();
            assert_eq!(token, ScoreToken::Mark(raw.into()));
            assert_eq!(token.to_string(), raw);
        }
    }

    #[test]
    fn semester_label_forms() {
        let full = record(
            Period::Full {
                volume: 1,
                academic_year: 112,
                term: 2,
            },
            ScoreToken::Mark("90".into()),
        );
        assert_eq!(full.semester_label(), "112-2");

        let partial = record(Period::Partial { term: 1 }, ScoreToken::Mark("90".into()));
        assert_eq!(partial.semester_label(), "1");
    }

    #[test]
    fn in_progress_only_for_placeholder() {
        let p = Period::Partial { term: 1 };
        assert!(record(p, ScoreToken::InProgress).is_in_progress());
        assert!(!record(p, ScoreToken::Exempt).is_in_progress());
        assert!(!record(p, ScoreToken::Pass).is_in_progress());
    }

    #[test]
    fn display_name_and_department() {
        let r = record(Period::Partial { term: 1 }, ScoreToken::Pass);
        assert_eq!(r.display_name(), "[課號: CS201] 資料結構");
        assert_eq!(r.offering_department(), "CS");
    }

    #[test]
    fn major_and_status_split() {
        let info = StudentInfo {
            department: Some("資訊管理學系 進修部".into()),
            ..Default::default()
        };
        assert_eq!(
            info.major_and_status(),
            Some(("資訊管理學系".into(), "進修部".into()))
        );

        let info = StudentInfo {
            department: Some("資訊管理學系".into()),
            ..Default::default()
        };
        assert_eq!(
            info.major_and_status(),
            Some(("資訊管理學系".into(), DEFAULT_STATUS.into()))
        );

        assert_eq!(StudentInfo::default().major_and_status(), None);
    }

    #[test]
    fn record_serialises_tokens() {
        let r = record(Period::Partial { term: 1 }, ScoreToken::InProgress);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["raw_score"], "*");
        assert_eq!(json["department_flag"], "本系");
        assert_eq!(json["grade_status"], "passed");
        assert_eq!(json["period"]["form"], "partial");
        assert_eq!(json["credits"], 3);
        assert!(json["remarks"].is_null());
    }
}
