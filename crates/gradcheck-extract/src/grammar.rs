//! Line grammar for registrar transcripts.
//!
//! Transcript pages are laid out as fixed columns, so after text extraction
//! each course occupies one line:
//!
//! ```text
//! 本系  CS201   1 112 1  資料結構        系必修  通過  3  45  88
//! 外系  GN1203  2        人文與藝術      通識    未過  2  45  52   重修
//! ```
//!
//! # Course line fields, in order
//!
//! 1. department flag: `本系 | 外系 | --`
//! 2. course code: `[A-Z0-9.]+`
//! 3. period: `volume year term` (long form) or `term` (short form)
//! 4. course name: shortest run of text up to the category label
//! 5. category label: closed set, see [`CATEGORY_LABELS`]
//! 6. grade: `通過 | 未過`; anything else is not a course line
//! 7. credits: one digit
//! 8. cumulative credits
//! 9. score: `# | * | <digits> | Pass`
//! 10. remarks: optional free text
//!
//! Header lines carry the enrollment year (`修業年度: 110`) and the student
//! identity (`1101234 王小明 資訊管理學系`). Everything else on a page is
//! furniture and matches nothing.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

use gradcheck_core::{
    CourseRecord, Credits, DepartmentFlag, GradeStatus, Period, ScoreToken, normalize_code,
};

/// Category labels accepted in the label column.
///
/// Order matters: the alternation is tried left to right, so compound labels
/// come before any shorter label they contain (`系必修` before `系必`,
/// `共同必修` before `共必`, everything before `選`).
pub const CATEGORY_LABELS: &[&str] = &["系必修", "院必修", "共同必修", "共必", "通識", "系必", "選"];

static YEAR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"修業年度:\s*(\d+)").unwrap());

static STUDENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{7,})\s+([\x{4e00}-\x{9fa5}]+)\s+([\x{4e00}-\x{9fa5}\s]+)").unwrap()
});

static COURSE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let labels = CATEGORY_LABELS
        .iter()
        .map(|l| regex::escape(l))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r"^\s*(?P<dept>本系|外系|--)\s+(?P<code>[A-Z0-9.]+)\s+(?:(?P<volume>\d+)\s+(?P<year>\d+)\s+(?P<term_full>\d+)|(?P<term_only>\d+))\s+(?P<name>.+?)\s+(?P<label>{labels})\s+(?P<grade>通過|未過)\s+(?P<credits>\d)\s+(?P<cumulative>\d+)\s+(?P<score>#|\*|\d+|Pass)\s*(?P<remarks>.*)?$"
    ))
    .unwrap()
});

/// Identity fields from the transcript header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentIdentity {
    pub id: String,
    pub name: String,
    pub department: String,
}

/// Extract the enrollment year from a `修業年度:` header line.
pub fn match_enrollment_year(line: &str) -> Option<u32> {
    let caps = YEAR_PATTERN.captures(line)?;
    let raw = caps.get(1)?.as_str();
    match raw.parse() {
        Ok(year) => Some(year),
        Err(_) => {
            debug!(raw, "enrollment year out of range, ignoring line");
            None
        }
    }
}

/// Extract `id name department` from a header line.
pub fn match_student(line: &str) -> Option<StudentIdentity> {
    let caps = STUDENT_PATTERN.captures(line)?;
    Some(StudentIdentity {
        id: caps.get(1)?.as_str().to_string(),
        name: caps.get(2)?.as_str().to_string(),
        department: caps.get(3)?.as_str().trim().to_string(),
    })
}

/// Parse one course line. Returns `None` for anything that is not a course.
///
/// Numeric fields that fail to parse are recorded as zero rather than
/// rejecting the line.
pub fn match_course(line: &str) -> Option<CourseRecord> {
    let caps = COURSE_PATTERN.captures(line)?;

    let period = match field(&caps, "term_full") {
        Some(term) => Period::Full {
            volume: coerce_u32("volume", field(&caps, "volume")),
            academic_year: coerce_u32("year", field(&caps, "year")),
            term: coerce_u32("term", Some(term)),
        },
        None => Period::Partial {
            term: coerce_u32("term", field(&caps, "term_only")),
        },
    };

    Some(CourseRecord {
        department_flag: DepartmentFlag::from_token(field(&caps, "dept")?)?,
        course_code: normalize_code(field(&caps, "code")?),
        period,
        course_name: field(&caps, "name")?.to_string(),
        category_label: field(&caps, "label")?.to_string(),
        grade_status: GradeStatus::from_token(field(&caps, "grade")?)?,
        credits: Credits::parse_or_zero(field(&caps, "credits").unwrap_or_default()),
        cumulative_credits: coerce_u32("cumulative", field(&caps, "cumulative")),
        raw_score: ScoreToken::from_token(field(&caps, "score")?)?,
        remarks: field(&caps, "remarks").map(str::to_string),
    })
}

/// A named group's text, with empty captures treated as absent.
fn field<'h>(caps: &Captures<'h>, name: &str) -> Option<&'h str> {
    caps.name(name).map(|m| m.as_str()).filter(|s| !s.is_empty())
}

fn coerce_u32(name: &str, raw: Option<&str>) -> u32 {
    match raw.map(str::parse::<u32>) {
        Some(Ok(n)) => n,
        _ => {
            debug!(field = name, raw, "numeric field not parseable, using 0");
            0
        }
    }
}
