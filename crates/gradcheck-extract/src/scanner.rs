//! Page scanner: runs the line grammar over every line of every page.

use serde::Serialize;
use tracing::{debug, info, warn};

use gradcheck_core::{CourseRecord, StudentInfo};

use crate::ExtractError;
use crate::grammar;

/// Everything extracted from one transcript document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Transcript {
    pub student_info: StudentInfo,
    #[serde(rename = "all_courses")]
    pub courses: Vec<CourseRecord>,
}

/// Incremental scanner over the pages of one document.
///
/// Student identity is read from the first page only. The enrollment year
/// and the identity line are tracked separately: each is taken from its
/// first match and never overwritten.
#[derive(Debug, Default)]
pub struct PageScanner {
    student: StudentInfo,
    found_year: bool,
    found_student: bool,
    courses: Vec<CourseRecord>,
    pages: usize,
    lines: usize,
}

impl PageScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan the lines of the next page.
    pub fn scan_page<I, L>(&mut self, lines: I)
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let first_page = self.pages == 0;
        self.pages += 1;
        let before = self.courses.len();
        for line in lines {
            self.scan_line(line.as_ref(), first_page);
        }
        debug!(
            page = self.pages,
            courses = self.courses.len() - before,
            "scanned page"
        );
    }

    fn scan_line(&mut self, line: &str, first_page: bool) {
        self.lines += 1;
        let line = line.trim();

        if first_page {
            if !self.found_year
                && let Some(year) = grammar::match_enrollment_year(line)
            {
                self.student.year = Some(year);
                self.found_year = true;
            }
            if !self.found_student
                && let Some(identity) = grammar::match_student(line)
            {
                self.student.id = Some(identity.id);
                self.student.name = Some(identity.name);
                self.student.department = Some(identity.department);
                self.found_student = true;
            }
        }

        if let Some(record) = grammar::match_course(line) {
            self.courses.push(record);
        }
    }

    /// Finish the document.
    ///
    /// A document with pages but no course lines is an error, so that an
    /// unreadable layout is never mistaken for an empty transcript. A
    /// document with no pages at all yields an empty transcript.
    pub fn finish(self) -> Result<Transcript, ExtractError> {
        if self.pages > 0 && self.courses.is_empty() {
            warn!(
                pages = self.pages,
                lines = self.lines,
                "no course lines matched the transcript grammar"
            );
            return Err(ExtractError::NoRecordsMatched {
                pages: self.pages,
                lines: self.lines,
            });
        }

        info!(
            pages = self.pages,
            courses = self.courses.len(),
            student_id = self.student.id.as_deref().unwrap_or("-"),
            "transcript extracted"
        );
        Ok(Transcript {
            student_info: self.student,
            courses: self.courses,
        })
    }
}

/// Scan pages given as sequences of lines.
pub fn scan_pages<P, I, L>(pages: P) -> Result<Transcript, ExtractError>
where
    P: IntoIterator<Item = I>,
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    let mut scanner = PageScanner::new();
    for page in pages {
        scanner.scan_page(page);
    }
    scanner.finish()
}

/// Scan pages given as blocks of text, one block per page.
pub fn scan_text_pages<S: AsRef<str>>(pages: &[S]) -> Result<Transcript, ExtractError> {
    scan_pages(pages.iter().map(|p| p.as_ref().lines()))
}
