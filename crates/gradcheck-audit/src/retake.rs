//! Retake resolution.
//!
//! A course code is the identity of a course across semesters. Only the
//! polarity of its history matters to the audit: a code that was ever passed
//! earns its credits exactly once and is never reported as failed; a code
//! that was never passed is reported as failed exactly once.

use std::collections::HashSet;

use gradcheck_core::{CourseRecord, normalize_code};

/// Bookkeeping for one audit run. Built from the full record list, so it is
/// only meaningful after every record has been seen.
#[derive(Debug, Default)]
pub struct RetakeLedger {
    /// Codes with a passing attempt anywhere in the record list.
    passed_anywhere: HashSet<String>,
    /// Codes whose credits have been counted in this run.
    counted: HashSet<String>,
    /// Codes already listed as failed in this run.
    failure_listed: HashSet<String>,
}

impl RetakeLedger {
    /// Pre-scan the records for codes that were ever passed.
    pub fn new(records: &[CourseRecord]) -> Self {
        let passed_anywhere = records
            .iter()
            .filter(|r| r.is_passed())
            .map(|r| normalize_code(&r.course_code))
            .filter(|code| !code.is_empty())
            .collect();
        Self {
            passed_anywhere,
            ..Self::default()
        }
    }

    pub fn ever_passed(&self, code: &str) -> bool {
        self.passed_anywhere.contains(code)
    }

    /// Admit a passing attempt. Returns `false` when the code's credits were
    /// already counted. Codes that normalise to empty are always admitted.
    pub fn admit_pass(&mut self, code: &str) -> bool {
        if code.is_empty() {
            return true;
        }
        self.counted.insert(code.to_string())
    }

    /// Admit a failing attempt. Returns `false` when the code was passed at
    /// any point or is already listed as failed.
    pub fn admit_failure(&mut self, code: &str) -> bool {
        if self.passed_anywhere.contains(code) {
            return false;
        }
        if code.is_empty() {
            return true;
        }
        self.failure_listed.insert(code.to_string())
    }

    pub fn counted_len(&self) -> usize {
        self.counted.len()
    }

    pub fn passed_anywhere_len(&self) -> usize {
        self.passed_anywhere.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{failed, passed};

    #[test]
    fn pass_counted_once() {
        let records = [passed("CS201", "系必修", 3), passed("CS201", "系必修", 3)];
        let mut ledger = RetakeLedger::new(&records);
        assert!(ledger.admit_pass("CS201"));
        assert!(!ledger.admit_pass("CS201"));
        assert_eq!(ledger.counted_len(), 1);
    }

    #[test]
    fn later_pass_suppresses_earlier_failure() {
        let records = [failed("CS201", "系必修", 3), passed("CS201", "系必修", 3)];
        let mut ledger = RetakeLedger::new(&records);
        assert!(ledger.ever_passed("CS201"));
        assert!(!ledger.admit_failure("CS201"));
    }

    #[test]
    fn earlier_pass_suppresses_later_failure() {
        let records = [passed("CS201", "系必修", 3), failed("CS201", "系必修", 3)];
        let mut ledger = RetakeLedger::new(&records);
        assert!(ledger.admit_pass("CS201"));
        assert!(!ledger.admit_failure("CS201"));
    }

    #[test]
    fn repeated_failure_listed_once() {
        let records = [failed("CS202", "系必修", 3), failed("CS202", "系必修", 3)];
        let mut ledger = RetakeLedger::new(&records);
        assert!(ledger.admit_failure("CS202"));
        assert!(!ledger.admit_failure("CS202"));
    }

    #[test]
    fn empty_code_never_enters_the_sets() {
        let records = [passed("", "選", 2)];
        let mut ledger = RetakeLedger::new(&records);
        assert_eq!(ledger.passed_anywhere_len(), 0);
        assert!(ledger.admit_pass(""));
        assert!(ledger.admit_pass(""));
        assert!(ledger.admit_failure(""));
        assert!(ledger.admit_failure(""));
    }

    #[test]
    fn pre_scan_normalises_codes() {
        let mut r = passed("CS201", "系必修", 3);
        r.course_code = " cs201".into();
        let records = [r];
        let ledger = RetakeLedger::new(&records);
        assert!(ledger.ever_passed("CS201"));
    }
}
