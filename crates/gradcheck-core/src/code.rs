//! Course-code normalisation and prefix matching.
//!
//! A course code is the durable identity of a course across semesters: a
//! retake reuses the same code. Codes are compared after normalisation so
//! that `cs201 ` and `CS201` refer to the same course.
//!
//! # Code conventions
//!
//! - Two-letter offering prefix: `CS201`, `GN1203`, `LC0010`
//! - Dotted sub-sections are allowed: `EL.101`
//! - General-education subcategories and language requirements are keyed by
//!   the two-letter prefix alone.

/// Offering department used when a code is too short to carry a prefix.
pub const FALLBACK_DEPARTMENT: &str = "OT";

/// Normalise a course code into its comparison key.
///
/// Input: raw code like `" cs201"`, `"gn1203"`
/// Output: `"CS201"`, `"GN1203"`
pub fn normalize_code(s: &str) -> String {
    s.trim().to_uppercase()
}

/// Return the first prefix in `prefixes` that `code` starts with.
///
/// Prefixes are tried in the order given, so callers holding overlapping
/// prefixes control precedence. Empty prefixes never match.
pub fn matching_prefix<'a, S: AsRef<str>>(code: &str, prefixes: &'a [S]) -> Option<&'a str> {
    prefixes
        .iter()
        .map(AsRef::as_ref)
        .find(|p| !p.is_empty() && code.starts_with(p))
}

/// Offering department of a course: the first two characters of its code.
///
/// "CS201" → "CS", "X" → "OT"
pub fn offering_department(code: &str) -> String {
    let mut chars = code.chars();
    match (chars.next(), chars.next()) {
        (Some(a), Some(b)) => [a, b].iter().collect(),
        _ => FALLBACK_DEPARTMENT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalises_case_and_whitespace() {
        assert_eq!(normalize_code("  cs201 "), "CS201");
        assert_eq!(normalize_code("GN1203"), "GN1203");
        assert_eq!(normalize_code("el.101"), "EL.101");
    }

    #[test]
    fn empty_code_stays_empty() {
        assert_eq!(normalize_code("   "), "");
    }

    #[test]
    fn prefix_match_returns_first_hit() {
        let prefixes = ["LS", "LE", "ID", "GN", "GS"];
        assert_eq!(matching_prefix("GN1203", &prefixes), Some("GN"));
        assert_eq!(matching_prefix("LE0001", &prefixes), Some("LE"));
        assert_eq!(matching_prefix("GEN101", &prefixes), None);
    }

    #[test]
    fn prefix_match_respects_order() {
        let prefixes = ["C", "CS"];
        assert_eq!(matching_prefix("CS201", &prefixes), Some("C"));
    }

    #[test]
    fn empty_prefix_never_matches() {
        let prefixes = ["", "CS"];
        assert_eq!(matching_prefix("CS201", &prefixes), Some("CS"));
        assert_eq!(matching_prefix("MA101", &prefixes), None);
    }

    #[test]
    fn offering_department_from_prefix() {
        assert_eq!(offering_department("CS201"), "CS");
        assert_eq!(offering_department("LC"), "LC");
    }

    #[test]
    fn offering_department_fallback() {
        assert_eq!(offering_department("X"), "OT");
        assert_eq!(offering_department(""), "OT");
    }
}
