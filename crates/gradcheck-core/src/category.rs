//! Canonical audit categories.

use serde::{Deserialize, Serialize};

/// One of the six buckets every course is classified into for credit
/// aggregation.
///
/// Declaration order is the report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Required,
    CollegeRequired,
    Elective,
    GeneralEducation,
    CommonRequired,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Self::Required,
        Self::CollegeRequired,
        Self::Elective,
        Self::GeneralEducation,
        Self::CommonRequired,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "Required",
            Self::CollegeRequired => "CollegeRequired",
            Self::Elective => "Elective",
            Self::GeneralEducation => "GeneralEducation",
            Self::CommonRequired => "CommonRequired",
            Self::Other => "Other",
        }
    }

    /// Heading used on printed transcripts.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Required => "必修",
            Self::CollegeRequired => "院必修",
            Self::Elective => "選修",
            Self::GeneralEducation => "通識",
            Self::CommonRequired => "共同必修",
            Self::Other => "其他",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_report_order() {
        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
    }

    #[test]
    fn serialises_as_variant_name() {
        for cat in Category::ALL {
            let json = serde_json::to_string(&cat).unwrap();
            assert_eq!(json, format!("\"{}\"", cat.as_str()));
        }
    }
}
