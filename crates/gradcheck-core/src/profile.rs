//! Degree requirement profiles.
//!
//! A profile fixes the credit goals the audit measures against: per-category
//! goals, the general-education core prefixes, and the university-wide
//! common requirements. [`RequirementProfile::default`] is the reference
//! degree; a JSON file may override any subset of its keys.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::category::Category;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("cannot read profile {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("profile JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid profile: {0}")]
    Invalid(String),
}

/// University-wide requirements tracked alongside the six categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CommonRuleKind {
    English,
    Chinese,
    Service,
}

/// How a passed course is attributed to a common requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "match", content = "value", rename_all = "snake_case")]
pub enum RuleMatcher {
    /// Course code starts with any of these prefixes.
    CodePrefix(Vec<String>),
    /// Course name contains this keyword.
    NameContains(String),
}

impl RuleMatcher {
    pub fn matches(&self, code: &str, name: &str) -> bool {
        match self {
            Self::CodePrefix(prefixes) => crate::code::matching_prefix(code, prefixes).is_some(),
            Self::NameContains(keyword) => !keyword.is_empty() && name.contains(keyword.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonRuleSpec {
    pub kind: CommonRuleKind,
    /// Display name, e.g. `英語`.
    pub name: String,
    pub goal: u32,
    pub matcher: RuleMatcher,
}

/// Credit goal per canonical category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryGoals {
    pub required: u32,
    pub college_required: u32,
    pub elective: u32,
    pub general_education: u32,
    pub common_required: u32,
    pub other: u32,
}

impl Default for CategoryGoals {
    fn default() -> Self {
        Self {
            required: 70,
            college_required: 4,
            elective: 27,
            general_education: 12,
            common_required: 15,
            other: 0,
        }
    }
}

impl CategoryGoals {
    pub fn goal(&self, category: Category) -> u32 {
        match category {
            Category::Required => self.required,
            Category::CollegeRequired => self.college_required,
            Category::Elective => self.elective,
            Category::GeneralEducation => self.general_education,
            Category::CommonRequired => self.common_required,
            Category::Other => self.other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequirementProfile {
    /// Credits needed to graduate.
    pub total_required: u32,
    pub goals: CategoryGoals,
    /// Two-letter prefixes of the required general-education subcategories.
    pub core_prefixes: Vec<String>,
    pub common_rules: Vec<CommonRuleSpec>,
}

impl Default for RequirementProfile {
    fn default() -> Self {
        Self {
            total_required: 128,
            goals: CategoryGoals::default(),
            core_prefixes: ["LS", "LE", "ID", "GN", "GS"].map(String::from).to_vec(),
            common_rules: vec![
                CommonRuleSpec {
                    kind: CommonRuleKind::English,
                    name: "英語".into(),
                    goal: 10,
                    matcher: RuleMatcher::CodePrefix(vec!["LC".into(), "EL".into()]),
                },
                CommonRuleSpec {
                    kind: CommonRuleKind::Chinese,
                    name: "國文".into(),
                    goal: 4,
                    matcher: RuleMatcher::CodePrefix(vec!["CL".into()]),
                },
                CommonRuleSpec {
                    kind: CommonRuleKind::Service,
                    name: "服務學習".into(),
                    goal: 1,
                    matcher: RuleMatcher::NameContains("服務".into()),
                },
            ],
        }
    }
}

impl RequirementProfile {
    /// Parse a profile from JSON. Keys absent from the document keep their
    /// reference values.
    pub fn from_json_str(json: &str) -> Result<Self, ProfileError> {
        let mut profile: Self = serde_json::from_str(json)?;
        profile.normalize();
        profile.validate()?;
        Ok(profile)
    }

    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let json = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let profile = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            total_required = profile.total_required,
            "loaded requirement profile"
        );
        Ok(profile)
    }

    pub fn common_rule(&self, kind: CommonRuleKind) -> Option<&CommonRuleSpec> {
        self.common_rules.iter().find(|r| r.kind == kind)
    }

    /// Prefixes are compared against normalised (uppercase) codes.
    fn normalize(&mut self) {
        for p in &mut self.core_prefixes {
            *p = crate::code::normalize_code(p);
        }
        for rule in &mut self.common_rules {
            if let RuleMatcher::CodePrefix(prefixes) = &mut rule.matcher {
                for p in prefixes.iter_mut() {
                    *p = crate::code::normalize_code(p);
                }
            }
        }
    }

    fn validate(&self) -> Result<(), ProfileError> {
        if self.core_prefixes.iter().any(String::is_empty) {
            return Err(ProfileError::Invalid("empty core prefix".into()));
        }
        for rule in &self.common_rules {
            let empty = match &rule.matcher {
                RuleMatcher::CodePrefix(prefixes) => {
                    prefixes.is_empty() || prefixes.iter().any(String::is_empty)
                }
                RuleMatcher::NameContains(keyword) => keyword.is_empty(),
            };
            if empty {
                return Err(ProfileError::Invalid(format!(
                    "common rule {:?} has an empty matcher",
                    rule.kind
                )));
            }
        }
        for (i, rule) in self.common_rules.iter().enumerate() {
            if self.common_rules[..i].iter().any(|r| r.kind == rule.kind) {
                return Err(ProfileError::Invalid(format!(
                    "common rule {:?} listed twice",
                    rule.kind
                )));
            }
        }
        Ok(())
    }
}
