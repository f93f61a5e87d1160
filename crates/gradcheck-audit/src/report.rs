//! Audit output types.

use std::collections::BTreeMap;

use serde::Serialize;

use gradcheck_core::{Category, CommonRuleKind, Credits};

/// Progress in one canonical category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAudit {
    pub goal: Credits,
    pub earned_sum: Credits,
    /// `[課號: CS201] 資料結構 - 3 學分`
    pub earned_courses: Vec<String>,
    /// `[課號: CS202] 演算法`
    pub failed_courses: Vec<String>,
    /// Only present on the general-education category.
    #[serde(flatten)]
    pub core: Option<CoreCheck>,
}

impl CategoryAudit {
    pub fn new(goal: Credits) -> Self {
        Self {
            goal,
            earned_sum: Credits::zero(),
            earned_courses: Vec::new(),
            failed_courses: Vec::new(),
            core: None,
        }
    }

    pub fn remaining(&self) -> Credits {
        self.goal.gap_to(&self.earned_sum)
    }
}

/// General-education core subcategory coverage. Prefix lists are sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoreCheck {
    pub core_required_prefixes: Vec<String>,
    pub core_passed_prefixes: Vec<String>,
    pub core_missing_prefixes: Vec<String>,
    pub core_passed_count: usize,
    pub is_core_complete: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommonRequirementStatus {
    pub name: String,
    pub goal: Credits,
    pub earned: Credits,
    /// `max(0, goal - earned)`
    pub gap: Credits,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Totals {
    pub total_earned: Credits,
    pub total_required: Credits,
}

/// Result of one audit run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    pub audit_categories: BTreeMap<Category, CategoryAudit>,
    pub common_requirements_detail: BTreeMap<CommonRuleKind, CommonRequirementStatus>,
    pub totals: Totals,
}

impl AuditReport {
    pub fn category(&self, category: Category) -> Option<&CategoryAudit> {
        self.audit_categories.get(&category)
    }

    pub fn core(&self) -> Option<&CoreCheck> {
        self.category(Category::GeneralEducation)?.core.as_ref()
    }

    pub fn common(&self, kind: CommonRuleKind) -> Option<&CommonRequirementStatus> {
        self.common_requirements_detail.get(&kind)
    }
}
