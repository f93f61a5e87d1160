//! University-wide common requirements (English, Chinese, service learning).
//!
//! These cut across the six categories: a passed English course counts
//! towards both its printed category and the English requirement.

use std::collections::BTreeMap;

use gradcheck_core::{CommonRuleKind, CommonRuleSpec, Credits};

use crate::report::CommonRequirementStatus;

#[derive(Debug)]
pub struct CommonRequirementTracker<'p> {
    rules: &'p [CommonRuleSpec],
    earned: BTreeMap<CommonRuleKind, Credits>,
}

impl<'p> CommonRequirementTracker<'p> {
    pub fn new(rules: &'p [CommonRuleSpec]) -> Self {
        let earned = rules.iter().map(|r| (r.kind, Credits::zero())).collect();
        Self { rules, earned }
    }

    /// Attribute a newly counted pass. Every matching rule is credited; code
    /// and name rules are checked independently.
    pub fn observe(&mut self, code: &str, name: &str, credits: &Credits) {
        for rule in self.rules {
            if rule.matcher.matches(code, name)
                && let Some(total) = self.earned.get_mut(&rule.kind)
            {
                *total += credits;
            }
        }
    }

    pub fn finish(self) -> BTreeMap<CommonRuleKind, CommonRequirementStatus> {
        self.rules
            .iter()
            .map(|rule| {
                let goal = Credits::from(rule.goal);
                let earned = self.earned.get(&rule.kind).cloned().unwrap_or_default();
                let gap = goal.gap_to(&earned);
                let status = CommonRequirementStatus {
                    name: rule.name.clone(),
                    goal,
                    earned,
                    gap,
                };
                (rule.kind, status)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradcheck_core::RequirementProfile;

    #[test]
    fn routes_by_prefix_and_name() {
        let profile = RequirementProfile::default();
        let mut tracker = CommonRequirementTracker::new(&profile.common_rules);
        tracker.observe("LC0010", "英文(一)", &Credits::from(2));
        tracker.observe("EL2001", "英語會話", &Credits::from(2));
        tracker.observe("CL1001", "國文", &Credits::from(3));
        tracker.observe("GE0001", "服務學習(一)", &Credits::from(1));
        tracker.observe("CS101", "程式設計", &Credits::from(3));

        let detail = tracker.finish();
        assert_eq!(detail[&CommonRuleKind::English].earned, Credits::from(4));
        assert_eq!(detail[&CommonRuleKind::English].gap, Credits::from(6));
        assert_eq!(detail[&CommonRuleKind::Chinese].earned, Credits::from(3));
        assert_eq!(detail[&CommonRuleKind::Chinese].gap, Credits::from(1));
        assert_eq!(detail[&CommonRuleKind::Service].gap, Credits::zero());
    }

    #[test]
    fn name_rule_is_independent_of_code_rules() {
        let profile = RequirementProfile::default();
        let mut tracker = CommonRequirementTracker::new(&profile.common_rules);
        tracker.observe("LC0099", "英語服務學習", &Credits::from(2));

        let detail = tracker.finish();
        assert_eq!(detail[&CommonRuleKind::English].earned, Credits::from(2));
        assert_eq!(detail[&CommonRuleKind::Service].earned, Credits::from(2));
    }

    #[test]
    fn gap_never_negative() {
        let profile = RequirementProfile::default();
        let mut tracker = CommonRequirementTracker::new(&profile.common_rules);
        tracker.observe("CL1001", "國文(一)", &Credits::from(3));
        tracker.observe("CL1002", "國文(二)", &Credits::from(3));

        let detail = tracker.finish();
        assert_eq!(detail[&CommonRuleKind::Chinese].earned, Credits::from(6));
        assert_eq!(detail[&CommonRuleKind::Chinese].gap, Credits::zero());
    }

    #[test]
    fn untouched_rules_report_full_gap() {
        let profile = RequirementProfile::default();
        let detail = CommonRequirementTracker::new(&profile.common_rules).finish();
        assert_eq!(detail.len(), 3);
        assert_eq!(detail[&CommonRuleKind::English].name, "英語");
        assert_eq!(detail[&CommonRuleKind::English].gap, Credits::from(10));
    }
}
