//! Category label → canonical category.
//!
//! Labels are matched by substring, first rule wins. The rule order below is
//! the precedence: a label containing markers of two rules goes to the
//! earlier one.

use gradcheck_core::Category;

/// Ordered (markers, category) rules. Order is load-bearing.
pub const CATEGORY_RULES: &[(&[&str], Category)] = &[
    (&["共必", "共同必修"], Category::CommonRequired),
    (&["通識"], Category::GeneralEducation),
    (&["院必修"], Category::CollegeRequired),
    (&["選"], Category::Elective),
    (&["系必"], Category::Required),
];

/// Classify a printed category label. Unknown labels go to
/// [`Category::Other`].
pub fn categorize(label: &str) -> Category {
    CATEGORY_RULES
        .iter()
        .find(|(markers, _)| markers.iter().any(|m| label.contains(m)))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Other)
}
