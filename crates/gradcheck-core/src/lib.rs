pub mod category;
pub mod code;
pub mod credits;
pub mod profile;
pub mod record;

pub use category::Category;
pub use code::{matching_prefix, normalize_code, offering_department};
pub use credits::Credits;
pub use profile::{CommonRuleKind, CommonRuleSpec, ProfileError, RequirementProfile, RuleMatcher};
pub use record::{CourseRecord, DepartmentFlag, GradeStatus, Period, ScoreToken, StudentInfo};
