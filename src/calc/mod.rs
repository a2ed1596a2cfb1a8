pub mod base_values;
pub mod critical;
pub mod misc_buffs;
pub mod performance;
pub mod sharpness;
pub mod skill_contributions;
pub mod stacking;

pub use base_values::{resolve_base_values, BaseValues, BowState, CategoryMechanics};
pub use misc_buffs::{resolve_misc_buffs, MiscBuffContributions};
pub use performance::{calculate_build_performance, calculate_resolved, PerformanceResult};
pub use skill_contributions::{resolve_skill_contributions, SkillContributions};
