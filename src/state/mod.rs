pub mod build;
pub mod calc_state;
pub mod request;

pub use build::{Build, ResolvedBuild};
pub use calc_state::{CalcState, CalcStateSpecification, MISC_BUFFS, SKILL_CONDITIONS};
pub use request::CalcRequest;
