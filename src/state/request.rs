use serde::{Deserialize, Serialize};

use crate::state::build::Build;
use crate::state::calc_state::CalcState;

/// One calculation input as accepted by the HTTP API and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcRequest {
    pub build: Build,
    #[serde(default)]
    pub calc_state: CalcState,
}

impl CalcRequest {
    pub fn new(build: Build, calc_state: CalcState) -> Self {
        Self { build, calc_state }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::types::WeaponCategory;

    #[test]
    fn calc_state_defaults_to_empty() {
        let request: CalcRequest = serde_json::from_str(
            r#"{"build":{"category":"greatsword","weapon_id":"gs1"}}"#,
        )
        .expect("request parses");
        assert_eq!(request.build, Build::new(WeaponCategory::Greatsword, "gs1"));
        assert_eq!(request.calc_state, CalcState::new());
    }
}
