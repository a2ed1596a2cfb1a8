use thiserror::Error;

use crate::data::types::{EleStat, WeaponCategory};

/// Invariant violations raised while resolving or calculating a build. Every
/// variant names the identifier at fault.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("unknown {category} weapon '{id}'")]
    UnknownWeapon { category: WeaponCategory, id: String },
    #[error("weapon '{weapon}' has {slots} rampage slot(s), got a pick for slot {slot}")]
    RampageSlotOutOfRange {
        weapon: String,
        slot: usize,
        slots: usize,
    },
    #[error("rampage skill '{ramp_skill}' is not offered in slot {slot} of weapon '{weapon}'")]
    RampageNotOffered {
        weapon: String,
        slot: usize,
        ramp_skill: String,
    },
    #[error("unknown rampage skill '{0}'")]
    UnknownRampageSkill(String),
    #[error("rampage skill '{ramp_skill}' boosts {kind}, which weapon '{weapon}' does not carry")]
    AbsentEleStat {
        weapon: String,
        ramp_skill: String,
        kind: EleStat,
    },
    #[error("rampage skill '{ramp_skill}' does not apply to {category} weapon '{weapon}'")]
    RampageCategoryMismatch {
        weapon: String,
        ramp_skill: String,
        category: WeaponCategory,
    },
    #[error("unknown shelling type '{0}'")]
    UnknownShellingType(String),
    #[error("weapon '{weapon}' mechanics do not match category {category}")]
    MechanicsMismatch {
        weapon: String,
        category: WeaponCategory,
    },
    #[error("melee weapon '{0}' has no sharpness data")]
    MissingSharpness(String),
    #[error("weapon '{weapon}' sharpness is not full and base total {base} + 50 != max total {max}")]
    InconsistentSharpness { weapon: String, base: u32, max: u32 },
    #[error("sharpness bar has no hits left")]
    EmptySharpnessBar,
    #[error("craftsmanship level {0} outside 0..=5")]
    CraftsmanshipOutOfRange(u8),
    #[error("unknown skill '{0}'")]
    UnknownSkill(String),
    #[error("skill '{skill}' level {level} outside 0..={max}")]
    SkillLevelOutOfRange { skill: String, level: u8, max: u8 },
    #[error("bow '{weapon}' has {levels} charge level(s) for charge level limit {limit}")]
    ChargeLevelMismatch {
        weapon: String,
        levels: usize,
        limit: u8,
    },
    #[error(transparent)]
    State(#[from] StateError),
}

/// Rejected edits or snapshots of the calculation state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("unknown calc state group '{0}'")]
    UnknownGroup(String),
    #[error("unknown calc state item '{group}/{item}'")]
    UnknownItem { group: String, item: String },
    #[error("state {state} outside 0..{states} for '{group}/{item}'")]
    StateOutOfRange {
        group: String,
        item: String,
        state: usize,
        states: usize,
    },
    #[error("unknown skill '{0}'")]
    UnknownSkill(String),
    #[error("skill '{skill}' level {level} outside 0..={max}")]
    SkillLevelOutOfRange { skill: String, level: u8, max: u8 },
}
