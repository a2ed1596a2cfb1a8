//! Pre-skill weapon values after rampage picks.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::database::GameDatabase;
use crate::data::mechanics::{
    BowStats, BowgunStats, ChargeBladeStats, GunlanceStats, HuntingHornSongs, InsectGlaiveStats,
    SwitchAxeStats, WeaponMechanics, MAX_BOWGUN_RELOAD, MAX_KINSECT_LEVEL,
};
use crate::data::rampage::{RampageEffect, RampageSkillRO, NON_ELEMENTAL_BOOST_MUL};
use crate::data::types::{EleStat, SharpnessBar};
use crate::data::weapon::WeaponRO;
use crate::error::CalcError;
use crate::state::build::ResolvedBuild;

/// Bow data plus the charge level limit currently in effect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BowState {
    #[serde(flatten)]
    pub stats: BowStats,
    pub charge_level_limit: u8,
}

/// Category mechanic state carried through a calculation. Exactly one
/// variant, matching the weapon's category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CategoryMechanics {
    Plain,
    Gunlance(GunlanceStats),
    HuntingHorn(HuntingHornSongs),
    SwitchAxe(SwitchAxeStats),
    ChargeBlade(ChargeBladeStats),
    InsectGlaive(InsectGlaiveStats),
    Bow(BowState),
    Bowgun(BowgunStats),
}

impl From<&WeaponMechanics> for CategoryMechanics {
    fn from(mechanics: &WeaponMechanics) -> Self {
        match mechanics {
            WeaponMechanics::Plain => Self::Plain,
            WeaponMechanics::Gunlance(stats) => Self::Gunlance(stats.clone()),
            WeaponMechanics::HuntingHorn(songs) => Self::HuntingHorn(songs.clone()),
            WeaponMechanics::SwitchAxe(stats) => Self::SwitchAxe(stats.clone()),
            WeaponMechanics::ChargeBlade(stats) => Self::ChargeBlade(stats.clone()),
            WeaponMechanics::InsectGlaive(stats) => Self::InsectGlaive(stats.clone()),
            WeaponMechanics::Bow(stats) => Self::Bow(BowState {
                charge_level_limit: stats.base_charge_level_limit,
                stats: stats.clone(),
            }),
            WeaponMechanics::Bowgun(stats) => Self::Bowgun(stats.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BaseValues {
    pub base_raw: i32,
    pub base_affinity: i32,
    pub base_ele_stat: BTreeMap<EleStat, u32>,
    pub base_defense: u32,
    /// Melee only.
    pub min_sharpness: Option<SharpnessBar>,
    pub max_sharpness: Option<SharpnessBar>,
    pub raw_post_trunc_mul: f64,
    pub mechanics: CategoryMechanics,
}

pub fn resolve_base_values(
    db: &GameDatabase,
    build: &ResolvedBuild<'_>,
) -> Result<BaseValues, CalcError> {
    let weapon = build.weapon;
    if !weapon.mechanics.matches(weapon.category) {
        return Err(CalcError::MechanicsMismatch {
            weapon: weapon.id.clone(),
            category: weapon.category,
        });
    }

    let (min_sharpness, max_sharpness) = match (weapon.category.is_melee(), weapon.sharpness) {
        (true, Some(sharpness)) => (Some(sharpness.base), Some(sharpness.max)),
        (true, None) => return Err(CalcError::MissingSharpness(weapon.id.clone())),
        (false, _) => (None, None),
    };

    let mut values = BaseValues {
        base_raw: weapon.attack,
        base_affinity: weapon.affinity,
        base_ele_stat: weapon.ele_stat.clone(),
        base_defense: weapon.defense,
        min_sharpness,
        max_sharpness,
        raw_post_trunc_mul: 1.0,
        mechanics: CategoryMechanics::from(&weapon.mechanics),
    };

    let mut non_elemental_boost = false;
    for ramp in &build.rampage_skills {
        tracing::trace!(weapon = %weapon.id, ramp = %ramp.id, "applying rampage skill");
        if ramp.effect == RampageEffect::NonElementalBoost {
            non_elemental_boost = true;
            continue;
        }
        apply_rampage(db, weapon, ramp, &mut values)?;
    }
    if non_elemental_boost && values.base_ele_stat.is_empty() {
        values.raw_post_trunc_mul *= NON_ELEMENTAL_BOOST_MUL;
    }

    Ok(values)
}

fn apply_rampage(
    db: &GameDatabase,
    weapon: &WeaponRO,
    ramp: &RampageSkillRO,
    values: &mut BaseValues,
) -> Result<(), CalcError> {
    let wrong_category = || CalcError::RampageCategoryMismatch {
        weapon: weapon.id.clone(),
        ramp_skill: ramp.id.clone(),
        category: weapon.category,
    };

    match &ramp.effect {
        RampageEffect::None | RampageEffect::NonElementalBoost => {}
        RampageEffect::RawAdd { value } => values.base_raw += value,
        RampageEffect::AffinityAdd { value } => values.base_affinity += value,
        RampageEffect::DefenseAdd { value } => values.base_defense += value,
        RampageEffect::AllEleStatAdd { value } => {
            for amount in values.base_ele_stat.values_mut() {
                *amount += value;
            }
        }
        RampageEffect::EleStatAdd { kind, value } => {
            let amount = values.base_ele_stat.get_mut(kind).ok_or_else(|| {
                CalcError::AbsentEleStat {
                    weapon: weapon.id.clone(),
                    ramp_skill: ramp.id.clone(),
                    kind: *kind,
                }
            })?;
            *amount += value;
        }
        RampageEffect::EleStatReplace { kind, value } => {
            values.base_ele_stat = BTreeMap::from([(*kind, *value)]);
        }
        RampageEffect::Surge {
            raw,
            affinity,
            ele_stat,
        } => {
            values.base_raw += raw;
            values.base_affinity += affinity;
            for amount in values.base_ele_stat.values_mut() {
                *amount += ele_stat;
            }
        }
        RampageEffect::ShellingType { shelling_type } => {
            let CategoryMechanics::Gunlance(stats) = &mut values.mechanics else {
                return Err(wrong_category());
            };
            let found = db
                .mechanics()
                .shelling_types
                .get(shelling_type)
                .ok_or_else(|| CalcError::UnknownShellingType(shelling_type.clone()))?;
            stats.shelling_type = found.clone();
        }
        RampageEffect::KinsectLevelUp => {
            let CategoryMechanics::InsectGlaive(stats) = &mut values.mechanics else {
                return Err(wrong_category());
            };
            stats.kinsect_level = (stats.kinsect_level + 1).min(MAX_KINSECT_LEVEL);
        }
        RampageEffect::RecoilDown => {
            let CategoryMechanics::Bowgun(stats) = &mut values.mechanics else {
                return Err(wrong_category());
            };
            stats.recoil = stats.recoil.saturating_sub(1);
        }
        RampageEffect::ReloadSpeedUp => {
            let CategoryMechanics::Bowgun(stats) = &mut values.mechanics else {
                return Err(wrong_category());
            };
            stats.reload = (stats.reload + 1).min(MAX_BOWGUN_RELOAD);
        }
    }
    Ok(())
}
