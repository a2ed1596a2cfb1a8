//! Build performance: sequences base values, skills, buffs, sharpness and
//! crit into the figures a player sees.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::calc::base_values::{resolve_base_values, BaseValues, CategoryMechanics};
use crate::calc::critical::{crit_chance, crit_modifier};
use crate::calc::misc_buffs::{resolve_misc_buffs, MiscBuffContributions};
use crate::calc::sharpness::{apply_handicraft, effective_craftsmanship_level, sharpness_modifiers};
use crate::calc::skill_contributions::{resolve_skill_contributions, SkillContributions};
use crate::data::database::GameDatabase;
use crate::data::types::{EleStat, SharpnessBar, WeaponCategory};
use crate::error::CalcError;
use crate::state::build::{Build, ResolvedBuild};
use crate::state::calc_state::CalcState;

const RAZOR_SHARP_CHANCE: [f64; 3] = [0.10, 0.25, 0.50];
const MASTERS_TOUCH_CHANCE: [f64; 3] = [0.20, 0.40, 0.80];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceResult {
    pub category: WeaponCategory,
    pub weapon_id: String,

    /// Post-rampage weapon figures before skills and buffs.
    pub weapon_attack: i32,
    pub weapon_affinity: i32,
    pub weapon_defense: u32,
    pub weapon_ele_stat: BTreeMap<EleStat, u32>,

    pub effective_raw: f64,
    pub effective_ele_stat: BTreeMap<EleStat, f64>,
    /// Unclamped.
    pub affinity: f64,

    pub raw_crit_dmg_multiplier: f64,
    pub raw_crit_modifier: f64,
    pub elemental_crit_dmg_multiplier: f64,
    pub elemental_crit_modifier: f64,

    pub real_sharpness_bar: Option<SharpnessBar>,
    pub max_sharpness_bar: Option<SharpnessBar>,
    pub raw_sharpness_modifier: Option<f64>,
    pub elemental_sharpness_modifier: Option<f64>,
    pub hits_multiplier: f64,

    pub effective_defense: f64,
    pub elemental_resistance: f64,

    pub mechanics: CategoryMechanics,
}

/// Resolve `build` against `db` and calculate it.
pub fn calculate_build_performance(
    db: &GameDatabase,
    build: &Build,
    calc_state: &CalcState,
) -> Result<PerformanceResult, CalcError> {
    let resolved = build.resolve(db)?;
    calculate_resolved(db, &resolved, calc_state)
}

pub fn calculate_resolved(
    db: &GameDatabase,
    build: &ResolvedBuild<'_>,
    calc_state: &CalcState,
) -> Result<PerformanceResult, CalcError> {
    calc_state.check_states()?;
    let b = resolve_base_values(db, build)?;
    let s = resolve_skill_contributions(db, calc_state)?;
    let m = resolve_misc_buffs(calc_state);
    let weapon_id = &build.weapon.id;

    let postbase_raw = (f64::from(b.base_raw) * s.raw_mul * m.raw_mul).trunc()
        + s.raw_add
        + m.raw_add;
    let postbase_raw = postbase_raw * b.raw_post_trunc_mul * s.raw_post_trunc_mul;
    let postbase_affinity = f64::from(b.base_affinity) + s.affinity_add + m.affinity_add;
    let postbase_ele_stat = postbase_ele_stat(&b, &s, &m);

    let sharpness = match (b.min_sharpness, b.max_sharpness) {
        (Some(min_bar), Some(max_bar)) => {
            let level =
                effective_craftsmanship_level(weapon_id, &min_bar, &max_bar, s.handicraft_level)?;
            let real_bar = apply_handicraft(&max_bar, level)?;
            let (raw_mod, ele_mod) = sharpness_modifiers(&real_bar)?;
            tracing::debug!(weapon = %weapon_id, level, raw_mod, ele_mod, "sharpness resolved");
            Some((real_bar, max_bar, raw_mod, ele_mod))
        }
        _ => None,
    };

    let chance = crit_chance(postbase_affinity);
    let raw_crit_modifier = crit_modifier(
        postbase_affinity,
        s.raw_crit_dmg_multiplier,
        s.raw_blunder_dmg_multiplier,
    );
    let elemental_crit_modifier = crit_modifier(
        postbase_affinity,
        s.elemental_crit_dmg_multiplier,
        s.elemental_blunder_dmg_multiplier,
    );
    tracing::debug!(
        weapon = %weapon_id,
        postbase_raw,
        postbase_affinity,
        crit_chance = chance,
        "post-base values"
    );

    let hits_multiplier = hits_multiplier(&s, chance);

    let raw_sharpness_modifier = sharpness.map(|(_, _, raw_mod, _)| raw_mod);
    let elemental_sharpness_modifier = sharpness.map(|(_, _, _, ele_mod)| ele_mod);

    let effective_raw = postbase_raw * raw_crit_modifier * raw_sharpness_modifier.unwrap_or(1.0);
    let effective_ele_stat = postbase_ele_stat
        .into_iter()
        .map(|(kind, value)| {
            let value = if kind.is_elemental() {
                value * elemental_crit_modifier * elemental_sharpness_modifier.unwrap_or(1.0)
            } else {
                value
            };
            (kind, value)
        })
        .collect();

    let effective_defense =
        (f64::from(b.base_defense) * s.defense_mul * m.defense_mul).trunc()
            + s.defense_add
            + m.defense_add;

    let mechanics = post_process_mechanics(weapon_id, b.mechanics.clone(), &s)?;

    Ok(PerformanceResult {
        category: build.weapon.category,
        weapon_id: weapon_id.clone(),
        weapon_attack: b.base_raw,
        weapon_affinity: b.base_affinity,
        weapon_defense: b.base_defense,
        weapon_ele_stat: b.base_ele_stat.clone(),
        effective_raw,
        effective_ele_stat,
        affinity: postbase_affinity,
        raw_crit_dmg_multiplier: s.raw_crit_dmg_multiplier,
        raw_crit_modifier,
        elemental_crit_dmg_multiplier: s.elemental_crit_dmg_multiplier,
        elemental_crit_modifier,
        real_sharpness_bar: sharpness.map(|(real, _, _, _)| real),
        max_sharpness_bar: sharpness.map(|(_, max, _, _)| max),
        raw_sharpness_modifier,
        elemental_sharpness_modifier,
        hits_multiplier,
        effective_defense,
        elemental_resistance: s.elemental_resistance_add,
        mechanics,
    })
}

fn postbase_ele_stat(
    b: &BaseValues,
    s: &SkillContributions,
    m: &MiscBuffContributions,
) -> BTreeMap<EleStat, f64> {
    b.base_ele_stat
        .iter()
        .map(|(&kind, &base)| {
            let buff_mul = if kind.is_elemental() {
                m.elemental_mul
            } else {
                1.0
            };
            let value = (f64::from(base) * s.ele_stat_mul_for(kind) * buff_mul).trunc()
                + s.ele_stat_add_for(kind);
            (kind, value)
        })
        .collect()
}

fn hits_multiplier(s: &SkillContributions, crit_chance: f64) -> f64 {
    let mut multiplier = 1.0;
    if let Some(index) = usize::from(s.razor_sharp_level).checked_sub(1) {
        if let Some(p) = RAZOR_SHARP_CHANCE.get(index) {
            multiplier *= 1.0 / (1.0 - p);
        }
    }
    if crit_chance > 0.0 {
        if let Some(index) = usize::from(s.masters_touch_level).checked_sub(1) {
            if let Some(p) = MASTERS_TOUCH_CHANCE.get(index) {
                multiplier *= 1.0 / (1.0 - p * crit_chance);
            }
        }
    }
    multiplier
}

fn post_process_mechanics(
    weapon_id: &str,
    mechanics: CategoryMechanics,
    s: &SkillContributions,
) -> Result<CategoryMechanics, CalcError> {
    match mechanics {
        CategoryMechanics::Bow(mut bow) => {
            if s.bow_charge_plus_level > 0 {
                let levels = bow.stats.charge_shot.len();
                let limit = usize::from(bow.charge_level_limit);
                if levels != limit && levels != limit + 1 {
                    return Err(CalcError::ChargeLevelMismatch {
                        weapon: weapon_id.to_string(),
                        levels,
                        limit: bow.charge_level_limit,
                    });
                }
                bow.charge_level_limit = u8::try_from(levels).unwrap_or(bow.charge_level_limit);
            }
            Ok(CategoryMechanics::Bow(bow))
        }
        other @ (CategoryMechanics::Plain
        | CategoryMechanics::Gunlance(_)
        | CategoryMechanics::HuntingHorn(_)
        | CategoryMechanics::SwitchAxe(_)
        | CategoryMechanics::ChargeBlade(_)
        | CategoryMechanics::InsectGlaive(_)
        | CategoryMechanics::Bowgun(_)) => Ok(other),
    }
}
