//! Folds equipped skills into modifiers and gating levels.

use std::collections::BTreeMap;

use crate::calc::critical::{
    DEFAULT_ELEMENTAL_BLUNDER_MULTIPLIER, DEFAULT_ELEMENTAL_CRIT_MULTIPLIER,
    DEFAULT_RAW_BLUNDER_MULTIPLIER, DEFAULT_RAW_CRIT_MULTIPLIER,
};
use crate::calc::stacking::{StackContribution, StatKey, StatStacking};
use crate::data::database::GameDatabase;
use crate::data::types::EleStat;
use crate::error::CalcError;
use crate::state::calc_state::{CalcState, SKILL_CONDITIONS};

#[derive(Debug, Clone, PartialEq)]
pub struct SkillContributions {
    pub raw_add: f64,
    pub raw_mul: f64,
    pub affinity_add: f64,
    pub ele_stat_add: BTreeMap<EleStat, f64>,
    pub ele_stat_mul: BTreeMap<EleStat, f64>,
    pub raw_crit_dmg_multiplier: f64,
    pub raw_blunder_dmg_multiplier: f64,
    pub elemental_crit_dmg_multiplier: f64,
    pub elemental_blunder_dmg_multiplier: f64,
    pub defense_add: f64,
    pub defense_mul: f64,
    pub elemental_resistance_add: f64,
    pub raw_post_trunc_mul: f64,
    pub handicraft_level: u8,
    pub masters_touch_level: u8,
    pub razor_sharp_level: u8,
    pub bow_charge_plus_level: u8,
}

impl Default for SkillContributions {
    fn default() -> Self {
        Self {
            raw_add: 0.0,
            raw_mul: 1.0,
            affinity_add: 0.0,
            ele_stat_add: BTreeMap::new(),
            ele_stat_mul: BTreeMap::new(),
            raw_crit_dmg_multiplier: DEFAULT_RAW_CRIT_MULTIPLIER,
            raw_blunder_dmg_multiplier: DEFAULT_RAW_BLUNDER_MULTIPLIER,
            elemental_crit_dmg_multiplier: DEFAULT_ELEMENTAL_CRIT_MULTIPLIER,
            elemental_blunder_dmg_multiplier: DEFAULT_ELEMENTAL_BLUNDER_MULTIPLIER,
            defense_add: 0.0,
            defense_mul: 1.0,
            elemental_resistance_add: 0.0,
            raw_post_trunc_mul: 1.0,
            handicraft_level: 0,
            masters_touch_level: 0,
            razor_sharp_level: 0,
            bow_charge_plus_level: 0,
        }
    }
}

impl SkillContributions {
    pub fn ele_stat_add_for(&self, kind: EleStat) -> f64 {
        self.ele_stat_add.get(&kind).copied().unwrap_or(0.0)
    }

    pub fn ele_stat_mul_for(&self, kind: EleStat) -> f64 {
        self.ele_stat_mul.get(&kind).copied().unwrap_or(1.0)
    }
}

const ATTACK_BOOST_ADD: [f64; 7] = [3.0, 6.0, 9.0, 7.0, 8.0, 9.0, 10.0];
const ATTACK_BOOST_MUL: [f64; 7] = [1.0, 1.0, 1.0, 1.05, 1.06, 1.08, 1.10];
const CRITICAL_EYE_ADD: [f64; 7] = [5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 40.0];
const CRITICAL_BOOST: [f64; 3] = [1.30, 1.35, 1.40];
const CRITICAL_ELEMENT: [f64; 3] = [1.05, 1.10, 1.15];
const ELEMENT_ATTACK_ADD: [f64; 5] = [2.0, 3.0, 4.0, 4.0, 4.0];
const ELEMENT_ATTACK_MUL: [f64; 5] = [1.0, 1.0, 1.05, 1.10, 1.20];
const STATUS_ATTACK_ADD: [f64; 3] = [1.0, 2.0, 5.0];
const STATUS_ATTACK_MUL: [f64; 3] = [1.05, 1.10, 1.20];
const DEFENSE_BOOST_ADD: [f64; 7] = [5.0, 10.0, 10.0, 20.0, 20.0, 35.0, 35.0];
const DEFENSE_BOOST_MUL: [f64; 7] = [1.0, 1.0, 1.05, 1.05, 1.08, 1.08, 1.10];
const DEFENSE_BOOST_RES: [f64; 7] = [0.0, 0.0, 0.0, 3.0, 3.0, 5.0, 5.0];

const AGITATOR_RAW: [f64; 5] = [4.0, 8.0, 12.0, 16.0, 20.0];
const AGITATOR_AFFINITY: [f64; 5] = [3.0, 5.0, 7.0, 10.0, 15.0];
const WEAKNESS_EXPLOIT: [f64; 3] = [15.0, 30.0, 50.0];
const WEAKNESS_EXPLOIT_WOUNDED: [f64; 3] = [30.0, 45.0, 80.0];
const LATENT_POWER: [f64; 5] = [10.0, 20.0, 30.0, 40.0, 50.0];
const MAXIMUM_MIGHT: [f64; 3] = [10.0, 20.0, 30.0];
const CRITICAL_DRAW: [f64; 3] = [15.0, 30.0, 60.0];
const PEAK_PERFORMANCE: [f64; 3] = [5.0, 10.0, 20.0];
const RESENTMENT: [f64; 5] = [5.0, 10.0, 15.0, 20.0, 25.0];
const COUNTERSTRIKE: [f64; 3] = [10.0, 15.0, 25.0];
const OFFENSIVE_GUARD: [f64; 3] = [1.05, 1.10, 1.15];
const DRAGONHEART: [f64; 5] = [1.0, 1.0, 1.0, 1.05, 1.10];
const HEROICS: [f64; 5] = [1.0, 1.05, 1.05, 1.10, 1.30];
/// Indexed by carts (state 1 = one cart).
const FORTIFY_RAW: [f64; 2] = [1.10, 1.20];
const FORTIFY_DEFENSE: [f64; 2] = [1.15, 1.30];

/// Value for `level` (1-based) from a per-level table.
fn at_level(skill: &str, table: &[f64], level: u8, max: u8) -> Result<f64, CalcError> {
    usize::from(level)
        .checked_sub(1)
        .and_then(|index| table.get(index))
        .copied()
        .ok_or_else(|| CalcError::SkillLevelOutOfRange {
            skill: skill.to_string(),
            level,
            max,
        })
}

/// Element or status named by an `<ele>_attack` skill id.
fn attack_skill_target(skill_id: &str) -> Option<EleStat> {
    skill_id.strip_suffix("_attack")?.parse().ok()
}

pub fn resolve_skill_contributions(
    db: &GameDatabase,
    calc_state: &CalcState,
) -> Result<SkillContributions, CalcError> {
    let mut result = SkillContributions::default();
    let mut stacking: StatStacking<StatKey> = StatStacking::new();

    for (skill_id, level) in calc_state.skills() {
        let skill = db
            .skill(skill_id)
            .ok_or_else(|| CalcError::UnknownSkill(skill_id.to_string()))?;
        let max = skill.max_level;
        if level > max {
            return Err(CalcError::SkillLevelOutOfRange {
                skill: skill_id.to_string(),
                level,
                max,
            });
        }
        let value = |table: &[f64]| at_level(skill_id, table, level, max);
        let condition = calc_state.state(SKILL_CONDITIONS, skill_id);
        let active = calc_state.is_active(SKILL_CONDITIONS, skill_id);

        match skill_id {
            "attack_boost" => stacking.add_many([
                StackContribution::add(StatKey::Raw, value(&ATTACK_BOOST_ADD)?),
                StackContribution::mul(StatKey::Raw, value(&ATTACK_BOOST_MUL)?),
            ]),
            "critical_eye" => {
                stacking.add(StackContribution::add(StatKey::Affinity, value(&CRITICAL_EYE_ADD)?))
            }
            "critical_boost" => result.raw_crit_dmg_multiplier = value(&CRITICAL_BOOST)?,
            "critical_element" => {
                result.elemental_crit_dmg_multiplier = value(&CRITICAL_ELEMENT)?
            }
            "defense_boost" => stacking.add_many([
                StackContribution::add(StatKey::Defense, value(&DEFENSE_BOOST_ADD)?),
                StackContribution::mul(StatKey::Defense, value(&DEFENSE_BOOST_MUL)?),
                StackContribution::add(StatKey::ElementalResistance, value(&DEFENSE_BOOST_RES)?),
            ]),
            "handicraft" => result.handicraft_level = level,
            "masters_touch" => result.masters_touch_level = level,
            "razor_sharp" => result.razor_sharp_level = level,
            "bow_charge_plus" => result.bow_charge_plus_level = level,

            "agitator" if active => stacking.add_many([
                StackContribution::add(StatKey::Raw, value(&AGITATOR_RAW)?),
                StackContribution::add(StatKey::Affinity, value(&AGITATOR_AFFINITY)?),
            ]),
            "weakness_exploit" if active => {
                let table = if condition >= 2 {
                    &WEAKNESS_EXPLOIT_WOUNDED
                } else {
                    &WEAKNESS_EXPLOIT
                };
                stacking.add(StackContribution::add(StatKey::Affinity, value(table)?));
            }
            "latent_power" if active => {
                stacking.add(StackContribution::add(StatKey::Affinity, value(&LATENT_POWER)?))
            }
            "maximum_might" if active => {
                stacking.add(StackContribution::add(StatKey::Affinity, value(&MAXIMUM_MIGHT)?))
            }
            "critical_draw" if active => {
                stacking.add(StackContribution::add(StatKey::Affinity, value(&CRITICAL_DRAW)?))
            }
            "peak_performance" if active => {
                stacking.add(StackContribution::add(StatKey::Raw, value(&PEAK_PERFORMANCE)?))
            }
            "resentment" if active => {
                stacking.add(StackContribution::add(StatKey::Raw, value(&RESENTMENT)?))
            }
            "counterstrike" if active => {
                stacking.add(StackContribution::add(StatKey::Raw, value(&COUNTERSTRIKE)?))
            }
            "offensive_guard" if active => {
                stacking.add(StackContribution::mul(StatKey::Raw, value(&OFFENSIVE_GUARD)?))
            }
            "dragonheart" if active => {
                stacking.add(StackContribution::mul(StatKey::Raw, value(&DRAGONHEART)?))
            }
            "heroics" if active => {
                stacking.add(StackContribution::mul(StatKey::Raw, value(&HEROICS)?))
            }
            "fortify" if active => {
                let carts = condition.min(FORTIFY_RAW.len());
                stacking.add_many([
                    StackContribution::mul(StatKey::Raw, FORTIFY_RAW[carts - 1]),
                    StackContribution::mul(StatKey::Defense, FORTIFY_DEFENSE[carts - 1]),
                ]);
            }

            other => {
                if let Some(kind) = attack_skill_target(other) {
                    let (add, mul) = if kind.is_elemental() {
                        (&ELEMENT_ATTACK_ADD[..], &ELEMENT_ATTACK_MUL[..])
                    } else {
                        (&STATUS_ATTACK_ADD[..], &STATUS_ATTACK_MUL[..])
                    };
                    stacking.add_many([
                        StackContribution::add(StatKey::EleStat(kind), value(add)?),
                        StackContribution::mul(StatKey::EleStat(kind), value(mul)?),
                    ]);
                }
            }
        }
    }

    for (key, totals) in stacking.iter() {
        match key {
            StatKey::Raw => {
                result.raw_add = totals.add;
                result.raw_mul = totals.mul;
            }
            StatKey::Affinity => result.affinity_add = totals.add,
            StatKey::EleStat(kind) => {
                result.ele_stat_add.insert(*kind, totals.add);
                result.ele_stat_mul.insert(*kind, totals.mul);
            }
            StatKey::Defense => {
                result.defense_add = totals.add;
                result.defense_mul = totals.mul;
            }
            StatKey::ElementalResistance => result.elemental_resistance_add = totals.add,
        }
    }

    tracing::debug!(
        raw_add = result.raw_add,
        raw_mul = result.raw_mul,
        affinity_add = result.affinity_add,
        handicraft = result.handicraft_level,
        "skill contributions resolved"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attack_skill_ids_map_to_their_type() {
        assert_eq!(attack_skill_target("fire_attack"), Some(EleStat::Fire));
        assert_eq!(attack_skill_target("blast_attack"), Some(EleStat::Blast));
        assert_eq!(attack_skill_target("attack_boost"), None);
        assert_eq!(attack_skill_target("none_attack"), None);
    }

    #[test]
    fn at_level_is_one_based() {
        assert_eq!(at_level("x", &CRITICAL_BOOST, 1, 3), Ok(1.30));
        assert_eq!(at_level("x", &CRITICAL_BOOST, 3, 3), Ok(1.40));
        assert!(at_level("x", &CRITICAL_BOOST, 0, 3).is_err());
        assert!(at_level("x", &CRITICAL_BOOST, 4, 3).is_err());
    }

    #[test]
    fn conditional_skills_wait_for_their_condition() {
        let db = GameDatabase::empty();
        let mut state = CalcState::new()
            .with_skill(&db, "agitator", 5)
            .and_then(|state| state.with_skill(&db, "weakness_exploit", 3))
            .expect("skills");

        let idle = resolve_skill_contributions(&db, &state).expect("idle");
        assert_eq!(idle.raw_add, 0.0);
        assert_eq!(idle.affinity_add, 0.0);
        assert_eq!(idle.raw_post_trunc_mul, 1.0);

        state.set_state(SKILL_CONDITIONS, "agitator", 1).expect("agitator on");
        state.set_state(SKILL_CONDITIONS, "weakness_exploit", 2).expect("wounded");
        let active = resolve_skill_contributions(&db, &state).expect("active");
        assert_eq!(active.raw_add, 20.0);
        assert_eq!(active.affinity_add, 15.0 + 80.0);
    }
}
