//! Situational buffs (items, food, horn songs) folded into modifiers.

use crate::state::calc_state::{CalcState, MISC_BUFFS};

#[derive(Debug, Clone, PartialEq)]
pub struct MiscBuffContributions {
    pub raw_add: f64,
    pub raw_mul: f64,
    pub affinity_add: f64,
    /// Elemental only; statuses never take this multiplier.
    pub elemental_mul: f64,
    pub defense_add: f64,
    pub defense_mul: f64,
}

impl Default for MiscBuffContributions {
    fn default() -> Self {
        Self {
            raw_add: 0.0,
            raw_mul: 1.0,
            affinity_add: 0.0,
            elemental_mul: 1.0,
            defense_add: 0.0,
            defense_mul: 1.0,
        }
    }
}

enum Effect {
    RawAdd,
    RawMul,
    AffinityAdd,
    ElementalMul,
    DefenseAdd,
    DefenseMul,
}

/// Item id, affected value, and the value per state (index 0 is "off").
const BUFFS: &[(&str, Effect, &[f64])] = &[
    ("powercharm", Effect::RawAdd, &[0.0, 6.0]),
    ("powertalon", Effect::RawAdd, &[0.0, 9.0]),
    ("demondrug", Effect::RawAdd, &[0.0, 5.0, 7.0]),
    ("might_seed", Effect::RawAdd, &[0.0, 10.0, 10.0]),
    ("dango_booster", Effect::RawAdd, &[0.0, 9.0]),
    ("armorcharm", Effect::DefenseAdd, &[0.0, 12.0]),
    ("armortalon", Effect::DefenseAdd, &[0.0, 18.0]),
    ("armorskin", Effect::DefenseAdd, &[0.0, 15.0, 25.0]),
    ("adamant_seed", Effect::DefenseAdd, &[0.0, 20.0, 20.0]),
    ("hh_attack_up", Effect::RawMul, &[1.0, 1.10, 1.15]),
    ("hh_elemental_attack_boost", Effect::ElementalMul, &[1.0, 1.10]),
    ("hh_affinity_up", Effect::AffinityAdd, &[0.0, 20.0]),
    ("hh_defense_up", Effect::DefenseMul, &[1.0, 1.15, 1.20]),
];

pub fn resolve_misc_buffs(calc_state: &CalcState) -> MiscBuffContributions {
    let mut result = MiscBuffContributions::default();
    for (item, effect, values) in BUFFS {
        let state = calc_state.state(MISC_BUFFS, item);
        if state == 0 {
            continue;
        }
        // States are checked against the specification before this runs.
        let Some(value) = values.get(state).copied() else {
            continue;
        };
        match effect {
            Effect::RawAdd => result.raw_add += value,
            Effect::RawMul => result.raw_mul *= value,
            Effect::AffinityAdd => result.affinity_add += value,
            Effect::ElementalMul => result.elemental_mul *= value,
            Effect::DefenseAdd => result.defense_add += value,
            Effect::DefenseMul => result.defense_mul *= value,
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::calc_state::CalcStateSpecification;

    #[test]
    fn every_buff_matches_its_specification_item() {
        let spec = CalcStateSpecification::get();
        for (item, _, values) in BUFFS {
            let item_spec = spec.item(MISC_BUFFS, item).expect("item in specification");
            assert_eq!(item_spec.states.len(), values.len(), "{item}");
        }
    }

    #[test]
    fn additive_buffs_sum_and_songs_multiply() {
        let state = CalcState::new()
            .with_state(MISC_BUFFS, "powercharm", 1)
            .and_then(|s| s.with_state(MISC_BUFFS, "powertalon", 1))
            .and_then(|s| s.with_state(MISC_BUFFS, "demondrug", 2))
            .and_then(|s| s.with_state(MISC_BUFFS, "hh_attack_up", 2))
            .and_then(|s| s.with_state(MISC_BUFFS, "hh_affinity_up", 1))
            .expect("valid states");
        let buffs = resolve_misc_buffs(&state);
        assert_eq!(buffs.raw_add, 22.0);
        assert_eq!(buffs.raw_mul, 1.15);
        assert_eq!(buffs.affinity_add, 20.0);
        assert_eq!(buffs.elemental_mul, 1.0);
        assert_eq!(buffs.defense_mul, 1.0);
    }

    #[test]
    fn nothing_active_is_identity() {
        assert_eq!(
            resolve_misc_buffs(&CalcState::new()),
            MiscBuffContributions::default()
        );
    }
}
