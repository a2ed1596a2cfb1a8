//! Built-in rampage-skill table. Each record carries the base-value effect the
//! resolver applies when the skill is picked.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::types::EleStat;

pub const MAX_RAMPAGE_SLOTS: usize = 6;

/// Post-truncation raw multiplier granted by Non-elemental Boost.
pub const NON_ELEMENTAL_BOOST_MUL: f64 = 1.05;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum RampageEffect {
    /// Situational; no base-value change.
    None,
    RawAdd { value: i32 },
    AffinityAdd { value: i32 },
    DefenseAdd { value: u32 },
    /// Adds to every element/status the weapon carries.
    AllEleStatAdd { value: u32 },
    /// Adds to one element/status the weapon must already carry.
    EleStatAdd { kind: EleStat, value: u32 },
    /// Replaces the whole element/status map with a single entry.
    EleStatReplace { kind: EleStat, value: u32 },
    Surge {
        raw: i32,
        affinity: i32,
        ele_stat: u32,
    },
    NonElementalBoost,
    ShellingType { shelling_type: String },
    KinsectLevelUp,
    RecoilDown,
    ReloadSpeedUp,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RampageSkillRO {
    pub id: String,
    pub short_id: String,
    pub name: String,
    pub effect: RampageEffect,
}

const NUMERALS: [&str; 4] = ["I", "II", "III", "IV"];

const ELEMENT_PREFIXES: [(EleStat, &str); 5] = [
    (EleStat::Fire, "fi"),
    (EleStat::Water, "wa"),
    (EleStat::Thunder, "th"),
    (EleStat::Ice, "ic"),
    (EleStat::Dragon, "dr"),
];

const STATUS_PREFIXES: [(EleStat, &str); 4] = [
    (EleStat::Poison, "po"),
    (EleStat::Paralysis, "pa"),
    (EleStat::Sleep, "sl"),
    (EleStat::Blast, "bl"),
];

const ELEMENT_BOOSTS: [u32; 4] = [4, 6, 8, 10];
const ELEMENT_CONVERSIONS: [u32; 4] = [15, 20, 25, 30];
const STATUS_BOOSTS: [u32; 3] = [3, 5, 7];
const STATUS_CONVERSIONS: [u32; 3] = [10, 15, 20];

struct Table(BTreeMap<String, RampageSkillRO>);

impl Table {
    fn add(&mut self, id: &str, short_id: &str, name: &str, effect: RampageEffect) {
        self.0.insert(
            id.to_string(),
            RampageSkillRO {
                id: id.to_string(),
                short_id: short_id.to_string(),
                name: name.to_string(),
                effect,
            },
        );
    }

    fn add_tiers(&mut self, id: &str, first_short_id: u32, name: &str, tiers: &[RampageEffect]) {
        for (index, effect) in tiers.iter().enumerate() {
            self.add(
                &format!("{id}_{}", index + 1),
                &(first_short_id + 10 * index as u32).to_string(),
                &format!("{name} {}", NUMERALS[index]),
                effect.clone(),
            );
        }
    }

    fn add_ele_stat(&mut self, kind: EleStat, prefix: &str, boosts: &[u32], conversions: &[u32]) {
        let id = kind.as_str();
        let name = kind.display_name();
        for (index, value) in boosts.iter().enumerate() {
            self.add(
                &format!("{id}_boost_{}", index + 1),
                &format!("{prefix}b{}", index + 1),
                &format!("{name} Boost {}", NUMERALS[index]),
                RampageEffect::EleStatAdd { kind, value: *value },
            );
        }
        for (index, value) in conversions.iter().enumerate() {
            self.add(
                &format!("{id}_{}", index + 1),
                &format!("{prefix}x{}", index + 1),
                &format!("{name} {}", NUMERALS[index]),
                RampageEffect::EleStatReplace { kind, value: *value },
            );
        }
    }
}

pub fn builtin_rampage_skills() -> BTreeMap<String, RampageSkillRO> {
    use RampageEffect as E;

    let mut table = Table(BTreeMap::new());

    table.add_tiers(
        "attack_boost",
        10,
        "Attack Boost",
        &[4, 6, 8, 10].map(|value| E::RawAdd { value }),
    );
    table.add_tiers(
        "affinity_boost",
        50,
        "Affinity Boost",
        &[4, 6, 8, 10].map(|value| E::AffinityAdd { value }),
    );
    table.add_tiers(
        "elemental_boost",
        90,
        "Elemental Boost",
        &[3, 5, 7].map(|value| E::AllEleStatAdd { value }),
    );
    table.add_tiers(
        "defense_boost",
        120,
        "Defense Boost",
        &[10, 20, 30].map(|value| E::DefenseAdd { value }),
    );
    table.add_tiers(
        "sharpness_type",
        150,
        "Sharpness Type",
        &[E::None, E::None, E::None],
    );
    table.add("defense_grinder_1", "180", "Defense Grinder I", E::None);
    table.add(
        "attack_surge",
        "190",
        "Attack Surge",
        E::Surge { raw: 20, affinity: -30, ele_stat: 0 },
    );
    table.add(
        "elemental_surge",
        "200",
        "Elemental Surge",
        E::Surge { raw: -10, affinity: 0, ele_stat: 10 },
    );
    table.add(
        "affinity_surge",
        "210",
        "Affinity Surge",
        E::Surge { raw: -10, affinity: 20, ele_stat: 0 },
    );
    table.add("anti_aquatic_species", "220", "Anti-Aquatic Species", E::None);
    table.add("fireblight_exploit", "230", "Fireblight Exploit", E::None);
    table.add("waterblight_exploit", "240", "Waterblight Exploit", E::None);
    table.add("teostra_soul", "250", "Teostra Soul", E::None);
    table.add("buddy_rally", "260", "Buddy Rally", E::None);
    table.add("brutal_strike", "270", "Brutal Strike", E::None);
    table.add("dulling_strike", "280", "Dulling Strike", E::None);
    table.add("lasting_arc_shot", "290", "Lasting Arc Shot", E::None);
    table.add("master_rider", "300", "Master Rider", E::None);
    table.add("non_elemental_boost", "310", "Non-elemental Boost", E::NonElementalBoost);
    table.add("spiribird_doubled", "320", "Spiribird Doubled", E::None);

    for (shelling, short_id, name) in [
        ("normal", "330", "Normal Shelling Type"),
        ("long", "340", "Long Shelling Type"),
        ("wide", "350", "Wide Shelling Type"),
    ] {
        table.add(
            &format!("{shelling}_shelling_type"),
            short_id,
            name,
            E::ShellingType { shelling_type: shelling.to_string() },
        );
    }
    table.add("kinsect_level_boost", "360", "Kinsect Level Boost", E::KinsectLevelUp);
    table.add("recoil_down_boost", "370", "Recoil Down Boost", E::RecoilDown);
    table.add("reload_speed_boost", "380", "Reload Speed Boost", E::ReloadSpeedUp);

    for (kind, prefix) in ELEMENT_PREFIXES {
        table.add_ele_stat(kind, prefix, &ELEMENT_BOOSTS, &ELEMENT_CONVERSIONS);
    }
    for (kind, prefix) in STATUS_PREFIXES {
        table.add_ele_stat(kind, prefix, &STATUS_BOOSTS, &STATUS_CONVERSIONS);
    }

    table.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_ids_follow_game_naming() {
        let table = builtin_rampage_skills();
        assert_eq!(table["attack_boost_3"].name, "Attack Boost III");
        assert_eq!(table["attack_boost_3"].short_id, "30");
        assert_eq!(table["fire_boost_4"].short_id, "fib4");
        assert_eq!(table["blast_2"].name, "Blast II");
        assert!(!table.contains_key("blast_boost_4"));
        assert!(!table.contains_key("poison_4"));
    }

    #[test]
    fn short_ids_do_not_collide() {
        let table = builtin_rampage_skills();
        let short_ids: HashSet<_> = table.values().map(|r| r.short_id.as_str()).collect();
        assert_eq!(short_ids.len(), table.len());
    }

    #[test]
    fn effects_match_tier_values() {
        let table = builtin_rampage_skills();
        assert_eq!(table["affinity_boost_4"].effect, RampageEffect::AffinityAdd { value: 10 });
        assert_eq!(
            table["ice_2"].effect,
            RampageEffect::EleStatReplace { kind: EleStat::Ice, value: 20 }
        );
        assert_eq!(
            table["sleep_boost_1"].effect,
            RampageEffect::EleStatAdd { kind: EleStat::Sleep, value: 3 }
        );
        assert_eq!(table["brutal_strike"].effect, RampageEffect::None);
    }

    #[test]
    fn effect_tag_does_not_clash_with_element_kind() {
        let add = serde_json::to_value(RampageEffect::EleStatAdd {
            kind: EleStat::Sleep,
            value: 3,
        })
        .expect("serialize add");
        assert_eq!(add["effect"], "ele_stat_add");
        assert_eq!(add["kind"], serde_json::to_value(EleStat::Sleep).expect("kind"));
        assert_eq!(add["value"], 3);

        let replace = serde_json::to_value(&builtin_rampage_skills()["ice_2"]).expect("record");
        assert_eq!(replace["effect"]["effect"], "ele_stat_replace");
        assert_eq!(replace["effect"]["value"], 20);
    }
}
