//! Weapon records as held by the database, plus the raw on-disk schema
//! (`weapons_<category>.json`) the loader reads them from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::data::mechanics::WeaponMechanics;
use crate::data::types::{EleStat, SharpnessBar, WeaponCategory};

/// One candidate in a rampage slot. `inherited_from` names a sibling weapon in
/// the same category when the choice is carried over from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RampSkillChoice {
    pub ramp_skill_id: String,
    pub inherited_from: Option<String>,
}

impl RampSkillChoice {
    pub fn new(ramp_skill_id: impl Into<String>) -> Self {
        Self {
            ramp_skill_id: ramp_skill_id.into(),
            inherited_from: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeaponSharpness {
    pub base: SharpnessBar,
    pub max: SharpnessBar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeaponRO {
    pub id: String,
    pub name: String,
    pub tree_name: String,
    pub category: WeaponCategory,
    pub rarity: u8,
    pub attack: i32,
    pub affinity: i32,
    pub defense: u32,
    pub deco_slots: Vec<u8>,
    pub ele_stat: BTreeMap<EleStat, u32>,
    pub ramp_skills: Vec<Vec<RampSkillChoice>>,
    /// Present for melee categories only.
    pub sharpness: Option<WeaponSharpness>,
    pub mechanics: WeaponMechanics,
}

impl WeaponRO {
    pub fn slot_count(&self) -> usize {
        self.ramp_skills.len()
    }

    /// True when the slot at `slot` offers `ramp_skill_id` as a candidate.
    pub fn slot_offers(&self, slot: usize, ramp_skill_id: &str) -> bool {
        self.ramp_skills
            .get(slot)
            .is_some_and(|choices| choices.iter().any(|c| c.ramp_skill_id == ramp_skill_id))
    }
}

/// Compact listing entry used by the HTTP API.
#[derive(Debug, Clone, Serialize)]
pub struct WeaponSummary {
    pub id: String,
    pub name: String,
    pub tree_name: String,
    pub category: WeaponCategory,
    pub rarity: u8,
    pub attack: i32,
    pub affinity: i32,
    pub ele_stat: BTreeMap<EleStat, u32>,
    pub rampage_slots: usize,
}

impl From<&WeaponRO> for WeaponSummary {
    fn from(weapon: &WeaponRO) -> Self {
        Self {
            id: weapon.id.clone(),
            name: weapon.name.clone(),
            tree_name: weapon.tree_name.clone(),
            category: weapon.category,
            rarity: weapon.rarity,
            attack: weapon.attack,
            affinity: weapon.affinity,
            ele_stat: weapon.ele_stat.clone(),
            rampage_slots: weapon.slot_count(),
        }
    }
}

/// `{ treeName: { weaponId: RawWeapon } }`
pub type RawCategoryFile = BTreeMap<String, BTreeMap<String, RawWeapon>>;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawWeapon {
    pub name: String,
    #[serde(default)]
    pub rarity: u8,
    pub attack: i64,
    #[serde(default)]
    pub affinity: i64,
    #[serde(default)]
    pub defense: i64,
    #[serde(default)]
    pub deco_slots: Vec<i64>,
    /// Keys are checked against the element/status names at load time so that
    /// a stray "none" key is reported rather than rejected by serde.
    #[serde(default)]
    pub ele_stat: BTreeMap<String, i64>,
    #[serde(default)]
    pub ramp_skills: Vec<Vec<(String, String)>>,
    pub base_sharpness: Option<Vec<i64>>,
    pub max_sharpness: Option<Vec<i64>>,
    pub gunlance_stats: Option<RawGunlanceStats>,
    pub huntinghorn_songs: Option<RawHuntingHornSongs>,
    pub switchaxe_stats: Option<RawSwitchAxeStats>,
    pub chargeblade_stats: Option<RawChargeBladeStats>,
    pub insectglaive_stats: Option<RawInsectGlaiveStats>,
    pub bow_stats: Option<RawBowStats>,
    pub bowgun_stats: Option<RawBowgunStats>,
}

impl RawWeapon {
    /// Names of the category payload fields that are present.
    pub fn present_payloads(&self) -> Vec<&'static str> {
        let mut present = Vec::new();
        if self.gunlance_stats.is_some() {
            present.push("gunlanceStats");
        }
        if self.huntinghorn_songs.is_some() {
            present.push("huntinghornSongs");
        }
        if self.switchaxe_stats.is_some() {
            present.push("switchaxeStats");
        }
        if self.chargeblade_stats.is_some() {
            present.push("chargebladeStats");
        }
        if self.insectglaive_stats.is_some() {
            present.push("insectglaiveStats");
        }
        if self.bow_stats.is_some() {
            present.push("bowStats");
        }
        if self.bowgun_stats.is_some() {
            present.push("bowgunStats");
        }
        present
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGunlanceStats {
    pub shelling_type: String,
    pub shelling_level: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawHuntingHornSongs {
    pub x_x: String,
    pub a_a: String,
    pub xa_xa: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSwitchAxeStats {
    pub phial_type: String,
    #[serde(default)]
    pub phial_value: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawChargeBladeStats {
    pub phial_type: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInsectGlaiveStats {
    pub kinsect_level: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBowStats {
    pub arc_shot: String,
    pub base_charge_level_limit: i64,
    /// `[[chargeShotTypeId, level], ...]`
    pub charge_shot: Vec<(String, i64)>,
    pub compatible_coatings: BTreeMap<String, i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBowgunDeviation {
    pub severity: i64,
    pub left: bool,
    pub right: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBowgunStats {
    pub deviation: RawBowgunDeviation,
    pub recoil: i64,
    pub reload: i64,
    /// `{ ammoKind: [[available, capacity], ...] }`, one pair per level.
    pub ammo: BTreeMap<String, Vec<(bool, i64)>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_weapon_reads_camel_case_fields() {
        let json = r#"{
            "name": "Kamura Cleaver I",
            "rarity": 1,
            "attack": 80,
            "affinity": -10,
            "defense": 0,
            "decoSlots": [1],
            "eleStat": {"fire": 10},
            "rampSkills": [[["attack_boost_1", ""], ["affinity_boost_1", "kamura_cleaver_0"]]],
            "baseSharpness": [50, 50, 20, 0, 0, 0],
            "maxSharpness": [50, 50, 20, 50, 0, 0]
        }"#;
        let raw: RawWeapon = serde_json::from_str(json).expect("parse");
        assert_eq!(raw.deco_slots, vec![1]);
        assert_eq!(raw.ele_stat.get("fire"), Some(&10));
        assert_eq!(raw.ramp_skills.len(), 1);
        assert_eq!(raw.ramp_skills[0][1].1, "kamura_cleaver_0");
        assert!(raw.present_payloads().is_empty());
    }

    #[test]
    fn slot_offers_checks_candidates() {
        let weapon = WeaponRO {
            id: "w".to_string(),
            name: "W".to_string(),
            tree_name: "Tree".to_string(),
            category: WeaponCategory::Hammer,
            rarity: 1,
            attack: 100,
            affinity: 0,
            defense: 0,
            deco_slots: Vec::new(),
            ele_stat: BTreeMap::new(),
            ramp_skills: vec![vec![
                RampSkillChoice::new("attack_boost_1"),
                RampSkillChoice::new("affinity_boost_1"),
            ]],
            sharpness: None,
            mechanics: WeaponMechanics::Plain,
        };
        assert!(weapon.slot_offers(0, "affinity_boost_1"));
        assert!(!weapon.slot_offers(0, "defense_boost_1"));
        assert!(!weapon.slot_offers(1, "attack_boost_1"));
    }
}
