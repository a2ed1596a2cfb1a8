#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::PathBuf;

use mhrb::data::mechanics::{
    BowStats, BowgunDeviation, BowgunStats, ChargeShotLevel, Coating, CoatingSupport, GunlanceStats, InsectGlaiveStats,
    MechanicTables, WeaponMechanics,
};
use mhrb::data::types::{EleStat, SharpnessBar, WeaponCategory};
use mhrb::data::weapon::{RampSkillChoice, WeaponRO, WeaponSharpness};
use mhrb::GameDatabase;

pub const EPSILON: f64 = 1e-9;

pub fn approx_eq(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < EPSILON
}

#[track_caller]
pub fn assert_approx(actual: f64, expected: f64) {
    assert!(
        approx_eq(actual, expected),
        "expected {expected}, got {actual}"
    );
}

pub fn sample_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn bar(hits: [u32; 6]) -> SharpnessBar {
    SharpnessBar::new(hits)
}

fn slots(picks: &[&[&str]]) -> Vec<Vec<RampSkillChoice>> {
    picks
        .iter()
        .map(|slot| slot.iter().map(|id| RampSkillChoice::new(*id)).collect())
        .collect()
}

pub fn weapon(category: WeaponCategory, id: &str, attack: i32) -> WeaponRO {
    WeaponRO {
        id: id.to_string(),
        name: id.replace('_', " "),
        tree_name: "Fixture".to_string(),
        category,
        rarity: 1,
        attack,
        affinity: 0,
        defense: 0,
        deco_slots: Vec::new(),
        ele_stat: BTreeMap::new(),
        ramp_skills: Vec::new(),
        sharpness: None,
        mechanics: WeaponMechanics::Plain,
    }
}

pub fn melee(
    category: WeaponCategory,
    id: &str,
    attack: i32,
    base: [u32; 6],
    max: [u32; 6],
) -> WeaponRO {
    WeaponRO {
        sharpness: Some(WeaponSharpness {
            base: bar(base),
            max: bar(max),
        }),
        ..weapon(category, id, attack)
    }
}

/// Full white bar: Handicraft cannot extend it.
pub const WHITE_FULL: [u32; 6] = [10, 10, 10, 10, 10, 60];
/// Ends in green at Handicraft 0, blue from Handicraft 1.
pub const GREEN_TO_BLUE_BASE: [u32; 6] = [100, 50, 50, 50, 0, 0];
pub const GREEN_TO_BLUE_MAX: [u32; 6] = [100, 50, 50, 50, 50, 0];

pub fn bow_stats(charge_levels: &[u8], base_limit: u8) -> BowStats {
    let tables = MechanicTables::builtin();
    BowStats {
        arc_shot: tables.arc_shots["recovery"].clone(),
        base_charge_level_limit: base_limit,
        charge_shot: charge_levels
            .iter()
            .map(|level| ChargeShotLevel {
                shot_type: tables.charge_shots["rapid"].clone(),
                level: *level,
            })
            .collect(),
        compatible_coatings: Coating::ALL
            .into_iter()
            .map(|coating| (coating, CoatingSupport::Compatible))
            .collect(),
    }
}

pub fn bowgun_stats(recoil: u8, reload: u8) -> BowgunStats {
    BowgunStats {
        deviation: BowgunDeviation {
            severity: 0,
            left: false,
            right: false,
        },
        recoil,
        reload,
        ammo: BTreeMap::new(),
    }
}

pub fn fixture_weapons() -> Vec<WeaponRO> {
    let tables = MechanicTables::builtin();

    let mut fire_blades = melee(
        WeaponCategory::DualBlades,
        "fire_blades",
        150,
        WHITE_FULL,
        WHITE_FULL,
    );
    fire_blades.ele_stat = BTreeMap::from([(EleStat::Fire, 20)]);
    fire_blades.affinity = 60;

    let mut poison_blades = melee(
        WeaponCategory::DualBlades,
        "poison_blades",
        150,
        WHITE_FULL,
        WHITE_FULL,
    );
    poison_blades.ele_stat = BTreeMap::from([(EleStat::Poison, 20)]);
    poison_blades.affinity = 60;

    let mut ramp_hammer = melee(
        WeaponCategory::Hammer,
        "ramp_hammer",
        100,
        WHITE_FULL,
        WHITE_FULL,
    );
    ramp_hammer.ramp_skills = slots(&[
        &["attack_boost_1", "non_elemental_boost"],
        &["affinity_boost_1", "attack_surge"],
    ]);

    let mut fire_sns = melee(
        WeaponCategory::SwordAndShield,
        "fire_sns",
        100,
        WHITE_FULL,
        WHITE_FULL,
    );
    fire_sns.ele_stat = BTreeMap::from([(EleStat::Fire, 20)]);
    fire_sns.ramp_skills = slots(&[&["non_elemental_boost", "fire_boost_1", "water_boost_1", "ice_1"]]);

    let mut gunlance = melee(
        WeaponCategory::Gunlance,
        "fixture_gunlance",
        100,
        WHITE_FULL,
        WHITE_FULL,
    );
    gunlance.mechanics = WeaponMechanics::Gunlance(GunlanceStats {
        shelling_type: tables.shelling_types["normal"].clone(),
        shelling_level: 2,
    });
    gunlance.ramp_skills = slots(&[&["wide_shelling_type", "kinsect_level_boost"]]);

    let mut glaive = melee(
        WeaponCategory::InsectGlaive,
        "fixture_glaive",
        100,
        WHITE_FULL,
        WHITE_FULL,
    );
    glaive.mechanics = WeaponMechanics::InsectGlaive(InsectGlaiveStats { kinsect_level: 8 });
    glaive.ramp_skills = slots(&[&["kinsect_level_boost"]]);

    let mut bow = weapon(WeaponCategory::Bow, "fixture_bow", 100);
    bow.mechanics = WeaponMechanics::Bow(bow_stats(&[1, 2, 3, 4], 3));

    let mut full_bow = weapon(WeaponCategory::Bow, "full_bow", 100);
    full_bow.mechanics = WeaponMechanics::Bow(bow_stats(&[1, 2, 3, 4], 4));

    let mut broken_bow = weapon(WeaponCategory::Bow, "broken_bow", 100);
    broken_bow.mechanics = WeaponMechanics::Bow(bow_stats(&[1, 2, 3, 4, 5], 3));

    let mut lbg = weapon(WeaponCategory::LightBowgun, "fixture_lbg", 100);
    lbg.mechanics = WeaponMechanics::Bowgun(bowgun_stats(1, 8));
    lbg.ramp_skills = slots(&[&["recoil_down_boost", "reload_speed_boost", "attack_surge"]]);

    let mut hbg = weapon(WeaponCategory::HeavyBowgun, "fixture_hbg", 99);
    hbg.mechanics = WeaponMechanics::Bowgun(bowgun_stats(0, 4));
    hbg.ramp_skills = slots(&[&["recoil_down_boost"]]);

    vec![
        melee(
            WeaponCategory::Greatsword,
            "white_greatsword",
            140,
            WHITE_FULL,
            WHITE_FULL,
        ),
        melee(
            WeaponCategory::Greatsword,
            "handicraft_greatsword",
            200,
            GREEN_TO_BLUE_BASE,
            GREEN_TO_BLUE_MAX,
        ),
        melee(
            WeaponCategory::Longsword,
            "broken_longsword",
            200,
            [100, 0, 0, 0, 0, 0],
            [100, 0, 0, 0, 10, 0],
        ),
        weapon(WeaponCategory::Longsword, "dull_longsword", 200),
        lbg,
        hbg,
        fire_blades,
        poison_blades,
        ramp_hammer,
        fire_sns,
        gunlance,
        glaive,
        bow,
        full_bow,
        broken_bow,
    ]
}

pub fn fixture_db() -> GameDatabase {
    GameDatabase::new(fixture_weapons())
}
