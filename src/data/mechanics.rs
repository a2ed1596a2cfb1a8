//! Weapon-category mechanics: the built-in lookup tables (shelling types, songs,
//! phials, bow shots, bowgun ammo) and the per-weapon payloads that reference them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::data::types::WeaponCategory;

pub const MAX_SHELLING_LEVEL: u8 = 5;
pub const MAX_KINSECT_LEVEL: u8 = 8;
pub const MAX_BOWGUN_RECOIL: u8 = 5;
pub const MAX_BOWGUN_RELOAD: u8 = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellingTypeRO {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongRO {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwitchAxePhialTypeRO {
    pub id: String,
    pub name: String,
    /// Status/dragon phials carry a numeric value; power phials do not.
    pub has_value: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChargeBladePhialTypeRO {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArcShotTypeRO {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChargeShotTypeRO {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmmoTypeRO {
    pub id: String,
    pub name: String,
}

fn entry<T>(id: &str, make: impl FnOnce(String) -> T) -> (String, T) {
    (id.to_string(), make(id.to_string()))
}

/// Read-only mechanic lookup tables keyed by id.
#[derive(Debug, Clone)]
pub struct MechanicTables {
    pub shelling_types: BTreeMap<String, ShellingTypeRO>,
    pub songs: BTreeMap<String, SongRO>,
    pub switch_axe_phials: BTreeMap<String, SwitchAxePhialTypeRO>,
    pub charge_blade_phials: BTreeMap<String, ChargeBladePhialTypeRO>,
    pub arc_shots: BTreeMap<String, ArcShotTypeRO>,
    pub charge_shots: BTreeMap<String, ChargeShotTypeRO>,
    pub ammo_types: BTreeMap<String, AmmoTypeRO>,
}

const SHELLING_TYPES: &[(&str, &str)] = &[("normal", "Normal"), ("long", "Long"), ("wide", "Wide")];

const SONGS: &[(&str, &str)] = &[
    ("self_improvement", "Self-Improvement"),
    ("attack_up", "Attack Up"),
    ("health_recovery_s", "Health Recovery (S)"),
    ("health_recovery_s_antidote", "Health Recovery (S) + Antidote"),
    ("health_recovery_l", "Health Recovery (L)"),
    ("stun_negated", "Stun Negated"),
    ("tremors_negated", "Tremors Negated"),
    ("earplugs_s", "Earplugs (S)"),
    ("earplugs_l", "Earplugs (L)"),
    ("wind_pressure_negated", "Wind Pressure Negated"),
    ("defense_up", "Defense Up"),
    ("elemental_attack_boost", "Elemental Attack Boost"),
    ("affinity_up", "Affinity Up"),
    ("sonic_waves", "Sonic Waves"),
    ("stamina_use_reduced", "Stamina Use Reduced"),
    ("knockbacks_negated", "Knockbacks Negated"),
    ("divine_protection", "Divine Protection"),
    ("recovery_speed_up", "Recovery Speed Up"),
    ("blight_negated", "Blight Negated"),
    ("sharpness_loss_reduced", "Sharpness Loss Reduced"),
    ("all_ailments_negated", "All Ailments Negated"),
    ("environment_damage_negated", "Environment Damage Negated"),
    ("infernal_melody", "Infernal Melody"),
];

const SWITCH_AXE_PHIALS: &[(&str, &str, bool)] = &[
    ("power_phial", "Power Phial", false),
    ("power_element_phial", "Power Element Phial", false),
    ("dragon_phial", "Dragon Phial", true),
    ("exhaust_phial", "Exhaust Phial", true),
    ("paralysis_phial", "Paralysis Phial", true),
    ("poison_phial", "Poison Phial", true),
];

const CHARGE_BLADE_PHIALS: &[(&str, &str)] =
    &[("impact_phial", "Impact Phial"), ("element_phial", "Element Phial")];

const ARC_SHOTS: &[(&str, &str)] = &[
    ("recovery", "Recovery"),
    ("affinity", "Affinity"),
    ("brace", "Brace"),
];

const CHARGE_SHOTS: &[(&str, &str)] =
    &[("rapid", "Rapid"), ("spread", "Spread"), ("pierce", "Pierce")];

/// Base ammo kinds with their number of levels. Kinds with more than one level
/// expand to `<kind>_<n>` ids.
pub const AMMO_KINDS: &[(&str, &str, u8)] = &[
    ("normal", "Normal", 3),
    ("pierce", "Pierce", 3),
    ("spread", "Spread", 3),
    ("shrapnel", "Shrapnel", 3),
    ("sticky", "Sticky", 3),
    ("cluster", "Cluster", 3),
    ("recover", "Recover", 2),
    ("poison", "Poison", 2),
    ("paralysis", "Paralysis", 2),
    ("sleep", "Sleep", 2),
    ("exhaust", "Exhaust", 2),
    ("flaming", "Flaming", 1),
    ("water", "Water", 1),
    ("thunder", "Thunder", 1),
    ("freeze", "Freeze", 1),
    ("dragon", "Dragon", 1),
    ("slicing", "Slicing", 1),
    ("wyvern", "Wyvern", 1),
    ("demon", "Demon", 1),
    ("armor", "Armor", 1),
    ("tranq", "Tranq", 1),
];

impl MechanicTables {
    pub fn builtin() -> Self {
        let named = |list: &[(&str, &str)]| -> Vec<(String, String)> {
            list.iter()
                .map(|(id, name)| (id.to_string(), name.to_string()))
                .collect()
        };

        let shelling_types = named(SHELLING_TYPES)
            .into_iter()
            .map(|(id, name)| entry(&id, |id| ShellingTypeRO { id, name }))
            .collect();
        let songs = named(SONGS)
            .into_iter()
            .map(|(id, name)| entry(&id, |id| SongRO { id, name }))
            .collect();
        let switch_axe_phials = SWITCH_AXE_PHIALS
            .iter()
            .map(|(id, name, has_value)| {
                entry(id, |id| SwitchAxePhialTypeRO {
                    id,
                    name: name.to_string(),
                    has_value: *has_value,
                })
            })
            .collect();
        let charge_blade_phials = named(CHARGE_BLADE_PHIALS)
            .into_iter()
            .map(|(id, name)| entry(&id, |id| ChargeBladePhialTypeRO { id, name }))
            .collect();
        let arc_shots = named(ARC_SHOTS)
            .into_iter()
            .map(|(id, name)| entry(&id, |id| ArcShotTypeRO { id, name }))
            .collect();
        let charge_shots = named(CHARGE_SHOTS)
            .into_iter()
            .map(|(id, name)| entry(&id, |id| ChargeShotTypeRO { id, name }))
            .collect();

        let mut ammo_types = BTreeMap::new();
        for (kind, name, levels) in AMMO_KINDS {
            if *levels == 1 {
                ammo_types.insert(
                    kind.to_string(),
                    AmmoTypeRO {
                        id: kind.to_string(),
                        name: format!("{name} Ammo"),
                    },
                );
            } else {
                for level in 1..=*levels {
                    let id = format!("{kind}_{level}");
                    ammo_types.insert(
                        id.clone(),
                        AmmoTypeRO {
                            id,
                            name: format!("{name} Ammo {level}"),
                        },
                    );
                }
            }
        }

        Self {
            shelling_types,
            songs,
            switch_axe_phials,
            charge_blade_phials,
            arc_shots,
            charge_shots,
            ammo_types,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GunlanceStats {
    pub shelling_type: ShellingTypeRO,
    pub shelling_level: u8,
}

/// The three melodies of a hunting horn, keyed by the input that plays them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HuntingHornSongs {
    pub x: SongRO,
    pub a: SongRO,
    pub xa: SongRO,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwitchAxeStats {
    pub phial_type: SwitchAxePhialTypeRO,
    pub phial_value: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChargeBladeStats {
    pub phial_type: ChargeBladePhialTypeRO,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsectGlaiveStats {
    pub kinsect_level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Coating {
    #[serde(rename = "close_range_coating")]
    CloseRange,
    #[serde(rename = "power_coating")]
    Power,
    #[serde(rename = "poison_coating")]
    Poison,
    #[serde(rename = "para_coating")]
    Para,
    #[serde(rename = "sleep_coating")]
    Sleep,
    #[serde(rename = "blast_coating")]
    Blast,
    #[serde(rename = "exhaust_coating")]
    Exhaust,
}

impl Coating {
    pub const ALL: [Coating; 7] = [
        Self::CloseRange,
        Self::Power,
        Self::Poison,
        Self::Para,
        Self::Sleep,
        Self::Blast,
        Self::Exhaust,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CloseRange => "close_range_coating",
            Self::Power => "power_coating",
            Self::Poison => "poison_coating",
            Self::Para => "para_coating",
            Self::Sleep => "sleep_coating",
            Self::Blast => "blast_coating",
            Self::Exhaust => "exhaust_coating",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|coating| coating.as_str() == id)
    }
}

/// Tri-state coating support as stored in the weapon data (0, 1 or 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoatingSupport {
    Incompatible,
    Compatible,
    Boosted,
}

impl CoatingSupport {
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(Self::Incompatible),
            1 => Some(Self::Compatible),
            2 => Some(Self::Boosted),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChargeShotLevel {
    pub shot_type: ChargeShotTypeRO,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BowStats {
    pub arc_shot: ArcShotTypeRO,
    pub base_charge_level_limit: u8,
    /// One entry per charge level; may be one longer than the base limit.
    pub charge_shot: Vec<ChargeShotLevel>,
    pub compatible_coatings: BTreeMap<Coating, CoatingSupport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BowgunDeviation {
    pub severity: u8,
    pub left: bool,
    pub right: bool,
}

impl BowgunDeviation {
    pub fn display_name(&self) -> String {
        if self.severity == 0 {
            return "None".to_string();
        }
        let strength = if self.severity == 1 { "Mild" } else { "Severe" };
        let direction = match (self.left, self.right) {
            (true, true) => "LR ",
            (true, false) => "L ",
            (false, true) => "R ",
            (false, false) => "",
        };
        format!("{direction}{strength}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmmoCapacity {
    pub ammo_type: AmmoTypeRO,
    pub available: bool,
    pub capacity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BowgunStats {
    pub deviation: BowgunDeviation,
    /// 0 (smallest) to 5 (high).
    pub recoil: u8,
    /// 0 (slowest) to 8 (fastest).
    pub reload: u8,
    pub ammo: BTreeMap<String, AmmoCapacity>,
}

pub fn recoil_name(recoil: u8) -> Option<&'static str> {
    match recoil {
        0 => Some("Smallest"),
        1 => Some("Very Low"),
        2 => Some("Low"),
        3 => Some("Some"),
        4 => Some("Average"),
        5 => Some("High"),
        _ => None,
    }
}

pub fn reload_name(reload: u8) -> Option<&'static str> {
    match reload {
        0 => Some("Slowest"),
        1 => Some("Very Slow"),
        2 => Some("Slow"),
        3 => Some("Below Avg."),
        4 => Some("Average"),
        5 => Some("Above Avg."),
        6 => Some("Fast"),
        7 => Some("Very Fast"),
        8 => Some("Fastest"),
        _ => None,
    }
}

/// Which mechanic payload a category carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MechanicKind {
    Plain,
    Gunlance,
    HuntingHorn,
    SwitchAxe,
    ChargeBlade,
    InsectGlaive,
    Bow,
    Bowgun,
}

impl MechanicKind {
    pub const fn for_category(category: WeaponCategory) -> Self {
        match category {
            WeaponCategory::Greatsword
            | WeaponCategory::Longsword
            | WeaponCategory::SwordAndShield
            | WeaponCategory::DualBlades
            | WeaponCategory::Hammer
            | WeaponCategory::Lance => Self::Plain,
            WeaponCategory::Gunlance => Self::Gunlance,
            WeaponCategory::HuntingHorn => Self::HuntingHorn,
            WeaponCategory::SwitchAxe => Self::SwitchAxe,
            WeaponCategory::ChargeBlade => Self::ChargeBlade,
            WeaponCategory::InsectGlaive => Self::InsectGlaive,
            WeaponCategory::Bow => Self::Bow,
            WeaponCategory::LightBowgun | WeaponCategory::HeavyBowgun => Self::Bowgun,
        }
    }
}

/// Category-specific payload of a weapon record. `Plain` covers the
/// categories without special mechanics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WeaponMechanics {
    Plain,
    Gunlance(GunlanceStats),
    HuntingHorn(HuntingHornSongs),
    SwitchAxe(SwitchAxeStats),
    ChargeBlade(ChargeBladeStats),
    InsectGlaive(InsectGlaiveStats),
    Bow(BowStats),
    Bowgun(BowgunStats),
}

impl WeaponMechanics {
    pub const fn kind(&self) -> MechanicKind {
        match self {
            Self::Plain => MechanicKind::Plain,
            Self::Gunlance(_) => MechanicKind::Gunlance,
            Self::HuntingHorn(_) => MechanicKind::HuntingHorn,
            Self::SwitchAxe(_) => MechanicKind::SwitchAxe,
            Self::ChargeBlade(_) => MechanicKind::ChargeBlade,
            Self::InsectGlaive(_) => MechanicKind::InsectGlaive,
            Self::Bow(_) => MechanicKind::Bow,
            Self::Bowgun(_) => MechanicKind::Bowgun,
        }
    }

    pub fn matches(&self, category: WeaponCategory) -> bool {
        self.kind() == MechanicKind::for_category(category)
    }
}
