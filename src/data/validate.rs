//! Validation of raw weapon records. Each raw record is checked and, when it
//! has no errors, converted into a `WeaponRO` with mechanic ids joined
//! against the built-in tables.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;

use crate::data::mechanics::{
    AmmoCapacity, BowStats, BowgunDeviation, BowgunStats, ChargeBladeStats, ChargeShotLevel,
    Coating, CoatingSupport, GunlanceStats, HuntingHornSongs, InsectGlaiveStats, MechanicKind,
    MechanicTables, SwitchAxeStats, WeaponMechanics, MAX_KINSECT_LEVEL, MAX_SHELLING_LEVEL,
};
use crate::data::rampage::{RampageSkillRO, MAX_RAMPAGE_SLOTS};
use crate::data::types::{EleStat, SharpnessBar, WeaponCategory, SHARPNESS_LEVELS};
use crate::data::weapon::{RampSkillChoice, RawWeapon, WeaponRO, WeaponSharpness};

const MAX_DECO_SLOTS: usize = 3;
const RESERVED_WEAPON_ID: &str = "0";
const MIN_SHARPNESS_TOTAL: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    fn error(&mut self, context: impl Into<String>, message: impl Into<String>) {
        self.push(ValidationSeverity::Error, context, message);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }

    pub fn count(&self, severity: ValidationSeverity) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity == severity)
            .count()
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationDiagnostic> {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity == ValidationSeverity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationDiagnostic> {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity == ValidationSeverity::Warning)
    }

    pub fn extend(&mut self, other: ValidationReport) {
        self.diagnostics.extend(other.diagnostics);
    }
}

/// Lookup tables a raw weapon is joined against.
pub struct ValidationContext<'a> {
    pub mechanics: &'a MechanicTables,
    pub rampage_skills: &'a BTreeMap<String, RampageSkillRO>,
}

/// Checks one raw weapon and converts it. Returns `None` when any error was
/// reported for this weapon.
pub fn convert_weapon(
    ctx: &ValidationContext<'_>,
    category: WeaponCategory,
    tree_name: &str,
    id: &str,
    raw: &RawWeapon,
    report: &mut ValidationReport,
) -> Option<WeaponRO> {
    let context = format!("{category}.{id}");
    let errors_before = report.count(ValidationSeverity::Error);

    if id.trim().is_empty() {
        report.error(&context, "weapon id must be non-empty");
    } else if id == RESERVED_WEAPON_ID {
        report.error(&context, "weapon id '0' is reserved");
    }
    if raw.name.trim().is_empty() {
        report.error(format!("{context}.name"), "missing non-empty 'name'");
    }

    let attack = checked_int(report, &context, "attack", raw.attack, 1..=i64::from(i32::MAX));
    let affinity = checked_int(report, &context, "affinity", raw.affinity, -100..=100);
    let defense = checked_int(report, &context, "defense", raw.defense, 0..=i64::from(u32::MAX));

    if raw.deco_slots.len() > MAX_DECO_SLOTS {
        report.error(
            format!("{context}.decoSlots"),
            format!("at most {MAX_DECO_SLOTS} slots allowed, found {}", raw.deco_slots.len()),
        );
    }
    let deco_slots: Vec<u8> = raw
        .deco_slots
        .iter()
        .enumerate()
        .filter_map(|(index, size)| {
            checked_int(report, &context, &format!("decoSlots[{index}]"), *size, 1..=3)
        })
        .collect();

    let ele_stat = convert_ele_stat(report, &context, &raw.ele_stat);
    let ramp_skills = convert_ramp_skills(ctx, report, &context, &raw.ramp_skills);
    let sharpness = convert_sharpness(report, &context, category, raw);
    let mechanics = convert_mechanics(ctx, report, &context, category, raw);

    if report.count(ValidationSeverity::Error) > errors_before {
        return None;
    }

    Some(WeaponRO {
        id: id.to_string(),
        name: raw.name.clone(),
        tree_name: tree_name.to_string(),
        category,
        rarity: raw.rarity,
        attack: attack?,
        affinity: affinity?,
        defense: defense?,
        deco_slots,
        ele_stat,
        ramp_skills,
        sharpness,
        mechanics: mechanics?,
    })
}

/// Second pass over a whole category: `inherited_from` ids must name another
/// weapon of the same category.
pub fn check_inheritance(
    category: WeaponCategory,
    weapons: &BTreeMap<String, WeaponRO>,
    report: &mut ValidationReport,
) {
    for weapon in weapons.values() {
        for (slot, choices) in weapon.ramp_skills.iter().enumerate() {
            for choice in choices {
                let Some(parent) = choice.inherited_from.as_deref() else {
                    continue;
                };
                if !weapons.contains_key(parent) {
                    report.error(
                        format!("{category}.{}.rampSkills[{slot}]", weapon.id),
                        format!(
                            "'{}' inherits from unknown weapon '{parent}'",
                            choice.ramp_skill_id
                        ),
                    );
                }
            }
        }
    }
}

/// Warns about hunting-horn songs that no loaded weapon plays.
pub fn check_unused_songs<'a>(
    tables: &MechanicTables,
    horns: impl IntoIterator<Item = &'a WeaponRO>,
    report: &mut ValidationReport,
) {
    let mut seen = BTreeSet::new();
    let mut any_horn = false;
    for weapon in horns {
        if let WeaponMechanics::HuntingHorn(songs) = &weapon.mechanics {
            any_horn = true;
            seen.insert(songs.x.id.as_str());
            seen.insert(songs.a.id.as_str());
            seen.insert(songs.xa.id.as_str());
        }
    }
    if !any_horn {
        return;
    }
    for song in tables.songs.keys() {
        if !seen.contains(song.as_str()) {
            report.push(
                ValidationSeverity::Warning,
                "huntinghorn",
                format!("song '{song}' is not used by any weapon"),
            );
        }
    }
}

fn checked_int<T: TryFrom<i64>>(
    report: &mut ValidationReport,
    context: &str,
    field: &str,
    value: i64,
    range: RangeInclusive<i64>,
) -> Option<T> {
    if !range.contains(&value) {
        report.error(
            format!("{context}.{field}"),
            format!(
                "value {value} outside {}..={}",
                range.start(),
                range.end()
            ),
        );
        return None;
    }
    T::try_from(value).ok()
}

fn convert_ele_stat(
    report: &mut ValidationReport,
    context: &str,
    raw: &BTreeMap<String, i64>,
) -> BTreeMap<EleStat, u32> {
    let mut ele_stat = BTreeMap::new();
    for (key, value) in raw {
        let field_context = format!("{context}.eleStat.{key}");
        let Ok(kind) = key.parse::<EleStat>() else {
            report.error(field_context, format!("'{key}' is not an element or status"));
            continue;
        };
        if let Some(value) = checked_int::<u32>(
            report,
            context,
            &format!("eleStat.{key}"),
            *value,
            1..=i64::from(u32::MAX),
        ) {
            ele_stat.insert(kind, value);
        }
    }
    ele_stat
}

fn convert_ramp_skills(
    ctx: &ValidationContext<'_>,
    report: &mut ValidationReport,
    context: &str,
    raw: &[Vec<(String, String)>],
) -> Vec<Vec<RampSkillChoice>> {
    if raw.len() > MAX_RAMPAGE_SLOTS {
        report.error(
            format!("{context}.rampSkills"),
            format!("at most {MAX_RAMPAGE_SLOTS} slots allowed, found {}", raw.len()),
        );
    }
    raw.iter()
        .enumerate()
        .map(|(slot, choices)| {
            let slot_context = format!("{context}.rampSkills[{slot}]");
            if choices.is_empty() {
                report.error(&slot_context, "slot must offer at least one rampage skill");
            }
            choices
                .iter()
                .filter_map(|(ramp_id, inherited)| {
                    if !ctx.rampage_skills.contains_key(ramp_id) {
                        report.error(&slot_context, format!("unknown rampage skill '{ramp_id}'"));
                        return None;
                    }
                    Some(RampSkillChoice {
                        ramp_skill_id: ramp_id.clone(),
                        inherited_from: (!inherited.is_empty()).then(|| inherited.clone()),
                    })
                })
                .collect()
        })
        .collect()
}

fn convert_bar(
    report: &mut ValidationReport,
    context: &str,
    field: &str,
    raw: &[i64],
) -> Option<SharpnessBar> {
    if raw.len() != SHARPNESS_LEVELS {
        report.error(
            format!("{context}.{field}"),
            format!("expected {SHARPNESS_LEVELS} colours, found {}", raw.len()),
        );
        return None;
    }
    let mut hits = [0u32; SHARPNESS_LEVELS];
    for (index, value) in raw.iter().enumerate() {
        hits[index] = checked_int(
            report,
            context,
            &format!("{field}[{index}]"),
            *value,
            0..=i64::from(u32::MAX),
        )?;
    }
    let bar = SharpnessBar::new(hits);
    if bar.total_hits() <= MIN_SHARPNESS_TOTAL {
        report.push(
            ValidationSeverity::Warning,
            format!("{context}.{field}"),
            format!(
                "hits add up to {}, expected more than {MIN_SHARPNESS_TOTAL}",
                bar.total_hits()
            ),
        );
    }
    Some(bar)
}

fn convert_sharpness(
    report: &mut ValidationReport,
    context: &str,
    category: WeaponCategory,
    raw: &RawWeapon,
) -> Option<WeaponSharpness> {
    if !category.is_melee() {
        if raw.base_sharpness.is_some() || raw.max_sharpness.is_some() {
            report.error(context, format!("{category} weapons have no sharpness bar"));
        }
        return None;
    }
    let (Some(base), Some(max)) = (&raw.base_sharpness, &raw.max_sharpness) else {
        report.error(context, "melee weapons need baseSharpness and maxSharpness");
        return None;
    };
    let base = convert_bar(report, context, "baseSharpness", base);
    let max = convert_bar(report, context, "maxSharpness", max);
    Some(WeaponSharpness {
        base: base?,
        max: max?,
    })
}

fn payload_field(kind: MechanicKind) -> Option<&'static str> {
    match kind {
        MechanicKind::Plain => None,
        MechanicKind::Gunlance => Some("gunlanceStats"),
        MechanicKind::HuntingHorn => Some("huntinghornSongs"),
        MechanicKind::SwitchAxe => Some("switchaxeStats"),
        MechanicKind::ChargeBlade => Some("chargebladeStats"),
        MechanicKind::InsectGlaive => Some("insectglaiveStats"),
        MechanicKind::Bow => Some("bowStats"),
        MechanicKind::Bowgun => Some("bowgunStats"),
    }
}

fn lookup<'t, T>(
    report: &mut ValidationReport,
    context: &str,
    label: &str,
    table: &'t BTreeMap<String, T>,
    id: &str,
) -> Option<&'t T> {
    let found = table.get(id);
    if found.is_none() {
        report.error(context, format!("unknown {label} '{id}'"));
    }
    found
}

fn convert_mechanics(
    ctx: &ValidationContext<'_>,
    report: &mut ValidationReport,
    context: &str,
    category: WeaponCategory,
    raw: &RawWeapon,
) -> Option<WeaponMechanics> {
    let kind = MechanicKind::for_category(category);
    let expected = payload_field(kind);
    let present = raw.present_payloads();

    let mut mismatch = false;
    for field in &present {
        if Some(*field) != expected {
            report.error(context, format!("unexpected '{field}' on a {category}"));
            mismatch = true;
        }
    }
    if let Some(field) = expected {
        if !present.contains(&field) {
            report.error(context, format!("{category} weapons need '{field}'"));
            mismatch = true;
        }
    }
    if mismatch {
        return None;
    }

    let tables = ctx.mechanics;
    match kind {
        MechanicKind::Plain => Some(WeaponMechanics::Plain),
        MechanicKind::Gunlance => {
            let stats = raw.gunlance_stats.as_ref()?;
            let ctx_field = format!("{context}.gunlanceStats");
            let shelling_type = lookup(
                report,
                &ctx_field,
                "shelling type",
                &tables.shelling_types,
                &stats.shelling_type,
            );
            let shelling_level = checked_int(
                report,
                &ctx_field,
                "shellingLevel",
                stats.shelling_level,
                1..=i64::from(MAX_SHELLING_LEVEL),
            );
            Some(WeaponMechanics::Gunlance(GunlanceStats {
                shelling_type: shelling_type?.clone(),
                shelling_level: shelling_level?,
            }))
        }
        MechanicKind::HuntingHorn => {
            let songs = raw.huntinghorn_songs.as_ref()?;
            let ctx_field = format!("{context}.huntinghornSongs");
            let x = lookup(report, &ctx_field, "song", &tables.songs, &songs.x_x);
            let a = lookup(report, &ctx_field, "song", &tables.songs, &songs.a_a);
            let xa = lookup(report, &ctx_field, "song", &tables.songs, &songs.xa_xa);
            Some(WeaponMechanics::HuntingHorn(HuntingHornSongs {
                x: x?.clone(),
                a: a?.clone(),
                xa: xa?.clone(),
            }))
        }
        MechanicKind::SwitchAxe => {
            let stats = raw.switchaxe_stats.as_ref()?;
            let ctx_field = format!("{context}.switchaxeStats");
            let phial_type = lookup(
                report,
                &ctx_field,
                "switch axe phial",
                &tables.switch_axe_phials,
                &stats.phial_type,
            );
            let phial_value = match stats.phial_value {
                None => Some(None),
                Some(value) => checked_int::<u32>(
                    report,
                    &ctx_field,
                    "phialValue",
                    value,
                    1..=i64::from(u32::MAX),
                )
                .map(Some),
            };
            Some(WeaponMechanics::SwitchAxe(SwitchAxeStats {
                phial_type: phial_type?.clone(),
                phial_value: phial_value?,
            }))
        }
        MechanicKind::ChargeBlade => {
            let stats = raw.chargeblade_stats.as_ref()?;
            let phial_type = lookup(
                report,
                &format!("{context}.chargebladeStats"),
                "charge blade phial",
                &tables.charge_blade_phials,
                &stats.phial_type,
            );
            Some(WeaponMechanics::ChargeBlade(ChargeBladeStats {
                phial_type: phial_type?.clone(),
            }))
        }
        MechanicKind::InsectGlaive => {
            let stats = raw.insectglaive_stats.as_ref()?;
            let kinsect_level = checked_int(
                report,
                &format!("{context}.insectglaiveStats"),
                "kinsectLevel",
                stats.kinsect_level,
                1..=i64::from(MAX_KINSECT_LEVEL),
            );
            Some(WeaponMechanics::InsectGlaive(InsectGlaiveStats {
                kinsect_level: kinsect_level?,
            }))
        }
        MechanicKind::Bow => convert_bow(tables, report, context, raw).map(WeaponMechanics::Bow),
        MechanicKind::Bowgun => {
            convert_bowgun(tables, report, context, raw).map(WeaponMechanics::Bowgun)
        }
    }
}

fn convert_bow(
    tables: &MechanicTables,
    report: &mut ValidationReport,
    context: &str,
    raw: &RawWeapon,
) -> Option<BowStats> {
    let stats = raw.bow_stats.as_ref()?;
    let ctx_field = format!("{context}.bowStats");

    let arc_shot = lookup(report, &ctx_field, "arc shot", &tables.arc_shots, &stats.arc_shot);
    let base_limit: Option<u8> = checked_int(
        report,
        &ctx_field,
        "baseChargeLevelLimit",
        stats.base_charge_level_limit,
        1..=5,
    );

    let levels = stats.charge_shot.len();
    if !(3..=4).contains(&levels) {
        report.error(
            format!("{ctx_field}.chargeShot"),
            format!("expected 3 or 4 charge levels, found {levels}"),
        );
    }
    if let Some(limit) = base_limit {
        let limit = usize::from(limit);
        if levels != limit && levels != limit + 1 {
            report.error(
                format!("{ctx_field}.chargeShot"),
                format!("{levels} charge levels do not fit base charge level limit {limit}"),
            );
        }
    }

    let mut charge_shot = Vec::with_capacity(levels);
    for (index, (shot_id, level)) in stats.charge_shot.iter().enumerate() {
        let shot_context = format!("{ctx_field}.chargeShot[{index}]");
        let shot_type = lookup(report, &shot_context, "charge shot", &tables.charge_shots, shot_id);
        let level = checked_int(report, &shot_context, "level", *level, 1..=5);
        if let (Some(shot_type), Some(level)) = (shot_type, level) {
            charge_shot.push(ChargeShotLevel {
                shot_type: shot_type.clone(),
                level,
            });
        }
    }

    let mut compatible_coatings = BTreeMap::new();
    for (key, level) in &stats.compatible_coatings {
        let Some(coating) = Coating::from_id(key) else {
            report.error(
                format!("{ctx_field}.compatibleCoatings"),
                format!("unknown coating '{key}'"),
            );
            continue;
        };
        match u8::try_from(*level).ok().and_then(CoatingSupport::from_level) {
            Some(support) => {
                compatible_coatings.insert(coating, support);
            }
            None => report.error(
                format!("{ctx_field}.compatibleCoatings.{key}"),
                format!("value {level} outside 0..=2"),
            ),
        }
    }
    for coating in Coating::ALL {
        if !stats.compatible_coatings.contains_key(coating.as_str()) {
            report.error(
                format!("{ctx_field}.compatibleCoatings"),
                format!("missing '{}'", coating.as_str()),
            );
        }
    }

    Some(BowStats {
        arc_shot: arc_shot?.clone(),
        base_charge_level_limit: base_limit?,
        charge_shot,
        compatible_coatings,
    })
}

fn convert_bowgun(
    tables: &MechanicTables,
    report: &mut ValidationReport,
    context: &str,
    raw: &RawWeapon,
) -> Option<BowgunStats> {
    let stats = raw.bowgun_stats.as_ref()?;
    let ctx_field = format!("{context}.bowgunStats");

    let severity = checked_int(
        report,
        &ctx_field,
        "deviation.severity",
        stats.deviation.severity,
        0..=2,
    );
    let recoil = checked_int(report, &ctx_field, "recoil", stats.recoil, 2..=5);
    let reload = checked_int(report, &ctx_field, "reload", stats.reload, 1..=6);

    let mut ammo = BTreeMap::new();
    for (kind, levels) in &stats.ammo {
        if levels.is_empty() {
            report.error(format!("{ctx_field}.ammo.{kind}"), "no ammo levels listed");
            continue;
        }
        for (index, (available, capacity)) in levels.iter().enumerate() {
            let ammo_id = if levels.len() == 1 {
                kind.clone()
            } else {
                format!("{kind}_{}", index + 1)
            };
            let ammo_context = format!("{ctx_field}.ammo.{ammo_id}");
            let Some(ammo_type) =
                lookup(report, &ammo_context, "ammo type", &tables.ammo_types, &ammo_id)
            else {
                continue;
            };
            let Some(capacity) = checked_int::<u32>(
                report,
                &ammo_context,
                "capacity",
                *capacity,
                0..=i64::from(u32::MAX),
            ) else {
                continue;
            };
            if *available && capacity == 0 {
                report.error(&ammo_context, "available ammo cannot have zero capacity");
            }
            ammo.insert(
                ammo_id,
                AmmoCapacity {
                    ammo_type: ammo_type.clone(),
                    available: *available,
                    capacity,
                },
            );
        }
    }
    let missing: Vec<&str> = tables
        .ammo_types
        .keys()
        .filter(|id| !ammo.contains_key(*id))
        .map(String::as_str)
        .collect();
    if !missing.is_empty() {
        report.error(
            format!("{ctx_field}.ammo"),
            format!("missing ammo types: {}", missing.join(", ")),
        );
    }

    Some(BowgunStats {
        deviation: BowgunDeviation {
            severity: severity?,
            left: stats.deviation.left,
            right: stats.deviation.right,
        },
        recoil: recoil?,
        reload: reload?,
        ammo,
    })
}
