//! Load `weapons_<category>.json` files from a data directory into a
//! `GameDatabase`. Missing category files are allowed; a category is then empty.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::data::database::GameDatabase;
use crate::data::mechanics::MechanicTables;
use crate::data::rampage::builtin_rampage_skills;
use crate::data::types::WeaponCategory;
use crate::data::validate::{
    check_inheritance, check_unused_songs, convert_weapon, ValidationContext, ValidationReport,
    ValidationSeverity,
};
use crate::data::weapon::{RawCategoryFile, WeaponRO};

#[derive(Debug, Error)]
pub enum DataError {
    #[error("unable to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to parse '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("reference data has {errors} validation error(s); first: {first}")]
    Invalid { errors: usize, first: String },
}

pub fn category_file_name(category: WeaponCategory) -> String {
    format!("weapons_{}.json", category.as_str())
}

/// Database plus every diagnostic raised while building it. Weapons with
/// errors are left out of the database.
#[derive(Debug)]
pub struct LoadOutcome {
    pub database: GameDatabase,
    pub report: ValidationReport,
}

/// Parse and validate every category file present in `dir`.
pub fn load_dir_with_report(dir: &Path) -> Result<LoadOutcome, DataError> {
    let mut sources = Vec::new();
    for category in WeaponCategory::ALL {
        let path = dir.join(category_file_name(category));
        if !path.exists() {
            tracing::debug!(category = %category, path = %path.display(), "no weapon file");
            continue;
        }
        let raw = fs::read_to_string(&path).map_err(|source| DataError::Io {
            path: path.clone(),
            source,
        })?;
        let parsed: RawCategoryFile =
            serde_json::from_str(&raw).map_err(|source| DataError::Parse {
                path: path.clone(),
                source,
            })?;
        tracing::info!(
            category = %category,
            weapons = parsed.values().map(BTreeMap::len).sum::<usize>(),
            "loaded weapon file"
        );
        sources.push((category, parsed));
    }
    Ok(build_database(sources))
}

/// Parse and validate one category from an in-memory JSON document.
pub fn load_category_str(category: WeaponCategory, json: &str) -> Result<LoadOutcome, DataError> {
    let parsed: RawCategoryFile = serde_json::from_str(json).map_err(|source| DataError::Parse {
        path: PathBuf::from(category_file_name(category)),
        source,
    })?;
    Ok(build_database([(category, parsed)]))
}

/// Strict load: any validation error fails, warnings are logged.
pub fn load_dir(dir: &Path) -> Result<Arc<GameDatabase>, DataError> {
    let outcome = load_dir_with_report(dir)?;
    into_strict(outcome)
}

pub fn into_strict(outcome: LoadOutcome) -> Result<Arc<GameDatabase>, DataError> {
    let LoadOutcome { database, report } = outcome;
    for warning in report.warnings() {
        tracing::warn!(context = %warning.context, "{}", warning.message);
    }
    if report.has_errors() {
        let errors = report.count(ValidationSeverity::Error);
        let first = report
            .errors()
            .next()
            .map(|diag| format!("{}: {}", diag.context, diag.message))
            .unwrap_or_default();
        return Err(DataError::Invalid { errors, first });
    }
    tracing::info!(weapons = database.weapon_count(), "game database ready");
    Ok(Arc::new(database))
}

fn build_database(
    sources: impl IntoIterator<Item = (WeaponCategory, RawCategoryFile)>,
) -> LoadOutcome {
    let mechanics = MechanicTables::builtin();
    let rampage_skills = builtin_rampage_skills();
    let ctx = ValidationContext {
        mechanics: &mechanics,
        rampage_skills: &rampage_skills,
    };

    let mut report = ValidationReport::default();
    let mut weapons: Vec<WeaponRO> = Vec::new();

    for (category, trees) in sources {
        let mut by_id: BTreeMap<String, WeaponRO> = BTreeMap::new();
        let mut seen_ids = BTreeMap::new();
        for (tree_name, entries) in &trees {
            for (id, raw) in entries {
                if let Some(first_tree) = seen_ids.insert(id.clone(), tree_name.clone()) {
                    report.push(
                        ValidationSeverity::Error,
                        format!("{category}.{id}"),
                        format!("duplicate weapon id (also in tree '{first_tree}')"),
                    );
                    by_id.remove(id);
                    continue;
                }
                if let Some(weapon) =
                    convert_weapon(&ctx, category, tree_name, id, raw, &mut report)
                {
                    by_id.insert(id.clone(), weapon);
                }
            }
        }
        check_inheritance(category, &by_id, &mut report);
        if category == WeaponCategory::HuntingHorn {
            check_unused_songs(&mechanics, by_id.values(), &mut report);
        }
        weapons.extend(by_id.into_values());
    }

    tracing::debug!(
        weapons = weapons.len(),
        errors = report.count(ValidationSeverity::Error),
        warnings = report.count(ValidationSeverity::Warning),
        "reference data validated"
    );

    LoadOutcome {
        database: GameDatabase::new(weapons),
        report,
    }
}
