//! Build selection and its resolution against the game database.

use serde::{Deserialize, Serialize};

use crate::data::database::GameDatabase;
use crate::data::rampage::RampageSkillRO;
use crate::data::types::WeaponCategory;
use crate::data::weapon::WeaponRO;
use crate::error::CalcError;

/// A chosen weapon plus one optional rampage pick per slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    pub category: WeaponCategory,
    pub weapon_id: String,
    #[serde(default)]
    pub rampage_picks: Vec<Option<String>>,
}

impl Build {
    pub fn new(category: WeaponCategory, weapon_id: impl Into<String>) -> Self {
        Self {
            category,
            weapon_id: weapon_id.into(),
            rampage_picks: Vec::new(),
        }
    }

    /// Set the pick for `slot`, growing the pick list as needed.
    pub fn with_pick(mut self, slot: usize, ramp_skill_id: impl Into<String>) -> Self {
        if self.rampage_picks.len() <= slot {
            self.rampage_picks.resize(slot + 1, None);
        }
        self.rampage_picks[slot] = Some(ramp_skill_id.into());
        self
    }

    pub fn resolve<'db>(&self, db: &'db GameDatabase) -> Result<ResolvedBuild<'db>, CalcError> {
        let weapon =
            db.weapon(self.category, &self.weapon_id)
                .ok_or_else(|| CalcError::UnknownWeapon {
                    category: self.category,
                    id: self.weapon_id.clone(),
                })?;

        let mut rampage_skills = Vec::new();
        for (slot, pick) in self.rampage_picks.iter().enumerate() {
            let Some(ramp_id) = pick else {
                continue;
            };
            if slot >= weapon.slot_count() {
                return Err(CalcError::RampageSlotOutOfRange {
                    weapon: weapon.id.clone(),
                    slot,
                    slots: weapon.slot_count(),
                });
            }
            let ramp = db
                .rampage_skill(ramp_id)
                .ok_or_else(|| CalcError::UnknownRampageSkill(ramp_id.clone()))?;
            if !weapon.slot_offers(slot, ramp_id) {
                return Err(CalcError::RampageNotOffered {
                    weapon: weapon.id.clone(),
                    slot,
                    ramp_skill: ramp_id.clone(),
                });
            }
            rampage_skills.push(ramp);
        }

        Ok(ResolvedBuild {
            weapon,
            rampage_skills,
        })
    }
}

/// Read-only view of a build: the weapon record and the picked rampage
/// skills in slot order.
#[derive(Debug, Clone)]
pub struct ResolvedBuild<'db> {
    pub weapon: &'db WeaponRO,
    pub rampage_skills: Vec<&'db RampageSkillRO>,
}
