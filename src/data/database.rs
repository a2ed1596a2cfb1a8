//! Read-only game database. Built once (by the loader or directly from weapon
//! records) and shared by reference or through `Arc` afterwards.

use std::collections::BTreeMap;

use crate::data::mechanics::MechanicTables;
use crate::data::rampage::{builtin_rampage_skills, RampageSkillRO};
use crate::data::skill::{builtin_skills, SkillRO};
use crate::data::types::WeaponCategory;
use crate::data::weapon::WeaponRO;

#[derive(Debug, Clone)]
pub struct GameDatabase {
    weapons: BTreeMap<WeaponCategory, BTreeMap<String, WeaponRO>>,
    skills: BTreeMap<String, SkillRO>,
    rampage_skills: BTreeMap<String, RampageSkillRO>,
    mechanics: MechanicTables,
}

impl GameDatabase {
    /// Database with the built-in skill, rampage and mechanic tables and the
    /// given weapons. A later weapon with the same (category, id) replaces an
    /// earlier one; the loader rejects duplicates before getting here.
    pub fn new(weapons: impl IntoIterator<Item = WeaponRO>) -> Self {
        let mut by_category: BTreeMap<WeaponCategory, BTreeMap<String, WeaponRO>> =
            BTreeMap::new();
        for weapon in weapons {
            by_category
                .entry(weapon.category)
                .or_default()
                .insert(weapon.id.clone(), weapon);
        }
        Self {
            weapons: by_category,
            skills: builtin_skills(),
            rampage_skills: builtin_rampage_skills(),
            mechanics: MechanicTables::builtin(),
        }
    }

    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }

    pub fn weapon(&self, category: WeaponCategory, id: &str) -> Option<&WeaponRO> {
        self.weapons.get(&category)?.get(id)
    }

    /// Weapons of one category in id order.
    pub fn weapons(&self, category: WeaponCategory) -> impl Iterator<Item = &WeaponRO> {
        self.weapons
            .get(&category)
            .into_iter()
            .flat_map(|by_id| by_id.values())
    }

    pub fn weapon_count(&self) -> usize {
        self.weapons.values().map(BTreeMap::len).sum()
    }

    pub fn skill(&self, id: &str) -> Option<&SkillRO> {
        self.skills.get(id)
    }

    pub fn skills(&self) -> impl Iterator<Item = &SkillRO> {
        self.skills.values()
    }

    pub fn rampage_skill(&self, id: &str) -> Option<&RampageSkillRO> {
        self.rampage_skills.get(id)
    }

    pub fn mechanics(&self) -> &MechanicTables {
        &self.mechanics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mechanics::WeaponMechanics;

    fn hammer(id: &str, attack: i32) -> WeaponRO {
        WeaponRO {
            id: id.to_string(),
            name: id.to_string(),
            tree_name: "Kamura".to_string(),
            category: WeaponCategory::Hammer,
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

    #[test]
    fn lookups_are_keyed_by_category_and_id() {
        let db = GameDatabase::new([hammer("a", 100), hammer("b", 120)]);
        assert_eq!(db.weapon_count(), 2);
        assert_eq!(db.weapon(WeaponCategory::Hammer, "b").map(|w| w.attack), Some(120));
        assert!(db.weapon(WeaponCategory::Lance, "b").is_none());
        assert_eq!(db.weapons(WeaponCategory::Lance).count(), 0);
        assert!(db.skill("attack_boost").is_some());
        assert!(db.rampage_skill("attack_surge").is_some());
        assert!(db.mechanics().songs.contains_key("attack_up"));
    }

    #[test]
    fn database_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GameDatabase>();
    }
}
