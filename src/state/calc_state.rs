//! Calculation state: equipped skill levels and toggled situational items.
//!
//! The specification lists which groups and items exist and their legal
//! states; state 0 of every item means "off". The current state stores only
//! non-default selections.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::data::database::GameDatabase;
use crate::error::StateError;

pub const SKILL_CONDITIONS: &str = "skill_conditions";
pub const MISC_BUFFS: &str = "misc_buffs";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ItemSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub states: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GroupSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub items: &'static [ItemSpec],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CalcStateSpecification {
    pub groups: &'static [GroupSpec],
}

const ON_OFF: &[&str] = &["Off", "On"];
const INACTIVE_ACTIVE: &[&str] = &["Inactive", "Active"];

const fn item(id: &'static str, name: &'static str, states: &'static [&'static str]) -> ItemSpec {
    ItemSpec { id, name, states }
}

const SKILL_CONDITION_ITEMS: &[ItemSpec] = &[
    item("agitator", "Agitator", INACTIVE_ACTIVE),
    item(
        "weakness_exploit",
        "Weakness Exploit",
        &["Off", "Weak Point", "Wounded Weak Point"],
    ),
    item("latent_power", "Latent Power", INACTIVE_ACTIVE),
    item("maximum_might", "Maximum Might", INACTIVE_ACTIVE),
    item("critical_draw", "Critical Draw", INACTIVE_ACTIVE),
    item("peak_performance", "Peak Performance", INACTIVE_ACTIVE),
    item("resentment", "Resentment", INACTIVE_ACTIVE),
    item("counterstrike", "Counterstrike", INACTIVE_ACTIVE),
    item("offensive_guard", "Offensive Guard", INACTIVE_ACTIVE),
    item("dragonheart", "Dragonheart", INACTIVE_ACTIVE),
    item("heroics", "Heroics", INACTIVE_ACTIVE),
    item("fortify", "Fortify", &["No Carts", "One Cart", "Two Carts"]),
];

const MISC_BUFF_ITEMS: &[ItemSpec] = &[
    item("powercharm", "Powercharm", ON_OFF),
    item("powertalon", "Powertalon", ON_OFF),
    item("demondrug", "Demondrug", &["Off", "Demondrug", "Mega Demondrug"]),
    item("might_seed", "Might Seed", &["Off", "Might Seed", "Demon Powder"]),
    item("dango_booster", "Dango Booster", ON_OFF),
    item("armorcharm", "Armorcharm", ON_OFF),
    item("armortalon", "Armortalon", ON_OFF),
    item("armorskin", "Armorskin", &["Off", "Armorskin", "Mega Armorskin"]),
    item(
        "adamant_seed",
        "Adamant Seed",
        &["Off", "Adamant Seed", "Hardshell Powder"],
    ),
    item(
        "hh_attack_up",
        "Horn: Attack Up",
        &["Off", "Attack Up (S)", "Attack Up (L)"],
    ),
    item("hh_elemental_attack_boost", "Horn: Elemental Attack Boost", ON_OFF),
    item("hh_affinity_up", "Horn: Affinity Up", ON_OFF),
    item(
        "hh_defense_up",
        "Horn: Defense Up",
        &["Off", "Defense Up (S)", "Defense Up (L)"],
    ),
];

const SPECIFICATION: CalcStateSpecification = CalcStateSpecification {
    groups: &[
        GroupSpec {
            id: SKILL_CONDITIONS,
            name: "Skill Conditions",
            items: SKILL_CONDITION_ITEMS,
        },
        GroupSpec {
            id: MISC_BUFFS,
            name: "Miscellaneous Buffs",
            items: MISC_BUFF_ITEMS,
        },
    ],
};

impl CalcStateSpecification {
    pub fn get() -> &'static CalcStateSpecification {
        &SPECIFICATION
    }

    pub fn group(&self, group: &str) -> Option<&'static GroupSpec> {
        self.groups.iter().find(|spec| spec.id == group)
    }

    pub fn item(&self, group: &str, item: &str) -> Result<&'static ItemSpec, StateError> {
        let group_spec = self
            .group(group)
            .ok_or_else(|| StateError::UnknownGroup(group.to_string()))?;
        group_spec
            .items
            .iter()
            .find(|spec| spec.id == item)
            .ok_or_else(|| StateError::UnknownItem {
                group: group.to_string(),
                item: item.to_string(),
            })
    }
}

/// Current skill levels and item states. Missing entries are level 0 / state 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcState {
    #[serde(default)]
    skills: BTreeMap<String, u8>,
    #[serde(default)]
    states: BTreeMap<String, BTreeMap<String, usize>>,
}

impl CalcState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Equipped skills with a non-zero level.
    pub fn skills(&self) -> impl Iterator<Item = (&str, u8)> {
        self.skills
            .iter()
            .filter(|(_, level)| **level > 0)
            .map(|(id, level)| (id.as_str(), *level))
    }

    /// Level 0 removes the skill.
    pub fn set_skill_level(
        &mut self,
        db: &GameDatabase,
        skill_id: &str,
        level: u8,
    ) -> Result<(), StateError> {
        let skill = db
            .skill(skill_id)
            .ok_or_else(|| StateError::UnknownSkill(skill_id.to_string()))?;
        if level > skill.max_level {
            return Err(StateError::SkillLevelOutOfRange {
                skill: skill_id.to_string(),
                level,
                max: skill.max_level,
            });
        }
        if level == 0 {
            self.skills.remove(skill_id);
        } else {
            self.skills.insert(skill_id.to_string(), level);
        }
        Ok(())
    }

    pub fn with_skill(mut self, db: &GameDatabase, skill_id: &str, level: u8) -> Result<Self, StateError> {
        self.set_skill_level(db, skill_id, level)?;
        Ok(self)
    }

    pub fn state(&self, group: &str, item: &str) -> usize {
        self.states
            .get(group)
            .and_then(|items| items.get(item))
            .copied()
            .unwrap_or(0)
    }

    pub fn is_active(&self, group: &str, item: &str) -> bool {
        self.state(group, item) > 0
    }

    /// State 0 removes the entry.
    pub fn set_state(&mut self, group: &str, item: &str, state: usize) -> Result<(), StateError> {
        let spec = CalcStateSpecification::get().item(group, item)?;
        if state >= spec.states.len() {
            return Err(StateError::StateOutOfRange {
                group: group.to_string(),
                item: item.to_string(),
                state,
                states: spec.states.len(),
            });
        }
        if state == 0 {
            if let Some(items) = self.states.get_mut(group) {
                items.remove(item);
                if items.is_empty() {
                    self.states.remove(group);
                }
            }
        } else {
            self.states
                .entry(group.to_string())
                .or_default()
                .insert(item.to_string(), state);
        }
        Ok(())
    }

    pub fn with_state(mut self, group: &str, item: &str, state: usize) -> Result<Self, StateError> {
        self.set_state(group, item, state)?;
        Ok(self)
    }

    /// Check a snapshot built outside the setters (e.g. deserialized) against
    /// the specification. Skill ids and levels are checked by the skill resolver.
    pub fn check_states(&self) -> Result<(), StateError> {
        let spec = CalcStateSpecification::get();
        for (group, items) in &self.states {
            for (item, state) in items {
                let item_spec = spec.item(group, item)?;
                if *state >= item_spec.states.len() {
                    return Err(StateError::StateOutOfRange {
                        group: group.clone(),
                        item: item.clone(),
                        state: *state,
                        states: item_spec.states.len(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_item_has_an_off_state_and_one_more() {
        for group in CalcStateSpecification::get().groups {
            for item in group.items {
                assert!(item.states.len() >= 2, "{}/{}", group.id, item.id);
            }
        }
    }

    #[test]
    fn set_state_validates_against_specification() {
        let mut state = CalcState::new();
        state.set_state(MISC_BUFFS, "demondrug", 2).expect("mega demondrug");
        assert_eq!(state.state(MISC_BUFFS, "demondrug"), 2);
        assert!(state.is_active(MISC_BUFFS, "demondrug"));

        assert_eq!(
            state.set_state(MISC_BUFFS, "demondrug", 3),
            Err(StateError::StateOutOfRange {
                group: MISC_BUFFS.to_string(),
                item: "demondrug".to_string(),
                state: 3,
                states: 3,
            })
        );
        assert!(matches!(
            state.set_state("nope", "demondrug", 1),
            Err(StateError::UnknownGroup(_))
        ));
        assert!(matches!(
            state.set_state(SKILL_CONDITIONS, "demondrug", 1),
            Err(StateError::UnknownItem { .. })
        ));

        state.set_state(MISC_BUFFS, "demondrug", 0).expect("off");
        assert_eq!(state, CalcState::new());
    }

    #[test]
    fn skill_levels_are_capped_by_the_database() {
        let db = GameDatabase::empty();
        let mut state = CalcState::new();
        state.set_skill_level(&db, "handicraft", 5).expect("max level");
        assert_eq!(state.skills().collect::<Vec<_>>(), [("handicraft", 5)]);
        assert!(matches!(
            state.set_skill_level(&db, "handicraft", 6),
            Err(StateError::SkillLevelOutOfRange { max: 5, .. })
        ));
        assert!(matches!(
            state.set_skill_level(&db, "not_a_skill", 1),
            Err(StateError::UnknownSkill(_))
        ));
        state.set_skill_level(&db, "handicraft", 0).expect("remove");
        assert_eq!(state.skills().count(), 0);
    }

    #[test]
    fn deserialized_snapshot_is_checked() {
        let state: CalcState =
            serde_json::from_str(r#"{"states": {"skill_conditions": {"fortify": 5}}}"#)
                .expect("parse");
        assert!(matches!(
            state.check_states(),
            Err(StateError::StateOutOfRange { .. })
        ));
        let empty: CalcState = serde_json::from_str("{}").expect("parse");
        assert!(empty.check_states().is_ok());
    }
}
