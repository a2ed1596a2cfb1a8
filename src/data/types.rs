//! Shared enums and value types for reference data: weapon categories,
//! element/status types and sharpness bars.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of sharpness colours tracked (red through white).
pub const SHARPNESS_LEVELS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeaponCategory {
    Greatsword,
    Longsword,
    #[serde(rename = "swordandshield")]
    SwordAndShield,
    #[serde(rename = "dualblades")]
    DualBlades,
    #[serde(rename = "switchaxe")]
    SwitchAxe,
    #[serde(rename = "chargeblade")]
    ChargeBlade,
    Hammer,
    #[serde(rename = "huntinghorn")]
    HuntingHorn,
    Lance,
    Gunlance,
    #[serde(rename = "insectglaive")]
    InsectGlaive,
    Bow,
    #[serde(rename = "lightbowgun")]
    LightBowgun,
    #[serde(rename = "heavybowgun")]
    HeavyBowgun,
}

impl WeaponCategory {
    pub const ALL: [WeaponCategory; 14] = [
        Self::Greatsword,
        Self::Longsword,
        Self::SwordAndShield,
        Self::DualBlades,
        Self::SwitchAxe,
        Self::ChargeBlade,
        Self::Hammer,
        Self::HuntingHorn,
        Self::Lance,
        Self::Gunlance,
        Self::InsectGlaive,
        Self::Bow,
        Self::LightBowgun,
        Self::HeavyBowgun,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Greatsword => "greatsword",
            Self::Longsword => "longsword",
            Self::SwordAndShield => "swordandshield",
            Self::DualBlades => "dualblades",
            Self::SwitchAxe => "switchaxe",
            Self::ChargeBlade => "chargeblade",
            Self::Hammer => "hammer",
            Self::HuntingHorn => "huntinghorn",
            Self::Lance => "lance",
            Self::Gunlance => "gunlance",
            Self::InsectGlaive => "insectglaive",
            Self::Bow => "bow",
            Self::LightBowgun => "lightbowgun",
            Self::HeavyBowgun => "heavybowgun",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Greatsword => "Greatsword",
            Self::Longsword => "Longsword",
            Self::SwordAndShield => "Sword and Shield",
            Self::DualBlades => "Dual Blades",
            Self::SwitchAxe => "Switch Axe",
            Self::ChargeBlade => "Charge Blade",
            Self::Hammer => "Hammer",
            Self::HuntingHorn => "Hunting Horn",
            Self::Lance => "Lance",
            Self::Gunlance => "Gunlance",
            Self::InsectGlaive => "Insect Glaive",
            Self::Bow => "Bow",
            Self::LightBowgun => "Light Bowgun",
            Self::HeavyBowgun => "Heavy Bowgun",
        }
    }

    /// Melee weapons carry a sharpness bar; bows and bowguns do not.
    pub const fn is_melee(self) -> bool {
        !matches!(self, Self::Bow | Self::LightBowgun | Self::HeavyBowgun)
    }

    pub const fn is_bowgun(self) -> bool {
        matches!(self, Self::LightBowgun | Self::HeavyBowgun)
    }
}

impl fmt::Display for WeaponCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeaponCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == needle)
            .ok_or_else(|| format!("unknown weapon category '{s}'"))
    }
}

/// Element or status type carried by a weapon. There is deliberately no
/// `None` variant: a weapon without element simply has an empty map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EleStat {
    Fire,
    Water,
    Thunder,
    Ice,
    Dragon,
    Poison,
    Paralysis,
    Sleep,
    Blast,
}

impl EleStat {
    pub const ALL: [EleStat; 9] = [
        Self::Fire,
        Self::Water,
        Self::Thunder,
        Self::Ice,
        Self::Dragon,
        Self::Poison,
        Self::Paralysis,
        Self::Sleep,
        Self::Blast,
    ];

    pub const ELEMENTS: [EleStat; 5] = [
        Self::Fire,
        Self::Water,
        Self::Thunder,
        Self::Ice,
        Self::Dragon,
    ];

    pub const STATUSES: [EleStat; 4] = [Self::Poison, Self::Paralysis, Self::Sleep, Self::Blast];

    /// True for the five elemental types, false for status types.
    pub const fn is_elemental(self) -> bool {
        matches!(
            self,
            Self::Fire | Self::Water | Self::Thunder | Self::Ice | Self::Dragon
        )
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Water => "water",
            Self::Thunder => "thunder",
            Self::Ice => "ice",
            Self::Dragon => "dragon",
            Self::Poison => "poison",
            Self::Paralysis => "paralysis",
            Self::Sleep => "sleep",
            Self::Blast => "blast",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Water => "Water",
            Self::Thunder => "Thunder",
            Self::Ice => "Ice",
            Self::Dragon => "Dragon",
            Self::Poison => "Poison",
            Self::Paralysis => "Paralysis",
            Self::Sleep => "Sleep",
            Self::Blast => "Blast",
        }
    }
}

impl fmt::Display for EleStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EleStat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == needle)
            .ok_or_else(|| format!("unknown element/status '{s}'"))
    }
}

/// Hits per sharpness colour, red first and white last.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SharpnessBar(pub [u32; SHARPNESS_LEVELS]);

impl SharpnessBar {
    pub const fn new(hits: [u32; SHARPNESS_LEVELS]) -> Self {
        Self(hits)
    }

    pub fn total_hits(&self) -> u32 {
        self.0.iter().sum()
    }

    pub fn hits(&self) -> &[u32; SHARPNESS_LEVELS] {
        &self.0
    }

    /// Index of the highest colour with any hits left, scanning white to red.
    pub fn highest_index(&self) -> Option<usize> {
        self.0.iter().rposition(|&hits| hits > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_str() {
        for category in WeaponCategory::ALL {
            assert_eq!(category.as_str().parse::<WeaponCategory>(), Ok(category));
        }
        assert!("katana".parse::<WeaponCategory>().is_err());
    }

    #[test]
    fn only_ranged_categories_are_not_melee() {
        let ranged: Vec<_> = WeaponCategory::ALL
            .into_iter()
            .filter(|c| !c.is_melee())
            .collect();
        assert_eq!(
            ranged,
            vec![
                WeaponCategory::Bow,
                WeaponCategory::LightBowgun,
                WeaponCategory::HeavyBowgun
            ]
        );
    }

    #[test]
    fn none_is_not_an_element() {
        assert!("none".parse::<EleStat>().is_err());
        let parsed: Result<EleStat, _> = serde_json::from_str("\"none\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn elemental_split_matches_tables() {
        assert!(EleStat::ELEMENTS.iter().all(|e| e.is_elemental()));
        assert!(EleStat::STATUSES.iter().all(|e| !e.is_elemental()));
    }

    #[test]
    fn highest_index_skips_empty_top_colours() {
        assert_eq!(SharpnessBar::new([0, 0, 0, 0, 0, 10]).highest_index(), Some(5));
        assert_eq!(SharpnessBar::new([5, 0, 0, 0, 0, 0]).highest_index(), Some(0));
        assert_eq!(SharpnessBar::new([10, 0, 30, 0, 0, 0]).highest_index(), Some(2));
        assert_eq!(SharpnessBar::default().highest_index(), None);
    }
}
