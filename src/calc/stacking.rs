use std::collections::BTreeMap;

use crate::data::types::EleStat;

/// Stats that skills and buffs contribute to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StatKey {
    Raw,
    Affinity,
    EleStat(EleStat),
    Defense,
    ElementalResistance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackCategory {
    /// Summed.
    Additive,
    /// Multiplied together.
    Multiplicative,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StackContribution<K> {
    pub key: K,
    pub category: StackCategory,
    pub value: f64,
}

impl<K> StackContribution<K> {
    pub fn add(key: K, value: f64) -> Self {
        Self {
            key,
            category: StackCategory::Additive,
            value,
        }
    }

    pub fn mul(key: K, value: f64) -> Self {
        Self {
            key,
            category: StackCategory::Multiplicative,
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModifierTotals {
    pub add: f64,
    pub mul: f64,
}

impl Default for ModifierTotals {
    fn default() -> Self {
        Self { add: 0.0, mul: 1.0 }
    }
}

impl ModifierTotals {
    pub fn apply(&mut self, category: StackCategory, value: f64) {
        match category {
            StackCategory::Additive => self.add += value,
            StackCategory::Multiplicative => self.mul *= value,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StatStacking<K: Ord> {
    totals: BTreeMap<K, ModifierTotals>,
}

impl<K: Ord> StatStacking<K> {
    pub fn new() -> Self {
        Self {
            totals: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, contribution: StackContribution<K>) {
        self.totals
            .entry(contribution.key)
            .or_default()
            .apply(contribution.category, contribution.value);
    }

    pub fn add_many<I>(&mut self, contributions: I)
    where
        I: IntoIterator<Item = StackContribution<K>>,
    {
        for contribution in contributions {
            self.add(contribution);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &ModifierTotals)> {
        self.totals.iter()
    }
}
