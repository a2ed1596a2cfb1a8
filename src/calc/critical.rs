//! Expected-value damage multiplier from affinity.

pub const DEFAULT_RAW_CRIT_MULTIPLIER: f64 = 1.25;
pub const DEFAULT_RAW_BLUNDER_MULTIPLIER: f64 = 0.75;
pub const DEFAULT_ELEMENTAL_CRIT_MULTIPLIER: f64 = 1.0;
pub const DEFAULT_ELEMENTAL_BLUNDER_MULTIPLIER: f64 = 1.0;

/// Affinity is capped at 100 here and nowhere earlier. Negative results are
/// blunder chances.
pub fn crit_chance(affinity: f64) -> f64 {
    affinity.min(100.0) / 100.0
}

pub fn crit_modifier(affinity: f64, crit_multiplier: f64, blunder_multiplier: f64) -> f64 {
    let chance = crit_chance(affinity);
    if chance >= 0.0 {
        crit_multiplier * chance + (1.0 - chance)
    } else {
        let blunder = (-chance).min(1.0);
        blunder_multiplier * blunder + (1.0 - blunder)
    }
}
