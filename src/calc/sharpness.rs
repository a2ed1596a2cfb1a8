//! Sharpness model: Handicraft applied to the maximum bar, and the colour
//! multipliers picked from the highest colour left.

use crate::data::types::{SharpnessBar, SHARPNESS_LEVELS};
use crate::error::CalcError;

pub const MAX_CRAFTSMANSHIP_LEVEL: u8 = 5;

/// Hits one Handicraft level is worth.
pub const HITS_PER_LEVEL: u32 = 10;

/// Red, orange, yellow, green, blue, white.
pub const RAW_SHARPNESS_MODIFIERS: [f64; SHARPNESS_LEVELS] = [0.50, 0.75, 1.00, 1.05, 1.20, 1.32];
pub const ELEMENTAL_SHARPNESS_MODIFIERS: [f64; SHARPNESS_LEVELS] =
    [0.25, 0.50, 0.75, 1.00, 1.0625, 1.15];

/// Removes `50 - level * 10` hits from the top of `max_bar`, carrying any
/// remainder down into lower colours.
pub fn apply_handicraft(max_bar: &SharpnessBar, level: u8) -> Result<SharpnessBar, CalcError> {
    if level > MAX_CRAFTSMANSHIP_LEVEL {
        return Err(CalcError::CraftsmanshipOutOfRange(level));
    }
    let mut remaining = u32::from(MAX_CRAFTSMANSHIP_LEVEL - level) * HITS_PER_LEVEL;
    let mut hits = *max_bar.hits();
    for colour in hits.iter_mut().rev() {
        if remaining == 0 {
            break;
        }
        let taken = (*colour).min(remaining);
        *colour -= taken;
        remaining -= taken;
    }
    Ok(SharpnessBar::new(hits))
}

pub fn highest_sharpness_index(bar: &SharpnessBar) -> Result<usize, CalcError> {
    bar.highest_index().ok_or(CalcError::EmptySharpnessBar)
}

/// (raw, elemental) multipliers for the highest colour of `bar`.
pub fn sharpness_modifiers(bar: &SharpnessBar) -> Result<(f64, f64), CalcError> {
    let index = highest_sharpness_index(bar)?;
    Ok((
        RAW_SHARPNESS_MODIFIERS[index],
        ELEMENTAL_SHARPNESS_MODIFIERS[index],
    ))
}

/// A bar is full when Handicraft cannot extend it.
pub fn is_full_bar(min_bar: &SharpnessBar, max_bar: &SharpnessBar) -> bool {
    min_bar.total_hits() == max_bar.total_hits()
}

/// Craftsmanship level to apply: 5 for a full bar regardless of Handicraft,
/// otherwise the Handicraft level, provided the bar spans exactly 50 hits.
pub fn effective_craftsmanship_level(
    weapon_id: &str,
    min_bar: &SharpnessBar,
    max_bar: &SharpnessBar,
    handicraft_level: u8,
) -> Result<u8, CalcError> {
    if is_full_bar(min_bar, max_bar) {
        return Ok(MAX_CRAFTSMANSHIP_LEVEL);
    }
    let span = u32::from(MAX_CRAFTSMANSHIP_LEVEL) * HITS_PER_LEVEL;
    if min_bar.total_hits() + span != max_bar.total_hits() {
        return Err(CalcError::InconsistentSharpness {
            weapon: weapon_id.to_string(),
            base: min_bar.total_hits(),
            max: max_bar.total_hits(),
        });
    }
    if handicraft_level > MAX_CRAFTSMANSHIP_LEVEL {
        return Err(CalcError::CraftsmanshipOutOfRange(handicraft_level));
    }
    Ok(handicraft_level)
}
