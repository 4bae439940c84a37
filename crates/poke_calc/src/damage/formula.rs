//! Core damage formula and fixed-point helpers.
//!
//! Every multiplication that the game truncates is truncated here too. The
//! helpers never round at the end only.

use super::Modifier;

/// Number of random-roll outcomes (85..=100).
pub const ROLL_COUNT: usize = 16;

/// Lowest random-roll percentage.
pub const MIN_ROLL: u32 = 85;

/// 32-bit overflow wrapping, as on hardware.
#[inline]
pub const fn of32(value: u64) -> u32 {
    (value & 0xFFFF_FFFF) as u32
}

/// Game Freak's rounding: halves round down, anything above rounds up.
#[inline]
pub fn pokeround(value: u32, divisor: u32) -> u32 {
    let quotient = value / divisor;
    if value % divisor > divisor / 2 {
        quotient + 1
    } else {
        quotient
    }
}

/// `pokeround(value * modifier / 4096)`
#[inline]
pub fn apply_modifier(value: u32, modifier: Modifier) -> u32 {
    if modifier == Modifier::ONE {
        return value;
    }
    pokeround(of32(value as u64 * modifier.val() as u64), 4096)
}

/// Apply an already-chained 4096-scale value (see [`chain_mods`]).
#[inline]
pub fn apply_chain(value: u32, chain: u32) -> u32 {
    if chain == 4096 {
        return value;
    }
    pokeround(of32(value as u64 * chain as u64), 4096)
}

/// `floor(value * num / den)`, used where the game floors instead of rounding.
#[inline]
pub fn apply_modifier_floor(value: u32, num: u32, den: u32) -> u32 {
    of32(value as u64 * num as u64) / den
}

/// Chain 4096-scale modifiers into one.
///
/// Each intermediate product is rounded with [`pokeround`]. The result is
/// clamped to `1..=131072` (roughly 0.0002x to 32x).
pub fn chain_mods(modifiers: &[Modifier]) -> u32 {
    let mut result: u32 = 4096;
    for modifier in modifiers {
        if *modifier != Modifier::ONE {
            result = pokeround(of32(result as u64 * modifier.val() as u64), 4096);
        }
    }
    result.clamp(1, 131072)
}

/// Base damage before any multiplier stage.
///
/// `floor(floor(floor(2 * Level / 5 + 2) * Power * Atk / Def) / 50) + 2`
///
/// `floor(2 * L / 5)` equals `floor(L * 0.4)` for every level, so the level
/// factor stays in integers.
pub fn get_base_damage(level: u32, base_power: u32, attack: u32, defense: u32) -> u32 {
    if defense == 0 {
        return 0;
    }
    let level_factor = 2 * level / 5 + 2;
    let numerator = of32(level_factor as u64 * base_power as u64);
    let numerator = of32(numerator as u64 * attack as u64);
    numerator / defense / 50 + 2
}

/// `floor(damage * (85 + roll_index) / 100)`
#[inline]
pub fn apply_random_roll(damage: u32, roll_index: usize) -> u32 {
    let roll = MIN_ROLL + roll_index.min(ROLL_COUNT - 1) as u32;
    of32(damage as u64 * roll as u64) / 100
}

/// Stage multipliers, index 0 = -6, 6 = neutral, 12 = +6.
const BOOST_TABLE: [(u32, u32); 13] = [
    (2, 8),
    (2, 7),
    (2, 6),
    (2, 5),
    (2, 4),
    (2, 3),
    (2, 2),
    (3, 2),
    (4, 2),
    (5, 2),
    (6, 2),
    (7, 2),
    (8, 2),
];

/// Apply a combat stage (-6..=6) to a stat, flooring.
pub fn apply_boost(stat: u32, stage: i8) -> u32 {
    let index = (stage.clamp(-6, 6) + 6) as usize;
    let (num, den) = BOOST_TABLE[index];
    stat * num / den
}
