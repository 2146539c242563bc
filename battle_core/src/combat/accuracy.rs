//! Hit chance computation
//!
//! Formula: part accuracy + category affinity bonus - target evasion,
//! minus a flat penalty while the attacker's legs are destroyed, clamped
//! so a hit is never guaranteed and never impossible.

use crate::config::AccuracyConstants;

/// Final hit chance in `[min_chance, max_chance]`, as a percentage
pub fn compute_accuracy(
    part_accuracy: f64,
    affinity_bonus: f64,
    target_evasion: f64,
    attacker_legs_destroyed: bool,
    constants: &AccuracyConstants,
) -> f64 {
    let mut chance = part_accuracy + affinity_bonus - target_evasion;
    if attacker_legs_destroyed {
        chance -= constants.legs_destroyed_penalty;
    }
    chance.clamp(constants.min_chance, constants.max_chance)
}

/// Whether a uniform roll in `[0, 100)` lands under the hit chance
pub fn check_hit(accuracy: f64, roll: f64) -> bool {
    roll < accuracy
}
