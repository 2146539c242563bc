//! Tunable battle constants

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Tunable constants driving the action, turn, and AI resolvers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleConstants {
    #[serde(default)]
    pub accuracy: AccuracyConstants,
    #[serde(default)]
    pub damage: DamageConstants,
    #[serde(default)]
    pub charge: ChargeConstants,
    #[serde(default)]
    pub turn: TurnConstants,
    #[serde(default)]
    pub ai: AiConstants,
}

impl BattleConstants {
    /// Reject configurations that would break resolver invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.accuracy.min_chance > self.accuracy.max_chance {
            return Err(ConfigError::Validation(
                "accuracy.min_chance exceeds accuracy.max_chance".to_string(),
            ));
        }
        if self.damage.variance_min > self.damage.variance_max {
            return Err(ConfigError::Validation(
                "damage.variance_min exceeds damage.variance_max".to_string(),
            ));
        }
        if self.damage.special_variance_min > self.damage.special_variance_max {
            return Err(ConfigError::Validation(
                "damage.special_variance_min exceeds damage.special_variance_max".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.ai.head_bias) {
            return Err(ConfigError::Validation(
                "ai.head_bias must be in [0, 1]".to_string(),
            ));
        }
        Ok(())
    }
}

/// Hit chance computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccuracyConstants {
    /// Accuracy floor: a hit is never impossible
    #[serde(default = "default_min_chance")]
    pub min_chance: f64,
    /// Accuracy ceiling: a hit is never guaranteed
    #[serde(default = "default_max_chance")]
    pub max_chance: f64,
    /// Flat accuracy loss while the attacker's legs are destroyed
    #[serde(default = "default_legs_penalty")]
    pub legs_destroyed_penalty: f64,
}

impl Default for AccuracyConstants {
    fn default() -> Self {
        AccuracyConstants {
            min_chance: 5.0,
            max_chance: 98.0,
            legs_destroyed_penalty: 10.0,
        }
    }
}

fn default_min_chance() -> f64 {
    5.0
}
fn default_max_chance() -> f64 {
    98.0
}
fn default_legs_penalty() -> f64 {
    10.0
}

/// Damage pipeline multipliers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageConstants {
    /// Chance of a critical hit, rolled independently of the hit roll
    #[serde(default = "default_crit_chance")]
    pub crit_chance: f64,
    /// Damage multiplier on a critical hit
    #[serde(default = "default_crit_multiplier")]
    pub crit_multiplier: f64,
    /// Damage multiplier for melee-category attacks
    #[serde(default = "default_melee_bonus")]
    pub melee_bonus: f64,
    /// Damage multiplier while the attacker's legs are destroyed
    #[serde(default = "default_legs_factor")]
    pub legs_destroyed_factor: f64,
    /// Damage multiplier while the target is defending
    #[serde(default = "default_defend_factor")]
    pub defend_factor: f64,
    /// Lower bound of normal attack variance
    #[serde(default = "default_variance_min")]
    pub variance_min: f64,
    /// Upper bound of normal attack variance
    #[serde(default = "default_variance_max")]
    pub variance_max: f64,
    /// Lower bound of special attack variance (narrower: a guaranteed hit)
    #[serde(default = "default_special_variance_min")]
    pub special_variance_min: f64,
    /// Upper bound of special attack variance
    #[serde(default = "default_special_variance_max")]
    pub special_variance_max: f64,
}

impl Default for DamageConstants {
    fn default() -> Self {
        DamageConstants {
            crit_chance: 0.08,
            crit_multiplier: 2.5,
            melee_bonus: 1.15,
            legs_destroyed_factor: 0.5,
            defend_factor: 0.5,
            variance_min: 0.85,
            variance_max: 1.15,
            special_variance_min: 0.9,
            special_variance_max: 1.1,
        }
    }
}

fn default_crit_chance() -> f64 {
    0.08
}
fn default_crit_multiplier() -> f64 {
    2.5
}
fn default_melee_bonus() -> f64 {
    1.15
}
fn default_legs_factor() -> f64 {
    0.5
}
fn default_defend_factor() -> f64 {
    0.5
}
fn default_variance_min() -> f64 {
    0.85
}
fn default_variance_max() -> f64 {
    1.15
}
fn default_special_variance_min() -> f64 {
    0.9
}
fn default_special_variance_max() -> f64 {
    1.1
}

/// Charge gauge increments
///
/// Taking damage charges the receiver faster than landing hits charges the
/// attacker; the asymmetry is a comeback mechanic and must keep this
/// direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeConstants {
    /// Attacker gain on a miss, so long whiff streaks still build charge
    #[serde(default = "default_charge_on_miss")]
    pub on_miss: u32,
    /// Attacker gain on landing a hit
    #[serde(default = "default_charge_on_hit")]
    pub on_hit: u32,
    /// Target gain on taking damage
    #[serde(default = "default_charge_on_damage_taken")]
    pub on_damage_taken: u32,
}

impl Default for ChargeConstants {
    fn default() -> Self {
        ChargeConstants {
            on_miss: 2,
            on_hit: 5,
            on_damage_taken: 10,
        }
    }
}

fn default_charge_on_miss() -> u32 {
    2
}
fn default_charge_on_hit() -> u32 {
    5
}
fn default_charge_on_damage_taken() -> u32 {
    10
}

/// Turn ordering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnConstants {
    /// Uniform jitter added to each action's priority before sorting, so
    /// equal-speed combatants do not always resolve in the same order
    #[serde(default = "default_jitter_max")]
    pub jitter_max: f64,
    /// Priority boost for special attacks, making them resolve earlier
    #[serde(default = "default_special_priority_boost")]
    pub special_priority_boost: f64,
}

impl Default for TurnConstants {
    fn default() -> Self {
        TurnConstants {
            jitter_max: 5.0,
            special_priority_boost: 20.0,
        }
    }
}

fn default_jitter_max() -> f64 {
    5.0
}
fn default_special_priority_boost() -> f64 {
    20.0
}

/// AI policy thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConstants {
    /// Chance to aim at the Head when it is still alive
    #[serde(default = "default_head_bias")]
    pub head_bias: f64,
    /// Health fraction below which a Heal part is turned on the actor itself
    #[serde(default = "default_self_heal_threshold")]
    pub self_heal_threshold: f64,
}

impl Default for AiConstants {
    fn default() -> Self {
        AiConstants {
            head_bias: 0.4,
            self_heal_threshold: 0.4,
        }
    }
}

fn default_head_bias() -> f64 {
    0.4
}
fn default_self_heal_threshold() -> f64 {
    0.4
}
