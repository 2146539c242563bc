//! Damage pipelines
//!
//! Attack: power, melee bonus, destroyed-legs penalty, sampled variance,
//! crit multiplier, defend factor, floored at a minimum of 1.
//! Special: power and a narrower sampled variance only; specials skip the
//! accuracy and crit machinery entirely.

use crate::config::DamageConstants;

/// Attacker/target conditions feeding the attack damage pipeline
#[derive(Debug, Clone, Copy)]
pub struct AttackContext {
    /// Base power of the attacking part
    pub power: f64,
    /// Melee-category attacks hit harder up close
    pub melee: bool,
    /// Attacker cannot brace properly without legs
    pub legs_destroyed: bool,
    /// Critical hit triggered
    pub crit: bool,
    /// Target is in a guard stance
    pub target_defending: bool,
}

/// Damage for a landed normal attack; `variance` is a sampled multiplier
pub fn attack_damage(ctx: AttackContext, variance: f64, constants: &DamageConstants) -> u32 {
    let mut damage = ctx.power;
    if ctx.melee {
        damage *= constants.melee_bonus;
    }
    if ctx.legs_destroyed {
        damage *= constants.legs_destroyed_factor;
    }
    damage *= variance;
    if ctx.crit {
        damage *= constants.crit_multiplier;
    }
    if ctx.target_defending {
        damage *= constants.defend_factor;
    }
    (damage.floor() as u32).max(1)
}

/// Damage for a special attack; `variance` is a sampled multiplier
pub fn special_damage(
    power: f64,
    variance: f64,
    target_defending: bool,
    constants: &DamageConstants,
) -> u32 {
    let mut damage = power * variance;
    if target_defending {
        damage *= constants.defend_factor;
    }
    (damage.floor() as u32).max(1)
}
