//! Medal - the affinity, leveling, and charge component of a combatant

use crate::types::{Affinity, AffinityAspect};
use serde::{Deserialize, Serialize};

/// Default charge gauge capacity
pub const DEFAULT_MAX_CHARGE: u32 = 100;

/// Experience needed to clear the current level
fn level_threshold(level: u32) -> u32 {
    level * 50
}

/// Minimum level required to use a special attack of the given tier
fn tier_level_requirement(tier: u8) -> u32 {
    match tier {
        0 | 1 => 1,
        2 => 3,
        _ => 5,
    }
}

/// A high-power guaranteed-hit attack unlocked by medal level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialAttack {
    /// Display name
    pub name: String,
    /// Base power, resolved with narrow variance and no accuracy check
    pub power: f64,
    /// Unlock tier: 1 always available, 2 at level 3, 3 at level 5
    pub tier: u8,
    /// Whether the attack strikes every enemy (iteration is the caller's job)
    #[serde(default)]
    pub hits_all: bool,
}

impl SpecialAttack {
    /// Create a single-target special attack
    pub fn new(name: &str, power: f64, tier: u8) -> Self {
        SpecialAttack {
            name: name.to_string(),
            power,
            tier,
            hits_all: false,
        }
    }

    /// Mark the attack as hitting every enemy
    pub fn hitting_all(mut self) -> Self {
        self.hits_all = true;
        self
    }
}

/// Affinity/medal state: grants category bonuses and gates special attacks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medal {
    /// Affinity category
    pub affinity: Affinity,
    /// Current level, at least 1
    pub level: u32,
    /// Experience toward the next level
    pub exp: u32,
    /// Charge gauge, always in `[0, max_charge]`
    pub charge: u32,
    /// Charge gauge capacity
    pub max_charge: u32,
    /// Special attacks this medal knows, across all tiers
    pub specials: Vec<SpecialAttack>,
}

impl Medal {
    /// Create a medal at the given level with an empty gauge
    pub fn new(affinity: Affinity, level: u32) -> Self {
        Medal {
            affinity,
            level: level.max(1),
            exp: 0,
            charge: 0,
            max_charge: DEFAULT_MAX_CHARGE,
            specials: Vec::new(),
        }
    }

    /// Add a special attack to this medal
    pub fn with_special(mut self, special: SpecialAttack) -> Self {
        self.specials.push(special);
        self
    }

    /// A full gauge is required to invoke a special attack
    pub fn can_use_special(&self) -> bool {
        self.charge == self.max_charge
    }

    /// Specials whose tier is unlocked at the current level
    pub fn unlocked_specials(&self) -> Vec<&SpecialAttack> {
        self.specials
            .iter()
            .filter(|s| self.level >= tier_level_requirement(s.tier))
            .collect()
    }

    /// Add charge, clamped at the gauge capacity
    pub fn gain_charge(&mut self, amount: u32) {
        self.charge = (self.charge + amount).min(self.max_charge);
    }

    /// Empty the gauge, returning how much was spent
    pub fn spend_all_charge(&mut self) -> u32 {
        let spent = self.charge;
        self.charge = 0;
        spent
    }

    /// Award experience; the counter resets on level-up, so at most one
    /// level is gained per award. Returns the levels gained (0 or 1).
    pub fn gain_experience(&mut self, amount: u32) -> u32 {
        self.exp += amount;
        if self.exp >= level_threshold(self.level) {
            self.level += 1;
            self.exp = 0;
            1
        } else {
            0
        }
    }

    /// Affinity bonus for one combat aspect, scaling with level
    pub fn affinity_bonus(&self, aspect: AffinityAspect) -> f64 {
        let (shooting, melee, support, speed) = affinity_weights(self.affinity);
        let weight = match aspect {
            AffinityAspect::Shooting => shooting,
            AffinityAspect::Melee => melee,
            AffinityAspect::Support => support,
            AffinityAspect::Speed => speed,
        };
        weight * self.level as f64
    }
}

/// Per-affinity bonus weights (shooting, melee, support, speed)
fn affinity_weights(affinity: Affinity) -> (f64, f64, f64, f64) {
    match affinity {
        Affinity::Beetle => (2.0, 0.0, 0.0, 1.0),
        Affinity::Stag => (0.0, 2.0, 0.0, 1.0),
        Affinity::Dragon => (1.0, 2.0, 0.0, 0.0),
        Affinity::Phoenix => (1.0, 0.0, 2.0, 0.0),
        Affinity::Tortoise => (0.0, 1.0, 2.0, 0.0),
        Affinity::Serpent => (1.0, 1.0, 0.0, 1.0),
        Affinity::Wolf => (0.0, 2.0, 1.0, 0.0),
        Affinity::Bear => (0.0, 3.0, 0.0, 0.0),
        Affinity::Falcon => (1.0, 0.0, 0.0, 2.0),
        Affinity::Mantis => (0.0, 1.0, 0.0, 2.0),
        Affinity::Spider => (1.0, 0.0, 1.0, 1.0),
        Affinity::Mermaid => (0.0, 0.0, 2.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn medal_with_tiers(level: u32) -> Medal {
        Medal::new(Affinity::Beetle, level)
            .with_special(SpecialAttack::new("Seeker Volley", 50.0, 1))
            .with_special(SpecialAttack::new("Twin Lance", 80.0, 2))
            .with_special(SpecialAttack::new("Gigafall", 120.0, 3).hitting_all())
    }

    #[test]
    fn test_level_floor_is_one() {
        assert_eq!(Medal::new(Affinity::Stag, 0).level, 1);
    }

    #[test]
    fn test_charge_clamps_at_capacity() {
        let mut medal = Medal::new(Affinity::Beetle, 1);
        medal.gain_charge(60);
        medal.gain_charge(60);
        assert_eq!(medal.charge, medal.max_charge);
        assert!(medal.can_use_special());
    }

    #[test]
    fn test_spend_all_charge_resets_to_zero() {
        let mut medal = Medal::new(Affinity::Beetle, 1);
        medal.gain_charge(100);
        assert_eq!(medal.spend_all_charge(), 100);
        assert_eq!(medal.charge, 0);
        assert!(!medal.can_use_special());
    }

    #[test]
    fn test_tier_unlocks_by_level() {
        assert_eq!(medal_with_tiers(1).unlocked_specials().len(), 1);
        assert_eq!(medal_with_tiers(2).unlocked_specials().len(), 1);
        assert_eq!(medal_with_tiers(3).unlocked_specials().len(), 2);
        assert_eq!(medal_with_tiers(4).unlocked_specials().len(), 2);
        assert_eq!(medal_with_tiers(5).unlocked_specials().len(), 3);
    }

    #[test]
    fn test_experience_threshold_scales_with_level() {
        let mut medal = Medal::new(Affinity::Beetle, 1);
        assert_eq!(medal.gain_experience(49), 0);
        assert_eq!(medal.level, 1);

        // 49 + 1 clears level 1's threshold of 50
        assert_eq!(medal.gain_experience(1), 1);
        assert_eq!(medal.level, 2);
        assert_eq!(medal.exp, 0);

        // level 2 needs 100
        assert_eq!(medal.gain_experience(99), 0);
        assert_eq!(medal.gain_experience(1), 1);
        assert_eq!(medal.level, 3);
    }

    #[test]
    fn test_affinity_bonus_scales_with_level() {
        let low = Medal::new(Affinity::Beetle, 1);
        let high = Medal::new(Affinity::Beetle, 4);
        assert!((low.affinity_bonus(AffinityAspect::Shooting) - 2.0).abs() < f64::EPSILON);
        assert!((high.affinity_bonus(AffinityAspect::Shooting) - 8.0).abs() < f64::EPSILON);
        assert!((high.affinity_bonus(AffinityAspect::Melee) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_every_affinity_has_a_specialty() {
        for &affinity in Affinity::all() {
            let medal = Medal::new(affinity, 1);
            let total: f64 = [
                AffinityAspect::Shooting,
                AffinityAspect::Melee,
                AffinityAspect::Support,
                AffinityAspect::Speed,
            ]
            .into_iter()
            .map(|aspect| medal.affinity_bonus(aspect))
            .sum();
            assert!(total > 0.0, "{affinity:?} grants no bonuses");
        }
    }
}
