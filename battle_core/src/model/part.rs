//! Part - one equipped body component with its own armor pool

use crate::types::{PartSlot, SkillCategory, SupportSkill};
use serde::{Deserialize, Serialize};

/// One of the four components a combatant is built from
///
/// A part is never destroyed as an object: at zero armor it stays equipped
/// but inert, and only a between-battle restore brings it back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// Slot this part occupies
    pub slot: PartSlot,
    /// Broad skill category
    pub category: SkillCategory,
    /// Specific skill name (flavor tag, e.g. "Revolver", "Hammer")
    pub skill_name: String,
    /// Support behavior, for Support-category parts
    #[serde(default)]
    pub support_skill: Option<SupportSkill>,
    /// Attack power or support potency
    pub power: f64,
    /// Base accuracy (doubles as the evade stat on Legs)
    pub accuracy: f64,
    /// Speed contribution (meaningful on Legs)
    pub speed: f64,
    /// Maximum armor
    pub max_armor: u32,
    /// Current armor, always in `[0, max_armor]`
    pub armor: u32,
    /// Maximum uses; 0 means not use-limited (only Heads carry a limit)
    #[serde(default)]
    pub max_uses: u32,
    /// Remaining uses, always in `[0, max_uses]`
    #[serde(default)]
    pub uses_left: u32,
}

impl Part {
    /// Create a part at full armor
    pub fn new(
        slot: PartSlot,
        category: SkillCategory,
        skill_name: &str,
        power: f64,
        accuracy: f64,
        speed: f64,
        max_armor: u32,
    ) -> Self {
        Part {
            slot,
            category,
            skill_name: skill_name.to_string(),
            support_skill: None,
            power,
            accuracy,
            speed,
            max_armor,
            armor: max_armor,
            max_uses: 0,
            uses_left: 0,
        }
    }

    /// Create a head part with a finite use count
    pub fn head(
        category: SkillCategory,
        skill_name: &str,
        power: f64,
        accuracy: f64,
        max_armor: u32,
        max_uses: u32,
    ) -> Self {
        Part {
            max_uses,
            uses_left: max_uses,
            ..Part::new(PartSlot::Head, category, skill_name, power, accuracy, 0.0, max_armor)
        }
    }

    /// Attach a support skill (for Support-category parts)
    pub fn with_support(mut self, skill: SupportSkill) -> Self {
        self.support_skill = Some(skill);
        self
    }

    /// A part with zero armor is destroyed and inert
    pub fn is_destroyed(&self) -> bool {
        self.armor == 0
    }

    /// Remaining armor as a fraction of max (0 when max is 0)
    pub fn armor_percent(&self) -> f64 {
        if self.max_armor == 0 {
            return 0.0;
        }
        self.armor as f64 / self.max_armor as f64
    }

    /// Whether this part is use-limited and has uses remaining
    pub fn has_uses(&self) -> bool {
        self.max_uses == 0 || self.uses_left > 0
    }

    /// Reduce armor, flooring at 0; returns the actual reduction dealt
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        let dealt = amount.min(self.armor);
        self.armor -= dealt;
        dealt
    }

    /// Restore armor, capped at max; no-op on destroyed parts.
    /// Returns the amount actually repaired.
    pub fn repair(&mut self, amount: u32) -> u32 {
        if self.is_destroyed() {
            return 0;
        }
        let repaired = amount.min(self.max_armor - self.armor);
        self.armor += repaired;
        repaired
    }

    /// Spend one use of a use-limited part, flooring at 0
    pub fn consume_use(&mut self) {
        if self.max_uses > 0 {
            self.uses_left = self.uses_left.saturating_sub(1);
        }
    }

    /// Reset armor and uses to their maximums
    pub fn restore(&mut self) {
        self.armor = self.max_armor;
        self.uses_left = self.max_uses;
    }
}
