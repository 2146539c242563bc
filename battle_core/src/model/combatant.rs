//! Combatant - a named actor built from one medal and four parts

use super::{Medal, Part};
use crate::types::{AffinityAspect, PartSlot, SkillCategory};
use serde::{Deserialize, Serialize};

/// Speed never drops below this once the legs are destroyed
pub const DESTROYED_LEGS_SPEED_FLOOR: f64 = 5.0;

/// Evasion never drops below this once the legs are destroyed
pub const DESTROYED_LEGS_EVASION_FLOOR: f64 = 2.0;

/// A battle actor. Owns its parts directly; no aliasing occurs within the
/// engine, so plain ownership is sufficient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    /// Display name
    pub name: String,
    /// Affinity/charge/leveling component
    pub medal: Medal,
    pub head: Part,
    pub right_arm: Part,
    pub left_arm: Part,
    pub legs: Part,
    /// Driven by player input rather than the AI policy
    #[serde(default)]
    pub player_controlled: bool,
    /// Designated squad leader; the AI focuses these first
    #[serde(default)]
    pub leader: bool,
    /// Transient guard stance, halves incoming damage while set
    #[serde(default)]
    pub defending: bool,
    /// Position within the squad formation for this battle
    #[serde(default)]
    pub formation_slot: u8,
}

impl Combatant {
    /// Assemble a combatant; each part is forced into its named slot
    pub fn new(
        name: &str,
        medal: Medal,
        mut head: Part,
        mut right_arm: Part,
        mut left_arm: Part,
        mut legs: Part,
    ) -> Self {
        head.slot = PartSlot::Head;
        right_arm.slot = PartSlot::RightArm;
        left_arm.slot = PartSlot::LeftArm;
        legs.slot = PartSlot::Legs;
        Combatant {
            name: name.to_string(),
            medal,
            head,
            right_arm,
            left_arm,
            legs,
            player_controlled: false,
            leader: false,
            defending: false,
            formation_slot: 0,
        }
    }

    /// Mark as player-controlled
    pub fn player(mut self) -> Self {
        self.player_controlled = true;
        self
    }

    /// Mark as squad leader
    pub fn as_leader(mut self) -> Self {
        self.leader = true;
        self
    }

    /// Borrow the part in a slot
    pub fn part(&self, slot: PartSlot) -> &Part {
        match slot {
            PartSlot::Head => &self.head,
            PartSlot::RightArm => &self.right_arm,
            PartSlot::LeftArm => &self.left_arm,
            PartSlot::Legs => &self.legs,
        }
    }

    /// Mutably borrow the part in a slot
    pub fn part_mut(&mut self, slot: PartSlot) -> &mut Part {
        match slot {
            PartSlot::Head => &mut self.head,
            PartSlot::RightArm => &mut self.right_arm,
            PartSlot::LeftArm => &mut self.left_arm,
            PartSlot::Legs => &mut self.legs,
        }
    }

    /// Head destruction is an instant, unconditional knockout
    pub fn is_knocked_out(&self) -> bool {
        self.head.is_destroyed()
    }

    /// Slots whose parts still have armor
    pub fn alive_parts(&self) -> Vec<PartSlot> {
        PartSlot::all()
            .iter()
            .copied()
            .filter(|&slot| !self.part(slot).is_destroyed())
            .collect()
    }

    /// Slots usable for a queued action: destroyed parts are excluded, and
    /// the Head is excluded when its skill is None or its uses are spent
    pub fn usable_parts(&self) -> Vec<PartSlot> {
        PartSlot::all()
            .iter()
            .copied()
            .filter(|&slot| {
                let part = self.part(slot);
                if part.is_destroyed() {
                    return false;
                }
                if slot == PartSlot::Head {
                    return part.category != SkillCategory::None && part.has_uses();
                }
                true
            })
            .collect()
    }

    /// Speed from the legs plus the medal's speed bonus; halved and floored
    /// once the legs are destroyed
    pub fn effective_speed(&self) -> f64 {
        let base = self.legs.speed + self.medal.affinity_bonus(AffinityAspect::Speed);
        if self.legs.is_destroyed() {
            (base * 0.5).max(DESTROYED_LEGS_SPEED_FLOOR)
        } else {
            base
        }
    }

    /// Evade stat from the legs; halved and floored once destroyed
    pub fn effective_evasion(&self) -> f64 {
        let base = self.legs.accuracy;
        if self.legs.is_destroyed() {
            (base * 0.5).max(DESTROYED_LEGS_EVASION_FLOOR)
        } else {
            base
        }
    }

    /// Sum of remaining armor across all parts
    pub fn total_armor(&self) -> u32 {
        PartSlot::all()
            .iter()
            .map(|&slot| self.part(slot).armor)
            .sum()
    }

    /// Sum of maximum armor across all parts
    pub fn total_max_armor(&self) -> u32 {
        PartSlot::all()
            .iter()
            .map(|&slot| self.part(slot).max_armor)
            .sum()
    }

    /// Remaining armor as a fraction of max across the whole body
    pub fn health_percent(&self) -> f64 {
        let max = self.total_max_armor();
        if max == 0 {
            return 0.0;
        }
        self.total_armor() as f64 / max as f64
    }

    /// Between battles: every part back to full armor and uses, gauge
    /// emptied, stance cleared
    pub fn full_restore(&mut self) {
        for &slot in PartSlot::all() {
            self.part_mut(slot).restore();
        }
        self.medal.charge = 0;
        self.defending = false;
    }

    /// Partial recovery: repair each non-destroyed part by a fraction of
    /// its max armor. Destroyed parts stay destroyed.
    pub fn rest(&mut self, fraction: f64) {
        let fraction = fraction.clamp(0.0, 1.0);
        for &slot in PartSlot::all() {
            let part = self.part_mut(slot);
            let amount = (part.max_armor as f64 * fraction) as u32;
            part.repair(amount);
        }
    }
}
