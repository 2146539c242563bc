//! ActionResult - outcome of one resolved action

use super::action::CombatantId;
use crate::types::PartSlot;
use serde::{Deserialize, Serialize};

/// What one action did
///
/// Results are only meaningful relative to earlier results in the same
/// turn: a `target_knocked_out` here explains why a later queued action
/// from that target never produced a result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResult {
    /// Acting combatant
    pub attacker: CombatantId,
    /// Targeted combatant
    pub target: CombatantId,
    /// Part the action fired through
    pub part_slot: PartSlot,
    /// Slot actually affected; `None` when the action had no part effect
    pub target_slot: Option<PartSlot>,
    /// Whether the action connected
    pub hit: bool,
    /// Whether the hit was critical
    pub crit: bool,
    /// Armor actually removed (may be less than nominal damage)
    pub damage: u32,
    /// Armor actually restored
    pub healed: u32,
    /// The affected part reached zero armor this action
    pub part_destroyed: bool,
    /// The target's head is destroyed after this action
    pub target_knocked_out: bool,
    /// This was a special (Medaforce) invocation
    pub special: bool,
    /// The invoked special strikes every enemy (iteration is the caller's job)
    pub hits_all: bool,
    /// Human-readable narration for the presentation layer
    pub narration: String,
}

impl ActionResult {
    /// A blank result between the given combatants
    pub fn new(attacker: CombatantId, target: CombatantId, part_slot: PartSlot) -> Self {
        ActionResult {
            attacker,
            target,
            part_slot,
            target_slot: None,
            hit: false,
            crit: false,
            damage: 0,
            healed: 0,
            part_destroyed: false,
            target_knocked_out: false,
            special: false,
            hits_all: false,
            narration: String::new(),
        }
    }

    /// A narration-only result with zero effect
    pub fn no_effect(
        attacker: CombatantId,
        target: CombatantId,
        part_slot: PartSlot,
        narration: &str,
    ) -> Self {
        ActionResult {
            narration: narration.to_string(),
            ..ActionResult::new(attacker, target, part_slot)
        }
    }

    /// One-line summary for logs
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.crit {
            parts.push("critical".to_string());
        }
        if self.damage > 0 {
            parts.push(format!("{} damage", self.damage));
        }
        if self.healed > 0 {
            parts.push(format!("{} repaired", self.healed));
        }
        if self.part_destroyed {
            parts.push("part destroyed".to_string());
        }
        if self.target_knocked_out {
            parts.push("KNOCKOUT".to_string());
        }
        if parts.is_empty() {
            "no effect".to_string()
        } else {
            parts.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_effect_result() {
        let result = ActionResult::no_effect(
            CombatantId(0),
            CombatantId(1),
            PartSlot::RightArm,
            "nothing happens",
        );
        assert!(!result.hit);
        assert_eq!(result.damage, 0);
        assert_eq!(result.summary(), "no effect");
    }

    #[test]
    fn test_summary_lists_outcomes() {
        let mut result = ActionResult::new(CombatantId(0), CombatantId(1), PartSlot::Head);
        result.hit = true;
        result.crit = true;
        result.damage = 42;
        result.part_destroyed = true;
        result.target_knocked_out = true;

        let summary = result.summary();
        assert!(summary.contains("critical"));
        assert!(summary.contains("42 damage"));
        assert!(summary.contains("KNOCKOUT"));
    }

    #[test]
    fn test_result_serializes_for_replay() {
        let mut result = ActionResult::new(CombatantId(2), CombatantId(0), PartSlot::LeftArm);
        result.hit = true;
        result.damage = 17;
        result.target_slot = Some(PartSlot::Legs);

        let json = serde_json::to_string(&result).unwrap();
        let back: ActionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.damage, 17);
        assert_eq!(back.target_slot, Some(PartSlot::Legs));
    }
}
