//! QueuedAction - one combatant's declared action for the round

use crate::model::SpecialAttack;
use crate::types::PartSlot;
use serde::{Deserialize, Serialize};

/// Index of a combatant within the battle slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombatantId(pub usize);

/// A declared action, queued by player input or the AI policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueuedAction {
    /// Acting combatant
    pub attacker: CombatantId,
    /// Part the action fires through
    pub part_slot: PartSlot,
    /// Targeted combatant (may equal the attacker for self-support)
    pub target: CombatantId,
    /// Requested target slot; the resolver re-targets if it is destroyed
    pub target_slot: PartSlot,
    /// Special attack to invoke instead of the part's normal skill
    #[serde(default)]
    pub special: Option<SpecialAttack>,
    /// Turn-order priority, normally the attacker's effective speed
    pub priority: f64,
}

impl QueuedAction {
    /// A normal action through a part
    pub fn normal(
        attacker: CombatantId,
        part_slot: PartSlot,
        target: CombatantId,
        target_slot: PartSlot,
        priority: f64,
    ) -> Self {
        QueuedAction {
            attacker,
            part_slot,
            target,
            target_slot,
            special: None,
            priority,
        }
    }

    /// A special (Medaforce) invocation
    pub fn special(
        attacker: CombatantId,
        target: CombatantId,
        target_slot: PartSlot,
        special: SpecialAttack,
        priority: f64,
    ) -> Self {
        QueuedAction {
            attacker,
            // Specials emanate from the whole combatant; the slot is
            // nominal and exempt from destroyed-part invalidation
            part_slot: PartSlot::Head,
            target,
            target_slot,
            special: Some(special),
            priority,
        }
    }

    /// Whether this is a special invocation
    pub fn is_special(&self) -> bool {
        self.special.is_some()
    }
}
