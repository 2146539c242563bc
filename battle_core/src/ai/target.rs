//! Target and slot selection

use crate::combat::CombatantId;
use crate::config::AiConstants;
use crate::model::Combatant;
use crate::rng::RandomSource;
use crate::types::PartSlot;

/// Pick an enemy to attack: a live leader first, otherwise the live enemy
/// with the lowest total remaining armor (focus fire on the weakest)
pub fn select_target(combatants: &[Combatant], enemies: &[CombatantId]) -> Option<CombatantId> {
    let live: Vec<CombatantId> = enemies
        .iter()
        .copied()
        .filter(|id| {
            combatants
                .get(id.0)
                .map(|c| !c.is_knocked_out())
                .unwrap_or(false)
        })
        .collect();

    if let Some(&leader) = live.iter().find(|id| combatants[id.0].leader) {
        return Some(leader);
    }
    live.into_iter()
        .min_by_key(|id| combatants[id.0].total_armor())
}

/// Pick a slot on the target: a head-bias roll first, then a uniform pick
/// among alive slots (the Head stays in the pool when the bias roll fails)
pub fn select_slot(
    target: &Combatant,
    constants: &AiConstants,
    rng: &mut impl RandomSource,
) -> PartSlot {
    if !target.head.is_destroyed() && rng.unit() < constants.head_bias {
        return PartSlot::Head;
    }
    let alive = target.alive_parts();
    if alive.is_empty() {
        return PartSlot::Head;
    }
    alive[rng.index(alive.len())]
}
