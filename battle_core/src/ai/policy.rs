//! Rule pipeline for machine-controlled combatants
//!
//! Rules are ranked and evaluated top to bottom; the first one that
//! applies wins:
//!
//! 1. struggle: no usable part left, flail with the head anyway
//! 2. medaforce: the gauge is full and a special is unlocked
//! 3. attack: fire the highest-power usable part; a Heal part in that
//!    slot turns on a badly dented actor instead

use std::cmp::Ordering;

use super::target::{select_slot, select_target};
use crate::combat::{CombatantId, QueuedAction};
use crate::config::BattleConstants;
use crate::model::Combatant;
use crate::rng::RandomSource;
use crate::types::{PartSlot, SkillCategory, SupportSkill};

/// Decide one action for `actor`. Returns `None` when every enemy is
/// already knocked out (the battle is over, nothing to queue).
pub fn decide(
    combatants: &[Combatant],
    actor: CombatantId,
    enemies: &[CombatantId],
    constants: &BattleConstants,
    rng: &mut impl RandomSource,
) -> Option<QueuedAction> {
    let me = combatants.get(actor.0)?;
    if me.is_knocked_out() {
        return None;
    }
    let target = select_target(combatants, enemies)?;
    let priority = me.effective_speed();

    // Rule 1: struggle. Skill-less legs count as usable for queueing but
    // carry no action, so the pipeline only looks at parts with a skill.
    // With none left, flail with whatever remains of the head; it misses
    // a lot, but still trickles charge.
    let usable: Vec<PartSlot> = me
        .usable_parts()
        .into_iter()
        .filter(|&slot| me.part(slot).category != SkillCategory::None)
        .collect();
    if usable.is_empty() {
        let slot = select_slot(&combatants[target.0], &constants.ai, rng);
        return Some(QueuedAction::normal(
            actor,
            PartSlot::Head,
            target,
            slot,
            priority,
        ));
    }

    // Rule 2: medaforce. A full gauge is never sat on.
    if me.medal.can_use_special() {
        let unlocked = me.medal.unlocked_specials();
        if !unlocked.is_empty() {
            let special = unlocked[rng.index(unlocked.len())].clone();
            let slot = select_slot(&combatants[target.0], &constants.ai, rng);
            return Some(QueuedAction::special(
                actor,
                target,
                slot,
                special,
                priority + constants.turn.special_priority_boost,
            ));
        }
    }

    // Rule 3: the highest-power usable part. Only when that pick is a
    // Heal part does a badly dented actor turn it on itself; any other
    // support pick falls back to the strongest offensive part, or to
    // the actor itself when only support parts remain (buffing the
    // enemy helps nobody).
    let pick = strongest(me, usable.iter().copied())?;
    if me.part(pick).support_skill == Some(SupportSkill::Heal)
        && me.health_percent() < constants.ai.self_heal_threshold
    {
        return Some(QueuedAction::normal(actor, pick, actor, PartSlot::Head, priority));
    }
    if me.part(pick).category.is_offensive() {
        let target_slot = select_slot(&combatants[target.0], &constants.ai, rng);
        return Some(QueuedAction::normal(actor, pick, target, target_slot, priority));
    }
    let offensive = strongest(me, usable.iter().copied().filter(|&slot| {
        me.part(slot).category.is_offensive()
    }));
    match offensive {
        Some(slot) => {
            let target_slot = select_slot(&combatants[target.0], &constants.ai, rng);
            Some(QueuedAction::normal(actor, slot, target, target_slot, priority))
        }
        None => Some(QueuedAction::normal(actor, pick, actor, PartSlot::Head, priority)),
    }
}

fn strongest(me: &Combatant, slots: impl Iterator<Item = PartSlot>) -> Option<PartSlot> {
    slots.max_by(|&a, &b| {
        me.part(a)
            .power
            .partial_cmp(&me.part(b).power)
            .unwrap_or(Ordering::Equal)
    })
}
