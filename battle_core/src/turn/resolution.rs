//! TurnResolver - drive the action resolver across one ordered round
//!
//! Mid-turn invalidation: an action is skipped outright (no result, not
//! even a no-op) when its attacker was knocked out earlier in the same
//! turn, or when the queued part was destroyed earlier in the turn.
//! Special attacks are exempt from the destroyed-part check: they emanate
//! from the whole combatant, not a single part. Filtering combatants that
//! were already knocked out before the round is the orchestrator's job.

use super::order::order_actions;
use crate::combat::{ActionResolver, ActionResult, QueuedAction};
use crate::config::BattleConstants;
use crate::model::Combatant;
use crate::rng::RandomSource;

/// Resolves a whole round of queued actions
#[derive(Debug, Clone)]
pub struct TurnResolver {
    resolver: ActionResolver,
}

impl TurnResolver {
    /// Turn resolver over the given tunables
    pub fn new(constants: BattleConstants) -> Self {
        TurnResolver {
            resolver: ActionResolver::new(constants),
        }
    }

    /// Borrow the underlying action resolver
    pub fn action_resolver(&self) -> &ActionResolver {
        &self.resolver
    }

    /// Order and resolve one round; results are in resolution order,
    /// which is also the presentation layer's replay order
    pub fn resolve_turn(
        &self,
        combatants: &mut [Combatant],
        actions: Vec<QueuedAction>,
        rng: &mut impl RandomSource,
    ) -> Vec<ActionResult> {
        let jitter_max = self.resolver.constants().turn.jitter_max;
        let ordered = order_actions(actions, jitter_max, rng);

        let mut results = Vec::with_capacity(ordered.len());
        for action in &ordered {
            if self.is_invalidated(combatants, action) {
                continue;
            }
            results.push(self.resolver.resolve(combatants, action, rng));
        }
        results
    }

    fn is_invalidated(&self, combatants: &[Combatant], action: &QueuedAction) -> bool {
        let Some(attacker) = combatants.get(action.attacker.0) else {
            // Unknown attacker: let the action resolver narrate the fizzle
            return false;
        };
        if attacker.is_knocked_out() {
            return true;
        }
        !action.is_special() && attacker.part(action.part_slot).is_destroyed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::CombatantId;
    use crate::model::{Medal, Part, SpecialAttack};
    use crate::rng::ScriptedSource;
    use crate::types::{Affinity, PartSlot, SkillCategory};

    fn bot(name: &str) -> Combatant {
        Combatant::new(
            name,
            Medal::new(Affinity::Beetle, 1),
            Part::head(SkillCategory::Shooting, "Seeker", 40.0, 75.0, 40, 3),
            Part::new(PartSlot::RightArm, SkillCategory::Shooting, "Revolver", 30.0, 80.0, 0.0, 50),
            Part::new(PartSlot::LeftArm, SkillCategory::Melee, "Hammer", 45.0, 65.0, 0.0, 50),
            Part::new(PartSlot::Legs, SkillCategory::None, "Treads", 0.0, 20.0, 30.0, 45),
        )
    }

    fn turn_resolver() -> TurnResolver {
        let mut constants = BattleConstants::default();
        constants.damage.variance_min = 1.0;
        constants.damage.variance_max = 1.0;
        TurnResolver::new(constants)
    }

    #[test]
    fn test_resolves_in_priority_order() {
        let mut bots = vec![bot("Alpha"), bot("Beta")];
        let actions = vec![
            QueuedAction::normal(CombatantId(0), PartSlot::RightArm, CombatantId(1), PartSlot::RightArm, 10.0),
            QueuedAction::normal(CombatantId(1), PartSlot::RightArm, CombatantId(0), PartSlot::RightArm, 40.0),
        ];

        // Constant source: equal jitter for both, hit rolls of 20 land
        let mut rng = ScriptedSource::constant(0.2);
        let results = turn_resolver().resolve_turn(&mut bots, actions, &mut rng);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].attacker, CombatantId(1));
        assert_eq!(results[1].attacker, CombatantId(0));
    }

    #[test]
    fn test_mid_turn_knockout_cancels_later_action() {
        let mut bots = vec![bot("Alpha"), bot("Beta")];
        // Alpha's head shot one-shots Beta's head before Beta moves
        bots[0].right_arm.power = 500.0;
        let actions = vec![
            QueuedAction::normal(CombatantId(0), PartSlot::RightArm, CombatantId(1), PartSlot::Head, 50.0),
            QueuedAction::normal(CombatantId(1), PartSlot::RightArm, CombatantId(0), PartSlot::Head, 10.0),
        ];

        // jitter x2, then Alpha's hit roll 0 / crit roll 0.5
        let mut rng = ScriptedSource::new([0.0, 0.0, 0.0, 0.5]);
        let results = turn_resolver().resolve_turn(&mut bots, actions, &mut rng);

        // One fewer result than actions submitted
        assert_eq!(results.len(), 1);
        assert!(results[0].target_knocked_out);
        assert!(bots[1].is_knocked_out());
        assert_eq!(bots[0].total_armor(), bots[0].total_max_armor());
    }

    #[test]
    fn test_mid_turn_part_destruction_cancels_queued_use() {
        let mut bots = vec![bot("Alpha"), bot("Beta")];
        // Alpha destroys exactly the arm Beta queued, without a knockout
        bots[0].right_arm.power = 500.0;
        let actions = vec![
            QueuedAction::normal(CombatantId(0), PartSlot::RightArm, CombatantId(1), PartSlot::RightArm, 50.0),
            QueuedAction::normal(CombatantId(1), PartSlot::RightArm, CombatantId(0), PartSlot::LeftArm, 10.0),
        ];

        let mut rng = ScriptedSource::new([0.0, 0.0, 0.0, 0.5]);
        let results = turn_resolver().resolve_turn(&mut bots, actions, &mut rng);

        assert_eq!(results.len(), 1);
        assert!(results[0].part_destroyed);
        assert!(!bots[1].is_knocked_out());
        assert_eq!(bots[0].total_armor(), bots[0].total_max_armor());
    }

    #[test]
    fn test_special_exempt_from_destroyed_part_check() {
        let mut bots = vec![bot("Alpha"), bot("Beta")];
        bots[0].right_arm.power = 500.0;
        bots[1].medal.gain_charge(100);
        // Beta's special is queued through its right arm, which Alpha
        // destroys first; the special must still resolve
        let actions = vec![
            QueuedAction::normal(CombatantId(0), PartSlot::RightArm, CombatantId(1), PartSlot::RightArm, 50.0),
            QueuedAction {
                attacker: CombatantId(1),
                part_slot: PartSlot::RightArm,
                target: CombatantId(0),
                target_slot: PartSlot::RightArm,
                special: Some(SpecialAttack::new("Gigafall", 80.0, 1)),
                priority: 30.0,
            },
        ];

        let mut rng = ScriptedSource::new([0.0, 0.0, 0.0, 0.5]);
        let results = turn_resolver().resolve_turn(&mut bots, actions, &mut rng);

        assert_eq!(results.len(), 2);
        assert!(bots[1].right_arm.is_destroyed());
        assert!(results[1].special);
        assert_eq!(bots[1].medal.charge, 0);
    }

    #[test]
    fn test_preexisting_destroyed_part_is_filtered() {
        let mut bots = vec![bot("Alpha"), bot("Beta")];
        bots[0].right_arm.apply_damage(999);
        let actions = vec![QueuedAction::normal(
            CombatantId(0),
            PartSlot::RightArm,
            CombatantId(1),
            PartSlot::Head,
            10.0,
        )];

        let mut rng = ScriptedSource::constant(0.5);
        let results = turn_resolver().resolve_turn(&mut bots, actions, &mut rng);
        assert!(results.is_empty());
    }
}
