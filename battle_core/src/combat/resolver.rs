//! ActionResolver - resolves one queued action against the battle state
//!
//! The resolver never fails: every degenerate input (vanished combatant,
//! fully wrecked target, unrecognized support skill) degrades to a
//! narration-only result with zero effect. Precondition filtering of
//! knocked-out attackers and destroyed parts is the turn resolver's job.

use std::cmp::Ordering;

use super::accuracy::{check_hit, compute_accuracy};
use super::action::QueuedAction;
use super::damage::{attack_damage, special_damage, AttackContext};
use super::result::ActionResult;
use crate::config::BattleConstants;
use crate::model::{Combatant, SpecialAttack};
use crate::rng::RandomSource;
use crate::types::{AffinityAspect, PartSlot, SkillCategory, SupportSkill};

/// Resolves single actions under a fixed set of battle constants
#[derive(Debug, Clone)]
pub struct ActionResolver {
    constants: BattleConstants,
}

impl ActionResolver {
    /// Resolver with the given tunables
    pub fn new(constants: BattleConstants) -> Self {
        ActionResolver { constants }
    }

    /// Borrow the resolver's constants
    pub fn constants(&self) -> &BattleConstants {
        &self.constants
    }

    /// Resolve one action, mutating attacker and target in place
    pub fn resolve(
        &self,
        combatants: &mut [Combatant],
        action: &QueuedAction,
        rng: &mut impl RandomSource,
    ) -> ActionResult {
        if action.attacker.0 >= combatants.len() || action.target.0 >= combatants.len() {
            return ActionResult::no_effect(
                action.attacker,
                action.target,
                action.part_slot,
                "The action fizzles out: no such combatant.",
            );
        }
        if let Some(special) = &action.special {
            self.resolve_special(combatants, action, special, rng)
        } else {
            let category = combatants[action.attacker.0].part(action.part_slot).category;
            match category {
                SkillCategory::Support => self.resolve_support(combatants, action, rng),
                _ => self.resolve_attack(combatants, action, rng),
            }
        }
    }

    /// Shooting/Melee (and skill-less flailing) path. A finite-use Head
    /// spends a use whether the attack lands or not: the shot is fired
    /// either way.
    fn resolve_attack(
        &self,
        combatants: &mut [Combatant],
        action: &QueuedAction,
        rng: &mut impl RandomSource,
    ) -> ActionResult {
        let ai = action.attacker.0;
        let ti = action.target.0;

        let (attacker_name, part_name, power, part_accuracy, category, legs_destroyed, bonus) = {
            let attacker = &combatants[ai];
            let part = attacker.part(action.part_slot);
            let bonus = match part.category {
                SkillCategory::Shooting => attacker.medal.affinity_bonus(AffinityAspect::Shooting),
                SkillCategory::Melee => attacker.medal.affinity_bonus(AffinityAspect::Melee),
                _ => 0.0,
            };
            (
                attacker.name.clone(),
                part.skill_name.clone(),
                part.power,
                part.accuracy,
                part.category,
                attacker.legs.is_destroyed(),
                bonus,
            )
        };
        let (target_name, evasion, defending) = {
            let target = &combatants[ti];
            (target.name.clone(), target.effective_evasion(), target.defending)
        };

        let mut result = ActionResult::new(action.attacker, action.target, action.part_slot);

        let accuracy = compute_accuracy(
            part_accuracy,
            bonus,
            evasion,
            legs_destroyed,
            &self.constants.accuracy,
        );
        let roll = rng.range(0.0, 100.0);
        if !check_hit(accuracy, roll) {
            // A whiff still burns the shot and trickles a little charge,
            // so long miss streaks never starve the gauge
            let attacker = &mut combatants[ai];
            attacker.medal.gain_charge(self.constants.charge.on_miss);
            attacker.part_mut(action.part_slot).consume_use();
            result.narration = format!("{attacker_name}'s {part_name} misses {target_name}!");
            return result;
        }

        let crit = rng.unit() < self.constants.damage.crit_chance;
        let variance = rng.range(
            self.constants.damage.variance_min,
            self.constants.damage.variance_max,
        );
        let nominal = attack_damage(
            AttackContext {
                power,
                melee: category == SkillCategory::Melee,
                legs_destroyed,
                crit,
                target_defending: defending,
            },
            variance,
            &self.constants.damage,
        );

        let slot = match resolve_target_slot(&combatants[ti], action.target_slot, rng) {
            Some(slot) => slot,
            None => {
                combatants[ai].part_mut(action.part_slot).consume_use();
                result.narration =
                    format!("{target_name} is already completely wrecked; the attack finds nothing left to hit.");
                return result;
            }
        };

        let (dealt, destroyed, knocked_out) = {
            let target = &mut combatants[ti];
            let dealt = target.part_mut(slot).apply_damage(nominal);
            let destroyed = target.part(slot).is_destroyed();
            target.medal.gain_charge(self.constants.charge.on_damage_taken);
            (dealt, destroyed, target.is_knocked_out())
        };
        {
            let attacker = &mut combatants[ai];
            attacker.medal.gain_charge(self.constants.charge.on_hit);
            attacker.part_mut(action.part_slot).consume_use();
        }

        result.hit = true;
        result.crit = crit;
        result.damage = dealt;
        result.target_slot = Some(slot);
        result.part_destroyed = destroyed;
        result.target_knocked_out = knocked_out;

        let blow = if crit { "critically hits" } else { "hits" };
        result.narration = format!(
            "{attacker_name}'s {part_name} {blow} {target_name}'s {} for {dealt} damage!",
            slot.label()
        );
        if destroyed {
            result
                .narration
                .push_str(&format!(" The {} is destroyed!", slot.label()));
        }
        if knocked_out {
            result
                .narration
                .push_str(&format!(" {target_name} is knocked out!"));
        }
        result
    }

    /// Medaforce path: spends the whole gauge, always hits, grants no charge
    fn resolve_special(
        &self,
        combatants: &mut [Combatant],
        action: &QueuedAction,
        special: &SpecialAttack,
        rng: &mut impl RandomSource,
    ) -> ActionResult {
        let ai = action.attacker.0;
        let ti = action.target.0;

        let attacker_name = combatants[ai].name.clone();
        // The gauge is spent on invocation, whatever happens next
        combatants[ai].medal.spend_all_charge();

        let (target_name, defending) = {
            let target = &combatants[ti];
            (target.name.clone(), target.defending)
        };

        let mut result = ActionResult::new(action.attacker, action.target, action.part_slot);
        result.special = true;
        result.hits_all = special.hits_all;

        let variance = rng.range(
            self.constants.damage.special_variance_min,
            self.constants.damage.special_variance_max,
        );
        let nominal = special_damage(special.power, variance, defending, &self.constants.damage);

        let slot = match resolve_target_slot(&combatants[ti], action.target_slot, rng) {
            Some(slot) => slot,
            None => {
                result.narration = format!(
                    "{attacker_name} unleashes {}, but {target_name} is already completely wrecked!",
                    special.name
                );
                return result;
            }
        };

        let (dealt, destroyed, knocked_out) = {
            let target = &mut combatants[ti];
            let dealt = target.part_mut(slot).apply_damage(nominal);
            let destroyed = target.part(slot).is_destroyed();
            (dealt, destroyed, target.is_knocked_out())
        };

        result.hit = true;
        result.damage = dealt;
        result.target_slot = Some(slot);
        result.part_destroyed = destroyed;
        result.target_knocked_out = knocked_out;
        result.narration = format!(
            "{attacker_name} unleashes {}! It blasts {target_name}'s {} for {dealt} damage!",
            special.name,
            slot.label()
        );
        if destroyed {
            result
                .narration
                .push_str(&format!(" The {} is destroyed!", slot.label()));
        }
        if knocked_out {
            result
                .narration
                .push_str(&format!(" {target_name} is knocked out!"));
        }
        result
    }

    /// Support path, dispatched exhaustively on the part's support skill
    fn resolve_support(
        &self,
        combatants: &mut [Combatant],
        action: &QueuedAction,
        _rng: &mut impl RandomSource,
    ) -> ActionResult {
        let ai = action.attacker.0;
        let ti = action.target.0;

        let (attacker_name, part_name, power, support_skill, support_bonus) = {
            let attacker = &combatants[ai];
            let part = attacker.part(action.part_slot);
            (
                attacker.name.clone(),
                part.skill_name.clone(),
                part.power,
                part.support_skill,
                attacker.medal.affinity_bonus(AffinityAspect::Support),
            )
        };
        let target_name = combatants[ti].name.clone();

        let mut result = ActionResult::new(action.attacker, action.target, action.part_slot);

        match support_skill {
            Some(SupportSkill::Heal) => {
                // Narrow, deep heal: the worst-percentage damaged part
                let target = &mut combatants[ti];
                let candidate = PartSlot::all()
                    .iter()
                    .copied()
                    .filter(|&slot| {
                        let part = target.part(slot);
                        !part.is_destroyed() && part.armor < part.max_armor
                    })
                    .min_by(|&a, &b| {
                        target
                            .part(a)
                            .armor_percent()
                            .partial_cmp(&target.part(b).armor_percent())
                            .unwrap_or(Ordering::Equal)
                    });
                match candidate {
                    Some(slot) => {
                        let amount = (power + support_bonus).max(0.0) as u32;
                        let healed = target.part_mut(slot).repair(amount);
                        result.hit = true;
                        result.healed = healed;
                        result.target_slot = Some(slot);
                        result.narration = format!(
                            "{attacker_name}'s {part_name} repairs {target_name}'s {} for {healed} armor!",
                            slot.label()
                        );
                    }
                    None => {
                        result.narration = format!(
                            "{attacker_name}'s {part_name} finds nothing on {target_name} worth repairing."
                        );
                    }
                }
            }
            Some(SupportSkill::Shield) => {
                // Broad, shallow heal: half power to every alive part
                let amount = (power / 2.0).floor() as u32;
                let target = &mut combatants[ti];
                let mut healed = 0;
                for &slot in PartSlot::all() {
                    let part = target.part_mut(slot);
                    if !part.is_destroyed() {
                        healed += part.repair(amount);
                    }
                }
                result.hit = true;
                result.healed = healed;
                result.narration = format!(
                    "{attacker_name}'s {part_name} shores up {target_name}'s armor (+{healed} total)!"
                );
            }
            Some(SupportSkill::Charge) => {
                let attacker = &mut combatants[ai];
                let amount = power.max(0.0) as u32;
                attacker.medal.gain_charge(amount);
                result.hit = true;
                result.narration = format!(
                    "{attacker_name}'s {part_name} channels energy into its medal (+{amount} charge)!"
                );
            }
            Some(SupportSkill::Scan) => {
                let integrity = (combatants[ti].health_percent() * 100.0).round();
                result.hit = true;
                result.narration = format!(
                    "{attacker_name}'s {part_name} scans {target_name}: {integrity:.0}% armor integrity."
                );
            }
            None => {
                // Support part with no recognized skill tag: utility action
                // with nothing to model
                result.narration =
                    format!("{attacker_name}'s {part_name} whirs, to no visible effect.");
            }
        }

        combatants[ai].part_mut(action.part_slot).consume_use();
        result
    }
}

/// The requested slot if it is alive, else a uniform pick among alive
/// parts, else `None` (target fully wrecked)
fn resolve_target_slot(
    target: &Combatant,
    requested: PartSlot,
    rng: &mut impl RandomSource,
) -> Option<PartSlot> {
    if !target.part(requested).is_destroyed() {
        return Some(requested);
    }
    let alive = target.alive_parts();
    if alive.is_empty() {
        None
    } else {
        Some(alive[rng.index(alive.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::action::CombatantId;
    use crate::model::{Medal, Part};
    use crate::rng::ScriptedSource;
    use crate::types::Affinity;

    fn shooter(name: &str) -> Combatant {
        Combatant::new(
            name,
            Medal::new(Affinity::Beetle, 1),
            Part::head(SkillCategory::Shooting, "Seeker", 40.0, 75.0, 40, 3),
            Part::new(PartSlot::RightArm, SkillCategory::Shooting, "Revolver", 30.0, 80.0, 0.0, 50),
            Part::new(PartSlot::LeftArm, SkillCategory::Melee, "Hammer", 45.0, 65.0, 0.0, 50),
            Part::new(PartSlot::Legs, SkillCategory::None, "Treads", 0.0, 20.0, 30.0, 45),
        )
    }

    fn medic(name: &str) -> Combatant {
        let mut bot = shooter(name);
        bot.left_arm = Part::new(
            PartSlot::LeftArm,
            SkillCategory::Support,
            "Repair Kit",
            25.0,
            0.0,
            0.0,
            40,
        )
        .with_support(SupportSkill::Heal);
        bot
    }

    fn resolver() -> ActionResolver {
        ActionResolver::new(BattleConstants::default())
    }

    /// Resolver with variance pinned at exactly 1.0 so damage assertions
    /// are not at the mercy of float rounding in the variance sample
    fn pinned_resolver() -> ActionResolver {
        let mut constants = BattleConstants::default();
        constants.damage.variance_min = 1.0;
        constants.damage.variance_max = 1.0;
        constants.damage.special_variance_min = 1.0;
        constants.damage.special_variance_max = 1.0;
        ActionResolver::new(constants)
    }

    fn arm_attack(attacker: usize, target: usize) -> QueuedAction {
        QueuedAction::normal(
            CombatantId(attacker),
            PartSlot::RightArm,
            CombatantId(target),
            PartSlot::RightArm,
            30.0,
        )
    }

    #[test]
    fn test_guaranteed_miss_never_damages() {
        let mut bots = vec![shooter("Alpha"), shooter("Beta")];
        // Evasion far above accuracy: chance clamps to the floor of 5
        bots[1].legs.accuracy = 500.0;

        // Hit roll of 99 against a 5% chance
        let mut rng = ScriptedSource::new([0.99]);
        let result = resolver().resolve(&mut bots, &arm_attack(0, 1), &mut rng);

        assert!(!result.hit);
        assert_eq!(result.damage, 0);
        assert_eq!(bots[1].total_armor(), bots[1].total_max_armor());
        assert!(result.narration.contains("misses"));
    }

    #[test]
    fn test_miss_still_trickles_charge() {
        let mut bots = vec![shooter("Alpha"), shooter("Beta")];
        bots[1].legs.accuracy = 500.0;

        let mut rng = ScriptedSource::new([0.99]);
        resolver().resolve(&mut bots, &arm_attack(0, 1), &mut rng);

        assert_eq!(bots[0].medal.charge, 2);
        assert_eq!(bots[1].medal.charge, 0);
    }

    #[test]
    fn test_hit_applies_damage_and_charge_asymmetry() {
        let mut bots = vec![shooter("Alpha"), shooter("Beta")];

        // hit roll 0, crit roll 0.5 (no crit); variance pinned at 1.0
        // consumes no roll
        let mut rng = ScriptedSource::new([0.0, 0.5]);
        let result = pinned_resolver().resolve(&mut bots, &arm_attack(0, 1), &mut rng);

        assert!(result.hit);
        assert!(!result.crit);
        assert_eq!(result.damage, 30);
        assert_eq!(bots[1].right_arm.armor, 20);
        // Taking damage charges the receiver faster than hitting charges
        // the attacker
        assert_eq!(bots[0].medal.charge, 5);
        assert_eq!(bots[1].medal.charge, 10);
    }

    #[test]
    fn test_critical_hit_multiplies_damage() {
        let mut bots = vec![shooter("Alpha"), shooter("Beta")];
        bots[0].right_arm.power = 40.0;
        bots[1].right_arm.max_armor = 200;
        bots[1].right_arm.armor = 200;

        // hit, forced crit; variance pinned at 1.0
        let mut rng = ScriptedSource::new([0.0, 0.0]);
        let result = pinned_resolver().resolve(&mut bots, &arm_attack(0, 1), &mut rng);

        assert!(result.crit);
        assert_eq!(result.damage, 100);
        assert_eq!(bots[1].right_arm.armor, 100);
    }

    #[test]
    fn test_retargets_when_requested_slot_destroyed() {
        let mut bots = vec![shooter("Alpha"), shooter("Beta")];
        bots[1].right_arm.apply_damage(999);

        // hit, no crit, then re-target pick: 0.4 over
        // [head, left_arm, legs] picks index 1
        let mut rng = ScriptedSource::new([0.0, 0.5, 0.4]);
        let result = pinned_resolver().resolve(&mut bots, &arm_attack(0, 1), &mut rng);

        assert_eq!(result.target_slot, Some(PartSlot::LeftArm));
        assert!(bots[1].left_arm.armor < 50);
    }

    #[test]
    fn test_fully_wrecked_target_short_circuits() {
        let mut bots = vec![shooter("Alpha"), shooter("Beta")];
        for &slot in PartSlot::all() {
            bots[1].part_mut(slot).apply_damage(999);
        }

        let mut rng = ScriptedSource::new([0.0, 0.5]);
        let result = pinned_resolver().resolve(&mut bots, &arm_attack(0, 1), &mut rng);

        assert!(!result.hit);
        assert_eq!(result.damage, 0);
        assert_eq!(result.target_slot, None);
        assert!(result.narration.contains("wrecked"));
    }

    #[test]
    fn test_dealt_damage_clamps_to_remaining_armor() {
        let mut bots = vec![shooter("Alpha"), shooter("Beta")];
        bots[0].right_arm.power = 500.0;

        let mut rng = ScriptedSource::new([0.0, 0.5]);
        let result = pinned_resolver().resolve(&mut bots, &arm_attack(0, 1), &mut rng);

        assert_eq!(result.damage, 50);
        assert!(result.part_destroyed);
        assert!(bots[1].right_arm.is_destroyed());
        assert!(!result.target_knocked_out);
    }

    #[test]
    fn test_head_destruction_knocks_out() {
        let mut bots = vec![shooter("Alpha"), shooter("Beta")];
        bots[0].right_arm.power = 500.0;
        let action = QueuedAction::normal(
            CombatantId(0),
            PartSlot::RightArm,
            CombatantId(1),
            PartSlot::Head,
            30.0,
        );

        let mut rng = ScriptedSource::new([0.0, 0.5]);
        let result = pinned_resolver().resolve(&mut bots, &action, &mut rng);

        assert!(result.part_destroyed);
        assert!(result.target_knocked_out);
        assert!(bots[1].is_knocked_out());
        assert!(result.narration.contains("knocked out"));
    }

    #[test]
    fn test_head_part_consumes_a_use_even_on_miss() {
        let mut bots = vec![shooter("Alpha"), shooter("Beta")];
        bots[1].legs.accuracy = 500.0;
        let action = QueuedAction::normal(
            CombatantId(0),
            PartSlot::Head,
            CombatantId(1),
            PartSlot::RightArm,
            30.0,
        );

        let mut rng = ScriptedSource::new([0.99]);
        resolver().resolve(&mut bots, &action, &mut rng);
        assert_eq!(bots[0].head.uses_left, 2);
    }

    #[test]
    fn test_defending_target_takes_half_damage() {
        let mut bots = vec![shooter("Alpha"), shooter("Beta")];
        bots[1].defending = true;

        let mut rng = ScriptedSource::new([0.0, 0.5]);
        let result = pinned_resolver().resolve(&mut bots, &arm_attack(0, 1), &mut rng);

        assert_eq!(result.damage, 15);
    }

    #[test]
    fn test_special_spends_gauge_and_grants_no_charge() {
        let mut bots = vec![shooter("Alpha"), shooter("Beta")];
        bots[0].medal.gain_charge(100);
        let special = SpecialAttack::new("Gigafall", 120.0, 1);
        let action = QueuedAction::special(
            CombatantId(0),
            CombatantId(1),
            PartSlot::RightArm,
            special,
            50.0,
        );

        // variance pinned at 1.0, no rolls consumed
        let mut rng = ScriptedSource::constant(0.5);
        let result = pinned_resolver().resolve(&mut bots, &action, &mut rng);

        assert!(result.special);
        assert!(result.hit);
        // 120 nominal against 50 remaining armor
        assert_eq!(result.damage, 50);
        assert!(result.part_destroyed);
        assert_eq!(bots[0].medal.charge, 0);
        assert_eq!(bots[1].medal.charge, 0);
    }

    #[test]
    fn test_special_surfaces_hits_all_flag() {
        let mut bots = vec![shooter("Alpha"), shooter("Beta")];
        bots[0].medal.gain_charge(100);
        let special = SpecialAttack::new("Tidal Ruin", 60.0, 1).hitting_all();
        let action = QueuedAction::special(
            CombatantId(0),
            CombatantId(1),
            PartSlot::Legs,
            special,
            50.0,
        );

        let mut rng = ScriptedSource::constant(0.5);
        let result = pinned_resolver().resolve(&mut bots, &action, &mut rng);
        assert!(result.hits_all);
    }

    #[test]
    fn test_heal_targets_worst_percentage_part() {
        let mut bots = vec![medic("Doc"), shooter("Beta")];
        // Head at 90%, right arm at 20%
        bots[1].head.apply_damage(4);
        bots[1].right_arm.apply_damage(40);
        let action = QueuedAction::normal(
            CombatantId(0),
            PartSlot::LeftArm,
            CombatantId(1),
            PartSlot::Head,
            20.0,
        );

        let mut rng = ScriptedSource::constant(0.5);
        let result = resolver().resolve(&mut bots, &action, &mut rng);

        assert_eq!(result.target_slot, Some(PartSlot::RightArm));
        assert_eq!(result.healed, 25);
        assert_eq!(bots[1].right_arm.armor, 35);
        // The barely-scratched head was not the pick
        assert_eq!(bots[1].head.armor, 36);
    }

    #[test]
    fn test_heal_with_nothing_damaged_is_informational() {
        let mut bots = vec![medic("Doc"), shooter("Beta")];
        let action = QueuedAction::normal(
            CombatantId(0),
            PartSlot::LeftArm,
            CombatantId(1),
            PartSlot::Head,
            20.0,
        );

        let mut rng = ScriptedSource::constant(0.5);
        let result = resolver().resolve(&mut bots, &action, &mut rng);

        assert!(!result.hit);
        assert_eq!(result.healed, 0);
        assert!(result.narration.contains("nothing"));
    }

    #[test]
    fn test_heal_skips_destroyed_parts() {
        let mut bots = vec![medic("Doc"), shooter("Beta")];
        bots[1].right_arm.apply_damage(999);
        bots[1].legs.apply_damage(5);
        let action = QueuedAction::normal(
            CombatantId(0),
            PartSlot::LeftArm,
            CombatantId(1),
            PartSlot::Head,
            20.0,
        );

        let mut rng = ScriptedSource::constant(0.5);
        let result = resolver().resolve(&mut bots, &action, &mut rng);

        assert_eq!(result.target_slot, Some(PartSlot::Legs));
        assert!(bots[1].right_arm.is_destroyed());
    }

    #[test]
    fn test_shield_repairs_every_alive_part() {
        let mut bots = vec![medic("Doc"), shooter("Beta")];
        bots[0].left_arm.skill_name = "Barrier".to_string();
        bots[0].left_arm.support_skill = Some(SupportSkill::Shield);
        bots[0].left_arm.power = 30.0;
        bots[1].head.apply_damage(20);
        bots[1].right_arm.apply_damage(20);
        bots[1].legs.apply_damage(999);
        let action = QueuedAction::normal(
            CombatantId(0),
            PartSlot::LeftArm,
            CombatantId(1),
            PartSlot::Head,
            20.0,
        );

        let mut rng = ScriptedSource::constant(0.5);
        let result = resolver().resolve(&mut bots, &action, &mut rng);

        // +15 to head and right arm; destroyed legs untouched
        assert_eq!(result.healed, 30);
        assert_eq!(bots[1].head.armor, 35);
        assert_eq!(bots[1].right_arm.armor, 45);
        assert!(bots[1].legs.is_destroyed());
    }

    #[test]
    fn test_charge_skill_fills_own_gauge() {
        let mut bots = vec![medic("Doc"), shooter("Beta")];
        bots[0].left_arm.skill_name = "Capacitor".to_string();
        bots[0].left_arm.support_skill = Some(SupportSkill::Charge);
        let action = QueuedAction::normal(
            CombatantId(0),
            PartSlot::LeftArm,
            CombatantId(1),
            PartSlot::Head,
            20.0,
        );

        let mut rng = ScriptedSource::constant(0.5);
        let result = resolver().resolve(&mut bots, &action, &mut rng);

        assert!(result.hit);
        assert_eq!(bots[0].medal.charge, 25);
        assert_eq!(bots[1].total_armor(), bots[1].total_max_armor());
    }

    #[test]
    fn test_scan_mutates_nothing() {
        let mut bots = vec![medic("Doc"), shooter("Beta")];
        bots[0].left_arm.skill_name = "Radar".to_string();
        bots[0].left_arm.support_skill = Some(SupportSkill::Scan);
        let before = bots[1].clone();
        let action = QueuedAction::normal(
            CombatantId(0),
            PartSlot::LeftArm,
            CombatantId(1),
            PartSlot::Head,
            20.0,
        );

        let mut rng = ScriptedSource::constant(0.5);
        let result = resolver().resolve(&mut bots, &action, &mut rng);

        assert_eq!(bots[1].total_armor(), before.total_armor());
        assert_eq!(bots[1].medal.charge, before.medal.charge);
        assert!(result.narration.contains("scans"));
    }

    #[test]
    fn test_untagged_support_part_degrades_to_narration() {
        let mut bots = vec![medic("Doc"), shooter("Beta")];
        bots[0].left_arm.support_skill = None;
        let action = QueuedAction::normal(
            CombatantId(0),
            PartSlot::LeftArm,
            CombatantId(1),
            PartSlot::Head,
            20.0,
        );

        let mut rng = ScriptedSource::constant(0.5);
        let result = resolver().resolve(&mut bots, &action, &mut rng);

        assert!(!result.hit);
        assert_eq!(result.damage, 0);
        assert_eq!(result.healed, 0);
    }

    #[test]
    fn test_self_heal_is_supported() {
        let mut bots = vec![medic("Doc"), shooter("Beta")];
        bots[0].right_arm.apply_damage(30);
        let action = QueuedAction::normal(
            CombatantId(0),
            PartSlot::LeftArm,
            CombatantId(0),
            PartSlot::RightArm,
            20.0,
        );

        let mut rng = ScriptedSource::constant(0.5);
        let result = resolver().resolve(&mut bots, &action, &mut rng);

        assert_eq!(result.target_slot, Some(PartSlot::RightArm));
        assert_eq!(bots[0].right_arm.armor, 45);
    }

    #[test]
    fn test_out_of_bounds_ids_fizzle() {
        let mut bots = vec![shooter("Alpha")];
        let action = arm_attack(0, 9);
        let mut rng = ScriptedSource::constant(0.5);
        let result = resolver().resolve(&mut bots, &action, &mut rng);
        assert!(!result.hit);
        assert!(result.narration.contains("fizzles"));
    }
}
