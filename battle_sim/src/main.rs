//! Battle Sim - a seeded AI-vs-AI squad battle on the console
//!
//! This simulator shows:
//! - Assembling squads from medals and parts (battle_core model)
//! - AI action selection each round (battle_core::ai)
//! - Ordered resolution with narration (battle_core::turn)
//! - Experience awards for the winning squad
//!
//! Usage: `battle_sim [seed]` - the same seed replays the same battle.

use battle_core::ai;
use battle_core::{
    Affinity, BattleConstants, Combatant, CombatantId, Medal, Part, PartSlot, QueuedAction,
    RngSource, SkillCategory, SpecialAttack, SupportSkill, TurnResolver,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const ROUND_CAP: u32 = 50;
const DEFAULT_SEED: u64 = 7;
const VICTORY_EXP: u32 = 40;

/// Squad Alpha: a leader bruiser, a gunner, and a medic
fn squad_alpha() -> Vec<Combatant> {
    vec![
        Combatant::new(
            "Ironclad",
            Medal::new(Affinity::Bear, 2)
                .with_special(SpecialAttack::new("Seismic Slam", 90.0, 1)),
            Part::head(SkillCategory::Melee, "Ram Crest", 45.0, 70.0, 45, 2),
            Part::new(PartSlot::RightArm, SkillCategory::Melee, "Crusher", 50.0, 60.0, 0.0, 55),
            Part::new(PartSlot::LeftArm, SkillCategory::Melee, "Breaker", 42.0, 68.0, 0.0, 55),
            Part::new(PartSlot::Legs, SkillCategory::None, "Stomper Treads", 0.0, 15.0, 22.0, 50),
        )
        .as_leader(),
        Combatant::new(
            "Longshot",
            Medal::new(Affinity::Beetle, 2)
                .with_special(SpecialAttack::new("Seeker Volley", 70.0, 1)),
            Part::head(SkillCategory::Shooting, "Spotter", 35.0, 85.0, 38, 3),
            Part::new(PartSlot::RightArm, SkillCategory::Shooting, "Rail Rifle", 44.0, 82.0, 0.0, 45),
            Part::new(PartSlot::LeftArm, SkillCategory::Shooting, "Sidearm", 28.0, 88.0, 0.0, 45),
            Part::new(PartSlot::Legs, SkillCategory::None, "Strider", 0.0, 28.0, 34.0, 40),
        ),
        Combatant::new(
            "Tinker",
            Medal::new(Affinity::Mermaid, 1),
            Part::head(SkillCategory::Shooting, "Peashooter", 22.0, 80.0, 36, 4),
            Part::new(PartSlot::RightArm, SkillCategory::Support, "Repair Kit", 28.0, 0.0, 0.0, 42)
                .with_support(SupportSkill::Heal),
            Part::new(PartSlot::LeftArm, SkillCategory::Support, "Barrier", 24.0, 0.0, 0.0, 42)
                .with_support(SupportSkill::Shield),
            Part::new(PartSlot::Legs, SkillCategory::None, "Hover Skirt", 0.0, 24.0, 26.0, 38),
        ),
    ]
}

/// Squad Beta: a fast duelist, a charger, and a leader all-rounder
fn squad_beta() -> Vec<Combatant> {
    vec![
        Combatant::new(
            "Quickfang",
            Medal::new(Affinity::Mantis, 2)
                .with_special(SpecialAttack::new("Scissor Rush", 75.0, 1)),
            Part::head(SkillCategory::Melee, "Fang Crest", 38.0, 78.0, 36, 3),
            Part::new(PartSlot::RightArm, SkillCategory::Melee, "Sickle", 40.0, 76.0, 0.0, 42),
            Part::new(PartSlot::LeftArm, SkillCategory::Melee, "Claw", 36.0, 80.0, 0.0, 42),
            Part::new(PartSlot::Legs, SkillCategory::None, "Dash Legs", 0.0, 34.0, 40.0, 36),
        ),
        Combatant::new(
            "Dynamo",
            Medal::new(Affinity::Phoenix, 1)
                .with_special(SpecialAttack::new("Solar Flare", 85.0, 1).hitting_all()),
            Part::head(SkillCategory::Shooting, "Flare Lens", 30.0, 75.0, 40, 3),
            Part::new(PartSlot::RightArm, SkillCategory::Support, "Capacitor", 30.0, 0.0, 0.0, 48)
                .with_support(SupportSkill::Charge),
            Part::new(PartSlot::LeftArm, SkillCategory::Shooting, "Ember Gun", 34.0, 78.0, 0.0, 48),
            Part::new(PartSlot::Legs, SkillCategory::None, "Coil Legs", 0.0, 20.0, 24.0, 44),
        ),
        Combatant::new(
            "Bastion",
            Medal::new(Affinity::Serpent, 2)
                .with_special(SpecialAttack::new("Coil Crush", 80.0, 1)),
            Part::head(SkillCategory::Shooting, "Watcher", 32.0, 80.0, 48, 3),
            Part::new(PartSlot::RightArm, SkillCategory::Shooting, "Bolt Thrower", 38.0, 78.0, 0.0, 52),
            Part::new(PartSlot::LeftArm, SkillCategory::Melee, "Tail Blade", 40.0, 70.0, 0.0, 52),
            Part::new(PartSlot::Legs, SkillCategory::None, "Slither Base", 0.0, 22.0, 28.0, 48),
        )
        .as_leader(),
    ]
}

fn squad_wiped(combatants: &[Combatant], ids: &[CombatantId]) -> bool {
    ids.iter().all(|id| combatants[id.0].is_knocked_out())
}

/// Expand a hits-all special into one queued action per live enemy; the
/// gauge is only spent once, on the first invocation resolved.
fn expand_hits_all(
    action: QueuedAction,
    combatants: &[Combatant],
    enemies: &[CombatantId],
    actions: &mut Vec<QueuedAction>,
) {
    let hits_all = action
        .special
        .as_ref()
        .map(|s| s.hits_all)
        .unwrap_or(false);
    if !hits_all {
        actions.push(action);
        return;
    }
    for &enemy in enemies {
        if combatants[enemy.0].is_knocked_out() {
            continue;
        }
        let mut fanned = action.clone();
        fanned.target = enemy;
        actions.push(fanned);
    }
}

fn print_roster(combatants: &[Combatant], ids: &[CombatantId]) {
    for &id in ids {
        let bot = &combatants[id.0];
        let status = if bot.is_knocked_out() {
            "KO".to_string()
        } else {
            format!(
                "{:.0}% armor, {} charge",
                bot.health_percent() * 100.0,
                bot.medal.charge
            )
        };
        println!("  {} (Lv{} {:?}): {}", bot.name, bot.medal.level, bot.medal.affinity, status);
    }
}

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_SEED);
    let mut rng = RngSource(ChaCha8Rng::seed_from_u64(seed));

    let constants = BattleConstants::default();
    let resolver = TurnResolver::new(constants.clone());

    let mut combatants = squad_alpha();
    let split = combatants.len();
    combatants.extend(squad_beta());

    let alpha_ids: Vec<CombatantId> = (0..split).map(CombatantId).collect();
    let beta_ids: Vec<CombatantId> = (split..combatants.len()).map(CombatantId).collect();

    println!("=== Robattle! (seed {seed}) ===");
    print_roster(&combatants, &alpha_ids);
    println!("  -- versus --");
    print_roster(&combatants, &beta_ids);

    let mut winner: Option<&str> = None;
    for round in 1..=ROUND_CAP {
        let mut actions = Vec::new();
        for id in 0..combatants.len() {
            let actor = CombatantId(id);
            let enemies = if id < split { &beta_ids } else { &alpha_ids };
            if let Some(action) = ai::decide(&combatants, actor, enemies, &constants, &mut rng) {
                expand_hits_all(action, &combatants, enemies, &mut actions);
            }
        }
        if actions.is_empty() {
            break;
        }

        println!("\n-- Round {round} --");
        for result in resolver.resolve_turn(&mut combatants, actions, &mut rng) {
            println!("{}", result.narration);
        }

        if squad_wiped(&combatants, &beta_ids) {
            winner = Some("Squad Alpha");
            break;
        }
        if squad_wiped(&combatants, &alpha_ids) {
            winner = Some("Squad Beta");
            break;
        }
    }

    println!();
    match winner {
        Some(name) => {
            println!("=== {name} wins! ===");
            let winners = if name == "Squad Alpha" { &alpha_ids } else { &beta_ids };
            for &id in winners {
                let bot = &mut combatants[id.0];
                if bot.is_knocked_out() {
                    continue;
                }
                let gained = bot.medal.gain_experience(VICTORY_EXP);
                if gained > 0 {
                    println!("{} reaches medal level {}!", bot.name, bot.medal.level);
                }
            }
        }
        None => println!("=== Double knockout - the referee calls it a draw ==="),
    }

    println!("\nFinal standings:");
    print_roster(&combatants, &alpha_ids);
    println!("  -- versus --");
    print_roster(&combatants, &beta_ids);
}
