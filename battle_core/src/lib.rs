//! battle_core - Turn-based squad combat resolution engine
//!
//! This library provides:
//! - Combatant model: a medal (affinity core) plus four armored parts
//! - ActionResolver: hit/crit/damage resolution for one queued action
//! - TurnResolver: priority-plus-jitter ordering with mid-turn invalidation
//! - AI policy: ranked-rule action selection for machine combatants
//! - BattleConstants: TOML-loadable tunables for every formula above

pub mod ai;
pub mod combat;
pub mod config;
pub mod model;
pub mod rng;
pub mod turn;
pub mod types;

// Re-export core types for convenience
pub use combat::{
    check_hit, compute_accuracy, ActionResolver, ActionResult, CombatantId, QueuedAction,
};
pub use config::{BattleConstants, ConfigError};
pub use model::{Combatant, Medal, Part, SpecialAttack, DEFAULT_MAX_CHARGE};
pub use rng::{RandomSource, RngSource, ScriptedSource};
pub use turn::TurnResolver;
pub use types::{Affinity, AffinityAspect, PartSlot, SkillCategory, SupportSkill};
