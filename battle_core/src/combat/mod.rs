//! Action resolution - resolve one queued action into a result

mod accuracy;
mod action;
mod damage;
mod resolver;
mod result;

pub use accuracy::{check_hit, compute_accuracy};
pub use action::{CombatantId, QueuedAction};
pub use damage::{attack_damage, special_damage, AttackContext};
pub use resolver::ActionResolver;
pub use result::ActionResult;
