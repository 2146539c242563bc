//! Entity model - combatants, their medals, and their parts
//!
//! Pure data plus derived read-only queries. All mutation happens through
//! clamping operations so no invariant can be violated by cumulative
//! arithmetic; resolution logic lives in `combat` and `turn`.

mod combatant;
mod medal;
mod part;

pub use combatant::{Combatant, DESTROYED_LEGS_EVASION_FLOOR, DESTROYED_LEGS_SPEED_FLOOR};
pub use medal::{Medal, SpecialAttack, DEFAULT_MAX_CHARGE};
pub use part::Part;
