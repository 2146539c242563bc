//! AI policy - queue an action for a machine-controlled combatant

mod policy;
mod target;

pub use policy::decide;
pub use target::{select_slot, select_target};
