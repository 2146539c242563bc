//! Turn resolution - order a round of queued actions and resolve them

mod order;
mod resolution;

pub use order::order_actions;
pub use resolution::TurnResolver;
