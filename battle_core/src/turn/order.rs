//! Turn ordering
//!
//! Actions sort descending by `priority + uniform jitter in [0, jitter_max)`.
//! The jitter is a deliberate fairness mechanism: equal-speed combatants
//! should not always resolve in the same relative order. With a constant
//! random source the sort is by priority alone, and the stable sort keeps
//! submission order for ties.

use std::cmp::Ordering;

use crate::combat::QueuedAction;
use crate::rng::RandomSource;

/// Sort a round's actions into resolution order
///
/// One jitter roll is drawn per action, in submission order.
pub fn order_actions(
    actions: Vec<QueuedAction>,
    jitter_max: f64,
    rng: &mut impl RandomSource,
) -> Vec<QueuedAction> {
    let mut keyed: Vec<(f64, QueuedAction)> = actions
        .into_iter()
        .map(|action| (action.priority + rng.range(0.0, jitter_max), action))
        .collect();
    keyed.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    keyed.into_iter().map(|(_, action)| action).collect()
}
