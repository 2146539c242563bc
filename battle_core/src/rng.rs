//! Randomness port - injectable uniform random source
//!
//! Every probabilistic step in resolution draws from a [`RandomSource`]
//! passed in by the caller, never from a hidden global. Any `rand::Rng`
//! (e.g. `ChaCha8Rng` seeded for reproducible battles) plugs in through
//! [`RngSource`]; [`ScriptedSource`] replays preloaded values for tests
//! that need to force specific rolls.
//!
//! Roll order per resolved action:
//! - Attack: hit roll, crit roll, damage variance, re-target pick
//! - Special: damage variance, re-target pick
//! - Turn ordering: one jitter roll per action, in submission order

use std::collections::VecDeque;

/// Uniform random source threaded through all probabilistic resolution
pub trait RandomSource {
    /// Uniform value in `[0, 1)`
    fn unit(&mut self) -> f64;

    /// Uniform value in `[lo, hi)`; returns `lo` when the range is empty
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        if hi <= lo {
            return lo;
        }
        lo + self.unit() * (hi - lo)
    }

    /// Uniform index in `[0, len)`; returns 0 when `len` is 0
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let picked = (self.unit() * len as f64) as usize;
        picked.min(len - 1)
    }
}

/// Adapter making any `rand::Rng` usable as a [`RandomSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R: rand::Rng>(pub R);

impl RngSource<rand::rngs::ThreadRng> {
    /// Source backed by the thread-local generator, for non-test callers
    /// that do not care about reproducibility
    pub fn from_entropy() -> Self {
        RngSource(rand::thread_rng())
    }
}

impl<R: rand::Rng> RandomSource for RngSource<R> {
    fn unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }

    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        if hi <= lo {
            return lo;
        }
        self.0.gen_range(lo..hi)
    }

    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.0.gen_range(0..len)
    }
}

/// Replays a fixed sequence of unit values, then a constant fill value
///
/// Values are clamped into `[0, 1)` so a scripted `1.0` cannot break the
/// uniform contract.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    queue: VecDeque<f64>,
    fill: f64,
}

impl ScriptedSource {
    /// Create a source that pops `values` in order, then returns 0.0
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        ScriptedSource {
            queue: values.into_iter().collect(),
            fill: 0.0,
        }
    }

    /// Set the value returned after the scripted values run out
    pub fn with_fill(mut self, fill: f64) -> Self {
        self.fill = fill;
        self
    }

    /// Create a source that always returns `value`
    pub fn constant(value: f64) -> Self {
        ScriptedSource::new([]).with_fill(value)
    }
}

impl RandomSource for ScriptedSource {
    fn unit(&mut self) -> f64 {
        let raw = self.queue.pop_front().unwrap_or(self.fill);
        raw.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
