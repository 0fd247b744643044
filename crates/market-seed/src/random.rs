//! Random-number sources used by the generators.
//!
//! Every sampler in this crate draws through [`RandomSource`] rather than
//! `rand::Rng` directly, so a run can be driven by a seeded `StdRng` for
//! reproducible output or by a [`ScriptedSource`] when a test needs to pin
//! exact values.

use rand::Rng;

/// Uniform draws needed by the dataset generators.
pub trait RandomSource {
    /// Returns a value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Returns a value in `[low, high]`. Returns `low` when the range is empty.
    fn uniform_f64(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        (low + (high - low) * self.next_unit()).min(high)
    }

    /// Returns an integer in `[low, high]`. Returns `low` when the range is empty.
    fn uniform_int(&mut self, low: i64, high: i64) -> i64 {
        if high <= low {
            return low;
        }
        let span = (high - low + 1) as f64;
        (low + (self.next_unit() * span) as i64).min(high)
    }

    /// Returns an index in `[0, len)`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick_index on an empty collection");
        ((self.next_unit() * len as f64) as usize).min(len.saturating_sub(1))
    }
}

impl<R: Rng> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.r#gen::<f64>()
    }

    fn uniform_f64(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        self.gen_range(low..=high)
    }

    fn uniform_int(&mut self, low: i64, high: i64) -> i64 {
        if high <= low {
            return low;
        }
        self.gen_range(low..=high)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick_index on an empty collection");
        self.gen_range(0..len.max(1))
    }
}

/// Deterministic source that replays a fixed list of unit draws.
///
/// The list is cycled once exhausted; an empty list always yields `0.0`.
/// Values outside `[0, 1)` are clamped into range.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
                .collect(),
            cursor: 0,
        }
    }

    /// Number of draws consumed so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
