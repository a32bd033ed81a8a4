//! Bounded random perturbation of a gain vector with single-level undo.

use crate::error::{FilterBankError, Result};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Proposes sparse perturbations and remembers how to reverse the last one.
#[derive(Clone, Debug)]
pub struct Perturber {
    mutation_count: usize,
    precision: f32,
    saved_positions: Vec<usize>,
    saved_values: Vec<f32>,
    /// Length of the vector the saved record refers to
    target_len: usize,
    rng: ChaCha8Rng,
}

impl Perturber {
    /// Create a perturber seeded from OS entropy
    pub fn new(mutation_count: usize, precision: f32) -> Result<Self> {
        Self::from_rng(mutation_count, precision, ChaCha8Rng::from_entropy())
    }

    /// Create a perturber with a specific seed for reproducibility
    pub fn with_seed(mutation_count: usize, precision: f32, seed: u64) -> Result<Self> {
        Self::from_rng(mutation_count, precision, ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(mutation_count: usize, precision: f32, rng: ChaCha8Rng) -> Result<Self> {
        if mutation_count == 0 {
            return Err(FilterBankError::InvalidConfiguration(
                "mutation_count must be > 0".to_string(),
            ));
        }
        if !(precision.is_finite() && precision > 0.0) {
            return Err(FilterBankError::InvalidConfiguration(format!(
                "precision must be a positive finite number, got {}",
                precision
            )));
        }

        Ok(Self {
            mutation_count,
            precision,
            saved_positions: Vec::with_capacity(mutation_count),
            saved_values: Vec::with_capacity(mutation_count),
            target_len: 0,
            rng,
        })
    }

    pub fn mutation_count(&self) -> usize {
        self.mutation_count
    }

    pub fn precision(&self) -> f32 {
        self.precision
    }

    /// `(position, original value)` pairs of the last mutation, in call order.
    pub fn saved(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.saved_positions
            .iter()
            .copied()
            .zip(self.saved_values.iter().copied())
    }

    /// Perturb `mutation_count` positions drawn uniformly with replacement.
    ///
    /// Each step is `±2 * exp(u)` with `u ~ U(-precision, 0)`. A step that
    /// would land on or outside `(-1, 1)` is dropped and the position keeps
    /// its value. The previous undo record is discarded.
    pub fn mutate(&mut self, params: &mut [f32]) -> Result<()> {
        if params.is_empty() {
            return Err(FilterBankError::InvalidLength { len: 0 });
        }

        self.saved_positions.clear();
        self.saved_values.clear();
        self.target_len = params.len();

        for _ in 0..self.mutation_count {
            let pos = self.rng.gen_range(0..params.len());
            let v = params[pos];
            // Record before writing so repeated positions unwind correctly.
            self.saved_positions.push(pos);
            self.saved_values.push(v);

            let mut m = 2.0 * self.rng.gen_range(-self.precision..0.0f32).exp();
            if self.rng.gen_bool(0.5) {
                m = -m;
            }

            let vm = v + m;
            if vm > -1.0 && vm < 1.0 {
                params[pos] = vm;
            }
        }

        Ok(())
    }

    /// Restore the values overwritten by the most recent [`mutate`](Self::mutate).
    ///
    /// Replays the record in reverse, so it is exact even when a position was
    /// drawn more than once. Repeating it is harmless; before any mutation it
    /// does nothing.
    pub fn undo(&self, params: &mut [f32]) -> Result<()> {
        if self.saved_positions.is_empty() {
            return Ok(());
        }
        FilterBankError::check_same_len(self.target_len, params.len())?;

        for (&pos, &v) in self
            .saved_positions
            .iter()
            .zip(self.saved_values.iter())
            .rev()
        {
            params[pos] = v;
        }
        Ok(())
    }
}
