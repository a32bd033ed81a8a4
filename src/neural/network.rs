//! Fixed filter bank network and its forward pass.

use crate::config::Config;
use crate::error::{FilterBankError, Result};
use crate::transform::{project, sign_flip, wht};

/// Initial value of every gain.
pub const INITIAL_GAIN: f32 = 0.5;

/// Gain folded into each layer's mixing transform to offset gates averaging 0.5.
pub const LAYER_MIX_SCALE: f32 = 2.0;

/// Guards the RMS normalization against an all-zero input.
const MIN_SQ: f32 = 1e-20;

/// Filter bank network with hash-switched per-coordinate gains.
///
/// Each layer mixes the signal with a WHT, then scales every coordinate by one
/// of two learned gains. Which gain is used depends on the sign of a
/// projection chain driven by the input alone, never by the parameters.
#[derive(Clone, Debug)]
pub struct FilterBankNet {
    vector_len: usize,
    depth: usize,
    seed: u32,
    /// `depth` blocks of `vector_len` pairs `(gain_bit_zero, gain_bit_one)`
    parameters: Vec<f32>,
}

impl FilterBankNet {
    /// Create a network with all gains at [`INITIAL_GAIN`].
    pub fn new(vector_len: usize, depth: usize, seed: u32) -> Result<Self> {
        FilterBankError::check_power_of_two(vector_len)?;
        if depth == 0 {
            return Err(FilterBankError::InvalidConfiguration(
                "depth must be > 0".to_string(),
            ));
        }

        Ok(Self {
            vector_len,
            depth,
            seed,
            parameters: vec![INITIAL_GAIN; 2 * vector_len * depth],
        })
    }

    /// Create a network from the `network` section of a config
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.network.vector_len,
            config.network.depth,
            config.network.seed,
        )
    }

    #[inline]
    pub fn vector_len(&self) -> usize {
        self.vector_len
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn parameters(&self) -> &[f32] {
        &self.parameters
    }

    /// Mutable view of the gains, for the perturber.
    ///
    /// A slice cannot change length, so the `2 * vector_len * depth` layout
    /// is preserved.
    pub fn parameters_mut(&mut self) -> &mut [f32] {
        &mut self.parameters
    }

    /// Get total number of gains
    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    /// Gain pairs of one layer, or `None` past the last layer.
    pub fn layer_gains(&self, layer: usize) -> Option<&[f32]> {
        self.parameters.chunks_exact(2 * self.vector_len).nth(layer)
    }

    /// Check if network is valid (no NaN/Inf)
    pub fn is_valid(&self) -> bool {
        self.parameters.iter().all(|g| g.is_finite())
    }

    /// Forward pass into `result`, allocating a scratch buffer for this call.
    pub fn recall(&self, result: &mut [f32], input: &[f32]) -> Result<()> {
        let mut scratch = vec![0.0; self.vector_len];
        self.recall_with_scratch(result, input, &mut scratch)
    }

    /// Forward pass into `result` using a caller-owned `scratch` buffer.
    ///
    /// All three buffers must be `vector_len` long. On return `scratch` holds
    /// the final switching signal; its prior contents are ignored.
    pub fn recall_with_scratch(
        &self,
        result: &mut [f32],
        input: &[f32],
        scratch: &mut [f32],
    ) -> Result<()> {
        let n = self.vector_len;
        FilterBankError::check_same_len(n, input.len())?;
        FilterBankError::check_same_len(n, result.len())?;
        FilterBankError::check_same_len(n, scratch.len())?;

        scratch.copy_from_slice(input);
        normalize_rms(result, input);
        sign_flip(result, self.seed);

        for (layer, gains) in self.parameters.chunks_exact(2 * n).enumerate() {
            let layer_seed = self.seed.wrapping_add(layer as u32).wrapping_add(1);
            project(scratch, layer_seed)?;
            wht(result, LAYER_MIX_SCALE)?;

            for ((r, &s), pair) in result.iter_mut().zip(scratch.iter()).zip(gains.chunks_exact(2)) {
                let bit = if s < 0.0 { 0 } else { 1 };
                *r *= pair[bit];
            }
        }

        wht(result, 1.0)
    }
}

/// `result = input / sqrt(mean(input^2) + MIN_SQ)`, i.e. unit RMS.
fn normalize_rms(result: &mut [f32], input: &[f32]) {
    let mean_sq = input.iter().map(|x| x * x).sum::<f32>() / input.len() as f32;
    let adj = 1.0 / (mean_sq + MIN_SQ).sqrt();
    for (r, &x) in result.iter_mut().zip(input) {
        *r = x * adj;
    }
}
