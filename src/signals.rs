//! Training example providers.
//!
//! The trainer only needs a batch of fixed-length vectors; where they come
//! from is behind [`ExampleProvider`].

use crate::error::{FilterBankError, Result};
use std::f32::consts::PI;

/// Source of a fixed batch of training vectors
pub trait ExampleProvider {
    /// Produce the batch, every vector `vector_len` long
    fn examples(&self, vector_len: usize) -> Result<Vec<Vec<f32>>>;
}

/// Closed Lissajous curves stored as interleaved `(x, y)` samples.
///
/// Each frequency pair `(a, b)` yields one example with `x = sin(a t)` at even
/// indices and `y = sin(b t)` at odd ones.
#[derive(Clone, Debug)]
pub struct LissajousPairs {
    pub frequencies: Vec<(f32, f32)>,
}

impl Default for LissajousPairs {
    fn default() -> Self {
        Self {
            frequencies: vec![
                (1.0, 2.0),
                (2.0, 1.0),
                (2.0, 3.0),
                (3.0, 2.0),
                (3.0, 4.0),
                (4.0, 3.0),
                (2.0, 5.0),
                (5.0, 2.0),
            ],
        }
    }
}

impl LissajousPairs {
    pub fn new(frequencies: Vec<(f32, f32)>) -> Self {
        Self { frequencies }
    }

    /// Number of examples this provider yields
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

impl ExampleProvider for LissajousPairs {
    fn examples(&self, vector_len: usize) -> Result<Vec<Vec<f32>>> {
        FilterBankError::check_power_of_two(vector_len)?;
        if vector_len < 4 {
            return Err(FilterBankError::InvalidLength { len: vector_len });
        }

        // One (x, y) pair is left unused so the curve closes on itself.
        let points = vector_len / 2 - 1;
        let dt = 2.0 * PI / points as f32;

        let batch = self
            .frequencies
            .iter()
            .map(|&(a, b)| {
                let mut ex = vec![0.0; vector_len];
                for i in 0..points {
                    let t = i as f32 * dt;
                    ex[2 * i] = (a * t).sin();
                    ex[2 * i + 1] = (b * t).sin();
                }
                ex
            })
            .collect();
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_batch_shape() {
        let provider = LissajousPairs::default();
        assert_eq!(provider.len(), 8);

        let batch = provider.examples(256).unwrap();
        assert_eq!(batch.len(), 8);
        assert!(batch.iter().all(|ex| ex.len() == 256));
        // 127 points fill indices 0..254
        assert!(batch.iter().all(|ex| ex[254] == 0.0 && ex[255] == 0.0));
    }

    #[test]
    fn test_interleaving() {
        let provider = LissajousPairs::new(vec![(1.0, 2.0)]);
        let batch = provider.examples(16).unwrap();
        let ex = &batch[0];
        let dt = 2.0 * PI / 7.0;
        assert_eq!(ex[0], 0.0);
        assert!((ex[2] - dt.sin()).abs() < 1e-6);
        assert!((ex[3] - (2.0 * dt).sin()).abs() < 1e-6);
    }

    #[test]
    fn test_mirrored_pairs_swap_axes() {
        let batch = LissajousPairs::default().examples(64).unwrap();
        for i in 0..31 {
            assert_eq!(batch[0][2 * i], batch[1][2 * i + 1]);
            assert_eq!(batch[0][2 * i + 1], batch[1][2 * i]);
        }
    }

    #[test]
    fn test_rejects_bad_lengths() {
        let provider = LissajousPairs::default();
        assert!(provider.examples(2).is_err());
        assert!(provider.examples(48).is_err());
    }
}
