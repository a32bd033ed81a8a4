//! Structured random projection: sign flip then Hadamard mix.

use super::{sign_flip, wht};
use crate::error::{FilterBankError, Result};

/// Project `vec` in place through the randomized Hadamard matrix for `seed`.
///
/// O(n log n) and deterministic in `seed`. `vec.len()` must be a non-zero
/// power of two.
pub fn project(vec: &mut [f32], seed: u32) -> Result<()> {
    FilterBankError::check_power_of_two(vec.len())?;
    sign_flip(vec, seed);
    wht(vec, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_composition() {
        let input: Vec<f32> = (0..16).map(|i| (i as f32 * 1.3).sin()).collect();

        let mut projected = input.clone();
        project(&mut projected, 5).unwrap();

        let mut manual = input.clone();
        sign_flip(&mut manual, 5);
        wht(&mut manual, 1.0).unwrap();

        assert_eq!(projected, manual);
    }

    #[test]
    fn test_preserves_norm() {
        // Sign flips and an orthonormal WHT are both isometries.
        let mut v: Vec<f32> = (0..128).map(|i| ((i * 13) % 7) as f32 - 3.0).collect();
        let before: f32 = v.iter().map(|x| x * x).sum();
        project(&mut v, 2024).unwrap();
        let after: f32 = v.iter().map(|x| x * x).sum();
        assert!((before - after).abs() / before < 1e-4);
    }

    #[test]
    fn test_rejects_non_power_of_two() {
        let mut v = vec![1.0; 3];
        assert_eq!(project(&mut v, 1), Err(FilterBankError::InvalidLength { len: 3 }));
        assert_eq!(v, vec![1.0; 3]);
    }
}
