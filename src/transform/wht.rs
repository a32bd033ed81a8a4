//! Fast Walsh-Hadamard Transform.

use crate::error::{FilterBankError, Result};

/// In-place Fast Walsh-Hadamard Transform, output scaled by `scale / sqrt(n)`.
///
/// With `scale = 1.0` the transform is orthonormal and self-inverse, so two
/// applications return the input up to rounding. Any other `scale` is folded
/// into the final normalization pass instead of needing a separate sweep.
///
/// `vec.len()` must be a non-zero power of two.
pub fn wht(vec: &mut [f32], scale: f32) -> Result<()> {
    let n = vec.len();
    FilterBankError::check_power_of_two(n)?;

    let mut hs = 1;
    while hs < n {
        for block in vec.chunks_exact_mut(2 * hs) {
            let (lo, hi) = block.split_at_mut(hs);
            for (a, b) in lo.iter_mut().zip(hi.iter_mut()) {
                let (x, y) = (*a, *b);
                *a = x + y;
                *b = x - y;
            }
        }
        hs += hs;
    }

    let sc = scale / (n as f32).sqrt();
    vec.iter_mut().for_each(|x| *x *= sc);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &[f32], b: &[f32], tol: f32) {
        assert_eq!(a.len(), b.len());
        for (i, (x, y)) in a.iter().zip(b).enumerate() {
            assert!((x - y).abs() < tol, "index {}: {} vs {}", i, x, y);
        }
    }

    #[test]
    fn test_known_values() {
        let mut v = [1.0, 2.0, 3.0, 4.0];
        wht(&mut v, 1.0).unwrap();
        assert_close(&v, &[5.0, -1.0, -2.0, 0.0], 1e-6);
    }

    #[test]
    fn test_involution() {
        let original: Vec<f32> = (0..64).map(|i| ((i * 37 % 11) as f32 - 5.0) * 0.3).collect();
        let mut v = original.clone();
        wht(&mut v, 1.0).unwrap();
        wht(&mut v, 1.0).unwrap();
        assert_close(&v, &original, 1e-5);
    }

    #[test]
    fn test_scale_linearity() {
        let input: Vec<f32> = (0..16).map(|i| (i as f32 * 0.7).sin()).collect();

        let mut unit = input.clone();
        wht(&mut unit, 1.0).unwrap();

        for &s in &[2.0f32, -0.5, 0.0, 3.25] {
            let mut scaled = input.clone();
            wht(&mut scaled, s).unwrap();
            let expected: Vec<f32> = unit.iter().map(|x| x * s).collect();
            assert_close(&scaled, &expected, 1e-5);
        }
    }

    #[test]
    fn test_single_element() {
        let mut v = [3.0];
        wht(&mut v, 2.0).unwrap();
        assert_eq!(v, [6.0]);
    }

    #[test]
    fn test_energy_preserved() {
        let mut v: Vec<f32> = (0..32).map(|i| (i as f32).cos()).collect();
        let before: f32 = v.iter().map(|x| x * x).sum();
        wht(&mut v, 1.0).unwrap();
        let after: f32 = v.iter().map(|x| x * x).sum();
        assert!((before - after).abs() < 1e-3);
    }

    #[test]
    fn test_rejects_bad_lengths() {
        let mut empty: [f32; 0] = [];
        assert_eq!(wht(&mut empty, 1.0), Err(FilterBankError::InvalidLength { len: 0 }));

        let mut six = [1.0; 6];
        assert_eq!(wht(&mut six, 1.0), Err(FilterBankError::InvalidLength { len: 6 }));
        assert_eq!(six, [1.0; 6], "rejected input must not be touched");
    }
}
