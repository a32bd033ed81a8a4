//! Deterministic sign generator driven by 32-bit integer hash mixing.
//!
//! The mixing constants are global: every network shares them, and only the
//! seed varies the output. Changing any of them changes every pattern.

/// Added to the hash state before each element.
pub const SIGN_INCREMENT: u32 = 0x3C6E_F35F;
/// Multiplies the hash state after the increment.
pub const SIGN_MULTIPLIER: u32 = 0x0019_660D;
/// Final scramble whose top bit decides the sign.
pub const SIGN_SCRAMBLE: u32 = 0x9E37_79B9;

#[inline]
fn advance(state: u32) -> u32 {
    state.wrapping_add(SIGN_INCREMENT).wrapping_mul(SIGN_MULTIPLIER)
}

#[inline]
fn keeps_sign(state: u32) -> bool {
    state.wrapping_mul(SIGN_SCRAMBLE) & 0x8000_0000 != 0
}

/// Negate elements of `vec` in place according to the pattern for `seed`.
///
/// The same `(len, seed)` always yields the same pattern, so a projection
/// can be replayed without storing a matrix.
pub fn sign_flip(vec: &mut [f32], seed: u32) {
    let mut state = seed;
    for x in vec.iter_mut() {
        state = advance(state);
        if !keeps_sign(state) {
            *x = -*x;
        }
    }
}

/// The ±1 pattern `sign_flip` applies for `seed` over `len` elements.
pub fn sign_pattern(len: usize, seed: u32) -> Vec<f32> {
    let mut pattern = vec![1.0; len];
    sign_flip(&mut pattern, seed);
    pattern
}
