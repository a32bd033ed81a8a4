//! Structured transforms used by the filter bank.
//!
//! All three operate in place on caller-owned buffers:
//! - [`wht`]: Fast Walsh-Hadamard Transform with folded-in scaling
//! - [`sign_flip`]: hash-driven pseudorandom sign pattern
//! - [`project`]: sign flip followed by an orthonormal WHT

mod projection;
mod signs;
mod wht;

pub use projection::project;
pub use signs::{sign_flip, sign_pattern, SIGN_INCREMENT, SIGN_MULTIPLIER, SIGN_SCRAMBLE};
pub use wht::wht;
