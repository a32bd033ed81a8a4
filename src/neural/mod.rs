//! Filter bank network and the perturbation operator that trains it.
//!
//! - Per-layer WHT mixing with hash-switched scalar gains
//! - Sparse bounded gain perturbations
//! - Single-level exact undo

mod mutations;
mod network;

pub use mutations::Perturber;
pub use network::{FilterBankNet, INITIAL_GAIN, LAYER_MIX_SCALE};
