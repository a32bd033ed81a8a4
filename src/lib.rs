//! # FFBNET
//!
//! Fixed filter bank network: a gradient-free function approximator whose
//! nonlinearity is a locality-sensitive hash switch.
//!
//! ## Features
//!
//! - **Structured**: every projection is a sign flip plus a Walsh-Hadamard
//!   transform, O(n log n) per layer with no stored matrices
//! - **Hash-switched**: each coordinate picks one of two learned gains from the
//!   sign of a seeded projection of the input
//! - **Gradient-free**: trained by sparse perturbation with exact rollback
//! - **Reproducible**: seeded sign patterns and seeded perturbations
//!
//! ## Quick Start
//!
//! ```rust
//! use ffbnet::{FilterBankNet, HillClimber, Perturber};
//! use ffbnet::signals::{ExampleProvider, LissajousPairs};
//!
//! let mut net = FilterBankNet::new(64, 3, 123_456).unwrap();
//! let examples = LissajousPairs::default().examples(64).unwrap();
//!
//! let mut climber = HillClimber::new(Perturber::with_seed(10, 25.0, 1).unwrap());
//! let stats = climber.run(&mut net, &examples, 100).unwrap();
//! assert!(stats.best_cost.is_finite());
//!
//! let mut out = vec![0.0; 64];
//! net.recall(&mut out, &examples[0]).unwrap();
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use ffbnet::Config;
//!
//! let mut config = Config::default();
//! config.network.depth = 3;
//! config.training.mutation_count = 20;
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod error;
pub mod neural;
pub mod signals;
pub mod stats;
pub mod trainer;
pub mod transform;

// Re-export main types
pub use config::Config;
pub use error::{ConfigError, FilterBankError, Result};
pub use neural::{FilterBankNet, Perturber};
pub use trainer::{batch_cost, train_step, HillClimber};

use signals::{ExampleProvider, LissajousPairs};
use std::time::Instant;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Time `steps` training steps on the default Lissajous batch
pub fn benchmark(steps: u64, vector_len: usize, depth: usize) -> Result<BenchmarkResult> {
    let mut net = FilterBankNet::new(vector_len, depth, 123_456)?;
    let examples = LissajousPairs::default().examples(vector_len)?;
    let initial_cost = batch_cost(&net, &examples)?;

    let mut climber = HillClimber::new(Perturber::with_seed(10, 25.0, 42)?)
        .with_report_interval(steps.max(1));

    let start = Instant::now();
    let stats = climber.run(&mut net, &examples, steps)?;
    let elapsed = start.elapsed();

    Ok(BenchmarkResult {
        steps,
        vector_len,
        depth,
        initial_cost,
        final_cost: stats.best_cost,
        elapsed_secs: elapsed.as_secs_f64(),
        steps_per_second: steps as f64 / elapsed.as_secs_f64().max(f64::EPSILON),
    })
}

/// Benchmark result
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub steps: u64,
    pub vector_len: usize,
    pub depth: usize,
    pub initial_cost: f32,
    pub final_cost: f32,
    pub elapsed_secs: f64,
    pub steps_per_second: f64,
}

impl std::fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Benchmark Results ===")?;
        writeln!(f, "Steps: {}", self.steps)?;
        writeln!(f, "Network: {} x {} layers", self.vector_len, self.depth)?;
        writeln!(f, "Cost: {:.4} -> {:.4}", self.initial_cost, self.final_cost)?;
        writeln!(f, "Time: {:.3}s", self.elapsed_secs)?;
        writeln!(f, "Speed: {:.1} steps/s", self.steps_per_second)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_benchmark() {
        let result = benchmark(100, 32, 2).unwrap();

        assert_eq!(result.steps, 100);
        assert!(result.steps_per_second > 0.0);
        assert!(result.final_cost.is_finite());
    }

    #[test]
    fn test_benchmark_rejects_bad_shape() {
        assert!(benchmark(10, 30, 2).is_err());
    }
}
