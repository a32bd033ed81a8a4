//! Hill-climbing trainer: propose, evaluate, keep or roll back.

use crate::config::Config;
use crate::error::{FilterBankError, Result};
use crate::neural::{FilterBankNet, Perturber};
use crate::stats::{CostHistory, TrainingStats};
use std::time::Instant;

/// Sum of squared differences between `output` and `target`
#[inline]
pub fn squared_error(output: &[f32], target: &[f32]) -> f32 {
    output
        .iter()
        .zip(target)
        .map(|(o, t)| {
            let e = o - t;
            e * e
        })
        .sum()
}

/// Autoassociative cost of the batch: summed, not averaged.
pub fn batch_cost<E: AsRef<[f32]>>(network: &FilterBankNet, examples: &[E]) -> Result<f32> {
    let n = network.vector_len();
    let mut work = vec![0.0; n];
    let mut scratch = vec![0.0; n];
    evaluate(network, examples, &mut work, &mut scratch)
}

/// Reconstruction error of each example, in batch order
pub fn reconstruction_errors<E: AsRef<[f32]>>(
    network: &FilterBankNet,
    examples: &[E],
) -> Result<Vec<f32>> {
    let n = network.vector_len();
    let mut work = vec![0.0; n];
    let mut scratch = vec![0.0; n];
    examples
        .iter()
        .map(|e| -> Result<f32> {
            let e = e.as_ref();
            network.recall_with_scratch(&mut work, e, &mut scratch)?;
            Ok(squared_error(&work, e))
        })
        .collect()
}

fn evaluate<E: AsRef<[f32]>>(
    network: &FilterBankNet,
    examples: &[E],
    work: &mut [f32],
    scratch: &mut [f32],
) -> Result<f32> {
    let mut cost = 0.0;
    for e in examples {
        let e = e.as_ref();
        network.recall_with_scratch(work, e, scratch)?;
        cost += squared_error(work, e);
    }
    Ok(cost)
}

fn check_batch<E: AsRef<[f32]>>(network: &FilterBankNet, examples: &[E]) -> Result<()> {
    examples
        .iter()
        .try_for_each(|e| FilterBankError::check_same_len(network.vector_len(), e.as_ref().len()))
}

/// One strict-improvement step, allocating its work buffers.
///
/// Returns the new best cost: the mutated cost if it beats `best_cost`,
/// otherwise `best_cost` with the mutation undone.
pub fn train_step<E: AsRef<[f32]>>(
    perturber: &mut Perturber,
    network: &mut FilterBankNet,
    examples: &[E],
    best_cost: f32,
) -> Result<f32> {
    let n = network.vector_len();
    let mut work = vec![0.0; n];
    let mut scratch = vec![0.0; n];
    step_with_buffers(perturber, network, examples, best_cost, &mut work, &mut scratch)
}

fn step_with_buffers<E: AsRef<[f32]>>(
    perturber: &mut Perturber,
    network: &mut FilterBankNet,
    examples: &[E],
    best_cost: f32,
    work: &mut [f32],
    scratch: &mut [f32],
) -> Result<f32> {
    // Validate before mutating so an error never leaves a pending mutation.
    check_batch(network, examples)?;

    perturber.mutate(network.parameters_mut())?;
    let cost = evaluate(network, examples, work, scratch)?;

    if cost < best_cost {
        Ok(cost)
    } else {
        perturber.undo(network.parameters_mut())?;
        Ok(best_cost)
    }
}

/// (1+1) local search over a network's gains.
///
/// Owns the perturber and reusable work buffers, and keeps running stats
/// across calls to [`run`](Self::run).
pub struct HillClimber {
    perturber: Perturber,
    work: Vec<f32>,
    scratch: Vec<f32>,
    stats: TrainingStats,
    history: CostHistory,
    report_interval: u64,
}

impl HillClimber {
    pub fn new(perturber: Perturber) -> Self {
        Self {
            perturber,
            work: Vec::new(),
            scratch: Vec::new(),
            stats: TrainingStats::new(),
            history: CostHistory::new(100),
            report_interval: 1000,
        }
    }

    /// Create trainer from config
    pub fn from_config(config: &Config) -> Result<Self> {
        let training = &config.training;
        let perturber = match training.rng_seed {
            Some(seed) => Perturber::with_seed(training.mutation_count, training.precision, seed)?,
            None => Perturber::new(training.mutation_count, training.precision)?,
        };

        let mut climber = Self::new(perturber);
        climber.history = CostHistory::new(config.logging.history_interval);
        climber.report_interval = config.logging.report_interval.max(1);
        Ok(climber)
    }

    pub fn with_report_interval(mut self, interval: u64) -> Self {
        self.report_interval = interval.max(1);
        self
    }

    pub fn with_history_interval(mut self, interval: u64) -> Self {
        self.history = CostHistory::new(interval);
        self
    }

    pub fn perturber(&self) -> &Perturber {
        &self.perturber
    }

    pub fn stats(&self) -> &TrainingStats {
        &self.stats
    }

    pub fn history(&self) -> &CostHistory {
        &self.history
    }

    /// Best cost reached so far (`inf` before the first step)
    pub fn best_cost(&self) -> f32 {
        self.stats.best_cost
    }

    /// One propose/evaluate/accept-or-undo cycle against `best_cost`.
    ///
    /// Does not touch the running stats; [`run`](Self::run) does.
    pub fn step<E: AsRef<[f32]>>(
        &mut self,
        network: &mut FilterBankNet,
        examples: &[E],
        best_cost: f32,
    ) -> Result<f32> {
        let n = network.vector_len();
        self.work.resize(n, 0.0);
        self.scratch.resize(n, 0.0);
        step_with_buffers(
            &mut self.perturber,
            network,
            examples,
            best_cost,
            &mut self.work,
            &mut self.scratch,
        )
    }

    /// Run `steps` cycles, continuing from the best cost of earlier runs.
    pub fn run<E: AsRef<[f32]>>(
        &mut self,
        network: &mut FilterBankNet,
        examples: &[E],
        steps: u64,
    ) -> Result<TrainingStats> {
        log::info!(
            "Training: {} steps, {} examples, {} gains, mutation_count={}, precision={}",
            steps,
            examples.len(),
            network.parameter_count(),
            self.perturber.mutation_count(),
            self.perturber.precision()
        );

        let start = Instant::now();
        let mut best = self.stats.best_cost;

        for _ in 0..steps {
            let cost = self.step(network, examples, best)?;
            let accepted = cost < best;
            if accepted {
                log::debug!("Step {}: cost {:.6} -> {:.6}", self.stats.steps + 1, best, cost);
            }
            best = cost;

            self.stats.record(accepted, best);
            self.history.record(self.stats.steps, best);

            if self.stats.steps % self.report_interval == 0 {
                log::info!(
                    "Step {} - cost {:.4} - accepted {:.2}%",
                    self.stats.steps,
                    best,
                    self.stats.acceptance_rate() * 100.0
                );
            }
        }

        self.stats.elapsed_secs += start.elapsed().as_secs_f64();
        log::info!(
            "Training finished: best cost {:.4} after {} steps ({} accepted)",
            self.stats.best_cost,
            self.stats.steps,
            self.stats.accepted
        );
        Ok(self.stats.clone())
    }
}
