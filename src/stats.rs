//! Statistics tracking for training runs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Running counters for a hill-climbing session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrainingStats {
    /// Steps taken so far
    pub steps: u64,
    /// Mutations kept
    pub accepted: u64,
    /// Mutations rolled back
    pub rejected: u64,
    /// Best batch cost seen (`inf` before the first step)
    pub best_cost: f32,
    /// Wall-clock time spent in `run`
    pub elapsed_secs: f64,
}

impl Default for TrainingStats {
    fn default() -> Self {
        Self {
            steps: 0,
            accepted: 0,
            rejected: 0,
            best_cost: f32::INFINITY,
            elapsed_secs: 0.0,
        }
    }
}

impl TrainingStats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one step whose outcome produced `best_cost`
    pub fn record(&mut self, accepted: bool, best_cost: f32) {
        self.steps += 1;
        if accepted {
            self.accepted += 1;
        } else {
            self.rejected += 1;
        }
        self.best_cost = best_cost;
    }

    /// Fraction of steps that improved the cost
    pub fn acceptance_rate(&self) -> f32 {
        if self.steps == 0 {
            0.0
        } else {
            self.accepted as f32 / self.steps as f32
        }
    }

    pub fn steps_per_second(&self) -> f64 {
        if self.elapsed_secs > 0.0 {
            self.steps as f64 / self.elapsed_secs
        } else {
            0.0
        }
    }
}

impl fmt::Display for TrainingStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Training Stats ===")?;
        writeln!(f, "Steps: {}", self.steps)?;
        writeln!(
            f,
            "Accepted: {} ({:.2}%)",
            self.accepted,
            self.acceptance_rate() * 100.0
        )?;
        writeln!(f, "Best cost: {:.4}", self.best_cost)?;
        writeln!(f, "Speed: {:.1} steps/s", self.steps_per_second())?;
        Ok(())
    }
}

/// Best cost sampled at a fixed step interval
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CostHistory {
    interval: u64,
    samples: Vec<(u64, f32)>,
}

impl CostHistory {
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            samples: Vec::new(),
        }
    }

    /// Store `(step, cost)` when `step` falls on the interval
    pub fn record(&mut self, step: u64, cost: f32) {
        if step % self.interval == 0 {
            self.samples.push((step, cost));
        }
    }

    pub fn samples(&self) -> &[(u64, f32)] {
        &self.samples
    }

    /// Ratio of last to first finite sample; below 1.0 means progress
    pub fn improvement_ratio(&self) -> Option<f32> {
        let mut finite = self.samples.iter().filter(|(_, c)| c.is_finite());
        let (_, first) = finite.next()?;
        let (_, last) = finite.last()?;
        if *first > 0.0 {
            Some(last / first)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts() {
        let mut stats = TrainingStats::new();
        assert!(stats.best_cost.is_infinite());
        assert_eq!(stats.acceptance_rate(), 0.0);

        stats.record(true, 10.0);
        stats.record(false, 10.0);
        stats.record(false, 10.0);
        stats.record(true, 8.0);

        assert_eq!(stats.steps, 4);
        assert_eq!(stats.accepted, 2);
        assert_eq!(stats.rejected, 2);
        assert_eq!(stats.best_cost, 8.0);
        assert!((stats.acceptance_rate() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_display() {
        let mut stats = TrainingStats::new();
        stats.record(true, 1.5);
        let text = stats.to_string();
        assert!(text.contains("Steps: 1"));
        assert!(text.contains("Best cost: 1.5000"));
    }

    #[test]
    fn test_history_sampling() {
        let mut history = CostHistory::new(10);
        for step in 1..=35 {
            history.record(step, 100.0 - step as f32);
        }
        assert_eq!(history.samples(), &[(10, 90.0), (20, 80.0), (30, 70.0)]);

        let ratio = history.improvement_ratio().unwrap();
        assert!((ratio - 70.0 / 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_history_needs_two_samples() {
        let mut history = CostHistory::new(1);
        assert!(history.improvement_ratio().is_none());
        history.record(1, 5.0);
        assert!(history.improvement_ratio().is_none());
    }
}
