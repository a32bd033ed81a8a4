//! Configuration system for filter bank training runs.
//!
//! Supports YAML configuration files with sensible defaults.

use crate::error::{ConfigError, FilterBankError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub network: NetworkConfig,
    pub training: TrainingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Network shape and structural seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Vector length (power of two)
    pub vector_len: usize,
    /// Number of gated layers
    pub depth: usize,
    /// Identity hash driving every sign pattern
    pub seed: u32,
}

/// Hill-climbing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Gain positions touched per mutation
    pub mutation_count: usize,
    /// Width of the log-uniform step distribution
    pub precision: f32,
    /// Number of propose/evaluate steps
    pub steps: u64,
    /// Perturber seed; entropy when absent
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Steps between progress reports
    pub report_interval: u64,
    /// Steps between cost history samples
    pub history_interval: u64,
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            vector_len: 256,
            depth: 5,
            seed: 123_456,
        }
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            mutation_count: 10,
            precision: 25.0,
            steps: 100_000,
            rng_seed: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            report_interval: 1000,
            history_interval: 100,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), FilterBankError> {
        FilterBankError::check_power_of_two(self.network.vector_len)?;
        if self.network.depth == 0 {
            return Err(invalid("depth must be > 0"));
        }
        if self.training.mutation_count == 0 {
            return Err(invalid("mutation_count must be > 0"));
        }
        if !(self.training.precision.is_finite() && self.training.precision > 0.0) {
            return Err(invalid("precision must be a positive finite number"));
        }
        if self.logging.report_interval == 0 || self.logging.history_interval == 0 {
            return Err(invalid("logging intervals must be > 0"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> FilterBankError {
    FilterBankError::InvalidConfiguration(msg.to_string())
}
