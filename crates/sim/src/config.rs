//! Configuration system for the fault analysis harness.
//!
//! This module defines the configuration structures used to parameterize an
//! experiment. It provides:
//! 1. **Defaults:** The reference experiment's fixed parameters (trace geometry, trials, working-set range).
//! 2. **Structures:** Hierarchical config for the experiment driver and the trace generator.
//! 3. **Deserialization:** JSON loading with per-field defaults, so partial configs work.
//!
//! Use [`Config::default`] for the reference experiment, or [`Config::from_json`]
//! to override parts of it.

use serde::Deserialize;

use crate::common::constants;

/// Root configuration for one experiment.
///
/// The default configuration reproduces the reference experiment exactly:
/// 1000 trials over 1000-reference traces, working-set sizes 4 through 20.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use faultsim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.experiment.trials, 1000);
/// assert_eq!(config.trace.length, 1000);
/// ```
///
/// Deserializing a partial override from JSON:
///
/// ```
/// use faultsim_core::config::Config;
///
/// let config = Config::from_json(r#"{
///     "experiment": { "trials": 50, "seed": 7 },
///     "trace": { "std_dev": 4.0 }
/// }"#).unwrap();
/// assert_eq!(config.experiment.trials, 50);
/// assert_eq!(config.experiment.seed, Some(7));
/// assert_eq!(config.experiment.wss_min, 4);
/// assert_eq!(config.trace.std_dev, 4.0);
/// assert_eq!(config.trace.mean, 10.0);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Experiment driver settings (trials, working-set range, seed).
    #[serde(default)]
    pub experiment: ExperimentConfig,
    /// Synthetic trace generator settings.
    #[serde(default)]
    pub trace: TraceConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// Missing fields fall back to the reference experiment's defaults.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] when the input is not
    /// valid JSON or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Experiment driver configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ExperimentConfig {
    /// Number of independent Monte Carlo trials.
    #[serde(default = "ExperimentConfig::default_trials")]
    pub trials: u64,

    /// Smallest working-set size evaluated (inclusive).
    #[serde(default = "ExperimentConfig::default_wss_min")]
    pub wss_min: usize,

    /// Largest working-set size evaluated (inclusive).
    #[serde(default = "ExperimentConfig::default_wss_max")]
    pub wss_max: usize,

    /// Seed for the trace generator; a fresh entropy seed is drawn when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl ExperimentConfig {
    /// Returns the default Monte Carlo trial count.
    fn default_trials() -> u64 {
        constants::TRIALS
    }

    /// Returns the default lower working-set bound.
    fn default_wss_min() -> usize {
        constants::WSS_MIN
    }

    /// Returns the default upper working-set bound.
    fn default_wss_max() -> usize {
        constants::WSS_MAX
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            trials: constants::TRIALS,
            wss_min: constants::WSS_MIN,
            wss_max: constants::WSS_MAX,
            seed: None,
        }
    }
}

/// Synthetic trace generator configuration.
///
/// A trace of `length` references is partitioned into contiguous fields of
/// `field_length` references; field `f` draws its page numbers from a normal
/// distribution centered `field_stride * f` above the base `mean`, modeling
/// locality of reference with a slow drift across fields.
#[derive(Debug, Clone, Deserialize)]
pub struct TraceConfig {
    /// Number of page references per trace.
    #[serde(default = "TraceConfig::default_length")]
    pub length: usize,

    /// Number of consecutive references per locality field.
    #[serde(default = "TraceConfig::default_field_length")]
    pub field_length: usize,

    /// Page-number offset between consecutive fields.
    #[serde(default = "TraceConfig::default_field_stride")]
    pub field_stride: i64,

    /// Mean of the per-field page-number distribution.
    #[serde(default = "TraceConfig::default_mean")]
    pub mean: f64,

    /// Standard deviation of the per-field page-number distribution.
    #[serde(default = "TraceConfig::default_std_dev")]
    pub std_dev: f64,
}

impl TraceConfig {
    /// Returns the default trace length.
    fn default_length() -> usize {
        constants::TRACE_LENGTH
    }

    /// Returns the default locality-field length.
    fn default_field_length() -> usize {
        constants::FIELD_LENGTH
    }

    /// Returns the default page-number stride between fields.
    fn default_field_stride() -> i64 {
        constants::FIELD_STRIDE
    }

    /// Returns the default page-number mean.
    fn default_mean() -> f64 {
        constants::PAGE_MEAN
    }

    /// Returns the default page-number standard deviation.
    fn default_std_dev() -> f64 {
        constants::PAGE_STD_DEV
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            length: constants::TRACE_LENGTH,
            field_length: constants::FIELD_LENGTH,
            field_stride: constants::FIELD_STRIDE,
            mean: constants::PAGE_MEAN,
            std_dev: constants::PAGE_STD_DEV,
        }
    }
}
