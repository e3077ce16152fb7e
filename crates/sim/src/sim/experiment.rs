//! Monte Carlo experiment driver.
//!
//! Runs many independent trials. Each trial generates one reference trace
//! and replays it, read-only, through all three policies at every working-set
//! size in the configured range, so the per-trial fault counts are directly
//! comparable. Trials run sequentially; they share no mutable state beyond
//! the trace generator itself, so callers wanting parallel trials can run
//! one `Experiment` per worker with independent seeds.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::common::SimError;
use crate::config::Config;
use crate::policy::{self, PolicyKind};
use crate::stats::FaultTable;
use crate::trace::TraceGenerator;

/// One configured experiment: the trial loop plus its trace generator.
#[derive(Debug)]
pub struct Experiment<R: Rng> {
    config: Config,
    traces: TraceGenerator<R>,
}

impl Experiment<StdRng> {
    /// Builds an experiment from a configuration, seeding the trace
    /// generator from `config.experiment.seed` (or entropy when unset).
    ///
    /// # Errors
    ///
    /// Returns [`SimError::WorkingSetSize`] when either working-set bound is
    /// outside the supported range, or [`SimError::ZeroFieldLength`] when
    /// the trace geometry is degenerate, so a bad configuration fails before
    /// any work is done.
    pub fn from_config(config: Config) -> Result<Self, SimError> {
        let rng = config
            .experiment
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self::new(config, rng)
    }
}

impl<R: Rng> Experiment<R> {
    /// Builds an experiment drawing trace randomness from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::WorkingSetSize`] when either working-set bound is
    /// outside the supported range, or [`SimError::ZeroFieldLength`] when
    /// `config.trace.field_length` is zero.
    pub fn new(config: Config, rng: R) -> Result<Self, SimError> {
        let exp = &config.experiment;
        policy::validate_wss(exp.wss_min)?;
        policy::validate_wss(exp.wss_max)?;
        if config.trace.field_length == 0 {
            return Err(SimError::ZeroFieldLength);
        }
        if exp.wss_min > exp.wss_max {
            warn!(
                wss_min = exp.wss_min,
                wss_max = exp.wss_max,
                "empty working-set range; the fault table will be empty"
            );
        }
        let traces = TraceGenerator::new(config.trace.clone(), rng);
        Ok(Self { config, traces })
    }

    /// The experiment's configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Runs every trial and returns the accumulated fault table.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::WorkingSetSize`] if a policy rejects a size;
    /// the bounds are validated at construction, so this does not occur for
    /// an `Experiment` built through the public constructors.
    pub fn run(&mut self) -> Result<FaultTable, SimError> {
        let exp = self.config.experiment.clone();
        info!(
            trials = exp.trials,
            wss_min = exp.wss_min,
            wss_max = exp.wss_max,
            trace_length = self.config.trace.length,
            "starting experiment"
        );

        let mut table = FaultTable::new(exp.wss_min, exp.wss_max);
        for trial in 0..exp.trials {
            let trace = self.traces.next_trace();
            for wss in exp.wss_min..=exp.wss_max {
                for kind in PolicyKind::ALL {
                    table.record(kind, wss, kind.fault_count(&trace, wss)?);
                }
            }
            debug!(trial, "trial complete");
        }

        info!("experiment complete");
        Ok(table)
    }
}
