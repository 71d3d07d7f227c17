// this_file: crates/sigfit-batch/src/runner.rs

//! Parallel execution of job specifications.
//!
//! One runner holds the measurer, registries, and search bounds; specs flow
//! through it. Jobs are independent, so they fan out across the rayon pool,
//! and outcomes come back in job order regardless of which thread finished
//! first.

use std::sync::Arc;

use rayon::prelude::*;

use sigfit_core::config::FittingConfig;
use sigfit_core::traits::TextMeasurer;
use sigfit_core::types::Container;
use sigfit_engine::fit_text;
use sigfit_profiles::{DeviceRegistry, FontRegistry};

use crate::types::{BatchSummary, FitJob, FitJobSpec, JobOutcome};
use crate::ValidationError;

/// Runs job specifications against one measurer and one set of registries.
pub struct BatchRunner {
    measurer: Arc<dyn TextMeasurer>,
    fonts: FontRegistry,
    devices: DeviceRegistry,
    config: FittingConfig,
}

impl BatchRunner {
    /// Runner over the built-in registries with default search bounds.
    pub fn new(measurer: Arc<dyn TextMeasurer>) -> Self {
        Self {
            measurer,
            fonts: FontRegistry::builtin(),
            devices: DeviceRegistry::builtin(),
            config: FittingConfig::default(),
        }
    }

    /// Swap in a different font registry.
    #[must_use]
    pub fn with_fonts(mut self, fonts: FontRegistry) -> Self {
        self.fonts = fonts;
        self
    }

    /// Swap in a different device registry.
    #[must_use]
    pub fn with_devices(mut self, devices: DeviceRegistry) -> Self {
        self.devices = devices;
        self
    }

    /// Swap in different search bounds.
    #[must_use]
    pub fn with_config(mut self, config: FittingConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate a spec and run every job, one outcome per job in job order.
    ///
    /// Per-job trouble (unknown device, measurement failure) lands in that
    /// job's outcome line; only a structurally invalid spec fails the call.
    pub fn run(&self, spec: &FitJobSpec) -> Result<Vec<JobOutcome>, ValidationError> {
        spec.validate()?;
        log::info!(
            "processing {} fitting jobs with {} measurer",
            spec.jobs.len(),
            self.measurer.name()
        );

        let outcomes: Vec<JobOutcome> = spec.jobs.par_iter().map(|job| self.process(job)).collect();

        let failed = outcomes.iter().filter(|o| !o.succeeded()).count();
        if failed > 0 {
            log::warn!("{} of {} jobs failed", failed, outcomes.len());
        }
        Ok(outcomes)
    }

    /// Run a spec and fold the outcomes into a summary as well.
    pub fn run_with_summary(
        &self,
        spec: &FitJobSpec,
    ) -> Result<(Vec<JobOutcome>, BatchSummary), ValidationError> {
        let outcomes = self.run(spec)?;
        let summary = BatchSummary::of(&outcomes);
        Ok((outcomes, summary))
    }

    fn process(&self, job: &FitJob) -> JobOutcome {
        let container = match &job.device {
            Some(name) => match self.devices.get(name) {
                Ok(profile) => profile.container,
                Err(err) => return JobOutcome::error(job.id.as_str(), err.to_string()),
            },
            None => Container::default(),
        };
        let font = self.fonts.get_or_fallback(&job.font_id);

        match fit_text(
            &job.text,
            &font,
            &container,
            &self.config,
            self.measurer.as_ref(),
        ) {
            Ok(result) => JobOutcome::success(job.id.as_str(), &result),
            Err(err) => JobOutcome::error(job.id.as_str(), err.to_string()),
        }
    }
}
