// this_file: crates/sigfit-batch/src/types.rs

//! Batch job types and structures.
//!
//! Defines job specifications, per-job outcomes, and the run summary for
//! batch processing of fitting jobs. Outcomes are shaped for JSONL output:
//! one self-contained line per job, success and error alike.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use sigfit_core::types::{ClippingRisk, FittingResult, QualityTier};

/// Complete batch job specification (top-level JSON input).
#[derive(Debug, Clone, Deserialize)]
pub struct FitJobSpec {
    /// API version (must be "1.0")
    pub version: String,
    /// List of fitting jobs to process
    pub jobs: Vec<FitJob>,
}

/// Single fitting job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitJob {
    /// Unique job identifier for correlation with results
    pub id: String,
    /// Text to fit
    pub text: String,
    /// Face to fit it with; unknown faces use the fallback tuning
    pub font_id: String,
    /// Render target name; the runner's default container when absent
    #[serde(default)]
    pub device: Option<String>,
}

/// Job outcome (JSONL output line).
#[derive(Debug, Clone, Serialize)]
pub struct JobOutcome {
    /// Job ID (matches input)
    pub id: String,
    /// Status: "success" or "error"
    pub status: String,
    /// Fit output (only present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit: Option<FitOutput>,
    /// Error message (only present on error)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Wire form of one fitting result.
#[derive(Debug, Clone, Serialize)]
pub struct FitOutput {
    /// Final font size in pixels
    pub font_size: u32,
    /// Measured text width at that size
    pub width: f32,
    /// Measured text height at that size
    pub height: f32,
    /// Whether the text stayed inside the safe zone
    pub fits_in_safe_zone: bool,
    /// Risk band ("very_low" through "very_high")
    pub clipping_risk: String,
    /// 0-100 composite quality
    pub quality_score: u8,
    /// Quality band ("poor" through "excellent")
    pub quality_tier: String,
    /// Final size over the face's native size
    pub scaling_factor: f32,
    /// Strategy that produced the winning size
    pub strategy: String,
    /// Probes spent reaching it
    pub iterations: u32,
}

impl From<&FittingResult> for FitOutput {
    fn from(result: &FittingResult) -> Self {
        Self {
            font_size: result.font_size,
            width: result.text_dimensions.width,
            height: result.text_dimensions.height,
            fits_in_safe_zone: result.fits_in_safe_zone,
            clipping_risk: result.clipping_risk.to_string(),
            quality_score: result.quality_score,
            quality_tier: result.tier().to_string(),
            scaling_factor: result.scaling_factor,
            strategy: result.strategy.to_owned(),
            iterations: result.iterations,
        }
    }
}

impl JobOutcome {
    /// Create a success outcome from a fitting result.
    pub fn success(id: impl Into<String>, result: &FittingResult) -> Self {
        Self {
            id: id.into(),
            status: "success".to_owned(),
            fit: Some(FitOutput::from(result)),
            error: None,
        }
    }

    /// Create an error outcome for a failed job.
    pub fn error(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: "error".to_owned(),
            fit: None,
            error: Some(message.into()),
        }
    }

    /// Whether this job produced a fit.
    pub fn succeeded(&self) -> bool {
        self.status == "success"
    }
}

/// Aggregate view over one batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    /// Jobs processed
    pub total: usize,
    /// Jobs that produced a fit
    pub succeeded: usize,
    /// Jobs that errored
    pub failed: usize,
    /// Mean quality across successful jobs, rounded; 0 when none succeeded
    pub average_quality: u8,
    /// Success counts per risk band; every band is present, zero included
    pub risk_distribution: BTreeMap<String, usize>,
    /// Success counts per quality band; every band is present, zero included
    pub tier_distribution: BTreeMap<String, usize>,
}

impl BatchSummary {
    /// Fold a run's outcomes into the aggregate view.
    pub fn of(outcomes: &[JobOutcome]) -> Self {
        let mut risk_distribution: BTreeMap<String, usize> = [
            ClippingRisk::VeryLow,
            ClippingRisk::Low,
            ClippingRisk::Medium,
            ClippingRisk::High,
            ClippingRisk::VeryHigh,
        ]
        .iter()
        .map(|band| (band.to_string(), 0))
        .collect();
        let mut tier_distribution: BTreeMap<String, usize> = [
            QualityTier::Poor,
            QualityTier::Acceptable,
            QualityTier::Good,
            QualityTier::Excellent,
        ]
        .iter()
        .map(|band| (band.to_string(), 0))
        .collect();

        let mut succeeded = 0;
        let mut quality_sum: u64 = 0;
        for outcome in outcomes {
            if let Some(fit) = &outcome.fit {
                succeeded += 1;
                quality_sum += u64::from(fit.quality_score);
                *risk_distribution.entry(fit.clipping_risk.clone()).or_insert(0) += 1;
                *tier_distribution.entry(fit.quality_tier.clone()).or_insert(0) += 1;
            }
        }

        let average_quality = if succeeded > 0 {
            (quality_sum as f64 / succeeded as f64).round() as u8
        } else {
            0
        };

        Self {
            total: outcomes.len(),
            succeeded,
            failed: outcomes.len() - succeeded,
            average_quality,
            risk_distribution,
            tier_distribution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigfit_core::types::BoundingBox;

    fn result_with_quality(quality: u8) -> FittingResult {
        FittingResult {
            font_size: 80,
            text_dimensions: BoundingBox::new(200.0, 80.0, 62.0, 18.0),
            fits_in_safe_zone: true,
            clipping_risk: ClippingRisk::Low,
            quality_score: quality,
            scaling_factor: 0.5,
            strategy: "binary_search",
            iterations: 4,
        }
    }

    #[test]
    fn outcome_lines_keep_only_the_relevant_side() {
        let ok = JobOutcome::success("a", &result_with_quality(80));
        assert!(ok.succeeded());
        assert!(ok.fit.is_some());
        assert!(ok.error.is_none());

        let bad = JobOutcome::error("b", "unknown device profile: vr");
        assert!(!bad.succeeded());
        assert!(bad.fit.is_none());
        assert_eq!(bad.error.as_deref(), Some("unknown device profile: vr"));
    }

    #[test]
    fn outcome_serializes_without_null_noise() {
        let line = serde_json::to_string(&JobOutcome::error("b", "boom")).unwrap();
        assert!(!line.contains("\"fit\""));
        assert!(line.contains("\"error\":\"boom\""));

        let line = serde_json::to_string(&JobOutcome::success("a", &result_with_quality(80))).unwrap();
        assert!(!line.contains("\"error\""));
        assert!(line.contains("\"clipping_risk\":\"low\""));
        assert!(line.contains("\"quality_tier\":\"good\""));
    }

    #[test]
    fn summary_counts_and_averages_over_successes_only() {
        let outcomes = vec![
            JobOutcome::success("a", &result_with_quality(90)),
            JobOutcome::success("b", &result_with_quality(71)),
            JobOutcome::error("c", "boom"),
        ];
        let summary = BatchSummary::of(&outcomes);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 1);
        // (90 + 71) / 2 = 80.5 rounds up
        assert_eq!(summary.average_quality, 81);
        assert_eq!(summary.risk_distribution["low"], 2);
        assert_eq!(summary.tier_distribution["excellent"], 1);
        assert_eq!(summary.tier_distribution["good"], 1);
    }

    #[test]
    fn summary_seeds_every_band_even_when_empty() {
        let summary = BatchSummary::of(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.average_quality, 0);
        assert_eq!(summary.risk_distribution.len(), 5);
        assert_eq!(summary.tier_distribution.len(), 4);
        assert!(summary.risk_distribution.values().all(|&n| n == 0));
        assert!(summary.tier_distribution.contains_key("poor"));
        assert!(summary.risk_distribution.contains_key("very_high"));
    }
}
