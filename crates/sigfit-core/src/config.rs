// this_file: crates/sigfit-core/src/config.rs
//! Bounds and knobs shared by every fitting strategy
//!
//! A [`FittingConfig`] is an explicit immutable value the caller hands to
//! each entry point. There is no process-wide default that can drift at
//! runtime; `FittingConfig::default()` plus struct-update syntax is the way
//! to override a knob or two.

use crate::analysis::TextAnalysis;
use crate::error::{FitError, Result};
use crate::profile::FontProfile;

/// Search bounds and convergence knobs
#[derive(Debug, Clone, PartialEq)]
pub struct FittingConfig {
    /// Hard floor: no strategy returns a size below this
    pub min_font_size: u32,
    /// Hard ceiling for every search
    pub max_font_size: u32,
    /// Fraction of the safe zone a box may occupy and still count as fitting
    pub tolerance_ratio: f32,
    /// Probe budget for the binary search
    pub max_iterations: u32,
    /// Grid spacing for the sweep-based search
    pub font_size_step: u32,
}

impl Default for FittingConfig {
    fn default() -> Self {
        Self {
            min_font_size: 24,
            max_font_size: 120,
            tolerance_ratio: 0.95,
            max_iterations: 20,
            font_size_step: 4,
        }
    }
}

impl FittingConfig {
    /// Finer search that spends probes on tighter results
    pub fn quality() -> Self {
        Self {
            tolerance_ratio: 0.85,
            max_iterations: 30,
            font_size_step: 2,
            ..Self::default()
        }
    }

    /// Coarser search that favors latency over precision
    pub fn fast() -> Self {
        Self {
            tolerance_ratio: 0.90,
            max_iterations: 10,
            font_size_step: 8,
            ..Self::default()
        }
    }

    /// Reject configurations no search can run under
    pub fn validate(&self) -> Result<()> {
        if self.min_font_size == 0 {
            return Err(FitError::InvalidConfig(
                "min_font_size must be at least 1".into(),
            ));
        }
        if self.max_font_size < self.min_font_size {
            return Err(FitError::InvalidConfig(format!(
                "max_font_size ({}) is below min_font_size ({})",
                self.max_font_size, self.min_font_size
            )));
        }
        if self.max_iterations == 0 {
            return Err(FitError::InvalidConfig(
                "max_iterations must be at least 1".into(),
            ));
        }
        if self.font_size_step == 0 {
            return Err(FitError::InvalidConfig(
                "font_size_step must be at least 1".into(),
            ));
        }
        if !(self.tolerance_ratio > 0.0 && self.tolerance_ratio <= 1.0) {
            return Err(FitError::InvalidConfig(format!(
                "tolerance_ratio ({}) must be within (0, 1]",
                self.tolerance_ratio
            )));
        }
        Ok(())
    }

    /// The tolerance actually used for fit checks against one font
    ///
    /// Families flagged with a clipping allowance get their margin taken off
    /// the configured ratio here, instead of being special-cased by name
    /// inside the algorithms.
    pub fn effective_tolerance(&self, font: &FontProfile) -> f32 {
        (self.tolerance_ratio - font.clipping_tolerance).max(0.0)
    }

    /// Tighten the knobs for text that is hard to fit
    ///
    /// Complex text gets a stricter tolerance and a bigger probe budget; long
    /// text additionally gets a finer sweep grid.
    pub fn adjusted_for(&self, text: &str) -> Self {
        let analysis = TextAnalysis::of(text);
        let mut adjusted = self.clone();
        if analysis.complexity > 70.0 {
            adjusted.tolerance_ratio = 0.85;
            adjusted.max_iterations = 25;
        }
        if analysis.length > 15 {
            adjusted.font_size_step = 2;
            adjusted.tolerance_ratio = 0.90;
        }
        adjusted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_mobile_card() {
        let config = FittingConfig::default();
        assert_eq!(config.min_font_size, 24);
        assert_eq!(config.max_font_size, 120);
        assert_eq!(config.tolerance_ratio, 0.95);
        assert_eq!(config.max_iterations, 20);
        assert_eq!(config.font_size_step, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn presets_only_touch_their_knobs() {
        let quality = FittingConfig::quality();
        assert_eq!(quality.tolerance_ratio, 0.85);
        assert_eq!(quality.max_iterations, 30);
        assert_eq!(quality.font_size_step, 2);
        assert_eq!(quality.min_font_size, 24);

        let fast = FittingConfig::fast();
        assert_eq!(fast.tolerance_ratio, 0.90);
        assert_eq!(fast.max_iterations, 10);
        assert_eq!(fast.font_size_step, 8);
        assert_eq!(fast.max_font_size, 120);
    }

    #[test]
    fn validate_rejects_impossible_bounds() {
        let zero_min = FittingConfig {
            min_font_size: 0,
            ..FittingConfig::default()
        };
        assert!(zero_min.validate().is_err());

        let inverted = FittingConfig {
            min_font_size: 60,
            max_font_size: 40,
            ..FittingConfig::default()
        };
        assert!(inverted.validate().is_err());

        let no_budget = FittingConfig {
            max_iterations: 0,
            ..FittingConfig::default()
        };
        assert!(no_budget.validate().is_err());

        let flat_grid = FittingConfig {
            font_size_step: 0,
            ..FittingConfig::default()
        };
        assert!(flat_grid.validate().is_err());

        let loose = FittingConfig {
            tolerance_ratio: 1.2,
            ..FittingConfig::default()
        };
        assert!(loose.validate().is_err());
    }

    #[test]
    fn clipping_allowance_tightens_the_effective_tolerance() {
        let config = FittingConfig::default();
        let plain = FontProfile::new("plain", 480);
        assert_eq!(config.effective_tolerance(&plain), 0.95);

        let mut flagged = FontProfile::new("script", 480);
        flagged.clipping_tolerance = 0.08;
        let tolerance = config.effective_tolerance(&flagged);
        assert!((tolerance - 0.87).abs() < 1e-6);
    }

    #[test]
    fn effective_tolerance_never_goes_negative() {
        let config = FittingConfig {
            tolerance_ratio: 0.05,
            ..FittingConfig::default()
        };
        let mut font = FontProfile::new("extreme", 480);
        font.clipping_tolerance = 0.5;
        assert_eq!(config.effective_tolerance(&font), 0.0);
    }

    #[test]
    fn complex_text_tightens_tolerance_and_budget() {
        let adjusted = FittingConfig::default().adjusted_for("Dr. A1 B2 & Partners");
        assert_eq!(adjusted.tolerance_ratio, 0.90); // length rule wins last
        assert_eq!(adjusted.max_iterations, 25);
        assert_eq!(adjusted.font_size_step, 2);
    }

    #[test]
    fn plain_short_text_keeps_the_defaults() {
        let adjusted = FittingConfig::default().adjusted_for("John");
        assert_eq!(adjusted, FittingConfig::default());
    }

    #[test]
    fn long_simple_text_gets_the_finer_grid() {
        // 16 lowercase letters: length rule fires, complexity rule does not
        let adjusted = FittingConfig::default().adjusted_for("abcdefghijklmnop");
        assert_eq!(adjusted.font_size_step, 2);
        assert_eq!(adjusted.tolerance_ratio, 0.90);
        assert_eq!(adjusted.max_iterations, 20);
    }
}
