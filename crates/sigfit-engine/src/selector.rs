// this_file: crates/sigfit-engine/src/selector.rs
//! Run every strategy, keep the best answer
//!
//! "Never throw, always degrade": a strategy that errors becomes a recorded
//! zero-quality attempt, not an abort. Only caller bugs - an unusable
//! container or a nonsensical config - surface as errors.

use sigfit_core::{
    config::FittingConfig,
    error::{FitError, Result},
    profile::FontProfile,
    traits::{FittingStrategy, TextMeasurer},
    types::{BoundingBox, ClippingRisk, Container, FittingResult, SafeZone},
};

use crate::strategies::default_strategies;

/// One strategy's outcome, successful or not
#[derive(Debug, Clone)]
pub struct StrategyAttempt {
    pub strategy: &'static str,
    pub result: Option<FittingResult>,
    pub error: Option<String>,
}

impl StrategyAttempt {
    pub fn quality_score(&self) -> u8 {
        self.result.as_ref().map_or(0, |r| r.quality_score)
    }

    pub fn succeeded(&self) -> bool {
        self.result.is_some()
    }
}

/// The winning result plus the full attempt record
#[derive(Debug, Clone)]
pub struct StrategySelection {
    pub best_strategy: &'static str,
    pub result: FittingResult,
    pub attempts: Vec<StrategyAttempt>,
    pub notes: Vec<String>,
}

/// Tries a lineup of strategies and picks by quality score
pub struct StrategySelector {
    strategies: Vec<Box<dyn FittingStrategy>>,
}

impl StrategySelector {
    /// The stock four-strategy lineup
    pub fn new() -> Self {
        Self::with_strategies(default_strategies())
    }

    /// A custom lineup, tried in the given order
    pub fn with_strategies(strategies: Vec<Box<dyn FittingStrategy>>) -> Self {
        Self { strategies }
    }

    pub fn run(
        &self,
        text: &str,
        font: &FontProfile,
        container: &Container,
        config: &FittingConfig,
        measurer: &dyn TextMeasurer,
    ) -> Result<StrategySelection> {
        config.validate()?;
        // Geometry problems are caller bugs, surfaced before any attempt
        SafeZone::from_container(container)?;
        if self.strategies.is_empty() {
            return Err(FitError::InvalidConfig("no strategies configured".into()));
        }

        let mut attempts = Vec::with_capacity(self.strategies.len());
        for strategy in &self.strategies {
            match strategy.fit(text, font, container, config, measurer) {
                Ok(result) => {
                    log::debug!(
                        "{}: {}px, quality {}",
                        strategy.name(),
                        result.font_size,
                        result.quality_score
                    );
                    attempts.push(StrategyAttempt {
                        strategy: strategy.name(),
                        result: Some(result),
                        error: None,
                    });
                },
                Err(err) => {
                    log::warn!("{} failed: {}", strategy.name(), err);
                    attempts.push(StrategyAttempt {
                        strategy: strategy.name(),
                        result: None,
                        error: Some(err.to_string()),
                    });
                },
            }
        }

        // Strictly-higher quality wins; the earliest attempt wins ties.
        // Failed attempts never compete.
        let mut winner: Option<&StrategyAttempt> = None;
        for attempt in attempts.iter().filter(|a| a.succeeded()) {
            let improves = match winner {
                Some(current) => attempt.quality_score() > current.quality_score(),
                None => true,
            };
            if improves {
                winner = Some(attempt);
            }
        }

        let picked = winner.and_then(|a| a.result.as_ref().map(|r| (a.strategy, r.clone())));
        let (best_strategy, result) = match picked {
            Some(pair) => pair,
            None => {
                // Every strategy failed; degrade to a floor-sized placeholder
                // tagged with the last name tried
                let strategy = attempts.last().map_or("none", |a| a.strategy);
                log::warn!("all strategies failed, degrading to {}px", config.min_font_size);
                let placeholder = FittingResult {
                    font_size: config.min_font_size,
                    text_dimensions: BoundingBox::new(0.0, 0.0, 0.0, 0.0),
                    fits_in_safe_zone: false,
                    clipping_risk: ClippingRisk::VeryHigh,
                    quality_score: 0,
                    scaling_factor: 0.0,
                    strategy,
                    iterations: 0,
                };
                (strategy, placeholder)
            },
        };

        let notes = advisory_notes(&result);
        Ok(StrategySelection {
            best_strategy,
            result,
            attempts,
            notes,
        })
    }
}

impl Default for StrategySelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Human-readable verdict ladder plus warnings worth surfacing
fn advisory_notes(result: &FittingResult) -> Vec<String> {
    let mut notes = Vec::new();

    let verdict = if result.quality_score >= 90 {
        "excellent fit, safe to render as-is"
    } else if result.quality_score >= 70 {
        "good fit, minor compromises"
    } else if result.quality_score >= 50 {
        "acceptable fit, a shorter text or another font would help"
    } else {
        "poor fit, manual review recommended"
    };
    notes.push(format!(
        "{} (quality {} via {})",
        verdict, result.quality_score, result.strategy
    ));

    if !result.fits_in_safe_zone {
        notes.push("text still exceeds the safe zone at the chosen size".to_owned());
    }
    if result.font_size < 30 {
        notes.push(format!(
            "{}px is below the 30px legibility comfort line",
            result.font_size
        ));
    }

    notes
}
