// this_file: crates/sigfit-engine/src/strategies/aspect_ratio.rs
//! Sweep for the size whose shape matches the zone best

use sigfit_core::{
    config::FittingConfig,
    error::Result,
    profile::FontProfile,
    traits::{FittingStrategy, TextMeasurer},
    types::{Container, FittingResult, SafeZone},
};

use super::{conclude, probe, Probe};

/// Exhaustive sweep scored by aspect-ratio distance
///
/// Walks every candidate size and, among those that fit, keeps the one whose
/// measured width/height ratio sits closest to the safe zone's own ratio.
/// The costliest strategy by probe count, and the only one that optimizes
/// for shape rather than raw size.
pub struct AspectRatioSearch;

impl FittingStrategy for AspectRatioSearch {
    fn name(&self) -> &'static str {
        "aspect_ratio"
    }

    fn fit(
        &self,
        text: &str,
        font: &FontProfile,
        container: &Container,
        config: &FittingConfig,
        measurer: &dyn TextMeasurer,
    ) -> Result<FittingResult> {
        config.validate()?;
        let zone = SafeZone::from_container(container)?;
        let tolerance = config.effective_tolerance(font);
        let target_aspect = zone.aspect_ratio();
        let mut iterations = 0;

        // Ascending sweep: the best-shaped fit wins, earliest on ties
        let mut best: Option<(Probe, f32)> = None;
        let mut size = config.min_font_size;
        while size <= config.max_font_size {
            iterations += 1;
            let candidate = probe(measurer, text, font, size, &zone, tolerance)?;
            if candidate.fits {
                let diff = (candidate.bbox.aspect_ratio() - target_aspect).abs();
                let improves = match &best {
                    Some((_, best_diff)) => diff < *best_diff,
                    None => true,
                };
                if improves {
                    best = Some((candidate, diff));
                }
            }
            size = match size.checked_add(config.font_size_step) {
                Some(next) => next,
                None => break,
            };
        }
        if let Some((winner, _)) = best {
            return Ok(conclude(self.name(), winner, font.base_size, &zone, iterations));
        }

        // Nothing fit on the grid going up; settle for the largest fit going down
        let mut size = config.max_font_size;
        loop {
            iterations += 1;
            let candidate = probe(measurer, text, font, size, &zone, tolerance)?;
            if candidate.fits {
                return Ok(conclude(self.name(), candidate, font.base_size, &zone, iterations));
            }
            size = match size.checked_sub(config.font_size_step) {
                Some(next) if next >= config.min_font_size => next,
                _ => break,
            };
        }

        // Last resort: the floor, reported as the non-fit it is
        iterations += 1;
        let floor = probe(measurer, text, font, config.min_font_size, &zone, tolerance)?;
        Ok(conclude(self.name(), floor, font.base_size, &zone, iterations))
    }
}
