// this_file: crates/sigfit-engine/src/strategies/proportional.rs
//! Single-jump scaling from one native measurement

use sigfit_core::{
    config::FittingConfig,
    error::Result,
    profile::FontProfile,
    traits::{FittingStrategy, TextMeasurer},
    types::{Container, FittingResult, SafeZone},
};

use super::{conclude, probe};

/// Measures once at native size, then scales straight to the target
///
/// Two measurements at most. Less precise than the binary search because the
/// jump assumes text dimensions scale linearly with font size, which real
/// fonts only approximate.
pub struct ProportionalScaling;

impl FittingStrategy for ProportionalScaling {
    fn name(&self) -> &'static str {
        "proportional_scaling"
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
        let native = font.base_size;

        let at_native = probe(measurer, text, font, native, &zone, tolerance)?;
        if at_native.fits {
            return Ok(conclude(self.name(), at_native, native, &zone, 1));
        }

        // The overflowing axis has a positive extent, so its ratio is finite
        // and min() always lands on a real number below 1/tolerance.
        let width_scale = zone.width / at_native.bbox.width;
        let height_scale = zone.height / at_native.bbox.height;
        let scale = width_scale.min(height_scale) * tolerance;
        let target = ((native as f32 * scale).round() as u32)
            .clamp(config.min_font_size, config.max_font_size);

        let scaled = probe(measurer, text, font, target, &zone, tolerance)?;
        Ok(conclude(self.name(), scaled, native, &zone, 2))
    }
}
