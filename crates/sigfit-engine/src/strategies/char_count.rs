// this_file: crates/sigfit-engine/src/strategies/char_count.rs
//! Length-bucket heuristic, no metrics consulted

use sigfit_core::{
    analysis::TextAnalysis,
    config::FittingConfig,
    error::Result,
    profile::FontProfile,
    traits::{FittingStrategy, TextMeasurer},
    types::{Container, FittingResult, SafeZone},
};

use super::{conclude, probe};

/// Picks a size from the grapheme count alone
///
/// Fewer glyphs generally means more room, so short names get a boost and
/// long ones get shrunk before anyone measures anything. One probe total,
/// purely to score and classify the guess.
pub struct CharacterCount;

fn length_factor(count: usize) -> f32 {
    match count {
        0..=5 => 1.1,
        6..=8 => 1.0,
        9..=12 => 0.9,
        13..=16 => 0.8,
        _ => 0.7,
    }
}

impl FittingStrategy for CharacterCount {
    fn name(&self) -> &'static str {
        "character_count"
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

        let count = TextAnalysis::of(text).length;
        let factor = length_factor(count);
        let target = ((font.base_size as f32 * factor).round() as u32)
            .clamp(config.min_font_size, config.max_font_size);

        let at_target = probe(measurer, text, font, target, &zone, tolerance)?;
        Ok(conclude(self.name(), at_target, font.base_size, &zone, 1))
    }
}
