// this_file: crates/sigfit-engine/src/strategies/mod.rs
//! The four ways to find a font size
//!
//! Every strategy answers the same question - "how large can this text be
//! drawn inside this container?" - with a different probe pattern. Binary
//! search is the precise one, proportional scaling the quick one, character
//! count the metrics-free one, and the aspect-ratio sweep the shape-aware
//! one. The selector runs them all and keeps the best answer.

pub mod aspect_ratio;
pub mod binary_search;
pub mod char_count;
pub mod proportional;

pub use aspect_ratio::AspectRatioSearch;
pub use binary_search::BinarySearch;
pub use char_count::CharacterCount;
pub use proportional::ProportionalScaling;

use sigfit_core::{
    error::Result,
    profile::FontProfile,
    score::score_quality,
    traits::{FittingStrategy, TextMeasurer},
    types::{BoundingBox, ClippingRisk, FittingResult, SafeZone},
};

/// The stock lineup, in the order the selector tries them
pub fn default_strategies() -> Vec<Box<dyn FittingStrategy>> {
    vec![
        Box::new(BinarySearch),
        Box::new(ProportionalScaling),
        Box::new(CharacterCount),
        Box::new(AspectRatioSearch),
    ]
}

/// One measurement together with its fit verdict
pub(crate) struct Probe {
    pub size: u32,
    pub bbox: BoundingBox,
    pub fits: bool,
}

/// Measure `text` at `size` and test it against the tolerance-shrunk zone
///
/// The tolerance is the per-fit effective tolerance, already reduced by the
/// font's clipping headroom. Both axes must clear it for the probe to count
/// as fitting.
pub(crate) fn probe(
    measurer: &dyn TextMeasurer,
    text: &str,
    font: &FontProfile,
    size: u32,
    zone: &SafeZone,
    tolerance: f32,
) -> Result<Probe> {
    let bbox = measurer.measure(text, font, size)?;
    let fits = bbox.width <= zone.width * tolerance && bbox.height <= zone.height * tolerance;
    log::trace!(
        "probe {}px: {:.1}x{:.1} fits={}",
        size,
        bbox.width,
        bbox.height,
        fits
    );
    Ok(Probe { size, bbox, fits })
}

/// Final size relative to the font's native size
pub(crate) fn scale_of(size: u32, native: u32) -> f32 {
    if native == 0 {
        0.0
    } else {
        size as f32 / native as f32
    }
}

/// Turn the chosen probe into a fully scored result
pub(crate) fn conclude(
    strategy: &'static str,
    probe: Probe,
    native: u32,
    zone: &SafeZone,
    iterations: u32,
) -> FittingResult {
    FittingResult {
        font_size: probe.size,
        clipping_risk: ClippingRisk::assess(&probe.bbox, zone),
        quality_score: score_quality(&probe.bbox, probe.size, probe.fits, zone),
        scaling_factor: scale_of(probe.size, native),
        text_dimensions: probe.bbox,
        fits_in_safe_zone: probe.fits,
        strategy,
        iterations,
    }
}
