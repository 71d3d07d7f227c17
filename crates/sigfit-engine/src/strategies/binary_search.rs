// this_file: crates/sigfit-engine/src/strategies/binary_search.rs
//! Largest-fitting-size search with a native-size fast path
//!
//! The primary strategy. Probes the native size once, and only when that
//! overflows does it bisect the candidate range, always keeping the largest
//! size that still fit. The bias toward larger sizes is deliberate: the
//! product goal is to fill the container, not to shrink defensively.

use sigfit_core::{
    config::FittingConfig,
    error::Result,
    profile::FontProfile,
    traits::{FittingStrategy, TextMeasurer},
    types::{Container, FittingResult, SafeZone},
};

use super::{conclude, probe};

/// Headroom above the native size the search may explore
const UPSCALE_HEADROOM: f32 = 1.2;

pub struct BinarySearch;

impl FittingStrategy for BinarySearch {
    fn name(&self) -> &'static str {
        "binary_search"
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

        // Fast path: the native size may simply fit as-is
        let at_native = probe(measurer, text, font, native, &zone, tolerance)?;
        if at_native.fits {
            return Ok(conclude(self.name(), at_native, native, &zone, 1));
        }

        let ceiling = config
            .max_font_size
            .min((native as f32 * UPSCALE_HEADROOM).round() as u32);

        let mut lo = config.min_font_size;
        let mut hi = ceiling;
        let mut best = None;
        let mut iterations = 0;

        while lo <= hi && iterations < config.max_iterations {
            iterations += 1;
            let mid = (lo + hi + 1) / 2;
            let candidate = probe(measurer, text, font, mid, &zone, tolerance)?;
            if candidate.fits {
                // Keep it, then see whether anything larger fits too
                best = Some(candidate);
                lo = mid + 1;
            } else {
                // mid >= 1 because validate() keeps min_font_size >= 1
                hi = mid - 1;
            }
        }

        match best {
            Some(found) => Ok(conclude(self.name(), found, native, &zone, iterations)),
            None => {
                // Nothing fit; report the floor honestly instead of erroring
                let floor = hi.clamp(config.min_font_size, config.max_font_size);
                let at_floor = probe(measurer, text, font, floor, &zone, tolerance)?;
                Ok(conclude(self.name(), at_floor, native, &zone, iterations))
            },
        }
    }
}
