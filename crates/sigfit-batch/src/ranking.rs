// this_file: crates/sigfit-batch/src/ranking.rs

//! Try every registered face on one name and order them by fit quality.
//!
//! Each face runs the full strategy competition against the same container
//! and bounds, in parallel. Ties keep registry order (ascending face id), so
//! the ranking is reproducible run to run and machine to machine.

use rayon::prelude::*;
use serde::Serialize;

use sigfit_core::config::FittingConfig;
use sigfit_core::error::Result;
use sigfit_core::traits::TextMeasurer;
use sigfit_core::types::{ClippingRisk, Container};
use sigfit_engine::fit_text;
use sigfit_profiles::FontRegistry;

/// How many faces the headline recommendation list holds.
const RECOMMENDED_LIMIT: usize = 5;

/// Quality floor for the recommended flag.
const RECOMMENDED_MIN_QUALITY: u8 = 70;

/// One face's showing for the ranked name.
#[derive(Debug, Clone, Serialize)]
pub struct FontRankEntry {
    /// Face id
    pub font_id: String,
    /// 0-100 quality of the winning fit
    pub quality_score: u8,
    /// Final size of the winning fit
    pub font_size: u32,
    /// Final size over the face's native size
    pub scaling_factor: f32,
    /// Risk band ("very_low" through "very_high")
    pub clipping_risk: String,
    /// Whether the winning fit stayed inside the safe zone
    pub fits_in_safe_zone: bool,
    /// Good quality at low risk
    pub recommended: bool,
}

/// Aggregate over the whole ranking.
#[derive(Debug, Clone, Serialize)]
pub struct RankingSummary {
    /// Faces ranked
    pub total: usize,
    /// Faces carrying the recommended flag
    pub recommended_count: usize,
    /// Mean quality across all faces, rounded
    pub average_quality: u8,
}

/// Every face in a registry, ordered by how well it fits one name.
#[derive(Debug, Clone, Serialize)]
pub struct FontRanking {
    /// Best first; equal scores keep ascending face id order
    pub entries: Vec<FontRankEntry>,
    /// Ids of the best recommended faces, at most five
    pub recommended: Vec<String>,
    /// Aggregate stats
    pub summary: RankingSummary,
}

/// Rank every face in `fonts` for `text` inside `container`.
///
/// A face whose measurement fails still ranks - the competition records the
/// failure as a floor-quality result - so the only errors out of here are
/// ones shared by every face: an unusable container or config.
pub fn rank_fonts(
    text: &str,
    fonts: &FontRegistry,
    container: &Container,
    config: &FittingConfig,
    measurer: &dyn TextMeasurer,
) -> Result<FontRanking> {
    let profiles: Vec<_> = fonts.profiles().cloned().collect();
    log::debug!("ranking {} faces for {:?}", profiles.len(), text);

    let mut entries = profiles
        .par_iter()
        .map(|font| -> Result<FontRankEntry> {
            let fit = fit_text(text, font, container, config, measurer)?;
            Ok(FontRankEntry {
                font_id: font.id.clone(),
                quality_score: fit.quality_score,
                font_size: fit.font_size,
                scaling_factor: fit.scaling_factor,
                clipping_risk: fit.clipping_risk.to_string(),
                fits_in_safe_zone: fit.fits_in_safe_zone,
                recommended: fit.quality_score >= RECOMMENDED_MIN_QUALITY
                    && fit.clipping_risk <= ClippingRisk::Low,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    // Stable sort: equal scores keep the registry's id order
    entries.sort_by(|a, b| b.quality_score.cmp(&a.quality_score));

    let recommended: Vec<String> = entries
        .iter()
        .filter(|e| e.recommended)
        .take(RECOMMENDED_LIMIT)
        .map(|e| e.font_id.clone())
        .collect();

    let recommended_count = entries.iter().filter(|e| e.recommended).count();
    let average_quality = if entries.is_empty() {
        0
    } else {
        let sum: u64 = entries.iter().map(|e| u64::from(e.quality_score)).sum();
        (sum as f64 / entries.len() as f64).round() as u8
    };

    Ok(FontRanking {
        summary: RankingSummary {
            total: entries.len(),
            recommended_count,
            average_quality,
        },
        recommended,
        entries,
    })
}
