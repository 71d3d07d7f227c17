//! The composite quality metric
//!
//! Four sub-scores summed and clamped into 0-100. Utilization and clipping
//! avoidance carry most of the weight - the product goal is filling the box
//! without cutting text - while legibility and aspect balance refine the
//! tail of the ranking.

use crate::types::{BoundingBox, SafeZone};

/// Below this the text stops being comfortably readable on a phone
const MIN_READABLE_SIZE: u32 = 36;
/// Sizes at or past this collect the full adequacy score
const OPTIMAL_SIZE: u32 = 90;

/// The four components behind one quality score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Space utilization, up to 40
    pub utilization: f32,
    /// Clipping avoidance, up to 30
    pub clipping: f32,
    /// Font size adequacy, up to 20
    pub size: f32,
    /// Aspect ratio balance, up to 10
    pub aspect: f32,
}

impl ScoreBreakdown {
    pub fn compute(
        measured: &BoundingBox,
        font_size: u32,
        fits_in_safe_zone: bool,
        zone: &SafeZone,
    ) -> Self {
        let width_ratio = measured.width / zone.width;
        let height_ratio = measured.height / zone.height;

        let utilization = (width_ratio.min(1.0) * 0.7 + height_ratio.min(1.0) * 0.3) * 40.0;

        let clipping = if fits_in_safe_zone {
            30.0
        } else {
            let overage = width_ratio.max(height_ratio) - 1.0;
            (30.0 - overage * 100.0).max(0.0)
        };

        let size = if font_size >= MIN_READABLE_SIZE {
            (font_size as f32 / OPTIMAL_SIZE as f32).min(1.0) * 20.0
        } else {
            0.0
        };

        let aspect_diff = (measured.aspect_ratio() - zone.aspect_ratio()).abs();
        let aspect = (10.0 - aspect_diff * 5.0).max(0.0);

        Self {
            utilization,
            clipping,
            size,
            aspect,
        }
    }

    /// Sum of the components, clamped and rounded into 0-100
    pub fn total(&self) -> u8 {
        let sum = self.utilization + self.clipping + self.size + self.aspect;
        sum.clamp(0.0, 100.0).round() as u8
    }
}

/// Fold a measured result into the 0-100 composite metric
pub fn score_quality(
    measured: &BoundingBox,
    font_size: u32,
    fits_in_safe_zone: bool,
    zone: &SafeZone,
) -> u8 {
    ScoreBreakdown::compute(measured, font_size, fits_in_safe_zone, zone).total()
}
