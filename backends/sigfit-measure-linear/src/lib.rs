//! Linear Measurer - aggregate-metrics text measurement
//!
//! The simplest possible measurement backend: every character is assigned
//! an advance from a small width-class table, scaled by em-relative face
//! metrics. No font files, no shaping, fully deterministic. Suitable for
//! tests and for embedders whose renderer works from the same aggregate
//! metrics.

use sigfit_core::{
    error::{MeasureError, Result},
    profile::FontProfile,
    traits::TextMeasurer,
    types::BoundingBox,
};

/// Em-relative face metrics driving the linear measurer
///
/// All fields are fractions of the font size. The defaults approximate a
/// mid-width signature face; tests that need exact geometry construct their
/// own set via [`LinearMeasurer::with_metrics`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceMetrics {
    /// Advance of a regular character, in em
    pub advance_em: f32,
    /// Ascent above the baseline, in em
    pub ascent_em: f32,
    /// Descent below the baseline, in em
    pub descent_em: f32,
    /// Extra tracking added per character, in em
    pub letter_spacing_em: f32,
}

impl Default for FaceMetrics {
    fn default() -> Self {
        Self {
            advance_em: 0.5,
            ascent_em: 0.78,
            descent_em: 0.22,
            letter_spacing_em: 0.0,
        }
    }
}

/// Width-class factor relative to the regular advance
fn width_class(ch: char) -> f32 {
    match ch {
        ' ' => 0.55,
        'i' | 'j' | 'l' | 't' | 'f' | 'r' | '.' | ',' | ':' | ';' | '\'' | '!' | '|' | '(' | ')' => 0.6,
        'm' | 'w' | 'M' | 'W' | '@' => 1.6,
        _ => 1.0,
    }
}

/// A measurer that advances linearly through the text
pub struct LinearMeasurer {
    metrics: FaceMetrics,
}

impl LinearMeasurer {
    /// Create a measurer with the default face metrics
    pub fn new() -> Self {
        Self {
            metrics: FaceMetrics::default(),
        }
    }

    /// Create a measurer with explicit face metrics
    pub fn with_metrics(metrics: FaceMetrics) -> Self {
        Self { metrics }
    }
}

impl Default for LinearMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for LinearMeasurer {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn measure(&self, text: &str, font: &FontProfile, size_px: u32) -> Result<BoundingBox> {
        if text.is_empty() {
            return Err(MeasureError::EmptyText.into());
        }

        log::debug!(
            "LinearMeasurer: measuring {} chars of {} at {}px",
            text.chars().count(),
            font.id,
            size_px
        );

        let size = size_px as f32;
        let mut width = 0.0;
        for ch in text.chars() {
            let advance = width_class(ch) * self.metrics.advance_em * size;
            width += advance + self.metrics.letter_spacing_em * size;
        }

        let ascent = self.metrics.ascent_em * size;
        let descent = self.metrics.descent_em * size;

        Ok(BoundingBox::new(width, ascent + descent, ascent, descent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_scales_linearly_with_size() {
        let measurer = LinearMeasurer::new();
        let font = FontProfile::new("plain", 480);

        let at_50 = measurer.measure("John", &font, 50).unwrap();
        let at_100 = measurer.measure("John", &font, 100).unwrap();

        assert!((at_100.width - at_50.width * 2.0).abs() < 1e-3);
        assert!((at_100.height - at_50.height * 2.0).abs() < 1e-3);
    }

    #[test]
    fn regular_characters_use_the_base_advance() {
        let measurer = LinearMeasurer::new();
        let font = FontProfile::new("plain", 480);

        // J, o, h, n are all regular class: 4 * 0.5em
        let bbox = measurer.measure("John", &font, 100).unwrap();
        assert!((bbox.width - 200.0).abs() < 1e-3);
        assert!((bbox.height - 100.0).abs() < 1e-3);
        assert!((bbox.ascent - 78.0).abs() < 1e-3);
        assert!((bbox.descent - 22.0).abs() < 1e-3);
    }

    #[test]
    fn narrow_and_wide_classes_change_the_advance() {
        let measurer = LinearMeasurer::new();
        let font = FontProfile::new("plain", 480);

        let narrow = measurer.measure("ill", &font, 100).unwrap();
        let regular = measurer.measure("abc", &font, 100).unwrap();
        let wide = measurer.measure("mww", &font, 100).unwrap();

        assert!(narrow.width < regular.width);
        assert!(regular.width < wide.width);
    }

    #[test]
    fn letter_spacing_adds_per_character() {
        let spaced = LinearMeasurer::with_metrics(FaceMetrics {
            letter_spacing_em: 0.1,
            ..FaceMetrics::default()
        });
        let plain = LinearMeasurer::new();
        let font = FontProfile::new("plain", 480);

        let with_spacing = spaced.measure("John", &font, 100).unwrap();
        let without = plain.measure("John", &font, 100).unwrap();

        // 4 chars * 0.1em * 100px
        assert!((with_spacing.width - without.width - 40.0).abs() < 1e-3);
    }

    #[test]
    fn empty_text_is_rejected() {
        let measurer = LinearMeasurer::new();
        let font = FontProfile::new("plain", 480);

        assert!(measurer.measure("", &font, 100).is_err());
    }

    #[test]
    fn measurement_is_repeatable() {
        let measurer = LinearMeasurer::new();
        let font = FontProfile::new("plain", 480);

        let a = measurer.measure("Orkun C.", &font, 64).unwrap();
        let b = measurer.measure("Orkun C.", &font, 64).unwrap();

        assert_eq!(a, b);
    }
}
