//! Sigfit Core: the vocabulary of text fitting
//!
//! Signature text enters as a string and a font reference, and leaves as a
//! font size that fills a container without getting cut off. This crate holds
//! everything the search reasons about along the way: containers and their
//! safe zones, measured bounding boxes, clipping risk, quality scores, and
//! the two traits that let measurement backends and fitting strategies plug
//! in from outside.
//!
//! ## The Shape of a Fit
//!
//! 1. **Container → SafeZone** - padding is subtracted, validity is checked
//! 2. **Measure** - a [`TextMeasurer`] reports the ink extents at one size
//! 3. **Classify** - [`types::ClippingRisk`] grades how close to the edge it sits
//! 4. **Score** - [`score_quality`] folds utilization, clipping, legibility,
//!    and aspect balance into a single 0-100 number
//!
//! Strategies in the engine crate repeat steps 2-4 until they are happy.
//!
//! ```rust
//! use sigfit_core::types::{BoundingBox, ClippingRisk, Container, SafeZone};
//!
//! let container = Container::default(); // 340x148 with 10px padding
//! let zone = SafeZone::from_container(&container)?;
//! assert_eq!(zone.width, 320.0);
//! assert_eq!(zone.height, 128.0);
//!
//! let measured = BoundingBox::new(300.0, 90.0, 70.0, 20.0);
//! assert_eq!(ClippingRisk::assess(&measured, &zone), ClippingRisk::Medium);
//! # Ok::<(), sigfit_core::FitError>(())
//! ```
//!
//! ## The Traits That Power Everything
//!
//! - [`TextMeasurer`] - your window into glyph geometry; the engine never
//!   parses a font itself
//! - [`FittingStrategy`] - one self-contained answer to "what size should
//!   this text be?"

pub mod analysis;
pub mod config;
pub mod error;
pub mod measure_cache;
pub mod profile;
pub mod score;
pub mod traits;

pub use analysis::{NameLengthClass, TextAnalysis};
pub use config::FittingConfig;
pub use error::{FitError, MeasureError, Result};
pub use measure_cache::{CachedMeasurer, MeasureCache};
pub use profile::{DeviceProfile, FontProfile};
pub use score::{score_quality, ScoreBreakdown};
pub use traits::{FittingStrategy, TextMeasurer};

/// The data structures every fit passes around
pub mod types {
    use crate::error::{FitError, Result};
    use std::fmt;

    /// What the measurement port reports back for one probe
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct BoundingBox {
        pub width: f32,
        pub height: f32,
        pub ascent: f32,
        pub descent: f32,
    }

    impl BoundingBox {
        pub const fn new(width: f32, height: f32, ascent: f32, descent: f32) -> Self {
            Self {
                width,
                height,
                ascent,
                descent,
            }
        }

        /// Width over height, or 0 for degenerate boxes
        pub fn aspect_ratio(&self) -> f32 {
            if self.height > 0.0 {
                self.width / self.height
            } else {
                0.0
            }
        }

        pub fn is_empty(&self) -> bool {
            self.width <= 0.0 || self.height <= 0.0
        }
    }

    /// A target drawing region, padding included
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Container {
        pub width: u32,
        pub height: u32,
        pub padding: u32,
    }

    impl Container {
        pub const fn new(width: u32, height: u32, padding: u32) -> Self {
            Self {
                width,
                height,
                padding,
            }
        }
    }

    impl Default for Container {
        /// The canonical mobile signature card
        fn default() -> Self {
            Self::new(340, 148, 10)
        }
    }

    /// The drawable area left once padding is carved away
    ///
    /// Built through [`SafeZone::from_container`], which is the only place
    /// container geometry gets validated. Both dimensions are positive for
    /// any zone produced there.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct SafeZone {
        pub width: f32,
        pub height: f32,
    }

    impl SafeZone {
        /// Subtract padding on every side and reject impossible geometry
        pub fn from_container(container: &Container) -> Result<Self> {
            let width = container.width as f32 - 2.0 * container.padding as f32;
            let height = container.height as f32 - 2.0 * container.padding as f32;
            if width <= 0.0 || height <= 0.0 {
                return Err(FitError::InvalidContainer {
                    width: container.width,
                    height: container.height,
                    padding: container.padding,
                });
            }
            Ok(Self { width, height })
        }

        pub fn aspect_ratio(&self) -> f32 {
            if self.height > 0.0 {
                self.width / self.height
            } else {
                0.0
            }
        }
    }

    /// How likely rendered text is to touch the container edge
    ///
    /// Ordered from safest to worst, so `risk <= ClippingRisk::Low` reads the
    /// way it sounds.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum ClippingRisk {
        VeryLow,
        Low,
        Medium,
        High,
        VeryHigh,
    }

    impl ClippingRisk {
        /// Grade a measured box against a safe zone
        ///
        /// Pure and total: driven by `max(width ratio, height ratio)` alone,
        /// and monotonic in that ratio.
        pub fn assess(measured: &BoundingBox, zone: &SafeZone) -> Self {
            let width_ratio = measured.width / zone.width;
            let height_ratio = measured.height / zone.height;
            let r = width_ratio.max(height_ratio);

            if r <= 0.70 {
                Self::VeryLow
            } else if r <= 0.85 {
                Self::Low
            } else if r <= 0.95 {
                Self::Medium
            } else if r <= 1.05 {
                Self::High
            } else {
                Self::VeryHigh
            }
        }

        pub fn as_str(&self) -> &'static str {
            match self {
                Self::VeryLow => "very_low",
                Self::Low => "low",
                Self::Medium => "medium",
                Self::High => "high",
                Self::VeryHigh => "very_high",
            }
        }
    }

    impl fmt::Display for ClippingRisk {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.as_str())
        }
    }

    /// Named bands of the 0-100 quality score
    ///
    /// Ordered worst to best.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum QualityTier {
        Poor,
        Acceptable,
        Good,
        Excellent,
    }

    impl QualityTier {
        pub fn from_score(score: u8) -> Self {
            if score >= 90 {
                Self::Excellent
            } else if score >= 70 {
                Self::Good
            } else if score >= 50 {
                Self::Acceptable
            } else {
                Self::Poor
            }
        }

        pub fn as_str(&self) -> &'static str {
            match self {
                Self::Poor => "poor",
                Self::Acceptable => "acceptable",
                Self::Good => "good",
                Self::Excellent => "excellent",
            }
        }
    }

    impl fmt::Display for QualityTier {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.as_str())
        }
    }

    /// What one strategy invocation produced
    ///
    /// Created fresh per call and never mutated afterwards. `scaling_factor`
    /// is the final size over the font's native size.
    #[derive(Debug, Clone, PartialEq)]
    pub struct FittingResult {
        pub font_size: u32,
        pub text_dimensions: BoundingBox,
        pub fits_in_safe_zone: bool,
        pub clipping_risk: ClippingRisk,
        pub quality_score: u8,
        pub scaling_factor: f32,
        pub strategy: &'static str,
        pub iterations: u32,
    }

    impl FittingResult {
        pub fn tier(&self) -> QualityTier {
            QualityTier::from_score(self.quality_score)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::types::*;

    #[test]
    fn safe_zone_subtracts_padding_on_both_sides() {
        let zone = SafeZone::from_container(&Container::default()).unwrap();
        assert_eq!(zone.width, 320.0);
        assert_eq!(zone.height, 128.0);
    }

    #[test]
    fn safe_zone_rejects_padding_that_swallows_the_container() {
        let squeezed = Container::new(30, 148, 20);
        assert!(SafeZone::from_container(&squeezed).is_err());

        let exact = Container::new(40, 148, 20);
        // 40 - 2*20 == 0 is just as unusable as negative
        assert!(SafeZone::from_container(&exact).is_err());
    }

    #[test]
    fn safe_zone_holds_for_any_container_with_room_left() {
        for (w, h, p) in [(340, 148, 10), (500, 220, 15), (800, 300, 20), (41, 41, 20)] {
            let zone = SafeZone::from_container(&Container::new(w, h, p)).unwrap();
            assert!(zone.width > 0.0);
            assert!(zone.height > 0.0);
        }
    }

    #[test]
    fn risk_tiers_follow_the_ratio_ladder() {
        let zone = SafeZone {
            width: 100.0,
            height: 100.0,
        };
        let at = |w: f32| BoundingBox::new(w, 10.0, 8.0, 2.0);

        assert_eq!(ClippingRisk::assess(&at(70.0), &zone), ClippingRisk::VeryLow);
        assert_eq!(ClippingRisk::assess(&at(85.0), &zone), ClippingRisk::Low);
        assert_eq!(ClippingRisk::assess(&at(95.0), &zone), ClippingRisk::Medium);
        assert_eq!(ClippingRisk::assess(&at(105.0), &zone), ClippingRisk::High);
        assert_eq!(ClippingRisk::assess(&at(105.1), &zone), ClippingRisk::VeryHigh);
    }

    #[test]
    fn risk_never_decreases_as_the_ratio_grows() {
        let zone = SafeZone {
            width: 200.0,
            height: 100.0,
        };
        let mut previous = ClippingRisk::VeryLow;
        for tenth in 0..30 {
            let width = 200.0 * (tenth as f32) / 10.0;
            let risk = ClippingRisk::assess(&BoundingBox::new(width, 1.0, 1.0, 0.0), &zone);
            assert!(risk >= previous, "risk dropped at ratio {}", tenth as f32 / 10.0);
            previous = risk;
        }
    }

    #[test]
    fn risk_takes_the_worse_axis() {
        let zone = SafeZone {
            width: 100.0,
            height: 100.0,
        };
        let wide_but_short = BoundingBox::new(104.0, 20.0, 16.0, 4.0);
        assert_eq!(ClippingRisk::assess(&wide_but_short, &zone), ClippingRisk::High);
    }

    #[test]
    fn tier_thresholds_match_the_score_bands() {
        assert_eq!(QualityTier::from_score(90), QualityTier::Excellent);
        assert_eq!(QualityTier::from_score(89), QualityTier::Good);
        assert_eq!(QualityTier::from_score(70), QualityTier::Good);
        assert_eq!(QualityTier::from_score(69), QualityTier::Acceptable);
        assert_eq!(QualityTier::from_score(50), QualityTier::Acceptable);
        assert_eq!(QualityTier::from_score(49), QualityTier::Poor);
        assert_eq!(QualityTier::from_score(0), QualityTier::Poor);
    }

    #[test]
    fn degenerate_boxes_have_zero_aspect() {
        assert_eq!(BoundingBox::new(10.0, 0.0, 0.0, 0.0).aspect_ratio(), 0.0);
        assert!(BoundingBox::new(0.0, 0.0, 0.0, 0.0).is_empty());
    }

    #[test]
    fn risk_names_render_in_wire_form() {
        assert_eq!(ClippingRisk::VeryLow.to_string(), "very_low");
        assert_eq!(ClippingRisk::VeryHigh.to_string(), "very_high");
        assert_eq!(QualityTier::Acceptable.to_string(), "acceptable");
    }
}
