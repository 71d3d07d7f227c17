// this_file: crates/sigfit-engine/src/lib.rs

//! Sigfit Engine: four strategies, one verdict
//!
//! Feed it text, a font profile, a container, and a measurer; it answers
//! with the font size that uses the space best. The strategies compete, the
//! selector referees, and the device pipeline replays the winner's game for
//! every screen class.
//!
//! ```
//! use sigfit_core::{
//!     config::FittingConfig,
//!     error::Result,
//!     profile::FontProfile,
//!     traits::TextMeasurer,
//!     types::{BoundingBox, Container},
//! };
//! use sigfit_engine::fit_text;
//!
//! struct Linearish;
//!
//! impl TextMeasurer for Linearish {
//!     fn name(&self) -> &'static str {
//!         "linearish"
//!     }
//!
//!     fn measure(&self, text: &str, _font: &FontProfile, size_px: u32) -> Result<BoundingBox> {
//!         let size = size_px as f32;
//!         let width = text.chars().count() as f32 * 0.5 * size;
//!         Ok(BoundingBox::new(width, size, size * 0.8, size * 0.2))
//!     }
//! }
//!
//! let result = fit_text(
//!     "John",
//!     &FontProfile::new("frost", 480),
//!     &Container::default(),
//!     &FittingConfig::default(),
//!     &Linearish,
//! )?;
//! assert!(result.fits_in_safe_zone);
//! assert!(result.font_size >= 24);
//! # Ok::<(), sigfit_core::error::FitError>(())
//! ```

pub mod device;
pub mod recommend;
pub mod selector;
pub mod strategies;

pub use device::{
    fit_for_device_profile, fit_for_device_profiles, DeviceFit, DeviceFitting, FallbackScaling,
    ScalingSteps,
};
pub use recommend::{recommend, Priority, Recommendation, RecommendationKind};
pub use selector::{StrategyAttempt, StrategySelection, StrategySelector};
pub use strategies::{
    default_strategies, AspectRatioSearch, BinarySearch, CharacterCount, ProportionalScaling,
};

use sigfit_core::{
    config::FittingConfig,
    error::Result,
    profile::FontProfile,
    traits::TextMeasurer,
    types::{Container, FittingResult},
};

/// One-call path: run every strategy and keep the best result
pub fn fit_text(
    text: &str,
    font: &FontProfile,
    container: &Container,
    config: &FittingConfig,
    measurer: &dyn TextMeasurer,
) -> Result<FittingResult> {
    Ok(StrategySelector::new()
        .run(text, font, container, config, measurer)?
        .result)
}

/// Full visibility: every attempt plus the selection
pub fn fit_text_all_strategies(
    text: &str,
    font: &FontProfile,
    container: &Container,
    config: &FittingConfig,
    measurer: &dyn TextMeasurer,
) -> Result<StrategySelection> {
    StrategySelector::new().run(text, font, container, config, measurer)
}
