// this_file: crates/sigfit/src/lib.rs
//! Sigfit - adaptive text fitting for signature rendering
//!
//! Signature text comes in all lengths; containers do not. Sigfit finds the
//! font size that fills a fixed box as much as possible without clipping:
//!
//! 1. Container geometry is validated and reduced to a safe zone
//! 2. Four strategies search for a size, probing a [`TextMeasurer`]
//! 3. Each candidate is risk-classified and quality-scored
//! 4. The best-scoring candidate wins; recommendations explain the rest
//!
//! The device pipeline fans the same search out across phone, tablet, and
//! desktop profiles, and the batch layer runs whole job files in parallel.
//!
//! # Example
//!
//! ```
//! use sigfit::prelude::*;
//! use sigfit::measure_linear::LinearMeasurer;
//! use std::sync::Arc;
//!
//! let session = FitSession::builder()
//!     .with_measurer(Arc::new(LinearMeasurer::new()))
//!     .build()?;
//!
//! let fit = session.fit("John Hancock", "frost")?;
//! assert!(fit.font_size >= 24);
//! # Ok::<(), sigfit::FitError>(())
//! ```
//!
//! # Feature Flags
//!
//! - `measure-linear`: the deterministic aggregate-metrics measurer
//!   (enabled by default; embeddings with a real shaping stack can drop it)

pub use sigfit_core::{
    analysis, config::FittingConfig, error, error::FitError, error::MeasureError, error::Result,
    measure_cache::CachedMeasurer, measure_cache::MeasureCache, profile::DeviceProfile,
    profile::FontProfile, score::score_quality, score::ScoreBreakdown, traits::FittingStrategy,
    traits::TextMeasurer, types,
};

pub use sigfit_engine::{
    default_strategies, fit_for_device_profile, fit_for_device_profiles, fit_text,
    fit_text_all_strategies, recommend, AspectRatioSearch, BinarySearch, CharacterCount,
    DeviceFit, Priority, ProportionalScaling, Recommendation, RecommendationKind,
    StrategySelection, StrategySelector,
};

pub use sigfit_batch as batch;
pub use sigfit_profiles as profiles;

#[cfg(feature = "measure-linear")]
pub use sigfit_measure_linear as measure_linear;

mod session;

pub use session::{FitSession, FitSessionBuilder};

/// Common imports for typical usage
pub mod prelude {
    pub use sigfit_core::{
        config::FittingConfig,
        error::{FitError, Result},
        profile::{DeviceProfile, FontProfile},
        traits::{FittingStrategy, TextMeasurer},
        types::{BoundingBox, ClippingRisk, Container, FittingResult, QualityTier, SafeZone},
    };

    pub use sigfit_engine::{fit_text, DeviceFit, Priority, Recommendation};
    pub use sigfit_profiles::{DeviceRegistry, FontRegistry};

    pub use crate::session::{FitSession, FitSessionBuilder};
}
