// this_file: crates/sigfit/src/session.rs

//! One configured entry point for everything the stack can do
//!
//! A [`FitSession`] binds a measurer, the registries, a container, and search
//! bounds together so call sites stop threading five arguments through every
//! fit. Sessions are cheap to build and immutable once built; spin up another
//! if you need different bounds.

use std::collections::BTreeMap;
use std::sync::Arc;

use sigfit_batch::{rank_fonts, FontRanking};
use sigfit_core::config::FittingConfig;
use sigfit_core::error::{FitError, Result};
use sigfit_core::measure_cache::CachedMeasurer;
use sigfit_core::traits::TextMeasurer;
use sigfit_core::types::{Container, FittingResult, SafeZone};
use sigfit_engine::{
    fit_for_device_profile, fit_for_device_profiles, fit_text, fit_text_all_strategies, recommend,
    DeviceFit, Recommendation, StrategySelection,
};
use sigfit_profiles::{DeviceRegistry, FontRegistry, COMPACT_FONTS};

/// Main entry point for the fitting engine.
///
/// A session manages the measurement port, the font and device registries,
/// and the search configuration, and provides high-level methods for fitting,
/// ranking, and recommendations.
pub struct FitSession {
    measurer: Arc<dyn TextMeasurer>,
    fonts: FontRegistry,
    devices: DeviceRegistry,
    config: FittingConfig,
    container: Container,
}

impl FitSession {
    /// Creates a new [`FitSessionBuilder`] for configuring a session.
    pub fn builder() -> FitSessionBuilder {
        FitSessionBuilder::new()
    }

    /// Fit `text` in this session's container using the named face.
    ///
    /// Unknown faces use the fallback tuning rather than failing.
    pub fn fit(&self, text: &str, font_id: &str) -> Result<FittingResult> {
        let font = self.fonts.get_or_fallback(font_id);
        fit_text(
            text,
            &font,
            &self.container,
            &self.config,
            self.measurer.as_ref(),
        )
    }

    /// Like [`fit`](Self::fit), but hand back every strategy's attempt too.
    pub fn fit_all_strategies(&self, text: &str, font_id: &str) -> Result<StrategySelection> {
        let font = self.fonts.get_or_fallback(font_id);
        fit_text_all_strategies(
            text,
            &font,
            &self.container,
            &self.config,
            self.measurer.as_ref(),
        )
    }

    /// Run the device scaling pipeline for one named render target.
    pub fn fit_for_device(&self, text: &str, font_id: &str, device: &str) -> Result<DeviceFit> {
        let font = self.fonts.get_or_fallback(font_id);
        let profile = self.devices.get(device)?;
        fit_for_device_profile(text, &font, profile, &self.config, self.measurer.as_ref())
    }

    /// Run the device scaling pipeline for every registered render target.
    pub fn fit_for_all_devices(
        &self,
        text: &str,
        font_id: &str,
    ) -> Result<BTreeMap<String, DeviceFit>> {
        let font = self.fonts.get_or_fallback(font_id);
        fit_for_device_profiles(
            text,
            &font,
            self.devices.profiles(),
            &self.config,
            self.measurer.as_ref(),
        )
    }

    /// Rank every registered face for `text` in this session's container.
    pub fn rank_fonts(&self, text: &str) -> Result<FontRanking> {
        rank_fonts(
            text,
            &self.fonts,
            &self.container,
            &self.config,
            self.measurer.as_ref(),
        )
    }

    /// Explain a fitting result: what could be better and how much it matters.
    pub fn recommendations(
        &self,
        text: &str,
        result: &FittingResult,
    ) -> Result<Vec<Recommendation>> {
        let zone = SafeZone::from_container(&self.container)?;
        Ok(recommend(text, result, &zone, &COMPACT_FONTS))
    }

    /// The font registry this session answers from.
    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    /// The device registry this session answers from.
    pub fn devices(&self) -> &DeviceRegistry {
        &self.devices
    }

    /// The container plain fits and rankings run against.
    pub fn container(&self) -> &Container {
        &self.container
    }
}

/// A builder for configuring and creating a [`FitSession`].
pub struct FitSessionBuilder {
    measurer: Option<Arc<dyn TextMeasurer>>,
    fonts: Option<FontRegistry>,
    devices: Option<DeviceRegistry>,
    config: FittingConfig,
    container: Container,
    cache_measurements: bool,
}

impl FitSessionBuilder {
    /// Start from the built-in registries, the mobile card, default bounds.
    pub fn new() -> Self {
        Self {
            measurer: None,
            fonts: None,
            devices: None,
            config: FittingConfig::default(),
            container: Container::default(),
            cache_measurements: false,
        }
    }

    /// The measurement port the session will probe. Required.
    #[must_use]
    pub fn with_measurer(mut self, measurer: Arc<dyn TextMeasurer>) -> Self {
        self.measurer = Some(measurer);
        self
    }

    /// Replace the built-in font registry.
    #[must_use]
    pub fn with_fonts(mut self, fonts: FontRegistry) -> Self {
        self.fonts = Some(fonts);
        self
    }

    /// Replace the built-in device registry.
    #[must_use]
    pub fn with_devices(mut self, devices: DeviceRegistry) -> Self {
        self.devices = Some(devices);
        self
    }

    /// Replace the default search bounds.
    #[must_use]
    pub fn with_config(mut self, config: FittingConfig) -> Self {
        self.config = config;
        self
    }

    /// Container for plain fits and rankings (defaults to the mobile card).
    #[must_use]
    pub fn with_container(mut self, container: Container) -> Self {
        self.container = container;
        self
    }

    /// Memoize measurements behind an LRU cache.
    ///
    /// Worth switching on when the measurer shells out to a real shaping
    /// stack; the searches re-probe the same sizes constantly.
    #[must_use]
    pub fn with_cached_measurements(mut self, enabled: bool) -> Self {
        self.cache_measurements = enabled;
        self
    }

    /// Build the session.
    pub fn build(self) -> Result<FitSession> {
        let measurer = self
            .measurer
            .ok_or_else(|| FitError::InvalidConfig("no measurer configured".into()))?;
        let measurer: Arc<dyn TextMeasurer> = if self.cache_measurements {
            Arc::new(CachedMeasurer::new(measurer))
        } else {
            measurer
        };
        log::debug!("session ready with {} measurer", measurer.name());

        Ok(FitSession {
            measurer,
            fonts: self.fonts.unwrap_or_default(),
            devices: self.devices.unwrap_or_default(),
            config: self.config,
            container: self.container,
        })
    }
}

impl Default for FitSessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
