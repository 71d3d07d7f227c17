// this_file: crates/sigfit-engine/src/device.rs
//! From native size to per-device size, step by step
//!
//! The pipeline composes the tuning knobs a font profile carries: scale the
//! native size down for the device class, adjust for how long the name is,
//! let the binary search settle the real fit, then apply the face's height
//! correction. Every intermediate value is kept in [`ScalingSteps`] so a
//! surprising final size can be explained after the fact.

use std::collections::BTreeMap;

use sigfit_core::{
    analysis::NameLengthClass,
    config::FittingConfig,
    error::Result,
    profile::{DeviceProfile, FontProfile},
    traits::{FittingStrategy, TextMeasurer},
    types::{FittingResult, SafeZone},
};

use crate::strategies::{conclude, probe, scale_of, BinarySearch};

/// Emergency shrink applied when the pipeline cannot measure at all
const FALLBACK_SCALE: f32 = 0.7;
/// Ceiling for the emergency size
const FALLBACK_CEILING: u32 = 60;

/// Every intermediate size the pipeline produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalingSteps {
    /// The font's native size, before anything
    pub original: u32,
    /// After the font's device scale factor
    pub font_scaled: u32,
    /// After the name-length multiplier and bonus
    pub length_adjusted: u32,
    /// What the seeded binary search settled on
    pub fit_searched: u32,
    /// After the font's height correction
    pub height_adjusted: u32,
    /// After clamping to the configured bounds
    pub final_size: u32,
}

/// A successful pipeline run with its audit trail
#[derive(Debug, Clone)]
pub struct DeviceFitting {
    pub device: String,
    pub result: FittingResult,
    pub steps: ScalingSteps,
}

/// The deterministic stand-in when the pipeline could not finish
#[derive(Debug, Clone)]
pub struct FallbackScaling {
    pub device: String,
    pub font_size: u32,
    pub scaling_factor: f32,
    pub reason: String,
}

/// What one device ended up with
#[derive(Debug, Clone)]
pub enum DeviceFit {
    Fitted(DeviceFitting),
    Fallback(FallbackScaling),
}

impl DeviceFit {
    pub fn device(&self) -> &str {
        match self {
            Self::Fitted(fitting) => &fitting.device,
            Self::Fallback(fallback) => &fallback.device,
        }
    }

    pub fn font_size(&self) -> u32 {
        match self {
            Self::Fitted(fitting) => fitting.result.font_size,
            Self::Fallback(fallback) => fallback.font_size,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Run the scaling pipeline for one device profile
///
/// Measurement trouble degrades into [`DeviceFit::Fallback`]; only an
/// unusable container or config aborts the call.
pub fn fit_for_device_profile(
    text: &str,
    font: &FontProfile,
    device: &DeviceProfile,
    config: &FittingConfig,
    measurer: &dyn TextMeasurer,
) -> Result<DeviceFit> {
    config.validate()?;
    SafeZone::from_container(&device.container)?;

    match run_pipeline(text, font, device, config, measurer) {
        Ok(fitting) => Ok(DeviceFit::Fitted(fitting)),
        Err(err) if err.is_fatal() => Err(err),
        Err(err) => {
            let font_size = fallback_size(font.base_size);
            log::warn!(
                "device pipeline for {} degraded to {}px: {}",
                device.name,
                font_size,
                err
            );
            Ok(DeviceFit::Fallback(FallbackScaling {
                device: device.name.clone(),
                font_size,
                scaling_factor: scale_of(font_size, font.base_size),
                reason: err.to_string(),
            }))
        },
    }
}

/// Run the pipeline once per profile; one device's trouble never spills over
pub fn fit_for_device_profiles(
    text: &str,
    font: &FontProfile,
    devices: &[DeviceProfile],
    config: &FittingConfig,
    measurer: &dyn TextMeasurer,
) -> Result<BTreeMap<String, DeviceFit>> {
    let mut fits = BTreeMap::new();
    for device in devices {
        // Non-fatal trouble already degraded inside; only caller bugs escape
        let fit = fit_for_device_profile(text, font, device, config, measurer)?;
        fits.insert(device.name.clone(), fit);
    }
    Ok(fits)
}

fn fallback_size(native: u32) -> u32 {
    ((native as f32 * FALLBACK_SCALE).round() as u32).min(FALLBACK_CEILING)
}

fn run_pipeline(
    text: &str,
    font: &FontProfile,
    device: &DeviceProfile,
    config: &FittingConfig,
    measurer: &dyn TextMeasurer,
) -> Result<DeviceFitting> {
    let native = font.base_size;
    let font_scaled = (native as f32 * font.mobile_scale_factor).round() as u32;

    let class = NameLengthClass::of(text);
    let adjusted = (font_scaled as f32 * class.scale_factor()).round() as i64
        + i64::from(class.size_bonus());
    let length_adjusted = adjusted.clamp(1, i64::from(u32::MAX)) as u32;

    // The search starts from the adjusted target, not the raw native size
    let seeded = FontProfile {
        base_size: length_adjusted,
        ..font.clone()
    };
    let search = BinarySearch.fit(text, &seeded, &device.container, config, measurer)?;
    let fit_searched = search.font_size;

    let height_adjusted = (fit_searched as f32 * font.height_adjustment).round() as u32;
    let final_size = height_adjusted.clamp(config.min_font_size, config.max_font_size);

    // One more measurement at the final size validates the whole chain
    let zone = SafeZone::from_container(&device.container)?;
    let tolerance = config.effective_tolerance(font);
    let validated = probe(measurer, text, font, final_size, &zone, tolerance)?;

    log::debug!(
        "{}: {} -> {} -> {} -> {} -> {} -> {}",
        device.name,
        native,
        font_scaled,
        length_adjusted,
        fit_searched,
        height_adjusted,
        final_size
    );

    let result = conclude("device_pipeline", validated, native, &zone, search.iterations + 1);

    Ok(DeviceFitting {
        device: device.name.clone(),
        result,
        steps: ScalingSteps {
            original: native,
            font_scaled,
            length_adjusted,
            fit_searched,
            height_adjusted,
            final_size,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::testutil::{BrokenMeasurer, ScaledMeasurer};
    use sigfit_core::types::Container;

    fn signature_font() -> FontProfile {
        FontProfile {
            mobile_scale_factor: 0.8,
            height_adjustment: 0.85,
            clipping_tolerance: 0.04,
            ..FontProfile::new("frost", 480)
        }
    }

    fn three_devices() -> Vec<DeviceProfile> {
        vec![
            DeviceProfile {
                name: "mobile".to_owned(),
                container: Container::new(340, 148, 10),
                scaling_factor: 1.0,
            },
            DeviceProfile {
                name: "tablet".to_owned(),
                container: Container::new(500, 220, 15),
                scaling_factor: 1.3,
            },
            DeviceProfile {
                name: "desktop".to_owned(),
                container: Container::new(800, 300, 20),
                scaling_factor: 1.8,
            },
        ]
    }

    #[test]
    fn records_every_intermediate_size() {
        let measurer = ScaledMeasurer::regular();
        let devices = three_devices();
        let fit = fit_for_device_profile(
            "John",
            &signature_font(),
            &devices[0],
            &FittingConfig::default(),
            &measurer,
        )
        .unwrap();

        let fitting = match fit {
            DeviceFit::Fitted(fitting) => fitting,
            DeviceFit::Fallback(fallback) => panic!("unexpected fallback: {}", fallback.reason),
        };

        // 480 -> x0.8 -> 384 -> short-name boost -> 437 -> search -> 116
        // -> x0.85 -> 99 -> clamp -> 99
        assert_eq!(
            fitting.steps,
            ScalingSteps {
                original: 480,
                font_scaled: 384,
                length_adjusted: 437,
                fit_searched: 116,
                height_adjusted: 99,
                final_size: 99,
            }
        );
        assert_eq!(fitting.result.font_size, 99);
        assert_eq!(fitting.result.strategy, "device_pipeline");
        assert!(fitting.result.fits_in_safe_zone);
    }

    #[test]
    fn larger_screens_never_get_smaller_text() {
        let measurer = ScaledMeasurer::regular();
        let fits = fit_for_device_profiles(
            "Orkun C.",
            &signature_font(),
            &three_devices(),
            &FittingConfig::default(),
            &measurer,
        )
        .unwrap();

        assert_eq!(fits.len(), 3);
        assert!(fits.values().all(|fit| !fit.is_fallback()));
        assert!(fits["desktop"].font_size() >= fits["mobile"].font_size());
    }

    #[test]
    fn profiles_come_back_keyed_by_name() {
        let measurer = ScaledMeasurer::regular();
        let fits = fit_for_device_profiles(
            "John",
            &signature_font(),
            &three_devices(),
            &FittingConfig::default(),
            &measurer,
        )
        .unwrap();

        let names: Vec<&str> = fits.keys().map(String::as_str).collect();
        assert_eq!(names, ["desktop", "mobile", "tablet"]);
    }

    #[test]
    fn measurement_trouble_degrades_to_the_emergency_size() {
        let devices = three_devices();
        let fit = fit_for_device_profile(
            "John",
            &signature_font(),
            &devices[0],
            &FittingConfig::default(),
            &BrokenMeasurer,
        )
        .unwrap();

        let fallback = match fit {
            DeviceFit::Fallback(fallback) => fallback,
            DeviceFit::Fitted(_) => panic!("expected a fallback"),
        };

        // min(480 * 0.7, 60)
        assert_eq!(fallback.font_size, 60);
        assert!((fallback.scaling_factor - 0.125).abs() < 1e-6);
        assert!(fallback.reason.contains("offline"));
    }

    #[test]
    fn a_broken_container_is_fatal_not_a_fallback() {
        let measurer = ScaledMeasurer::regular();
        let cramped = DeviceProfile {
            name: "watch".to_owned(),
            container: Container::new(20, 20, 10),
            scaling_factor: 0.5,
        };
        let result = fit_for_device_profile(
            "John",
            &signature_font(),
            &cramped,
            &FittingConfig::default(),
            &measurer,
        );

        assert!(result.is_err());
    }

    #[test]
    fn long_names_step_through_the_shrinking_buckets() {
        let measurer = ScaledMeasurer::regular();
        let devices = three_devices();
        let fit = fit_for_device_profile(
            "Alexandra Featherstone",
            &signature_font(),
            &devices[0],
            &FittingConfig::default(),
            &measurer,
        )
        .unwrap();

        let fitting = match fit {
            DeviceFit::Fitted(fitting) => fitting,
            DeviceFit::Fallback(fallback) => panic!("unexpected fallback: {}", fallback.reason),
        };

        // 22 graphemes: x0.8 and -20 on top of the device scale
        assert_eq!(fitting.steps.font_scaled, 384);
        assert_eq!(fitting.steps.length_adjusted, 287);
        assert!(!fitting.result.fits_in_safe_zone || fitting.result.font_size < 99);
    }
}
