//! Cross-crate invariants the embedding service leans on
//!
//! These hold for any deterministic measurer; the linear backend keeps them
//! cheap to check exhaustively.

// this_file: crates/sigfit/tests/engine_properties.rs

use std::sync::Arc;

use sigfit::measure_linear::LinearMeasurer;
use sigfit::prelude::*;
use sigfit::{fit_text_all_strategies, BinarySearch};

fn zone() -> SafeZone {
    SafeZone::from_container(&Container::default()).unwrap()
}

/// The largest size on [min, max] whose box clears the tolerance-shrunk zone
fn largest_fitting_size(
    measurer: &LinearMeasurer,
    text: &str,
    font: &FontProfile,
    config: &FittingConfig,
) -> Option<u32> {
    let zone = zone();
    let tolerance = config.effective_tolerance(font);
    (config.min_font_size..=config.max_font_size)
        .rev()
        .find(|&size| {
            let bbox = measurer.measure(text, font, size).unwrap();
            bbox.width <= zone.width * tolerance && bbox.height <= zone.height * tolerance
        })
}

#[test]
fn binary_search_matches_the_exhaustive_answer() {
    let measurer = LinearMeasurer::new();
    let config = FittingConfig::default();

    for text in ["John", "Jane Adams", "Orkun C.", "Carlos Mendes Jr"] {
        let font = FontProfile::new("plain", 480);
        let expected = largest_fitting_size(&measurer, text, &font, &config);
        let result = BinarySearch
            .fit(text, &font, &Container::default(), &config, &measurer)
            .unwrap();

        match expected {
            Some(size) => {
                assert_eq!(
                    result.font_size, size,
                    "{text:?} should settle on the largest fitting size"
                );
                assert!(result.fits_in_safe_zone);
            },
            None => assert!(!result.fits_in_safe_zone, "{text:?} cannot fit"),
        }
    }
}

#[test]
fn fitting_native_size_short_circuits() {
    let measurer = LinearMeasurer::new();
    let font = FontProfile::new("plain", 100);
    let result = BinarySearch
        .fit(
            "Jo",
            &font,
            &Container::default(),
            &FittingConfig::default(),
            &measurer,
        )
        .unwrap();

    assert_eq!(result.font_size, 100);
    assert_eq!(result.iterations, 1);
    assert!((result.scaling_factor - 1.0).abs() < 1e-6);
}

#[test]
fn the_competition_is_reproducible() {
    let measurer = LinearMeasurer::new();
    let font = FontProfile::new("frost", 480);
    let run = || {
        fit_text_all_strategies(
            "Orkun Candan",
            &font,
            &Container::default(),
            &FittingConfig::default(),
            &measurer,
        )
        .unwrap()
    };

    let first = run();
    let second = run();
    assert_eq!(first.best_strategy, second.best_strategy);
    assert_eq!(first.result, second.result);
    assert_eq!(first.attempts.len(), second.attempts.len());
}

#[test]
fn every_result_respects_the_configured_bounds() {
    let session = FitSession::builder()
        .with_measurer(Arc::new(LinearMeasurer::new()))
        .build()
        .unwrap();
    let config = FittingConfig::default();

    for text in ["J", "John", "Jane Adams", "Alexandra Featherstone"] {
        for font_id in ["frost", "ember", "digital", "unknown-face"] {
            let fit = session.fit(text, font_id).unwrap();
            assert!(fit.font_size >= config.min_font_size);
            assert!(fit.font_size <= config.max_font_size);
            assert!(fit.quality_score <= 100);

            let devices = session.fit_for_all_devices(text, font_id).unwrap();
            for fit in devices.values() {
                assert!(fit.font_size() >= config.min_font_size);
                assert!(fit.font_size() <= config.max_font_size);
            }
        }
    }
}

#[test]
fn risk_and_score_agree_on_the_winning_result() {
    let session = FitSession::builder()
        .with_measurer(Arc::new(LinearMeasurer::new()))
        .build()
        .unwrap();

    let fit = session.fit("Jane Adams", "frost").unwrap();
    assert_eq!(
        fit.clipping_risk,
        ClippingRisk::assess(&fit.text_dimensions, &zone())
    );
    assert_eq!(
        fit.quality_score,
        sigfit::score_quality(
            &fit.text_dimensions,
            fit.font_size,
            fit.fits_in_safe_zone,
            &zone()
        )
    );
}
