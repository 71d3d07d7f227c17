// this_file: crates/sigfit-profiles/src/helpers.rs
//! Quick size heuristics that skip the measurement loop
//!
//! Listing pages want a plausible size for dozens of faces without paying
//! for a search per face. These helpers answer from the tuning table and
//! the name length alone; the engine is the authority once a face is
//! actually rendered.

use sigfit_core::analysis::NameLengthClass;
use sigfit_core::config::FittingConfig;

use crate::fonts::FontRegistry;

/// A face is display-ready when its heuristic size clears the floor by this
const DISPLAY_READY_MARGIN: f32 = 1.5;

/// Table-driven size estimate for a name, no measurement involved
///
/// The face's preferred size is scaled by the name length bucket, nudged by
/// the bucket's flat bonus, and clamped into the configured bounds. Unknown
/// faces use the fallback tuning.
pub fn optimal_size_for_name(
    fonts: &FontRegistry,
    font_id: &str,
    text: &str,
    config: &FittingConfig,
) -> u32 {
    let profile = fonts.get_or_fallback(font_id);
    let class = NameLengthClass::of(text);
    let scaled = (profile.preferred_font_size as f32 * class.scale_factor()).round() as i64;
    let sized = scaled + i64::from(class.size_bonus());
    sized.clamp(
        i64::from(config.min_font_size),
        i64::from(config.max_font_size),
    ) as u32
}

/// Whether a face can show this name at a comfortable size
///
/// True when the heuristic size sits well clear of the configured floor. A
/// face that only fits at the floor is technically usable but reads cramped.
pub fn is_display_ready(
    fonts: &FontRegistry,
    font_id: &str,
    text: &str,
    config: &FittingConfig,
) -> bool {
    let optimal = optimal_size_for_name(fonts, font_id, text, config);
    optimal as f32 >= config.min_font_size as f32 * DISPLAY_READY_MARGIN
}
