// this_file: crates/sigfit-engine/src/recommend.rs
//! Advice derived from a finished fitting result
//!
//! Pure inspection, no measurement and no side effects. The caller decides
//! what to do with the advice; nothing here changes the result it examined.

use sigfit_core::{
    analysis::TextAnalysis,
    types::{FittingResult, SafeZone},
};

/// Readability floor used by the size advice
const MIN_READABLE_SIZE: u32 = 36;
/// Below this share of the zone width the result looks lost in space
const LOW_UTILIZATION: f32 = 0.5;
/// Names longer than this get pointed at compact faces
const LONG_NAME_GRAPHEMES: usize = 15;
/// Scores below this ask for a human decision
const POOR_QUALITY: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationKind {
    Width,
    Height,
    Readability,
    Utilization,
    FontFamily,
    Quality,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// One piece of advice about a fitting result
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub priority: Priority,
    pub message: String,
    pub suggested_value: Option<u32>,
    pub suggested_fonts: Vec<String>,
}

impl Recommendation {
    fn plain(kind: RecommendationKind, priority: Priority, message: String) -> Self {
        Self {
            kind,
            priority,
            message,
            suggested_value: None,
            suggested_fonts: Vec::new(),
        }
    }
}

/// Inspect a result and say what could be better
///
/// `compact_fonts` feeds the long-name advice; pass an empty slice to skip
/// font suggestions entirely.
pub fn recommend(
    text: &str,
    result: &FittingResult,
    zone: &SafeZone,
    compact_fonts: &[&str],
) -> Vec<Recommendation> {
    let mut advice = Vec::new();
    let dimensions = &result.text_dimensions;

    if dimensions.width > zone.width {
        advice.push(Recommendation::plain(
            RecommendationKind::Width,
            Priority::High,
            format!(
                "text is {:.0}px wider than the safe zone; shorten it or drop the size",
                dimensions.width - zone.width
            ),
        ));
    }

    if dimensions.height > zone.height {
        advice.push(Recommendation::plain(
            RecommendationKind::Height,
            Priority::High,
            format!(
                "text is {:.0}px taller than the safe zone; a flatter face would help",
                dimensions.height - zone.height
            ),
        ));
    }

    if result.font_size < MIN_READABLE_SIZE {
        advice.push(Recommendation {
            kind: RecommendationKind::Readability,
            priority: Priority::Medium,
            message: format!(
                "{}px is below the {}px readability floor",
                result.font_size, MIN_READABLE_SIZE
            ),
            suggested_value: Some(MIN_READABLE_SIZE),
            suggested_fonts: Vec::new(),
        });
    }

    let width_utilization = if zone.width > 0.0 {
        dimensions.width / zone.width
    } else {
        0.0
    };
    if result.fits_in_safe_zone && width_utilization < LOW_UTILIZATION {
        advice.push(Recommendation::plain(
            RecommendationKind::Utilization,
            Priority::Low,
            format!(
                "text fills only {:.0}% of the safe zone width; a larger size would balance it",
                width_utilization * 100.0
            ),
        ));
    }

    if TextAnalysis::of(text).length > LONG_NAME_GRAPHEMES && !compact_fonts.is_empty() {
        advice.push(Recommendation {
            kind: RecommendationKind::FontFamily,
            priority: Priority::Medium,
            message: "long names render tighter in a compact face".to_owned(),
            suggested_value: None,
            suggested_fonts: compact_fonts.iter().map(|f| (*f).to_owned()).collect(),
        });
    }

    if result.quality_score < POOR_QUALITY {
        advice.push(Recommendation::plain(
            RecommendationKind::Quality,
            Priority::High,
            format!(
                "no strategy got past quality {}; this text needs manual sizing",
                result.quality_score
            ),
        ));
    }

    advice
}
