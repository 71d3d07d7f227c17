//! The contracts that bind measurers and strategies together
//!
//! Two traits, one seam each. [`TextMeasurer`] is how glyph geometry enters
//! the system without the engine ever touching a font file; implement it over
//! whatever shaping stack the embedding application already runs.
//! [`FittingStrategy`] is one self-contained way of turning "this text, this
//! box" into a font size; the engine ships four and compares them.

use crate::config::FittingConfig;
use crate::error::Result;
use crate::profile::FontProfile;
use crate::types::{BoundingBox, Container, FittingResult};

/// Your window into glyph geometry
///
/// The engine probes this port repeatedly while searching for a size. It must
/// be deterministic for identical inputs within a process lifetime: the
/// search assumes that re-measuring a probed size reproduces the earlier
/// answer.
///
/// ```ignore
/// struct MyMeasurer;
///
/// impl TextMeasurer for MyMeasurer {
///     fn name(&self) -> &'static str {
///         "my-measurer"
///     }
///
///     fn measure(&self, text: &str, font: &FontProfile, size_px: u32)
///         -> Result<BoundingBox> {
///         // Ask your shaping stack for the ink extents
///         Ok(BoundingBox::new(420.0, 96.0, 74.0, 22.0))
///     }
/// }
/// ```
pub trait TextMeasurer: Send + Sync {
    /// Who are you? Used for debugging and logging
    fn name(&self) -> &'static str;

    /// Report the ink extents of `text` rendered at `size_px`
    fn measure(&self, text: &str, font: &FontProfile, size_px: u32) -> Result<BoundingBox>;

    /// Flush any memoized measurements
    fn clear_cache(&self) {}
}

/// One self-contained answer to "what size should this text be?"
///
/// Strategies are pure apart from their calls into the measurer: same text,
/// font, container, and config always produce the same result. They never
/// fail on an unfittable input - a size that does not fit is still returned,
/// flagged through `fits_in_safe_zone` - and only surface errors the
/// measurer itself raised.
pub trait FittingStrategy: Send + Sync {
    /// Wire name recorded on every result this strategy produces
    fn name(&self) -> &'static str;

    /// Search for a font size for `text` inside `container`
    fn fit(
        &self,
        text: &str,
        font: &FontProfile,
        container: &Container,
        config: &FittingConfig,
        measurer: &dyn TextMeasurer,
    ) -> Result<FittingResult>;
}
