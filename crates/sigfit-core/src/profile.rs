//! Read-only font and device reference data
//!
//! Profiles are looked up once per fitting call and never branched on by
//! name inside the algorithms: everything family-specific travels in the
//! numeric tuning fields.

use crate::types::Container;

/// Per-family tuning plus the native render size of the requested style
#[derive(Debug, Clone, PartialEq)]
pub struct FontProfile {
    pub id: String,
    /// Native size the style ships with, the starting point of every search
    pub base_size: u32,
    /// Shrink factor applied first in the device pipeline
    pub mobile_scale_factor: f32,
    /// Size this family reads best at on a small screen
    pub preferred_font_size: u32,
    /// Correction for families with tall ascenders or deep descenders
    pub height_adjustment: f32,
    /// Extra safety margin subtracted from the configured tolerance ratio
    pub clipping_tolerance: f32,
}

impl FontProfile {
    /// Neutral tuning: fits behave exactly like the untuned base algorithm
    pub fn new(id: impl Into<String>, base_size: u32) -> Self {
        Self {
            id: id.into(),
            base_size,
            mobile_scale_factor: 1.0,
            preferred_font_size: 90,
            height_adjustment: 1.0,
            clipping_tolerance: 0.0,
        }
    }

    /// Same tuning, different native size
    pub fn with_base_size(mut self, base_size: u32) -> Self {
        self.base_size = base_size;
        self
    }
}

/// A named rendering target and its container geometry
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceProfile {
    pub name: String,
    pub container: Container,
    /// Relative display scale of this device class, carried for reporting
    pub scaling_factor: f32,
}

impl DeviceProfile {
    pub fn new(name: impl Into<String>, container: Container, scaling_factor: f32) -> Self {
        Self {
            name: name.into(),
            container,
            scaling_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_profile_leaves_the_algorithms_untouched() {
        let font = FontProfile::new("plain", 480);
        assert_eq!(font.base_size, 480);
        assert_eq!(font.mobile_scale_factor, 1.0);
        assert_eq!(font.height_adjustment, 1.0);
        assert_eq!(font.clipping_tolerance, 0.0);
    }

    #[test]
    fn base_size_can_be_swapped_per_request() {
        let font = FontProfile::new("plain", 480).with_base_size(360);
        assert_eq!(font.base_size, 360);
        assert_eq!(font.id, "plain");
    }
}
