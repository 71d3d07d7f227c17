// this_file: crates/sigfit-profiles/src/fonts.rs
//! The built-in font tuning table
//!
//! Forty-four signature faces, each with four numbers learned from
//! production: how far to scale down for small screens, the size the face
//! looks best at, a height correction for tall ascenders, and how much
//! fitting headroom its swashes demand. Faces the table does not know get a
//! conservative middle-of-the-road tuning instead of an error.

use std::collections::BTreeMap;

use sigfit_core::profile::FontProfile;

/// Native size the signature rasterizer renders at
pub const DEFAULT_NATIVE_SIZE: u32 = 480;

/// Narrow faces worth suggesting when a name runs long
pub const COMPACT_FONTS: [&str; 4] = ["digital", "pixel", "sharp", "lunar"];

/// id, device scale, preferred size, height adjustment, clipping tolerance
///
/// The script-heavy faces (ember, storm, wave, flux) carry the largest
/// clipping tolerance - their flourishes overshoot the reported box.
const FONT_TABLE: [(&str, f32, u32, f32, f32); 44] = [
    ("zephyr", 0.75, 85, 0.9, 0.05),
    ("quixel", 0.8, 90, 0.85, 0.03),
    ("prism", 0.72, 80, 0.95, 0.05),
    ("nexus", 0.85, 95, 0.8, 0.02),
    ("vortex", 0.82, 92, 0.82, 0.03),
    ("flux", 0.7, 75, 1.0, 0.08),
    ("crisp", 0.78, 88, 0.88, 0.04),
    ("ember", 0.65, 75, 0.85, 0.08),
    ("storm", 0.68, 75, 0.85, 0.08),
    ("lunar", 0.88, 100, 0.75, 0.02),
    ("pixel", 0.9, 105, 0.7, 0.01),
    ("frost", 0.8, 90, 0.85, 0.04),
    ("drift", 0.79, 89, 0.87, 0.04),
    ("blaze", 0.81, 91, 0.83, 0.03),
    ("ocean", 0.77, 87, 0.89, 0.05),
    ("ghost", 0.74, 84, 0.91, 0.06),
    ("chrome", 0.83, 93, 0.81, 0.03),
    ("twist", 0.75, 85, 0.9, 0.05),
    ("cloud", 0.84, 94, 0.8, 0.02),
    ("ridge", 0.78, 88, 0.88, 0.04),
    ("wave", 0.7, 78, 0.85, 0.08),
    ("stone", 0.85, 95, 0.8, 0.02),
    ("magic", 0.73, 82, 0.92, 0.06),
    ("pulse", 0.82, 92, 0.82, 0.03),
    ("swift", 0.86, 96, 0.79, 0.02),
    ("coral", 0.76, 86, 0.9, 0.05),
    ("tidal", 0.81, 91, 0.83, 0.03),
    ("flame", 0.74, 84, 0.91, 0.06),
    ("bloom", 0.77, 87, 0.89, 0.05),
    ("creek", 0.8, 90, 0.85, 0.04),
    ("amber", 0.83, 93, 0.81, 0.03),
    ("blade", 0.87, 97, 0.78, 0.02),
    ("cyber", 0.89, 102, 0.72, 0.01),
    ("pearl", 0.75, 85, 0.9, 0.05),
    ("crystal", 0.78, 88, 0.88, 0.04),
    ("glacial", 0.84, 94, 0.8, 0.02),
    ("blossom", 0.76, 86, 0.9, 0.05),
    ("thunder", 0.85, 95, 0.8, 0.02),
    ("radiant", 0.79, 89, 0.87, 0.04),
    ("celestial", 0.74, 84, 0.91, 0.06),
    ("digital", 0.91, 108, 0.68, 0.01),
    ("inferno", 0.72, 80, 0.95, 0.07),
    ("sharp", 0.88, 100, 0.75, 0.02),
    ("spark", 0.8, 90, 0.85, 0.04),
];

/// Conservative tuning for faces the table does not know
pub fn fallback_profile(id: &str) -> FontProfile {
    FontProfile {
        mobile_scale_factor: 0.8,
        preferred_font_size: 90,
        height_adjustment: 0.85,
        clipping_tolerance: 0.04,
        ..FontProfile::new(id, DEFAULT_NATIVE_SIZE)
    }
}

/// Your font tuning library, keyed by face id
///
/// Iteration is id-ordered, which keeps everything built on top of it
/// (ranking in particular) deterministic.
#[derive(Debug, Clone)]
pub struct FontRegistry {
    profiles: BTreeMap<String, FontProfile>,
}

impl FontRegistry {
    /// Start with nothing registered
    pub fn empty() -> Self {
        Self {
            profiles: BTreeMap::new(),
        }
    }

    /// The full production tuning table
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for (id, scale, preferred, height, clip) in FONT_TABLE {
            registry.register(FontProfile {
                mobile_scale_factor: scale,
                preferred_font_size: preferred,
                height_adjustment: height,
                clipping_tolerance: clip,
                ..FontProfile::new(id, DEFAULT_NATIVE_SIZE)
            });
        }
        registry
    }

    /// Add or replace one face's tuning
    pub fn register(&mut self, profile: FontProfile) {
        self.profiles.insert(profile.id.clone(), profile);
    }

    /// Exact lookup, when the caller wants to know the face is unknown
    pub fn get(&self, id: &str) -> Option<&FontProfile> {
        self.profiles.get(id)
    }

    /// Lookup that never fails: unknown faces get the fallback tuning
    pub fn get_or_fallback(&self, id: &str) -> FontProfile {
        match self.profiles.get(id) {
            Some(profile) => profile.clone(),
            None => {
                log::debug!("no tuning for {}, using fallback profile", id);
                fallback_profile(id)
            },
        }
    }

    /// Registered face ids, ascending
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// All registered profiles, id-ordered
    pub fn profiles(&self) -> impl Iterator<Item = &FontProfile> {
        self.profiles.values()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
