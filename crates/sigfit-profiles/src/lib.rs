// this_file: crates/sigfit-profiles/src/lib.rs
//! Who the fonts are and where they will be shown
//!
//! The engine searches; this crate knows. It carries the production tuning
//! table for forty-four signature faces, the three render targets we ship
//! to, loaders for deployment-specific tables, and a couple of heuristics
//! that estimate sizes without running a search.
//!
//! ```
//! use sigfit_profiles::FontRegistry;
//!
//! let fonts = FontRegistry::builtin();
//! let frost = fonts.get_or_fallback("frost");
//! assert_eq!(frost.preferred_font_size, 90);
//! ```

pub mod devices;
pub mod fonts;
pub mod helpers;
pub mod table;

pub use devices::DeviceRegistry;
pub use fonts::{fallback_profile, FontRegistry, COMPACT_FONTS, DEFAULT_NATIVE_SIZE};
pub use helpers::{is_display_ready, optimal_size_for_name};
pub use table::{
    load_device_table, load_font_table, DeviceEntry, DeviceTableFile, FontEntry, FontTableFile,
    TABLE_VERSION,
};
