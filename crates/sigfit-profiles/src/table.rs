// this_file: crates/sigfit-profiles/src/table.rs
//! Loading tuning tables from JSON
//!
//! Deployments ship their own font and device tables alongside the built-in
//! ones. The format is versioned and strict: unknown fields are rejected so
//! a typo in a tuning knob fails loudly instead of silently using defaults.

use serde::{Deserialize, Serialize};

use sigfit_core::error::FitError;
use sigfit_core::profile::{DeviceProfile, FontProfile};
use sigfit_core::types::Container;

use crate::devices::DeviceRegistry;
use crate::fonts::{FontRegistry, DEFAULT_NATIVE_SIZE};

/// Table format revision this build accepts
pub const TABLE_VERSION: &str = "1.0";

/// A font tuning table file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontTableFile {
    /// Format revision, must be [`TABLE_VERSION`]
    pub version: String,
    /// One entry per face
    pub fonts: Vec<FontEntry>,
}

/// Tuning for one face
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontEntry {
    /// Face identifier, unique within the table
    pub id: String,
    /// Native size the face renders at, defaults to the rasterizer's 480px
    #[serde(default = "default_base_size")]
    pub base_size: u32,
    /// Multiplier applied before any device fitting
    pub scale_factor: f32,
    /// Size the face looks best at
    pub preferred_size: u32,
    /// Vertical correction for tall ascenders
    pub height_adjustment: f32,
    /// Fitting headroom reserved for overshooting strokes
    pub clipping_tolerance: f32,
}

fn default_base_size() -> u32 {
    DEFAULT_NATIVE_SIZE
}

/// A device table file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceTableFile {
    /// Format revision, must be [`TABLE_VERSION`]
    pub version: String,
    /// One entry per render target
    pub devices: Vec<DeviceEntry>,
}

/// One render target
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceEntry {
    /// Target name, unique within the table
    pub name: String,
    /// Container width in pixels
    pub width: u32,
    /// Container height in pixels
    pub height: u32,
    /// Padding applied on every edge
    pub padding: u32,
    /// Display scale relative to the phone baseline
    #[serde(default = "default_scaling_factor")]
    pub scaling_factor: f32,
}

fn default_scaling_factor() -> f32 {
    1.0
}

impl FontTableFile {
    fn validate(&self) -> Result<(), FitError> {
        if self.version != TABLE_VERSION {
            return Err(FitError::ProfileTable(format!(
                "unsupported version {} (expected {})",
                self.version, TABLE_VERSION
            )));
        }
        if self.fonts.is_empty() {
            return Err(FitError::ProfileTable("no fonts in table".to_owned()));
        }
        let mut seen = std::collections::BTreeSet::new();
        for entry in &self.fonts {
            if entry.id.is_empty() {
                return Err(FitError::ProfileTable("empty font id".to_owned()));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(FitError::ProfileTable(format!(
                    "duplicate font id {}",
                    entry.id
                )));
            }
            if entry.base_size == 0 || entry.preferred_size == 0 {
                return Err(FitError::ProfileTable(format!(
                    "font {} has a zero size",
                    entry.id
                )));
            }
            if entry.scale_factor <= 0.0 || entry.height_adjustment <= 0.0 {
                return Err(FitError::ProfileTable(format!(
                    "font {} has a non-positive factor",
                    entry.id
                )));
            }
            if !(0.0..1.0).contains(&entry.clipping_tolerance) {
                return Err(FitError::ProfileTable(format!(
                    "font {} clipping tolerance {} outside [0, 1)",
                    entry.id, entry.clipping_tolerance
                )));
            }
        }
        Ok(())
    }
}

impl DeviceTableFile {
    fn validate(&self) -> Result<(), FitError> {
        if self.version != TABLE_VERSION {
            return Err(FitError::ProfileTable(format!(
                "unsupported version {} (expected {})",
                self.version, TABLE_VERSION
            )));
        }
        if self.devices.is_empty() {
            return Err(FitError::ProfileTable("no devices in table".to_owned()));
        }
        let mut seen = std::collections::BTreeSet::new();
        for entry in &self.devices {
            if entry.name.is_empty() {
                return Err(FitError::ProfileTable("empty device name".to_owned()));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(FitError::ProfileTable(format!(
                    "duplicate device {}",
                    entry.name
                )));
            }
            if entry.scaling_factor <= 0.0 {
                return Err(FitError::ProfileTable(format!(
                    "device {} has a non-positive scaling factor",
                    entry.name
                )));
            }
        }
        Ok(())
    }
}

/// Parse a font table and build a registry from it
pub fn load_font_table(json: &str) -> Result<FontRegistry, FitError> {
    let table: FontTableFile =
        serde_json::from_str(json).map_err(|e| FitError::ProfileTable(e.to_string()))?;
    table.validate()?;
    let mut registry = FontRegistry::empty();
    for entry in table.fonts {
        registry.register(FontProfile {
            mobile_scale_factor: entry.scale_factor,
            preferred_font_size: entry.preferred_size,
            height_adjustment: entry.height_adjustment,
            clipping_tolerance: entry.clipping_tolerance,
            ..FontProfile::new(&entry.id, entry.base_size)
        });
    }
    log::debug!("loaded {} font profiles from table", registry.len());
    Ok(registry)
}

/// Parse a device table and build a registry from it
pub fn load_device_table(json: &str) -> Result<DeviceRegistry, FitError> {
    let table: DeviceTableFile =
        serde_json::from_str(json).map_err(|e| FitError::ProfileTable(e.to_string()))?;
    table.validate()?;
    let mut registry = DeviceRegistry::empty();
    for entry in table.devices {
        let name = entry.name.clone();
        registry
            .register(DeviceProfile {
                name: entry.name,
                container: Container::new(entry.width, entry.height, entry.padding),
                scaling_factor: entry.scaling_factor,
            })
            .map_err(|e| FitError::ProfileTable(format!("device {}: {}", name, e)))?;
    }
    log::debug!("loaded {} device profiles from table", registry.len());
    Ok(registry)
}
