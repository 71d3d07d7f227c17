// this_file: crates/sigfit-profiles/src/devices.rs
//! The built-in device catalogue
//!
//! Three render targets cover the production surface: a phone lockup, a
//! tablet card, and the desktop hero banner. Registration order is
//! preserved so reports list devices the way operators declared them.

use sigfit_core::error::FitError;
use sigfit_core::profile::DeviceProfile;
use sigfit_core::types::{Container, SafeZone};

/// Registry of render targets, in registration order
#[derive(Debug, Clone)]
pub struct DeviceRegistry {
    profiles: Vec<DeviceProfile>,
}

impl DeviceRegistry {
    /// Start with nothing registered
    pub fn empty() -> Self {
        Self {
            profiles: Vec::new(),
        }
    }

    /// The three production render targets
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for profile in [
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
        ] {
            // builtin containers always leave a safe zone
            let _ = registry.register(profile);
        }
        registry
    }

    /// Add a render target, replacing any existing one with the same name
    ///
    /// Rejects containers whose padding swallows the whole area, so every
    /// registered device is guaranteed fittable.
    pub fn register(&mut self, profile: DeviceProfile) -> Result<(), FitError> {
        SafeZone::from_container(&profile.container)?;
        match self.profiles.iter_mut().find(|p| p.name == profile.name) {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
        Ok(())
    }

    /// Look up a render target by name
    pub fn get(&self, name: &str) -> Result<&DeviceProfile, FitError> {
        self.profiles
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| FitError::UnknownDevice(name.to_owned()))
    }

    /// All registered targets, in registration order
    pub fn profiles(&self) -> &[DeviceProfile] {
        &self.profiles
    }

    /// Registered target names, in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_targets_in_declaration_order() {
        let registry = DeviceRegistry::builtin();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, ["mobile", "tablet", "desktop"]);
    }

    #[test]
    fn lookup_by_name() {
        let registry = DeviceRegistry::builtin();
        let tablet = registry.get("tablet").unwrap();
        assert_eq!(tablet.container.width, 500);
        assert!((tablet.scaling_factor - 1.3).abs() < f32::EPSILON);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let registry = DeviceRegistry::builtin();
        let err = registry.get("smartwatch").unwrap_err();
        assert!(matches!(err, FitError::UnknownDevice(name) if name == "smartwatch"));
    }

    #[test]
    fn register_replaces_same_name_in_place() {
        let mut registry = DeviceRegistry::builtin();
        registry
            .register(DeviceProfile {
                name: "tablet".to_owned(),
                container: Container::new(600, 250, 12),
                scaling_factor: 1.4,
            })
            .unwrap();
        assert_eq!(registry.len(), 3);
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, ["mobile", "tablet", "desktop"]);
        assert_eq!(registry.get("tablet").unwrap().container.width, 600);
    }

    #[test]
    fn register_rejects_padding_eating_the_container() {
        let mut registry = DeviceRegistry::empty();
        let err = registry
            .register(DeviceProfile {
                name: "sliver".to_owned(),
                container: Container::new(40, 40, 20),
                scaling_factor: 1.0,
            })
            .unwrap_err();
        assert!(matches!(err, FitError::InvalidContainer { .. }));
        assert!(registry.is_empty());
    }
}
