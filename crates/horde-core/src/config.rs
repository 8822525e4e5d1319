//! Simulation configuration, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::DEFAULT_SIMPLE_RADIUS;
use crate::enums::CollisionBackend;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Collision stage settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Resolve contacts from physics events instead of the radius check.
    pub use_physics: bool,
    /// Contact radius for the simplified backend.
    pub simple_radius: f32,
}

/// Configuration for a simulation instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub collision: CollisionConfig,
    /// Resolve each unordered entity pair at most once per tick.
    pub dedupe_contacts: bool,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            use_physics: false,
            simple_radius: DEFAULT_SIMPLE_RADIUS,
        }
    }
}

impl CollisionConfig {
    pub fn backend(&self) -> CollisionBackend {
        if self.use_physics {
            CollisionBackend::Physics
        } else {
            CollisionBackend::Simplified
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            collision: CollisionConfig::default(),
            dedupe_contacts: true,
        }
    }
}

impl SimConfig {
    /// Parse a config from TOML text. Missing keys fall back to defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Shorthand for a physics-backed configuration.
    pub fn physics() -> Self {
        Self {
            collision: CollisionConfig {
                use_physics: true,
                ..CollisionConfig::default()
            },
            ..Self::default()
        }
    }
}
