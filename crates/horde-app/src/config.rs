//! Driver configuration: cadence of spawners and guns plus the sim config.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use horde_core::config::{ConfigError, SimConfig};
use horde_core::constants::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    pub enabled: bool,
    /// Seconds between spawns.
    pub spawn_delay: f32,
    pub position: Vec3,
    /// Spawns land uniformly within this distance of `position` on the ground plane.
    pub jitter: f32,
    pub enemy_speed: f32,
    pub enemy_health: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GunConfig {
    pub enabled: bool,
    /// Shots per minute.
    pub fire_rate: f32,
    pub shotgun: bool,
    pub pellets: u32,
    /// Total fan angle in degrees.
    pub spread: f32,
    pub spawn_offset: f32,
    pub bullet_speed: f32,
    pub bullet_life_time: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    pub tick_rate: u32,
    /// Seed for spawn jitter. Same seed, same spawn positions.
    pub seed: u64,
    pub player_position: Vec3,
    pub spawner: SpawnerConfig,
    pub gun: GunConfig,
    pub sim: SimConfig,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            spawn_delay: DEFAULT_SPAWN_DELAY,
            position: Vec3::new(0.0, 0.0, 20.0),
            jitter: 5.0,
            enemy_speed: DEFAULT_ENEMY_SPEED,
            enemy_health: None,
        }
    }
}

impl Default for GunConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            fire_rate: DEFAULT_FIRE_RATE,
            shotgun: false,
            pellets: DEFAULT_SHOTGUN_PELLETS,
            spread: DEFAULT_SHOTGUN_SPREAD,
            spawn_offset: DEFAULT_SPAWN_OFFSET,
            bullet_speed: DEFAULT_BULLET_SPEED,
            bullet_life_time: DEFAULT_BULLET_LIFE_TIME,
        }
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,
            seed: 42,
            player_position: Vec3::ZERO,
            spawner: SpawnerConfig::default(),
            gun: GunConfig::default(),
            sim: SimConfig::default(),
        }
    }
}

impl DriverConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Seconds per tick.
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }
}
