//! Fundamental geometric and simulation types.
//!
//! Axes follow the play-area convention: x/z span the ground plane,
//! y is up. Entities face along their local +z axis.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// World-space position (meters).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// World-space facing. Identity faces +z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation(pub Quat);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Straight-line distance to another position.
    pub fn distance_to(&self, other: &Position) -> f32 {
        self.0.distance(other.0)
    }

    /// Direction to `target` projected onto the ground plane (y dropped).
    /// Not normalized; zero when the two positions share x and z.
    pub fn horizontal_direction_to(&self, target: Vec3) -> Vec3 {
        let mut direction = target - self.0;
        direction.y = 0.0;
        direction
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self(Quat::IDENTITY)
    }
}

impl Orientation {
    /// Facing that looks along a horizontal direction.
    /// Returns `None` for a zero-length direction.
    pub fn facing(direction: Vec3) -> Option<Self> {
        let flat = Vec3::new(direction.x, 0.0, direction.z);
        if flat.length_squared() <= f32::EPSILON {
            return None;
        }
        Some(Self(Quat::from_rotation_y(flat.x.atan2(flat.z))))
    }

    /// Yaw angle in degrees (rotation about +y).
    pub fn from_yaw_degrees(degrees: f32) -> Self {
        Self(Quat::from_rotation_y(degrees.to_radians()))
    }

    /// Unit vector this orientation faces.
    pub fn forward(&self) -> Vec3 {
        self.0 * Vec3::Z
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt as f64;
    }
}
