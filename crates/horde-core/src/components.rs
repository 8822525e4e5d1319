//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in systems;
//! the only methods here are the health mutators every damage path shares.

use serde::{Deserialize, Serialize};

/// Health of anything that can take damage.
///
/// Mutators keep `current` within `[0, max]`. Direct field writes must not
/// exceed `max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

/// Scalar forward speed (m/s), applied along the entity's facing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub speed: f32,
}

/// Remaining time-to-live in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timed {
    pub life_time: f32,
}

/// Marks an entity as a projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet;

/// Marks an entity as a hostile pursuer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Marks an entity as a controllable actor's proxy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks an entity as advancing along its facing each tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoveForward;

impl Health {
    /// Full health at `max`.
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn kill(&mut self) {
        self.current = 0.0;
    }

    /// Subtract `amount`, never dropping below zero.
    pub fn apply_damage(&mut self, amount: f32) {
        self.current = (self.current - amount).max(0.0);
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }
}

impl Timed {
    /// Force expiry on the next lifetime pass.
    pub fn expire(&mut self) {
        self.life_time = 0.0;
    }
}
