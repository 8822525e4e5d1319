//! Entity spawn factories.
//!
//! Each factory builds the full component bundle for one entity kind.
//! Optional overrides are resolved against defaults before the entity
//! exists, so component data in the world is always concrete.

use hecs::{Entity, World};

use horde_core::components::*;
use horde_core::constants::*;
use horde_core::types::{Orientation, Position};

/// A projectile travelling along `orientation`.
#[derive(Debug, Clone, Copy)]
pub struct BulletSpec {
    pub position: Position,
    pub orientation: Orientation,
    pub speed: f32,
    pub life_time: f32,
}

/// A pursuer. `health` falls back to [`DEFAULT_ENEMY_HEALTH`].
#[derive(Debug, Clone, Copy)]
pub struct EnemySpec {
    pub position: Position,
    pub orientation: Orientation,
    pub speed: f32,
    pub health: Option<f32>,
}

/// A player proxy. Unset health values come from the player defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerSpec {
    pub position: Position,
    pub health: Option<f32>,
    pub max_health: Option<f32>,
}

/// Player health after overrides are applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPlayer {
    pub position: Position,
    pub health: Health,
}

impl BulletSpec {
    pub fn new(position: Position, orientation: Orientation) -> Self {
        Self {
            position,
            orientation,
            speed: DEFAULT_BULLET_SPEED,
            life_time: DEFAULT_BULLET_LIFE_TIME,
        }
    }
}

impl EnemySpec {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            orientation: Orientation::default(),
            speed: DEFAULT_ENEMY_SPEED,
            health: None,
        }
    }
}

impl PlayerSpec {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Fill unset values from the defaults. Current health never exceeds max.
    pub fn resolve(&self) -> ResolvedPlayer {
        let max = self.max_health.unwrap_or(DEFAULT_PLAYER_MAX_HEALTH);
        let current = self.health.unwrap_or(DEFAULT_PLAYER_HEALTH).min(max);
        ResolvedPlayer {
            position: self.position,
            health: Health { current, max },
        }
    }
}

pub fn spawn_bullet(world: &mut World, spec: BulletSpec) -> Entity {
    world.spawn((
        Bullet,
        MoveForward,
        spec.position,
        spec.orientation,
        Move { speed: spec.speed },
        Timed {
            life_time: spec.life_time,
        },
    ))
}

pub fn spawn_enemy(world: &mut World, spec: EnemySpec) -> Entity {
    let health = spec.health.unwrap_or(DEFAULT_ENEMY_HEALTH);
    world.spawn((
        Enemy,
        MoveForward,
        spec.position,
        spec.orientation,
        Health::new(health),
        Move { speed: spec.speed },
    ))
}

pub fn spawn_player(world: &mut World, player: ResolvedPlayer) -> Entity {
    world.spawn((
        Player,
        player.position,
        Orientation::default(),
        player.health,
    ))
}
