//! Simulation constants and tuning parameters.

/// Fixed simulation step rate (Hz).
pub const TICK_RATE: u32 = 50;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Collision ---

/// Default contact radius for the simplified collision backend (meters).
pub const DEFAULT_SIMPLE_RADIUS: f32 = 1.5;

/// Damage an enemy deals to a target on contact.
pub const ENEMY_CONTACT_DAMAGE: f32 = 1.0;

/// Sphere radii used by the built-in contact step.
pub const BULLET_CONTACT_RADIUS: f32 = 0.1;
pub const ENEMY_CONTACT_RADIUS: f32 = 0.5;
pub const PLAYER_CONTACT_RADIUS: f32 = 0.5;

// --- Enemies ---

pub const DEFAULT_ENEMY_HEALTH: f32 = 10.0;
pub const DEFAULT_ENEMY_SPEED: f32 = 1.0;

/// Seconds between enemy spawns.
pub const DEFAULT_SPAWN_DELAY: f32 = 1.0;

// --- Bullets ---

pub const DEFAULT_BULLET_SPEED: f32 = 20.0;
pub const DEFAULT_BULLET_LIFE_TIME: f32 = 2.0;

// --- Players ---

pub const DEFAULT_PLAYER_HEALTH: f32 = 10.0;
pub const DEFAULT_PLAYER_MAX_HEALTH: f32 = 10.0;

/// Invulnerability window after taking damage (seconds).
pub const DEFAULT_DAMAGE_DELAY: f32 = 0.7;

// --- Gun ---

/// Shots per minute.
pub const DEFAULT_FIRE_RATE: f32 = 60.0;

/// Distance in front of the muzzle where bullets appear.
pub const DEFAULT_SPAWN_OFFSET: f32 = 0.3;

pub const DEFAULT_SHOTGUN_PELLETS: u32 = 6;

/// Total fan angle of a shotgun blast (degrees).
pub const DEFAULT_SHOTGUN_SPREAD: f32 = 30.0;
