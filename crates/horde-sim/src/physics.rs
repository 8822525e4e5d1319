//! Contact events and the physics steps that produce them.

use glam::Vec3;
use hecs::{Entity, World};

use horde_core::components::{Bullet, Enemy, Player};
use horde_core::constants::{BULLET_CONTACT_RADIUS, ENEMY_CONTACT_RADIUS, PLAYER_CONTACT_RADIUS};
use horde_core::types::Position;

/// Two entities reported touching during a physics step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
}

impl CollisionEvent {
    pub fn new(a: Entity, b: Entity) -> Self {
        Self { a, b }
    }
}

/// Supplies the contact events for one tick. Only called when the physics
/// backend is active. The returned sequence must be finite.
pub trait PhysicsStep {
    fn step(&mut self, world: &World, dt: f32) -> Vec<CollisionEvent>;
}

/// Scripted events: delivered on the next step, then gone.
impl PhysicsStep for Vec<CollisionEvent> {
    fn step(&mut self, _world: &World, _dt: f32) -> Vec<CollisionEvent> {
        std::mem::take(self)
    }
}

/// Brute-force sphere overlap between bullets, enemies, and players.
///
/// Like most engines it reports each overlapping pair once from each side,
/// so resolution sees both A↔B and B↔A.
#[derive(Debug, Clone)]
pub struct SphereContacts {
    pub bullet_radius: f32,
    pub enemy_radius: f32,
    pub player_radius: f32,
}

impl Default for SphereContacts {
    fn default() -> Self {
        Self {
            bullet_radius: BULLET_CONTACT_RADIUS,
            enemy_radius: ENEMY_CONTACT_RADIUS,
            player_radius: PLAYER_CONTACT_RADIUS,
        }
    }
}

impl SphereContacts {
    fn bodies(&self, world: &World) -> Vec<(Entity, Vec3, f32)> {
        let mut bodies = Vec::new();
        for (entity, pos) in world.query::<&Position>().with::<&Bullet>().iter() {
            bodies.push((entity, pos.0, self.bullet_radius));
        }
        for (entity, pos) in world.query::<&Position>().with::<&Enemy>().iter() {
            bodies.push((entity, pos.0, self.enemy_radius));
        }
        for (entity, pos) in world.query::<&Position>().with::<&Player>().iter() {
            bodies.push((entity, pos.0, self.player_radius));
        }
        bodies
    }
}

impl PhysicsStep for SphereContacts {
    fn step(&mut self, world: &World, _dt: f32) -> Vec<CollisionEvent> {
        let bodies = self.bodies(world);
        let mut events = Vec::new();
        for (i, &(a, pos_a, radius_a)) in bodies.iter().enumerate() {
            for &(b, pos_b, radius_b) in &bodies[i + 1..] {
                let reach = radius_a + radius_b;
                if pos_a.distance_squared(pos_b) < reach * reach {
                    events.push(CollisionEvent::new(a, b));
                    events.push(CollisionEvent::new(b, a));
                }
            }
        }
        events
    }
}
