//! Simplified radius-check collision.
//!
//! Any bullet within `radius` of an enemy kills it outright. Any living
//! target within `radius` of an enemy takes one contact-damage call per
//! enemy per tick.

use glam::Vec3;
use hecs::World;
use rayon::prelude::*;

use horde_core::components::{Bullet, Enemy, Health};
use horde_core::constants::ENEMY_CONTACT_DAMAGE;
use horde_core::types::Position;

use crate::targets::TargetRegistry;

/// Run both phases. Returns the number of damage calls made on targets.
pub fn run(world: &mut World, radius: f32, targets: &mut dyn TargetRegistry) -> u32 {
    let bullets: Vec<Vec3> = world
        .query::<&Position>()
        .with::<&Bullet>()
        .iter()
        .map(|(_entity, pos)| pos.0)
        .collect();
    kill_enemies_near_bullets(world, &bullets, radius);

    damage_targets_near_enemies(world, radius, targets)
}

/// Parallel over enemies; each worker writes only its own enemy's health.
pub fn kill_enemies_near_bullets(world: &mut World, bullets: &[Vec3], radius: f32) {
    if bullets.is_empty() {
        return;
    }

    let mut rows: Vec<_> = world
        .query_mut::<(&mut Health, &Position)>()
        .with::<&Enemy>()
        .into_iter()
        .collect();

    rows.par_iter_mut().for_each(|(_entity, (health, pos))| {
        if bullets.iter().any(|&bullet| in_contact(pos.0, bullet, radius)) {
            health.kill();
        }
    });
}

/// Sequential: the registry is an external collaborator and may not be
/// safe to call from several threads.
pub fn damage_targets_near_enemies(
    world: &World,
    radius: f32,
    targets: &mut dyn TargetRegistry,
) -> u32 {
    let living = targets.living_target_positions();
    if living.is_empty() {
        return 0;
    }

    let mut hits = 0;
    for (_entity, pos) in world.query::<&Position>().with::<&Enemy>().iter() {
        for (index, &target) in living.iter().enumerate() {
            if in_contact(pos.0, target, radius) {
                targets.damage_target(index, ENEMY_CONTACT_DAMAGE);
                hits += 1;
            }
        }
    }
    hits
}

fn in_contact(a: Vec3, b: Vec3, radius: f32) -> bool {
    a.distance(b) < radius
}
