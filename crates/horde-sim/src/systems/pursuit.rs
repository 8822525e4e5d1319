//! Pursuit: turn every enemy to face the nearest living target.

use glam::Vec3;
use hecs::World;
use rayon::prelude::*;

use horde_core::components::Enemy;
use horde_core::types::{Orientation, Position};

/// Rotate enemies toward the nearest position in `targets`.
///
/// `targets` is the tick's snapshot and stays immutable while workers run.
/// With no targets every orientation is left untouched.
pub fn run(world: &mut World, targets: &[Vec3]) {
    if targets.is_empty() {
        return;
    }

    let mut rows: Vec<_> = world
        .query_mut::<(&mut Orientation, &Position)>()
        .with::<&Enemy>()
        .into_iter()
        .collect();

    rows.par_iter_mut().for_each(|(_entity, (orientation, pos))| {
        let Some(nearest) = nearest_target(pos.0, targets) else {
            return;
        };
        if let Some(facing) = Orientation::facing(pos.horizontal_direction_to(nearest)) {
            **orientation = facing;
        }
    });
}

/// Nearest target by straight-line distance. Ties keep the first seen,
/// so the result depends on snapshot order.
pub fn nearest_target(from: Vec3, targets: &[Vec3]) -> Option<Vec3> {
    let mut nearest = None;
    let mut nearest_distance = f32::MAX;
    for &target in targets {
        let distance = from.distance(target);
        if distance < nearest_distance {
            nearest_distance = distance;
            nearest = Some(target);
        }
    }
    nearest
}
