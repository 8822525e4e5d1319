//! Forward movement: position += facing * speed * dt.

use hecs::World;
use rayon::prelude::*;

use horde_core::components::{Move, MoveForward};
use horde_core::types::{Orientation, Position};

/// Advance every MoveForward entity along its facing.
pub fn run(world: &mut World, dt: f32) {
    let mut rows: Vec<_> = world
        .query_mut::<(&mut Position, &Orientation, &Move)>()
        .with::<&MoveForward>()
        .into_iter()
        .collect();

    rows.par_iter_mut().for_each(|(_entity, (pos, orientation, movement))| {
        pos.0 += step(*orientation, movement.speed, dt);
    });
}

/// Displacement for one tick: `rotate(orientation, (0, 0, speed)) * dt`.
pub fn step(orientation: &Orientation, speed: f32, dt: f32) -> glam::Vec3 {
    orientation.0 * glam::Vec3::new(0.0, 0.0, speed) * dt
}
