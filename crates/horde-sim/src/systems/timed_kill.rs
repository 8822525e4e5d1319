//! Lifetime countdown: decrement `Timed` and queue anything that ran out.
//!
//! Runs after collision so a bullet expired on impact is removed in the
//! tick it hit.

use hecs::World;
use rayon::prelude::*;

use horde_core::components::Timed;
use horde_core::enums::DestroyReason;

use crate::command_buffer::CommandWriter;

pub fn run(world: &mut World, dt: f32, commands: CommandWriter<'_>) {
    let mut rows: Vec<_> = world.query_mut::<&mut Timed>().into_iter().collect();

    rows.par_iter_mut().for_each(|(entity, timed)| {
        timed.life_time -= dt;
        if timed.life_time <= 0.0 {
            commands.destroy(*entity, DestroyReason::Expired);
        }
    });
}
