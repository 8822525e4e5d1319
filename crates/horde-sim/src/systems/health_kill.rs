//! Health-based destruction: queue every non-player with depleted health.
//!
//! Player entities are skipped; their removal belongs to the roster, which
//! keeps them registered until its own lifecycle runs.

use hecs::World;
use rayon::prelude::*;

use horde_core::components::{Health, Player};
use horde_core::enums::DestroyReason;

use crate::command_buffer::CommandWriter;

pub fn run(world: &World, commands: CommandWriter<'_>) {
    let mut query = world.query::<&Health>().without::<&Player>();
    let rows: Vec<_> = query.iter().collect();

    rows.par_iter().for_each(|(entity, health)| {
        if health.is_depleted() {
            commands.destroy(*entity, DestroyReason::Depleted);
        }
    });
}
