//! Collision stage. Exactly one backend runs per tick, chosen by config.
//!
//! - `simple`: radius check against bullet and target snapshots.
//! - `events`: resolution of contact events reported by a physics step.

pub mod events;
pub mod simple;

use hecs::{Entity, World};

use horde_core::components::{Bullet, Enemy, MoveForward, Player};
use horde_core::tags::TagSet;

use crate::error::{Result, SimError};

/// What the collision stage did this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionStats {
    /// Entity pairs that matched a contact rule (physics backend).
    pub contacts_resolved: usize,
    /// Damage calls made into the target registry (simplified backend).
    pub targets_hit: u32,
}

/// Pack the marker components `entity` carries into a [`TagSet`].
pub fn classify(world: &World, entity: Entity) -> Result<TagSet> {
    let entity_ref = world.entity(entity).map_err(|_| SimError::StaleEntity {
        entity,
        context: "classifying contact",
    })?;

    let mut tags = TagSet::EMPTY;
    if entity_ref.has::<Bullet>() {
        tags.insert(TagSet::BULLET);
    }
    if entity_ref.has::<Enemy>() {
        tags.insert(TagSet::ENEMY);
    }
    if entity_ref.has::<Player>() {
        tags.insert(TagSet::PLAYER);
    }
    if entity_ref.has::<MoveForward>() {
        tags.insert(TagSet::MOVE_FORWARD);
    }
    Ok(tags)
}
