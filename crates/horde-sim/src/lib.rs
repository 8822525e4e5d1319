//! Simulation core for HORDE.
//!
//! Owns the hecs ECS world and advances it one fixed step at a time
//! through movement, pursuit, collision, and the two kill passes. All
//! structural removal goes through the deferred command buffer flushed
//! at the end of each tick.

pub mod command_buffer;
pub mod engine;
pub mod error;
pub mod physics;
pub mod roster;
pub mod spawn;
pub mod systems;
pub mod targets;

pub use horde_core as core;
pub use engine::{Simulation, TickContext, TickReport};
pub use error::SimError;
