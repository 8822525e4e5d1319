//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World`. Per-entity work runs on
//! rayon; anything read across entities is copied into a snapshot before
//! the parallel phase so each worker only writes its own row.

pub mod collision;
pub mod health_kill;
pub mod movement;
pub mod pursuit;
pub mod timed_kill;
