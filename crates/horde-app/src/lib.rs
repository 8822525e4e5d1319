//! HORDE tick driver.
//!
//! Everything the simulation core treats as an outside collaborator lives
//! here: the fixed-step loop, enemy spawner and gun cadence, the player
//! roster wiring, and a headless runner.

pub mod config;
pub mod driver;
pub mod game_loop;
pub mod spawner;
pub mod state;

pub use horde_core as core;
pub use horde_sim as sim;

#[cfg(test)]
mod tests;
