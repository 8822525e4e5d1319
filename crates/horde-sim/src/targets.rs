//! The registry of living targets that enemies chase and hurt.
//!
//! The simulation treats the registry as an opaque collaborator: it takes
//! one position snapshot per system per tick and calls `damage_target`
//! from a single thread only.

use glam::Vec3;

pub trait TargetRegistry {
    /// Positions of every living target, in a stable order.
    fn living_target_positions(&self) -> Vec<Vec3>;

    /// Damage the target at `index` in the most recent snapshot order.
    /// Callers only pass indices taken from that snapshot.
    fn damage_target(&mut self, index: usize, amount: f32);
}

/// A registry with nothing in it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTargets;

impl TargetRegistry for NoTargets {
    fn living_target_positions(&self) -> Vec<Vec3> {
        Vec::new()
    }

    fn damage_target(&mut self, _index: usize, _amount: f32) {}
}
