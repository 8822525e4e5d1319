//! Enumerations used across the simulation.

use serde::{Deserialize, Serialize};

/// Which collision implementation runs during the collision stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionBackend {
    /// Radius check between snapshots of positions.
    Simplified,
    /// Resolution of contact events reported by a physics step.
    Physics,
}

/// Why an entity was queued for destruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DestroyReason {
    /// Health reached zero.
    Depleted,
    /// Lifetime ran out.
    Expired,
    /// Requested by a collaborator outside the pipeline.
    External,
}
