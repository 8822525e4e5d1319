//! Internal-consistency faults raised by the simulation.
//!
//! Empty target lists, missing contacts and quiet ticks are not errors.
//! These variants mean the deferred-destruction discipline was bypassed
//! somewhere and the tick cannot be trusted.

use hecs::Entity;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// A handle referred to an entity that is no longer in the store.
    #[error("entity {entity:?} no longer exists ({context})")]
    StaleEntity {
        entity: Entity,
        context: &'static str,
    },

    /// An entity lacks a component its tags promise.
    #[error("entity {entity:?} is missing component {component}")]
    MissingComponent {
        entity: Entity,
        component: &'static str,
    },

    /// A queued destroy named an entity the store never held or already removed.
    #[error("destroy requested for unknown entity {0:?}")]
    UnknownDestroyTarget(Entity),
}

/// Result type alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    /// Map a hecs component lookup failure onto the matching fault.
    pub(crate) fn from_component(
        err: hecs::ComponentError,
        entity: Entity,
        component: &'static str,
        context: &'static str,
    ) -> Self {
        match err {
            hecs::ComponentError::NoSuchEntity => SimError::StaleEntity { entity, context },
            hecs::ComponentError::MissingComponent(_) => {
                SimError::MissingComponent { entity, component }
            }
        }
    }
}
