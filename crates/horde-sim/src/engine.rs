//! Simulation engine: owns the ECS world and runs the tick pipeline.
//!
//! Per tick: movement → pursuit → collision → health kill → timed kill →
//! command-buffer flush. Systems run strictly in that order; each may fan
//! out across rayon workers internally. Collaborators the pipeline needs
//! (target registry, physics step) arrive through [`TickContext`], owned by
//! the tick driver.

use hecs::{Entity, World};
use tracing::debug;

use horde_core::config::SimConfig;
use horde_core::enums::{CollisionBackend, DestroyReason};
use horde_core::types::SimTime;

use crate::command_buffer::{CommandBuffer, Destroyed};
use crate::error::Result;
use crate::physics::PhysicsStep;
use crate::systems;
use crate::systems::collision::CollisionStats;
use crate::targets::TargetRegistry;

/// Collaborators for one call to [`Simulation::advance`].
pub struct TickContext<'a> {
    pub targets: &'a mut dyn TargetRegistry,
    /// Consulted only when the physics backend is configured.
    pub physics: &'a mut dyn PhysicsStep,
}

/// Outcome of one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Tick number just completed.
    pub tick: u64,
    /// Entities removed at the tick-end barrier, in flush order.
    pub destroyed: Vec<Destroyed>,
    pub collisions: CollisionStats,
}

/// The simulation engine. Owns the ECS world and all per-tick state.
pub struct Simulation {
    world: World,
    config: SimConfig,
    time: SimTime,
    commands: CommandBuffer,
}

impl<'a> TickContext<'a> {
    pub fn new(targets: &'a mut dyn TargetRegistry, physics: &'a mut dyn PhysicsStep) -> Self {
        Self { targets, physics }
    }
}

impl TickReport {
    /// Whether `entity` was removed this tick.
    pub fn destroyed_entity(&self, entity: Entity) -> bool {
        self.destroyed.iter().any(|d| d.entity == entity)
    }
}

impl Simulation {
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            config,
            time: SimTime::default(),
            commands: CommandBuffer::new(),
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for spawning and external synchronization
    /// between ticks. Do not despawn through this; use [`Self::queue_destroy`].
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Request removal of `entity` at the next tick-end barrier.
    pub fn queue_destroy(&mut self, entity: Entity) {
        self.commands.destroy(entity, DestroyReason::External);
    }

    /// Run one fixed step of `dt` seconds.
    ///
    /// An error means an internal-consistency fault; the tick is abandoned
    /// and the driver decides what to do with the simulation.
    pub fn advance(&mut self, dt: f32, ctx: &mut TickContext<'_>) -> Result<TickReport> {
        systems::movement::run(&mut self.world, dt);

        let targets = ctx.targets.living_target_positions();
        systems::pursuit::run(&mut self.world, &targets);

        let collisions = self.run_collision(dt, ctx)?;

        systems::health_kill::run(&self.world, self.commands.writer());
        systems::timed_kill::run(&mut self.world, dt, self.commands.writer());

        let destroyed = self.commands.flush(&mut self.world)?;

        self.time.advance(dt);
        debug!(
            tick = self.time.tick,
            destroyed = destroyed.len(),
            contacts = collisions.contacts_resolved,
            target_hits = collisions.targets_hit,
            "tick complete"
        );

        Ok(TickReport {
            tick: self.time.tick,
            destroyed,
            collisions,
        })
    }

    fn run_collision(&mut self, dt: f32, ctx: &mut TickContext<'_>) -> Result<CollisionStats> {
        let mut stats = CollisionStats::default();
        match self.config.collision.backend() {
            CollisionBackend::Simplified => {
                stats.targets_hit = systems::collision::simple::run(
                    &mut self.world,
                    self.config.collision.simple_radius,
                    ctx.targets,
                );
            }
            CollisionBackend::Physics => {
                let events = ctx.physics.step(&self.world, dt);
                stats.contacts_resolved = systems::collision::events::run(
                    &mut self.world,
                    &events,
                    self.config.dedupe_contacts,
                )?;
            }
        }
        Ok(stats)
    }
}
