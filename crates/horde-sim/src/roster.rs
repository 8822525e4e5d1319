//! Player roster: the target registry backing pursuit and contact damage.
//!
//! The roster owns each player's authoritative health. Player entities in
//! the world are proxies: the roster pushes positions and health into them
//! and folds any health they lost during a tick back through its own damage
//! path, so invulnerability windows apply to every source of damage.

use glam::Vec3;
use hecs::Entity;
use tracing::info;

use horde_core::components::Health;
use horde_core::constants::DEFAULT_DAMAGE_DELAY;
use horde_core::types::Position;

use crate::engine::Simulation;
use crate::error::{Result, SimError};
use crate::spawn::{self, PlayerSpec};
use crate::targets::TargetRegistry;

/// Stable handle to a registered player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(u32);

#[derive(Debug, Clone)]
pub struct RosterPlayer {
    pub id: PlayerId,
    pub position: Vec3,
    pub health: f32,
    pub max_health: f32,
    /// Ignores all damage while set.
    pub invincible: bool,
    /// Invulnerability window added after each hit (seconds).
    pub damage_delay: f32,
    /// Primary players stay registered after death.
    pub primary: bool,
    damage_cooldown: f32,
    dead: bool,
    entity: Option<Entity>,
}

#[derive(Debug, Default)]
pub struct PlayerRoster {
    players: Vec<RosterPlayer>,
    /// Living players in registration order; only rebuilt by `advance`,
    /// so indices handed out in a snapshot stay valid for the whole tick.
    living: Vec<PlayerId>,
    next_id: u32,
}

impl RosterPlayer {
    pub fn is_alive(&self) -> bool {
        !self.dead && self.health > 0.0
    }

    pub fn entity(&self) -> Option<Entity> {
        self.entity
    }

    pub fn damage_cooldown(&self) -> f32 {
        self.damage_cooldown
    }

    /// Apply `amount` unless invulnerable. Returns whether it landed.
    fn take_damage(&mut self, amount: f32) -> bool {
        if self.damage_cooldown > 0.0 || self.invincible {
            return false;
        }
        self.health = (self.health - amount).max(0.0);
        self.damage_cooldown += self.damage_delay;
        true
    }
}

impl PlayerRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a player without a world proxy.
    pub fn register(&mut self, spec: PlayerSpec, primary: bool) -> PlayerId {
        let resolved = spec.resolve();
        let id = PlayerId(self.next_id);
        self.next_id += 1;
        self.players.push(RosterPlayer {
            id,
            position: resolved.position.0,
            health: resolved.health.current,
            max_health: resolved.health.max,
            invincible: false,
            damage_delay: DEFAULT_DAMAGE_DELAY,
            primary,
            damage_cooldown: 0.0,
            dead: false,
            entity: None,
        });
        self.living.push(id);
        info!(?id, primary, "player registered");
        id
    }

    /// Register a player and spawn its proxy entity in `sim`.
    pub fn join(&mut self, sim: &mut Simulation, spec: PlayerSpec, primary: bool) -> PlayerId {
        let id = self.register(spec, primary);
        let entity = spawn::spawn_player(sim.world_mut(), spec.resolve());
        if let Some(player) = self.player_mut(id) {
            player.entity = Some(entity);
        }
        id
    }

    /// Unregister a player, queueing its proxy for destruction.
    pub fn leave(&mut self, sim: &mut Simulation, id: PlayerId) -> Option<RosterPlayer> {
        let index = self.players.iter().position(|p| p.id == id)?;
        let player = self.players.remove(index);
        self.living.retain(|&living| living != id);
        if let Some(entity) = player.entity {
            sim.queue_destroy(entity);
        }
        info!(?id, "player left");
        Some(player)
    }

    pub fn player(&self, id: PlayerId) -> Option<&RosterPlayer> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut RosterPlayer> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn players(&self) -> &[RosterPlayer] {
        &self.players
    }

    pub fn living(&self) -> &[PlayerId] {
        &self.living
    }

    pub fn set_position(&mut self, id: PlayerId, position: Vec3) {
        if let Some(player) = self.player_mut(id) {
            player.position = position;
        }
    }

    /// Damage a player through the invulnerability rules.
    pub fn damage(&mut self, id: PlayerId, amount: f32) -> bool {
        self.player_mut(id)
            .is_some_and(|player| player.take_damage(amount))
    }

    pub fn heal(&mut self, id: PlayerId, amount: f32) {
        if let Some(player) = self.player_mut(id) {
            player.health = (player.health + amount).min(player.max_health);
        }
    }

    /// Whether any registered player is still alive.
    pub fn any_alive(&self) -> bool {
        self.players.iter().any(RosterPlayer::is_alive)
    }

    /// Push roster state into proxy entities, pulling in any health they
    /// lost since the last sync. Proxies that vanished are unlinked.
    pub fn sync_entities(&mut self, sim: &mut Simulation) -> Result<()> {
        let world = sim.world_mut();
        for player in &mut self.players {
            let Some(entity) = player.entity else {
                continue;
            };
            if !world.contains(entity) {
                info!(id = ?player.id, ?entity, "player proxy gone, unlinking");
                player.entity = None;
                continue;
            }

            let lost = {
                let health = world
                    .get::<&Health>(entity)
                    .map_err(|e| SimError::from_component(e, entity, "Health", "syncing player"))?;
                player.health - health.current
            };
            if lost > 0.0 {
                player.take_damage(lost);
            }

            let mut health = world
                .get::<&mut Health>(entity)
                .map_err(|e| SimError::from_component(e, entity, "Health", "syncing player"))?;
            *health = Health {
                current: player.health.clamp(0.0, player.max_health),
                max: player.max_health,
            };
            drop(health);

            let mut position = world
                .get::<&mut Position>(entity)
                .map_err(|e| SimError::from_component(e, entity, "Position", "syncing player"))?;
            position.0 = player.position;
        }
        Ok(())
    }

    /// Per-tick lifecycle: decay invulnerability, retire the dead.
    ///
    /// Dead primary players stay registered but leave the living list.
    /// Dead non-primary players are removed and their proxies destroyed.
    pub fn advance(&mut self, sim: &mut Simulation, dt: f32) {
        for player in &mut self.players {
            player.damage_cooldown = (player.damage_cooldown - dt).max(0.0);
            if !player.dead && player.health <= 0.0 {
                player.dead = true;
                info!(id = ?player.id, primary = player.primary, "player died");
            }
        }

        let mut retired = Vec::new();
        self.players.retain(|player| {
            let keep = player.primary || !player.dead;
            if !keep {
                retired.push(player.entity);
            }
            keep
        });
        for entity in retired.into_iter().flatten() {
            sim.queue_destroy(entity);
        }

        self.living = self
            .players
            .iter()
            .filter(|p| p.is_alive())
            .map(|p| p.id)
            .collect();
    }
}

impl TargetRegistry for PlayerRoster {
    fn living_target_positions(&self) -> Vec<Vec3> {
        self.living
            .iter()
            .filter_map(|&id| self.player(id))
            .map(|p| p.position)
            .collect()
    }

    fn damage_target(&mut self, index: usize, amount: f32) {
        if let Some(&id) = self.living.get(index) {
            self.damage(id, amount);
        }
    }
}
