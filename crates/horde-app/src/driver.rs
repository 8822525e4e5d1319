//! Fixed-step driver around one [`Simulation`].
//!
//! Owns the outside collaborators the core expects: the player roster,
//! the physics step, the enemy spawner and the gun. Each [`Driver::step`]
//! is one full tick of the game.

use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use horde_core::components::{Bullet, Enemy};
use horde_core::types::Position;
use horde_sim::physics::SphereContacts;
use horde_sim::roster::{PlayerId, PlayerRoster};
use horde_sim::spawn::{self, PlayerSpec};
use horde_sim::systems::pursuit;
use horde_sim::{SimError, Simulation, TickContext, TickReport};

use crate::config::DriverConfig;
use crate::spawner::{EnemySpawner, Gun};
use crate::state::TickSummary;

pub struct Driver {
    sim: Simulation,
    roster: PlayerRoster,
    physics: SphereContacts,
    spawner: EnemySpawner,
    gun: Gun,
    rng: ChaCha8Rng,
    dt: f32,
    primary: PlayerId,
    paused: bool,
}

impl Driver {
    /// Build a driver with one primary player at the configured position.
    pub fn new(config: DriverConfig) -> Self {
        let mut sim = Simulation::new(config.sim.clone());
        let mut roster = PlayerRoster::new();
        let primary = roster.join(
            &mut sim,
            PlayerSpec::new(Position(config.player_position)),
            true,
        );

        let mut gun = Gun::new(config.gun.clone());
        gun.muzzle = config.player_position;
        gun.start_firing();

        info!(
            backend = ?config.sim.collision.backend(),
            tick_rate = config.tick_rate,
            seed = config.seed,
            "driver ready"
        );

        Self {
            sim,
            roster,
            physics: SphereContacts::default(),
            spawner: EnemySpawner::new(config.spawner.clone()),
            gun,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            dt: config.dt(),
            primary,
            paused: false,
        }
    }

    pub fn sim(&self) -> &Simulation {
        &self.sim
    }

    pub fn sim_mut(&mut self) -> &mut Simulation {
        &mut self.sim
    }

    pub fn roster(&self) -> &PlayerRoster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut PlayerRoster {
        &mut self.roster
    }

    pub fn gun(&self) -> &Gun {
        &self.gun
    }

    pub fn gun_mut(&mut self) -> &mut Gun {
        &mut self.gun
    }

    pub fn spawner_mut(&mut self) -> &mut EnemySpawner {
        &mut self.spawner
    }

    pub fn primary(&self) -> PlayerId {
        self.primary
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Join an extra, non-primary player.
    pub fn add_player(&mut self, spec: PlayerSpec) -> PlayerId {
        self.roster.join(&mut self.sim, spec, false)
    }

    /// Run one tick. While paused nothing advances and the current
    /// state is summarized with nothing destroyed.
    pub fn step(&mut self) -> Result<TickSummary, SimError> {
        if self.paused {
            return Ok(self.summarize(&TickReport {
                tick: self.sim.time().tick,
                ..TickReport::default()
            }));
        }

        let dt = self.dt;

        for spec in self.spawner.update(dt, &mut self.rng) {
            spawn::spawn_enemy(self.sim.world_mut(), spec);
        }

        self.aim_gun();
        for spec in self.gun.update(dt) {
            spawn::spawn_bullet(self.sim.world_mut(), spec);
        }

        self.roster.sync_entities(&mut self.sim)?;
        let report = {
            let mut ctx = TickContext::new(&mut self.roster, &mut self.physics);
            self.sim.advance(dt, &mut ctx)?
        };
        // Fold contact damage the proxies took during the tick.
        self.roster.sync_entities(&mut self.sim)?;
        self.roster.advance(&mut self.sim, dt);

        let summary = self.summarize(&report);
        debug!(?summary, "driver step");
        Ok(summary)
    }

    /// Point the gun from the primary player at the nearest enemy.
    /// A dead primary stops firing for good.
    fn aim_gun(&mut self) {
        let Some(player) = self.roster.player(self.primary) else {
            self.gun.stop_firing();
            return;
        };
        if !player.is_alive() {
            if self.gun.is_firing() {
                info!("primary player down, gun stops");
            }
            self.gun.stop_firing();
            return;
        }

        self.gun.muzzle = player.position;
        let enemies: Vec<Vec3> = self
            .sim
            .world()
            .query::<&Position>()
            .with::<&Enemy>()
            .iter()
            .map(|(_, pos)| pos.0)
            .collect();
        if let Some(target) = pursuit::nearest_target(player.position, &enemies) {
            self.gun.aim_at(target);
        }
    }

    fn summarize(&self, report: &TickReport) -> TickSummary {
        let world = self.sim.world();
        let enemies = world.query::<&Enemy>().iter().count();
        let bullets = world.query::<&Bullet>().iter().count();
        let time = self.sim.time();
        TickSummary {
            tick: report.tick,
            elapsed_secs: time.elapsed_secs,
            enemies: enemies as u32,
            bullets: bullets as u32,
            destroyed: report.destroyed.len() as u32,
            contacts: report.collisions.contacts_resolved as u32,
            target_hits: report.collisions.targets_hit,
            living_players: self.roster.living().len() as u32,
            player_health: self.roster.player(self.primary).map(|p| p.health),
        }
    }
}
