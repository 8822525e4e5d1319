//! Spawn cadence: the enemy spawner and the player's gun.
//!
//! Both accumulate a cooldown and emit spawn specs when it runs out,
//! catching up with several spawns in one tick if the step was long.
//! They never touch the world; the driver spawns what they return.

use glam::Vec3;
use rand::Rng;

use horde_core::types::{Orientation, Position};
use horde_sim::spawn::{BulletSpec, EnemySpec};

use crate::config::{GunConfig, SpawnerConfig};

/// Most spawns a single update may emit; any backlog past it is dropped.
pub const MAX_CATCH_UP: usize = 64;

/// Shortest interval between spawns or shots, in seconds.
pub const MIN_INTERVAL: f32 = 1e-3;

#[derive(Debug, Clone)]
pub struct EnemySpawner {
    config: SpawnerConfig,
    cooldown: f32,
}

#[derive(Debug, Clone)]
pub struct Gun {
    config: GunConfig,
    cooldown: f32,
    firing: bool,
    /// Where bullets leave from.
    pub muzzle: Vec3,
    pub facing: Orientation,
}

impl EnemySpawner {
    pub fn new(config: SpawnerConfig) -> Self {
        Self {
            config,
            cooldown: 0.0,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    /// Advance the cooldown by `dt` and return the enemies due this tick.
    pub fn update<R: Rng>(&mut self, dt: f32, rng: &mut R) -> Vec<EnemySpec> {
        let mut due = Vec::new();
        if !self.config.enabled || self.config.spawn_delay <= 0.0 {
            return due;
        }

        self.cooldown -= dt;
        for _ in 0..drain_cooldown(&mut self.cooldown, self.config.spawn_delay) {
            due.push(self.enemy_at(self.jittered_position(rng)));
        }
        due
    }

    fn jittered_position<R: Rng>(&self, rng: &mut R) -> Vec3 {
        if self.config.jitter <= 0.0 {
            return self.config.position;
        }
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let distance = rng.gen_range(0.0..self.config.jitter);
        self.config.position + Vec3::new(angle.sin(), 0.0, angle.cos()) * distance
    }

    fn enemy_at(&self, position: Vec3) -> EnemySpec {
        EnemySpec {
            speed: self.config.enemy_speed,
            health: self.config.enemy_health,
            ..EnemySpec::new(Position(position))
        }
    }
}

impl Gun {
    pub fn new(config: GunConfig) -> Self {
        Self {
            config,
            cooldown: 0.0,
            firing: false,
            muzzle: Vec3::ZERO,
            facing: Orientation::default(),
        }
    }

    pub fn config(&self) -> &GunConfig {
        &self.config
    }

    pub fn is_firing(&self) -> bool {
        self.firing
    }

    /// Begin firing. A cooldown left over from earlier shots still applies,
    /// but never more than one shot's worth of credit.
    pub fn start_firing(&mut self) {
        self.firing = true;
        self.cooldown = self.cooldown.max(0.0);
    }

    pub fn stop_firing(&mut self) {
        self.firing = false;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    pub fn toggle_shotgun(&mut self) {
        self.config.shotgun = !self.config.shotgun;
    }

    /// Turn toward `target` on the ground plane.
    pub fn aim_at(&mut self, target: Vec3) {
        let direction = Position(self.muzzle).horizontal_direction_to(target);
        if let Some(facing) = Orientation::facing(direction) {
            self.facing = facing;
        }
    }

    /// Change the fire rate by `magnitude * 10` shots per minute, minimum 1.
    pub fn adjust_fire_rate(&mut self, magnitude: f32) {
        self.config.fire_rate = (self.config.fire_rate + magnitude * 10.0).max(1.0);
    }

    /// Change the shotgun pellet count, minimum 1. Wheel input arrives in
    /// steps of 120 per notch.
    pub fn adjust_spread_input(&mut self, wheel: f32) {
        self.adjust_pellets((wheel / 120.0).floor() as i32);
    }

    /// Change the shotgun pellet count, minimum 1.
    pub fn adjust_pellets(&mut self, magnitude: i32) {
        let pellets = self.config.pellets as i64 + magnitude as i64;
        self.config.pellets = pellets.max(1) as u32;
    }

    /// Seconds between shots at the current fire rate.
    pub fn seconds_per_shot(&self) -> f32 {
        60.0 / self.config.fire_rate.max(1.0)
    }

    /// Advance the cooldown by `dt` and return the bullets fired this tick.
    pub fn update(&mut self, dt: f32) -> Vec<BulletSpec> {
        self.cooldown -= dt;

        let mut shots = Vec::new();
        if !(self.firing && self.config.enabled) {
            return shots;
        }

        let interval = self.seconds_per_shot();
        for _ in 0..drain_cooldown(&mut self.cooldown, interval) {
            if self.config.shotgun {
                shots.extend(self.shotgun_blast());
            } else {
                shots.push(self.single_shot());
            }
        }
        shots
    }

    fn single_shot(&self) -> BulletSpec {
        let position = self.muzzle + self.facing.forward() * self.config.spawn_offset;
        self.bullet(position, self.facing)
    }

    /// Pellets fanned evenly across the spread, centered on the facing.
    fn shotgun_blast(&self) -> Vec<BulletSpec> {
        let pellets = self.config.pellets.max(1);
        if pellets == 1 {
            return vec![self.bullet(self.muzzle, self.facing)];
        }

        let step = self.config.spread / (pellets - 1) as f32;
        let first = -self.config.spread / 2.0;
        (0..pellets)
            .map(|i| {
                let yaw = Orientation::from_yaw_degrees(first + step * i as f32);
                self.bullet(self.muzzle, Orientation(self.facing.0 * yaw.0))
            })
            .collect()
    }

    fn bullet(&self, position: Vec3, facing: Orientation) -> BulletSpec {
        BulletSpec {
            speed: self.config.bullet_speed,
            life_time: self.config.bullet_life_time,
            ..BulletSpec::new(Position(position), facing)
        }
    }
}

/// Count the spawns a spent cooldown owes and recharge it by `interval`
/// per spawn. Past [`MAX_CATCH_UP`] the backlog is forgiven.
fn drain_cooldown(cooldown: &mut f32, interval: f32) -> usize {
    let interval = interval.max(MIN_INTERVAL);
    let mut due = 0;
    while *cooldown <= 0.0 {
        due += 1;
        if due == MAX_CATCH_UP {
            *cooldown = interval;
            break;
        }
        *cooldown += interval;
    }
    due
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn gun(config: GunConfig) -> Gun {
        let mut gun = Gun::new(config);
        gun.start_firing();
        gun
    }

    #[test]
    fn test_spawner_emits_one_per_delay() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut spawner = EnemySpawner::new(SpawnerConfig {
            spawn_delay: 0.5,
            jitter: 0.0,
            ..SpawnerConfig::default()
        });

        let mut total = 0;
        for _ in 0..90 {
            total += spawner.update(0.02, &mut rng).len();
        }

        // First spawn is immediate, then one every 25 ticks.
        assert_eq!(total, 4);
    }

    #[test]
    fn test_spawner_catches_up_on_long_step() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut spawner = EnemySpawner::new(SpawnerConfig {
            spawn_delay: 1.0,
            ..SpawnerConfig::default()
        });

        // The immediate spawn plus one per elapsed delay.
        assert_eq!(spawner.update(3.0, &mut rng).len(), 4);
    }

    #[test]
    fn test_spawner_disabled() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut spawner = EnemySpawner::new(SpawnerConfig::default());
        spawner.set_enabled(false);

        assert!(spawner.update(10.0, &mut rng).is_empty());
    }

    #[test]
    fn test_spawner_jitter_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let config = SpawnerConfig {
            spawn_delay: 0.1,
            jitter: 2.0,
            ..SpawnerConfig::default()
        };
        let center = config.position;
        let mut spawner = EnemySpawner::new(config);

        let specs = spawner.update(5.0, &mut rng);
        assert!(specs.len() >= 50);
        for spec in specs {
            assert!(spec.position.0.distance(center) <= 2.0 + 1e-4);
            assert_eq!(spec.position.0.y, center.y);
        }
    }

    #[test]
    fn test_spawner_same_seed_same_positions() {
        let run = || {
            let mut rng = ChaCha8Rng::seed_from_u64(99);
            let mut spawner = EnemySpawner::new(SpawnerConfig::default());
            spawner
                .update(4.0, &mut rng)
                .into_iter()
                .map(|s| s.position.0)
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_gun_fire_rate_cadence() {
        let mut gun = gun(GunConfig {
            fire_rate: 300.0,
            ..GunConfig::default()
        });

        let mut shots = 0;
        for _ in 0..50 {
            shots += gun.update(0.02).len();
        }

        // 5 shots per second, first one immediate.
        assert!((5..=6).contains(&shots), "fired {shots}");
    }

    #[test]
    fn test_gun_single_shot_offset_along_facing() {
        let mut gun = gun(GunConfig::default());
        gun.muzzle = Vec3::new(1.0, 0.0, 1.0);
        gun.aim_at(Vec3::new(10.0, 0.0, 1.0));

        let shots = gun.update(0.02);

        assert_eq!(shots.len(), 1);
        let expected = Vec3::new(1.0 + gun.config().spawn_offset, 0.0, 1.0);
        assert!(shots[0].position.0.abs_diff_eq(expected, 1e-5));
        assert!(shots[0].orientation.forward().abs_diff_eq(Vec3::X, 1e-5));
    }

    #[test]
    fn test_gun_shotgun_fans_across_spread() {
        let mut gun = gun(GunConfig {
            shotgun: true,
            pellets: 3,
            spread: 90.0,
            ..GunConfig::default()
        });

        let shots = gun.update(0.02);

        assert_eq!(shots.len(), 3);
        let forwards: Vec<Vec3> = shots.iter().map(|s| s.orientation.forward()).collect();
        let half = std::f32::consts::FRAC_1_SQRT_2;
        assert!(forwards[0].abs_diff_eq(Vec3::new(-half, 0.0, half), 1e-5));
        assert!(forwards[1].abs_diff_eq(Vec3::Z, 1e-5));
        assert!(forwards[2].abs_diff_eq(Vec3::new(half, 0.0, half), 1e-5));
    }

    #[test]
    fn test_gun_not_firing_keeps_cooling() {
        let mut gun = Gun::new(GunConfig::default());
        assert!(gun.update(5.0).is_empty());

        gun.start_firing();
        assert_eq!(gun.update(0.0).len(), 1);
    }

    #[test]
    fn test_gun_disabled_does_not_fire() {
        let mut gun = gun(GunConfig::default());
        gun.set_enabled(false);
        assert!(gun.update(1.0).is_empty());
    }

    #[test]
    fn test_tiny_spawn_delay_is_bounded() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut spawner = EnemySpawner::new(SpawnerConfig {
            spawn_delay: 1e-12,
            jitter: 0.0,
            ..SpawnerConfig::default()
        });

        assert!((20..=21).contains(&spawner.update(0.02, &mut rng).len()));
        assert!(spawner.update(1000.0, &mut rng).len() <= MAX_CATCH_UP);
    }

    #[test]
    fn test_huge_fire_rate_is_bounded() {
        let mut gun = gun(GunConfig {
            fire_rate: f32::MAX,
            ..GunConfig::default()
        });

        assert!((20..=21).contains(&gun.update(0.02).len()));
        assert_eq!(gun.update(1e9).len(), MAX_CATCH_UP);
    }

    #[test]
    fn test_spread_input_steps_pellets() {
        let mut gun = Gun::new(GunConfig::default());
        let start = gun.config().pellets;

        gun.adjust_spread_input(240.0);
        assert_eq!(gun.config().pellets, start + 2);
        gun.adjust_spread_input(-120.0);
        assert_eq!(gun.config().pellets, start + 1);
    }

    #[test]
    fn test_gun_adjustments_clamp() {
        let mut gun = Gun::new(GunConfig::default());
        gun.adjust_fire_rate(-100.0);
        assert_eq!(gun.config().fire_rate, 1.0);
        gun.adjust_pellets(-50);
        assert_eq!(gun.config().pellets, 1);
        gun.adjust_pellets(4);
        assert_eq!(gun.config().pellets, 5);
    }
}
