use glam::Vec3;

use crate::config::DriverConfig;
use crate::state::TickSummary;

#[test]
fn test_driver_config_defaults() {
    let config = DriverConfig::default();
    assert_eq!(config.tick_rate, 50);
    assert!((config.dt() - 0.02).abs() < 1e-6);
    assert_eq!(config.spawner.spawn_delay, 1.0);
    assert_eq!(config.gun.fire_rate, 60.0);
    assert!(!config.gun.shotgun);
    assert!(!config.sim.collision.use_physics);
}

#[test]
fn test_driver_config_partial_toml() {
    let text = r#"
        seed = 7
        player_position = [1.0, 0.0, 2.0]

        [gun]
        shotgun = true
        pellets = 8

        [sim.collision]
        use_physics = true
    "#;

    let config = DriverConfig::from_toml_str(text).unwrap();

    assert_eq!(config.seed, 7);
    assert_eq!(config.player_position, Vec3::new(1.0, 0.0, 2.0));
    assert!(config.gun.shotgun);
    assert_eq!(config.gun.pellets, 8);
    assert_eq!(config.gun.fire_rate, 60.0);
    assert!(config.sim.collision.use_physics);
    assert!(config.sim.dedupe_contacts);
    assert_eq!(config.tick_rate, 50);
}

#[test]
fn test_driver_config_rejects_bad_toml() {
    assert!(DriverConfig::from_toml_str("tick_rate = \"fast\"").is_err());
}

#[test]
fn test_zero_tick_rate_does_not_divide_by_zero() {
    let config = DriverConfig {
        tick_rate: 0,
        ..DriverConfig::default()
    };
    assert_eq!(config.dt(), 1.0);
}

#[test]
fn test_tick_summary_serializes() {
    let summary = TickSummary {
        tick: 3,
        enemies: 2,
        player_health: Some(9.0),
        ..TickSummary::default()
    };

    let json = serde_json::to_string(&summary).unwrap();
    let back: TickSummary = serde_json::from_str(&json).unwrap();

    assert!(json.contains("\"player_health\":9.0"));
    assert_eq!(back, summary);
}
