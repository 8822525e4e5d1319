use glam::{Quat, Vec3};

use crate::components::{Health, Timed};
use crate::config::SimConfig;
use crate::constants::DEFAULT_SIMPLE_RADIUS;
use crate::enums::{CollisionBackend, DestroyReason};
use crate::tags::TagSet;
use crate::types::{Orientation, Position, SimTime};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

// ---- Health ----

#[test]
fn test_health_new_is_full() {
    let health = Health::new(10.0);
    assert_eq!(health.current, 10.0);
    assert_eq!(health.max, 10.0);
    assert!(!health.is_depleted());
}

#[test]
fn test_health_damage_clamps_at_zero() {
    let mut health = Health::new(1.5);
    health.apply_damage(1.0);
    assert!(approx(health.current, 0.5));
    health.apply_damage(1.0);
    assert_eq!(health.current, 0.0);
    assert!(health.is_depleted());
}

#[test]
fn test_health_kill() {
    let mut health = Health::new(10.0);
    health.kill();
    assert!(health.is_depleted());
    assert_eq!(health.max, 10.0);
}

#[test]
fn test_timed_expire() {
    let mut timed = Timed { life_time: 3.0 };
    timed.expire();
    assert_eq!(timed.life_time, 0.0);
}

// ---- Geometry ----

#[test]
fn test_identity_faces_positive_z() {
    let forward = Orientation::default().forward();
    assert!(forward.abs_diff_eq(Vec3::Z, 1e-6));
}

#[test]
fn test_facing_looks_along_direction() {
    let cases = [Vec3::X, -Vec3::X, Vec3::Z, -Vec3::Z, Vec3::new(1.0, 0.0, 1.0)];
    for dir in cases {
        let orientation = Orientation::facing(dir).unwrap();
        assert!(
            orientation.forward().abs_diff_eq(dir.normalize(), 1e-5),
            "facing {dir:?} produced forward {:?}",
            orientation.forward()
        );
    }
}

#[test]
fn test_facing_ignores_vertical_component() {
    let orientation = Orientation::facing(Vec3::new(0.0, 5.0, 2.0)).unwrap();
    assert!(orientation.forward().abs_diff_eq(Vec3::Z, 1e-5));
}

#[test]
fn test_facing_zero_direction_is_none() {
    assert!(Orientation::facing(Vec3::ZERO).is_none());
    assert!(Orientation::facing(Vec3::Y).is_none());
}

#[test]
fn test_horizontal_direction_drops_height() {
    let from = Position::new(1.0, 2.0, 3.0);
    let dir = from.horizontal_direction_to(Vec3::new(4.0, 10.0, 7.0));
    assert_eq!(dir, Vec3::new(3.0, 0.0, 4.0));
}

#[test]
fn test_distance_to() {
    let a = Position::new(0.0, 0.0, 0.0);
    let b = Position::new(3.0, 4.0, 0.0);
    assert!(approx(a.distance_to(&b), 5.0));
}

#[test]
fn test_yaw_degrees() {
    let orientation = Orientation::from_yaw_degrees(90.0);
    assert!(orientation.forward().abs_diff_eq(Vec3::X, 1e-5));
    assert!(Orientation(Quat::IDENTITY) == Orientation::from_yaw_degrees(0.0));
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    time.advance(0.05);
    time.advance(0.05);
    assert_eq!(time.tick, 2);
    assert!((time.elapsed_secs - 0.1).abs() < 1e-6);
}

// ---- Tags ----

#[test]
fn test_tag_set_contains() {
    let tags = TagSet::BULLET | TagSet::MOVE_FORWARD;
    assert!(tags.contains(TagSet::BULLET));
    assert!(tags.contains(TagSet::MOVE_FORWARD));
    assert!(!tags.contains(TagSet::ENEMY));
    assert!(tags.contains(TagSet::EMPTY));
    assert!(!tags.is_empty());
    assert!(TagSet::default().is_empty());
}

#[test]
fn test_tag_set_debug_lists_names() {
    let tags = TagSet::ENEMY | TagSet::MOVE_FORWARD;
    assert_eq!(format!("{tags:?}"), "{Enemy, MoveForward}");
}

// ---- Config ----

#[test]
fn test_default_config_uses_simplified_backend() {
    let config = SimConfig::default();
    assert_eq!(config.collision.backend(), CollisionBackend::Simplified);
    assert_eq!(config.collision.simple_radius, DEFAULT_SIMPLE_RADIUS);
    assert!(config.dedupe_contacts);
}

#[test]
fn test_config_from_partial_toml() {
    let config = SimConfig::from_toml_str(
        r#"
        [collision]
        use_physics = true
        "#,
    )
    .unwrap();
    assert_eq!(config.collision.backend(), CollisionBackend::Physics);
    assert_eq!(config.collision.simple_radius, DEFAULT_SIMPLE_RADIUS);
    assert!(config.dedupe_contacts);
}

#[test]
fn test_config_full_toml() {
    let config = SimConfig::from_toml_str(
        r#"
        dedupe_contacts = false

        [collision]
        use_physics = false
        simple_radius = 2.5
        "#,
    )
    .unwrap();
    assert!(!config.dedupe_contacts);
    assert_eq!(config.collision.simple_radius, 2.5);
}

#[test]
fn test_config_rejects_bad_types() {
    let result = SimConfig::from_toml_str("dedupe_contacts = \"yes\"");
    assert!(result.is_err());
}

#[test]
fn test_destroy_reason_serde() {
    for reason in [
        DestroyReason::Depleted,
        DestroyReason::Expired,
        DestroyReason::External,
    ] {
        let json = serde_json::to_string(&reason).unwrap();
        let back: DestroyReason = serde_json::from_str(&json).unwrap();
        assert_eq!(reason, back);
    }
}
