use crate::config::{SimConfig, Tuning};
use crate::constants::*;
use crate::enums::*;
use crate::state::{GameSnapshot, MissileView, PlaneView};
use crate::types::{px, SimTime, Vec2};

/// Verify the enums round-trip through serde_json.
#[test]
fn test_missile_kind_serde() {
    let variants = vec![MissileKind::Player, MissileKind::Enemy, MissileKind::Plane];
    for v in variants {
        let json = serde_json::to_string(&v).unwrap();
        let back: MissileKind = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_missile_phase_serde() {
    let variants = vec![
        MissilePhase::Init,
        MissilePhase::Flying,
        MissilePhase::ExplodeGrow,
        MissilePhase::ExplodeShrink,
        MissilePhase::Dead,
    ];
    for v in variants {
        let json = serde_json::to_string(&v).unwrap();
        let back: MissilePhase = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_plane_phase_serde() {
    let variants = vec![PlanePhase::Init, PlanePhase::Flying, PlanePhase::Dead];
    for v in variants {
        let json = serde_json::to_string(&v).unwrap();
        let back: PlanePhase = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_snapshot_serde_round_trip() {
    let snapshot = GameSnapshot {
        time: SimTime {
            tick: 17,
            elapsed_secs: 17.0 / 30.0,
        },
        shots_fired: 3,
        impacts: 1,
        missiles: vec![MissileView {
            kind: MissileKind::Enemy,
            phase: MissilePhase::Flying,
            position: Vec2::new(100.0, 50.0),
            blast_radius: 0.0,
        }],
        plane: PlaneView {
            phase: PlanePhase::Flying,
            position: Vec2::new(200.0, PLANE_ALTITUDE),
            traveled: 120.0,
        },
    };
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.shots_fired, 3);
    assert_eq!(back.impacts, 1);
    assert_eq!(back.missiles.len(), 1);
    assert_eq!(back.plane.traveled, 120.0);
}

#[test]
fn test_tuning_conversion() {
    let tuning = Tuning::from_tick_rate(30);
    assert_eq!(tuning.player_step, PLAYER_MISSILE_SPEED / 30.0);
    assert_eq!(tuning.enemy_step, ENEMY_MISSILE_SPEED / 30.0);
    assert_eq!(tuning.blast_step, BLAST_RADIUS_RATE / 30.0);
    assert_eq!(tuning.plane_respawn_ticks, 90);
    assert!((tuning.dt_secs() - 1.0 / 30.0).abs() < 1e-12);
}

#[test]
fn test_tuning_scales_with_tick_rate() {
    // Doubling the tick rate halves every per-tick step, so real-time
    // speeds stay the same.
    let slow = Tuning::from_tick_rate(30);
    let fast = Tuning::from_tick_rate(60);
    assert!((fast.player_step * 2.0 - slow.player_step).abs() < 1e-6);
    assert!((fast.plane_step * 2.0 - slow.plane_step).abs() < 1e-6);
    assert_eq!(fast.plane_respawn_ticks, slow.plane_respawn_ticks * 2);
}

#[test]
fn test_default_config() {
    let config = SimConfig::default();
    assert_eq!(config.tick_hz, TICK_RATE);
    let tuning = Tuning::default();
    assert_eq!(tuning.tick_hz, TICK_RATE);
}

#[test]
fn test_launch_sites_on_bottom_edge() {
    for site in LAUNCH_SITES {
        assert_eq!(site.y, DISPLAY_HEIGHT);
        assert!(site.x > 0.0 && site.x < DISPLAY_WIDTH);
    }
    // Evenly spaced quarters.
    assert_eq!(LAUNCH_SITES[1].x - LAUNCH_SITES[0].x, DISPLAY_WIDTH / 4.0);
    assert_eq!(LAUNCH_SITES[2].x - LAUNCH_SITES[1].x, DISPLAY_WIDTH / 4.0);
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..30 {
        time.advance(1.0 / 30.0);
    }
    assert_eq!(time.tick, 30);
    assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
}

#[test]
fn test_px_rounding() {
    assert_eq!(px(1.4), 1);
    assert_eq!(px(1.5), 2);
    assert_eq!(px(-0.4), 0);
}
