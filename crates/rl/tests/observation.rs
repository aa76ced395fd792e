use level::Level;
use physics::{PhysParams, PlayerState};
use rl::{ObservationConfig, Probe, BASE_FEATURES, OBSTACLE_FEATURES};

const COURSE: &str = r#"{ "start": 0, "end": 2048,
    "obstacles": [
        { "kind": "spike", "x": 512, "width": 32, "height": 32 },
        { "kind": "gap", "x": 1024, "width": 128, "depth": 512 }
    ] }"#;

#[test]
fn spawn_observation_layout() {
    let level = Level::load(COURSE).unwrap();
    let params = PhysParams::default();
    let config = ObservationConfig::default();
    let obs = config.encode(&PlayerState::spawn(&level), &level, &params);

    assert_eq!(obs.len(), config.size());
    assert_eq!(&obs[..BASE_FEATURES], &[0.0, 0.0, 1.0, 0.0]);

    let spike = &obs[BASE_FEATURES..BASE_FEATURES + OBSTACLE_FEATURES];
    // (512 - 64) / 512, 32 / 512, 32 / 256
    assert_eq!(spike, &[1.0, 1.0, 0.0, 0.0, 0.875, 0.0625, 0.125]);

    let gap = &obs[BASE_FEATURES + OBSTACLE_FEATURES..BASE_FEATURES + 2 * OBSTACLE_FEATURES];
    assert_eq!(&gap[..4], &[1.0, 0.0, 0.0, 1.0]);
    assert_eq!(gap[5], 0.25);

    // Only two obstacles: the third block is empty.
    assert!(obs[BASE_FEATURES + 2 * OBSTACLE_FEATURES..].iter().all(|&v| v == 0.0));
}

#[test]
fn passed_obstacles_drop_out() {
    let level = Level::load(COURSE).unwrap();
    let params = PhysParams::default();
    let config = ObservationConfig {
        lookahead: 1,
        ..ObservationConfig::default()
    };
    let mut player = PlayerState::spawn(&level);
    player.x = 600.0;

    let obs = config.encode(&player, &level, &params);
    // The gap is now first in line.
    assert_eq!(obs[BASE_FEATURES + 3], 1.0);
    assert_eq!(obs[3], 600.0 / 2048.0);
}

#[test]
fn airborne_player_reports_height_and_velocity() {
    let level = Level::load(COURSE).unwrap();
    let params = PhysParams::default();
    let config = ObservationConfig::default();
    let player = PlayerState {
        vy: params.jump_impulse,
        ..PlayerState::at(0.0, 128.0)
    };

    let obs = config.encode(&player, &level, &params);
    assert_eq!(&obs[..3], &[0.5, 1.0, 0.0]);
}

#[test]
fn probes_classify_the_surroundings() {
    let level = Level::load(
        r#"{ "start": 0, "end": 1024,
            "obstacles": [{ "kind": "spike", "x": 128, "width": 32, "height": 32 }] }"#,
    )
    .unwrap();
    let config = ObservationConfig {
        lookahead: 0,
        probes: vec![
            Probe { dx: 140.0, dy: 4.0 },
            Probe {
                dx: 10.0,
                dy: -10.0,
            },
            Probe { dx: 10.0, dy: 10.0 },
        ],
        ..ObservationConfig::default()
    };
    let obs = config.encode(&PlayerState::spawn(&level), &level, &PhysParams::default());
    assert_eq!(&obs[BASE_FEATURES..], &[-1.0, 1.0, 0.0]);
}
