use level::Level;
use physics::{tick, Action, Hit, PhysParams, PlayerState, TickOutcome};

/// Runs a fixed action script and returns the tick (1-based) and outcome of
/// the first crash, if any.
fn run_until_crash(
    level: &Level,
    actions: impl Fn(u32) -> Action,
    max_ticks: u32,
) -> (PlayerState, Option<(u32, TickOutcome)>) {
    let params = PhysParams::default();
    let mut player = PlayerState::spawn(level);
    for t in 1..=max_ticks {
        let outcome = tick(&player, actions(t), level, &params);
        player = outcome.state;
        if outcome.collided {
            return (player, Some((t, outcome)));
        }
    }
    (player, None)
}

/// Running into a wall without jumping is fatal.
#[test]
fn test_wall_side_hit_crashes() {
    let level = Level::load(
        r#"{ "start": 0, "end": 2000,
            "obstacles": [{ "kind": "wall", "x": 128, "width": 32, "height": 40 }] }"#,
    )
    .unwrap();
    let (_, crash) = run_until_crash(&level, |_| Action::NoOp, 100);
    let (t, outcome) = crash.expect("wall should stop the player");
    // Front edge passes x=128 once 8t + 64 > 128.
    assert_eq!(t, 9);
    assert_eq!(outcome.hit, Some(Hit::Wall));
}

/// Falling onto a wall from above lands on it; walking off its far edge
/// drops back to the ground without crashing.
#[test]
fn test_wall_top_supports_player() {
    let level = Level::load(
        r#"{ "start": 0, "end": 2000,
            "obstacles": [{ "kind": "wall", "x": 150, "width": 450, "height": 32 }] }"#,
    )
    .unwrap();
    let params = PhysParams::default();
    let mut player = PlayerState::at(200.0, 100.0);

    let mut landed_on_wall = false;
    for _ in 0..120 {
        let outcome = tick(&player, Action::NoOp, &level, &params);
        assert!(!outcome.collided, "unexpected crash at x={}", outcome.state.x);
        player = outcome.state;
        if player.on_ground && player.y == 32.0 {
            landed_on_wall = true;
        }
    }
    assert!(landed_on_wall);
    assert!(player.x > 600.0);
    assert_eq!(player.y, 0.0);
    assert!(player.on_ground);
}

/// Spikes kill on contact.
#[test]
fn test_spike_contact_crashes() {
    let level = Level::load(
        r#"{ "start": 0, "end": 2000,
            "obstacles": [{ "kind": "spike", "x": 300, "width": 64, "height": 64 }] }"#,
    )
    .unwrap();
    let (player, crash) = run_until_crash(&level, |_| Action::NoOp, 100);
    let (_, outcome) = crash.expect("spike should kill");
    assert_eq!(outcome.hit, Some(Hit::Spike));
    assert!(!player.alive);
}

/// Walking into a gap drops the player until it sinks past the threshold.
#[test]
fn test_gap_fall_crashes() {
    let level = Level::load(
        r#"{ "start": 0, "end": 2000,
            "obstacles": [{ "kind": "gap", "x": 200, "width": 200, "depth": 512 }] }"#,
    )
    .unwrap();
    let (player, crash) = run_until_crash(&level, |_| Action::NoOp, 100);
    let (t, outcome) = crash.expect("gap should swallow the player");
    // Unsupported from x=200 (tick 25), feet below -32 seven ticks later.
    assert_eq!(t, 32);
    assert_eq!(outcome.hit, Some(Hit::Gap));
    assert!(player.y < -32.0);
}

/// A partially supported player stays on the rim.
#[test]
fn test_gap_rim_supports_overhang() {
    let level = Level::load(
        r#"{ "start": 0, "end": 2000,
            "obstacles": [{ "kind": "gap", "x": 200, "width": 200, "depth": 512 }] }"#,
    )
    .unwrap();
    let params = PhysParams::default();
    let mut player = PlayerState::spawn(&level);
    for _ in 0..24 {
        player = tick(&player, Action::NoOp, &level, &params).state;
        assert_eq!(player.y, 0.0);
        assert!(player.on_ground);
    }
}

/// Jumping at the right moment clears a gap.
#[test]
fn test_jump_clears_gap() {
    let level = Level::load(
        r#"{ "start": 0, "end": 2000,
            "obstacles": [{ "kind": "gap", "x": 200, "width": 128, "depth": 512 }] }"#,
    )
    .unwrap();
    let (player, crash) = run_until_crash(&level, |t| Action::from(t == 15), 120);
    assert!(crash.is_none(), "crashed: {crash:?}");
    assert!(player.alive && player.on_ground);
    assert_eq!(player.y, 0.0);
}

/// Running into a higher ground segment is a crash.
#[test]
fn test_ground_step_face_crashes() {
    let level = Level::load(
        r#"{ "start": 0, "end": 2000,
            "ground": [{ "start": 0, "height": 0 }, { "start": 300, "height": 32 }] }"#,
    )
    .unwrap();
    let (_, crash) = run_until_crash(&level, |_| Action::NoOp, 100);
    let (t, outcome) = crash.expect("step face should stop the player");
    assert_eq!(t, 30);
    assert_eq!(outcome.hit, Some(Hit::Terrain));
}

/// Jumping onto a higher ground segment lands on it.
#[test]
fn test_jump_onto_ground_step() {
    let level = Level::load(
        r#"{ "start": 0, "end": 2000,
            "ground": [{ "start": 0, "height": 0 }, { "start": 300, "height": 32 }] }"#,
    )
    .unwrap();
    let (player, crash) = run_until_crash(&level, |t| Action::from(t == 25), 100);
    assert!(crash.is_none(), "crashed: {crash:?}");
    assert_eq!(player.y, 32.0);
    assert!(player.on_ground);
}
