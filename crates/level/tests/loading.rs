use level::{Cell, Level, LevelError, Obstacle, ObstacleKind};
use std::fs;

fn course() -> anyhow::Result<Level> {
    Ok(Level::from_path("tests/data/course.json")?)
}

#[test]
fn parse_course_example() -> anyhow::Result<()> {
    let level = course()?;
    assert_eq!(level.length(), 4096.0);
    assert_eq!(level.start(), 0.0);
    assert_eq!(level.obstacles().len(), 5);
    assert_eq!(level.ground().segments().len(), 2);
    Ok(())
}

#[test]
fn elevation_defaults_to_ground_height() -> anyhow::Result<()> {
    let level = course()?;
    let last = level.obstacles().last().copied().unwrap();
    assert_eq!(last.kind(), ObstacleKind::Wall);
    assert_eq!(last.bottom(), 64.0);
    assert_eq!(last.top(), 96.0);
    Ok(())
}

#[test]
fn stacked_spike_sits_on_wall() -> anyhow::Result<()> {
    let level = course()?;
    let at_900: Vec<&Obstacle> = level.obstacles_near(932.0, 0.0).collect();
    assert_eq!(at_900.len(), 2);
    assert_eq!(at_900[0].kind(), ObstacleKind::Wall);
    assert_eq!(at_900[1].kind(), ObstacleKind::Spike);
    assert_eq!(at_900[1].bottom(), at_900[0].top());
    Ok(())
}

#[test]
fn unsorted_obstacles_are_malformed() {
    let json = fs::read_to_string("tests/data/unsorted.json").unwrap();
    let err = Level::load(&json).unwrap_err();
    assert!(err.is_malformed(), "{err}");
}

#[test]
fn missing_end_marker_is_rejected() {
    let json = fs::read_to_string("tests/data/missing_end.json").unwrap();
    let err = Level::load(&json).unwrap_err();
    assert!(matches!(err, LevelError::Json(_)), "{err}");
}

#[test]
fn start_marker_must_precede_end() {
    let err = Level::load(r#"{ "start": 100, "end": 100 }"#).unwrap_err();
    assert!(err.is_malformed());
    let err = Level::load(r#"{ "start": 0, "end": 0 }"#).unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn obstacle_past_the_end_is_malformed() {
    let err = Level::load(
        r#"{ "start": 0, "end": 500,
            "obstacles": [{ "kind": "wall", "x": 480, "width": 64, "height": 10 }] }"#,
    )
    .unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn overlapping_obstacles_are_malformed() {
    let err = Level::load(
        r#"{ "start": 0, "end": 1000, "obstacles": [
            { "kind": "wall", "x": 100, "width": 64, "height": 64 },
            { "kind": "spike", "x": 130, "width": 64, "height": 64 }
        ] }"#,
    )
    .unwrap_err();
    assert!(err.is_malformed());

    let err = Level::load(
        r#"{ "start": 0, "end": 1000, "obstacles": [
            { "kind": "gap", "x": 100, "width": 64, "depth": 100 },
            { "kind": "wall", "x": 120, "width": 16, "height": 16, "elevation": 200 }
        ] }"#,
    )
    .unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn zero_sized_obstacle_is_malformed() {
    let err = Level::load(
        r#"{ "start": 0, "end": 1000,
            "obstacles": [{ "kind": "spike", "x": 10, "width": 0, "height": 10 }] }"#,
    )
    .unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn gap_cannot_straddle_a_ground_step() {
    let err = Level::load(
        r#"{ "start": 0, "end": 1000,
            "ground": [{ "start": 0, "height": 0 }, { "start": 500, "height": 32 }],
            "obstacles": [{ "kind": "gap", "x": 480, "width": 64, "depth": 100 }] }"#,
    )
    .unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn obstacles_near_matches_linear_scan() -> anyhow::Result<()> {
    let level = course()?;
    for position in (0..4200).step_by(37).map(f64::from) {
        for radius in [0.0, 20.0, 150.0, 700.0] {
            let fast: Vec<Obstacle> = level.obstacles_near(position, radius).copied().collect();
            let slow: Vec<Obstacle> = level
                .obstacles()
                .iter()
                .filter(|o| o.touches_span(position - radius, position + radius))
                .copied()
                .collect();
            assert_eq!(fast, slow, "position={position} radius={radius}");
        }
    }
    Ok(())
}

#[test]
fn upcoming_skips_passed_obstacles() -> anyhow::Result<()> {
    let level = course()?;
    let next: Vec<f64> = level.upcoming(1000.0).map(Obstacle::x).collect();
    assert_eq!(next, vec![1400.0, 2600.0]);
    let next: Vec<f64> = level.upcoming(950.0).map(Obstacle::x).collect();
    assert_eq!(next, vec![900.0, 900.0, 1400.0, 2600.0]);
    Ok(())
}

#[test]
fn ground_height_drops_inside_gaps() -> anyhow::Result<()> {
    let level = course()?;
    assert_eq!(level.ground_height(1399.0), 0.0);
    assert_eq!(level.ground_height(1400.0), -512.0);
    assert_eq!(level.ground_height(1527.0), -512.0);
    assert_eq!(level.ground_height(1528.0), 0.0);
    assert_eq!(level.ground_height(3000.0), 64.0);

    let mut under: Vec<f64> = level.terrain_under(1380.0, 1444.0).collect();
    under.sort_by(f64::total_cmp);
    assert_eq!(under, vec![-512.0, 0.0]);
    Ok(())
}

#[test]
fn classify_point_reports_hazards() -> anyhow::Result<()> {
    let level = course()?;
    assert_eq!(level.classify_point(544.0, 10.0), Cell::Deadly);
    assert_eq!(level.classify_point(932.0, 20.0), Cell::Solid);
    assert_eq!(level.classify_point(932.0, 60.0), Cell::Deadly);
    assert_eq!(level.classify_point(300.0, 10.0), Cell::Air);
    assert_eq!(level.classify_point(300.0, -10.0), Cell::Solid);
    assert_eq!(level.classify_point(1450.0, -10.0), Cell::Air);
    Ok(())
}

#[test]
fn json_round_trip_preserves_the_level() -> anyhow::Result<()> {
    let level = course()?;
    let reloaded = Level::load(&level.to_json()?)?;
    assert_eq!(reloaded.obstacles(), level.obstacles());
    assert_eq!(reloaded.length(), level.length());
    Ok(())
}
