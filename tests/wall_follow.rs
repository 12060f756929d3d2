//! End-to-end controller scenarios over the scripted mock platform.
//!
//! Each test plays a synthetic proximity script through the full control
//! loop and asserts on the run summary, the recorded motor commands, the
//! indicator bank, and the report artifacts.
//!
//! | Scenario | Expectation |
//! |----------|-------------|
//! | Straight corridor | completes, exact distance, no collisions |
//! | Endless frontal obstacle | stuck stop after exactly 50 decisions |
//! | Head-on collision | one crash, committed reverse, run continues |
//! | Report sink | final report file with all metric lines |
//! | Sparse indicator bank | truncated pattern, no panic |
//!
//! Run with: `cargo test --test wall_follow`

use approx::assert_relative_eq;
use bhitti_nav::mock::{MockPlatform, ProximityFrame};
use bhitti_nav::sensors::PROXIMITY_COUNT;
use bhitti_nav::{Controller, NavConfig, Outcome};

const SPEED_LIMIT: f32 = 6.28;
const DT: f64 = 0.064;

fn frame(front_left: f32, front_right: f32, right_side: f32) -> ProximityFrame {
    let mut f = [0.0; PROXIMITY_COUNT];
    f[0] = front_left;
    f[7] = front_right;
    f[2] = right_side;
    f
}

/// Wall alongside on the right, nothing ahead.
fn wall() -> ProximityFrame {
    frame(0.0, 0.0, 70.0)
}

fn config_with_report_dir(dir: &std::path::Path) -> NavConfig {
    let mut config = NavConfig::default();
    config.report.output_dir = dir.to_string_lossy().into_owned();
    config
}

#[test]
fn straight_corridor_completes_with_exact_distance() {
    let dir = tempfile::tempdir().unwrap();
    let steps = 200;
    let platform = MockPlatform::scripted(vec![wall(); steps]);
    let mut controller = Controller::new(platform, config_with_report_dir(dir.path()));
    let summary = controller.run().unwrap();

    assert_eq!(summary.outcome, Outcome::Completed);
    assert_eq!(summary.steps, steps as u64);
    assert_eq!(summary.crashes, 0);
    assert!(!summary.goal_reached);
    assert_relative_eq!(
        summary.travelled,
        steps as f64 * (0.5 * SPEED_LIMIT) as f64 * DT,
        epsilon = 1e-9
    );
    assert_relative_eq!(summary.elapsed, steps as f64 * DT, epsilon = 1e-9);

    let platform = controller.into_platform();
    assert!(platform.proximity_enabled());
    assert!(platform.camera_enabled());
    assert_eq!(platform.left_velocity(), 0.0);
    assert_eq!(platform.right_velocity(), 0.0);
}

#[test]
fn endless_obstacle_triggers_stuck_stop_after_50_decisions() {
    let dir = tempfile::tempdir().unwrap();
    let platform = MockPlatform::scripted(vec![frame(90.0, 0.0, 0.0)]).with_step_limit(10_000);
    let mut controller = Controller::new(platform, config_with_report_dir(dir.path()));
    let summary = controller.run().unwrap();

    assert_eq!(summary.outcome, Outcome::Stuck);
    assert_eq!(summary.steps, 50);
    assert_eq!(summary.crashes, 0);

    let platform = controller.into_platform();
    assert_eq!(platform.left_velocity(), 0.0);
    assert_eq!(platform.right_velocity(), 0.0);
    assert_eq!(
        platform.indicator_states(),
        &[true, false, false, false, false, false, false, false]
    );
}

#[test]
fn head_on_collision_reverses_then_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let mut script = vec![wall(); 20];
    script.push(frame(150.0, 140.0, 70.0));
    script.extend(vec![wall(); 30]);
    let platform = MockPlatform::scripted(script);
    let mut controller = Controller::new(platform, config_with_report_dir(dir.path()));
    let summary = controller.run().unwrap();

    assert_eq!(summary.outcome, Outcome::Completed);
    assert_eq!(summary.crashes, 1);
    assert_eq!(summary.steps, 51);

    // 45 cruise steps at half speed plus 6 reverse steps (the collision
    // decision and 5 held steps) at half speed: same |mean| everywhere.
    let expected = 51.0 * (0.5 * SPEED_LIMIT) as f64 * DT;
    assert_relative_eq!(summary.travelled, expected, epsilon = 1e-9);
}

#[test]
fn final_report_contains_all_metric_lines() {
    let dir = tempfile::tempdir().unwrap();
    let platform = MockPlatform::scripted(vec![wall(); 10]);
    let mut controller = Controller::new(platform, config_with_report_dir(dir.path()));
    controller.run().unwrap();

    let report_path = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .find(|p| {
            p.file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with("nav_report_final_")
        })
        .expect("final report file missing");

    let content = std::fs::read_to_string(report_path).unwrap();
    assert!(content.contains("Elapsed time"));
    assert!(content.contains("Distance approx"));
    assert!(content.contains("Collisions      : 0"));
    assert!(content.contains("Goal reached    : no"));
    assert!(content.contains("Status          : completed"));
}

#[test]
fn stuck_final_report_says_stuck() {
    let dir = tempfile::tempdir().unwrap();
    let platform = MockPlatform::scripted(vec![frame(90.0, 0.0, 0.0)]).with_step_limit(10_000);
    let mut controller = Controller::new(platform, config_with_report_dir(dir.path()));
    controller.run().unwrap();

    let content = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| {
            p.file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with("nav_report_final_")
        })
        .map(|p| std::fs::read_to_string(p).unwrap())
        .next()
        .expect("final report file missing");
    assert!(content.contains("Status          : stuck"));
}

#[test]
fn sparse_indicator_bank_gets_truncated_patterns() {
    let dir = tempfile::tempdir().unwrap();
    let platform = MockPlatform::scripted(vec![wall(); 5]).with_indicator_count(4);
    let mut controller = Controller::new(platform, config_with_report_dir(dir.path()));
    let summary = controller.run().unwrap();
    assert_eq!(summary.outcome, Outcome::Completed);

    // Last applied pattern was Go = 1,0,1,0,... truncated to 4 lights.
    let platform = controller.into_platform();
    assert_eq!(platform.indicator_states(), &[true, false, true, false]);
}
