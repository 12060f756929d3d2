//! BhittiNav - Wall-following navigation controller
//!
//! Runs the reactive controller over the scripted mock platform: a canned
//! corridor with a wall on the right, a gap, a frontal obstacle, and one
//! head-on collision. Point it at real hardware by implementing
//! [`bhitti_nav::Platform`] for the robot's device layer.

use std::path::Path;

use tracing::info;

use bhitti_nav::mock::{MockPlatform, ProximityFrame};
use bhitti_nav::sensors::PROXIMITY_COUNT;
use bhitti_nav::{Controller, NavConfig, Result};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bhitti_nav=info".parse().unwrap()),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    let config = if args.len() > 1 {
        let config_path = Path::new(&args[1]);
        info!("Loading configuration from {:?}", config_path);
        NavConfig::load(config_path)?
    } else if Path::new("bhitti.toml").exists() {
        info!("Loading configuration from bhitti.toml");
        NavConfig::load(Path::new("bhitti.toml"))?
    } else {
        info!("Using default configuration");
        NavConfig::default()
    };

    info!("BhittiNav v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Thresholds: collision {}, obstacle {}, right-clear {}, max stuck {}",
        config.navigation.collision_threshold,
        config.navigation.obstacle_threshold,
        config.navigation.right_clear_threshold,
        config.navigation.max_stuck
    );

    let platform = MockPlatform::scripted(demo_script());
    let mut controller = Controller::new(platform, config);
    let summary = controller.run()?;

    info!(
        "Outcome {:?}: {:.2}s elapsed, {:.2} units travelled, {} collisions, goal reached: {}",
        summary.outcome,
        summary.elapsed,
        summary.travelled,
        summary.crashes,
        if summary.goal_reached { "yes" } else { "no" }
    );

    Ok(())
}

/// Canned corridor scenario for the demo run: cruise along a wall, lose it
/// briefly, meet a frontal obstacle, take one head-on hit, then cruise out.
fn demo_script() -> Vec<ProximityFrame> {
    fn frame(front_left: f32, front_right: f32, right_side: f32) -> ProximityFrame {
        let mut f = [0.0; PROXIMITY_COUNT];
        f[0] = front_left;
        f[7] = front_right;
        f[2] = right_side;
        f
    }

    let mut script = Vec::new();
    script.extend(vec![frame(0.0, 0.0, 70.0); 60]); // wall alongside
    script.extend(vec![frame(0.0, 0.0, 30.0); 12]); // gap: arc back toward it
    script.extend(vec![frame(0.0, 0.0, 70.0); 40]);
    script.extend(vec![frame(95.0, 20.0, 70.0); 8]); // box ahead: pivot left
    script.extend(vec![frame(0.0, 0.0, 70.0); 40]);
    script.push(frame(140.0, 130.0, 70.0)); // head-on hit: reverse burst
    script.extend(vec![frame(0.0, 0.0, 70.0); 80]);
    script
}
