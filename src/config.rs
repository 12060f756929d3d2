//! Configuration loading for BhittiNav

use crate::error::{NavError, Result};
use serde::Deserialize;
use std::path::Path;

/// Main configuration structure
#[derive(Clone, Debug, Deserialize)]
pub struct NavConfig {
    #[serde(default)]
    pub robot: RobotConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Robot physical parameters
#[derive(Clone, Debug, Deserialize)]
pub struct RobotConfig {
    /// Maximum wheel speed in rad/s (e-puck: 6.28)
    #[serde(default = "default_speed_limit")]
    pub speed_limit: f32,

    /// Control period in milliseconds (default: 64)
    #[serde(default = "default_step_duration_ms")]
    pub step_duration_ms: u32,
}

/// Navigation decision thresholds, in native proximity units
#[derive(Clone, Debug, Deserialize)]
pub struct NavigationConfig {
    /// Both front sensors above this reading count as a hard collision
    #[serde(default = "default_collision_threshold")]
    pub collision_threshold: f32,

    /// Either front sensor above this reading counts as a frontal obstacle
    #[serde(default = "default_obstacle_threshold")]
    pub obstacle_threshold: f32,

    /// Right-side reading below this means the wall has fallen away
    #[serde(default = "default_right_clear_threshold")]
    pub right_clear_threshold: f32,

    /// Consecutive non-productive decisions before the safety stop
    #[serde(default = "default_max_stuck")]
    pub max_stuck: u32,

    /// Steps the reverse maneuver stays committed after a collision
    #[serde(default = "default_reverse_hold_steps")]
    pub reverse_hold_steps: u32,
}

/// Trip report output settings
#[derive(Clone, Debug, Deserialize)]
pub struct ReportConfig {
    /// Seconds between periodic reports
    #[serde(default = "default_report_interval")]
    pub interval_secs: f64,

    /// Directory report files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

// Default value functions
fn default_speed_limit() -> f32 {
    6.28
}
fn default_step_duration_ms() -> u32 {
    64
}
fn default_collision_threshold() -> f32 {
    100.0
}
fn default_obstacle_threshold() -> f32 {
    80.0
}
fn default_right_clear_threshold() -> f32 {
    60.0
}
fn default_max_stuck() -> u32 {
    50
}
fn default_reverse_hold_steps() -> u32 {
    5
}
fn default_report_interval() -> f64 {
    10.0
}
fn default_output_dir() -> String {
    "reports".to_string()
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            speed_limit: default_speed_limit(),
            step_duration_ms: default_step_duration_ms(),
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            collision_threshold: default_collision_threshold(),
            obstacle_threshold: default_obstacle_threshold(),
            right_clear_threshold: default_right_clear_threshold(),
            max_stuck: default_max_stuck(),
            reverse_hold_steps: default_reverse_hold_steps(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_report_interval(),
            output_dir: default_output_dir(),
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            robot: RobotConfig::default(),
            navigation: NavigationConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl NavConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| NavError::Config(format!("Failed to read config file: {}", e)))?;
        let config: NavConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Control period as seconds (64ms -> 0.064s)
    pub fn step_duration_secs(&self) -> f64 {
        self.robot.step_duration_ms as f64 / 1000.0
    }
}
