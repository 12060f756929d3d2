//! Trip telemetry: distance accumulation and report generation.
//!
//! Distance is integrated from the *commanded* wheel velocities, not
//! measured feedback, so it is an approximation in wheel-speed units.
//! Reports are rendered here and persisted one file per report event; the
//! write path returns a `Result` and the caller decides what a failure
//! means (the control loop logs and moves on).

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::engine::{MotorCommand, NavState};
use crate::error::Result;

/// Which report a render/write call is producing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportKind {
    /// Emitted every report interval while the run is in progress
    Periodic,
    /// Emitted once when the control loop exits
    Final,
}

impl ReportKind {
    fn tag(self) -> &'static str {
        match self {
            ReportKind::Periodic => "periodic",
            ReportKind::Final => "final",
        }
    }
}

/// Process-lifetime trip metrics. Created once at startup, accumulated
/// every step, read (never reset) at report time.
#[derive(Clone, Copy, Debug)]
pub struct Telemetry {
    /// Platform clock at startup (seconds)
    pub start_time: f64,
    /// Platform clock at the last periodic report
    pub last_report_time: f64,
    /// Cumulative approximate distance, monotonically non-decreasing
    pub travelled: f64,
}

impl Telemetry {
    pub fn new(start_time: f64) -> Self {
        Self {
            start_time,
            last_report_time: start_time,
            travelled: 0.0,
        }
    }

    /// Integrate one step of commanded motion: `|mean wheel velocity| * dt`.
    pub fn accumulate(&mut self, dt: f64, command: &MotorCommand) {
        self.travelled += (command.mean_velocity() as f64 * dt).abs();
    }

    /// Whether the periodic report interval has elapsed.
    pub fn report_due(&self, now: f64, interval: f64) -> bool {
        now - self.last_report_time >= interval
    }

    /// Record that a periodic report was emitted at `now`. The next window
    /// starts from `now`, not from `last + interval`; under irregular
    /// stepping the cadence drifts, which matches the deployed behavior.
    pub fn mark_reported(&mut self, now: f64) {
        self.last_report_time = now;
    }
}

/// Render a human-readable report block.
///
/// `stuck` is the caller's verdict (`stuck_loops >= max_stuck`); the status
/// line reads `stuck` in that case, otherwise `navigating` for periodic
/// reports and `completed` for the final one.
pub fn render_report(kind: ReportKind, now: f64, state: &NavState, telemetry: &Telemetry, stuck: bool) -> String {
    let elapsed = now - telemetry.start_time;
    let status = if stuck {
        "stuck"
    } else {
        match kind {
            ReportKind::Periodic => "navigating",
            ReportKind::Final => "completed",
        }
    };

    let mut out = String::new();
    let _ = writeln!(out, "===== NAVIGATION REPORT ({}) =====", kind.tag());
    let _ = writeln!(out, "Elapsed time    : {:.2} s", elapsed);
    let _ = writeln!(out, "Distance approx : {:.2} units", telemetry.travelled);
    let _ = writeln!(out, "Collisions      : {}", state.crashes);
    let _ = writeln!(
        out,
        "Goal reached    : {}",
        if state.goal_reached { "yes" } else { "no" }
    );
    if kind == ReportKind::Periodic {
        let _ = writeln!(out, "Stuck loops     : {}", state.stuck_loops);
    }
    let _ = writeln!(out, "Status          : {}", status);
    out
}

/// Write a report to its own file under `output_dir`, named with the report
/// kind and a wall-clock timestamp. Returns the path written.
pub fn write_report(output_dir: &Path, kind: ReportKind, content: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let path = output_dir.join(format!("nav_report_{}_{}.txt", kind.tag(), stamp));
    std::fs::write(&path, content)?;
    Ok(path)
}
