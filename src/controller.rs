//! The control loop.
//!
//! Single-threaded and synchronous: the platform's step call is the only
//! suspension point, and every iteration runs strictly ordered as
//! sensor read -> decision -> actuation -> telemetry -> optional report.
//! Termination is either the platform's end sentinel, the (currently
//! unreachable) goal flag, or the stuck safety stop.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::NavConfig;
use crate::engine::{Engine, MotorCommand, NavState, Status};
use crate::error::Result;
use crate::indicators;
use crate::platform::{Platform, Wheel};
use crate::sensors::ProximitySnapshot;
use crate::telemetry::{render_report, write_report, ReportKind, Telemetry};

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Platform ended the simulation (or a goal sensor fired, one day)
    Completed,
    /// Stuck safety stop: too many consecutive non-productive decisions
    Stuck,
}

/// Trip summary returned after the loop exits.
#[derive(Clone, Copy, Debug)]
pub struct RunSummary {
    pub outcome: Outcome,
    pub steps: u64,
    pub elapsed: f64,
    pub travelled: f64,
    pub crashes: u32,
    pub goal_reached: bool,
}

/// Wall-following navigation controller over a stepped platform.
pub struct Controller<P: Platform> {
    platform: P,
    config: NavConfig,
    engine: Engine,
    state: NavState,
}

impl<P: Platform> Controller<P> {
    pub fn new(platform: P, config: NavConfig) -> Self {
        let engine = Engine::new(&config.robot, config.navigation.clone());
        Self {
            platform,
            config,
            engine,
            state: NavState::default(),
        }
    }

    /// Navigation state, for inspection after (or between) runs.
    pub fn state(&self) -> &NavState {
        &self.state
    }

    /// Give the platform back, typically to inspect a mock after a run.
    pub fn into_platform(self) -> P {
        self.platform
    }

    /// Run the control loop until the platform sentinel or the safety stop.
    pub fn run(&mut self) -> Result<RunSummary> {
        let step_ms = self.config.robot.step_duration_ms;
        let dt = self.config.step_duration_secs();
        let interval = self.config.report.interval_secs;

        // Device bring-up. The camera is enabled but never read; the
        // capability stays powered for parity with the deployed robot.
        self.platform.enable_proximity(step_ms)?;
        self.platform.enable_camera(step_ms)?;
        self.apply_command(&MotorCommand::STOP);
        indicators::apply(&mut self.platform, None);

        let mut telemetry = Telemetry::new(self.platform.now());
        let mut steps: u64 = 0;

        info!(
            "Controller running (step {}ms, report interval {}s)",
            step_ms, interval
        );

        loop {
            // Sole suspension point. Checked every iteration, so the end
            // sentinel also interrupts a committed reverse maneuver.
            if !self.platform.step(step_ms) {
                debug!("Platform signaled end of run");
                break;
            }

            if self.state.goal_reached {
                break;
            }
            if self.engine.is_stuck(&self.state) {
                break;
            }

            let snapshot = ProximitySnapshot::read(&self.platform);
            let (command, status) = self.engine.decide(&snapshot, &mut self.state);

            self.apply_command(&command);
            indicators::apply(&mut self.platform, Some(status));
            telemetry.accumulate(dt, &command);
            steps += 1;

            if status == Status::Obstacle && self.state.reverse_hold == self.config.navigation.reverse_hold_steps {
                warn!(
                    "Collision #{} at step {}, reversing for {} steps",
                    self.state.crashes, steps, self.state.reverse_hold
                );
            }

            let now = self.platform.now();
            if telemetry.report_due(now, interval) {
                self.emit_report(ReportKind::Periodic, now, &telemetry);
                telemetry.mark_reported(now);
            }
        }

        // Safe-stop: motors off no matter how the loop ended.
        self.apply_command(&MotorCommand::STOP);

        let stuck = self.engine.is_stuck(&self.state);
        if stuck {
            indicators::apply(&mut self.platform, Some(Status::Stuck));
            warn!(
                "Robot stuck after {} non-productive loops; stopped for safety",
                self.state.stuck_loops
            );
        }

        let now = self.platform.now();
        self.emit_report(ReportKind::Final, now, &telemetry);

        let summary = RunSummary {
            outcome: if stuck { Outcome::Stuck } else { Outcome::Completed },
            steps,
            elapsed: now - telemetry.start_time,
            travelled: telemetry.travelled,
            crashes: self.state.crashes,
            goal_reached: self.state.goal_reached,
        };
        info!(
            "Run finished: {:?}, {} steps, {:.2}s, {:.2} units, {} collisions",
            summary.outcome, summary.steps, summary.elapsed, summary.travelled, summary.crashes
        );
        Ok(summary)
    }

    fn apply_command(&mut self, command: &MotorCommand) {
        self.platform.set_wheel_velocity(Wheel::Left, command.left);
        self.platform.set_wheel_velocity(Wheel::Right, command.right);
    }

    /// Render and persist a report. Write failures are diagnostics, never
    /// fatal: the loop must keep driving even with a broken sink.
    fn emit_report(&mut self, kind: ReportKind, now: f64, telemetry: &Telemetry) {
        let stuck = self.engine.is_stuck(&self.state);
        let content = render_report(kind, now, &self.state, telemetry, stuck);
        match write_report(Path::new(&self.config.report.output_dir), kind, &content) {
            Ok(path) => debug!("Report written to {:?}", path),
            Err(e) => warn!("Failed to write {:?} report: {}", kind, e),
        }
    }
}
