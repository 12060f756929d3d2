//! Navigation decision engine.
//!
//! One pure-ish decision per control step: a proximity snapshot goes in, a
//! motor command and a status label come out, and the crash/stuck counters
//! are updated as a side effect. Priority order, first match wins:
//!
//! 1. committed reverse in progress (continue it)
//! 2. hard collision (both front sensors hot) -> reverse burst
//! 3. frontal obstacle -> pivot in place
//! 4. right side clear -> arc back toward the wall
//! 5. default -> wall-following cruise
//!
//! All threshold comparisons are strict; a reading exactly at a threshold
//! falls through to the next tier.

use crate::config::{NavigationConfig, RobotConfig};
use crate::sensors::ProximitySnapshot;

/// Robot status after a decision. Drives the indicator pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Wall-following cruise, path clear
    Go,
    /// Pivoting or arcing, no forward progress confirmed
    Turning,
    /// Collision response (reverse burst)
    Obstacle,
    /// Goal reached. No code path sets this today; kept for the display
    /// table and a future goal sensor.
    Goal,
    /// Safety stop after too many non-productive decisions
    Stuck,
}

/// Velocity command for the two wheel motors, rad/s, clamped to the
/// platform speed limit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotorCommand {
    pub left: f32,
    pub right: f32,
}

impl MotorCommand {
    /// Both motors stopped.
    pub const STOP: MotorCommand = MotorCommand {
        left: 0.0,
        right: 0.0,
    };

    /// Create a command, clamping both wheels to `[-speed_limit, speed_limit]`.
    pub fn clamped(left: f32, right: f32, speed_limit: f32) -> Self {
        Self {
            left: left.clamp(-speed_limit, speed_limit),
            right: right.clamp(-speed_limit, speed_limit),
        }
    }

    /// Mean of the two wheel velocities, the forward-speed proxy used for
    /// distance accumulation.
    pub fn mean_velocity(&self) -> f32 {
        (self.left + self.right) / 2.0
    }
}

/// Process-lifetime navigation state. Created once, mutated once per step,
/// never reset.
#[derive(Clone, Copy, Debug, Default)]
pub struct NavState {
    /// Hard-collision events seen so far
    pub crashes: u32,
    /// Consecutive decisions without confirmed progress; resets to 0 on
    /// every productive branch
    pub stuck_loops: u32,
    /// Never set true by current logic; the goal trigger is undefined
    /// upstream and no setter exists here
    pub goal_reached: bool,
    /// Steps remaining in a committed reverse maneuver. While non-zero the
    /// engine keeps reversing without re-reading sensors, but the caller
    /// still checks the step sentinel every iteration.
    pub reverse_hold: u32,
}

/// Reactive wall-following decision engine.
pub struct Engine {
    navigation: NavigationConfig,
    speed_limit: f32,
}

impl Engine {
    pub fn new(robot: &RobotConfig, navigation: NavigationConfig) -> Self {
        Self {
            navigation,
            speed_limit: robot.speed_limit,
        }
    }

    /// Decide the motor command and status for one control step.
    ///
    /// Mutates `state.crashes`, `state.stuck_loops`, and `state.reverse_hold`.
    pub fn decide(&self, snapshot: &ProximitySnapshot, state: &mut NavState) -> (MotorCommand, Status) {
        let sl = self.speed_limit;

        // Committed reverse from an earlier collision: hold the command,
        // touch no counters.
        if state.reverse_hold > 0 {
            state.reverse_hold -= 1;
            return (
                MotorCommand::clamped(-0.5 * sl, -0.5 * sl, sl),
                Status::Obstacle,
            );
        }

        let front_left = snapshot.front_left();
        let front_right = snapshot.front_right();
        let right_side = snapshot.right_side();

        let collision = front_left > self.navigation.collision_threshold
            && front_right > self.navigation.collision_threshold;
        let obstacle_front = front_left > self.navigation.obstacle_threshold
            || front_right > self.navigation.obstacle_threshold;
        let right_is_clear = right_side < self.navigation.right_clear_threshold;

        if collision {
            state.crashes += 1;
            state.stuck_loops += 1;
            state.reverse_hold = self.navigation.reverse_hold_steps;
            (
                MotorCommand::clamped(-0.5 * sl, -0.5 * sl, sl),
                Status::Obstacle,
            )
        } else if obstacle_front {
            state.stuck_loops += 1;
            (
                MotorCommand::clamped(0.4 * sl, -0.4 * sl, sl),
                Status::Turning,
            )
        } else if right_is_clear {
            // Wall fell away on the right: arc back toward it. This still
            // counts as progress for stuck detection.
            state.stuck_loops = 0;
            (
                MotorCommand::clamped(0.6 * sl, 0.2 * sl, sl),
                Status::Turning,
            )
        } else {
            state.stuck_loops = 0;
            (MotorCommand::clamped(0.5 * sl, 0.5 * sl, sl), Status::Go)
        }
    }

    /// Whether the stuck safety stop has been reached.
    pub fn is_stuck(&self, state: &NavState) -> bool {
        state.stuck_loops >= self.navigation.max_stuck
    }
}
