//! Platform abstraction for the stepped robot interface.
//!
//! The controller never talks to hardware directly; it drives whatever
//! implements [`Platform`]. The platform owns time: the control loop only
//! advances when [`Platform::step`] returns, and a `false` return is the
//! simulation-end sentinel that halts the loop.

use crate::error::Result;

/// Which wheel motor a velocity command targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wheel {
    Left,
    Right,
}

/// Stepped robot platform: sensors, actuators, and the time source.
///
/// Sensor reads and actuator writes are trusted infrastructure and do not
/// fail; only device acquisition (the enable calls) returns `Result`.
pub trait Platform {
    /// Enable the proximity sensor bank at the given sampling period.
    fn enable_proximity(&mut self, period_ms: u32) -> Result<()>;

    /// Enable the camera. The controller never reads it; the capability is
    /// kept powered for parity with the deployed robot.
    fn enable_camera(&mut self, period_ms: u32) -> Result<()>;

    /// Current proximity reading for sensor `index` (0..8), non-negative,
    /// higher = closer.
    fn proximity(&self, index: usize) -> f32;

    /// Set one wheel motor's velocity in rad/s. The caller clamps to the
    /// speed limit before issuing the command.
    fn set_wheel_velocity(&mut self, wheel: Wheel, value: f32);

    /// Number of indicators actually acquired. Robots may carry fewer than
    /// requested; missing indicators are simply absent, never an error.
    fn indicator_count(&self) -> usize;

    /// Switch indicator `index` on or off.
    fn set_indicator(&mut self, index: usize, on: bool);

    /// Advance simulation time by `duration_ms`. Returns `false` when the
    /// platform has ended the run; this is the sole suspension point.
    fn step(&mut self, duration_ms: u32) -> bool;

    /// Platform clock in seconds.
    fn now(&self) -> f64;
}
