//! BhittiNav - Reactive wall-following navigation controller
//!
//! Drives a differential-drive robot along an unknown wall on its right
//! side using eight short-range proximity sensors, avoids collisions with
//! a committed reverse maneuver, stops safely when progress stalls, and
//! reports trip metrics periodically and at the end of the run.
//!
//! The robot itself sits behind the [`platform::Platform`] trait; the
//! bundled [`mock::MockPlatform`] plays scripted sensor sequences for
//! hardware-free runs and tests.

pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod indicators;
pub mod mock;
pub mod platform;
pub mod sensors;
pub mod telemetry;

// Re-export commonly used types
pub use config::NavConfig;
pub use controller::{Controller, Outcome, RunSummary};
pub use engine::{Engine, MotorCommand, NavState, Status};
pub use error::{NavError, Result};
pub use platform::{Platform, Wheel};
pub use sensors::ProximitySnapshot;
