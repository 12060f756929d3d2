//! Proximity sensor snapshot.

use crate::platform::Platform;

/// Number of proximity sensors on the ring.
pub const PROXIMITY_COUNT: usize = 8;

/// One frame of proximity readings, taken fresh every control step.
///
/// Only three of the eight sensors feed the decision logic; the named
/// accessors make the wiring explicit instead of spreading raw indices
/// through the engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProximitySnapshot {
    readings: [f32; PROXIMITY_COUNT],
}

impl ProximitySnapshot {
    /// Read all eight sensors from the platform.
    pub fn read<P: Platform>(platform: &P) -> Self {
        let mut readings = [0.0; PROXIMITY_COUNT];
        for (i, r) in readings.iter_mut().enumerate() {
            *r = platform.proximity(i);
        }
        Self { readings }
    }

    /// Build a snapshot from raw readings (tests and scripted platforms).
    pub fn from_readings(readings: [f32; PROXIMITY_COUNT]) -> Self {
        Self { readings }
    }

    /// Front-left sensor (ps0).
    #[inline]
    pub fn front_left(&self) -> f32 {
        self.readings[0]
    }

    /// Front-right sensor (ps7).
    #[inline]
    pub fn front_right(&self) -> f32 {
        self.readings[7]
    }

    /// Right-side sensor (ps2).
    #[inline]
    pub fn right_side(&self) -> f32 {
        self.readings[2]
    }
}
