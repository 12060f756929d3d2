//! Scripted mock platform for hardware-free runs and tests.
//!
//! Plays back a prepared sequence of proximity frames, one per simulation
//! step, advances a simulated clock, and records every motor and indicator
//! write so tests can assert on what the controller actually commanded.

use crate::platform::{Platform, Wheel};
use crate::sensors::PROXIMITY_COUNT;

/// One step's worth of proximity readings.
pub type ProximityFrame = [f32; PROXIMITY_COUNT];

/// Scripted robot platform.
///
/// The step sentinel fires when the script runs out, or at an explicit step
/// limit; with a step limit set, the last frame repeats once the script is
/// exhausted.
pub struct MockPlatform {
    frames: Vec<ProximityFrame>,
    step_limit: Option<usize>,
    steps_taken: usize,
    clock: f64,
    indicator_count: usize,
    proximity_enabled: bool,
    camera_enabled: bool,
    left_velocity: f32,
    right_velocity: f32,
    indicators: Vec<bool>,
    /// Every wheel write, in order
    wheel_log: Vec<(Wheel, f32)>,
}

impl MockPlatform {
    /// Platform that plays `frames` and signals the end sentinel once the
    /// script is exhausted.
    pub fn scripted(frames: Vec<ProximityFrame>) -> Self {
        assert!(!frames.is_empty(), "script needs at least one frame");
        Self {
            frames,
            step_limit: None,
            steps_taken: 0,
            clock: 0.0,
            indicator_count: 8,
            proximity_enabled: false,
            camera_enabled: false,
            left_velocity: 0.0,
            right_velocity: 0.0,
            indicators: vec![false; 8],
            wheel_log: Vec::new(),
        }
    }

    /// Cap the run at `limit` steps; the last frame repeats if the script
    /// is shorter than the run.
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Pretend the robot acquired only `count` indicators.
    pub fn with_indicator_count(mut self, count: usize) -> Self {
        self.indicator_count = count;
        self.indicators = vec![false; count];
        self
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    pub fn left_velocity(&self) -> f32 {
        self.left_velocity
    }

    pub fn right_velocity(&self) -> f32 {
        self.right_velocity
    }

    pub fn indicator_states(&self) -> &[bool] {
        &self.indicators
    }

    pub fn wheel_log(&self) -> &[(Wheel, f32)] {
        &self.wheel_log
    }

    pub fn proximity_enabled(&self) -> bool {
        self.proximity_enabled
    }

    pub fn camera_enabled(&self) -> bool {
        self.camera_enabled
    }

    /// Frame visible to the current step's sensor reads.
    fn current_frame(&self) -> &ProximityFrame {
        let idx = self.steps_taken.saturating_sub(1).min(self.frames.len() - 1);
        &self.frames[idx]
    }
}

impl Platform for MockPlatform {
    fn enable_proximity(&mut self, _period_ms: u32) -> crate::error::Result<()> {
        self.proximity_enabled = true;
        Ok(())
    }

    fn enable_camera(&mut self, _period_ms: u32) -> crate::error::Result<()> {
        self.camera_enabled = true;
        Ok(())
    }

    fn proximity(&self, index: usize) -> f32 {
        self.current_frame()[index]
    }

    fn set_wheel_velocity(&mut self, wheel: Wheel, value: f32) {
        match wheel {
            Wheel::Left => self.left_velocity = value,
            Wheel::Right => self.right_velocity = value,
        }
        self.wheel_log.push((wheel, value));
    }

    fn indicator_count(&self) -> usize {
        self.indicator_count
    }

    fn set_indicator(&mut self, index: usize, on: bool) {
        if let Some(slot) = self.indicators.get_mut(index) {
            *slot = on;
        }
    }

    fn step(&mut self, duration_ms: u32) -> bool {
        if let Some(limit) = self.step_limit {
            if self.steps_taken >= limit {
                return false;
            }
        } else if self.steps_taken >= self.frames.len() {
            return false;
        }
        self.steps_taken += 1;
        self.clock += duration_ms as f64 / 1000.0;
        true
    }

    fn now(&self) -> f64 {
        self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAR: ProximityFrame = [0.0; PROXIMITY_COUNT];

    #[test]
    fn sentinel_fires_when_script_ends() {
        let mut platform = MockPlatform::scripted(vec![CLEAR; 3]);
        assert!(platform.step(64));
        assert!(platform.step(64));
        assert!(platform.step(64));
        assert!(!platform.step(64));
        assert_eq!(platform.steps_taken(), 3);
    }

    #[test]
    fn clock_advances_per_step() {
        let mut platform = MockPlatform::scripted(vec![CLEAR; 2]);
        assert_eq!(platform.now(), 0.0);
        platform.step(64);
        assert!((platform.now() - 0.064).abs() < 1e-12);
        platform.step(64);
        assert!((platform.now() - 0.128).abs() < 1e-12);
    }

    #[test]
    fn step_limit_repeats_last_frame() {
        let mut frame = CLEAR;
        frame[0] = 42.0;
        let mut platform = MockPlatform::scripted(vec![CLEAR, frame]).with_step_limit(5);
        for _ in 0..5 {
            assert!(platform.step(64));
        }
        assert!(!platform.step(64));
        assert_eq!(platform.proximity(0), 42.0);
    }

    #[test]
    fn frame_matches_the_step_just_taken() {
        let mut hot = CLEAR;
        hot[7] = 99.0;
        let mut platform = MockPlatform::scripted(vec![hot, CLEAR]);
        platform.step(64);
        assert_eq!(platform.proximity(7), 99.0);
        platform.step(64);
        assert_eq!(platform.proximity(7), 0.0);
    }

    #[test]
    fn indicator_writes_beyond_acquired_count_are_ignored() {
        let mut platform = MockPlatform::scripted(vec![CLEAR]).with_indicator_count(4);
        platform.set_indicator(2, true);
        platform.set_indicator(7, true);
        assert_eq!(platform.indicator_states(), &[false, false, true, false]);
    }
}
