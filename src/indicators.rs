//! Status indicator (LED) patterns.
//!
//! Each status maps to a fixed 8-light binary pattern. Robots may have
//! acquired fewer indicators than that; whatever is available gets the
//! matching prefix of the pattern, and any indicator past the pattern
//! length is forced off.

use crate::engine::Status;
use crate::platform::Platform;

/// Length of a status pattern.
pub const PATTERN_LEN: usize = 8;

/// Indicator pattern for a status. `None` (no status yet, or a label the
/// display table does not know) switches everything off.
pub fn pattern(status: Option<Status>) -> [bool; PATTERN_LEN] {
    const ON: bool = true;
    const OFF: bool = false;
    match status {
        Some(Status::Go) => [ON, OFF, ON, OFF, ON, OFF, ON, OFF],
        Some(Status::Turning) => [ON, ON, ON, ON, OFF, OFF, OFF, OFF],
        Some(Status::Obstacle) => [ON; PATTERN_LEN],
        Some(Status::Goal) => [OFF, ON, OFF, ON, OFF, ON, OFF, ON],
        Some(Status::Stuck) => [ON, OFF, OFF, OFF, OFF, OFF, OFF, OFF],
        None => [OFF; PATTERN_LEN],
    }
}

/// Apply a status pattern to every indicator the platform acquired.
pub fn apply<P: Platform>(platform: &mut P, status: Option<Status>) {
    let pattern = pattern(status);
    for i in 0..platform.indicator_count() {
        let on = if i < PATTERN_LEN { pattern[i] } else { false };
        platform.set_indicator(i, on);
    }
}
