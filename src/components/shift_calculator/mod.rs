//! Worked-hours and overtime arithmetic for a single shift entry.
//!
//! Shifts are interpreted on a nominal common date: an end time that is not
//! strictly after the start time belongs to the following day.

pub mod models;

pub use models::{WorkerShift, WorkerType};

use chrono::Duration;

/// Unpaid break deducted from every shift
pub const BREAK_HOURS: f64 = 1.0;

/// Worked hours per shift beyond which overtime accrues
pub const OVERTIME_THRESHOLD_HOURS: f64 = 8.0;

/// Time between the start and end of a shift, crossing midnight when needed
pub fn elapsed(shift: &WorkerShift) -> Duration {
    let elapsed = shift.end_time().signed_duration_since(shift.start_time());
    if elapsed <= Duration::zero() {
        elapsed + Duration::days(1)
    } else {
        elapsed
    }
}

/// Worked hours for one worker on this shift, after the break, never negative
pub fn compute_worked_hours(shift: &WorkerShift) -> f64 {
    let hours = elapsed(shift).num_minutes() as f64 / 60.0;
    (hours - BREAK_HOURS).max(0.0)
}

/// Hours beyond the per-shift threshold, never negative
pub fn compute_overtime_hours(shift: &WorkerShift) -> f64 {
    (compute_worked_hours(shift) - OVERTIME_THRESHOLD_HOURS).max(0.0)
}
