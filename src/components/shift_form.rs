use crate::components::shift_calculator::{WorkerShift, WorkerType};
use crate::error::{invalid_shift_error, invalid_time_error, TallyResult};
use crate::utils::time::{parse_clock_time, time_options};
use chrono::NaiveTime;
use std::ops::RangeInclusive;

/// Pickable start times, minutes since midnight (20:00 – 23:00)
pub const START_TIME_RANGE: (u32, u32) = (20 * 60, 23 * 60);

/// Pickable end times, minutes since midnight (04:30 – 07:00)
pub const END_TIME_RANGE: (u32, u32) = (4 * 60 + 30, 7 * 60);

/// Picker granularity in minutes
pub const TIME_STEP_MINUTES: u32 = 15;

/// Selectable headcounts
pub const HEADCOUNT_RANGE: RangeInclusive<u32> = 1..=25;

pub const DEFAULT_START_TIME: &str = "20:00";
pub const DEFAULT_END_TIME: &str = "05:00";

pub fn start_time_options() -> Vec<String> {
    time_options(START_TIME_RANGE.0, START_TIME_RANGE.1, TIME_STEP_MINUTES)
}

pub fn end_time_options() -> Vec<String> {
    time_options(END_TIME_RANGE.0, END_TIME_RANGE.1, TIME_STEP_MINUTES)
}

/// Entry form state; restricts input to the fixed option lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftForm {
    pub worker_type: WorkerType,
    pub start_time: String,
    pub end_time: String,
    pub count: u32,
}

impl Default for ShiftForm {
    fn default() -> Self {
        Self {
            worker_type: WorkerType::Regular,
            start_time: DEFAULT_START_TIME.to_string(),
            end_time: DEFAULT_END_TIME.to_string(),
            count: 1,
        }
    }
}

impl ShiftForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the defaults
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validate the current values and build a shift; the form resets on success
    pub fn submit(&mut self) -> TallyResult<WorkerShift> {
        let start = pick(&self.start_time, &start_time_options())?;
        let end = pick(&self.end_time, &end_time_options())?;

        if !HEADCOUNT_RANGE.contains(&self.count) {
            return Err(invalid_shift_error(&format!(
                "Headcount must be between {} and {}",
                HEADCOUNT_RANGE.start(),
                HEADCOUNT_RANGE.end()
            )));
        }

        let shift = WorkerShift::new(self.worker_type, start, end, self.count)?;
        self.reset();
        Ok(shift)
    }
}

/// Parse `value` and require it to be one of `options`
fn pick(value: &str, options: &[String]) -> TallyResult<NaiveTime> {
    let time = parse_clock_time(value)?;
    let normalized = time.format("%H:%M").to_string();

    if options.iter().any(|option| *option == normalized) {
        Ok(time)
    } else {
        Err(invalid_time_error(&format!(
            "{} is not one of {}",
            normalized,
            options.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_option_lists() {
        let start = start_time_options();
        assert_eq!(start.first().map(String::as_str), Some("20:00"));
        assert_eq!(start.last().map(String::as_str), Some("23:00"));

        let end = end_time_options();
        assert_eq!(end.first().map(String::as_str), Some("04:30"));
        assert_eq!(end.last().map(String::as_str), Some("07:00"));
    }

    #[test]
    fn test_submit_resets_form() {
        let mut form = ShiftForm {
            worker_type: WorkerType::Temp,
            start_time: "21:45".to_string(),
            end_time: "6:15".to_string(),
            count: 25,
        };

        let shift = form.submit().unwrap();
        assert_eq!(shift.worker_type(), WorkerType::Temp);
        assert_eq!(shift.count(), 25);
        assert_eq!(form, ShiftForm::default());
    }

    #[test]
    fn test_submit_rejects_off_grid_time() {
        let mut form = ShiftForm {
            start_time: "20:10".to_string(),
            ..ShiftForm::default()
        };
        assert!(matches!(form.submit(), Err(Error::InvalidTime(_))));
        // Values are kept for correction
        assert_eq!(form.start_time, "20:10");

        let mut form = ShiftForm {
            end_time: "08:00".to_string(),
            ..ShiftForm::default()
        };
        assert!(matches!(form.submit(), Err(Error::InvalidTime(_))));
    }

    #[test]
    fn test_submit_rejects_headcount_out_of_range() {
        let mut form = ShiftForm {
            count: 26,
            ..ShiftForm::default()
        };
        assert!(matches!(form.submit(), Err(Error::InvalidShift(_))));

        form.count = 0;
        assert!(matches!(form.submit(), Err(Error::InvalidShift(_))));
    }
}
