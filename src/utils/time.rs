use crate::error::{invalid_time_error, TallyResult};
use chrono::{Datelike, NaiveDate, NaiveTime};

/// Parse time string in HH:MM format
pub fn parse_time(time_str: &str) -> Option<(u32, u32)> {
    let parts: Vec<&str> = time_str.trim().split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    let hour = parts[0].parse::<u32>().ok()?;
    let minute = parts[1].parse::<u32>().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// Parse an HH:MM string into a time of day
pub fn parse_clock_time(time_str: &str) -> TallyResult<NaiveTime> {
    parse_time(time_str)
        .and_then(|(hour, minute)| NaiveTime::from_hms_opt(hour, minute, 0))
        .ok_or_else(|| invalid_time_error(&format!("'{}' is not a valid HH:MM time", time_str)))
}

/// Format a time of day as HH:MM
pub fn format_clock_time(time: &NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Generate HH:MM labels from `start` to `end` (inclusive), in minutes since midnight
pub fn time_options(start: u32, end: u32, interval: u32) -> Vec<String> {
    if interval == 0 {
        return Vec::new();
    }

    (start..=end)
        .step_by(interval as usize)
        .map(|minutes| format!("{:02}:{:02}", minutes / 60, minutes % 60))
        .collect()
}

/// Format decimal hours as e.g. `8h05min`
pub fn format_hours(hours: f64) -> String {
    let total_minutes = (hours.max(0.0) * 60.0).round() as u64;
    format!("{}h{:02}min", total_minutes / 60, total_minutes % 60)
}

/// Month/day stamp used on saved records (`MM/DD`)
pub fn format_month_day(date: &NaiveDate) -> String {
    format!("{:02}/{:02}", date.month(), date.day())
}

/// Serde adapter storing a `NaiveTime` as `"HH:MM"`
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_clock_time(time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_clock_time(&raw).map_err(de::Error::custom)
    }
}
