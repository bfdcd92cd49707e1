use crate::utils::time::format_hours;
use rust_i18n::t;
use serde::{Deserialize, Serialize};

/// Overtime of one Regular shift entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeBucket {
    /// Headcount of the shift entry
    pub count: u32,
    /// Overtime per worker, in whole minutes
    pub minutes: u32,
}

/// Aggregate of the shifts entered for the current day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub total_workers: u32,
    /// Sum of worked hours over all workers
    pub total_hours: f64,
    /// Per-entry overtime of Regular shifts, insertion order, zero entries dropped
    pub regular_overtime: Vec<OvertimeBucket>,
    /// Total overtime hours of Temp workers
    pub temp_overtime: f64,
}

impl DaySummary {
    /// Stamp a date onto the aggregate
    pub fn into_record(self, date: String) -> DailyRecord {
        DailyRecord {
            date,
            total_workers: self.total_workers,
            total_hours: self.total_hours,
            regular_overtime: self.regular_overtime,
            temp_overtime: self.temp_overtime,
        }
    }

    /// Localized summary lines for display
    pub fn format_lines(&self) -> Vec<String> {
        vec![
            t!("summary_total_workers", workers = self.total_workers).to_string(),
            t!("summary_total_hours", hours = format_hours(self.total_hours)).to_string(),
            t!(
                "summary_regular_overtime",
                overtime = format_overtime_buckets(&self.regular_overtime)
            )
            .to_string(),
            t!(
                "summary_temp_overtime",
                overtime = format_hours(self.temp_overtime)
            )
            .to_string(),
        ]
    }
}

/// Saved snapshot of one day's aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    /// `MM/DD`
    pub date: String,
    pub total_workers: u32,
    pub total_hours: f64,
    pub regular_overtime: Vec<OvertimeBucket>,
    pub temp_overtime: f64,
}

impl DailyRecord {
    /// Format as a single history line
    pub fn format(&self) -> String {
        t!(
            "history_line",
            date = &self.date,
            workers = self.total_workers,
            hours = format_hours(self.total_hours),
            regular_overtime = format_overtime_buckets(&self.regular_overtime),
            temp_overtime = format_hours(self.temp_overtime)
        )
        .to_string()
    }
}

/// Format Regular overtime as e.g. `3人 60min, 1人 15min`
pub fn format_overtime_buckets(buckets: &[OvertimeBucket]) -> String {
    if buckets.is_empty() {
        return t!("overtime_none").to_string();
    }

    buckets
        .iter()
        .map(|bucket| {
            t!(
                "overtime_bucket",
                count = bucket.count,
                minutes = bucket.minutes
            )
            .to_string()
        })
        .collect::<Vec<_>>()
        .join(", ")
}
