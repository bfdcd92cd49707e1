use crate::error::{invalid_shift_error, Error, TallyResult};
use crate::utils::time::{format_clock_time, hhmm, parse_clock_time};
use chrono::NaiveTime;
use rust_i18n::t;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Worker classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkerType {
    /// Permanent staff (社員)
    #[default]
    Regular,
    /// Temporary / hourly staff (バイト)
    Temp,
}

impl WorkerType {
    /// Localized display label
    pub fn label(&self) -> String {
        match self {
            WorkerType::Regular => t!("worker_type_regular").to_string(),
            WorkerType::Temp => t!("worker_type_temp").to_string(),
        }
    }
}

impl FromStr for WorkerType {
    type Err = Error;

    /// Accepts the English and Japanese labels
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "regular" | "r" | "社員" => Ok(WorkerType::Regular),
            "temp" | "t" | "バイト" => Ok(WorkerType::Temp),
            other => Err(invalid_shift_error(&format!("Unknown worker type: {}", other))),
        }
    }
}

impl fmt::Display for WorkerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// One group of workers sharing a type and a continuous shift
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawWorkerShift")]
pub struct WorkerShift {
    #[serde(rename = "type")]
    worker_type: WorkerType,
    #[serde(with = "hhmm")]
    start_time: NaiveTime,
    #[serde(with = "hhmm")]
    end_time: NaiveTime,
    count: u32,
}

impl WorkerShift {
    /// Create a shift; `count` must be at least one
    pub fn new(
        worker_type: WorkerType,
        start_time: NaiveTime,
        end_time: NaiveTime,
        count: u32,
    ) -> TallyResult<Self> {
        if count == 0 {
            return Err(invalid_shift_error("Headcount must be at least 1"));
        }

        Ok(Self {
            worker_type,
            start_time,
            end_time,
            count,
        })
    }

    /// Create a shift from HH:MM strings
    pub fn parse(worker_type: WorkerType, start: &str, end: &str, count: u32) -> TallyResult<Self> {
        Self::new(
            worker_type,
            parse_clock_time(start)?,
            parse_clock_time(end)?,
            count,
        )
    }

    pub fn worker_type(&self) -> WorkerType {
        self.worker_type
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Format as e.g. `3人 社員: 20:00 - 05:00`
    pub fn format(&self) -> String {
        t!(
            "shift_line",
            count = self.count,
            worker_type = self.worker_type.label(),
            start = format_clock_time(&self.start_time),
            end = format_clock_time(&self.end_time)
        )
        .to_string()
    }
}

/// Unvalidated wire form, checked on the way in
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawWorkerShift {
    #[serde(rename = "type")]
    worker_type: WorkerType,
    #[serde(with = "hhmm")]
    start_time: NaiveTime,
    #[serde(with = "hhmm")]
    end_time: NaiveTime,
    count: u32,
}

impl TryFrom<RawWorkerShift> for WorkerShift {
    type Error = Error;

    fn try_from(raw: RawWorkerShift) -> Result<Self, Self::Error> {
        WorkerShift::new(raw.worker_type, raw.start_time, raw.end_time, raw.count)
    }
}
