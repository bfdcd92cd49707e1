pub mod models;
pub mod session;
pub mod store;

pub use models::{DailyRecord, DaySummary, OvertimeBucket};
pub use session::{SessionState, ShiftSession};
pub use store::{FileStore, InMemoryStore, KeyValueStore, RedisStore};

use crate::components::shift_calculator::{
    compute_overtime_hours, compute_worked_hours, WorkerShift, WorkerType,
};
use crate::error::TallyResult;
use crate::utils::time::format_month_day;
use chrono::NaiveDate;
use store::keys;
use tracing::{info, warn};

/// Most records kept in the rolling history
pub const HISTORY_CAPACITY: usize = 7;

/// Append a shift to the current day's list
pub fn add_shift(mut current: Vec<WorkerShift>, shift: WorkerShift) -> Vec<WorkerShift> {
    current.push(shift);
    current
}

/// Aggregate the day's shifts into summary totals
pub fn aggregate(shifts: &[WorkerShift]) -> DaySummary {
    let mut summary = DaySummary::default();

    for shift in shifts {
        let count = shift.count();
        summary.total_workers = summary.total_workers.saturating_add(count);
        summary.total_hours += compute_worked_hours(shift) * f64::from(count);

        let overtime = compute_overtime_hours(shift);
        match shift.worker_type() {
            WorkerType::Regular => {
                let minutes = (overtime * 60.0).round() as u32;
                if minutes > 0 {
                    summary
                        .regular_overtime
                        .push(OvertimeBucket { count, minutes });
                }
            }
            WorkerType::Temp => {
                summary.temp_overtime += overtime * f64::from(count);
            }
        }
    }

    summary
}

/// Prepend a record, keeping at most `HISTORY_CAPACITY` entries
pub fn push_record(history: &[DailyRecord], record: DailyRecord) -> Vec<DailyRecord> {
    std::iter::once(record)
        .chain(history.iter().cloned())
        .take(HISTORY_CAPACITY)
        .collect()
}

/// Stamp today's aggregate with `date`, add it to the history and persist the result
pub fn save_daily_record(
    store: &mut dyn KeyValueStore,
    history: &[DailyRecord],
    today: DaySummary,
    date: NaiveDate,
) -> TallyResult<Vec<DailyRecord>> {
    let record = today.into_record(format_month_day(&date));
    let updated = push_record(history, record);

    let json = serde_json::to_string(&updated)?;
    store.set(keys::DAILY_RECORDS, &json)?;

    info!(
        "Saved daily record for {} to {} store ({} records kept)",
        format_month_day(&date),
        store.name(),
        updated.len()
    );
    Ok(updated)
}

/// Read the persisted history; anything missing or unreadable yields an empty list
pub fn load_history(store: &mut dyn KeyValueStore) -> Vec<DailyRecord> {
    let raw = match store.get(keys::DAILY_RECORDS) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!("No saved daily records in {} store", store.name());
            return Vec::new();
        }
        Err(e) => {
            warn!("Failed to read daily records: {}", e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<DailyRecord>>(&raw) {
        Ok(mut records) => {
            records.truncate(HISTORY_CAPACITY);
            info!("Loaded {} daily records", records.len());
            records
        }
        Err(e) => {
            warn!("Ignoring unparsable daily records: {}", e);
            Vec::new()
        }
    }
}
