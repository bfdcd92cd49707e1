use super::{
    add_shift, aggregate, load_history, save_daily_record, DailyRecord, DaySummary,
    KeyValueStore,
};
use crate::components::shift_calculator::WorkerShift;
use crate::error::{storage_error, TallyResult};
use chrono::{Local, NaiveDate};
use std::fmt;
use std::mem;
use tracing::{debug, info};

/// Where the session is in its edit/save cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Shifts are being accumulated
    Editing,
    /// The day was just saved; shifts are cleared
    Saved,
}

/// Owns the current day's shifts, the loaded history and the store
pub struct ShiftSession {
    shifts: Vec<WorkerShift>,
    history: Vec<DailyRecord>,
    store: Box<dyn KeyValueStore>,
    state: SessionState,
}

impl fmt::Debug for ShiftSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShiftSession")
            .field("shift_count", &self.shifts.len())
            .field("history_count", &self.history.len())
            .field("store", &self.store.name())
            .field("state", &self.state)
            .finish()
    }
}

impl ShiftSession {
    /// Start a session, loading the saved history from the store
    pub fn open(mut store: Box<dyn KeyValueStore>) -> Self {
        let history = load_history(store.as_mut());
        Self {
            shifts: Vec::new(),
            history,
            store,
            state: SessionState::Editing,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn shifts(&self) -> &[WorkerShift] {
        &self.shifts
    }

    pub fn history(&self) -> &[DailyRecord] {
        &self.history
    }

    /// Totals for the shifts entered so far
    pub fn summary(&self) -> DaySummary {
        aggregate(&self.shifts)
    }

    /// Add a shift to the current day
    pub fn add_shift(&mut self, shift: WorkerShift) {
        debug!("Adding shift: {:?}", shift);
        let shifts = mem::take(&mut self.shifts);
        self.shifts = add_shift(shifts, shift);
        self.state = SessionState::Editing;
    }

    /// Drop the current day's shifts without touching the history
    pub fn reset_current_day(&mut self) {
        info!("Resetting current day ({} shifts discarded)", self.shifts.len());
        self.shifts.clear();
        self.state = SessionState::Editing;
    }

    /// Save today's totals stamped with the local date
    pub fn save_daily_record(&mut self) -> TallyResult<&DailyRecord> {
        self.save_daily_record_on(Local::now().date_naive())
    }

    /// Save today's totals stamped with `date`
    ///
    /// On a store failure the history and shifts are left as they were.
    pub fn save_daily_record_on(&mut self, date: NaiveDate) -> TallyResult<&DailyRecord> {
        let today = self.summary();
        let updated = save_daily_record(self.store.as_mut(), &self.history, today, date)?;

        self.history = updated;
        self.shifts.clear();
        self.state = SessionState::Saved;

        // push_record always leaves the new record first
        self.history
            .first()
            .ok_or_else(|| storage_error("History empty after save"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::daily_record::{store::keys, InMemoryStore};
    use crate::components::shift_calculator::WorkerType;
    use crate::error::Error;

    /// Store whose writes always fail
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&mut self, _key: &str) -> TallyResult<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> TallyResult<()> {
            Err(storage_error("read-only"))
        }

        fn name(&self) -> &'static str {
            "read-only"
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn shift(count: u32) -> WorkerShift {
        WorkerShift::parse(WorkerType::Regular, "20:00", "06:00", count).unwrap()
    }

    #[test]
    fn test_save_clears_shifts_and_reset_keeps_history() {
        let mut session = ShiftSession::open(Box::new(InMemoryStore::new()));
        assert_eq!(session.state(), SessionState::Editing);

        session.add_shift(shift(2));
        session.add_shift(shift(1));
        assert_eq!(session.summary().total_workers, 3);

        let saved = session.save_daily_record_on(date(1)).unwrap().clone();
        assert_eq!(saved.date, "06/01");
        assert_eq!(saved.total_workers, 3);
        assert_eq!(session.state(), SessionState::Saved);
        assert!(session.shifts().is_empty());
        assert_eq!(session.history().len(), 1);

        session.add_shift(shift(4));
        assert_eq!(session.state(), SessionState::Editing);

        session.reset_current_day();
        assert!(session.shifts().is_empty());
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.state(), SessionState::Editing);
    }

    #[test]
    fn test_open_loads_existing_history() {
        let mut store = InMemoryStore::new();
        let record = DaySummary::default().into_record("02/14".to_string());
        store
            .set(keys::DAILY_RECORDS, &serde_json::to_string(&vec![record.clone()]).unwrap())
            .unwrap();

        let session = ShiftSession::open(Box::new(store));
        assert_eq!(session.history(), &[record]);
    }

    #[test]
    fn test_failed_save_keeps_state() {
        let mut session = ShiftSession::open(Box::new(ReadOnlyStore));
        session.add_shift(shift(2));

        let result = session.save_daily_record_on(date(3));
        assert!(matches!(result, Err(Error::Storage(_))));
        assert_eq!(session.shifts().len(), 1);
        assert!(session.history().is_empty());
        assert_eq!(session.state(), SessionState::Editing);
    }

    #[test]
    fn test_saving_an_empty_day() {
        let mut session = ShiftSession::open(Box::new(InMemoryStore::new()));
        let saved = session.save_daily_record_on(date(9)).unwrap();
        assert_eq!(saved.total_workers, 0);
        assert!(saved.regular_overtime.is_empty());
    }
}
