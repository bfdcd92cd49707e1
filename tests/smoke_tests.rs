use chrono::NaiveDate;
use shift_tally::components::daily_record::{
    aggregate, load_history, save_daily_record, InMemoryStore, OvertimeBucket,
};
use shift_tally::components::shift_calculator::{
    compute_overtime_hours, compute_worked_hours, WorkerShift, WorkerType,
};
use shift_tally::config::{Config, StorageBackend};

fn regular(start: &str, end: &str, count: u32) -> WorkerShift {
    WorkerShift::parse(WorkerType::Regular, start, end, count).unwrap()
}

fn temp(start: &str, end: &str, count: u32) -> WorkerShift {
    WorkerShift::parse(WorkerType::Temp, start, end, count).unwrap()
}

/// Smoke test to verify the default config
#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.storage_backend, StorageBackend::File);
    assert_eq!(config.redis_url, "redis://127.0.0.1:6379");
    assert_eq!(config.locale, "en");
}

/// Every equal start/end pair wraps to a full day
#[test]
fn test_equal_times_give_23_hours() {
    for hour in 0..24 {
        let time = format!("{:02}:15", hour);
        assert_eq!(compute_worked_hours(&regular(&time, &time, 1)), 23.0);
    }
}

/// Default form values make exactly one 8-hour shift
#[test]
fn test_default_shift_is_eight_hours() {
    let shift = regular("20:00", "05:00", 1);
    assert_eq!(compute_worked_hours(&shift), 8.0);
    assert_eq!(compute_overtime_hours(&shift), 0.0);
}

/// Overtime is zero for every pickable shift of at most 8 worked hours
#[test]
fn test_no_overtime_up_to_eight_hours() {
    let starts = shift_tally::components::shift_form::start_time_options();
    let ends = shift_tally::components::shift_form::end_time_options();

    for start in &starts {
        for end in &ends {
            let shift = temp(start, end, 1);
            let worked = compute_worked_hours(&shift);
            let overtime = compute_overtime_hours(&shift);
            assert!(worked >= 0.0);
            if worked <= 8.0 {
                assert_eq!(overtime, 0.0, "{} - {}", start, end);
            } else {
                assert_eq!(overtime, worked - 8.0, "{} - {}", start, end);
            }
        }
    }
}

/// A typical night with both worker types
#[test]
fn test_typical_night() {
    let shifts = vec![
        regular("20:00", "05:00", 10),
        regular("20:00", "06:30", 2),
        temp("21:00", "06:00", 5),
        temp("20:00", "07:00", 3),
    ];

    let summary = aggregate(&shifts);
    assert_eq!(summary.total_workers, 20);
    assert_eq!(summary.total_hours, 80.0 + 19.0 + 40.0 + 30.0);
    assert_eq!(
        summary.regular_overtime,
        vec![OvertimeBucket {
            count: 2,
            minutes: 90
        }]
    );
    assert_eq!(summary.temp_overtime, 6.0);
}

/// Saving then loading returns the same records
#[test]
fn test_persist_round_trip() {
    let mut store = InMemoryStore::new();
    let date = NaiveDate::from_ymd_opt(2024, 11, 30).unwrap();

    let history = save_daily_record(
        &mut store,
        &[],
        aggregate(&[regular("20:15", "06:45", 4), temp("22:00", "04:30", 1)]),
        date,
    )
    .unwrap();

    assert_eq!(history[0].date, "11/30");
    assert_eq!(load_history(&mut store), history);
}
