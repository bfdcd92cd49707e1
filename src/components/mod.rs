// Export components
pub mod daily_record;
pub mod shift_calculator;
pub mod shift_form;

// Re-export the types most callers need
pub use daily_record::{DailyRecord, DaySummary, ShiftSession};
pub use shift_calculator::{WorkerShift, WorkerType};
