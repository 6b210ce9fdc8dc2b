//! Acetal Calendar - month layout and hour-slot scheduling model.
//!
//! Core concepts:
//! - **CalendarCursor**: the (year, month) pair currently displayed
//! - **DayGrid**: the Sunday-first week layout derived from a cursor
//! - **TaskBlock**: a saved task's label, duration and color
//! - **DaySchedule**: 24 hour slots for one date, each holding at most one task
//! - **Shape**: what a slot's drawing surface shows, derived from its task
//!
//! # Example
//!
//! ```
//! use acetal_cal::{CalendarCursor, DaySchedule, Rgb, TaskForm};
//!
//! let cursor = CalendarCursor::initial();
//! assert_eq!(cursor.label(), "May 2024");
//!
//! let date = cursor.date(15).unwrap();
//! let mut schedule = DaySchedule::new(date);
//! let form = TaskForm::new("Standup", "1", Rgb::new(0x33, 0x99, 0xff));
//! schedule.assign(9, form.submit().unwrap()).unwrap();
//! assert_eq!(schedule.slot(9).unwrap().surface().len(), 2);
//! ```

mod color;
mod cursor;
mod error;
mod grid;
mod schedule;
mod surface;
mod task;

pub use color::Rgb;
pub use cursor::{CalendarCursor, INITIAL_MONTH, INITIAL_YEAR};
pub use error::CalError;
pub use grid::{DayGrid, Week, WEEKDAY_LABELS};
pub use schedule::{DaySchedule, HOURS_PER_DAY, ScheduleSlot, SlotRef, hour_label};
pub use surface::{ROW_HEIGHT, SURFACE_WIDTH, Shape};
pub use task::{TaskBlock, TaskForm};

/// Formats a date the way the schedule windows title it (`YYYY-MM-DD`).
pub fn format_date(date: chrono::NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
